/// Magnitude from which numbers are written in exponent notation.
const EXPONENT_ABOVE: f64 = 1e21;
/// Magnitude below which non-zero numbers are written in exponent notation.
const EXPONENT_BELOW: f64 = 1e-6;

/// Formats a number the way `lekh` prints it.
///
/// Integral values print without a fractional part, `-0` prints as `0`, and
/// non-finite values print as `NaN`, `Infinity` or `-Infinity`. Magnitudes of
/// at least `1e21` or below `1e-6` use exponent notation with an explicit
/// sign, e.g. `1e+21` and `1.5e-7`.
///
/// # Parameters
/// - `n`: The number to format.
///
/// # Returns
/// The display text of `n`.
///
/// # Example
/// ```
/// use nepdai::interpreter::value::number::format_number;
///
/// assert_eq!(format_number(5.0), "5");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// ```
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if (EXPONENT_BELOW..EXPONENT_ABOVE).contains(&magnitude) {
        return format!("{n}");
    }

    let text = format!("{n:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        },
        _ => text,
    }
}
