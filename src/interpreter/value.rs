/// The runtime `Value` type with its truthiness, equality and display rules.
pub mod core;

/// Rendering of numbers as display text.
///
/// Numbers print in their shortest round-tripping decimal form, switching to
/// exponent notation for very large and very small magnitudes.
pub mod number;
