use logos::Logos;

use crate::{
    error::LexError,
    interpreter::token::{Position, Token, TokenKind, TokenValue},
};

/// The phrase every program file must open with.
pub const ENTRY_MARKER: &str = "Namaste Dai";

/// Keywords spelled as several words. Each entry is tried before the first
/// word is classified on its own.
const PHRASES: &[(&str, TokenKind)] = &[("jaba samma", TokenKind::JabaSamma),
                                        ("vai vayo rokki", TokenKind::VaiVayoRokki),
                                        ("aghi badh vai", TokenKind::AghiBadhVai)];

/// Failure reasons reported by the scanner callbacks.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// No pattern matches the current character.
    #[default]
    UnexpectedCharacter,
    /// A string literal has no closing delimiter.
    UnterminatedString,
}

/// The raw lexical units recognized by the scanner before positions and
/// lexemes are attached.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexErrorKind)]
enum Lexeme {
    /// Spaces, tabs, carriage returns and form feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks are kept so the parser can skip them explicitly.
    #[token("\n")]
    Newline,
    /// Numeric literals such as `7` or `3.14`. A trailing `.` without digits
    /// is not part of the number.
    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),
    /// String literals in double or single quotes.
    #[token("\"", lex_string)]
    #[token("'", lex_string)]
    Str(String),
    /// Identifiers, keywords and multi-word keyword phrases.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", lex_word)]
    Word(TokenKind),
    /// Operators and punctuation. Two-character operators win over their
    /// one-character prefixes.
    #[token("++", |_| TokenKind::PlusPlus)]
    #[token("--", |_| TokenKind::MinusMinus)]
    #[token("+=", |_| TokenKind::PlusAssign)]
    #[token("-=", |_| TokenKind::MinusAssign)]
    #[token("*=", |_| TokenKind::StarAssign)]
    #[token("/=", |_| TokenKind::SlashAssign)]
    #[token("**", |_| TokenKind::StarStar)]
    #[token("==", |_| TokenKind::EqualEqual)]
    #[token("!=", |_| TokenKind::BangEqual)]
    #[token("<=", |_| TokenKind::LessEqual)]
    #[token(">=", |_| TokenKind::GreaterEqual)]
    #[token("&&", |_| TokenKind::AndAnd)]
    #[token("||", |_| TokenKind::OrOr)]
    #[token("+", |_| TokenKind::Plus)]
    #[token("-", |_| TokenKind::Minus)]
    #[token("*", |_| TokenKind::Star)]
    #[token("/", |_| TokenKind::Slash)]
    #[token("%", |_| TokenKind::Percent)]
    #[token("=", |_| TokenKind::Assign)]
    #[token("<", |_| TokenKind::Less)]
    #[token(">", |_| TokenKind::Greater)]
    #[token("!", |_| TokenKind::Bang)]
    #[token(";", |_| TokenKind::Semicolon)]
    #[token(",", |_| TokenKind::Comma)]
    #[token(".", |_| TokenKind::Dot)]
    #[token(":", |_| TokenKind::Colon)]
    #[token("(", |_| TokenKind::LParen)]
    #[token(")", |_| TokenKind::RParen)]
    #[token("{", |_| TokenKind::LBrace)]
    #[token("}", |_| TokenKind::RBrace)]
    #[token("[", |_| TokenKind::LBracket)]
    #[token("]", |_| TokenKind::RBracket)]
    Symbol(TokenKind),
}

/// Scans the body of a string literal whose opening delimiter has just been
/// matched.
///
/// Escapes `\n`, `\t`, `\r`, `\\`, `\"` and `\'` are decoded; any other
/// escaped character stands for itself. On success the lexer is advanced past
/// the closing delimiter.
///
/// # Parameters
/// - `lex`: The lexer positioned right after the opening quote.
///
/// # Returns
/// - `Ok(String)`: The decoded contents.
/// - `Err(LexErrorKind::UnterminatedString)`: Input ended first.
fn lex_string(lex: &mut logos::Lexer<Lexeme>) -> Result<String, LexErrorKind> {
    let delimiter = if lex.slice() == "'" { '\'' } else { '"' };
    let mut value = String::new();
    let mut chars = lex.remainder().char_indices();

    while let Some((offset, ch)) = chars.next() {
        if ch == delimiter {
            lex.bump(offset + ch.len_utf8());
            return Ok(value);
        }
        if ch == '\\' {
            let Some((_, escaped)) = chars.next() else {
                break;
            };
            value.push(unescape(escaped));
        } else {
            value.push(ch);
        }
    }

    Err(LexErrorKind::UnterminatedString)
}

const fn unescape(ch: char) -> char {
    match ch {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        other => other,
    }
}

/// Re-encodes decoded string contents so the lexeme reads like source text.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Classifies a word, first trying to extend it into a multi-word keyword.
///
/// A phrase matches when its words follow the current one separated by
/// spaces or tabs (never a newline) and the last word is not itself the
/// prefix of a longer identifier. When no phrase matches, nothing beyond the
/// current word is consumed.
fn lex_word(lex: &mut logos::Lexer<Lexeme>) -> TokenKind {
    let word = lex.slice();

    for (phrase, kind) in PHRASES {
        let mut words = phrase.split(' ');
        if words.next() != Some(word) {
            continue;
        }
        if let Some(length) = match_phrase_tail(lex.remainder(), words) {
            lex.bump(length);
            return *kind;
        }
    }

    keyword(word).unwrap_or(TokenKind::Identifier)
}

/// Returns how many bytes of `rest` the remaining phrase `words` span, or
/// `None` when they are not there.
fn match_phrase_tail<'w>(rest: &str, words: impl Iterator<Item = &'w str>) -> Option<usize> {
    let mut consumed = 0;

    for word in words {
        let tail = rest.get(consumed..)?;
        let trimmed = tail.trim_start_matches(is_inline_space);
        let gap = tail.len() - trimmed.len();
        if gap == 0 || !trimmed.starts_with(word) {
            return None;
        }
        consumed += gap + word.len();
    }

    match rest.get(consumed..)?.chars().next() {
        Some(ch) if is_identifier_char(ch) => None,
        _ => Some(consumed),
    }
}

const fn is_inline_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\x0c')
}

const fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Looks up a single-word keyword.
fn keyword(word: &str) -> Option<TokenKind> {
    let kind = match word {
        "solti" => TokenKind::Solti,
        "yadi" => TokenKind::Yadi,
        "bhane" => TokenKind::Bhane,
        "natra" => TokenKind::Natra,
        "lekh" => TokenKind::Lekh,
        "padh" => TokenKind::Padh,
        "thik" => TokenKind::Thik,
        "galat" => TokenKind::Galat,
        "khali" => TokenKind::Khali,
        _ => return None,
    };
    Some(kind)
}

/// The canonical spelling of a multi-word keyword.
fn phrase_text(kind: TokenKind) -> Option<&'static str> {
    PHRASES.iter()
           .find(|(_, candidate)| *candidate == kind)
           .map(|(phrase, _)| *phrase)
}

/// Converts byte offsets reported by the scanner into line/column positions.
///
/// Offsets only ever move forward, so every character is visited once.
struct Cursor<'s> {
    source:   &'s str,
    offset:   usize,
    position: Position,
}

impl<'s> Cursor<'s> {
    const fn new(source: &'s str) -> Self {
        Self { source,
               offset: 0,
               position: Position::START }
    }

    fn seek(&mut self, offset: usize) -> Position {
        if let Some(skipped) = self.source.get(self.offset..offset) {
            for ch in skipped.chars() {
                self.position.advance(ch);
            }
            self.offset = offset;
        }
        self.position
    }
}

/// Builds the public token for one scanned lexeme. Whitespace and comments
/// are skipped by the scanner and never become tokens.
fn make_token(lexeme: Lexeme, slice: &str, position: Position) -> Option<Token> {
    let (kind, value, text) = match lexeme {
        Lexeme::Number(n) => (TokenKind::Number, Some(TokenValue::Number(n)), slice.to_string()),
        Lexeme::Str(s) => {
            let delimiter = &slice[..1];
            let text = format!("{delimiter}{}{delimiter}", escape(&s));
            (TokenKind::Str, Some(TokenValue::Str(s)), text)
        },
        Lexeme::Word(TokenKind::Identifier) => {
            (TokenKind::Identifier, Some(TokenValue::Name(slice.to_string())), slice.to_string())
        },
        Lexeme::Word(kind) => {
            let text = phrase_text(kind).unwrap_or(slice);
            (kind, None, text.to_string())
        },
        Lexeme::Symbol(kind) => (kind, None, slice.to_string()),
        Lexeme::Newline => (TokenKind::Newline, None, "\\n".to_string()),
        Lexeme::Ignored | Lexeme::Comment => return None,
    };

    Some(Token { kind,
                 value,
                 lexeme: text,
                 position })
}

/// Splits source text into tokens.
///
/// When `require_entry_marker` is set, the input must start with
/// [`ENTRY_MARKER`] after any leading whitespace; the marker itself produces
/// no token. Scanning stops at the first unrecognized character or
/// unterminated string. The returned sequence always ends with exactly one
/// [`TokenKind::Eof`] token.
///
/// # Errors
/// - [`LexError::MissingEntryMarker`] when the marker is required but absent.
/// - [`LexError::UnterminatedString`] at the opening quote of a string that
///   never closes.
/// - [`LexError::UnexpectedCharacter`] at a character no token starts with.
///
/// # Example
/// ```
/// use nepdai::interpreter::{lexer::tokenize, token::TokenKind};
///
/// let tokens = tokenize("Namaste Dai\nsolti x = 1;", true).unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Newline,
///             TokenKind::Solti,
///             TokenKind::Identifier,
///             TokenKind::Assign,
///             TokenKind::Number,
///             TokenKind::Semicolon,
///             TokenKind::Eof]);
/// ```
#[tracing::instrument(level = "trace", skip_all)]
pub fn tokenize(source: &str, require_entry_marker: bool) -> Result<Vec<Token>, LexError> {
    let mut cursor = Cursor::new(source);
    let mut start = 0;

    if require_entry_marker {
        start = source.len() - source.trim_start().len();
        let position = cursor.seek(start);
        if !source[start..].starts_with(ENTRY_MARKER) {
            return Err(LexError::MissingEntryMarker { position });
        }
        start += ENTRY_MARKER.len();
    }

    let body = &source[start..];
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(body);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let position = cursor.seek(start + span.start);
        match result {
            Ok(lexeme) => tokens.extend(make_token(lexeme, lexer.slice(), position)),
            Err(LexErrorKind::UnterminatedString) => {
                return Err(LexError::UnterminatedString { position });
            },
            Err(LexErrorKind::UnexpectedCharacter) => {
                let character = lexer.slice().chars().next().unwrap_or('\0');
                return Err(LexError::UnexpectedCharacter { character, position });
            },
        }
    }

    tokens.push(Token::eof(cursor.seek(source.len())));
    tracing::debug!(count = tokens.len(), "tokenized source");

    Ok(tokens)
}
