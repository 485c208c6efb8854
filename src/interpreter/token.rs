use std::fmt;

/// A location in the source text.
///
/// `line` and `column` are 1-based and meant for humans. `index` is the
/// 0-based offset counted in characters from the start of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// 1-based line number.
    pub line:   usize,
    /// 1-based column number.
    pub column: usize,
    /// 0-based character offset.
    pub index:  usize,
}

impl Position {
    /// The position of the first character of any input.
    pub const START: Self = Self { line:   1,
                                   column: 1,
                                   index:  0, };

    /// Moves the position past `ch`. A newline starts a new line at column 1.
    ///
    /// # Example
    /// ```
    /// use nepdai::interpreter::token::Position;
    ///
    /// let mut position = Position::START;
    /// position.advance('a');
    /// position.advance('\n');
    ///
    /// assert_eq!((position.line, position.column, position.index), (2, 1, 2));
    /// ```
    pub const fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.index += 1;
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The closed set of token categories produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Numeric literal such as `42` or `3.14`.
    Number,
    /// String literal delimited by `"` or `'`.
    Str,
    /// Any name that is not a keyword.
    Identifier,

    /// `solti`, declares a variable.
    Solti,
    /// `yadi`, starts an if statement.
    Yadi,
    /// `bhane`, separates an if condition from its branch.
    Bhane,
    /// `natra`, introduces the else branch.
    Natra,
    /// `lekh`, the print statement.
    Lekh,
    /// `padh`, reserved for reading input.
    Padh,
    /// `thik`, boolean true.
    Thik,
    /// `galat`, boolean false.
    Galat,
    /// `khali`, the null value.
    Khali,
    /// `jaba samma`, starts a while loop.
    JabaSamma,
    /// `vai vayo rokki`, breaks out of a loop.
    VaiVayoRokki,
    /// `aghi badh vai`, continues with the next loop iteration.
    AghiBadhVai,

    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `**`
    StarStar,
    /// `=`
    Assign,
    /// `+=`
    PlusAssign,
    /// `-=`
    MinusAssign,
    /// `*=`
    StarAssign,
    /// `/=`
    SlashAssign,
    /// `==`
    EqualEqual,
    /// `!=`
    BangEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,
    /// `!`
    Bang,
    /// `++`
    PlusPlus,
    /// `--`
    MinusMinus,

    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `:`
    Colon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,

    /// A line break outside of any other token.
    Newline,
    /// End of input. Always the last token of a sequence.
    Eof,
}

impl TokenKind {
    /// Human readable description used in parse errors.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Str => "string",
            Self::Identifier => "identifier",
            Self::Solti => "'solti'",
            Self::Yadi => "'yadi'",
            Self::Bhane => "'bhane'",
            Self::Natra => "'natra'",
            Self::Lekh => "'lekh'",
            Self::Padh => "'padh'",
            Self::Thik => "'thik'",
            Self::Galat => "'galat'",
            Self::Khali => "'khali'",
            Self::JabaSamma => "'jaba samma'",
            Self::VaiVayoRokki => "'vai vayo rokki'",
            Self::AghiBadhVai => "'aghi badh vai'",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Percent => "'%'",
            Self::StarStar => "'**'",
            Self::Assign => "'='",
            Self::PlusAssign => "'+='",
            Self::MinusAssign => "'-='",
            Self::StarAssign => "'*='",
            Self::SlashAssign => "'/='",
            Self::EqualEqual => "'=='",
            Self::BangEqual => "'!='",
            Self::Less => "'<'",
            Self::Greater => "'>'",
            Self::LessEqual => "'<='",
            Self::GreaterEqual => "'>='",
            Self::AndAnd => "'&&'",
            Self::OrOr => "'||'",
            Self::Bang => "'!'",
            Self::PlusPlus => "'++'",
            Self::MinusMinus => "'--'",
            Self::Semicolon => "';'",
            Self::Comma => "','",
            Self::Dot => "'.'",
            Self::Colon => "':'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::Newline => "newline",
            Self::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// The decoded payload of a literal or identifier token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// Parsed numeric literal.
    Number(f64),
    /// String literal with escapes already decoded.
    Str(String),
    /// Identifier text.
    Name(String),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) | Self::Name(s) => f.write_str(s),
        }
    }
}

/// A classified piece of source text. Tokens are never modified after the
/// lexer produces them.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token category.
    pub kind:     TokenKind,
    /// Decoded literal or identifier name, when the kind carries one.
    pub value:    Option<TokenValue>,
    /// Source form of the token. String literals are re-encoded with their
    /// escapes; the end-of-input token has an empty lexeme.
    pub lexeme:   String,
    /// Where the token starts.
    pub position: Position,
}

impl Token {
    /// Creates the end-of-input token.
    #[must_use]
    pub const fn eof(position: Position) -> Self {
        Self { kind: TokenKind::Eof,
               value: None,
               lexeme: String::new(),
               position }
    }

    /// The numeric payload of a `Number` token.
    #[must_use]
    pub fn number(&self) -> Option<f64> {
        match self.value {
            Some(TokenValue::Number(n)) => Some(n),
            _ => None,
        }
    }

    /// The text payload of a `Str` or `Identifier` token.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            Some(TokenValue::Str(s) | TokenValue::Name(s)) => Some(s),
            _ => None,
        }
    }

    /// Describes the token for error messages, preferring its source text.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof | TokenKind::Newline => self.kind.describe().to_string(),
            _ if self.lexeme.is_empty() => self.kind.describe().to_string(),
            _ => format!("'{}'", self.lexeme),
        }
    }
}
