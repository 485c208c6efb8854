use crate::interpreter::token::{Position, TokenKind};

/// The root of every syntax tree: the top-level statements of one program in
/// source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements.
    pub body: Vec<Statement>,
}

/// Represents a literal value written directly in source code.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A numeric literal such as `42` or `0.5`.
    Number(f64),
    /// A string literal with escapes decoded.
    Str(String),
    /// `thik` or `galat`.
    Bool(bool),
    /// `khali`.
    Null,
}

/// A statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `solti name = value;` with an optional initializer.
    VariableDeclaration {
        /// The declared name.
        name:     String,
        /// The initializer, if any. A missing initializer binds `khali`.
        value:    Option<Expr>,
        /// Position of the `solti` keyword.
        position: Position,
    },
    /// An expression evaluated for its value or side effects.
    Expression {
        /// The expression.
        expr: Expr,
    },
    /// `lekh a, b, c;`
    Print {
        /// The values to print, in order.
        arguments: Vec<Expr>,
        /// Position of the `lekh` keyword.
        position:  Position,
    },
    /// `yadi test bhane consequent natra alternate`
    If {
        /// The condition.
        test:       Expr,
        /// Statement run when the condition is truthy.
        consequent: Box<Self>,
        /// Statement run otherwise, if present.
        alternate:  Option<Box<Self>>,
    },
    /// `jaba samma test body`
    While {
        /// The loop condition, re-evaluated before every iteration.
        test: Expr,
        /// The loop body.
        body: Box<Self>,
    },
    /// `{ ... }`, which opens a new scope.
    Block {
        /// The statements of the block.
        body: Vec<Self>,
    },
    /// `vai vayo rokki;`
    Break {
        /// Position of the keyword.
        position: Position,
    },
    /// `aghi badh vai;`
    Continue {
        /// Position of the keyword.
        position: Position,
    },
}

/// An expression node. Every expression remembers where it starts so runtime
/// errors can point back into the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `left op right`
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator.
        position: Position,
    },
    /// `-operand` or `!operand`
    Unary {
        /// The operator.
        op:       UnaryOperator,
        /// The operand.
        operand:  Box<Self>,
        /// Position of the operator.
        position: Position,
    },
    /// `target++` or `target--`.
    Update {
        /// The operator.
        op:       UpdateOperator,
        /// The updated variable. Must be an identifier at runtime.
        target:   Box<Self>,
        /// Whether the new value (prefix) or the old value (postfix) is the
        /// result. The grammar only produces postfix updates.
        prefix:   bool,
        /// Position of the operator.
        position: Position,
    },
    /// `target = value` and the compound forms.
    Assignment {
        /// The assigned variable. Must be an identifier at runtime.
        target:   Box<Self>,
        /// The operator.
        op:       AssignmentOperator,
        /// The right-hand side.
        value:    Box<Self>,
        /// Position of the operator.
        position: Position,
    },
    /// `callee(arguments)`
    Call {
        /// The called expression.
        callee:    Box<Self>,
        /// The arguments, in order.
        arguments: Vec<Self>,
        /// Position of the opening parenthesis.
        position:  Position,
    },
    /// A literal constant.
    Literal {
        /// The constant.
        value:    LiteralValue,
        /// Position of the literal.
        position: Position,
    },
    /// A variable reference.
    Identifier {
        /// The variable name.
        name:     String,
        /// Position of the name.
        position: Position,
    },
    /// `[a, b, c]`
    Array {
        /// The element expressions.
        elements: Vec<Self>,
        /// Position of the opening bracket.
        position: Position,
    },
}

impl Expr {
    /// Gets the source position of `self`.
    /// ## Example
    /// ```
    /// use nepdai::{ast::Expr, interpreter::token::Position};
    ///
    /// let position = Position { line:   3,
    ///                           column: 7,
    ///                           index:  20, };
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               position };
    ///
    /// assert_eq!(expr.position(), position);
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Binary { position, .. }
            | Self::Unary { position, .. }
            | Self::Update { position, .. }
            | Self::Assignment { position, .. }
            | Self::Call { position, .. }
            | Self::Literal { position, .. }
            | Self::Identifier { position, .. }
            | Self::Array { position, .. } => *position,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
    /// Exponentiation (`**`)
    Pow,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

impl BinaryOperator {
    /// Maps an operator token to its binary operator.
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        let op = match kind {
            TokenKind::Plus => Self::Add,
            TokenKind::Minus => Self::Sub,
            TokenKind::Star => Self::Mul,
            TokenKind::Slash => Self::Div,
            TokenKind::Percent => Self::Mod,
            TokenKind::StarStar => Self::Pow,
            TokenKind::EqualEqual => Self::Equal,
            TokenKind::BangEqual => Self::NotEqual,
            TokenKind::Less => Self::Less,
            TokenKind::Greater => Self::Greater,
            TokenKind::LessEqual => Self::LessEqual,
            TokenKind::GreaterEqual => Self::GreaterEqual,
            TokenKind::AndAnd => Self::And,
            TokenKind::OrOr => Self::Or,
            _ => return None,
        };
        Some(op)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "**",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::And => "&&",
            Self::Or => "||",
        };
        write!(f, "{operator}")
    }
}

/// Represents a prefix unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}

/// `++` or `--`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UpdateOperator {
    /// `++`
    Increment,
    /// `--`
    Decrement,
}

impl std::fmt::Display for UpdateOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Increment => write!(f, "++"),
            Self::Decrement => write!(f, "--"),
        }
    }
}

/// Plain and compound assignment operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AssignmentOperator {
    /// `=`
    Assign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `*=`
    MulAssign,
    /// `/=`
    DivAssign,
}

impl AssignmentOperator {
    /// Maps an operator token to its assignment operator.
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        let op = match kind {
            TokenKind::Assign => Self::Assign,
            TokenKind::PlusAssign => Self::AddAssign,
            TokenKind::MinusAssign => Self::SubAssign,
            TokenKind::StarAssign => Self::MulAssign,
            TokenKind::SlashAssign => Self::DivAssign,
            _ => return None,
        };
        Some(op)
    }

    /// The binary operation a compound assignment applies, or `None` for
    /// plain `=`.
    ///
    /// # Example
    /// ```
    /// use nepdai::ast::{AssignmentOperator, BinaryOperator};
    ///
    /// assert_eq!(AssignmentOperator::MulAssign.binary(), Some(BinaryOperator::Mul));
    /// assert_eq!(AssignmentOperator::Assign.binary(), None);
    /// ```
    #[must_use]
    pub const fn binary(self) -> Option<BinaryOperator> {
        match self {
            Self::Assign => None,
            Self::AddAssign => Some(BinaryOperator::Add),
            Self::SubAssign => Some(BinaryOperator::Sub),
            Self::MulAssign => Some(BinaryOperator::Mul),
            Self::DivAssign => Some(BinaryOperator::Div),
        }
    }
}

impl std::fmt::Display for AssignmentOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
        };
        write!(f, "{operator}")
    }
}
