use nepdai::{
    ast::{Expr, LiteralValue, Program, Statement},
    check_syntax,
    error::ParseError,
    interpreter::{lexer::tokenize, parser::core::parse},
};
use pretty_assertions::assert_eq;

fn parse_src(src: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(src, false).unwrap_or_else(|e| panic!("Lexing failed: {e}"));
    parse(&tokens)
}

fn program(src: &str) -> Program {
    parse_src(src).unwrap_or_else(|e| panic!("Parsing failed: {e}"))
}

/// Renders an expression fully parenthesized so grouping is visible.
fn render(expr: &Expr) -> String {
    match expr {
        Expr::Binary { left, op, right, .. } => {
            format!("({} {op} {})", render(left), render(right))
        },
        Expr::Unary { op, operand, .. } => format!("({op}{})", render(operand)),
        Expr::Update { op, target, .. } => format!("({}{op})", render(target)),
        Expr::Assignment { target, op, value, .. } => {
            format!("({} {op} {})", render(target), render(value))
        },
        Expr::Call { callee, arguments, .. } => {
            let arguments: Vec<_> = arguments.iter().map(render).collect();
            format!("{}({})", render(callee), arguments.join(", "))
        },
        Expr::Literal { value, .. } => match value {
            LiteralValue::Number(n) => n.to_string(),
            LiteralValue::Str(s) => format!("{s:?}"),
            LiteralValue::Bool(b) => b.to_string(),
            LiteralValue::Null => "null".to_string(),
        },
        Expr::Identifier { name, .. } => name.clone(),
        Expr::Array { elements, .. } => {
            let elements: Vec<_> = elements.iter().map(render).collect();
            format!("[{}]", elements.join(", "))
        },
    }
}

/// Parses `src` as a single expression statement and renders it.
fn expression(src: &str) -> String {
    let program = program(&format!("{src};"));
    match program.body.as_slice() {
        [Statement::Expression { expr }] => render(expr),
        other => panic!("expected one expression statement, got {other:?}"),
    }
}

#[test]
fn precedence_levels() {
    assert_eq!(expression("1 + 2 * 3"), "(1 + (2 * 3))");
    assert_eq!(expression("1 - 2 - 3"), "((1 - 2) - 3)");
    assert_eq!(expression("a || b && c"), "(a || (b && c))");
    assert_eq!(expression("a == b < c"), "(a == (b < c))");
    assert_eq!(expression("-a * b"), "((-a) * b)");
    assert_eq!(expression("!a == b"), "((!a) == b)");
    assert_eq!(expression("2 * 3 % 4"), "((2 * 3) % 4)");
}

#[test]
fn power_groups_left() {
    assert_eq!(expression("2 ** 3 ** 2"), "((2 ** 3) ** 2)");
    assert_eq!(expression("2 * 3 ** 2"), "(2 * (3 ** 2))");
}

#[test]
fn assignment_groups_right() {
    assert_eq!(expression("a = b = 1"), "(a = (b = 1))");
    assert_eq!(expression("a += b -= 2"), "(a += (b -= 2))");
    assert_eq!(expression("a = 1 + 2"), "(a = (1 + 2))");
}

#[test]
fn postfix_calls_and_arrays() {
    assert_eq!(expression("i++ + 1"), "((i++) + 1)");
    assert_eq!(expression("-i--"), "(-(i--))");
    assert_eq!(expression("f(1, 2)(3)"), "f(1, 2)(3)");
    assert_eq!(expression("g()"), "g()");
    assert_eq!(expression("[1, [2], \"x\", thik, khali]"), "[1, [2], \"x\", true, null]");
    assert_eq!(expression("(1 + 2) * 3"), "((1 + 2) * 3)");
}

#[test]
fn declarations_and_prints() {
    let program = program("solti a; solti b = 2;\nlekh; lekh a, b;");

    assert!(matches!(&program.body[0],
                     Statement::VariableDeclaration { name, value: None, .. } if name == "a"));
    assert!(matches!(&program.body[1],
                     Statement::VariableDeclaration { name, value: Some(_), .. } if name == "b"));
    assert!(matches!(&program.body[2], Statement::Print { arguments, .. } if arguments.is_empty()));
    assert!(matches!(&program.body[3], Statement::Print { arguments, .. } if arguments.len() == 2));
}

#[test]
fn if_with_and_without_else() {
    let program = program("yadi a bhane lekh 1;\n\nnatra { lekh 2; }\nyadi b bhane { }");

    assert_eq!(program.body.len(), 2);
    match &program.body[0] {
        Statement::If { consequent,
                        alternate: Some(alternate),
                        .. } => {
            assert!(matches!(**consequent, Statement::Print { .. }));
            assert!(matches!(&**alternate, Statement::Block { body } if body.len() == 1));
        },
        other => panic!("expected if/else, got {other:?}"),
    }
    assert!(matches!(&program.body[1], Statement::If { alternate: None, .. }));
}

#[test]
fn while_with_loop_control() {
    let program = program("jaba samma i < 3 {\n  vai vayo rokki;\n  aghi badh vai;\n}");

    let [Statement::While { test, body }] = program.body.as_slice() else {
        panic!("expected a single while loop");
    };
    assert_eq!(render(test), "(i < 3)");
    let Statement::Block { body } = &**body else {
        panic!("expected a block body");
    };
    assert!(matches!(body.as_slice(),
                     [Statement::Break { .. }, Statement::Continue { .. }]));
}

#[test]
fn newlines_between_statements_are_skipped() {
    assert_eq!(program("\n\nlekh 1;\n\n{\n\n}\n").body.len(), 2);
    assert_eq!(program("").body.len(), 0);
}

#[test]
fn literal_positions() {
    let program = program("\n\n  lekh 42;");
    let [Statement::Print { arguments, .. }] = program.body.as_slice() else {
        panic!("expected a print statement");
    };

    let position = arguments[0].position();
    assert_eq!((position.line, position.column), (3, 8));
}

#[test]
fn missing_semicolon() {
    let err = parse_src("lekh 1\nlekh 2;").unwrap_err();

    assert_eq!(err,
               ParseError::UnexpectedToken { expected: "';'".to_string(),
                                             found:    "newline".to_string(),
                                             position: err.position(), });
    assert_eq!((err.position().line, err.position().column), (1, 7));
}

#[test]
fn missing_expression() {
    let err = parse_src("solti x = ;").unwrap_err();

    assert!(matches!(err, ParseError::ExpectedExpression { ref found, .. } if found == "';'"));
}

#[test]
fn unclosed_delimiters() {
    assert!(matches!(parse_src("lekh (1;"),
                     Err(ParseError::UnclosedDelimiter { delimiter: ')', .. })));
    assert!(matches!(parse_src("lekh [1, 2;"),
                     Err(ParseError::UnclosedDelimiter { delimiter: ']', .. })));
    assert!(matches!(parse_src("{ lekh 1;"),
                     Err(ParseError::UnclosedDelimiter { delimiter: '}', .. })));
}

#[test]
fn trailing_comma_is_rejected() {
    assert!(matches!(parse_src("lekh [1, 2,];"),
                     Err(ParseError::ExpectedExpression { .. })));
}

#[test]
fn yadi_requires_bhane() {
    let err = parse_src("yadi x lekh 1;").unwrap_err();

    assert_eq!(err.to_string(),
               "Unexpected token: Tya 'bhane' Chahiyeko, Taile K Lekhis Vai 'lekh'");
}

#[test]
fn parse_reports_first_error_only() {
    let err = parse_src("solti = 1;\nlekh (2;").unwrap_err();

    assert_eq!(err.position().line, 1);
}

#[test]
fn check_syntax_collects_every_error() {
    let tokens = tokenize("solti = 1;\nlekh 2;\nlekh (3;\nyadi bhane lekh 4;\nlekh 5;", false).unwrap();
    let errors = check_syntax(&tokens);

    let lines: Vec<_> = errors.iter().map(|e| e.position().line).collect();
    assert_eq!(lines, [1, 3, 4]);
}

#[test]
fn check_syntax_accepts_valid_program() {
    let tokens = tokenize("solti x = 1;\njaba samma x < 3 { x++; }", false).unwrap();

    assert!(check_syntax(&tokens).is_empty());
}

fn error_positions(src: &str) -> Vec<(usize, usize)> {
    let tokens = tokenize(src, false).unwrap();
    check_syntax(&tokens).iter()
                         .map(|e| (e.position().line, e.position().column))
                         .collect()
}

#[test]
fn check_syntax_recovers_inside_blocks() {
    assert_eq!(error_positions("{ solti = 1; lekh 2; }\nlekh 3;"), [(1, 9)]);
    assert_eq!(error_positions("jaba samma x {\n  lekh (1;\n  lekh 2;\n}\nsolti = 3;"),
               [(2, 10), (5, 7)]);
    assert_eq!(error_positions("yadi x bhane {\n  {\n    solti;\n  }\n  lekh 1;\n}"),
               [(3, 10)]);
}

#[test]
fn check_syntax_keeps_the_closing_brace() {
    assert_eq!(error_positions("{ lekh 1 }\nlekh 2;"), [(1, 10)]);
    assert_eq!(error_positions("{ lekh 1;"), [(1, 10)]);
}

#[test]
fn parse_still_stops_inside_blocks() {
    let err = parse_src("{ solti = 1; lekh 2; }\nlekh (3;").unwrap_err();

    assert_eq!((err.position().line, err.position().column), (1, 9));
}
