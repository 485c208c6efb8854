use nepdai::{
    error::LexError,
    interpreter::{
        lexer::tokenize,
        token::{Position, TokenKind, TokenValue},
    },
};
use pretty_assertions::assert_eq;

fn kinds(src: &str) -> Vec<TokenKind> {
    tokenize(src, false).unwrap_or_else(|e| panic!("Lexing failed: {e}"))
                        .iter()
                        .map(|t| t.kind)
                        .collect()
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(kinds("solti yadi bhane natra lekh padh thik galat khali naam _x1"),
               [TokenKind::Solti,
                TokenKind::Yadi,
                TokenKind::Bhane,
                TokenKind::Natra,
                TokenKind::Lekh,
                TokenKind::Padh,
                TokenKind::Thik,
                TokenKind::Galat,
                TokenKind::Khali,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Eof]);
}

#[test]
fn multi_word_keywords() {
    assert_eq!(kinds("jaba samma vai vayo rokki aghi badh vai"),
               [TokenKind::JabaSamma, TokenKind::VaiVayoRokki, TokenKind::AghiBadhVai,
                TokenKind::Eof]);

    let tokens = tokenize("jaba \t samma", false).unwrap();
    assert_eq!(tokens[0].lexeme, "jaba samma");
}

#[test]
fn partial_phrases_fall_back_to_words() {
    assert_eq!(kinds("jaba x"), [TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]);
    assert_eq!(kinds("vai vayo"), [TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]);
    assert_eq!(kinds("jaba sammax"),
               [TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]);
    assert_eq!(kinds("jaba\nsamma"),
               [TokenKind::Identifier, TokenKind::Newline, TokenKind::Identifier, TokenKind::Eof]);
}

#[test]
fn maximal_munch_operators() {
    assert_eq!(kinds("++ -- += -= *= /= ** == != <= >= && ||"),
               [TokenKind::PlusPlus,
                TokenKind::MinusMinus,
                TokenKind::PlusAssign,
                TokenKind::MinusAssign,
                TokenKind::StarAssign,
                TokenKind::SlashAssign,
                TokenKind::StarStar,
                TokenKind::EqualEqual,
                TokenKind::BangEqual,
                TokenKind::LessEqual,
                TokenKind::GreaterEqual,
                TokenKind::AndAnd,
                TokenKind::OrOr,
                TokenKind::Eof]);
    assert_eq!(kinds("a+++b"),
               [TokenKind::Identifier, TokenKind::PlusPlus, TokenKind::Plus,
                TokenKind::Identifier, TokenKind::Eof]);
    assert_eq!(kinds("( ) { } [ ] , ; . : % ! < > = + - * /").len(), 20);
}

#[test]
fn numbers() {
    let tokens = tokenize("42 2.5 7.", false).unwrap();

    assert_eq!(tokens[0].value, Some(TokenValue::Number(42.0)));
    assert_eq!(tokens[1].value, Some(TokenValue::Number(2.5)));
    assert_eq!(tokens[2].value, Some(TokenValue::Number(7.0)));
    assert_eq!(tokens[3].kind, TokenKind::Dot);
    assert_eq!(tokens[1].lexeme, "2.5");
    assert_eq!(tokens[1].number(), Some(2.5));
    assert_eq!(tokens[3].number(), None);
}

#[test]
fn identifier_and_string_text() {
    let tokens = tokenize("naam \"dai\" solti", false).unwrap();

    assert_eq!(tokens[0].text(), Some("naam"));
    assert_eq!(tokens[1].text(), Some("dai"));
    assert_eq!(tokens[2].text(), None);
}

#[test]
fn strings_decode_escapes() {
    let tokens = tokenize(r#""a\nb" 'it\'s' "\q""#, false).unwrap();

    assert_eq!(tokens[0].value, Some(TokenValue::Str("a\nb".to_string())));
    assert_eq!(tokens[0].lexeme, r#""a\nb""#);
    assert_eq!(tokens[1].value, Some(TokenValue::Str("it's".to_string())));
    assert_eq!(tokens[2].value, Some(TokenValue::Str("q".to_string())));
}

#[test]
fn comments_are_dropped() {
    assert_eq!(kinds("lekh 1; // ignored ; lekh\nx"),
               [TokenKind::Lekh,
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::Newline,
                TokenKind::Identifier,
                TokenKind::Eof]);
}

#[test]
fn positions_track_lines_and_columns() {
    let tokens = tokenize("Namaste Dai\n  solti x;", true).unwrap();

    let solti = &tokens[1];
    assert_eq!(solti.kind, TokenKind::Solti);
    assert_eq!(solti.position,
               Position { line:   2,
                          column: 3,
                          index:  14, });

    let eof = tokens.last().unwrap();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!((eof.position.line, eof.position.column), (2, 11));
}

#[test]
fn positions_never_decrease() {
    let tokens = tokenize("solti a = 1;\njaba samma a < 3 {\n  a++;\n}\n", false).unwrap();

    assert!(tokens.windows(2).all(|pair| pair[0].position <= pair[1].position));
    assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
}

#[test]
fn empty_input_is_just_eof() {
    assert_eq!(kinds(""), [TokenKind::Eof]);
    assert_eq!(kinds("   // nothing"), [TokenKind::Eof]);
}

#[test]
fn missing_entry_marker() {
    let err = tokenize("\n  lekh 1;", true).unwrap_err();

    assert_eq!(err,
               LexError::MissingEntryMarker { position: Position { line:   2,
                                                                   column: 3,
                                                                   index:  3, }, });
    assert_eq!(err.to_string(), "Namaste Dai van vai Sururma");
}

#[test]
fn unterminated_string_reports_opening_quote() {
    let err = tokenize("lekh 'abc", false).unwrap_err();

    assert!(matches!(err, LexError::UnterminatedString { position } if position.column == 6));
}

#[test]
fn unexpected_character() {
    let err = tokenize("lekh 1;\n@", false).unwrap_err();

    assert_eq!(err,
               LexError::UnexpectedCharacter { character: '@',
                                               position:  Position { line:   2,
                                                                     column: 1,
                                                                     index:  8, }, });
}

#[test]
fn only_line_breaks_become_newline_tokens() {
    let tokens = tokenize("\t// note\n  \r\n", false).unwrap();

    let newlines: Vec<_> = tokens.iter()
                                 .filter(|t| t.kind == TokenKind::Newline)
                                 .map(|t| (t.lexeme.as_str(), t.position.line))
                                 .collect();
    assert_eq!(newlines, [("\\n", 1), ("\\n", 2)]);
    assert_eq!(tokens.len(), 3);
}
