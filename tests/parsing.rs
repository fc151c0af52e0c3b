use monkey_lang::{
    ast::Statement,
    interpreter::{
        lexer::{Token, lex},
        parser::core::Parser,
    },
};

fn parse(input: &str) -> String {
    let mut parser = Parser::new(input);
    let program = parser.parse_program();
    assert!(parser.errors().is_empty(),
            "unexpected parse errors for {input:?}: {:?}",
            parser.errors());
    program.to_string()
}

fn parse_errors(input: &str) -> Vec<String> {
    let mut parser = Parser::new(input);
    let _ = parser.parse_program();
    parser.into_errors().iter().map(ToString::to_string).collect()
}

#[test]
fn operator_precedence_is_explicit_in_debug_form() {
    let cases = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a * b / c", "((a * b) / c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("true", "true"),
                 ("3 > 5 == false", "((3 > 5) == false)"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("2 / (5 + 5)", "(2 / (5 + 5))"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                 ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
                 ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
                 ("add(a * b[2], b[1], 2 * [1, 2][1])",
                  "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))")];

    for (input, expected) in cases {
        assert_eq!(parse(input), expected, "input: {input:?}");
    }
}

#[test]
fn debug_form_is_stable_across_parses() {
    let input = "let result = add(1, 2 * 3) + values[0]; if (result > 10) { result } else { 0 }";
    assert_eq!(parse(input), parse(input));
}

#[test]
fn let_statements_bind_names() {
    let mut parser = Parser::new("let x = 5; let y = 10; let foobar = 838383;");
    let program = parser.parse_program();
    assert!(parser.errors().is_empty());

    let names: Vec<_> = program.statements
                               .iter()
                               .map(|statement| match statement {
                                   Statement::Let { name, .. } => name.as_str(),
                                   other => panic!("expected let statement, got {other:?}"),
                               })
                               .collect();

    assert_eq!(names, ["x", "y", "foobar"]);
    assert_eq!(program.to_string(), "let x = 5;let y = 10;let foobar = 838383;");
}

#[test]
fn return_statements_parse_with_and_without_semicolon() {
    assert_eq!(parse("return 5;"), "return 5;");
    assert_eq!(parse("return 2 + 3"), "return (2 + 3);");
}

#[test]
fn if_expressions_render_both_branches() {
    assert_eq!(parse("if (x < y) { x }"), "if(x < y) x");
    assert_eq!(parse("if (x < y) { x } else { y }"), "if(x < y) xelse y");
}

#[test]
fn function_literals_render_parameters_and_body() {
    assert_eq!(parse("fn(x, y) { x + y; }"), "fn(x, y)(x + y)");
    assert_eq!(parse("fn() { 1; }"), "fn()1");
}

#[test]
fn call_expressions_render_arguments_in_order() {
    assert_eq!(parse("add(1, 2 * 3, 4 + 5);"), "add(1, (2 * 3), (4 + 5))");
}

#[test]
fn hash_literals_preserve_source_order() {
    assert_eq!(parse(r#"{"one": 1, "two": 2}"#), "{one : 1, two : 2}");
    assert_eq!(parse("{}"), "{}");
    assert_eq!(parse(r#"{1: "a", true: fn(x) { x }}"#), "{1 : a, true : fn(x)x}");
}

#[test]
fn string_literals_keep_their_contents() {
    assert_eq!(parse(r#""hello world";"#), "hello world");
    // An unterminated string runs to the end of the input.
    assert_eq!(parse(r#""dangling"#), "dangling");
}

#[test]
fn lexer_is_total() {
    // Unknown bytes and an unterminated string still produce a stream that
    // ends in EOF; nothing makes the lexer itself fail.
    let tokens = lex("let @ 5 \"unterminated");

    assert_eq!(tokens[0], Token::Let);
    assert_eq!(tokens[1], Token::Illegal("@".to_owned()));
    assert_eq!(tokens[2], Token::Int("5".to_owned()));
    assert_eq!(tokens[3], Token::Str("unterminated".to_owned()));
    assert_eq!(tokens.last(), Some(&Token::Eof));
}

#[test]
fn two_character_operators_lex_as_one_token() {
    assert_eq!(lex("== != = !"),
               vec![Token::Eq, Token::NotEq, Token::Assign, Token::Bang, Token::Eof]);
}

#[test]
fn missing_assign_is_reported() {
    let errors = parse_errors("let x 5;");
    assert_eq!(errors, ["expected next token to be ASSIGN, got INT instead"]);
}

#[test]
fn missing_identifier_is_reported() {
    let errors = parse_errors("let = 5;");
    assert_eq!(errors[0], "expected next token to be IDENT, got ASSIGN instead");
}

#[test]
fn token_without_prefix_form_is_reported() {
    let errors = parse_errors("+;");
    assert_eq!(errors[0], "no prefix parse function for PLUS found");
}

#[test]
fn unknown_bytes_surface_as_illegal_tokens() {
    let errors = parse_errors("@");
    assert_eq!(errors[0], "no prefix parse function for ILLEGAL found");
}

#[test]
fn oversized_integer_literal_is_reported() {
    let errors = parse_errors("99999999999999;");
    assert_eq!(errors[0], "literal 99999999999999 is not valid integer");
}

#[test]
fn unclosed_call_is_reported() {
    let errors = parse_errors("add(1, 2");
    assert!(!errors.is_empty());
    assert!(errors[0].starts_with("expected next token to be"), "got: {}", errors[0]);
}

#[test]
fn program_root_is_returned_despite_errors() {
    let mut parser = Parser::new("let x 5; x + 1;");
    let program = parser.parse_program();

    assert!(!parser.errors().is_empty());
    // The statement after the broken one still parses.
    assert!(!program.statements.is_empty());
}
