use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Identifier tokens; binding or parameter names such as `x` or `newAdder`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_owned())]
    Ident(String),
    /// Integer literal tokens, such as `42`.
    ///
    /// The digits are carried exactly as written; conversion to a machine
    /// integer happens in the parser so that oversized literals surface as
    /// parse errors rather than lexer failures.
    #[regex(r"[0-9]+", |lex| lex.slice().to_owned())]
    Int(String),
    /// String literal tokens, such as `"hello"`.
    ///
    /// No escape processing is applied. A string missing its closing quote
    /// runs to the end of the input.
    #[regex(r#""[^"]*""#, lex_string)]
    #[regex(r#""[^"]*"#, lex_string)]
    Str(String),
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// A byte sequence the grammar does not recognize. Never produced by a
    /// pattern above; [`lex`] folds scanner errors into this variant so the
    /// parser can report them.
    Illegal(String),
    /// End of input. [`lex`] appends exactly one, and the parser cursor keeps
    /// returning it once the stream is exhausted.
    Eof,
}

/// Strips the surrounding quotes from a string literal slice.
///
/// The leading quote is always present. The trailing quote is absent when the
/// literal is unterminated, in which case the rest of the input is the
/// contents.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// The contents between the quotes, without escape processing.
fn lex_string(lex: &logos::Lexer<Token>) -> String {
    let body = &lex.slice()[1..];
    body.strip_suffix('"').unwrap_or(body).to_owned()
}

/// Tokenizes an entire source string.
///
/// The lexer itself never fails: input the grammar does not recognize is
/// folded into [`Token::Illegal`] and left for the parser to report. The
/// returned stream always ends with a single [`Token::Eof`].
///
/// # Parameters
/// - `source`: The source text to tokenize.
///
/// # Returns
/// The token stream, terminated by [`Token::Eof`].
///
/// # Example
/// ```
/// use monkey_lang::interpreter::lexer::{Token, lex};
///
/// let tokens = lex("let five = 5;");
///
/// assert_eq!(tokens[0], Token::Let);
/// assert_eq!(tokens[1], Token::Ident("five".to_owned()));
/// assert_eq!(tokens[2], Token::Assign);
/// assert_eq!(tokens[3], Token::Int("5".to_owned()));
/// assert_eq!(tokens[4], Token::Semicolon);
/// assert_eq!(tokens[5], Token::Eof);
/// ```
#[must_use]
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(token) => tokens.push(token),
            Err(()) => tokens.push(Token::Illegal(lexer.slice().to_owned())),
        }
    }

    tokens.push(Token::Eof);
    tokens
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Ident(_) => "IDENT",
            Self::Int(_) => "INT",
            Self::Str(_) => "STRING",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::Assign => "ASSIGN",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Bang => "BANG",
            Self::Slash => "SLASH",
            Self::Star => "STAR",
            Self::Lt => "LT",
            Self::Gt => "GT",
            Self::Eq => "EQ",
            Self::NotEq => "NOT_EQ",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMICOLON",
            Self::Colon => "COLON",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::LBracket => "LBRACKET",
            Self::RBracket => "RBRACKET",
            Self::Illegal(_) => "ILLEGAL",
            Self::Eof => "EOF",
        };
        write!(f, "{kind}")
    }
}
