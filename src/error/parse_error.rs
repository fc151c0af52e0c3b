#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
///
/// Parse errors accumulate on the parser instead of aborting it; the caller
/// inspects the collected list before evaluating anything. There is no
/// recovery, so a single syntax error may leave the cursor mid-construct and
/// produce follow-on errors.
pub enum ParseError {
    /// The token after the current one did not match what the grammar
    /// requires next.
    UnexpectedToken {
        /// Kind name of the token the grammar required.
        expected: String,
        /// Kind name of the token that was actually found.
        actual:   String,
    },
    /// No expression can begin with the current token.
    NoPrefixParse {
        /// Kind name of the offending token.
        token: String,
    },
    /// An integer literal outside the representable value range.
    InvalidIntegerLiteral {
        /// The literal digits as written in the source.
        literal: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, actual } => {
                write!(f, "expected next token to be {expected}, got {actual} instead")
            },

            Self::NoPrefixParse { token } => {
                write!(f, "no prefix parse function for {token} found")
            },

            Self::InvalidIntegerLiteral { literal } => {
                write!(f, "literal {literal} is not valid integer")
            },
        }
    }
}

impl std::error::Error for ParseError {}
