/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` loop.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module.

/// Parser state.
///
/// ## Notes
/// - The parser never resynchronizes: the first statement that fails to parse stops the
///   whole parse, and a failed parse yields no program at all.
/// - The current token is always the next unconsumed one. Each statement production starts
///   on its keyword and consumes exactly the keyword plus its operands.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    errors: Vec<SyntaxError>,
    /// Returned by `peek` once the slice is exhausted (covers streams without a trailing `Eof`).
    eof: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `lot_syntax::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        let end = tokens.last().map_or(0, |t| t.span.end);
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
            eof: Token::new(TokenKind::Eof, Span::new(end, end), String::new()),
        }
    }

    /// Parse the entire token stream into a [`Program`].
    ///
    /// ## Errors
    /// Returns the collected [`SyntaxError`]s if any statement fails to parse.
    pub fn parse(mut self) -> Result<Program, ParseErrors> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            match self.statement() {
                Ok(stmt) => statements.push(stmt),
                Err(e) => {
                    self.errors.push(e);
                    break;
                }
            }
        }

        match ParseErrors::new(self.errors) {
            Some(errors) => Err(errors),
            None => Ok(Program { statements }),
        }
    }
}
