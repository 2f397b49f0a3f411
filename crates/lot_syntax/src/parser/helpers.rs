/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used by every statement production:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting token kinds (`check`, `expect`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    /// Consume the current token and return it. `Eof` is never consumed.
    fn advance(&mut self) -> &Token {
        let current = self.pos;
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.tokens.get(current).unwrap_or(&self.eof)
    }

    /// End offset of the last consumed token.
    fn previous_end(&self) -> usize {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(0, |t| t.span.end)
    }

    /// Return `true` if the current token has kind `kind`.
    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Consume the current token if it has kind `kind`, otherwise report what was found instead.
    fn expect(&mut self, kind: TokenKind) -> Result<&Token, SyntaxError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(SyntaxError::expected(self.peek(), kind))
        }
    }

    fn current_span(&self) -> Span {
        self.peek().span
    }
}
