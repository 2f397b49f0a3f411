/// Parse a token stream into an AST [`Program`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `lot_syntax::lexer`.
///
/// ## Errors
/// Returns [`ParseErrors`] if any statement fails to parse. No partial program is returned.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Program, ParseErrors> {
    Parser::new(tokens).parse()
}

/// Scan and parse a source string in one step.
///
/// ## Errors
/// Same as [`parse`]; the scanner itself never fails (unknown characters become `Illegal` tokens, which the parser
/// rejects).
pub fn parse_source(source: &str) -> Result<Program, ParseErrors> {
    parse(&lexer::lex(source))
}
