/// Statement parsing methods.
///
/// One production per keyword. Each starts with the keyword as the current token.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    fn statement(&mut self) -> Result<Spanned<Statement>, SyntaxError> {
        let start = self.current_span().start;

        let Some(keyword) = self.peek().keyword_id() else {
            return Err(SyntaxError::unexpected(self.peek()));
        };
        self.advance();

        let stmt = match keyword {
            KeywordId::CreateParkingLot => Statement::CreateParkingLot {
                capacity: self.int_operand()?,
            },
            KeywordId::Park => {
                let registration_number = self.string_operand()?;
                let colour = self.string_operand()?;
                Statement::Park {
                    registration_number,
                    colour,
                }
            }
            KeywordId::Leave => Statement::Leave {
                slot: self.int_operand()?,
            },
            KeywordId::Status => Statement::Status,
            KeywordId::RegistrationNumbersForCarsWithColour => Statement::RegistrationNumbersForColour {
                colour: self.string_operand()?,
            },
            KeywordId::SlotNumbersForCarsWithColour => Statement::SlotNumbersForColour {
                colour: self.string_operand()?,
            },
            KeywordId::SlotNumberForRegistrationNumber => Statement::SlotNumberForRegistrationNumber {
                registration_number: self.string_operand()?,
            },
        };

        let end = self.previous_end();
        tracing::trace!(%stmt, start, end, "parsed statement");
        Ok(Spanned::new(stmt, Span::new(start, end)))
    }

    /// Parse an `INT` operand as a signed 64-bit decimal. Overflow is an error, never a wraparound.
    fn int_operand(&mut self) -> Result<i64, SyntaxError> {
        let token = self.expect(TokenKind::Int)?;
        token
            .literal
            .parse::<i64>()
            .map_err(|_| SyntaxError::invalid_number(token))
    }

    fn string_operand(&mut self) -> Result<String, SyntaxError> {
        Ok(self.expect(TokenKind::String)?.literal.clone())
    }
}
