#[cfg(test)]
/// Parser unit tests.
///
/// These tests focus on the statement forms, on operand classification, and on the
/// "first error stops the parse" behavior.
mod tests {
    use super::*;
    use crate::diagnostics::SyntaxErrorKind;

    fn parse_str(source: &str) -> Result<Program, ParseErrors> {
        parse_source(source)
    }

    #[test]
    fn test_parse_every_statement() {
        let source = r#"
		create_parking_lot 1
		park KA-01-HH-1234 White
		leave 1
		registration_numbers_for_cars_with_colour White
		slot_numbers_for_cars_with_colour White
		slot_number_for_registration_number KA-01-HH-3141
		status
	"#;
        let program = parse_str(source).unwrap();
        let statements: Vec<&Statement> = program.iter().collect();
        assert_eq!(
            statements,
            vec![
                &Statement::CreateParkingLot { capacity: 1 },
                &Statement::Park {
                    registration_number: "KA-01-HH-1234".to_string(),
                    colour: "White".to_string(),
                },
                &Statement::Leave { slot: 1 },
                &Statement::RegistrationNumbersForColour {
                    colour: "White".to_string()
                },
                &Statement::SlotNumbersForColour {
                    colour: "White".to_string()
                },
                &Statement::SlotNumberForRegistrationNumber {
                    registration_number: "KA-01-HH-3141".to_string()
                },
                &Statement::Status,
            ]
        );
    }

    #[test]
    fn test_empty_and_whitespace_sources_parse_to_empty_program() {
        for source in ["", "   ", "\n\n\n", "\t\r\n"] {
            let program = parse_str(source).unwrap();
            assert!(program.is_empty(), "{source:?}");
        }
    }

    #[test]
    fn test_newlines_are_insignificant() {
        let a = parse_str("park KA-01-HH-1234 White status").unwrap();
        let b = parse_str("park\nKA-01-HH-1234\n\nWhite\nstatus\n").unwrap();
        let a: Vec<&Statement> = a.iter().collect();
        let b: Vec<&Statement> = b.iter().collect();
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_statement_spans_cover_keyword_and_operands() {
        let source = "status\npark KA-01-HH-1234 White\n";
        let program = parse_str(source).unwrap();
        assert_eq!(program.statements[0].span, Span::new(0, 6));
        let span = program.statements[1].span;
        assert_eq!(&source[span.start..span.end], "park KA-01-HH-1234 White");
    }

    #[test]
    fn test_parse_errors() {
        let sources = [
            ";",
            "create_parking_lot 9223372036854775808",
            "create_parking_lot -1",
            "park 1 White",
            "park KA-01-HH-1111 1",
            "leave parking",
            "leave 9223372036854775808",
            "registration_numbers_for_cars_with_colour 0",
            "slot_numbers_for_cars_with_colour 0",
            "slot_number_for_registration_number 0",
            "White",
            "42",
        ];

        for source in sources {
            let result = parse_str(source);
            assert!(result.is_err(), "expected {source:?} to fail, got {result:?}");
        }
    }

    #[test]
    fn test_i64_max_is_accepted() {
        let program = parse_str("create_parking_lot 9223372036854775807").unwrap();
        assert_eq!(
            program.statements[0].node,
            Statement::CreateParkingLot { capacity: i64::MAX }
        );
    }

    #[test]
    fn test_overflow_reports_invalid_number() {
        let err = parse_str("leave 9223372036854775808").unwrap_err();
        assert_eq!(err.errors().len(), 1);
        let e = &err.errors()[0];
        assert_eq!(e.kind, SyntaxErrorKind::InvalidNumber);
        assert_eq!(e.to_string(), r#"invalid number "9223372036854775808" at pos 6"#);
    }

    #[test]
    fn test_missing_operand_reports_eof() {
        let err = parse_str("create_parking_lot").unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"unexpected token "" at pos 18, expecting INT"#
        );
    }

    #[test]
    fn test_keyword_in_operand_position() {
        let err = parse_str("park status White").unwrap_err();
        let e = &err.errors()[0];
        assert_eq!(e.kind, SyntaxErrorKind::Expected(TokenKind::String));
        assert_eq!(e.literal, "status");
        assert_eq!(e.pos(), 5);
    }

    #[test]
    fn test_illegal_token_message() {
        let err = parse_str("status\n;").unwrap_err();
        assert_eq!(err.to_string(), r#"unexpected token ";" at pos 7"#);
    }

    #[test]
    fn test_first_error_stops_the_parse() {
        // Both lines are broken; only the first is reported and no program is produced.
        let err = parse_str("status\nleave x\npark 1 2\n").unwrap_err();
        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.errors()[0].literal, "x");
    }

    #[test]
    fn test_parser_handles_stream_without_eof() {
        // Streams built by hand may omit the trailing EOF; the parser must not index past the end.
        let mut tokens = lexer::lex("leave");
        tokens.pop();
        let err = parse(&tokens).unwrap_err();
        assert_eq!(err.errors()[0].kind, SyntaxErrorKind::Expected(TokenKind::Int));
        assert_eq!(err.errors()[0].pos(), 5);

        assert!(parse(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_display_round_trips() {
        let source = "create_parking_lot 6\npark KA-01-HH-1234 White\nleave 4\nstatus\n\
                      registration_numbers_for_cars_with_colour White\n\
                      slot_numbers_for_cars_with_colour White\n\
                      slot_number_for_registration_number KA-01-HH-1234";
        let program = parse_str(source).unwrap();
        let reparsed = parse_str(&program.to_string()).unwrap();
        let a: Vec<&Statement> = program.iter().collect();
        let b: Vec<&Statement> = reparsed.iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_operands_follow_keyword_registry() {
        use lot_core::lang::keywords::{KEYWORDS, OperandKind};

        for info in KEYWORDS {
            let mut source = info.canonical.to_string();
            for operand in info.operands {
                source.push_str(match operand {
                    OperandKind::Int => " 1",
                    OperandKind::String => " White",
                });
            }

            let program = parse_str(&source).unwrap();
            assert_eq!(program.len(), 1, "{source}");
            assert_eq!(program.statements[0].node.keyword(), info.id);
            assert_eq!(program.to_string(), source);

            // One operand short is always an error.
            if !info.operands.is_empty() {
                let short = source.rsplit_once(' ').unwrap().0;
                assert!(parse_str(short).is_err(), "{short}");
            }
        }
    }
}
