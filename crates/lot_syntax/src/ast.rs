//! Abstract Syntax Tree definitions for lot
//!
//! A program is a flat, ordered list of statements. There are no expressions and no nesting: every statement is a
//! keyword followed by a fixed number of operands.

use std::fmt;

use lot_core::lang::keywords::{self, KeywordId};

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// A program is a sequence of statements, in execution order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Spanned<Statement>>,
}

impl Program {
    /// Iterate over the statements without their spans.
    pub fn iter(&self) -> impl Iterator<Item = &Statement> {
        self.statements.iter().map(|s| &s.node)
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }
}

impl FromIterator<Statement> for Program {
    /// Build a program from bare statements (spans default to empty). Mostly useful in tests.
    fn from_iter<I: IntoIterator<Item = Statement>>(iter: I) -> Self {
        Program {
            statements: iter.into_iter().map(|s| Spanned::new(s, Span::default())).collect(),
        }
    }
}

/// One statement per keyword.
///
/// Integer operands are kept exactly as written (`leave 1` stores slot `1`); converting between the 1-based slots
/// users see and storage indices is the executor's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `create_parking_lot <capacity>`
    CreateParkingLot { capacity: i64 },
    /// `park <registration_number> <colour>`
    Park { registration_number: String, colour: String },
    /// `leave <slot>`
    Leave { slot: i64 },
    /// `status`
    Status,
    /// `registration_numbers_for_cars_with_colour <colour>`
    RegistrationNumbersForColour { colour: String },
    /// `slot_numbers_for_cars_with_colour <colour>`
    SlotNumbersForColour { colour: String },
    /// `slot_number_for_registration_number <registration_number>`
    SlotNumberForRegistrationNumber { registration_number: String },
}

impl Statement {
    /// The keyword that introduces this statement.
    pub fn keyword(&self) -> KeywordId {
        match self {
            Statement::CreateParkingLot { .. } => KeywordId::CreateParkingLot,
            Statement::Park { .. } => KeywordId::Park,
            Statement::Leave { .. } => KeywordId::Leave,
            Statement::Status => KeywordId::Status,
            Statement::RegistrationNumbersForColour { .. } => KeywordId::RegistrationNumbersForCarsWithColour,
            Statement::SlotNumbersForColour { .. } => KeywordId::SlotNumbersForCarsWithColour,
            Statement::SlotNumberForRegistrationNumber { .. } => KeywordId::SlotNumberForRegistrationNumber,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = keywords::as_str(self.keyword());
        match self {
            Statement::CreateParkingLot { capacity } => write!(f, "{keyword} {capacity}"),
            Statement::Park {
                registration_number,
                colour,
            } => write!(f, "{keyword} {registration_number} {colour}"),
            Statement::Leave { slot } => write!(f, "{keyword} {slot}"),
            Statement::Status => f.write_str(keyword),
            Statement::RegistrationNumbersForColour { colour } | Statement::SlotNumbersForColour { colour } => {
                write!(f, "{keyword} {colour}")
            }
            Statement::SlotNumberForRegistrationNumber { registration_number } => {
                write!(f, "{keyword} {registration_number}")
            }
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}
