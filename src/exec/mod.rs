//! Program execution.
//!
//! The executor walks a [`Program`] statement by statement against a [`Database`]. A failing statement writes one
//! line to the diagnostic sink and execution moves on; nothing is rolled back and no error escapes [`Executor::execute`].
//!
//! Results go to `out`. Failures and `Not found` go to `err`.

pub mod table;

use std::io::{self, Write};

use lot_core::errors::NOT_FOUND_MSG;
use lot_syntax::ast::{Program, Statement};
use thiserror::Error;

use crate::database::{Car, CarError, Database, StorageError, filter};
use table::Table;

/// Anything that stops one statement from producing its result line.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error(transparent)]
    Car(#[from] CarError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// What a successful statement produced.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome {
    /// Text for the result sink. May span several lines; the executor adds the final newline.
    Output(String),
    /// A query matched nothing.
    NotFound,
}

/// Counters for one [`Executor::execute`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecSummary {
    pub executed: usize,
    /// Statements that reported an error. `Not found` is not a failure.
    pub failed: usize,
}

/// Runs programs and writes their output to two sinks.
#[derive(Debug)]
pub struct Executor<O: Write, E: Write> {
    out: O,
    err: E,
}

impl Executor<io::Stdout, io::Stderr> {
    /// Results to stdout, diagnostics to stderr.
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Executor<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Give back the sinks, e.g. to inspect captured output.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    /// Write one line to the diagnostic sink, e.g. a parse failure in the interactive shell.
    pub fn report_error(&mut self, message: &str) {
        emit(&mut self.err, message);
        if let Err(e) = self.err.flush() {
            tracing::warn!(error = %e, "failed to flush output");
        }
    }

    pub fn execute(&mut self, program: &Program, db: &mut Database) -> ExecSummary {
        let mut summary = ExecSummary::default();

        for stmt in program.iter() {
            tracing::debug!(statement = %stmt, "executing");
            summary.executed += 1;

            match exec_statement(stmt, db) {
                Ok(Outcome::Output(text)) => emit(&mut self.out, &text),
                Ok(Outcome::NotFound) => emit(&mut self.err, NOT_FOUND_MSG),
                Err(e) => {
                    tracing::debug!(statement = %stmt, error = %e, "statement failed");
                    summary.failed += 1;
                    emit(&mut self.err, &e.to_string());
                }
            }
        }

        if let Err(e) = self.out.flush().and_then(|()| self.err.flush()) {
            tracing::warn!(error = %e, "failed to flush output");
        }
        summary
    }
}

fn emit(sink: &mut impl Write, line: &str) {
    if let Err(e) = writeln!(sink, "{line}") {
        tracing::warn!(error = %e, "failed to write output");
    }
}

fn exec_statement(stmt: &Statement, db: &mut Database) -> Result<Outcome, ExecError> {
    match stmt {
        Statement::CreateParkingLot { capacity } => {
            let slots = usize::try_from(*capacity).map_err(|_| StorageError::InvalidCapacity(*capacity))?;
            db.init(slots)?;
            Ok(Outcome::Output(format!("Created a parking lot with {capacity} slots")))
        }

        Statement::Park {
            registration_number,
            colour,
        } => {
            let car = Car::new(registration_number, colour)?;
            let index = db.save(car)?;
            Ok(Outcome::Output(format!("Allocated slot number: {}", index + 1)))
        }

        Statement::Leave { slot } => {
            let index = slot_index(*slot, db)?;
            db.remove(index)?;
            Ok(Outcome::Output(format!("Slot number {slot} is free")))
        }

        Statement::Status => {
            let mut table = Table::new();
            table.row(["Slot No.", "Registration No", "Colour"]);
            for (index, slot) in db.all()?.iter().enumerate() {
                if let Some(car) = slot {
                    table.row([
                        (index + 1).to_string(),
                        car.registration_number().to_string(),
                        car.colour().to_string(),
                    ]);
                }
            }
            let mut text = table.render();
            text.pop();
            Ok(Outcome::Output(text))
        }

        Statement::RegistrationNumbersForColour { colour } => {
            let by_colour = filter::by_colour(colour);
            let cars = db.filter_cars(Some(&by_colour))?;
            Ok(joined(cars.iter().map(|car| car.registration_number().to_string())))
        }

        Statement::SlotNumbersForColour { colour } => {
            let by_colour = filter::by_colour(colour);
            let slots = db.filter_slots(Some(&by_colour))?;
            Ok(joined(slots.iter().map(|index| (index + 1).to_string())))
        }

        Statement::SlotNumberForRegistrationNumber { registration_number } => {
            let by_registration = filter::by_registration_number(registration_number);
            let slots = db.filter_slots(Some(&by_registration))?;
            Ok(joined(slots.iter().map(|index| (index + 1).to_string())))
        }
    }
}

/// Convert a 1-based slot number into a storage index.
fn slot_index(slot: i64, db: &Database) -> Result<usize, StorageError> {
    match slot.checked_sub(1).and_then(|index| usize::try_from(index).ok()) {
        Some(index) => Ok(index),
        None => Err(StorageError::OutOfRange {
            slot,
            capacity: db.capacity()?,
        }),
    }
}

fn joined(items: impl Iterator<Item = String>) -> Outcome {
    let items: Vec<String> = items.collect();
    if items.is_empty() {
        Outcome::NotFound
    } else {
        Outcome::Output(items.join(", "))
    }
}
