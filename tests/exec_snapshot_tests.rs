//! Snapshot tests for executor output
//!
//! Each test runs a small program and snapshots both sinks, results first, then a `--- err ---` separator and the
//! diagnostics.
//!
//! Review changes: `cargo insta review`

use lot::database::Database;
use lot::exec::Executor;
use lot::parser;

fn transcript(source: &str) -> String {
    let program = parser::parse_source(source).expect("parser failed");
    let mut db = Database::in_memory();
    let mut exec = Executor::new(Vec::new(), Vec::new());
    exec.execute(&program, &mut db);
    let (out, err) = exec.into_inner();
    format!(
        "{}--- err ---\n{}",
        String::from_utf8_lossy(&out),
        String::from_utf8_lossy(&err)
    )
    .trim_end()
    .to_string()
}

#[test]
fn test_status_alignment_snapshot() {
    let output = transcript(
        "create_parking_lot 12
         park KA-01-HH-1234 White
         park KA-01-P-333 Red
         park DL-12-AA-9999 Black
         leave 2
         status",
    );
    insta::assert_snapshot!(output, @r"
    Created a parking lot with 12 slots
    Allocated slot number: 1
    Allocated slot number: 2
    Allocated slot number: 3
    Slot number 2 is free
    Slot No.    Registration No    Colour
    1           KA-01-HH-1234      White
    3           DL-12-AA-9999      Black
    --- err ---
    ");
}

#[test]
fn test_queries_snapshot() {
    let output = transcript(
        "create_parking_lot 4
         park KA-01-HH-1234 White
         park KA-01-HH-9999 Black
         park KA-01-BB-0001 White
         registration_numbers_for_cars_with_colour White
         slot_numbers_for_cars_with_colour White
         slot_numbers_for_cars_with_colour Black
         slot_number_for_registration_number KA-01-BB-0001
         slot_number_for_registration_number KA-01-BB-0002
         registration_numbers_for_cars_with_colour Brown",
    );
    insta::assert_snapshot!(output, @r"
    Created a parking lot with 4 slots
    Allocated slot number: 1
    Allocated slot number: 2
    Allocated slot number: 3
    KA-01-HH-1234, KA-01-BB-0001
    1, 3
    2
    3
    --- err ---
    Not found
    Not found
    ");
}

#[test]
fn test_failures_snapshot() {
    let output = transcript(
        "park KA-01-HH-1234 White
         create_parking_lot 1
         park KA-01-HH-1234 white
         park KA-1-HH-1234 White
         park KA-01-HH-1234 White
         park KA-01-HH-1234 White
         park KA-01-HH-4321 White
         leave 0
         leave 2",
    );
    insta::assert_snapshot!(output, @r#"
    Created a parking lot with 1 slots
    Allocated slot number: 1
    --- err ---
    Sorry, parking lot is full
    car colour "white" is invalid
    car registration number "KA-1-HH-1234" is invalid
    Identity thieves are not welcome, calling police
    Sorry, parking lot is full
    slot number 0 out of range [1, 1]
    slot number 2 out of range [1, 1]
    "#);
}
