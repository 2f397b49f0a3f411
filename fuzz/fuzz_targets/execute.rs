#![no_main]

use libfuzzer_sys::fuzz_target;
use lot::database::Database;
use lot::exec::Executor;
use lot::parser;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(program) = parser::parse_source(s) {
            let mut db = Database::in_memory();
            Executor::new(std::io::sink(), std::io::sink()).execute(&program, &mut db);
        }
    }
});
