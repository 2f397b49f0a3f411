#![no_main]

use libfuzzer_sys::fuzz_target;
use lot::{lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Ignore invalid UTF-8
    if let Ok(s) = std::str::from_utf8(data) {
        let tokens = lexer::lex(s);
        let _ = parser::parse(&tokens);
    }
});
