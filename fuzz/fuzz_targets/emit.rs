#![no_main]

use dubbogen::backend::Codegen;
use dubbogen::config::GeneratorConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Validated path: either rejected or emitted, never a panic
        let _ = Codegen::new(GeneratorConfig::default()).generate_from_json(s);
        // Permissive path: malformed IR still has to emit without panicking
        let _ = Codegen::new(GeneratorConfig::default().with_validation(false)).generate_from_json(s);
    }
});
