#![no_main]

use enumg::backend::CodeEmitter;
use enumg::frontend::{DescriptionModel, ini};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let document = ini::parse(s);
        // Only well-formed models reach the emitter
        if let Ok(model) = DescriptionModel::from_triples(&document.triples) {
            let _ = CodeEmitter::new(&model, "fuzz", "fuzz").emit();
        }
    }
});
