#![no_main]

use libfuzzer_sys::fuzz_target;
use record_mapper_core::{camel_to_snake, snake_to_camel, CaseCodec};

// Arbitrary bytes into the decoder and both key converters. Goal: no panics.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let codec = CaseCodec::new();
    if let Ok(decoded) = codec.decode(text) {
        let _ = codec.encode(&decoded);
    }

    let _ = camel_to_snake(text);
    let _ = snake_to_camel(text);
});
