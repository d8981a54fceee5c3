#![no_main]
use libfuzzer_sys::fuzz_target;
use river_equity::holdem::label_raw;

fuzz_target!(|data: &[u8]| {
    // Malformed input has to come back as an error, never a panic.
    if let Ok(label) = label_raw(data) {
        assert!(!label.description.is_empty());
    }
});
