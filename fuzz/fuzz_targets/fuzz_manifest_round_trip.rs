#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Parsing never fails and never loses a byte
        let manifest = pbxedit::Manifest::parse(text);
        assert_eq!(manifest.serialize(), text);
    }
});
