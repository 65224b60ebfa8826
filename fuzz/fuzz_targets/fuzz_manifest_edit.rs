#![no_main]

use libfuzzer_sys::fuzz_target;
use pbxedit::domain::services::{register, unregister, RegistrationRequest};
use pbxedit::{Manifest, SequentialIdentifiers};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Edits on arbitrary input must not panic
    let mut manifest = Manifest::parse(text);
    let request = RegistrationRequest::new("Fuzz/FuzzTarget.swift").with_group("Fuzz");
    register(
        &mut manifest,
        &request,
        Some("Anchor.swift"),
        &mut SequentialIdentifiers::new(1),
    );
    unregister(&mut manifest, "FuzzTarget.swift");
    let _ = manifest.serialize();
});
