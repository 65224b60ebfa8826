#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Plan parsing and request expansion should never panic
        if let Ok(plan) = toml::from_str::<pbxedit::config::Plan>(content) {
            let _ = plan.requests();
        }
    }
});
