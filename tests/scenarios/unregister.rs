//! Scenario: unregister a file
//!
//! After `Foo.swift` is registered, removing it by display name clears
//! every mention and restores the original manifest byte for byte.

use pbxedit::domain::services::RegistrationRequest;
use pbxedit::{
    LocalFs, RegisterOptions, RegisterUseCase, UnregisterOptions, UnregisterUseCase,
};

use crate::common::*;

#[test]
fn scenario_unregister_clears_every_mention() {
    let env = TestEnv::with_manifest(APP_PROJECT);
    let manifest = env.path("App.xcodeproj/project.pbxproj");
    let requests = [RegistrationRequest::new("App/Services/Foo.swift").with_group("Services")];
    RegisterUseCase::new(LocalFs::new())
        .execute(&manifest, &requests, &RegisterOptions::new())
        .unwrap();

    let report = UnregisterUseCase::new(LocalFs::new())
        .execute(&manifest, &["Foo.swift".to_string()], &UnregisterOptions::new())
        .unwrap();

    assert!(report.written);
    assert_eq!(report.total_removed(), 4);
    let text = env.manifest_text();
    assert!(!text.contains("Foo.swift"));
    assert_eq!(text, APP_PROJECT);
}
