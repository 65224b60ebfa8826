//! Scenario: register the same file twice
//!
//! Running the same registration again must be a no-op: the file is
//! reported as already registered and the manifest is not rewritten.

use pbxedit::domain::services::RegistrationRequest;
use pbxedit::{FileOutcome, LocalFs, RegisterOptions, RegisterUseCase};

use crate::common::*;

#[test]
fn scenario_second_registration_is_skipped() {
    let env = TestEnv::with_manifest(APP_PROJECT);
    let manifest = env.path("App.xcodeproj/project.pbxproj");
    let requests = [RegistrationRequest::new("App/Services/Foo.swift").with_group("Services")];
    let use_case = RegisterUseCase::new(LocalFs::new());

    use_case
        .execute(&manifest, &requests, &RegisterOptions::new())
        .unwrap();
    let after_first = env.manifest_text();

    let report = use_case
        .execute(&manifest, &requests, &RegisterOptions::new())
        .unwrap();

    assert!(!report.written);
    assert_eq!(report.files[0].outcome, FileOutcome::AlreadyRegistered);
    assert_eq!(env.manifest_text(), after_first);
}
