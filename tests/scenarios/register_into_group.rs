//! Scenario: register a new source file into a named group
//!
//! A developer adds `Foo.swift` under `App/Services` and registers it with
//! the first target and the `Services` group.
//!
//! Success Criteria:
//! - exactly four lines are added, each mentioning the file
//! - the group and the sources phase reference the new identifiers

use pbxedit::domain::services::RegistrationRequest;
use pbxedit::{FileOutcome, LocalFs, RegisterOptions, RegisterUseCase};

use crate::common::*;

#[test]
fn scenario_register_into_services_group() {
    let env = TestEnv::with_manifest(APP_PROJECT);
    let manifest = env.path("App.xcodeproj/project.pbxproj");
    let requests = [RegistrationRequest::new("App/Services/Foo.swift").with_group("Services")];

    let report = RegisterUseCase::new(LocalFs::new())
        .execute(&manifest, &requests, &RegisterOptions::new())
        .unwrap();

    assert!(report.written);
    assert_eq!(report.registered_count(), 1);
    let FileOutcome::Registered(registration) = &report.files[0].outcome else {
        panic!("expected a full registration, got {:?}", report.files[0]);
    };
    assert_eq!(
        registration.group.as_ref().map(|id| id.as_str()),
        Some("C30000000000000000000003")
    );
    assert_eq!(
        registration.target_phase.as_ref().map(|id| id.as_str()),
        Some("C50000000000000000000001")
    );

    let text = env.manifest_text();
    assert_eq!(text.lines().count(), APP_PROJECT.lines().count() + 4);

    let file_ref = registration.file_ref.as_ref().unwrap().to_string();
    let build_file = registration.build_file.as_ref().unwrap().to_string();
    let mentions = lines_with(&text, "Foo.swift");
    assert_eq!(mentions.len(), 4);
    assert_eq!(lines_with(&text, &file_ref).len(), 3);
    assert_eq!(lines_with(&text, &build_file).len(), 2);

    let leftovers: Vec<_> = std::fs::read_dir(env.bundle())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(leftovers, vec!["project.pbxproj"]);
}
