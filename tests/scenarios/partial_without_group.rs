//! Scenario: the project has neither the requested group nor the anchor
//!
//! `Bar.swift` is registered into `Services`, but the group is gone and
//! `ContentView.swift` (the anchor) was never added. The file reference,
//! build file and target membership are still written; the group step is
//! reported as skipped.

use pbxedit::domain::services::{RegistrationRequest, RegistrationStep};
use pbxedit::{FileOutcome, LocalFs, RegisterOptions, RegisterUseCase};

use crate::common::*;

#[test]
fn scenario_partial_registration_without_group_or_anchor() {
    let original = project_without_group_or_anchor();
    let env = TestEnv::with_manifest(&original);
    let manifest = env.path("App.xcodeproj/project.pbxproj");
    let requests = [RegistrationRequest::new("App/Services/Bar.swift").with_group("Services")];
    let options = RegisterOptions::new().with_anchor(Some("ContentView.swift".to_string()));

    let report = RegisterUseCase::new(LocalFs::new())
        .execute(&manifest, &requests, &options)
        .unwrap();

    assert!(report.written);
    assert!(!report.is_complete());
    let FileOutcome::Partial(registration) = &report.files[0].outcome else {
        panic!("expected a partial registration, got {:?}", report.files[0]);
    };
    assert_eq!(registration.skipped.len(), 1);
    assert_eq!(registration.skipped[0].step, RegistrationStep::GroupMembership);

    let text = env.manifest_text();
    assert_eq!(text.lines().count(), original.lines().count() + 3);
    assert_eq!(lines_with(&text, "Bar.swift").len(), 3);
}
