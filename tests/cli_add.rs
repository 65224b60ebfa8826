mod common;

use common::*;

const FILE_REF: &str = "000000000000000000000001";
const BUILD_FILE: &str = "000000000000000000000002";

#[test]
fn test_add_registers_four_lines() {
    let env = TestEnv::with_manifest(APP_PROJECT);

    let result = env.run(&[
        "add",
        &env.bundle_arg(),
        "App/Services/Foo.swift",
        "--group",
        "Services",
        "--seed",
        "1",
    ]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("✓ Foo.swift"), "{}", result.stdout);
    assert!(result
        .stdout
        .contains("1 registered, 0 partial, 0 already registered"));

    let text = env.manifest_text();
    assert_eq!(text.lines().count(), APP_PROJECT.lines().count() + 4);
    assert_eq!(lines_with(&text, "Foo.swift"), vec![
        format!("\t\t{BUILD_FILE} /* Foo.swift in Sources */ = {{isa = PBXBuildFile; fileRef = {FILE_REF} /* Foo.swift */; }};"),
        format!("\t\t{FILE_REF} /* Foo.swift */ = {{isa = PBXFileReference; lastKnownFileType = sourcecode.swift; path = Foo.swift; sourceTree = \"<group>\"; }};"),
        format!("\t\t\t\t{FILE_REF} /* Foo.swift */,"),
        format!("\t\t\t\t{BUILD_FILE} /* Foo.swift in Sources */,"),
    ]);
}

#[test]
fn test_add_twice_skips_second_run() {
    let env = TestEnv::with_manifest(APP_PROJECT);
    let args = ["add", &env.bundle_arg(), "Foo.swift", "--group", "Services"];

    assert!(env.run(&args).success);
    let after_first = env.manifest_text();

    let result = env.run(&args);
    assert!(result.success);
    assert!(result
        .stdout
        .contains("○ Foo.swift (already registered)"));
    assert!(result.stdout.contains("(manifest unchanged)"));
    assert_eq!(env.manifest_text(), after_first);
}

#[test]
fn test_add_existing_file_is_skipped() {
    let env = TestEnv::with_manifest(APP_PROJECT);
    let result = env.run(&["add", &env.bundle_arg(), "App/ContentView.swift"]);

    assert!(result.success);
    assert!(result.stdout.contains("0 registered, 0 partial, 1 already registered"));
    assert_eq!(env.manifest_text(), APP_PROJECT);
}

#[test]
fn test_add_dry_run_prints_diff_and_keeps_file() {
    let env = TestEnv::with_manifest(APP_PROJECT);
    let result = env.run(&[
        "add",
        &env.bundle_arg(),
        "Foo.swift",
        "--group",
        "Services",
        "--dry-run",
    ]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(env.manifest_text(), APP_PROJECT);
    assert!(result.stdout.contains("--- a/project.pbxproj"));
    assert_eq!(
        result
            .stdout
            .lines()
            .filter(|l| l.contains(" + ") && l.contains("Foo.swift"))
            .count(),
        4,
        "{}",
        result.stdout
    );
    assert!(result.stdout.contains("dry run, nothing written"));
}

#[test]
fn test_add_into_named_target_and_group() {
    let env = TestEnv::with_manifest(APP_PROJECT);
    let result = env.run(&[
        "add",
        &env.bundle_arg(),
        "AppTests/FooTests.swift",
        "--target",
        "AppTests",
        "--group",
        "AppTests",
    ]);
    assert!(result.success, "stderr:\n{}", result.stderr);

    let text = env.manifest_text();
    let phase = text
        .split("C50000000000000000000002 /* Sources */ = {")
        .nth(1)
        .unwrap();
    assert!(phase.split("};").next().unwrap().contains("FooTests.swift in Sources"));
}

#[test]
fn test_add_target_id_selects_phase() {
    let env = TestEnv::with_manifest(APP_PROJECT);
    let result = env.run(&[
        "add",
        &env.bundle_arg(),
        "Foo.swift",
        "--target-id",
        "C40000000000000000000002",
        "--group",
        "AppTests",
    ]);
    assert!(result.success, "stderr:\n{}", result.stderr);

    let text = env.manifest_text();
    let first_phase = text
        .split("C50000000000000000000001 /* Sources */ = {")
        .nth(1)
        .unwrap();
    assert!(!first_phase.split("};").next().unwrap().contains("Foo.swift"));
}

#[test]
fn test_add_unknown_group_is_partial() {
    let env = TestEnv::with_manifest(APP_PROJECT);
    let result = env.run(&["add", &env.bundle_arg(), "Foo.swift", "--group", "Models"]);

    assert!(result.success, "partial registration is not fatal");
    assert!(result.stdout.contains("⚠ Foo.swift (partial)"));
    assert!(result
        .stdout
        .contains("group membership skipped: no group 'Models'"));
    assert_eq!(lines_with(&env.manifest_text(), "Foo.swift").len(), 3);
}

#[test]
fn test_add_anchor_fallback() {
    let env = TestEnv::with_manifest(APP_PROJECT);
    let result = env.run(&[
        "add",
        &env.bundle_arg(),
        "Foo.swift",
        "--group",
        "Models",
        "--anchor",
        "ContentView.swift",
    ]);

    assert!(result.success);
    assert!(result.stdout.contains("✓ Foo.swift"), "{}", result.stdout);
    let text = env.manifest_text();
    let app_group = text
        .split("C30000000000000000000002 /* App */ = {")
        .nth(1)
        .unwrap();
    assert!(app_group.split(");").next().unwrap().contains("/* Foo.swift */,"));
}

#[test]
fn test_add_group_from_environment() {
    let env = TestEnv::with_manifest(APP_PROJECT);
    let result = env.run_with_env(
        &["add", &env.bundle_arg(), "Foo.swift"],
        &[("PBXEDIT_GROUP", "Services")],
    );

    assert!(result.success);
    let text = env.manifest_text();
    let services = text
        .split("C30000000000000000000003 /* Services */ = {")
        .nth(1)
        .unwrap();
    assert!(services.split(");").next().unwrap().contains("/* Foo.swift */,"));
}

#[test]
fn test_add_json_events() {
    let env = TestEnv::with_manifest(APP_PROJECT);
    let result = env.run(&[
        "--json",
        "add",
        &env.bundle_arg(),
        "Foo.swift",
        "Bar.swift",
        "--group",
        "Services",
        "--seed",
        "1",
    ]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let events = result.events();
    assert_eq!(events.len(), 4);
    assert_eq!(events[0]["event"], "start");
    assert_eq!(events[0]["command"], "add");
    assert_eq!(events[0]["files"], 2);
    assert_eq!(events[1]["event"], "file");
    assert_eq!(events[1]["name"], "Foo.swift");
    assert_eq!(events[1]["status"], "registered");
    assert_eq!(events[1]["file_ref"], FILE_REF);
    assert_eq!(events[2]["name"], "Bar.swift");
    assert_eq!(events[3]["event"], "complete");
    assert_eq!(events[3]["registered"], 2);
    assert_eq!(events[3]["written"], true);
}

#[test]
fn test_add_display_name_differs_from_path() {
    let env = TestEnv::with_manifest(APP_PROJECT);
    let result = env.run(&[
        "add",
        &env.bundle_arg(),
        "Generated/Foo.generated.swift",
        "--name",
        "Foo.swift",
        "--group",
        "Services",
    ]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let text = env.manifest_text();
    assert!(text.contains("name = Foo.swift; path = Foo.generated.swift;"));
}

#[test]
fn test_add_name_with_several_files_fails() {
    let env = TestEnv::with_manifest(APP_PROJECT);
    let result = env.run(&["add", &env.bundle_arg(), "a.swift", "b.swift", "--name", "c.swift"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert_eq!(env.manifest_text(), APP_PROJECT);
}
