//! Descriptor fixtures shared by unit tests.

/// App target `App` with a `Services` group, a placeholder `ContentView.x`,
/// and a test target `AppTests`.
pub(crate) const PROJECT: &str = r#"// !$*UTF8*$!
{
	archiveVersion = 1;
	classes = {
	};
	objectVersion = 56;
	objects = {

/* Begin PBXBuildFile section */
		A10000000000000000000001 /* ContentView.x in Sources */ = {isa = PBXBuildFile; fileRef = A20000000000000000000001 /* ContentView.x */; };
		A10000000000000000000002 /* AppTests.x in Sources */ = {isa = PBXBuildFile; fileRef = A20000000000000000000002 /* AppTests.x */; };
/* End PBXBuildFile section */

/* Begin PBXFileReference section */
		A20000000000000000000001 /* ContentView.x */ = {isa = PBXFileReference; lastKnownFileType = text; path = ContentView.x; sourceTree = "<group>"; };
		A20000000000000000000002 /* AppTests.x */ = {isa = PBXFileReference; lastKnownFileType = text; path = AppTests.x; sourceTree = "<group>"; };
		A20000000000000000000003 /* App.app */ = {isa = PBXFileReference; explicitFileType = wrapper.application; includeInIndex = 0; path = App.app; sourceTree = BUILT_PRODUCTS_DIR; };
/* End PBXFileReference section */

/* Begin PBXGroup section */
		A30000000000000000000001 = {
			isa = PBXGroup;
			children = (
				A30000000000000000000002 /* App */,
				A30000000000000000000004 /* AppTests */,
			);
			sourceTree = "<group>";
		};
		A30000000000000000000002 /* App */ = {
			isa = PBXGroup;
			children = (
				A20000000000000000000001 /* ContentView.x */,
				A30000000000000000000003 /* Services */,
			);
			path = App;
			sourceTree = "<group>";
		};
		A30000000000000000000003 /* Services */ = {
			isa = PBXGroup;
			children = (
			);
			path = Services;
			sourceTree = "<group>";
		};
		A30000000000000000000004 /* AppTests */ = {
			isa = PBXGroup;
			children = (
				A20000000000000000000002 /* AppTests.x */,
			);
			path = AppTests;
			sourceTree = "<group>";
		};
/* End PBXGroup section */

/* Begin PBXNativeTarget section */
		A40000000000000000000001 /* App */ = {
			isa = PBXNativeTarget;
			buildConfigurationList = A70000000000000000000001 /* Build configuration list for PBXNativeTarget "App" */;
			buildPhases = (
				A50000000000000000000001 /* Sources */,
			);
			name = App;
			productName = App;
			productReference = A20000000000000000000003 /* App.app */;
			productType = "com.apple.product-type.application";
		};
		A40000000000000000000002 /* AppTests */ = {
			isa = PBXNativeTarget;
			buildPhases = (
				A50000000000000000000002 /* Sources */,
			);
			name = AppTests;
			productName = AppTests;
			productType = "com.apple.product-type.bundle.unit-test";
		};
/* End PBXNativeTarget section */

/* Begin PBXSourcesBuildPhase section */
		A50000000000000000000001 /* Sources */ = {
			isa = PBXSourcesBuildPhase;
			buildActionMask = 2147483647;
			files = (
				A10000000000000000000001 /* ContentView.x in Sources */,
			);
			runOnlyForDeploymentPostprocessing = 0;
		};
		A50000000000000000000002 /* Sources */ = {
			isa = PBXSourcesBuildPhase;
			buildActionMask = 2147483647;
			files = (
				A10000000000000000000002 /* AppTests.x in Sources */,
			);
			runOnlyForDeploymentPostprocessing = 0;
		};
/* End PBXSourcesBuildPhase section */
	};
	rootObject = A60000000000000000000001 /* Project object */;
}
"#;

const SERVICES_GROUP: &str = "\t\tA30000000000000000000003 /* Services */ = {\n\t\t\tisa = PBXGroup;\n\t\t\tchildren = (\n\t\t\t);\n\t\t\tpath = Services;\n\t\t\tsourceTree = \"<group>\";\n\t\t};\n";

/// Same project without the `Services` group and without `ContentView.x`.
pub(crate) fn project_without_group_or_anchor() -> String {
    PROJECT
        .replace(SERVICES_GROUP, "")
        .lines()
        .filter(|line| !line.contains("ContentView.x") && !line.contains("/* Services */,"))
        .map(|line| format!("{line}\n"))
        .collect()
}
