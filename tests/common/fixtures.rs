//! Reference manifests.

/// App with an `App` target, a `Services` group next to `ContentView.swift`,
/// and an `AppTests` target.
pub const APP_PROJECT: &str = r#"// !$*UTF8*$!
{
	archiveVersion = 1;
	classes = {
	};
	objectVersion = 56;
	objects = {

/* Begin PBXBuildFile section */
		C10000000000000000000001 /* ContentView.swift in Sources */ = {isa = PBXBuildFile; fileRef = C20000000000000000000001 /* ContentView.swift */; };
		C10000000000000000000002 /* AppTests.swift in Sources */ = {isa = PBXBuildFile; fileRef = C20000000000000000000002 /* AppTests.swift */; };
/* End PBXBuildFile section */

/* Begin PBXFileReference section */
		C20000000000000000000001 /* ContentView.swift */ = {isa = PBXFileReference; lastKnownFileType = sourcecode.swift; path = ContentView.swift; sourceTree = "<group>"; };
		C20000000000000000000002 /* AppTests.swift */ = {isa = PBXFileReference; lastKnownFileType = sourcecode.swift; path = AppTests.swift; sourceTree = "<group>"; };
		C20000000000000000000003 /* App.app */ = {isa = PBXFileReference; explicitFileType = wrapper.application; includeInIndex = 0; path = App.app; sourceTree = BUILT_PRODUCTS_DIR; };
/* End PBXFileReference section */

/* Begin PBXGroup section */
		C30000000000000000000001 = {
			isa = PBXGroup;
			children = (
				C30000000000000000000002 /* App */,
				C30000000000000000000004 /* AppTests */,
			);
			sourceTree = "<group>";
		};
		C30000000000000000000002 /* App */ = {
			isa = PBXGroup;
			children = (
				C20000000000000000000001 /* ContentView.swift */,
				C30000000000000000000003 /* Services */,
			);
			path = App;
			sourceTree = "<group>";
		};
		C30000000000000000000003 /* Services */ = {
			isa = PBXGroup;
			children = (
			);
			path = Services;
			sourceTree = "<group>";
		};
		C30000000000000000000004 /* AppTests */ = {
			isa = PBXGroup;
			children = (
				C20000000000000000000002 /* AppTests.swift */,
			);
			path = AppTests;
			sourceTree = "<group>";
		};
/* End PBXGroup section */

/* Begin PBXNativeTarget section */
		C40000000000000000000001 /* App */ = {
			isa = PBXNativeTarget;
			buildPhases = (
				C50000000000000000000001 /* Sources */,
			);
			name = App;
			productName = App;
			productReference = C20000000000000000000003 /* App.app */;
			productType = "com.apple.product-type.application";
		};
		C40000000000000000000002 /* AppTests */ = {
			isa = PBXNativeTarget;
			buildPhases = (
				C50000000000000000000002 /* Sources */,
			);
			name = AppTests;
			productName = AppTests;
			productType = "com.apple.product-type.bundle.unit-test";
		};
/* End PBXNativeTarget section */

/* Begin PBXProject section */
		C60000000000000000000001 /* Project object */ = {
			isa = PBXProject;
			mainGroup = C30000000000000000000001;
			targets = (
				C40000000000000000000001 /* App */,
				C40000000000000000000002 /* AppTests */,
			);
		};
/* End PBXProject section */

/* Begin PBXSourcesBuildPhase section */
		C50000000000000000000001 /* Sources */ = {
			isa = PBXSourcesBuildPhase;
			buildActionMask = 2147483647;
			files = (
				C10000000000000000000001 /* ContentView.swift in Sources */,
			);
			runOnlyForDeploymentPostprocessing = 0;
		};
		C50000000000000000000002 /* Sources */ = {
			isa = PBXSourcesBuildPhase;
			buildActionMask = 2147483647;
			files = (
				C10000000000000000000002 /* AppTests.swift in Sources */,
			);
			runOnlyForDeploymentPostprocessing = 0;
		};
/* End PBXSourcesBuildPhase section */
	};
	rootObject = C60000000000000000000001 /* Project object */;
}
"#;

/// `APP_PROJECT` without the `Services` group and without `ContentView.swift`.
pub fn project_without_group_or_anchor() -> String {
    let mut out = String::new();
    let mut in_services = false;
    for line in APP_PROJECT.lines() {
        if line.contains("/* Services */ = {") {
            in_services = true;
            continue;
        }
        if in_services {
            in_services = line != "\t\t};";
            continue;
        }
        if line.contains("ContentView.swift") || line.contains("/* Services */,") {
            continue;
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}
