//! Parse then serialize must reproduce the input exactly.

use proptest::prelude::*;

use pbxedit::Manifest;

use crate::common::APP_PROJECT;

fn manifest_like_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("/* Begin PBXGroup section */".to_string()),
        Just("/* End PBXGroup section */".to_string()),
        Just("\t\tAB12 /* X */ = {".to_string()),
        Just("\t\t};".to_string()),
        Just("\t\t\tchildren = (".to_string()),
        Just("\t\t\t);".to_string()),
        Just("\t\t\t\tAB13 /* Y.swift */,".to_string()),
        Just("\t\tAB14 /* Z */ = {isa = PBXFileReference; path = Z; };".to_string()),
        proptest::string::string_regex("[ -~\t]{0,60}").unwrap(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: any text survives parse and serialize byte for byte.
    #[test]
    fn property_arbitrary_text_round_trips(text in "\\PC{0,400}") {
        prop_assert_eq!(Manifest::parse(&text).serialize(), text);
    }

    /// PROPERTY: descriptor-shaped lines, balanced or not, round-trip.
    #[test]
    fn property_manifest_like_lines_round_trip(
        lines in proptest::collection::vec(manifest_like_line(), 0..40),
        crlf in any::<bool>(),
        trailing_newline in any::<bool>(),
    ) {
        let newline = if crlf { "\r\n" } else { "\n" };
        let mut text = lines.join(newline);
        if trailing_newline {
            text.push_str(newline);
        }
        prop_assert_eq!(Manifest::parse(&text).serialize(), text);
    }

    /// PROPERTY: removing any name only drops lines that mention it.
    #[test]
    fn property_removal_keeps_unrelated_lines(
        name in prop_oneof![
            Just("ContentView.swift".to_string()),
            Just("AppTests.swift".to_string()),
            Just("Services".to_string()),
            "[A-Za-z]{1,8}\\.swift",
        ],
    ) {
        let mut manifest = Manifest::parse(APP_PROJECT);
        manifest.remove_lines_containing(&name);
        let out = manifest.serialize();

        prop_assert!(!out.contains(&name));
        // Every remaining line was an original line, in the original order
        let mut original = APP_PROJECT.lines();
        for line in out.lines() {
            prop_assert!(original.any(|o| o == line), "unexpected line {:?}", line);
        }
    }
}
