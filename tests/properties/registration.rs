//! Registration invariants over generated file names.

use proptest::prelude::*;

use pbxedit::domain::services::{
    is_registered, register, unregister, DuplicateCheck, RegistrationRequest,
};
use pbxedit::{Manifest, SequentialIdentifiers};

use crate::common::APP_PROJECT;

fn file_name() -> impl Strategy<Value = String> {
    ("[A-Z][A-Za-z0-9]{2,12}", prop_oneof![Just("swift"), Just("m"), Just("h"), Just("metal")])
        .prop_map(|(stem, ext)| format!("{}.{}", stem, ext))
        .prop_filter("not already in the fixture", |name| {
            !APP_PROJECT.contains(name.as_str())
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a full registration adds four lines, all naming the file.
    #[test]
    fn property_registration_adds_four_coupled_lines(name in file_name(), seed in 1u64..1_000_000) {
        let mut manifest = Manifest::parse(APP_PROJECT);
        let request = RegistrationRequest::new(format!("App/Services/{}", name)).with_group("Services");

        let result = register(&mut manifest, &request, None, &mut SequentialIdentifiers::new(seed));
        prop_assert!(result.is_complete());

        let out = manifest.serialize();
        prop_assert_eq!(out.lines().count(), APP_PROJECT.lines().count() + 4);
        prop_assert_eq!(out.lines().filter(|l| l.contains(name.as_str())).count(), 4);
        prop_assert!(is_registered(&manifest, &name, DuplicateCheck::Indexed));
    }

    /// PROPERTY: register then unregister restores the manifest.
    #[test]
    fn property_unregister_undoes_register(name in file_name()) {
        let mut manifest = Manifest::parse(APP_PROJECT);
        let request = RegistrationRequest::new(&name).with_group("Services");
        register(&mut manifest, &request, None, &mut SequentialIdentifiers::new(1));

        prop_assert_eq!(unregister(&mut manifest, &name), 4);
        prop_assert_eq!(manifest.serialize(), APP_PROJECT);
        prop_assert!(!is_registered(&manifest, &name, DuplicateCheck::Indexed));
    }

    /// PROPERTY: both duplicate checks agree on a freshly registered file.
    #[test]
    fn property_duplicate_checks_agree(name in file_name()) {
        let mut manifest = Manifest::parse(APP_PROJECT);
        prop_assert!(!is_registered(&manifest, &name, DuplicateCheck::Textual));

        let request = RegistrationRequest::new(&name).with_group("Services");
        register(&mut manifest, &request, None, &mut SequentialIdentifiers::new(7));

        prop_assert!(is_registered(&manifest, &name, DuplicateCheck::Textual));
        prop_assert!(is_registered(&manifest, &name, DuplicateCheck::Indexed));
    }
}
