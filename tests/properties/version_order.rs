//! Property tests for version parsing and ordering.

use std::cmp::Ordering;

use proptest::prelude::*;

use cleaner::domain::value_objects::Version;

fn core() -> impl Strategy<Value = (u64, u64, u64)> {
    (0u64..50, 0u64..50, 0u64..50)
}

fn pre_release() -> impl Strategy<Value = Vec<String>> {
    let identifier = prop_oneof![
        (0u64..20).prop_map(|n| n.to_string()),
        proptest::string::string_regex("[a-z][a-z0-9]{0,5}").unwrap(),
    ];
    proptest::collection::vec(identifier, 0..=3)
}

fn version_string() -> impl Strategy<Value = String> {
    (core(), pre_release()).prop_map(|((major, minor, patch), pre)| {
        if pre.is_empty() {
            format!("{}.{}.{}", major, minor, patch)
        } else {
            format!("{}.{}.{}-{}", major, minor, patch, pre.join("."))
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Tolerant parsing never panics, whatever the filename held.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,64}") {
        let _ = Version::parse_tolerant(&s);
    }

    /// PROPERTY: Display output parses back to an equal version.
    #[test]
    fn property_display_reparses(s in version_string()) {
        let v = Version::parse_tolerant(&s).unwrap();
        let again = Version::parse_tolerant(&v.to_string()).unwrap();
        prop_assert_eq!(v, again);
    }

    /// PROPERTY: Ordering is antisymmetric and agrees with equality.
    #[test]
    fn property_ordering_is_consistent(a in version_string(), b in version_string()) {
        let va = Version::parse_tolerant(&a).unwrap();
        let vb = Version::parse_tolerant(&b).unwrap();
        prop_assert_eq!(va.cmp(&vb), vb.cmp(&va).reverse());
        prop_assert_eq!(va.cmp(&vb) == Ordering::Equal, va == vb);
    }

    /// PROPERTY: Ordering is transitive.
    #[test]
    fn property_ordering_is_transitive(
        a in version_string(),
        b in version_string(),
        c in version_string(),
    ) {
        let mut vs = [
            Version::parse_tolerant(&a).unwrap(),
            Version::parse_tolerant(&b).unwrap(),
            Version::parse_tolerant(&c).unwrap(),
        ];
        vs.sort();
        prop_assert!(vs[0] <= vs[1] && vs[1] <= vs[2] && vs[0] <= vs[2]);
    }

    /// PROPERTY: A pre-release sorts before the release with the same core,
    /// and the core triple dominates pre-release identifiers.
    #[test]
    fn property_release_outranks_its_prereleases(
        (major, minor, patch) in core(),
        pre in proptest::string::string_regex("[a-z][a-z0-9]{0,5}").unwrap(),
    ) {
        let release = Version::new(major, minor, patch);
        let candidate = Version::parse_tolerant(&format!("{}.{}.{}-{}", major, minor, patch, pre)).unwrap();
        let next_patch = Version::parse_tolerant(&format!("{}.{}.{}-{}", major, minor, patch + 1, pre)).unwrap();

        prop_assert!(candidate < release);
        prop_assert!(release < next_patch);
    }

    /// PROPERTY: Missing components pad with zero and a leading `v` is ignored.
    #[test]
    fn property_short_cores_pad_with_zero(major in 0u64..1000, minor in 0u64..1000) {
        prop_assert_eq!(
            Version::parse_tolerant(&format!("v{}", major)).unwrap(),
            Version::new(major, 0, 0)
        );
        prop_assert_eq!(
            Version::parse_tolerant(&format!("{}.{}", major, minor)).unwrap(),
            Version::new(major, minor, 0)
        );
    }

    /// PROPERTY: Build metadata never affects ordering.
    #[test]
    fn property_build_metadata_is_ignored(
        s in version_string(),
        build in proptest::string::string_regex("[a-zA-Z0-9]{1,8}").unwrap(),
    ) {
        let plain = Version::parse_tolerant(&s).unwrap();
        let with_build = Version::parse_tolerant(&format!("{}+{}", s, build)).unwrap();
        prop_assert_eq!(plain.cmp(&with_build), Ordering::Equal);
    }
}
