//! Property tests for retention selection and a full dry-run pass.

use std::collections::BTreeSet;

use proptest::prelude::*;

use cleaner::domain::entities::{Bucket, RetentionRule};
use cleaner::domain::services::RetentionSelector;
use cleaner::infrastructure::LocalFs;
use cleaner::{CleanOptions, CleanUseCase, Version};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `max(0, len - retain)` oldest entries go, the rest stay in order.
    #[test]
    fn property_select_splits_oldest_prefix(len in 0usize..64, retain in 0usize..80) {
        let ascending: Vec<usize> = (0..len).collect();
        let (delete, keep) = RetentionSelector::select(&ascending, retain);

        let expected = if len > retain { len - retain } else { 0 };
        prop_assert_eq!(delete.len(), expected);
        prop_assert_eq!(keep.len(), len.min(retain));
        prop_assert_eq!(&ascending[..expected], delete);
        prop_assert_eq!(&ascending[expected..], keep);
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A pass keeps exactly the newest `retain` versions on disk,
    /// no matter the order the directory lists them in.
    #[test]
    fn property_pass_keeps_newest_versions(
        cores in proptest::collection::btree_set((0u64..20, 0u64..20, 0u64..20), 0..12),
        retain in 0usize..6,
    ) {
        let dir = tempfile::tempdir().unwrap();
        let bucket_dir = dir.path().join("pkg");
        std::fs::create_dir_all(&bucket_dir).unwrap();

        let names: Vec<String> = cores
            .iter()
            .map(|(a, b, c)| format!("app-{}.{}.{}.tar", a, b, c))
            .collect();
        for name in &names {
            std::fs::write(bucket_dir.join(name), "").unwrap();
        }
        std::fs::write(bucket_dir.join("README"), "").unwrap();

        let rule = RetentionRule::new("pkg", "app-(.*).tar", retain).unwrap();
        let buckets = vec![Bucket::new("pkg", vec![rule]).unwrap()];
        let use_case = CleanUseCase::new(LocalFs::new());

        let mut out = Vec::new();
        let result = use_case
            .run(dir.path(), &buckets, &CleanOptions::new(), &mut out)
            .unwrap();

        let mut by_version: Vec<(Version, &String)> = cores
            .iter()
            .map(|(a, b, c)| Version::new(*a, *b, *c))
            .zip(names.iter())
            .collect();
        by_version.sort();
        let expected_deleted = names.len().saturating_sub(retain);
        let expected_kept: BTreeSet<&str> = by_version[expected_deleted..]
            .iter()
            .map(|(_, name)| name.as_str())
            .collect();

        let remaining: BTreeSet<String> = std::fs::read_dir(&bucket_dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|n| n != "README")
            .collect();
        let remaining: BTreeSet<&str> = remaining.iter().map(String::as_str).collect();

        prop_assert_eq!(result.deleted.len(), expected_deleted);
        prop_assert_eq!(remaining, expected_kept);
        prop_assert!(bucket_dir.join("README").exists());
    }
}
