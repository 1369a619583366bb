//! Reusable fixture content.

/// Files seeded under the base directory
pub const SEED: &[&str] = &[
    "a/tile1-1.0.0-beta1.pivotal",
    "a/tile1-1.0.0-beta2.pivotal",
    "a/tile1-1.0.0-rc1.pivotal",
    "a/tile1-1.0.0.pivotal",
    "a/tile1-1.0.2.pivotal",
    "a/tile2-2.3.10.pivotal",
    "a/tile2-2.3.4.pivotal",
    "a/tile2-2.3.5.pivotal",
    "a/tile2-2.3.6.pivotal",
    "a/tile2-2.3.7.pivotal",
    "a/tile2-2.3.8.pivotal",
    "a/tile2-2.3.9.pivotal",
    "b/sc-3498.5.tgz",
    "b/sc-3498.6.tgz",
    "c/foo-1.23.4.ova",
    "c/foo.ova",
    "busted/weird-1.2.3.txt",
    "busted/weird-1.2.3-beta1.txt",
    "busted/weird-2.4-build3.txt",
    "busted/weird-3-rc1.txt",
];

/// Bucket rules matching `SEED`
pub const SEED_BUCKETS: &str = r#"
[[bucket]]
name = "a"

[[bucket.file]]
pattern = "tile1-(.*).pivotal"
retainer = 3

[[bucket.file]]
pattern = "tile2-(.*).pivotal"
retainer = 4

[[bucket]]
name = "b"

[[bucket.file]]
pattern = "sc-(.*).tgz"
retainer = 2

[[bucket]]
name = "c"

[[bucket.file]]
pattern = "foo-(.*).ova"
retainer = 0

[[bucket]]
name = "busted"

[[bucket.file]]
pattern = "weird-(.*).txt"
retainer = 1
"#;

/// Files a real pass over `SEED` removes
pub const SEED_DELETED: &[&str] = &[
    "a/tile1-1.0.0-beta1.pivotal",
    "a/tile1-1.0.0-beta2.pivotal",
    "a/tile2-2.3.4.pivotal",
    "a/tile2-2.3.5.pivotal",
    "a/tile2-2.3.6.pivotal",
    "c/foo-1.23.4.ova",
    "busted/weird-1.2.3-beta1.txt",
    "busted/weird-1.2.3.txt",
    "busted/weird-2.4-build3.txt",
];
