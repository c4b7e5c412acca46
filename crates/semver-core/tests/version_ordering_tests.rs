use std::cmp::Ordering;
use std::collections::HashSet;

use pretty_assertions::assert_eq;
use semver_core::Version;

#[track_caller]
fn v(version: &str) -> Version {
    Version::parse(version).unwrap()
}

/// The canonical precedence chain from the SemVer 2.0.0 specification.
const PRECEDENCE_CHAIN: [&str; 8] = [
    "1.0.0-alpha",
    "1.0.0-alpha.1",
    "1.0.0-alpha.beta",
    "1.0.0-beta",
    "1.0.0-beta.2",
    "1.0.0-beta.11",
    "1.0.0-rc.1",
    "1.0.0",
];

#[test]
fn precedence_chain_holds_pairwise_and_transitively() {
    for (i, lower) in PRECEDENCE_CHAIN.iter().enumerate() {
        for higher in &PRECEDENCE_CHAIN[i + 1..] {
            assert!(
                v(lower) < v(higher),
                "expected {lower} < {higher}"
            );
            assert!(
                v(higher) > v(lower),
                "expected {higher} > {lower}"
            );
        }
    }
}

#[test]
fn exactly_one_relation_holds_for_every_pair() {
    let fixtures = [
        "0.0.0",
        "0.0.1",
        "1.0.0-alpha",
        "1.0.0-alpha.1",
        "1.0.0-1",
        "1.0.0",
        "1.0.0+build",
        "1.0.1",
        "2.0.0-rc.1",
        "2.0.0",
    ];
    for a in fixtures {
        for b in fixtures {
            let (a, b) = (v(a), v(b));
            let relations = [a < b, a == b, a > b];
            assert_eq!(
                relations.iter().filter(|&&holds| holds).count(),
                1,
                "trichotomy violated for {a} vs {b}"
            );
        }
    }
}

#[test]
fn sorting_produces_precedence_order() {
    let mut versions = vec![
        v("1.0.0"),
        v("1.0.0-rc.1"),
        v("0.9.0"),
        v("1.0.0-alpha.beta"),
        v("1.0.0-beta.11"),
        v("1.0.0-alpha"),
        v("1.2.0"),
        v("1.0.0-beta.2"),
    ];
    versions.sort();
    let sorted: Vec<String> = versions.iter().map(Version::to_string).collect();
    assert_eq!(
        sorted,
        vec![
            "0.9.0",
            "1.0.0-alpha",
            "1.0.0-alpha.beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
            "1.2.0",
        ]
    );
}

#[test]
fn build_metadata_is_invisible_to_ordering_and_equality() {
    assert_eq!(v("1.0.0+a").cmp(&v("1.0.0+b")), Ordering::Equal);
    assert_eq!(v("1.0.0+a"), v("1.0.0"));
    assert_eq!(v("1.0.0-rc.1+sha.5114f85"), v("1.0.0-rc.1"));
}

#[test]
fn hash_set_treats_build_metadata_variants_as_one_version() {
    let mut set = HashSet::new();
    set.insert(v("1.2.3+linux"));
    assert!(set.contains(&v("1.2.3+macos")));
    assert!(set.contains(&v("1.2.3")));
    assert!(!set.contains(&v("1.2.3-rc.1")));

    set.insert(v("1.2.3+macos"));
    assert_eq!(set.len(), 1);
}

#[test]
fn comparison_is_byte_ordinal_not_length_padded() {
    // "alpha.1" vs "alpha.beta": Numeric(1) sorts before Alphanumeric("beta")
    assert!(v("1.0.0-alpha.1") < v("1.0.0-alpha.beta"));
    // raw byte comparison: uppercase sorts before lowercase in ASCII
    assert!(v("1.0.0-RC.1") < v("1.0.0-rc.1"));
    // no equal-length padding: "11" as a number beats "2"
    assert!(v("1.0.0-beta.2") < v("1.0.0-beta.11"));
    // but as raw bytes an alphanumeric "11a" loses to "2a"
    assert!(v("1.0.0-11a") < v("1.0.0-2a"));
}

#[test]
fn version_equality_matches_identifier_sequence_equality() {
    let a = v("1.0.0-alpha.1");
    let b = Version::from_parts(1, 0, 0, Some("alpha.1"), None).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.pre_release_identifiers(), b.pre_release_identifiers());
    assert_ne!(v("1.0.0-alpha.1"), v("1.0.0-alpha.2"));
}
