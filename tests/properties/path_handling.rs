//! Property tests for target path normalization and artifact naming.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use dirpress::{ArtifactPaths, NormalizedPath};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9._ -]{0,15}")
        .unwrap()
        .prop_filter("not a dot entry", |s| s != "." && s != "..")
}

fn relative_dir() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 1..=4).prop_map(|segments| segments.join("/"))
}

fn dir_path() -> impl Strategy<Value = String> {
    (relative_dir(), any::<bool>()).prop_map(|(rel, absolute)| {
        if absolute {
            format!("/{}", rel)
        } else {
            rel
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Normalization never panics on arbitrary input.
    #[test]
    fn property_normalize_never_panics(s in "(?s).{0,256}") {
        let normalized = NormalizedPath::new(&s);
        let _ = ArtifactPaths::for_target(&normalized);
    }

    /// PROPERTY: Any number of trailing separators yields the same
    /// `(parent, base_name)` pair.
    #[test]
    fn property_trailing_separators_do_not_change_split(
        path in dir_path(),
        slashes in 1usize..4,
    ) {
        let bare = NormalizedPath::new(&path);
        let trailed = NormalizedPath::new(format!("{}{}", path, "/".repeat(slashes)));

        prop_assert_eq!(bare.parent(), trailed.parent());
        prop_assert_eq!(bare.base_name(), trailed.base_name());
        prop_assert_eq!(
            ArtifactPaths::for_target(&bare),
            ArtifactPaths::for_target(&trailed)
        );
    }

    /// PROPERTY: The base name is a single component with no separator.
    #[test]
    fn property_base_name_has_no_separator(path in dir_path(), trailing in any::<bool>()) {
        let input = if trailing { format!("{}/", path) } else { path.clone() };
        let normalized = NormalizedPath::new(&input);

        prop_assert!(normalized.is_archivable());
        let base = normalized.base_name().to_string_lossy().to_string();
        prop_assert!(!base.is_empty());
        prop_assert!(!base.contains('/'));
        prop_assert_eq!(Some(base.as_str()), path.rsplit('/').next());
    }

    /// PROPERTY: `parent / base_name` reconstructs the path with trailing
    /// separators removed.
    #[test]
    fn property_join_reconstructs_target(path in dir_path()) {
        let normalized = NormalizedPath::new(format!("{}/", path));
        let expected: PathBuf = Path::new(&path).components().collect();

        let joined = normalized.joined();
        let joined: PathBuf = joined
            .strip_prefix(".")
            .map(Path::to_path_buf)
            .unwrap_or(joined);
        prop_assert_eq!(joined, expected);
    }

    /// PROPERTY: Artifacts are siblings of the target named after its base.
    #[test]
    fn property_artifacts_are_siblings(path in dir_path()) {
        let normalized = NormalizedPath::new(&path);
        let artifacts = ArtifactPaths::for_target(&normalized);

        prop_assert_eq!(artifacts.archive().parent(), Some(normalized.parent()));
        prop_assert_eq!(artifacts.compressed().parent(), Some(normalized.parent()));

        let base = normalized.base_name().to_string_lossy().to_string();
        prop_assert_eq!(
            artifacts.archive().file_name().map(|n| n.to_string_lossy().to_string()),
            Some(format!("{}.tar", base))
        );
        prop_assert_eq!(
            artifacts.compressed().file_name().map(|n| n.to_string_lossy().to_string()),
            Some(format!("{}.tar.lz4", base))
        );
    }
}
