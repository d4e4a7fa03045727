#![no_main]

use libfuzzer_sys::fuzz_target;

use dirpress::{ArtifactPaths, NormalizedPath};

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        let normalized = NormalizedPath::new(raw);
        let artifacts = ArtifactPaths::for_target(&normalized);

        // Trailing separators never change the split
        let trailed = NormalizedPath::new(format!("{}/", raw));
        if normalized.is_archivable() && !raw.is_empty() {
            assert_eq!(normalized, trailed);
            assert_eq!(artifacts, ArtifactPaths::for_target(&trailed));
        }

        if normalized.is_archivable() {
            let base = normalized.base_name().to_string_lossy();
            assert!(!base.is_empty());
            assert!(!base.contains('/'));
        }
    }
});
