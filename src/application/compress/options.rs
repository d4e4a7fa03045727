//! Compress options

use std::ffi::OsString;

/// Programs used for the three stages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSet {
    /// Archive tool (`tar`)
    pub archiver: OsString,
    /// Compression tool (`lz4`)
    pub compressor: OsString,
    /// Removal tool (`rm`)
    pub remover: OsString,
}

impl Default for ToolSet {
    fn default() -> Self {
        Self {
            archiver: OsString::from("tar"),
            compressor: OsString::from("lz4"),
            remover: OsString::from("rm"),
        }
    }
}

/// Options for a compression run
#[derive(Debug, Clone, Default)]
pub struct CompressOptions {
    /// Programs to invoke
    pub tools: ToolSet,
}

impl CompressOptions {
    /// Create new compress options with the standard tools
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the archive program
    #[cfg(test)]
    pub(crate) fn with_archiver(mut self, program: impl Into<OsString>) -> Self {
        self.tools.archiver = program.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_tar_lz4_rm() {
        let options = CompressOptions::new();
        assert_eq!(options.tools.archiver, "tar");
        assert_eq!(options.tools.compressor, "lz4");
        assert_eq!(options.tools.remover, "rm");
    }

    #[test]
    fn archiver_can_be_replaced() {
        let options = CompressOptions::new().with_archiver("bsdtar");
        assert_eq!(options.tools.archiver, "bsdtar");
        assert_eq!(options.tools.compressor, "lz4");
        assert_eq!(options.tools.remover, "rm");
    }
}
