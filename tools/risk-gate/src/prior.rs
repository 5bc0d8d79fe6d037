//! Placeholder prior-vulnerability signal.
//!
//! The default implementation hashes the repository's file listing into a
//! stable number in [0,20]. It carries no real security signal; it exists so
//! the aggregator has its fourth term wired through a stable seam. A
//! production deployment swaps in a genuine historical-defect-density feed
//! behind the same trait.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Source of the prior-vulnerability estimate. Implementations return a
/// value in [0,20] and never fail.
pub trait PriorEstimator {
  fn estimate(&self) -> u32;
}

/// Hash-derived stand-in: file names (not contents) of the first 200 files
/// under the root, lexicographically sorted by path, digested with blake3
/// and reduced modulo 21. Changes only when the file listing changes.
pub struct FileListingPrior {
  root: PathBuf,
}

const MAX_LISTED_FILES: usize = 200;

impl FileListingPrior {
  pub fn new(root: &Path) -> Self {
    Self {
      root: root.to_path_buf(),
    }
  }
}

impl PriorEstimator for FileListingPrior {
  fn estimate(&self) -> u32 {
    let mut files: Vec<PathBuf> = WalkDir::new(&self.root)
      .into_iter()
      .filter_entry(|e| e.file_name() != ".git")
      .filter_map(Result::ok)
      .filter(|e| e.file_type().is_file())
      .map(|e| e.into_path())
      .collect();
    files.sort();

    let mut hasher = blake3::Hasher::new();
    for path in files.iter().take(MAX_LISTED_FILES) {
      if let Some(name) = path.file_name() {
        hasher.update(name.as_encoded_bytes());
        hasher.update(b"|");
      }
    }
    let digest = hasher.finalize();
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest.as_bytes()[..8]);
    (u64::from_le_bytes(prefix) % 21) as u32
  }
}
