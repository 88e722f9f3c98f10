//! Local file cache of fetched puzzle inputs

use crate::identity::PuzzleId;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File-based cache for puzzle inputs.
///
/// One file per puzzle under the base directory, named
/// `input-{year:04}-day{day:02}.txt`. A present non-empty file means no
/// network fetch is needed; cached inputs are never invalidated beyond the
/// emptiness check.
pub struct InputCache {
    base_dir: PathBuf,
}

impl InputCache {
    /// Create a cache rooted at `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// The cache file path for a puzzle
    pub fn path(&self, id: PuzzleId) -> PathBuf {
        self.base_dir
            .join(format!("input-{:04}-day{:02}.txt", id.year(), id.day()))
    }

    /// The base directory this cache is rooted at
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Whether a usable cached input exists
    pub fn contains(&self, id: PuzzleId) -> bool {
        fs::metadata(self.path(id)).map(|m| m.len() > 0).unwrap_or(false)
    }

    /// Cached input, or `None` on a miss. An empty file counts as a miss.
    pub fn get(&self, id: PuzzleId) -> Result<Option<String>, io::Error> {
        match fs::read_to_string(self.path(id)) {
            Ok(data) if !data.is_empty() => Ok(Some(data)),
            Ok(_) => Ok(None),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Store input, overwriting any previous file
    pub fn put(&self, id: PuzzleId, input: &str) -> Result<(), io::Error> {
        fs::create_dir_all(&self.base_dir)?;
        fs::write(self.path(id), input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn id(year: u16, day: u8) -> PuzzleId {
        PuzzleId::new(year, day).unwrap()
    }

    #[test]
    fn test_cache_path_format() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path());

        let path = cache.path(id(2023, 1));
        assert!(path.to_string_lossy().ends_with("input-2023-day01.txt"));

        let path = cache.path(id(2024, 25));
        assert!(path.to_string_lossy().ends_with("input-2024-day25.txt"));
    }

    #[test]
    fn test_cache_roundtrip() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path());

        assert!(!cache.contains(id(2023, 1)));
        assert!(cache.get(id(2023, 1)).unwrap().is_none());

        let input = "1\n2\n3\n";
        cache.put(id(2023, 1), input).unwrap();

        assert!(cache.contains(id(2023, 1)));
        assert_eq!(cache.get(id(2023, 1)).unwrap(), Some(input.to_string()));
    }

    #[test]
    fn test_empty_file_is_a_miss() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path());

        fs::write(cache.path(id(2022, 7)), "").unwrap();

        assert!(!cache.contains(id(2022, 7)));
        assert!(cache.get(id(2022, 7)).unwrap().is_none());
    }

    #[test]
    fn test_put_creates_base_dir() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path().join("nested"));

        cache.put(id(2021, 3), "data\n").unwrap();
        assert_eq!(cache.get(id(2021, 3)).unwrap(), Some("data\n".to_string()));
    }

    #[test]
    fn test_put_overwrites() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path());

        cache.put(id(2020, 9), "old\n").unwrap();
        cache.put(id(2020, 9), "new\n").unwrap();
        assert_eq!(cache.get(id(2020, 9)).unwrap(), Some("new\n".to_string()));
    }
}
