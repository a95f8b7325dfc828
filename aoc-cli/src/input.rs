//! Puzzle inputs read from the local filesystem

use crate::error::InputError;
use std::fs;
use std::path::PathBuf;

/// Directory of puzzle inputs laid out as `{dir}/{year}/day{day:02}.txt`
///
/// A single puzzle may be pointed at another file with
/// [`InputStore::with_override`].
#[derive(Debug, Clone)]
pub struct InputStore {
    dir: PathBuf,
    override_file: Option<(u16, u8, PathBuf)>,
}

impl InputStore {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            override_file: None,
        }
    }

    /// Read `year`/`day` from `file` instead of the directory layout
    pub fn with_override(mut self, year: u16, day: u8, file: PathBuf) -> Self {
        self.override_file = Some((year, day, file));
        self
    }

    /// Where the input for `year`/`day` is expected
    pub fn path(&self, year: u16, day: u8) -> PathBuf {
        match &self.override_file {
            Some((y, d, file)) if *y == year && *d == day => file.clone(),
            _ => self
                .dir
                .join(year.to_string())
                .join(format!("day{day:02}.txt")),
        }
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.path(year, day).is_file()
    }

    /// Read the input for `year`/`day`
    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.path(year, day);
        if !self.contains(year, day) {
            return Err(InputError::Missing { path });
        }
        fs::read_to_string(&path).map_err(|source| InputError::Io { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_path_layout() {
        let store = InputStore::new(PathBuf::from("inputs"));
        assert_eq!(
            store.path(2022, 1),
            PathBuf::from("inputs").join("2022").join("day01.txt")
        );
        assert!(store.path(2023, 17).ends_with("2023/day17.txt"));
    }

    #[test]
    fn test_read_existing_and_missing() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2021, 15));
        assert!(matches!(
            store.read(2021, 15),
            Err(InputError::Missing { .. })
        ));

        let year_dir = temp.path().join("2021");
        fs::create_dir_all(&year_dir).unwrap();
        fs::write(year_dir.join("day15.txt"), "116\n138\n").unwrap();

        assert!(store.contains(2021, 15));
        assert_eq!(store.read(2021, 15).unwrap(), "116\n138\n");
    }

    #[test]
    fn test_override_applies_to_one_puzzle() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("mine.txt");
        fs::write(&file, "Sabc\nabcE\n").unwrap();

        let store =
            InputStore::new(temp.path().join("unused")).with_override(2022, 12, file.clone());

        assert_eq!(store.path(2022, 12), file);
        assert_eq!(store.read(2022, 12).unwrap(), "Sabc\nabcE\n");
        assert!(!store.contains(2022, 13));
    }

    #[test]
    fn test_directory_is_not_an_input() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("2023").join("day17.txt")).unwrap();

        let store = InputStore::new(temp.path().to_path_buf());
        assert!(!store.contains(2023, 17));
        assert!(matches!(
            store.read(2023, 17),
            Err(InputError::Missing { .. })
        ));
    }
}
