//! Directory-backed key-value store.
//!
//! Each key maps to `<key>.json` inside a single directory. All filesystem
//! access goes through a `cap-std` directory handle, so the adapter cannot
//! reach outside the directory it was opened on. Writes go to a temporary
//! sibling first and are renamed into place.

use std::io;
use std::path::Path;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::storage::ports::{KeyValueError, KeyValueResult, KeyValueStore};

const FILE_EXTENSION: &str = "json";

/// Key-value store persisting one file per key under a directory.
#[derive(Debug)]
pub struct DirectoryKeyValueStore {
    dir: Dir,
}

impl DirectoryKeyValueStore {
    /// Opens (creating if needed) the directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueError::Backend`] when the path is not valid UTF-8 or
    /// the directory cannot be created or opened.
    pub fn open(path: &Path) -> KeyValueResult<Self> {
        let utf8_path = Utf8Path::from_path(path).ok_or_else(|| {
            KeyValueError::backend(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("storage path is not valid UTF-8: {}", path.display()),
            ))
        })?;
        Dir::create_ambient_dir_all(utf8_path, ambient_authority())
            .map_err(KeyValueError::backend)?;
        let dir =
            Dir::open_ambient_dir(utf8_path, ambient_authority()).map_err(KeyValueError::backend)?;
        Ok(Self { dir })
    }
}

/// Maps a storage key onto a file name, rejecting anything that could
/// escape or alias another key.
fn file_name_for(key: &str) -> KeyValueResult<String> {
    let is_valid = !key.is_empty()
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
    if !is_valid {
        return Err(KeyValueError::InvalidKey(key.to_owned()));
    }
    Ok(format!("{key}.{FILE_EXTENSION}"))
}

impl KeyValueStore for DirectoryKeyValueStore {
    fn get(&self, key: &str) -> KeyValueResult<Option<String>> {
        let file_name = file_name_for(key)?;
        match self.dir.read_to_string(&file_name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(KeyValueError::backend(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> KeyValueResult<()> {
        let file_name = file_name_for(key)?;
        let temp_name = format!(".{file_name}.tmp");
        self.dir
            .write(&temp_name, value)
            .map_err(KeyValueError::backend)?;
        self.dir
            .rename(&temp_name, &self.dir, &file_name)
            .map_err(KeyValueError::backend)
    }
}

#[cfg(test)]
mod tests {
    use super::file_name_for;
    use crate::storage::ports::KeyValueError;
    use rstest::rstest;

    #[rstest]
    #[case("daily-tasks", "daily-tasks.json")]
    #[case("integration_settings", "integration_settings.json")]
    fn file_name_for_accepts_plain_keys(#[case] key: &str, #[case] expected: &str) {
        assert_eq!(file_name_for(key).expect("valid key"), expected);
    }

    #[rstest]
    #[case("")]
    #[case("../escape")]
    #[case("nested/key")]
    #[case("dotted.key")]
    fn file_name_for_rejects_path_like_keys(#[case] key: &str) {
        assert!(matches!(file_name_for(key), Err(KeyValueError::InvalidKey(_))));
    }
}
