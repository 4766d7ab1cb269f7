use std::{
    collections::HashMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use fractic_server_error::ServerError;

use crate::errors::{ReadError, WriteError};

/// String key-value storage, the way a browser's local storage holds one JSON
/// document per key.
pub(crate) trait KeyValueDatasource {
    fn get(&self, key: &str) -> Result<Option<String>, ServerError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), ServerError>;
}

impl<T: KeyValueDatasource + ?Sized> KeyValueDatasource for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, ServerError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ServerError> {
        (**self).set(key, value)
    }
}

#[derive(Debug, Default)]
pub(crate) struct MemoryKeyValueDatasourceImpl {
    entries: HashMap<String, String>,
}

impl MemoryKeyValueDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl KeyValueDatasource for MemoryKeyValueDatasourceImpl {
    fn get(&self, key: &str) -> Result<Option<String>, ServerError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ServerError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key inside `dir`.
#[derive(Debug)]
pub(crate) struct FileKeyValueDatasourceImpl {
    dir: PathBuf,
}

impl FileKeyValueDatasourceImpl {
    pub(crate) fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueDatasource for FileKeyValueDatasourceImpl {
    fn get(&self, key: &str) -> Result<Option<String>, ServerError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ReadError::with_debug(&e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ServerError> {
        fs::create_dir_all(&self.dir).map_err(|e| WriteError::with_debug(&e))?;
        // Write-then-rename.
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|e| WriteError::with_debug(&e))?;
        fs::rename(&tmp, &path).map_err(|e| WriteError::with_debug(&e))?;
        Ok(())
    }
}
