use std::{fs, path::PathBuf};

use fractic_server_error::ServerError;

use crate::errors::{InvalidRon, ReadError};

const DEFAULT_NOTES_KEY: &str = "notes_v2";
const DEFAULT_CONTRACTS_KEY: &str = "contracts_v1";

fn default_notes_key() -> String {
    DEFAULT_NOTES_KEY.to_string()
}

fn default_contracts_key() -> String {
    DEFAULT_CONTRACTS_KEY.to_string()
}

/// Storage and registry locations, usually read from a RON file:
///
/// ```ron
/// (
///     data_dir: Some("/var/lib/factoring"),
///     notes_key: "notes_v2",
///     contracts_key: "contracts_v1",
///     parties: Some("/etc/factoring/parties.ron"),
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Deserialize)]
pub struct FactoringConfig {
    /// Directory of the file-backed store. `None` keeps everything in memory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Key under which the note list is stored.
    #[serde(default = "default_notes_key")]
    pub notes_key: String,
    /// Key under which the contract list is stored.
    #[serde(default = "default_contracts_key")]
    pub contracts_key: String,
    /// RON party registry. `None` starts with no parties.
    #[serde(default)]
    pub parties: Option<PathBuf>,
}

impl Default for FactoringConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            notes_key: default_notes_key(),
            contracts_key: default_contracts_key(),
            parties: None,
        }
    }
}

impl FactoringConfig {
    pub fn from_ron(s: &str) -> Result<Self, ServerError> {
        ron::from_str(s).map_err(|e| InvalidRon::with_debug("FactoringConfig", &e))
    }

    pub fn from_file<P>(path: P) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        Self::from_ron(&fs::read_to_string(path).map_err(|e| ReadError::with_debug(&e))?)
    }
}
