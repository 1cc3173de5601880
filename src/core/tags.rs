//! Guild tag storage.
//!
//! Tags live in one JSON file shaped `{ "<guild id>": { "<key>": "<value>" } }`.
//! The whole file is read for every lookup and rewritten for every change,
//! pretty-printed and UTF-8 so operators can edit it by hand. A missing or
//! unreadable file reads as "no tags registered" for lookups, but refuses
//! writes: a registration never replaces a file it could not parse.

use crate::{
    core::matcher::{self, Lookup},
    errors::{Error, Result},
};
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Tags of one guild, sorted by key.
pub type GuildTags = BTreeMap<String, String>;

/// Every guild's tags.
pub type TagMap = BTreeMap<String, GuildTags>;

/// File-backed tag storage.
#[derive(Debug)]
pub struct TagStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl TagStore {
    /// Uses the tag file at `path`; the file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Location of the tag file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole file. Missing or corrupt files yield an empty map.
    #[must_use]
    pub fn load(&self) -> TagMap {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Tag file {:?} does not exist yet", self.path);
                return TagMap::new();
            }
            Err(e) => {
                warn!("Failed to read tag file {:?}: {}", self.path, e);
                return TagMap::new();
            }
        };
        serde_json::from_str(&contents).unwrap_or_else(|e| {
            warn!("Tag file {:?} is not valid tag JSON: {}", self.path, e);
            TagMap::new()
        })
    }

    /// Reads the whole file for a rewrite. Only a missing file counts as empty.
    fn load_strict(&self) -> Result<TagMap> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(TagMap::new()),
            Err(e) => {
                return Err(Error::TagStorage {
                    message: format!("Failed to read tag file {:?}: {e}", self.path),
                });
            }
        };
        serde_json::from_str(&contents).map_err(|e| Error::TagStorage {
            message: format!("Tag file {:?} is not valid tag JSON: {e}", self.path),
        })
    }

    /// Tags registered in `guild_id`.
    #[must_use]
    pub fn guild(&self, guild_id: &str) -> GuildTags {
        self.load().remove(guild_id).unwrap_or_default()
    }

    /// Value stored under exactly `key`.
    #[must_use]
    pub fn get(&self, guild_id: &str, key: &str) -> Option<String> {
        self.guild(guild_id).remove(key)
    }

    /// Keys of `guild_id` matching `pattern`, classified for display.
    ///
    /// # Errors
    /// Returns `Error::Pattern` if the pattern does not compile.
    pub fn search(&self, guild_id: &str, pattern: &str) -> Result<Lookup<String>> {
        let tags = self.guild(guild_id);
        let keys = matcher::find(tags.keys(), String::as_str, pattern)?;
        Ok(Lookup::from_matches(keys.into_iter().cloned().collect()))
    }

    /// Keys of `guild_id` matching `pattern`, in key order.
    ///
    /// # Errors
    /// Returns `Error::Pattern` if the pattern does not compile.
    pub fn list(&self, guild_id: &str, pattern: &str) -> Result<Vec<String>> {
        let tags = self.guild(guild_id);
        let keys = matcher::find(tags.keys(), String::as_str, pattern)?;
        Ok(keys.into_iter().cloned().collect())
    }

    /// Registers or overwrites `key` in `guild_id` and rewrites the file.
    ///
    /// # Errors
    /// Returns `Error::TagStorage` if the existing file cannot be read or
    /// parsed (it is left untouched), or if the new file cannot be written.
    pub async fn insert(&self, guild_id: &str, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut tags = self.load_strict()?;
        tags.entry(guild_id.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
        self.save(&tags)
    }

    fn save(&self, tags: &TagMap) -> Result<()> {
        let body = serde_json::to_string_pretty(tags).map_err(|e| Error::TagStorage {
            message: format!("Failed to encode tags: {e}"),
        })?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| Error::TagStorage {
                message: format!("Failed to create {parent:?}: {e}"),
            })?;
        }
        // write beside the target and rename, so readers see the old or new file whole
        let staging = self.staging_path();
        std::fs::write(&staging, body).map_err(|e| Error::TagStorage {
            message: format!("Failed to write tag file {staging:?}: {e}"),
        })?;
        std::fs::rename(&staging, &self.path).map_err(|e| Error::TagStorage {
            message: format!("Failed to replace tag file {:?}: {e}", self.path),
        })
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
