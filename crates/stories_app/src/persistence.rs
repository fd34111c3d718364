use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stories_core::StoragePort;
use stories_logging::{stories_error, stories_warn};

const SETTINGS_FILENAME: &str = ".stories_settings.ron";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedSettings {
    entries: BTreeMap<String, String>,
}

/// File-backed storage port: a RON settings map under `dir`. Reads tolerate
/// missing or corrupt files; writes are fire-and-forget per the port
/// contract and only logged on failure.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILENAME)
    }

    fn load(&self) -> PersistedSettings {
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return PersistedSettings::default();
            }
            Err(err) => {
                stories_warn!("Failed to read settings from {:?}: {}", path, err);
                return PersistedSettings::default();
            }
        };

        match ron::from_str(&content) {
            Ok(settings) => settings,
            Err(err) => {
                stories_warn!("Failed to parse settings from {:?}: {}", path, err);
                PersistedSettings::default()
            }
        }
    }

    fn store(&self, settings: &PersistedSettings) {
        let pretty = ron::ser::PrettyConfig::new();
        let content = match ron::ser::to_string_pretty(settings, pretty) {
            Ok(text) => text,
            Err(err) => {
                stories_error!("Failed to serialize settings: {}", err);
                return;
            }
        };

        if let Err(err) = write_atomic(&self.dir, SETTINGS_FILENAME, &content) {
            stories_error!("Failed to write settings to {:?}: {}", self.dir, err);
        }
    }
}

impl StoragePort for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.load().entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        let mut settings = self.load();
        settings.entries.insert(key.to_string(), value.to_string());
        self.store(&settings);
    }
}

/// Write content to `{dir}/{filename}` via a temp file and rename.
fn write_atomic(dir: &Path, filename: &str, content: &str) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    let tmp = dir.join(format!("{filename}.tmp"));
    {
        let mut file = fs::File::create(&tmp)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }
    fs::rename(&tmp, dir.join(filename))
}
