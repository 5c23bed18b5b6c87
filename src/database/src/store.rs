use chrono::{DateTime, Utc};
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use gridiron_core::{League, LeagueStore};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::{File, rename};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const SAVE_VERSION: u32 = 1;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },
}

/// On-disk wrapper around the league snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveEnvelope {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub league: League,
}

/// Keeps the league as a JSON document on disk, gzip-compressed when the
/// path ends in `.gz`. Writes go to a temp file that is renamed over the
/// target, so a crash mid-save leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_compressed(&self) -> bool {
        self.path.extension().is_some_and(|ext| ext == "gz")
    }

    /// Reads the envelope without unwrapping it, for callers that want the save time.
    pub fn read_envelope(&self) -> Result<Option<SaveEnvelope>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let mut reader = BufReader::new(File::open(&self.path)?);

        let mut json = String::new();
        if self.is_compressed() {
            GzDecoder::new(reader).read_to_string(&mut json)?;
        } else {
            reader.read_to_string(&mut json)?;
        }

        let envelope: SaveEnvelope = serde_json::from_str(&json)?;

        if envelope.version > SAVE_VERSION {
            return Err(StoreError::VersionMismatch {
                found: envelope.version,
                expected: SAVE_VERSION,
            });
        }

        debug!("loaded {} bytes from {:?}", json.len(), self.path);

        Ok(Some(envelope))
    }

    fn write_envelope(&self, envelope: &SaveEnvelope) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_vec(envelope)?;

        let mut temp_name = self.path.clone().into_os_string();
        temp_name.push(".tmp");
        let temp_path = PathBuf::from(temp_name);

        {
            let file = File::create(&temp_path)?;

            if self.is_compressed() {
                let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
                encoder.write_all(&json)?;
                let mut writer = encoder.finish()?;
                writer.flush()?;
                writer.get_ref().sync_all()?;
            } else {
                let mut writer = BufWriter::new(file);
                writer.write_all(&json)?;
                writer.flush()?;
                writer.get_ref().sync_all()?;
            }
        }

        rename(&temp_path, &self.path)?;

        debug!("saved {} bytes to {:?}", json.len(), self.path);

        Ok(())
    }
}

impl LeagueStore for JsonFileStore {
    type Error = StoreError;

    fn load(&self) -> Result<Option<League>, StoreError> {
        Ok(self.read_envelope()?.map(|envelope| envelope.league))
    }

    fn save(&mut self, league: &League) -> Result<(), StoreError> {
        let envelope = SaveEnvelope {
            version: SAVE_VERSION,
            saved_at: Utc::now(),
            league: league.clone(),
        };

        self.write_envelope(&envelope)
    }
}
