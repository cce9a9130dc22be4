//! Human readable descriptions of chunk types, loaded from a JSON file.
//!
//! The file is a single JSON object mapping four character chunk type codes
//! to a description:
//!
//! ```json
//! { "IHDR": "Image header", "IEND": "Image trailer" }
//! ```
//!
//! The table is purely cosmetic. A missing file, a broken file, or a chunk
//! type that isn't listed all just mean "no description".

use std::{
  collections::HashMap,
  io,
  path::{Path, PathBuf},
};

use log::{debug, warn};
use serde::Deserialize;

use crate::png::ChunkType;

/// File name of the table that's looked for next to the executable.
pub const CHUNK_TABLE_FILE_NAME: &str = "chunk_table.json";

/// Chunk type code to description.
///
/// This is read-only once loaded, so one table can be shared freely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ChunkTable {
  entries: HashMap<String, String>,
}
impl ChunkTable {
  /// Parses a table from JSON text.
  pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
    serde_json::from_str(json)
  }

  /// Loads the table at `path`.
  ///
  /// This never fails. Any problem with the file is logged and gives an empty
  /// table.
  pub fn load(path: &Path) -> Self {
    let json = match std::fs::read_to_string(path) {
      Ok(json) => json,
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        debug!("no chunk table at {}", path.display());
        return Self::default();
      }
      Err(e) => {
        warn!("can't read chunk table {}: {e}", path.display());
        return Self::default();
      }
    };
    match Self::from_json_str(&json) {
      Ok(table) => {
        debug!("loaded {} chunk descriptions from {}", table.len(), path.display());
        table
      }
      Err(e) => {
        warn!("ignoring malformed chunk table {}: {e}", path.display());
        Self::default()
      }
    }
  }

  /// Where the table lives by default: [`CHUNK_TABLE_FILE_NAME`] in the same
  /// directory as the running executable.
  pub fn default_path() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    Some(exe.parent()?.join(CHUNK_TABLE_FILE_NAME))
  }

  /// The description of a chunk type, if the table has one.
  #[inline]
  #[must_use]
  pub fn describe(&self, chunk_ty: ChunkType) -> Option<&str> {
    self.entries.get(chunk_ty.as_str()?).map(String::as_str)
  }

  /// Number of chunk types with a description.
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// If there are no descriptions at all.
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}
