// central database value + file I/O
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::Category;

/// Everything that can end a run early. Each kind maps to its own exit code
/// so callers can branch without scraping messages.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("the file '{}' could not be read: {source}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not decode JSON from '{}': {source}; check the file format", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not write to the file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DatabaseError {
    pub fn exit_code(&self) -> u8 {
        match self {
            DatabaseError::NotFound { .. } => 2,
            DatabaseError::Parse { .. } => 3,
            DatabaseError::Write { .. } => 4,
        }
    }
}

/// A categorized word database: category name -> word identifier -> entry.
///
/// Categories keep their encounter order. Entries are opaque JSON values, so
/// whatever fields a word carries pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordDatabase {
    pub(crate) categories: IndexMap<String, Category>,
}

impl WordDatabase {
    /// Read and parse a database file.
    //a top level or category value that is not an object fails the parse;
    //the file must have the object-of-objects-of-objects shape.
    pub fn load(path: &Path) -> Result<Self, DatabaseError> {
        let text = fs::read_to_string(path).map_err(|source| DatabaseError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| DatabaseError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Serialize with 2-space indentation and write to `path`.
    pub fn save(&self, path: &Path) -> Result<(), DatabaseError> {
        let file = fs::File::create(path).map_err(|source| DatabaseError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).map_err(|source| DatabaseError::Write {
            path: path.to_path_buf(),
            source: source.into(),
        })?;
        writer.write_all(b"\n").map_err(|source| DatabaseError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        writer.flush().map_err(|source| DatabaseError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    pub fn categories(&self) -> impl Iterator<Item = (&String, &Category)> {
        self.categories.iter()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn entry_count(&self) -> usize {
        self.categories.values().map(IndexMap::len).sum()
    }
}
