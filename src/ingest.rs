/*!
Loading the support matrix from its JSON document form.

The document mirrors the in-memory tree one to one, so this stays a thin
serde layer; the aggregation core only ever sees the typed
[Matrix](crate::matrix::Matrix).
*/

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::matrix::Matrix;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("unable to read matrix document {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed matrix document")]
    Malformed {
        #[from]
        source: serde_json::Error,
    },
}

/// Parses a matrix document from JSON text.
pub fn matrix_from_str(document: &str) -> Result<Matrix, IngestError> {
    Ok(serde_json::from_str(document)?)
}

/// Reads and parses the matrix document at `path`.
pub fn matrix_from_file(path: impl AsRef<Path>) -> Result<Matrix, IngestError> {
    let path = path.as_ref();
    let document = fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    matrix_from_str(&document)
}
