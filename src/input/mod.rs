use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;

pub mod contrast;
pub mod format;
pub mod genesets;
pub mod image;
pub mod pathways;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error in {}: {source}", .path.display())]
    Csv { path: PathBuf, source: csv::Error },
    #[error("XML error in {}: {source}", .path.display())]
    Xml {
        path: PathBuf,
        source: roxmltree::Error,
    },
    #[error("unreadable image {}: {msg}", .path.display())]
    Image { path: PathBuf, msg: String },
    #[error("parse error: {0}")]
    Parse(String),
}

impl InputError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, InputError::NotFound(_))
    }
}

pub(crate) fn ensure_exists(path: &Path) -> Result<(), InputError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(InputError::NotFound(path.to_path_buf()))
    }
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    ensure_exists(path)?;
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Opens a header-bearing CSV and resolves the named columns to indices.
pub(crate) fn open_csv(
    path: &Path,
    columns: &[&str],
) -> Result<(csv::Reader<Box<dyn BufRead>>, Vec<usize>), InputError> {
    let reader = open_maybe_gz(path)?;
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|source| InputError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    let mut indices = Vec::with_capacity(columns.len());
    for &name in columns {
        let idx = headers.iter().position(|h| h == name).ok_or_else(|| {
            InputError::Parse(format!(
                "{} is missing column {:?}",
                path.display(),
                name
            ))
        })?;
        indices.push(idx);
    }
    Ok((csv_reader, indices))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
