//! Loader for the RON tuning file.

use ron::Options;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::data::TuningFile;

/// Default location of the tuning file, relative to the working directory.
pub const TUNING_PATH: &str = "assets/data/tuning.ron";

#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("failed to read {}: {source}", file.display())]
    Io {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", file.display())]
    Parse {
        file: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

impl ContentLoadError {
    pub fn is_missing_file(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// RON options with implicit `Some` so optional fields can be written bare.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse tuning from RON text. `origin` is only used for error messages.
pub fn parse_tuning(contents: &str, origin: &Path) -> Result<TuningFile, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|source| ContentLoadError::Parse {
            file: origin.to_path_buf(),
            source,
        })
}

pub fn load_tuning_file(path: &Path) -> Result<TuningFile, ContentLoadError> {
    let contents = fs::read_to_string(path).map_err(|source| ContentLoadError::Io {
        file: path.to_path_buf(),
        source,
    })?;
    parse_tuning(&contents, path)
}
