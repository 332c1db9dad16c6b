//! File encodings for scenarios and transcripts.
//!
//! - Input: one line of seven comma-separated decimal integers
//!   `p,q,kSigner,kChecker,kReceiver,x,y` (UTF-8).
//! - Output: the three lines of a [`Transcript`].
//!
//! Output files are written atomically (write-sync-rename) so a failed run
//! never leaves a partial transcript behind.

use core::fmt;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::session::{InputError, Scenario, Transcript};

/// Inputs larger than this are rejected before parsing.
const MAX_INPUT_LEN: u64 = 64 * 1024;

/// Errors related to scenario and transcript files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoError {
    /// Input file does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Input is not valid UTF-8.
    InvalidData,
    /// Input exceeds the size limit.
    TooLarge,
    /// IO error (generic).
    Io,
    /// Input could not be parsed into a scenario.
    Input(InputError),
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoError::NotFound => write!(f, "Input file does not exist"),
            IoError::PermissionDenied => write!(f, "Permission denied"),
            IoError::InvalidData => write!(f, "Input file is not valid UTF-8 text"),
            IoError::TooLarge => write!(f, "Input file exceeds {} KiB", MAX_INPUT_LEN / 1024),
            IoError::Io => write!(f, "I/O error"),
            IoError::Input(e) => {
                write!(f, "Input file does not contain the required parameters: {}", e)
            }
        }
    }
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => IoError::NotFound,
            std::io::ErrorKind::PermissionDenied => IoError::PermissionDenied,
            std::io::ErrorKind::InvalidData => IoError::InvalidData,
            _ => IoError::Io,
        }
    }
}

impl From<InputError> for IoError {
    fn from(err: InputError) -> Self {
        IoError::Input(err)
    }
}

/// Reads and parses a scenario file.
pub fn read_scenario<P: AsRef<Path>>(path: P) -> Result<Scenario, IoError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(IoError::NotFound);
    }
    if fs::metadata(path)?.len() > MAX_INPUT_LEN {
        log::warn!("Rejecting {}: larger than {} bytes", path.display(), MAX_INPUT_LEN);
        return Err(IoError::TooLarge);
    }

    let bytes = fs::read(path)?;
    let text = core::str::from_utf8(&bytes).map_err(|_| IoError::InvalidData)?;
    let scenario = Scenario::parse(text)?;
    log::debug!("Loaded scenario from {}", path.display());
    Ok(scenario)
}

/// Writes a transcript atomically.
pub fn write_transcript<P: AsRef<Path>>(path: P, transcript: &Transcript) -> Result<(), IoError> {
    let path = path.as_ref();
    let filename = path.file_name().ok_or(IoError::Io)?;
    let temp_path = path.with_file_name(format!("{}.tmp", filename.to_string_lossy()));

    let mut file = File::create(&temp_path)?;
    file.write_all(transcript.to_string().as_bytes())?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    log::debug!("Wrote transcript to {}", path.display());
    Ok(())
}
