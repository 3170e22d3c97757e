//! Loading and saving rings as one line of decimal text

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::{DigitRing, Result};

/// Reads the first line of `path` as a decimal number.
///
/// A missing or unreadable file, an empty first line or malformed text all
/// give an empty ring.
pub fn load(path: impl AsRef<Path>) -> DigitRing {
    let path = path.as_ref();
    match read_first_line(path) {
        Ok(Some(line)) => DigitRing::from_decimal(&line),
        Ok(None) => {
            debug!(?path, "file is empty, using an empty ring");
            DigitRing::new()
        }
        Err(err) => {
            debug!(?path, error = %err, "could not read number, using an empty ring");
            DigitRing::new()
        }
    }
}

/// Writes the decimal value of `ring` to `path`, replacing its contents
pub fn save(ring: &DigitRing, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let decimal = ring.to_decimal_string();
    fs::write(path, &decimal)?;
    debug!(?path, %decimal, "saved ring");
    Ok(())
}

fn read_first_line(path: &Path) -> std::io::Result<Option<String>> {
    let reader = BufReader::new(File::open(path)?);
    reader.lines().next().transpose()
}

impl DigitRing {
    /// See [`load`]
    pub fn load(path: impl AsRef<Path>) -> DigitRing {
        load(path)
    }

    /// See [`save`]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        save(self, path)
    }
}
