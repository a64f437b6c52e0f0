//! Flat-file persistence for record collections.
//!
//! Every collection lives in its own text file: one record per line, fields separated
//! by `|`, no header and no escaping. Files are read whole at startup and rewritten
//! whole after every change. Writes go to a sibling temp file which is then renamed over
//! the target, so a crash mid-write leaves the previous contents intact.

pub mod store;

pub use store::Store;

use crate::entities::{DELIMITER, Record};
use crate::errors::{Error, Result};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Reads every record from `path`.
///
/// Returns `Ok(None)` when the file does not exist yet (first run). Blank lines are
/// skipped.
///
/// # Errors
/// Returns `Error::Io` if the file exists but cannot be read, and
/// `Error::MalformedRecord` for a line with the wrong field count or an unparsable
/// typed field.
#[instrument(skip_all, fields(kind = T::KIND, path = %path.display()))]
pub fn load<T: Record>(path: &Path) -> Result<Option<Vec<T>>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No {} file present", T::KIND);
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let mut records = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_line(path, index + 1, line)?);
    }

    debug!(count = records.len(), "Loaded records");
    Ok(Some(records))
}

fn parse_line<T: Record>(path: &Path, line_no: usize, line: &str) -> Result<T> {
    let malformed = |reason: String| Error::MalformedRecord {
        file: path.to_path_buf(),
        line: line_no,
        reason,
    };

    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() != T::FIELD_COUNT {
        return Err(malformed(format!(
            "expected {} fields, found {}",
            T::FIELD_COUNT,
            fields.len()
        )));
    }
    T::from_fields(&fields).map_err(malformed)
}

/// Replaces the contents of `path` with `records`, one line each.
///
/// The parent directory is created if needed.
///
/// # Errors
/// Returns `Error::Io` if the directory, temp file, or rename fails.
#[instrument(skip_all, fields(kind = T::KIND, path = %path.display()))]
pub fn save<'a, T, I>(path: &Path, records: I) -> Result<()>
where
    T: Record + 'a,
    I: IntoIterator<Item = &'a T>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let tmp = temp_path(path);
    let mut count = 0usize;
    {
        let mut writer = BufWriter::new(File::create(&tmp)?);
        for record in records {
            writeln!(writer, "{}", record.to_line())?;
            count += 1;
        }
        writer.flush()?;
        writer.get_ref().sync_all()?;
    }
    fs::rename(&tmp, path)?;

    debug!(count, "Saved records");
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map_or_else(|| OsString::from("records"), ToOwned::to_owned);
    name.push(".tmp");
    path.with_file_name(name)
}
