//! Atomic file output: write a sibling temporary file, then rename it over
//! the destination.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::EncodeError;
use crate::sink::IoSink;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

pub(crate) type FileSink = IoSink<BufWriter<File>>;

/// Run `write` against a temporary file beside `path` and move the result
/// into place.
///
/// The temporary file is closed before the rename and removed if anything
/// fails, so `path` is either left alone or holds the complete output.
pub(crate) fn write_atomic<F>(path: &Path, write: F) -> Result<(), EncodeError>
where
    F: FnOnce(&mut FileSink) -> Result<(), EncodeError>,
{
    let tmp = temp_path(path)?;
    let file = OpenOptions::new().write(true).create_new(true).open(&tmp)?;

    let result =
        fill_and_close(file, write).and_then(|()| fs::rename(&tmp, path).map_err(EncodeError::from));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn fill_and_close<F>(file: File, write: F) -> Result<(), EncodeError>
where
    F: FnOnce(&mut FileSink) -> Result<(), EncodeError>,
{
    let mut sink = IoSink::new(BufWriter::new(file));
    write(&mut sink)?;
    sink.flush()?;
    let file = sink.into_inner().into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;
    Ok(())
}

/// `dir/.name.<pid>.<n>.tmp` for destination `dir/name`.
fn temp_path(path: &Path) -> Result<PathBuf, EncodeError> {
    let name = path
        .file_name()
        .ok_or(EncodeError::MissingArgument("path file name"))?;
    let mut tmp_name = OsString::from(".");
    tmp_name.push(name);
    tmp_name.push(format!(
        ".{}.{}.tmp",
        std::process::id(),
        TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    Ok(path.with_file_name(tmp_name))
}
