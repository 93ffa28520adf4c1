//! Reading the input source and writing the report.
//!
//! Both ends are batch operations: the whole input is read before parsing,
//! and the whole report is written at once.

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use crate::error::SortError;
use crate::options::{InputSource, OutputTarget};
use crate::Result;

/// Read the entire input source into memory.
pub fn read_source(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Stdin => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
        InputSource::File(path) => fs::read_to_string(path).map_err(|source| SortError::InputRead {
            path: path.clone(),
            source,
        }),
    }
}

/// Write report text to the target.
///
/// Standard output gets the text followed by a line break. A file target
/// has its content replaced by exactly `text`.
pub fn write_report(target: &OutputTarget, text: &str) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(text.as_bytes())?;
            out.write_all(b"\n")?;
            out.flush()?;
            Ok(())
        }
        OutputTarget::File(path) => {
            atomic_write(path, text.as_bytes()).map_err(|source| SortError::OutputWrite {
                path: path.clone(),
                source,
            })
        }
    }
}

/// Write `data` to a temporary sibling of `path`, then rename it over `path`.
fn atomic_write(path: &Path, data: &[u8]) -> io::Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

    let result = write_and_rename(&tmp, path, data);
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn write_and_rename(tmp: &Path, path: &Path, data: &[u8]) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(tmp)?);
    w.write_all(data)?;
    w.flush()?;
    let _ = w.get_ref().sync_all();
    fs::rename(tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "3 1 2\n").unwrap();

        let text = read_source(&InputSource::File(path)).unwrap();
        assert_eq!(text, "3 1 2\n");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = read_source(&InputSource::File(path.clone())).unwrap_err();
        match err {
            SortError::InputRead { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("binary.txt");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = read_source(&InputSource::File(path)).unwrap_err();
        assert!(matches!(err, SortError::InputRead { ref source, .. } if source.kind() == io::ErrorKind::InvalidData));
    }

    #[test]
    fn test_write_replaces_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "old content that is much longer than the report\n").unwrap();

        write_report(&OutputTarget::File(path.clone()), "Total words: 0\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Total words: 0\n");
    }

    #[test]
    fn test_write_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");

        write_report(&OutputTarget::File(path), "report").unwrap();
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("out.txt")]);
    }

    #[test]
    fn test_write_to_directory_fails() {
        let dir = tempdir().unwrap();

        let err = write_report(&OutputTarget::File(dir.path().to_path_buf()), "x").unwrap_err();
        assert!(matches!(err, SortError::OutputWrite { .. }));
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("out.txt");

        let err = write_report(&OutputTarget::File(path), "x").unwrap_err();
        assert!(matches!(err, SortError::OutputWrite { .. }));
    }
}
