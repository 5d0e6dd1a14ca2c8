use std::io;
use std::path::Path;

/// Source of locale file contents.
///
/// The registry reads through this trait so resolution and loading can be
/// exercised without touching the filesystem.
pub trait FileReader {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Blocking reads from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl FileReader for FsReader {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

impl<F> FileReader for F
where
    F: Fn(&Path) -> io::Result<String>,
{
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fs_reader_reads_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("en.json");
        std::fs::write(&path, r#"{"Hello": "Hello!"}"#).expect("Failed to write locale file");

        let contents = FsReader.read_to_string(&path).expect("Should read");
        assert_eq!(contents, r#"{"Hello": "Hello!"}"#);
    }

    #[test]
    fn test_fs_reader_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let err = FsReader
            .read_to_string(&temp_dir.path().join("missing.json"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_closure_reader() {
        let reader = |path: &Path| Ok::<_, io::Error>(format!("read {}", path.display()));
        let contents = reader.read_to_string(Path::new("x.json")).expect("Should read");
        assert_eq!(contents, "read x.json");
    }
}
