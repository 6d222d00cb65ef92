//! On-disk fixture: a temp directory holding one file and one subdirectory.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

pub struct Fixture {
    // Keeps the directory alive for the test's duration.
    _dir: TempDir,
    pub root: PathBuf,
    pub file: PathBuf,
    pub subdir: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path().to_path_buf();
        let file = root.join("report.csv");
        fs::write(&file, b"a,b\n1,2\n").expect("write fixture file");
        let subdir = root.join("archive");
        fs::create_dir(&subdir).expect("create fixture dir");
        Self {
            _dir: dir,
            root,
            file,
            subdir,
        }
    }

    pub fn file_text(&self) -> String {
        self.file.to_string_lossy().into_owned()
    }

    pub fn subdir_text(&self) -> String {
        self.subdir.to_string_lossy().into_owned()
    }

    pub fn file_url(&self) -> String {
        url::Url::from_file_path(&self.file)
            .expect("absolute fixture path")
            .to_string()
    }
}
