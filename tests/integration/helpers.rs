use clap::Parser;
use namedupe::cli::Cli;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Create an empty file, making parent directories as needed.
pub fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    File::create(path).unwrap();
}

/// Run the app in-process and capture its report.
pub fn run_report(args: &[&str]) -> String {
    let cli = Cli::try_parse_from(std::iter::once("namedupe").chain(args.iter().copied())).unwrap();
    let mut buf = Vec::new();
    namedupe::run_app_with_writer(cli, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

pub fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

/// The form a directory takes in reports once normalized.
pub fn canonical(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap()
}
