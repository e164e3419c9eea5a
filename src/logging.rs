//! Append-only shell log. Diagnostics only; write failures are swallowed so
//! logging can never take the shell down.

use std::{
    env, fs,
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use chrono::Local;

use crate::shell_constants::{SHELL_LOG_DIR_ENV, SHELL_LOG_FILE};

pub(crate) fn append_shell_log(message: &str) {
    append_to(&resolve_shell_log_path(), message);
}

/// Env override first, then next to the executable, then the working
/// directory as a last resort.
pub(crate) fn resolve_shell_log_path() -> PathBuf {
    if let Ok(dir) = env::var(SHELL_LOG_DIR_ENV) {
        let dir = dir.trim();
        if !dir.is_empty() {
            return PathBuf::from(dir).join(SHELL_LOG_FILE);
        }
    }

    env::current_exe()
        .ok()
        .and_then(|exe_path| exe_path.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(SHELL_LOG_FILE)
}

fn append_to(path: &Path, message: &str) {
    let line = format!(
        "[{}] {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        message
    );

    if let Some(parent_dir) = path.parent() {
        let _ = fs::create_dir_all(parent_dir);
    }
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = file.write_all(line.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_to_creates_the_file_and_keeps_earlier_lines() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(SHELL_LOG_FILE);

        append_to(&path, "shell starting");
        append_to(&path, "message loop ended with status 0");

        let contents = fs::read_to_string(&path).expect("log file");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("shell starting"));
        assert!(lines[1].ends_with("message loop ended with status 0"));
        assert!(lines[0].starts_with('['));
    }

    #[test]
    fn append_to_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join(SHELL_LOG_FILE);

        append_to(&path, "first line");

        assert!(path.exists());
    }
}
