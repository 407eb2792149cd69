use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

/// Logging collaborator: receives the final overlay text on pointer-up.
pub trait TextLog {
    fn log_text(&mut self, text: &str) -> io::Result<()>;
}

/// Appends recognized text to a plain file, one entry per line.
///
/// Empty strings are skipped so drags that never produced a recognition do
/// not pollute the log.
#[derive(Debug)]
pub struct FileTextLog {
    path: PathBuf,
}

impl FileTextLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl TextLog for FileTextLog {
    fn log_text(&mut self, text: &str) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{text}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_log_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("textpeek-test-{}-{name}.txt", std::process::id()))
    }

    #[test]
    fn appends_one_line_per_entry() {
        let path = temp_log_path("append");
        let _ = fs::remove_file(&path);

        let mut log = FileTextLog::new(&path);
        log.log_text("HELLO").unwrap();
        log.log_text("WORLD").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "HELLO\nWORLD\n");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn empty_text_writes_nothing() {
        let path = temp_log_path("empty");
        let _ = fs::remove_file(&path);

        let mut log = FileTextLog::new(&path);
        log.log_text("").unwrap();

        assert!(!path.exists());
    }
}
