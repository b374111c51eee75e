// File: src/transcript.rs
use crate::errors::Result;
use crate::persistence::write_atomically;
use std::path::Path;

/// Everything printed to and typed by the user, in the order it happened.
/// Append-only; there is no way to edit or truncate it.
#[derive(Debug, Default, Clone)]
pub struct SessionTranscript {
    buffer: String,
}

impl SessionTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_output(&mut self, line: &str) {
        self.push_line(line);
    }

    pub fn record_input(&mut self, line: &str) {
        self.push_line(line);
    }

    fn push_line(&mut self, line: &str) {
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    pub fn contents(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Writes the whole transcript to `path`, replacing any existing file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        write_atomically(path, |writer| {
            writer.write_all(self.buffer.as_bytes())?;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_keep_interleaving() {
        let mut transcript = SessionTranscript::new();
        transcript.record_output("Which card?");
        transcript.record_input("France");
        transcript.record_output("The card has been removed.");

        assert_eq!(
            transcript.contents(),
            "Which card?\nFrance\nThe card has been removed.\n"
        );
    }

    #[test]
    fn test_empty_input_still_takes_a_line() {
        let mut transcript = SessionTranscript::new();
        transcript.record_input("");
        assert_eq!(transcript.contents(), "\n");
    }

    #[test]
    fn test_save_to_writes_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.log");
        let mut transcript = SessionTranscript::new();
        transcript.record_output("Bye bye!");

        transcript.save_to(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Bye bye!\n");
    }
}
