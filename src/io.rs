// File: src/io.rs
use crate::transcript::SessionTranscript;
use std::io::{self, BufRead, Write};

/// Line-based console the command loop talks through.
pub trait LineIo {
    /// Next line without its terminator, or `None` once input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// `LineIo` over any buffered reader and writer, e.g. stdin/stdout.
pub struct StreamIo<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> StreamIo<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> LineIo for StreamIo<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()
    }
}

/// Wraps a `LineIo` and copies every line that passes through into a transcript.
pub struct RecordingIo<I> {
    inner: I,
    transcript: SessionTranscript,
}

impl<I: LineIo> RecordingIo<I> {
    pub fn new(inner: I) -> Self {
        Self { inner, transcript: SessionTranscript::new() }
    }

    pub fn transcript(&self) -> &SessionTranscript {
        &self.transcript
    }

    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: LineIo> LineIo for RecordingIo<I> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let line = self.inner.read_line()?;
        if let Some(line) = &line {
            self.transcript.record_input(line);
        }
        Ok(line)
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.transcript.record_output(line);
        self.inner.write_line(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_stream_io_strips_only_terminators() {
        let input = Cursor::new("  spaced  \r\nplain\nlast");
        let mut io = StreamIo::new(input, Vec::new());

        assert_eq!(io.read_line().unwrap().as_deref(), Some("  spaced  "));
        assert_eq!(io.read_line().unwrap().as_deref(), Some("plain"));
        assert_eq!(io.read_line().unwrap().as_deref(), Some("last"));
        assert_eq!(io.read_line().unwrap(), None);
    }

    #[test]
    fn test_stream_io_writes_newline_terminated() {
        let mut io = StreamIo::new(Cursor::new(""), Vec::new());
        io.write_line("Correct!").unwrap();
        assert_eq!(io.into_writer(), b"Correct!\n");
    }

    #[test]
    fn test_recording_io_captures_both_directions() {
        let inner = StreamIo::new(Cursor::new("add\n"), Vec::new());
        let mut io = RecordingIo::new(inner);

        io.write_line("Input the action:").unwrap();
        let line = io.read_line().unwrap();
        assert_eq!(line.as_deref(), Some("add"));
        // End of input leaves no trace in the transcript.
        assert_eq!(io.read_line().unwrap(), None);

        assert_eq!(io.transcript().contents(), "Input the action:\nadd\n");
        assert_eq!(io.into_inner().into_writer(), b"Input the action:\n");
    }
}
