// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs;
use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::io::Seek;
use std::io::SeekFrom;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use jiff::Zoned;

use crate::Error;
use crate::Level;
use crate::Sink;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A builder to configure and create a [`FileSink`].
#[derive(Debug)]
pub struct FileSinkBuilder {
    dir: PathBuf,
    filename: String,
    threshold: Level,
}

impl FileSinkBuilder {
    /// Create a new file sink builder.
    ///
    /// `dir` is the directory holding the log file and `filename` the name of
    /// the file inside it. Neither may be empty; no further path validation
    /// is performed beyond what the filesystem enforces.
    pub fn new(dir: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            filename: filename.into(),
            threshold: Level::default(),
        }
    }

    /// Set the admission threshold.
    ///
    /// Default to [`Level::Info`].
    #[must_use]
    pub fn threshold(mut self, threshold: Level) -> Self {
        self.threshold = threshold;
        self
    }

    /// Build the [`FileSink`].
    ///
    /// Creates the directory (including missing intermediate segments) if it
    /// does not exist, creates the file empty if it does not exist, and opens
    /// the file for writing. An existing file is never truncated.
    ///
    /// # Errors
    ///
    /// Return an error if either:
    ///
    /// * The configured directory path or filename is empty.
    /// * The log directory cannot be created.
    /// * The log file cannot be created or opened.
    pub fn build(self) -> Result<FileSink, Error> {
        let FileSinkBuilder {
            dir,
            filename,
            threshold,
        } = self;

        if dir.as_os_str().is_empty() {
            let source = io::Error::new(io::ErrorKind::InvalidInput, "directory path is empty");
            return Err(Error::io("invalid log directory", dir, source));
        }
        if filename.is_empty() {
            let source = io::Error::new(io::ErrorKind::InvalidInput, "filename is empty");
            return Err(Error::io("invalid log filename", dir, source));
        }

        // Check and create against the identical path; create_dir_all is a
        // no-op when the directory already exists.
        fs::create_dir_all(&dir)
            .map_err(|err| Error::io("failed to create log directory", dir.clone(), err))?;

        let path = dir.join(filename);
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .open(&path)
            .map_err(|err| Error::io("failed to create log file", path.clone(), err))?;

        Ok(FileSink {
            file,
            path,
            threshold,
        })
    }
}

/// A sink that appends records to one log file.
///
/// The file handle is exclusively owned and kept open for the sink's
/// lifetime; it is flushed on drop. Each admitted record is appended as one
/// line: the write-time timestamp (second precision, system time zone), the
/// level label, and the message bytes verbatim, separated by literal tabs and
/// terminated by a single newline.
///
/// `FileSink` performs no internal locking. One emit is a seek-to-end
/// followed by three writes, so concurrent emits through a shared sink can
/// interleave segments in the file. Callers that need concurrent access must
/// serialize it, e.g. with [`SharedSink`](crate::SharedSink) or
/// [`non_blocking::NonBlocking`](crate::non_blocking::NonBlocking).
#[derive(Debug)]
pub struct FileSink {
    file: File,
    path: PathBuf,
    threshold: Level,
}

impl FileSink {
    /// Create a new [`FileSinkBuilder`].
    #[must_use]
    pub fn builder(dir: impl Into<PathBuf>, filename: impl Into<String>) -> FileSinkBuilder {
        FileSinkBuilder::new(dir, filename)
    }

    /// Open a sink with the default [`Level::Info`] threshold.
    ///
    /// Shorthand for `FileSink::builder(dir, filename).build()`.
    pub fn open(dir: impl Into<PathBuf>, filename: impl Into<String>) -> Result<FileSink, Error> {
        FileSinkBuilder::new(dir, filename).build()
    }

    /// The path of the log file this sink writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_record(&mut self, prefix: &[u8], message: &[u8]) -> io::Result<()> {
        self.file.seek(SeekFrom::End(0))?;
        self.file.write_all(prefix)?;
        self.file.write_all(message)?;
        self.file.write_all(b"\n")
    }
}

impl Sink for FileSink {
    fn emit_bytes(&mut self, level: Level, message: &[u8]) -> Result<(), Error> {
        if level.rank() < self.threshold.rank() {
            return Ok(());
        }

        // The timestamp is captured at write time, not at call time.
        let timestamp = Zoned::now().strftime(TIMESTAMP_FORMAT).to_string();
        let prefix = format!("{timestamp} \t{} \t", level.label());
        self.write_record(prefix.as_bytes(), message)
            .map_err(|err| Error::io("failed to write log record", self.path.clone(), err))
    }

    fn threshold(&self) -> Level {
        self.threshold
    }

    fn set_threshold(&mut self, level: Level) {
        self.threshold = level;
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.file
            .flush()
            .map_err(|err| Error::io("failed to flush log file", self.path.clone(), err))
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.file.flush();
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rand::Rng;
    use rand::distr::Alphanumeric;
    use tempfile::TempDir;

    use super::*;

    fn generate_random_string() -> String {
        let mut rng = rand::rng();
        let len = rng.random_range(20..=50);
        std::iter::repeat(())
            .map(|()| rng.sample(Alphanumeric))
            .map(char::from)
            .take(len)
            .collect()
    }

    #[test]
    fn test_emit_appends_one_line() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let mut sink = FileSink::open(temp_dir.path(), "app.log").unwrap();

        let message = generate_random_string();
        sink.emit(Level::Error, &message).unwrap();
        sink.flush().unwrap();

        let contents = fs::read_to_string(sink.path()).unwrap();
        let lines = contents.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 1);
        assert!(contents.ends_with(&format!("{message}\n")));
        assert!(lines[0].contains("\tERROR \t"));
    }

    #[test]
    fn test_below_threshold_is_dropped() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let mut sink = FileSink::builder(temp_dir.path(), "app.log")
            .threshold(Level::Warning)
            .build()
            .unwrap();

        sink.emit(Level::Info, "dropped").unwrap();
        sink.flush().unwrap();

        let contents = fs::read_to_string(sink.path()).unwrap();
        assert!(contents.is_empty());
    }

    #[test]
    fn test_admission_is_greater_or_equal() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let mut sink = FileSink::builder(temp_dir.path(), "app.log")
            .threshold(Level::Notice)
            .build()
            .unwrap();

        sink.emit(Level::Notice, "at threshold").unwrap();
        sink.emit(Level::Critical, "above threshold").unwrap();
        sink.emit(Level::Debug, "below threshold").unwrap();
        sink.flush().unwrap();

        let contents = fs::read_to_string(sink.path()).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_threshold_read_at_call_time() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let mut sink = FileSink::builder(temp_dir.path(), "app.log")
            .threshold(Level::Error)
            .build()
            .unwrap();

        sink.emit(Level::Info, "first").unwrap();
        sink.set_threshold(Level::Verbose);
        sink.emit(Level::Info, "second").unwrap();
        sink.flush().unwrap();

        let contents = fs::read_to_string(sink.path()).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.contains("second"));
    }

    #[test]
    fn test_reopen_preserves_contents() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");

        let mut sink = FileSink::open(temp_dir.path(), "app.log").unwrap();
        sink.emit(Level::Error, "kept").unwrap();
        drop(sink);

        let mut sink = FileSink::open(temp_dir.path(), "app.log").unwrap();
        sink.emit(Level::Error, "appended").unwrap();
        drop(sink);

        let contents =
            fs::read_to_string(temp_dir.path().join("app.log")).unwrap();
        let lines = contents.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("kept"));
        assert!(lines[1].ends_with("appended"));
    }

    #[test]
    fn test_nested_directory_auto_creation() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let nested = temp_dir.path().join("a").join("b").join("c");

        let mut sink = FileSink::open(&nested, "app.log").unwrap();
        sink.emit(Level::Error, "deep").unwrap();
        sink.flush().unwrap();

        assert!(nested.join("app.log").exists());
        let contents = fs::read_to_string(nested.join("app.log")).unwrap();
        assert_eq!(contents.lines().count(), 1);
    }

    #[test]
    fn test_empty_inputs_rejected() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");

        let err = FileSink::open("", "app.log").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

        let err = FileSink::open(temp_dir.path(), "").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_binary_message_written_verbatim() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let mut sink = FileSink::open(temp_dir.path(), "app.log").unwrap();

        sink.emit_bytes(Level::Error, &[0xCE, 0xB1, 0x20, 0xCE, 0xB2]).unwrap();
        sink.flush().unwrap();

        let contents = fs::read(sink.path()).unwrap();
        assert!(contents.ends_with(&[0xCE, 0xB1, 0x20, 0xCE, 0xB2, b'\n']));
    }
}
