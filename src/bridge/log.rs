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

use crate::Level;
use crate::SharedSink;
use crate::Sink;

/// Convert a log crate level to a filesink [`Level`].
///
/// The log crate has no counterpart for `Notice` and `Critical`; `Trace` maps
/// to [`Level::Verbose`].
pub fn level_from_log(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warning,
        log::Level::Info => Level::Info,
        log::Level::Debug => Level::Debug,
        log::Level::Trace => Level::Verbose,
    }
}

struct LogCrateSink<S: Sink> {
    sink: SharedSink<S>,
}

impl<S: Sink + Send + 'static> log::Log for LogCrateSink<S> {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        let level = level_from_log(metadata.level());
        level.rank() >= self.sink.lock().threshold().rank()
    }

    fn log(&self, record: &log::Record) {
        let level = level_from_log(record.level());
        let message = record.args().to_string();
        // The log facade is infallible; surface write failures on stderr.
        if let Err(err) = self.sink.lock().emit(level, &message) {
            eprintln!("failed to write log record: {err}");
        }
    }

    fn flush(&self) {
        if let Err(err) = self.sink.lock().flush() {
            eprintln!("failed to flush: {err}");
        }
    }
}

/// Set up the log crate global logger backed by the given sink.
///
/// This function calls [`log::set_boxed_logger`] so that all records from the
/// log crate macros are forwarded to the sink. It should be called early in
/// the execution of a Rust program; any records emitted before initialization
/// are ignored.
///
/// The global maximum log level is set to `Trace` so that admission is
/// decided solely by the sink's threshold. To cut records off earlier, call
/// [`log::set_max_level`] after this function.
///
/// # Errors
///
/// Return an error if the log crate global logger has already been set.
pub fn try_setup_log_crate<S>(sink: SharedSink<S>) -> Result<(), log::SetLoggerError>
where
    S: Sink + Send + 'static,
{
    log::set_boxed_logger(Box::new(LogCrateSink { sink }))?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

/// Set up the log crate global logger backed by the given sink.
///
/// Like [`try_setup_log_crate`], but panics instead of returning an error.
///
/// # Panics
///
/// Panic if the log crate global logger has already been set.
pub fn setup_log_crate<S>(sink: SharedSink<S>)
where
    S: Sink + Send + 'static,
{
    try_setup_log_crate(sink).expect(
        "filesink::bridge::setup_log_crate must be called before the log crate global logger initialized",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_mapping() {
        assert_eq!(level_from_log(log::Level::Error), Level::Error);
        assert_eq!(level_from_log(log::Level::Warn), Level::Warning);
        assert_eq!(level_from_log(log::Level::Info), Level::Info);
        assert_eq!(level_from_log(log::Level::Debug), Level::Debug);
        assert_eq!(level_from_log(log::Level::Trace), Level::Verbose);
    }
}
