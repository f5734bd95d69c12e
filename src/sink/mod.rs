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

//! Sinks that accept leveled log records.

use std::fmt;

use crate::Error;
use crate::Level;

mod file;
mod shared;

pub use self::file::FileSink;
pub use self::file::FileSinkBuilder;
pub use self::shared::SharedSink;

/// A trait representing a sink that can emit leveled log records.
///
/// This is the sole logging abstraction collaborators depend on: binary and
/// text emit, plus the mutable admission threshold. A record is written iff
/// its level's rank is greater than or equal to the threshold's rank;
/// anything below is dropped silently.
pub trait Sink: fmt::Debug {
    /// Emits a binary message at the given level.
    fn emit_bytes(&mut self, level: Level, message: &[u8]) -> Result<(), Error>;

    /// Emits a text message at the given level.
    ///
    /// Equivalent to [`emit_bytes`](Sink::emit_bytes) with the UTF-8 encoding
    /// of `message`.
    fn emit(&mut self, level: Level, message: &str) -> Result<(), Error> {
        self.emit_bytes(level, message.as_bytes())
    }

    /// Returns the current admission threshold.
    fn threshold(&self) -> Level;

    /// Sets the admission threshold, taking effect for subsequent emits.
    fn set_threshold(&mut self, level: Level);

    /// Flushes any buffered records.
    fn flush(&mut self) -> Result<(), Error>;
}
