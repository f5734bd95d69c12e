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

//! Filesink is a minimal leveled logger that appends timestamped, level-tagged
//! records to a single file.
//!
//! # Overview
//!
//! The crate is built around two pieces: an ordered severity scale ([`Level`])
//! and a file-backed sink ([`FileSink`]) that admits a record when its level
//! reaches the sink's threshold, prefixes it with a timestamp and the level
//! label, and appends it to the file. Records below threshold are dropped
//! silently; that is filtering, not an error.
//!
//! Each admitted record produces one line of the shape:
//!
//! ```text
//! 2024-08-11 22:44:57 	ERROR 	something went wrong
//! ```
//!
//! with two literal tab characters separating timestamp, label, and message.
//! Messages are written verbatim, so a message containing a newline breaks the
//! one-line-per-record shape.
//!
//! # Examples
//!
//! ```no_run
//! use filesink::FileSink;
//! use filesink::Level;
//! use filesink::Sink;
//!
//! let mut sink = FileSink::open("logs", "app.log").unwrap();
//! sink.emit(Level::Warning, "disk almost full").unwrap();
//! ```
//!
//! With a custom threshold:
//!
//! ```no_run
//! use filesink::FileSinkBuilder;
//! use filesink::Level;
//! use filesink::Sink;
//!
//! let mut sink = FileSinkBuilder::new("logs", "app.log")
//!     .threshold(Level::Debug)
//!     .build()
//!     .unwrap();
//! sink.emit(Level::Debug, "connected").unwrap();
//! ```
//!
//! # Concurrency
//!
//! [`FileSink`] is the unsynchronized single-writer primitive: the
//! seek-write-write-write sequence of one emit is not atomic, so concurrent
//! callers must serialize access themselves. Two wrappers are provided:
//! [`SharedSink`] guards a sink with a mutex, and [`non_blocking::NonBlocking`]
//! drains records through a single-consumer channel on a dedicated thread.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod bridge;
pub mod sink;

#[cfg(feature = "non-blocking")]
pub mod non_blocking;

mod error;
mod level;

pub use error::Error;
pub use level::Level;
pub use sink::FileSink;
pub use sink::FileSinkBuilder;
pub use sink::SharedSink;
pub use sink::Sink;
