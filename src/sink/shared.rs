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

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::Error;
use crate::Level;
use crate::Sink;

/// A clonable sink that serializes access to an inner sink with a mutex.
///
/// Every clone shares the same inner sink, so emits from concurrent callers
/// are written one record at a time and threshold changes are visible to all
/// handles. This is the concurrency-safe variant of the bare single-writer
/// [`FileSink`](crate::FileSink).
///
/// # Examples
///
/// ```no_run
/// use filesink::FileSink;
/// use filesink::Level;
/// use filesink::SharedSink;
/// use filesink::Sink;
///
/// let sink = SharedSink::new(FileSink::open("logs", "app.log").unwrap());
/// let mut handle = sink.clone();
/// std::thread::spawn(move || {
///     handle.emit(Level::Warning, "from another thread").unwrap();
/// });
/// ```
#[derive(Debug)]
pub struct SharedSink<S> {
    inner: Arc<Mutex<S>>,
}

impl<S> Clone for SharedSink<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S: Sink> SharedSink<S> {
    /// Wrap a sink for shared use.
    pub fn new(sink: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(sink)),
        }
    }

    /// Lock and access the inner sink.
    pub fn lock(&self) -> MutexGuard<'_, S> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<S: Sink> Sink for SharedSink<S> {
    fn emit_bytes(&mut self, level: Level, message: &[u8]) -> Result<(), Error> {
        self.lock().emit_bytes(level, message)
    }

    fn threshold(&self) -> Level {
        self.lock().threshold()
    }

    fn set_threshold(&mut self, level: Level) {
        self.lock().set_threshold(level)
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.lock().flush()
    }
}
