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

use std::thread::JoinHandle;
use std::time::Duration;

use anyhow::Context;
use crossbeam_channel::SendTimeoutError;
use crossbeam_channel::Sender;
use crossbeam_channel::bounded;
use crossbeam_channel::unbounded;

use super::Message;
use super::worker::Worker;
use crate::Level;
use crate::Sink;

/// A guard that flushes records associated with a [`NonBlocking`] sink on drop.
///
/// Emitting through a [`NonBlocking`] sink does **not** immediately write the
/// record to the file. Instead, the record is written by a dedicated thread
/// at some later point, so if the program terminates abruptly (such as
/// through an uncaught `panic` or a `std::process::exit`), some records may
/// not be written.
///
/// Since logs near a crash are often necessary for diagnosing the failure,
/// `WorkerGuard` provides a mechanism to ensure that _all_ queued records are
/// flushed to the file. `WorkerGuard` should be assigned in the `main`
/// function or whatever the entrypoint of the program is, so that it is
/// dropped during an unwinding or when `main` exits successfully.
#[derive(Debug)]
pub struct WorkerGuard {
    _guard: Option<JoinHandle<()>>,
    sender: Sender<Message>,
    shutdown: Sender<()>,
    shutdown_timeout: Duration,
}

impl WorkerGuard {
    fn new(
        handle: JoinHandle<()>,
        sender: Sender<Message>,
        shutdown: Sender<()>,
        shutdown_timeout: Option<Duration>,
    ) -> Self {
        const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_millis(100);

        WorkerGuard {
            _guard: Some(handle),
            sender,
            shutdown,
            shutdown_timeout: shutdown_timeout.unwrap_or(DEFAULT_SHUTDOWN_TIMEOUT),
        }
    }
}

impl Drop for WorkerGuard {
    fn drop(&mut self) {
        let shutdown_timeout = self.shutdown_timeout;
        match self
            .sender
            .send_timeout(Message::Shutdown, shutdown_timeout)
        {
            Ok(()) => {
                // Attempt to wait for the worker to drain all records before
                // dropping. This happens when the worker calls `recv()` on a
                // zero-capacity channel. Use `send_timeout` so that drop is
                // not blocked indefinitely.
                let _ = self.shutdown.send_timeout((), shutdown_timeout);
            }
            Err(SendTimeoutError::Disconnected(_)) => (),
            Err(SendTimeoutError::Timeout(err)) => {
                eprintln!("failed to send shutdown signal to logging worker: {err:?}")
            }
        }
    }
}

/// A handle that enqueues records for a sink owned by a worker thread.
///
/// The worker exclusively owns the wrapped sink, so writes are serialized by
/// construction. Records are filtered against the sink's threshold on the
/// worker; [`NonBlocking::set_threshold`] is itself queued and takes effect
/// for records enqueued after it.
///
/// # Examples
///
/// ```no_run
/// use filesink::FileSink;
/// use filesink::Level;
/// use filesink::non_blocking::NonBlockingBuilder;
///
/// let sink = FileSink::open("logs", "app.log").unwrap();
/// let (handle, _guard) = NonBlockingBuilder::new("log-writer", sink).build();
/// handle.emit(Level::Error, "boom").unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct NonBlocking {
    sender: Sender<Message>,
}

impl NonBlocking {
    fn create<S: Sink + Send + 'static>(
        sink: S,
        thread_name: String,
        buffered_lines_limit: Option<usize>,
        shutdown_timeout: Option<Duration>,
    ) -> (Self, WorkerGuard) {
        let (sender, receiver) = match buffered_lines_limit {
            Some(cap) => bounded(cap),
            None => unbounded(),
        };

        let (shutdown_sender, shutdown_receiver) = bounded(0);

        let worker = Worker::new(sink, receiver, shutdown_receiver);
        let worker_guard = WorkerGuard::new(
            worker.make_thread(thread_name),
            sender.clone(),
            shutdown_sender,
            shutdown_timeout,
        );

        (Self { sender }, worker_guard)
    }

    /// Enqueue a text message at the given level.
    pub fn emit(&self, level: Level, message: &str) -> anyhow::Result<()> {
        self.emit_bytes(level, message.as_bytes().to_vec())
    }

    /// Enqueue a binary message at the given level.
    pub fn emit_bytes(&self, level: Level, message: Vec<u8>) -> anyhow::Result<()> {
        self.sender
            .send(Message::Record(level, message))
            .context("failed to send log record")
    }

    /// Enqueue a threshold change for the wrapped sink.
    pub fn set_threshold(&self, level: Level) -> anyhow::Result<()> {
        self.sender
            .send(Message::Threshold(level))
            .context("failed to send threshold change")
    }
}

/// A builder for configuring [`NonBlocking`].
#[derive(Debug)]
pub struct NonBlockingBuilder<S: Sink + Send + 'static> {
    thread_name: String,
    buffered_lines_limit: Option<usize>,
    shutdown_timeout: Option<Duration>,
    sink: S,
}

impl<S: Sink + Send + 'static> NonBlockingBuilder<S> {
    /// Creates a new [`NonBlockingBuilder`] wrapping the specified sink.
    pub fn new(thread_name: impl Into<String>, sink: S) -> Self {
        Self {
            thread_name: thread_name.into(),
            buffered_lines_limit: None,
            shutdown_timeout: None,
            sink,
        }
    }

    /// Sets the buffer size of pending records.
    pub fn buffered_lines_limit(mut self, buffered_lines_limit: Option<usize>) -> Self {
        self.buffered_lines_limit = buffered_lines_limit;
        self
    }

    /// Sets the shutdown timeout before the worker guard dropped.
    pub fn shutdown_timeout(mut self, shutdown_timeout: Option<Duration>) -> Self {
        self.shutdown_timeout = shutdown_timeout;
        self
    }

    /// Completes the builder, returning the configured [`NonBlocking`].
    pub fn build(self) -> (NonBlocking, WorkerGuard) {
        NonBlocking::create(
            self.sink,
            self.thread_name,
            self.buffered_lines_limit,
            self.shutdown_timeout,
        )
    }
}
