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

use std::io;
use std::path::Path;
use std::path::PathBuf;

/// The error type of filesink.
///
/// Every failure is an IO failure carrying the action that failed, the path
/// it failed on, and the underlying system error. Directory creation, file
/// creation, and record writes report distinct messages so the failing step
/// is diagnosable from the error alone.
#[derive(Debug, thiserror::Error)]
#[error("{context} {}: {source}", .path.display())]
pub struct Error {
    context: &'static str,
    path: PathBuf,
    #[source]
    source: io::Error,
}

impl Error {
    pub(crate) fn io(context: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            context,
            path: path.into(),
            source,
        }
    }

    /// The path the failing IO action targeted.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The kind of the underlying system error.
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_carries_context_and_path() {
        let err = Error::io(
            "failed to create log directory",
            "/tmp/nope",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.starts_with("failed to create log directory /tmp/nope"));
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert_eq!(err.path(), Path::new("/tmp/nope"));
    }
}
