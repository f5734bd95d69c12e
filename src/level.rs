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

use std::fmt;
use std::str::FromStr;

/// An enum representing the available severity levels of a log record.
///
/// Levels form a total order from least severe ([`Level::Verbose`]) to most
/// severe ([`Level::Critical`]). A sink admits a record when the record's
/// level is at least as severe as the sink's threshold.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Designates very low priority, often extremely verbose, information.
    Verbose,
    /// Designates lower priority information.
    Debug,
    /// Designates useful information.
    Info,
    /// Designates normal but significant conditions.
    Notice,
    /// Designates hazardous situations.
    Warning,
    /// Designates very serious errors.
    Error,
    /// Designates critical errors.
    Critical,
}

impl Level {
    /// Return the fixed severity rank of the `Level`.
    ///
    /// Ranks are stable: `Verbose` is `-1`, `Debug` is `0`, and so on up to
    /// `Critical` at `5`. Lower rank means less severe.
    pub fn rank(&self) -> i8 {
        match self {
            Level::Verbose => -1,
            Level::Debug => 0,
            Level::Info => 1,
            Level::Notice => 2,
            Level::Warning => 3,
            Level::Error => 4,
            Level::Critical => 5,
        }
    }

    /// Return the fixed uppercase label of the `Level`.
    ///
    /// This returns the same string as the `fmt::Display` implementation.
    pub fn label(&self) -> &'static str {
        match self {
            Level::Verbose => "VERBOSE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Notice => "NOTICE",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::Info
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Level, Self::Err> {
        for (name, level) in [
            ("verbose", Level::Verbose),
            ("debug", Level::Debug),
            ("info", Level::Info),
            ("notice", Level::Notice),
            ("warning", Level::Warning),
            ("error", Level::Error),
            ("critical", Level::Critical),
        ] {
            if s.eq_ignore_ascii_case(name) {
                return Ok(level);
            }
        }

        Err(format!("malformed level: {s:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Level; 7] = [
        Level::Verbose,
        Level::Debug,
        Level::Info,
        Level::Notice,
        Level::Warning,
        Level::Error,
        Level::Critical,
    ];

    #[test]
    fn test_ranks_are_fixed() {
        let ranks = ALL.map(|l| l.rank());
        assert_eq!(ranks, [-1, 0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_ordering_agrees_with_rank() {
        for a in ALL {
            for b in ALL {
                assert_eq!(a.cmp(&b), a.rank().cmp(&b.rank()));
            }
        }
    }

    #[test]
    fn test_labels() {
        let labels = ALL.map(|l| l.label());
        assert_eq!(
            labels,
            ["VERBOSE", "DEBUG", "INFO", "NOTICE", "WARNING", "ERROR", "CRITICAL"]
        );
    }

    #[test]
    fn test_parse_roundtrip() {
        for level in ALL {
            assert_eq!(level.label().parse::<Level>().unwrap(), level);
            assert_eq!(level.label().to_lowercase().parse::<Level>().unwrap(), level);
        }
        assert!("fatal".parse::<Level>().is_err());
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(Level::default(), Level::Info);
    }
}
