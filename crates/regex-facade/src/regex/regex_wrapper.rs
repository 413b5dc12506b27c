//! # Regex Wrapper
//! This modules provides mechanisms to mix `regex` and `fancy_regex` types.
//!
//! `fancy_regex` can fail at match time (e.g. when its backtrack limit is hit).
//! Those failures are logged and end the match stream; they never surface as errors.

use crate::regex::{MatchResult, MatchSpan};

/// The engine behind a [`RegexWrapper`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegexEngine {
    /// The `regex` crate.
    Basic,

    /// The `fancy_regex` crate.
    Fancy,
}

/// Wrapper for regex patterns.
#[derive(Debug, Clone)]
pub enum RegexWrapper {
    /// Wrapper for `regex::Regex`.
    Basic(regex::Regex),

    /// Wrapper for `fancy_regex::Regex`.
    Fancy(fancy_regex::Regex),
}

impl From<regex::Regex> for RegexWrapper {
    fn from(regex: regex::Regex) -> Self {
        Self::Basic(regex)
    }
}

impl From<fancy_regex::Regex> for RegexWrapper {
    fn from(regex: fancy_regex::Regex) -> Self {
        Self::Fancy(regex)
    }
}

fn log_runtime_failure(err: &fancy_regex::Error) {
    log::warn!("fancy_regex match failed; treating as no further matches: {err}");
}

impl RegexWrapper {
    /// Which engine compiled this regex.
    pub fn engine(&self) -> RegexEngine {
        match self {
            Self::Basic(_) => RegexEngine::Basic,
            Self::Fancy(_) => RegexEngine::Fancy,
        }
    }

    /// Is this `Basic`?
    ///
    /// ## Returns
    /// `true` if it wraps a `regex::Regex`, `false` otherwise.
    pub fn is_basic(&self) -> bool {
        self.engine() == RegexEngine::Basic
    }

    /// Is this `Fancy`?
    ///
    /// ## Returns
    /// `true` if it wraps a `fancy_regex::Regex`, `false` otherwise.
    pub fn is_fancy(&self) -> bool {
        self.engine() == RegexEngine::Fancy
    }

    /// Get the regex pattern as the engine saw it.
    ///
    /// This includes any escaping or inline flags applied at compile time.
    ///
    /// ## Returns
    /// The regex pattern string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(regex) => regex.as_str(),
            Self::Fancy(regex) => regex.as_str(),
        }
    }

    /// The number of capture groups, including group 0.
    pub fn captures_len(&self) -> usize {
        match self {
            Self::Basic(regex) => regex.captures_len(),
            Self::Fancy(regex) => regex.captures_len(),
        }
    }

    /// Does the regex match anywhere in `haystack`?
    pub fn is_match(
        &self,
        haystack: &str,
    ) -> bool {
        match self {
            Self::Basic(regex) => regex.is_match(haystack),
            Self::Fancy(regex) => regex.is_match(haystack).unwrap_or_else(|err| {
                log_runtime_failure(&err);
                false
            }),
        }
    }

    /// Wrapper for `find_iter`.
    ///
    /// ## Arguments
    /// * `haystack` - The string to search in.
    ///
    /// ## Returns
    /// A `MatchesWrapper` iterator over non-overlapping match spans.
    pub fn find_iter<'r, 'h>(
        &'r self,
        haystack: &'h str,
    ) -> MatchesWrapper<'r, 'h> {
        match self {
            Self::Basic(regex) => regex.find_iter(haystack).into(),
            Self::Fancy(regex) => regex.find_iter(haystack).into(),
        }
    }

    /// The capture groups of the first match in `haystack`.
    pub fn captures<'h>(
        &self,
        haystack: &'h str,
    ) -> Option<MatchResult<'h>> {
        match self {
            Self::Basic(regex) => regex
                .captures(haystack)
                .map(|caps| MatchResult::from_regex(haystack, &caps)),
            Self::Fancy(regex) => match regex.captures(haystack) {
                Ok(caps) => caps.map(|caps| MatchResult::from_fancy(haystack, &caps)),
                Err(err) => {
                    log_runtime_failure(&err);
                    None
                }
            },
        }
    }

    /// Wrapper for `captures_iter`.
    ///
    /// ## Returns
    /// A `CaptureMatchesWrapper` iterator over the capture groups of each
    /// non-overlapping match; the same matches `find_iter` yields.
    pub fn captures_iter<'r, 'h>(
        &'r self,
        haystack: &'h str,
    ) -> CaptureMatchesWrapper<'r, 'h> {
        match self {
            Self::Basic(regex) => CaptureMatchesWrapper::Regex {
                haystack,
                matches: regex.captures_iter(haystack),
            },
            Self::Fancy(regex) => CaptureMatchesWrapper::FancyRegex {
                haystack,
                matches: regex.captures_iter(haystack),
            },
        }
    }
}

/// Wrapper for regex matches.
pub enum MatchesWrapper<'r, 'h> {
    /// Wrapper for `regex::Matches`.
    Regex(regex::Matches<'r, 'h>),

    /// Wrapper for `fancy_regex::Matches`.
    FancyRegex(fancy_regex::Matches<'r, 'h>),

    /// A `fancy_regex` runtime failure ended the stream.
    Failed,
}

impl<'r, 'h> From<regex::Matches<'r, 'h>> for MatchesWrapper<'r, 'h> {
    fn from(matches: regex::Matches<'r, 'h>) -> Self {
        Self::Regex(matches)
    }
}

impl<'r, 'h> From<fancy_regex::Matches<'r, 'h>> for MatchesWrapper<'r, 'h> {
    fn from(matches: fancy_regex::Matches<'r, 'h>) -> Self {
        Self::FancyRegex(matches)
    }
}

impl Iterator for MatchesWrapper<'_, '_> {
    type Item = MatchSpan;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Regex(matches) => matches.next().map(MatchSpan::from),
            Self::FancyRegex(matches) => match matches.next()? {
                Ok(m) => Some(m.into()),
                Err(err) => {
                    log_runtime_failure(&err);
                    *self = Self::Failed;
                    None
                }
            },
            Self::Failed => None,
        }
    }
}

/// Wrapper for regex capture matches.
pub enum CaptureMatchesWrapper<'r, 'h> {
    /// Wrapper for `regex::CaptureMatches`.
    Regex {
        /// The searched string.
        haystack: &'h str,

        /// The engine iterator.
        matches: regex::CaptureMatches<'r, 'h>,
    },

    /// Wrapper for `fancy_regex::CaptureMatches`.
    FancyRegex {
        /// The searched string.
        haystack: &'h str,

        /// The engine iterator.
        matches: fancy_regex::CaptureMatches<'r, 'h>,
    },

    /// A `fancy_regex` runtime failure ended the stream.
    Failed,
}

impl<'h> Iterator for CaptureMatchesWrapper<'_, 'h> {
    type Item = MatchResult<'h>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Regex { haystack, matches } => {
                let haystack = *haystack;
                matches
                    .next()
                    .map(|caps| MatchResult::from_regex(haystack, &caps))
            }
            Self::FancyRegex { haystack, matches } => match matches.next()? {
                Ok(caps) => Some(MatchResult::from_fancy(*haystack, &caps)),
                Err(err) => {
                    log_runtime_failure(&err);
                    *self = Self::Failed;
                    None
                }
            },
            Self::Failed => None,
        }
    }
}
