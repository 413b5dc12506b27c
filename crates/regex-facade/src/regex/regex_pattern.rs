//! # Regex Pattern Labeled Wrapper

use std::borrow::Cow;

use crate::{
    errors::EngineError,
    regex::{EngineFlag, EngineOptions, RegexWrapper},
};

/// Labeled wrapper for regex patterns.
///
/// The label selects the engine:
/// * `Basic` - the `regex` crate; finite automata, linear time, no look-around
///   or backreferences.
/// * `Fancy` - the `fancy_regex` crate; backtracking, adds look-around and
///   backreferences.
/// * `Adaptive` - try `Basic`, and fall back to `Fancy` if it rejects the pattern.
///
/// Both engines use leftmost-first (Perl-style) match semantics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RegexPattern {
    /// This is a pattern for the `regex` engine.
    Basic(String),

    /// This is a pattern for the `fancy_regex` engine.
    Fancy(String),

    /// This pattern may need either engine.
    Adaptive(String),
}

impl From<&str> for RegexPattern {
    fn from(pattern: &str) -> Self {
        Self::Adaptive(pattern.to_string())
    }
}

impl From<String> for RegexPattern {
    fn from(pattern: String) -> Self {
        Self::Adaptive(pattern)
    }
}

impl From<&String> for RegexPattern {
    fn from(pattern: &String) -> Self {
        Self::Adaptive(pattern.clone())
    }
}

impl RegexPattern {
    /// Get the underlying regex pattern.
    ///
    /// ## Returns
    /// The regex pattern string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
            Self::Adaptive(pattern) => pattern,
        }
    }

    /// Compile the regex pattern with default options.
    ///
    /// ## Returns
    /// A `Result` containing the compiled `RegexWrapper` or an `EngineError`.
    pub fn compile(&self) -> Result<RegexWrapper, EngineError> {
        self.compile_with(EngineOptions::empty())
    }

    /// Compile the regex pattern into a `RegexWrapper`.
    ///
    /// ## Arguments
    /// * `options` - The engine flags to compile with.
    ///
    /// ## Returns
    /// A `Result` containing the compiled `RegexWrapper` or an `EngineError`.
    /// An `Adaptive` pattern rejected by both engines reports the `fancy_regex` error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn compile_with(
        &self,
        options: EngineOptions,
    ) -> Result<RegexWrapper, EngineError> {
        let source = pattern_source(self.as_str(), options);
        let compiled = match self {
            Self::Basic(_) => compile_basic(&source, options),
            Self::Fancy(_) => compile_fancy(&source, options),
            Self::Adaptive(_) => compile_basic(&source, options).or_else(|err| {
                log::trace!("falling back to fancy_regex: {err}");
                compile_fancy(&source, options)
            }),
        }?;

        log::trace!(
            "compiled {:?} with {:?} engine",
            self.as_str(),
            compiled.engine()
        );
        Ok(compiled)
    }
}

/// The pattern text handed to the engine.
fn pattern_source(
    pattern: &str,
    options: EngineOptions,
) -> Cow<'_, str> {
    if options.contains(EngineFlag::IgnoreMetacharacters) {
        Cow::Owned(fancy_regex::escape(pattern).into_owned())
    } else {
        Cow::Borrowed(pattern)
    }
}

fn compile_basic(
    source: &str,
    options: EngineOptions,
) -> Result<RegexWrapper, EngineError> {
    regex::RegexBuilder::new(source)
        .case_insensitive(options.contains(EngineFlag::CaseInsensitive))
        .ignore_whitespace(options.ignore_whitespace())
        .dot_matches_new_line(options.contains(EngineFlag::DotMatchesLineSeparators))
        .multi_line(options.contains(EngineFlag::AnchorsMatchLines))
        .build()
        .map(RegexWrapper::from)
        .map_err(EngineError::from)
}

// fancy_regex has no per-flag builder; flags go in as an inline group.
fn compile_fancy(
    source: &str,
    options: EngineOptions,
) -> Result<RegexWrapper, EngineError> {
    let prefix = options.inline_prefix();
    let source: Cow<'_, str> = if prefix.is_empty() {
        Cow::Borrowed(source)
    } else {
        Cow::Owned(format!("{prefix}{source}"))
    };

    fancy_regex::Regex::new(&source)
        .map(RegexWrapper::from)
        .map_err(EngineError::from)
}
