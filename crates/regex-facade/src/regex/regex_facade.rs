//! # Regex Facade
//!
//! A [`RegexFacade`] compiles its pattern once, at construction, and then
//! answers match queries against any number of input strings.
//!
//! There are two ways to build one, with intentionally different failure
//! visibility:
//! * [`RegexFacade::new`] returns a [`CompileError`] for a bad pattern.
//! * [`RegexFacade::from_literal`] (and `From<&str>`) never fails; a bad
//!   pattern yields a sentinel facade whose operations all report "no match".

use core::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use crate::{
    errors::{CompileError, CompileResult},
    regex::{
        EngineOptions,
        MatchOptions,
        MatchResult,
        MatchSpan,
        RegexEngine,
        RegexPattern,
        RegexWrapper,
    },
};

/// A compiled pattern plus the text and options it was compiled from.
///
/// Immutable after construction, so it can be shared across threads freely.
///
/// Equality and hashing use only the pattern text and the [`EngineOptions`];
/// two independently compiled facades for the same pair are equal.
#[derive(Debug, Clone)]
pub struct RegexFacade {
    pattern: RegexPattern,
    options: EngineOptions,
    compiled: Option<RegexWrapper>,
}

impl PartialEq for RegexFacade {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.pattern() == other.pattern() && self.options == other.options
    }
}

impl Eq for RegexFacade {}

impl Hash for RegexFacade {
    fn hash<H: Hasher>(
        &self,
        state: &mut H,
    ) {
        self.pattern().hash(state);
        self.options.hash(state);
    }
}

impl From<&str> for RegexFacade {
    fn from(pattern: &str) -> Self {
        Self::from_literal(pattern)
    }
}

impl From<String> for RegexFacade {
    fn from(pattern: String) -> Self {
        Self::from_literal(pattern)
    }
}

impl FromStr for RegexFacade {
    type Err = CompileError;

    fn from_str(pattern: &str) -> CompileResult<Self> {
        Self::new(pattern, EngineOptions::empty())
    }
}

impl RegexFacade {
    /// Compile a pattern.
    ///
    /// ## Arguments
    /// * `pattern` - The pattern; a plain string is compiled adaptively,
    ///   see [`RegexPattern`].
    /// * `options` - The engine flags.
    ///
    /// ## Returns
    /// The facade, or a [`CompileError`] carrying the pattern and the engine diagnostic.
    pub fn new<P: Into<RegexPattern>>(
        pattern: P,
        options: EngineOptions,
    ) -> CompileResult<Self> {
        let pattern = pattern.into();
        let compiled = pattern
            .compile_with(options)
            .map_err(|err| CompileError::new(pattern.as_str(), err))?;

        Ok(Self {
            pattern,
            options,
            compiled: Some(compiled),
        })
    }

    /// Compile a pattern with default options, degrading on failure.
    ///
    /// A pattern which does not compile produces a sentinel facade:
    /// [`is_valid`](Self::is_valid) is `false`, and every match operation
    /// reports "no match".
    pub fn from_literal<P: Into<RegexPattern>>(pattern: P) -> Self {
        let pattern = pattern.into();
        let options = EngineOptions::empty();
        let compiled = match pattern.compile_with(options) {
            Ok(compiled) => Some(compiled),
            Err(err) => {
                log::debug!(
                    "pattern {:?} does not compile, using a non-matching facade: {err}",
                    pattern.as_str()
                );
                None
            }
        };

        Self {
            pattern,
            options,
            compiled,
        }
    }

    /// The original pattern text.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// The engine-labeled pattern.
    pub fn regex_pattern(&self) -> &RegexPattern {
        &self.pattern
    }

    /// The engine flags this facade was compiled with.
    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Is this a working facade, rather than a sentinel?
    pub fn is_valid(&self) -> bool {
        self.compiled.is_some()
    }

    /// The engine which compiled the pattern; `None` for a sentinel.
    pub fn engine(&self) -> Option<RegexEngine> {
        self.compiled.as_ref().map(RegexWrapper::engine)
    }

    /// The compiled regex; `None` for a sentinel.
    pub fn regex(&self) -> Option<&RegexWrapper> {
        self.compiled.as_ref()
    }

    /// The number of capture groups, including group 0; `0` for a sentinel.
    pub fn captures_len(&self) -> usize {
        self.compiled
            .as_ref()
            .map_or(0, RegexWrapper::captures_len)
    }

    /// Does the pattern match anywhere in `input`?
    pub fn is_match(
        &self,
        input: &str,
        options: MatchOptions,
    ) -> bool {
        let Some(regex) = &self.compiled else {
            return false;
        };
        if options.is_empty() {
            return regex.is_match(input);
        }
        options.select(regex.find_iter(input)).next().is_some()
    }

    /// The number of non-overlapping matches in `input`.
    pub fn count_matches(
        &self,
        input: &str,
        options: MatchOptions,
    ) -> usize {
        match &self.compiled {
            Some(regex) => options.select(regex.find_iter(input)).count(),
            None => 0,
        }
    }

    /// The byte spans of every non-overlapping match in `input`, left to right.
    pub fn match_spans(
        &self,
        input: &str,
        options: MatchOptions,
    ) -> Vec<MatchSpan> {
        match &self.compiled {
            Some(regex) => options.select(regex.find_iter(input)).collect(),
            None => Vec::new(),
        }
    }

    /// The text of every non-overlapping match in `input`, left to right.
    ///
    /// ## Returns
    /// The whole-match text of each match; empty if nothing matched.
    pub fn all_matches(
        &self,
        input: &str,
        options: MatchOptions,
    ) -> Vec<String> {
        self.match_spans(input, options)
            .into_iter()
            // Engine spans always lie on char boundaries of `input`.
            .map(|span| input[span.range()].to_string())
            .collect()
    }

    /// The capture groups of the first match in `input`.
    ///
    /// Unlike [`first_match_groups`](Self::first_match_groups), groups which
    /// did not participate are kept, as `None`.
    pub fn first_match<'h>(
        &self,
        input: &'h str,
        options: MatchOptions,
    ) -> Option<MatchResult<'h>> {
        let regex = self.compiled.as_ref()?;
        if options.is_empty() {
            return regex.captures(input);
        }
        options.select(regex.captures_iter(input)).next()
    }

    /// The group texts of the first match in `input`.
    ///
    /// ## Returns
    /// Group 0, then each numbered group which participated in the match, in
    /// group order. Groups which did not participate are omitted, so an absent
    /// group cannot be told apart from a shorter pattern here; use
    /// [`first_match`](Self::first_match) for that. Empty if nothing matched.
    pub fn first_match_groups(
        &self,
        input: &str,
        options: MatchOptions,
    ) -> Vec<String> {
        self.first_match(input, options)
            .map(|m| m.participating_texts())
            .unwrap_or_default()
    }
}
