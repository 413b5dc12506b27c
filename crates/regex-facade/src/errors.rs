//! # Error Types
//!
//! Pattern compilation is the only fallible step; once a [`crate::RegexFacade`]
//! exists, its match operations always produce a (possibly empty) result.

/// Diagnostic from the engine which rejected a pattern.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub enum EngineError {
    /// Error from `regex`.
    Basic(Box<regex::Error>),

    /// Error from `fancy_regex`.
    Fancy(Box<fancy_regex::Error>),
}

impl From<regex::Error> for EngineError {
    fn from(err: regex::Error) -> Self {
        Self::Basic(err.into())
    }
}

impl From<fancy_regex::Error> for EngineError {
    fn from(err: fancy_regex::Error) -> Self {
        Self::Fancy(err.into())
    }
}

impl core::fmt::Display for EngineError {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            Self::Basic(err) => core::fmt::Display::fmt(err, f),
            Self::Fancy(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl core::error::Error for EngineError {}

/// A pattern was rejected by the regex engine.
#[derive(Clone, Debug, thiserror::Error)]
#[error("failed to compile pattern {pattern:?}: {source}")]
pub struct CompileError {
    pattern: String,

    #[source]
    source: EngineError,
}

impl CompileError {
    /// Build a new `CompileError`.
    ///
    /// ## Arguments
    /// * `pattern` - The pattern text which failed to compile.
    /// * `source` - The engine diagnostic.
    pub fn new<S: Into<String>>(
        pattern: S,
        source: EngineError,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            source,
        }
    }

    /// The pattern text which failed to compile.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The engine diagnostic.
    pub fn engine_error(&self) -> &EngineError {
        &self.source
    }
}

/// Result type for pattern compilation.
pub type CompileResult<T> = core::result::Result<T, CompileError>;
