//! # `regex-facade`
//!
//! A compile-once facade over the `regex` and `fancy_regex` engines.
//!
//! A [`RegexFacade`] is built from a pattern string, compiled once, and then
//! answers three questions about any input string:
//! * [`RegexFacade::is_match`] - does the pattern match anywhere?
//! * [`RegexFacade::all_matches`] - the text of every non-overlapping match.
//! * [`RegexFacade::first_match_groups`] - the capture group texts of the first match.
//!
//! Patterns are compiled with the `regex` crate when possible, and with
//! `fancy_regex` when they need look-around or backreferences; see [`RegexPattern`].
//!
//! ## Crate Features
//!
//! #### feature: ``std``
//!
//! Enables the engines' default feature sets. On by default.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Example
//!
//! ```rust
//! use regex_facade::{EngineOptions, MatchOptions, RegexFacade};
//!
//! let date = RegexFacade::new(r"(\d+)-(\d+)-(\d+)", EngineOptions::empty())?;
//! assert!(date.is_match("due 2024-01-15", MatchOptions::default()));
//! assert_eq!(
//!     date.first_match_groups("2024-01-15", MatchOptions::default()),
//!     vec!["2024-01-15", "2024", "01", "15"],
//! );
//!
//! // A bad pattern degrades to a facade which never matches.
//! let broken = RegexFacade::from_literal("(");
//! assert!(!broken.is_valid());
//! assert!(!broken.is_match("(", MatchOptions::default()));
//! # Ok::<(), regex_facade::CompileError>(())
//! ```
#![warn(missing_docs, unused)]

pub mod errors;
pub mod regex;

#[doc(inline)]
pub use errors::{CompileError, CompileResult, EngineError};
#[doc(inline)]
pub use crate::regex::{
    EngineFlag,
    EngineOptions,
    MatchFlag,
    MatchOptions,
    MatchResult,
    MatchSpan,
    RegexFacade,
    RegexPattern,
};
