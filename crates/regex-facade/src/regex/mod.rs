//! # Regex Facade
//!
//! Popular patterns sometimes need look-around or backreferences, which the
//! standard [`regex`] crate does not provide; the [`fancy_regex`] crate does,
//! at a performance cost. We'd prefer the standard crate whenever a pattern
//! permits it, falling back on [`fancy_regex`] when it doesn't.
//!
//! This recurses into a few problems:
//!
//! * Labeling Patterns - [`RegexPattern`]
//!   * [`RegexPattern::Basic`] - a pattern which was written for [`regex`].
//!   * [`RegexPattern::Fancy`] - a pattern which was written for [`fancy_regex`].
//!   * [`RegexPattern::Adaptive`] - unknown target, try basic; then fall-up to fancy.
//! * Wrapping Compiled Regex - [`RegexWrapper`]
//! * Reporting Matches - [`MatchSpan`], [`MatchResult`], and the offset
//!   conversions in [`text_offsets`].
//! * The caller-facing surface - [`RegexFacade`]

pub mod match_result;
pub mod regex_facade;
pub mod regex_options;
pub mod regex_pattern;
pub mod regex_wrapper;
pub mod text_offsets;

#[doc(inline)]
pub use match_result::{MatchResult, MatchSpan};
#[doc(inline)]
pub use regex_facade::RegexFacade;
#[doc(inline)]
pub use regex_options::{EngineFlag, EngineOptions, MatchFlag, MatchOptions};
#[doc(inline)]
pub use regex_pattern::RegexPattern;
#[doc(inline)]
pub use regex_wrapper::{RegexEngine, RegexWrapper};
#[doc(inline)]
pub use text_offsets::TextUnit;
