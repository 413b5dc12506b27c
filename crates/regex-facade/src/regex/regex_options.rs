//! # Engine and Match Options
//!
//! [`EngineOptions`] are fixed at compile time and take part in facade equality;
//! [`MatchOptions`] are supplied per call and only filter the engine's match stream.

use crate::regex::MatchSpan;

/// A compile-time engine flag.
///
/// Each flag maps onto the engine's own documented behavior; no flag adds
/// semantics beyond what the engine provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum EngineFlag {
    /// Match letters without regard to case, `(?i)`.
    CaseInsensitive,

    /// Ignore whitespace and `#` comments in the pattern, `(?x)`.
    AllowCommentsAndWhitespace,

    /// Treat the whole pattern as a literal string.
    IgnoreMetacharacters,

    /// Allow `.` to match `\n`, `(?s)`.
    DotMatchesLineSeparators,

    /// Allow `^` and `$` to match at line boundaries, `(?m)`.
    AnchorsMatchLines,
}

impl EngineFlag {
    /// All engine flags, in bit order.
    pub const ALL: [EngineFlag; 5] = [
        EngineFlag::CaseInsensitive,
        EngineFlag::AllowCommentsAndWhitespace,
        EngineFlag::IgnoreMetacharacters,
        EngineFlag::DotMatchesLineSeparators,
        EngineFlag::AnchorsMatchLines,
    ];

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// The inline flag character for this flag, if it has one.
    pub const fn inline_flag(self) -> Option<char> {
        match self {
            Self::CaseInsensitive => Some('i'),
            Self::AllowCommentsAndWhitespace => Some('x'),
            Self::IgnoreMetacharacters => None,
            Self::DotMatchesLineSeparators => Some('s'),
            Self::AnchorsMatchLines => Some('m'),
        }
    }
}

/// A set of [`EngineFlag`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EngineOptions {
    bits: u8,
}

impl From<EngineFlag> for EngineOptions {
    fn from(flag: EngineFlag) -> Self {
        Self::empty().with(flag)
    }
}

impl FromIterator<EngineFlag> for EngineOptions {
    fn from_iter<I: IntoIterator<Item = EngineFlag>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl EngineOptions {
    /// The empty option set.
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Is this set empty?
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Does this set contain `flag`?
    pub const fn contains(
        &self,
        flag: EngineFlag,
    ) -> bool {
        self.bits & flag.bit() != 0
    }

    /// Add `flag` to the set.
    pub fn insert(
        &mut self,
        flag: EngineFlag,
    ) {
        self.bits |= flag.bit();
    }

    /// Remove `flag` from the set.
    pub fn remove(
        &mut self,
        flag: EngineFlag,
    ) {
        self.bits &= !flag.bit();
    }

    /// Builder form of [`insert`](Self::insert).
    pub const fn with(
        self,
        flag: EngineFlag,
    ) -> Self {
        Self {
            bits: self.bits | flag.bit(),
        }
    }

    /// Sets or clears `flag`.
    pub fn set(
        &mut self,
        flag: EngineFlag,
        enabled: bool,
    ) {
        if enabled {
            self.insert(flag);
        } else {
            self.remove(flag);
        }
    }

    /// Iterate the flags in this set, in [`EngineFlag::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = EngineFlag> + '_ {
        EngineFlag::ALL
            .into_iter()
            .filter(|flag| self.contains(*flag))
    }

    /// Is `(?x)` in effect?
    ///
    /// Whitespace mode is dropped for literal patterns, since escaping does not
    /// protect spaces.
    pub const fn ignore_whitespace(&self) -> bool {
        self.contains(EngineFlag::AllowCommentsAndWhitespace)
            && !self.contains(EngineFlag::IgnoreMetacharacters)
    }

    /// Render the inline flag group for these options, e.g. `(?ims)`.
    ///
    /// ## Returns
    /// The flag group, or an empty string when no inline flag applies.
    pub fn inline_prefix(&self) -> String {
        let flags: String = self
            .iter()
            .filter(|flag| {
                *flag != EngineFlag::AllowCommentsAndWhitespace || self.ignore_whitespace()
            })
            .filter_map(EngineFlag::inline_flag)
            .collect();

        if flags.is_empty() {
            flags
        } else {
            format!("(?{flags})")
        }
    }
}

/// A per-call match flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum MatchFlag {
    /// Matches must start at the beginning of the input; when enumerating,
    /// each match must start where the previous one ended.
    Anchored,
}

/// A set of [`MatchFlag`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MatchOptions {
    anchored: bool,
}

impl From<MatchFlag> for MatchOptions {
    fn from(flag: MatchFlag) -> Self {
        Self::default().with(flag)
    }
}

impl FromIterator<MatchFlag> for MatchOptions {
    fn from_iter<I: IntoIterator<Item = MatchFlag>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), Self::with)
    }
}

impl MatchOptions {
    /// The empty option set.
    pub const fn new() -> Self {
        Self { anchored: false }
    }

    /// Is this set empty?
    pub const fn is_empty(&self) -> bool {
        !self.anchored
    }

    /// Does this set contain `flag`?
    pub const fn contains(
        &self,
        flag: MatchFlag,
    ) -> bool {
        match flag {
            MatchFlag::Anchored => self.anchored,
        }
    }

    /// Sets or clears `flag`.
    pub fn set(
        &mut self,
        flag: MatchFlag,
        enabled: bool,
    ) {
        match flag {
            MatchFlag::Anchored => self.anchored = enabled,
        }
    }

    /// Builder form of [`set`](Self::set) with `enabled = true`.
    pub fn with(
        mut self,
        flag: MatchFlag,
    ) -> Self {
        self.set(flag, true);
        self
    }

    /// Restrict an engine match stream to the matches these options admit.
    pub(crate) fn select<I>(
        self,
        matches: I,
    ) -> SelectedMatches<I>
    where
        I: Iterator,
        I::Item: Spanned,
    {
        SelectedMatches {
            matches,
            options: self,
            next_start: 0,
            done: false,
        }
    }
}

/// Anything carrying the whole-match span of one engine match.
pub(crate) trait Spanned {
    fn whole_span(&self) -> MatchSpan;
}

impl Spanned for MatchSpan {
    fn whole_span(&self) -> MatchSpan {
        *self
    }
}

/// Engine match stream filtered by [`MatchOptions`].
pub(crate) struct SelectedMatches<I> {
    matches: I,
    options: MatchOptions,
    next_start: usize,
    done: bool,
}

impl<I> Iterator for SelectedMatches<I>
where
    I: Iterator,
    I::Item: Spanned,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        for item in self.matches.by_ref() {
            let span = item.whole_span();
            if self.options.anchored {
                if span.start() != self.next_start {
                    break;
                }
                self.next_start = span.end();
            }
            return Some(item);
        }

        self.done = true;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_options_set() {
        let mut options = EngineOptions::empty();
        assert!(options.is_empty());
        assert_eq!(options, EngineOptions::default());

        options.insert(EngineFlag::CaseInsensitive);
        options.set(EngineFlag::AnchorsMatchLines, true);
        assert!(options.contains(EngineFlag::CaseInsensitive));
        assert!(options.contains(EngineFlag::AnchorsMatchLines));
        assert!(!options.contains(EngineFlag::DotMatchesLineSeparators));

        assert_eq!(
            options.iter().collect::<Vec<_>>(),
            vec![EngineFlag::CaseInsensitive, EngineFlag::AnchorsMatchLines]
        );

        options.remove(EngineFlag::CaseInsensitive);
        assert_eq!(options, EngineOptions::from(EngineFlag::AnchorsMatchLines));
    }

    #[test]
    fn test_engine_options_order_independent() {
        let a: EngineOptions = [EngineFlag::CaseInsensitive, EngineFlag::AnchorsMatchLines]
            .into_iter()
            .collect();
        let b = EngineOptions::empty()
            .with(EngineFlag::AnchorsMatchLines)
            .with(EngineFlag::CaseInsensitive);
        assert_eq!(a, b);
    }

    #[test]
    fn test_inline_prefix() {
        assert_eq!(EngineOptions::empty().inline_prefix(), "");
        assert_eq!(
            EngineOptions::from(EngineFlag::IgnoreMetacharacters).inline_prefix(),
            ""
        );

        let options: EngineOptions = EngineFlag::ALL.into_iter().collect();
        assert_eq!(options.inline_prefix(), "(?ism)");

        let options = EngineOptions::empty()
            .with(EngineFlag::AllowCommentsAndWhitespace)
            .with(EngineFlag::DotMatchesLineSeparators);
        assert!(options.ignore_whitespace());
        assert_eq!(options.inline_prefix(), "(?xs)");
    }

    #[test]
    fn test_match_options() {
        let options = MatchOptions::default();
        assert!(options.is_empty());

        let options = MatchOptions::from(MatchFlag::Anchored);
        assert!(options.contains(MatchFlag::Anchored));
        assert!(!options.is_empty());

        let mut options: MatchOptions = [MatchFlag::Anchored].into_iter().collect();
        assert!(options.contains(MatchFlag::Anchored));
        options.set(MatchFlag::Anchored, false);
        assert!(options.is_empty());
    }

    fn spans(ranges: &[(usize, usize)]) -> Vec<MatchSpan> {
        ranges
            .iter()
            .map(|&(start, end)| MatchSpan::new(start, end))
            .collect()
    }

    #[test]
    fn test_select_anchored_chain() {
        let stream = spans(&[(0, 2), (2, 3), (5, 6)]);
        let selected: Vec<_> = MatchOptions::from(MatchFlag::Anchored)
            .select(stream.into_iter())
            .collect();
        assert_eq!(selected, spans(&[(0, 2), (2, 3)]));

        let stream = spans(&[(1, 2)]);
        assert_eq!(
            MatchOptions::from(MatchFlag::Anchored)
                .select(stream.into_iter())
                .count(),
            0
        );
    }

    #[test]
    fn test_select_anchored_keeps_empty_matches() {
        // `\d*` over "a12b".
        let stream = spans(&[(0, 0), (1, 3), (4, 4)]);
        let selected: Vec<_> = MatchOptions::from(MatchFlag::Anchored)
            .select(stream.into_iter())
            .collect();
        assert_eq!(selected, spans(&[(0, 0)]));
    }

    #[test]
    fn test_select_passthrough() {
        let stream = spans(&[(0, 0), (3, 4)]);
        let selected: Vec<_> = MatchOptions::default()
            .select(stream.clone().into_iter())
            .collect();
        assert_eq!(selected, stream);
    }
}
