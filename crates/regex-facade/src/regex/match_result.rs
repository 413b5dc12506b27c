//! # Match Results

use core::ops::Range;

use crate::regex::{
    regex_options::Spanned,
    text_offsets::{TextUnit, convert_range, slice_span},
};

/// The byte span of one match (or capture group) within an input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchSpan {
    start: usize,
    end: usize,
}

impl From<Range<usize>> for MatchSpan {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<regex::Match<'_>> for MatchSpan {
    fn from(m: regex::Match<'_>) -> Self {
        Self::new(m.start(), m.end())
    }
}

impl From<fancy_regex::Match<'_>> for MatchSpan {
    fn from(m: fancy_regex::Match<'_>) -> Self {
        Self::new(m.start(), m.end())
    }
}

impl MatchSpan {
    /// Build a new span.
    ///
    /// ## Arguments
    /// * `start` - The inclusive start byte offset.
    /// * `end` - The exclusive end byte offset.
    pub const fn new(
        start: usize,
        end: usize,
    ) -> Self {
        Self { start, end }
    }

    /// The inclusive start byte offset.
    pub const fn start(&self) -> usize {
        self.start
    }

    /// The exclusive end byte offset.
    pub const fn end(&self) -> usize {
        self.end
    }

    /// The span as a byte range.
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The span length in bytes.
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Is this an empty match?
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slice the matched text out of `haystack`.
    ///
    /// ## Returns
    /// `None` if this span does not fit `haystack` on character boundaries.
    pub fn as_str<'h>(
        &self,
        haystack: &'h str,
    ) -> Option<&'h str> {
        slice_span(haystack, self.range(), TextUnit::Utf8)
    }

    /// This span in UTF-16 code units of `haystack`.
    pub fn utf16_range(
        &self,
        haystack: &str,
    ) -> Option<Range<usize>> {
        convert_range(haystack, self.range(), TextUnit::Utf8, TextUnit::Utf16)
    }

    /// This span in `char`s of `haystack`.
    pub fn char_range(
        &self,
        haystack: &str,
    ) -> Option<Range<usize>> {
        convert_range(haystack, self.range(), TextUnit::Utf8, TextUnit::Char)
    }
}

/// The capture groups of a single match.
///
/// Group 0 is the whole match; groups which did not participate in the match
/// are `None`, which is distinct from a group matching the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'h> {
    haystack: &'h str,
    groups: Vec<Option<MatchSpan>>,
}

impl Spanned for MatchResult<'_> {
    fn whole_span(&self) -> MatchSpan {
        self.whole()
    }
}

impl<'h> MatchResult<'h> {
    /// Build a new result.
    ///
    /// `groups[0]` is the whole match, and must be present.
    pub(crate) fn new(
        haystack: &'h str,
        groups: Vec<Option<MatchSpan>>,
    ) -> Self {
        debug_assert!(matches!(groups.first(), Some(Some(_))));
        Self { haystack, groups }
    }

    pub(crate) fn from_regex(
        haystack: &'h str,
        caps: &regex::Captures<'h>,
    ) -> Self {
        let groups = caps
            .iter()
            .map(|group| group.map(MatchSpan::from))
            .collect();
        Self::new(haystack, groups)
    }

    pub(crate) fn from_fancy(
        haystack: &'h str,
        caps: &fancy_regex::Captures<'h>,
    ) -> Self {
        let groups = (0..caps.len())
            .map(|idx| caps.get(idx).map(MatchSpan::from))
            .collect();
        Self::new(haystack, groups)
    }

    /// The input string the match was found in.
    pub fn haystack(&self) -> &'h str {
        self.haystack
    }

    /// The number of groups, including group 0.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// The span of the whole match.
    pub fn whole(&self) -> MatchSpan {
        self.groups
            .first()
            .copied()
            .flatten()
            .unwrap_or(MatchSpan::new(0, 0))
    }

    /// The span of group `idx`.
    ///
    /// ## Returns
    /// `None` if the group did not participate, or does not exist.
    pub fn span(
        &self,
        idx: usize,
    ) -> Option<MatchSpan> {
        self.groups.get(idx).copied().flatten()
    }

    /// The text of group `idx`.
    ///
    /// ## Returns
    /// `None` if the group did not participate, or does not exist.
    pub fn text(
        &self,
        idx: usize,
    ) -> Option<&'h str> {
        // Engine spans always lie on char boundaries of `haystack`.
        self.span(idx).map(|span| &self.haystack[span.range()])
    }

    /// The text of the whole match.
    pub fn as_str(&self) -> &'h str {
        &self.haystack[self.whole().range()]
    }

    /// Iterate the text of every group, in group order.
    pub fn iter(&self) -> impl Iterator<Item = Option<&'h str>> + '_ {
        (0..self.groups.len()).map(|idx| self.text(idx))
    }

    /// The text of every participating group, in group order.
    ///
    /// Non-participating groups are skipped, so the result can be shorter
    /// than [`group_count`](Self::group_count).
    pub fn participating_texts(&self) -> Vec<String> {
        self.iter().flatten().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_span() {
        let span = MatchSpan::from(1..5);
        assert_eq!(span.start(), 1);
        assert_eq!(span.end(), 5);
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
        assert!(MatchSpan::new(3, 3).is_empty());

        let text = "a\u{1f600}b";
        assert_eq!(span.as_str(text), Some("\u{1f600}"));
        assert_eq!(span.utf16_range(text), Some(1..3));
        assert_eq!(span.char_range(text), Some(1..2));

        assert_eq!(MatchSpan::new(1, 3).as_str(text), None);
        assert_eq!(MatchSpan::new(0, 40).as_str(text), None);
    }

    #[test]
    fn test_result_from_regex() {
        let re = regex::Regex::new(r"(a)|(b)(c)?").unwrap();
        let haystack = "xb";
        let caps = re.captures(haystack).unwrap();

        let result = MatchResult::from_regex(haystack, &caps);
        assert_eq!(result.haystack(), haystack);
        assert_eq!(result.group_count(), 4);
        assert_eq!(result.whole(), MatchSpan::new(1, 2));
        assert_eq!(result.as_str(), "b");
        assert_eq!(
            result.iter().collect::<Vec<_>>(),
            vec![Some("b"), None, Some("b"), None]
        );
        assert_eq!(result.participating_texts(), vec!["b", "b"]);
        assert_eq!(result.span(9), None);
    }

    #[test]
    fn test_result_distinguishes_empty_from_absent() {
        let re = fancy_regex::Regex::new(r"x(y*)(z)?").unwrap();
        let haystack = "x";
        let caps = re.captures(haystack).unwrap().unwrap();

        let result = MatchResult::from_fancy(haystack, &caps);
        assert_eq!(result.span(1), Some(MatchSpan::new(1, 1)));
        assert_eq!(result.text(1), Some(""));
        assert_eq!(result.span(2), None);
        assert_eq!(result.text(2), None);
        assert_eq!(result.participating_texts(), vec!["x", ""]);
    }
}
