//! # Text Offset Conversion
//!
//! Both engines report UTF-8 byte offsets. Callers coming from UTF-16 APIs
//! (or counting characters) need the same positions in their own units, and
//! slicing text by an offset which is not on a boundary of its unit must be
//! refused rather than corrupting the text.
//!
//! Spans reported by an engine always lie on char boundaries; [`slice_span`]
//! checks offsets which come from elsewhere.

use core::ops::Range;

/// The unit an offset into a `str` is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextUnit {
    /// UTF-8 bytes; the engines' native unit.
    #[default]
    Utf8,

    /// UTF-16 code units; a non-BMP character counts as two.
    Utf16,

    /// Unicode scalar values (`char`s).
    Char,
}

/// Resolve an offset measured in `unit` to a byte offset.
///
/// ## Returns
/// `None` if the offset is past the end of `text`, or does not fall on a
/// boundary of `unit` (mid-codepoint byte, between the halves of a surrogate pair).
fn to_byte_offset(
    text: &str,
    offset: usize,
    unit: TextUnit,
) -> Option<usize> {
    match unit {
        TextUnit::Utf8 => text.is_char_boundary(offset).then_some(offset),
        TextUnit::Utf16 => {
            let mut units = 0;
            for (idx, ch) in text.char_indices() {
                if units == offset {
                    return Some(idx);
                }
                units += ch.len_utf16();
                if units > offset {
                    return None;
                }
            }
            (units == offset).then_some(text.len())
        }
        TextUnit::Char => text
            .char_indices()
            .map(|(idx, _)| idx)
            .chain(core::iter::once(text.len()))
            .nth(offset),
    }
}

/// Measure a (valid) byte offset in `unit`.
fn from_byte_offset(
    text: &str,
    byte_offset: usize,
    unit: TextUnit,
) -> usize {
    let prefix = &text[..byte_offset];
    match unit {
        TextUnit::Utf8 => byte_offset,
        TextUnit::Utf16 => prefix.encode_utf16().count(),
        TextUnit::Char => prefix.chars().count(),
    }
}

/// Convert an offset into `text` between units.
///
/// ## Arguments
/// * `text` - The text the offset indexes.
/// * `offset` - The offset, measured in `from`.
/// * `from` - The unit of `offset`.
/// * `to` - The unit of the result.
///
/// ## Returns
/// The offset measured in `to`, or `None` if `offset` is not a valid
/// boundary of `from` in `text`.
pub fn convert_offset(
    text: &str,
    offset: usize,
    from: TextUnit,
    to: TextUnit,
) -> Option<usize> {
    let byte_offset = to_byte_offset(text, offset, from)?;
    Some(from_byte_offset(text, byte_offset, to))
}

/// Convert a range into `text` between units.
///
/// ## Returns
/// The converted range, or `None` if either end is invalid or the range is reversed.
pub fn convert_range(
    text: &str,
    range: Range<usize>,
    from: TextUnit,
    to: TextUnit,
) -> Option<Range<usize>> {
    if range.start > range.end {
        return None;
    }
    let start = convert_offset(text, range.start, from, to)?;
    let end = convert_offset(text, range.end, from, to)?;
    Some(start..end)
}

/// Slice `text` by a range measured in `unit`.
///
/// ## Returns
/// The exact substring, or `None` if the range is reversed, out of bounds,
/// or splits a character.
pub fn slice_span(
    text: &str,
    range: Range<usize>,
    unit: TextUnit,
) -> Option<&str> {
    if range.start > range.end {
        return None;
    }
    let start = to_byte_offset(text, range.start, unit)?;
    let end = to_byte_offset(text, range.end, unit)?;
    text.get(start..end)
}
