use crate::error::LayoutError;
use crate::font::{FontId, FontMetrics};
use crate::layout::style::ResolvedStyle;
use crate::units::Pt;

/// One line of text produced by line breaking, along with its measured width
/// (glyph advances plus character spacing). Lines are never re-measured once
/// they have been emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub text: String,
    pub width: Pt,
}

impl Line {
    pub fn empty() -> Line {
        Line {
            text: String::new(),
            width: Pt::ZERO,
        }
    }
}

/// A piece of text to be broken into lines of at most `max_width`
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub style: ResolvedStyle,
    pub max_width: Pt,
}

impl TextRun {
    pub fn new<S: Into<String>>(text: S, style: ResolvedStyle, max_width: Pt) -> TextRun {
        TextRun {
            text: text.into(),
            style,
            max_width,
        }
    }

    /// Break the run into lines, treating newlines as hard breaks
    pub fn lines<M: FontMetrics + ?Sized>(
        &self,
        tab_size: usize,
        metrics: &M,
    ) -> Result<Vec<Line>, LayoutError> {
        paragraph_lines(&self.text, self.max_width, &self.style, tab_size, metrics)
    }
}

/// Greedily split `text` into lines no wider than `max_width`.
///
/// Each line starts from an estimate of how many characters fit
/// (`max_width / (size + character_spacing)`), then gives characters back
/// while the measured width overflows and takes more while the next one still
/// fits. Lines break between any two characters: words are not kept together.
/// Joining the returned lines reproduces `text` exactly.
///
/// `max_width` must be at least `size`, and every single character must fit on
/// its own, otherwise [`LayoutError::WidthTooSmall`] is returned.
pub fn break_lines<M: FontMetrics + ?Sized>(
    text: &str,
    max_width: Pt,
    font: FontId,
    size: Pt,
    character_spacing: Pt,
    metrics: &M,
) -> Result<Vec<Line>, LayoutError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    if max_width < size {
        return Err(LayoutError::WidthTooSmall {
            width: max_width,
            size,
        });
    }

    // byte offset of every char boundary, including the end of the string
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_count = bounds.len() - 1;
    let slice = |from: usize, to: usize| &text[bounds[from]..bounds[to]];
    let measure = |s: &str| {
        metrics.text_width(font, s, size) + character_spacing * s.chars().count() as f32
    };

    let estimate = ((max_width / (size + character_spacing)).floor() as usize).max(1);

    let mut lines = Vec::new();
    let mut start = 0;
    while start < char_count {
        let mut end = start.saturating_add(estimate).min(char_count);
        let mut width = measure(slice(start, end));
        while width > max_width && end > start + 1 {
            end -= 1;
            width = measure(slice(start, end));
        }
        if width > max_width {
            return Err(LayoutError::WidthTooSmall {
                width: max_width,
                size,
            });
        }
        while end < char_count {
            let wider = measure(slice(start, end + 1));
            if wider > max_width {
                break;
            }
            end += 1;
            width = wider;
        }

        log::trace!("line break after char {end} of {char_count} ({width})");
        lines.push(Line {
            text: slice(start, end).to_string(),
            width,
        });
        start = end;
    }

    Ok(lines)
}

/// Expand tabs and unify line endings to `\n`
pub fn normalize(text: &str, tab_size: usize) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\t', &" ".repeat(tab_size))
}

/// Break a paragraph that may contain hard line breaks. Every `\n` ends a
/// line; an empty stretch between two breaks becomes an empty line so that it
/// still takes up vertical space.
pub fn paragraph_lines<M: FontMetrics + ?Sized>(
    text: &str,
    max_width: Pt,
    style: &ResolvedStyle,
    tab_size: usize,
    metrics: &M,
) -> Result<Vec<Line>, LayoutError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let text = normalize(text, tab_size);
    let mut lines = Vec::new();
    for segment in text.split('\n') {
        if segment.is_empty() {
            lines.push(Line::empty());
            continue;
        }
        lines.extend(break_lines(
            segment,
            max_width,
            style.font,
            style.size,
            style.character_spacing,
            metrics,
        )?);
    }
    Ok(lines)
}

/// Width of `text` set in `style`, character spacing included
pub fn measure<M: FontMetrics + ?Sized>(metrics: &M, style: &ResolvedStyle, text: &str) -> Pt {
    metrics.text_width(style.font, text, style.size)
        + style.character_spacing * text.chars().count() as f32
}

/// The distance from the top of a line box down to its baseline
pub fn baseline_offset<M: FontMetrics + ?Sized>(metrics: &M, style: &ResolvedStyle) -> Pt {
    metrics.ascent(style.font, style.size)
}
