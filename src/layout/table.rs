//! Table rows: sizing, placement, and splitting a row across a page break.
//!
//! A [`Row`] is measured into a [`RowLayout`] once, with every cell's text
//! already broken into lines. When the row does not fit on the page,
//! [`try_split`] partitions each cell's lines independently into a part that
//! stays on this page and a part that continues on the next, so cells keep
//! their columns and their reading order on both sides of the break.

use crate::colour::Colour;
use crate::error::LayoutError;
use crate::font::FontMetrics;
use crate::layout::margins::Margins;
use crate::layout::style::{ResolvedStyle, TextStyle};
use crate::layout::text::{paragraph_lines, Line};
use crate::render::{ImageId, Stroke};
use crate::units::Pt;

/// What a cell holds
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    Text(String),
    Image { image: ImageId, width: Pt, height: Pt },
    Table(Box<Table>),
}

impl CellContent {
    /// Only text can flow across a page break
    pub fn is_splittable(&self) -> bool {
        matches!(self, CellContent::Text(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub content: CellContent,
    pub width: Pt,
    /// Replaces the intrinsic height of the content when set
    pub height: Option<Pt>,
    pub padding: Margins,
    pub border: Option<Stroke>,
    pub background: Option<Colour>,
    pub style: TextStyle,
    /// Continues the cell directly above it. Merged cells do not count towards
    /// the height of their row and draw no content of their own.
    pub merged: bool,
}

impl Cell {
    fn new(content: CellContent, width: Pt) -> Cell {
        Cell {
            content,
            width,
            height: None,
            padding: Margins::empty(),
            border: None,
            background: None,
            style: TextStyle::default(),
            merged: false,
        }
    }

    pub fn text<S: Into<String>>(text: S, width: Pt) -> Cell {
        Cell::new(CellContent::Text(text.into()), width)
    }

    /// An image of `width` x `height` in a cell `cell_width` wide
    pub fn image(image: ImageId, width: Pt, height: Pt, cell_width: Pt) -> Cell {
        Cell::new(
            CellContent::Image {
                image,
                width,
                height,
            },
            cell_width,
        )
    }

    pub fn table(table: Table, width: Pt) -> Cell {
        Cell::new(CellContent::Table(Box::new(table)), width)
    }

    pub fn with_height(mut self, height: Pt) -> Cell {
        self.height = Some(height);
        self
    }

    pub fn with_padding(mut self, padding: Margins) -> Cell {
        self.padding = padding;
        self
    }

    pub fn with_border(mut self, border: Stroke) -> Cell {
        self.border = Some(border);
        self
    }

    pub fn with_background(mut self, background: Colour) -> Cell {
        self.background = Some(background);
        self
    }

    pub fn with_style(mut self, style: TextStyle) -> Cell {
        self.style = style;
        self
    }

    pub fn merged_above(mut self) -> Cell {
        self.merged = true;
        self
    }

    pub fn is_splittable(&self) -> bool {
        self.content.is_splittable() && self.height.is_none()
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Row {
    pub cells: Vec<Cell>,
    pub style: TextStyle,
    /// Overrides the table's minimum row height
    pub min_height: Option<Pt>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Row {
        Row {
            cells,
            ..Default::default()
        }
    }

    pub fn with_style(mut self, style: TextStyle) -> Row {
        self.style = style;
        self
    }

    pub fn with_min_height(mut self, height: Pt) -> Row {
        self.min_height = Some(height);
        self
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Table {
    /// Rows drawn first, and again at the top of every page the table
    /// continues onto when headers repeat
    pub header: Vec<Row>,
    pub rows: Vec<Row>,
    pub style: TextStyle,
    pub min_row_height: Option<Pt>,
    pub margins: Margins,
    /// Overrides [`LayoutConfig::repeat_table_headers`](crate::layout::LayoutConfig)
    pub repeat_header: Option<bool>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Table {
        Table {
            rows,
            ..Default::default()
        }
    }

    pub fn with_header(mut self, header: Vec<Row>) -> Table {
        self.header = header;
        self
    }

    pub fn with_style(mut self, style: TextStyle) -> Table {
        self.style = style;
        self
    }

    pub fn with_min_row_height(mut self, height: Pt) -> Table {
        self.min_row_height = Some(height);
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Table {
        self.margins = margins;
        self
    }

    pub fn with_repeat_header(mut self, repeat: bool) -> Table {
        self.repeat_header = Some(repeat);
        self
    }

    /// The defaults rows of this table inherit, given the style of whatever
    /// encloses the table
    pub fn defaults(&self, enclosing: &ResolvedStyle, tab_size: usize) -> TableDefaults {
        TableDefaults {
            style: self.style.resolve(enclosing),
            min_row_height: self.min_row_height,
            tab_size,
        }
    }
}

/// Table-level settings every row is laid out against
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TableDefaults {
    /// The table style, already resolved against the page
    pub style: ResolvedStyle,
    pub min_row_height: Option<Pt>,
    pub tab_size: usize,
}

/// Measured content of a cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellBody {
    Lines(Vec<Line>),
    Image { image: ImageId, width: Pt, height: Pt },
    Table(Vec<RowLayout>),
}

/// A cell with its style resolved, its text broken into lines and its
/// position within the row known
#[derive(Debug, Clone, PartialEq)]
pub struct CellLayout {
    pub x: Pt,
    pub width: Pt,
    pub style: ResolvedStyle,
    pub padding: Margins,
    pub border: Option<Stroke>,
    pub background: Option<Colour>,
    pub merged: bool,
    pub fixed_height: Option<Pt>,
    pub body: CellBody,
    /// Height this cell needs on its own: the fixed height if there is one,
    /// otherwise padding plus content
    pub height: Pt,
}

impl CellLayout {
    pub fn is_splittable(&self) -> bool {
        matches!(self.body, CellBody::Lines(_)) && self.fixed_height.is_none()
    }

    /// The lines of a text cell; empty for anything else
    pub fn lines(&self) -> &[Line] {
        match &self.body {
            CellBody::Lines(lines) => lines,
            _ => &[],
        }
    }

    /// Height of this cell if it held only its first `count` lines
    fn height_with(&self, count: usize) -> Pt {
        self.padding.vertical() + self.style.pitch() * count as f32
    }

    fn with_lines(&self, lines: Vec<Line>) -> CellLayout {
        let height = self.height_with(lines.len());
        CellLayout {
            body: CellBody::Lines(lines),
            height,
            ..self.clone()
        }
    }
}

/// A measured row, ready to be placed at any vertical position
#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout {
    pub cells: Vec<CellLayout>,
    pub height: Pt,
    /// The minimum height the row was clamped to
    pub min_height: Pt,
}

/// Style resolution, line breaking and sizing for one row.
///
/// Each cell inherits from the row, which inherits from the table defaults;
/// the row layer is resolved once and shared by all of its cells. Cells are
/// placed left to right starting at `origin_x`. The row is as tall as its
/// tallest non-merged cell, but never shorter than the minimum row height.
pub fn layout_row<M: FontMetrics + ?Sized>(
    row: &Row,
    origin_x: Pt,
    defaults: &TableDefaults,
    metrics: &M,
) -> Result<RowLayout, LayoutError> {
    let row_style = row.style.resolve(&defaults.style);
    let min_height = row
        .min_height
        .or(defaults.min_row_height)
        .unwrap_or(Pt::ZERO);

    let mut cells = Vec::with_capacity(row.cells.len());
    let mut x = origin_x;
    for cell in row.cells.iter() {
        let style = cell.style.resolve(&row_style);
        let inner_x = x + cell.padding.left;
        let body = if cell.merged {
            CellBody::Lines(Vec::new())
        } else {
            match &cell.content {
                CellContent::Text(text) => CellBody::Lines(paragraph_lines(
                    text,
                    cell.width - cell.padding.horizontal(),
                    &style,
                    defaults.tab_size,
                    metrics,
                )?),
                CellContent::Image {
                    image,
                    width,
                    height,
                } => CellBody::Image {
                    image: *image,
                    width: *width,
                    height: *height,
                },
                CellContent::Table(table) => {
                    let nested = table.defaults(&style, defaults.tab_size);
                    let rows = table
                        .header
                        .iter()
                        .chain(table.rows.iter())
                        .map(|r| layout_row(r, inner_x, &nested, metrics))
                        .collect::<Result<Vec<_>, _>>()?;
                    CellBody::Table(rows)
                }
            }
        };

        let content_height = match &body {
            CellBody::Lines(lines) => style.pitch() * lines.len() as f32,
            CellBody::Image { height, .. } => *height,
            CellBody::Table(rows) => rows.iter().map(|r| r.height).sum(),
        };
        let height = cell
            .height
            .unwrap_or(cell.padding.vertical() + content_height);

        cells.push(CellLayout {
            x,
            width: cell.width,
            style,
            padding: cell.padding,
            border: cell.border,
            background: cell.background,
            merged: cell.merged,
            fixed_height: cell.height,
            body,
            height,
        });
        x += cell.width;
    }

    Ok(RowLayout {
        height: row_height(&cells, min_height),
        cells,
        min_height,
    })
}

fn row_height(cells: &[CellLayout], min_height: Pt) -> Pt {
    cells
        .iter()
        .filter(|c| !c.merged)
        .fold(min_height, |height, c| height.max(c.height))
}

/// The two halves of a row split across a page break
#[derive(Debug, Clone, PartialEq)]
pub struct SplitResult {
    /// Drawn in the space left on the current page
    pub kept: RowLayout,
    /// Drawn at the top of the next page. `None` when every line fit.
    pub continuation: Option<RowLayout>,
}

impl SplitResult {
    /// No cell kept a single line, so splitting would only move the whole row
    pub fn is_zero_progress(&self) -> bool {
        self.continuation.is_some() && self.kept.cells.iter().all(|c| c.lines().is_empty())
    }
}

impl RowLayout {
    /// Total number of text lines across all cells
    pub fn line_count(&self) -> usize {
        self.cells.iter().map(|c| c.lines().len()).sum()
    }

    /// Build the two halves of this row, keeping the first `boundaries[i]`
    /// lines of cell `i` and continuing with the rest.
    ///
    /// The kept half is exactly as tall as its tallest kept cell; the
    /// continuation is sized like a freshly laid out row.
    pub fn split_at(&self, boundaries: &[usize]) -> Result<SplitResult, LayoutError> {
        if boundaries.len() != self.cells.len() {
            let cell = boundaries.len().min(self.cells.len());
            return Err(LayoutError::InconsistentRowSplit {
                cell,
                kept: boundaries.get(cell).copied().unwrap_or(0),
                continued: 0,
                total: self.cells.get(cell).map_or(0, |c| c.lines().len()),
            });
        }

        let mut kept = Vec::with_capacity(self.cells.len());
        let mut continued = Vec::with_capacity(self.cells.len());
        for (i, (cell, &boundary)) in self.cells.iter().zip(boundaries).enumerate() {
            let lines = cell.lines();
            let Some(head) = lines.get(..boundary) else {
                return Err(LayoutError::InconsistentRowSplit {
                    cell: i,
                    kept: boundary,
                    continued: 0,
                    total: lines.len(),
                });
            };
            let head = cell.with_lines(head.to_vec());
            let tail = cell.with_lines(lines[boundary..].to_vec());
            if !head.lines().iter().chain(tail.lines()).eq(lines.iter()) {
                return Err(LayoutError::InconsistentRowSplit {
                    cell: i,
                    kept: head.lines().len(),
                    continued: tail.lines().len(),
                    total: lines.len(),
                });
            }
            kept.push(head);
            continued.push(tail);
        }

        let kept_height = kept
            .iter()
            .filter(|c| !c.merged)
            .fold(Pt::ZERO, |height, c| height.max(c.height));
        let continuation = if continued.iter().all(|c| c.lines().is_empty()) {
            None
        } else {
            Some(RowLayout {
                height: row_height(&continued, self.min_height),
                cells: continued,
                min_height: self.min_height,
            })
        };

        Ok(SplitResult {
            kept: RowLayout {
                cells: kept,
                height: kept_height,
                min_height: self.min_height,
            },
            continuation,
        })
    }
}

/// Split a row so that the first part fits in `available` points.
///
/// Returns `None` when the row holds anything other than flowable text (an
/// image, a nested table, a fixed-height cell); such rows move to the next
/// page whole. Otherwise each cell keeps as many lines as fit below its top
/// padding, re-measured with its bottom padding so the kept part is never
/// taller than `available`. When every line fits the continuation is `None`.
pub fn try_split(row: &RowLayout, available: Pt) -> Result<Option<SplitResult>, LayoutError> {
    if !row.cells.iter().all(CellLayout::is_splittable) {
        return Ok(None);
    }

    // a cell whose padding alone overflows leaves no room for the row at all
    let cramped = row
        .cells
        .iter()
        .any(|cell| !cell.merged && cell.height_with(0) > available);

    let boundaries: Vec<usize> = row
        .cells
        .iter()
        .map(|cell| {
            if cramped {
                return 0;
            }
            let total = cell.lines().len();
            let pitch = cell.style.pitch();
            let mut fit = if pitch > Pt::ZERO {
                let fit = ((available - cell.padding.top) / pitch).floor();
                if fit > 0.0 {
                    (fit as usize).min(total)
                } else {
                    0
                }
            } else {
                total
            };
            while fit > 0 && cell.height_with(fit) > available {
                fit -= 1;
            }
            fit
        })
        .collect();

    log::debug!("splitting row at {boundaries:?} to fit {available}");
    row.split_at(&boundaries).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{FontId, Monospace};
    use crate::image::Image;
    use ::image::DynamicImage;
    use id_arena::Arena;

    fn defaults() -> TableDefaults {
        TableDefaults {
            style: ResolvedStyle::new(FontId(0), Pt(20.0)),
            min_row_height: None,
            tab_size: 4,
        }
    }

    fn texts(cell: &CellLayout) -> Vec<&str> {
        cell.lines().iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn tallest_cell_sets_the_row_height() {
        let row = Row::new(vec![
            Cell::text("a", Pt(30.0)).with_height(Pt(40.0)),
            Cell::text("b", Pt(30.0)).with_height(Pt(55.0)),
            Cell::text("c", Pt(30.0)).with_height(Pt(30.0)),
        ]);
        let defaults = TableDefaults {
            min_row_height: Some(Pt(50.0)),
            ..defaults()
        };
        let layout = layout_row(&row, Pt(0.0), &defaults, &Monospace::new(Pt(10.0))).unwrap();
        assert_eq!(layout.height, Pt(55.0));
    }

    #[test]
    fn minimum_height_wins_over_short_cells() {
        let row = Row::new(vec![Cell::text("a", Pt(30.0))]).with_min_height(Pt(50.0));
        let layout = layout_row(&row, Pt(0.0), &defaults(), &Monospace::new(Pt(10.0))).unwrap();
        assert_eq!(layout.cells[0].height, Pt(20.0));
        assert_eq!(layout.height, Pt(50.0));
    }

    #[test]
    fn cells_are_placed_left_to_right() {
        let row = Row::new(vec![
            Cell::text("a", Pt(30.0)),
            Cell::text("b", Pt(45.0)),
            Cell::text("c", Pt(25.0)),
        ]);
        let layout = layout_row(&row, Pt(72.0), &defaults(), &Monospace::new(Pt(10.0))).unwrap();
        let xs: Vec<Pt> = layout.cells.iter().map(|c| c.x).collect();
        assert_eq!(xs, vec![Pt(72.0), Pt(102.0), Pt(147.0)]);
    }

    #[test]
    fn intrinsic_heights_include_padding() {
        let mut images = Arena::<Image>::new();
        let image = images.alloc(Image::new_raster(DynamicImage::new_rgb8(1, 1)));
        let nested = Table::new(vec![
            Row::new(vec![Cell::text("x", Pt(30.0))]),
            Row::new(vec![Cell::text("y", Pt(30.0))]).with_min_height(Pt(35.0)),
        ]);
        let padding = Margins::trbl(Pt(4.0), Pt(5.0), Pt(6.0), Pt(5.0));
        let row = Row::new(vec![
            Cell::text("ABCDEFG", Pt(40.0)).with_padding(padding),
            Cell::image(image, Pt(20.0), Pt(45.0), Pt(30.0)).with_padding(padding),
            Cell::table(nested, Pt(40.0)).with_padding(padding),
        ]);
        let layout = layout_row(&row, Pt(0.0), &defaults(), &Monospace::new(Pt(10.0))).unwrap();
        // 30pt of text width fits three characters per line
        assert_eq!(texts(&layout.cells[0]), vec!["ABC", "DEF", "G"]);
        assert_eq!(layout.cells[0].height, Pt(70.0));
        assert_eq!(layout.cells[1].height, Pt(55.0));
        assert_eq!(layout.cells[2].height, Pt(65.0));
        assert_eq!(layout.height, Pt(70.0));
    }

    #[test]
    fn merged_cells_do_not_stretch_the_row() {
        let row = Row::new(vec![
            Cell::text("AB", Pt(30.0)),
            Cell::text("ABCDEFGHI", Pt(30.0)).merged_above(),
        ]);
        let layout = layout_row(&row, Pt(0.0), &defaults(), &Monospace::new(Pt(10.0))).unwrap();
        assert!(layout.cells[1].lines().is_empty());
        assert_eq!(layout.height, Pt(20.0));
    }

    #[test]
    fn cells_inherit_row_and_table_styles() {
        let row = Row::new(vec![
            Cell::text("a", Pt(50.0)),
            Cell::text("b", Pt(50.0)).with_style(TextStyle::default().with_size(Pt(8.0))),
        ])
        .with_style(TextStyle::default().with_leading(Pt(2.0)));
        let layout = layout_row(&row, Pt(0.0), &defaults(), &Monospace::new(Pt(5.0))).unwrap();
        assert_eq!(layout.cells[0].style.size, Pt(20.0));
        assert_eq!(layout.cells[0].style.leading, Pt(2.0));
        assert_eq!(layout.cells[1].style.size, Pt(8.0));
        assert_eq!(layout.cells[1].style.leading, Pt(2.0));
        assert_eq!(layout.height, Pt(22.0));
    }

    #[test]
    fn splits_a_single_cell() {
        let row = Row::new(vec![Cell::text("AAABBBCCC", Pt(30.0))]);
        let layout = layout_row(&row, Pt(0.0), &defaults(), &Monospace::new(Pt(10.0))).unwrap();
        assert_eq!(layout.height, Pt(60.0));

        let split = try_split(&layout, Pt(30.0)).unwrap().expect("text rows split");
        assert_eq!(texts(&split.kept.cells[0]), vec!["AAA"]);
        assert_eq!(split.kept.height, Pt(20.0));
        assert!(!split.is_zero_progress());
        let continuation = split.continuation.expect("two lines continue");
        assert_eq!(texts(&continuation.cells[0]), vec!["BBB", "CCC"]);
        assert_eq!(continuation.height, Pt(40.0));
    }

    #[test]
    fn cells_overflow_independently() {
        let padding = Margins::trbl(Pt(5.0), Pt(0.0), Pt(5.0), Pt(0.0));
        let row = Row::new(vec![
            Cell::text("AAABBBCCCDDD", Pt(30.0)).with_padding(padding),
            Cell::text("XYZ", Pt(30.0)).with_padding(padding),
            Cell::text("", Pt(30.0)),
        ]);
        let layout = layout_row(&row, Pt(0.0), &defaults(), &Monospace::new(Pt(10.0))).unwrap();
        assert_eq!(layout.height, Pt(90.0));

        // (49 - 5) / 20 = 2 lines, but 5 + 40 + 5 > 49 so only one is kept
        let split = try_split(&layout, Pt(49.0)).unwrap().unwrap();
        assert_eq!(texts(&split.kept.cells[0]), vec!["AAA"]);
        assert_eq!(texts(&split.kept.cells[1]), vec!["XYZ"]);
        assert!(split.kept.cells[2].lines().is_empty());
        assert_eq!(split.kept.height, Pt(30.0));

        let continuation = split.continuation.unwrap();
        assert_eq!(texts(&continuation.cells[0]), vec!["BBB", "CCC", "DDD"]);
        assert!(continuation.cells[1].lines().is_empty());
        assert_eq!(continuation.cells[1].x, Pt(30.0));
        assert_eq!(continuation.height, Pt(70.0));
    }

    #[test]
    fn split_conserves_every_line() {
        let metrics = Monospace::new(Pt(7.0));
        let text = lipsum::lipsum(40);
        let padded = Margins::trbl(Pt(3.0), Pt(4.0), Pt(9.0), Pt(4.0));
        let row = Row::new(vec![
            Cell::text(text.clone(), Pt(120.0)),
            Cell::text(&text[..text.len() / 3], Pt(80.0)).with_padding(padded),
            Cell::text("short", Pt(60.0)).with_padding(padded),
        ]);
        let layout = layout_row(&row, Pt(0.0), &defaults(), &metrics).unwrap();
        for available in [-10.0, 0.0, 11.9, 19.9, 25.0, 32.0, 45.0, 133.0, 400.0] {
            let split = try_split(&layout, Pt(available)).unwrap().unwrap();
            for (i, cell) in layout.cells.iter().enumerate() {
                let mut rejoined = split.kept.cells[i].lines().to_vec();
                if let Some(continuation) = &split.continuation {
                    rejoined.extend_from_slice(continuation.cells[i].lines());
                }
                assert_eq!(rejoined, cell.lines());
            }
            if !split.is_zero_progress() {
                assert!(
                    split.kept.height <= Pt(available),
                    "kept {} in {available}",
                    split.kept.height
                );
            }
        }
    }

    #[test]
    fn bottom_padding_counts_against_the_kept_part() {
        let row = Row::new(vec![
            Cell::text("AB", Pt(30.0)).with_padding(Margins::trbl(
                Pt(0.0),
                Pt(0.0),
                Pt(10.0),
                Pt(0.0),
            )),
            Cell::text("AAABBBCCCDDD", Pt(30.0)),
        ]);
        let layout = layout_row(&row, Pt(0.0), &defaults(), &Monospace::new(Pt(10.0))).unwrap();

        // "AB" fits on one line, but with its padding it is 30pt tall
        let split = try_split(&layout, Pt(25.0)).unwrap().unwrap();
        assert!(split.kept.cells[0].lines().is_empty());
        assert_eq!(texts(&split.kept.cells[1]), vec!["AAA"]);
        assert_eq!(split.kept.height, Pt(20.0));
        let continuation = split.continuation.unwrap();
        assert_eq!(texts(&continuation.cells[0]), vec!["AB"]);
        assert_eq!(continuation.cells[1].lines().len(), 3);
    }

    #[test]
    fn padding_taller_than_the_room_keeps_nothing() {
        let row = Row::new(vec![
            Cell::text("AAABBB", Pt(30.0)),
            Cell::text("", Pt(30.0)).with_padding(Margins::all(Pt(15.0))),
        ]);
        let layout = layout_row(&row, Pt(0.0), &defaults(), &Monospace::new(Pt(10.0))).unwrap();
        let split = try_split(&layout, Pt(25.0)).unwrap().unwrap();
        assert!(split.is_zero_progress());
        assert_eq!(split.continuation.unwrap().line_count(), 2);
    }

    #[test]
    fn too_little_room_keeps_nothing() {
        let row = Row::new(vec![Cell::text("AAABBB", Pt(30.0))]);
        let layout = layout_row(&row, Pt(0.0), &defaults(), &Monospace::new(Pt(10.0))).unwrap();
        let split = try_split(&layout, Pt(15.0)).unwrap().unwrap();
        assert!(split.is_zero_progress());
        assert_eq!(split.continuation.unwrap().line_count(), 2);
    }

    #[test]
    fn rows_that_fit_have_no_continuation() {
        let row = Row::new(vec![Cell::text("AAABBB", Pt(30.0))]).with_min_height(Pt(100.0));
        let layout = layout_row(&row, Pt(0.0), &defaults(), &Monospace::new(Pt(10.0))).unwrap();
        let split = try_split(&layout, Pt(60.0)).unwrap().unwrap();
        assert!(split.continuation.is_none());
        assert!(!split.is_zero_progress());
    }

    #[test]
    fn mixed_rows_are_not_split() {
        let mut images = Arena::<Image>::new();
        let image = images.alloc(Image::new_raster(DynamicImage::new_rgb8(1, 1)));
        let row = Row::new(vec![
            Cell::text("AAABBBCCC", Pt(30.0)),
            Cell::image(image, Pt(10.0), Pt(10.0), Pt(30.0)),
        ]);
        let layout = layout_row(&row, Pt(0.0), &defaults(), &Monospace::new(Pt(10.0))).unwrap();
        assert_eq!(try_split(&layout, Pt(30.0)), Ok(None));

        let fixed = Row::new(vec![Cell::text("AAABBBCCC", Pt(30.0)).with_height(Pt(80.0))]);
        let layout = layout_row(&fixed, Pt(0.0), &defaults(), &Monospace::new(Pt(10.0))).unwrap();
        assert_eq!(try_split(&layout, Pt(30.0)), Ok(None));
    }

    #[test]
    fn out_of_range_boundary_is_inconsistent() {
        let row = Row::new(vec![Cell::text("AAABBB", Pt(30.0))]);
        let layout = layout_row(&row, Pt(0.0), &defaults(), &Monospace::new(Pt(10.0))).unwrap();
        assert_eq!(
            layout.split_at(&[3]),
            Err(LayoutError::InconsistentRowSplit {
                cell: 0,
                kept: 3,
                continued: 0,
                total: 2
            })
        );
    }

    #[test]
    fn every_cell_needs_a_boundary() {
        let row = Row::new(vec![Cell::text("AAABBB", Pt(30.0)), Cell::text("CCC", Pt(30.0))]);
        let layout = layout_row(&row, Pt(0.0), &defaults(), &Monospace::new(Pt(10.0))).unwrap();
        assert_eq!(
            layout.split_at(&[1]),
            Err(LayoutError::InconsistentRowSplit {
                cell: 1,
                kept: 0,
                continued: 0,
                total: 1
            })
        );
        assert_eq!(
            layout.split_at(&[1, 1, 1]),
            Err(LayoutError::InconsistentRowSplit {
                cell: 2,
                kept: 1,
                continued: 0,
                total: 0
            })
        );
    }
}
