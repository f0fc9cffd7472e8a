//! Flowing blocks of content across as many pages as they need.
//!
//! The [`Paginator`] walks a queue of blocks with a small state machine:
//! while [laying](State::Laying) it sizes the next block and asks
//! [`check_fits`] whether it fits below the cursor. Text is checked line by
//! line, table rows once per row (splitting them with [`try_split`] when they
//! don't fit), and images and rules once as a whole. Whatever did not fit is
//! put back at the front of the queue and the paginator moves to
//! [`State::PageBreakPending`], which opens a new page, draws the page
//! decorations and repeats the table header before laying resumes.
//!
//! Nothing is drawn until its position is final, so a page break never leaves
//! half of a line or row behind.

use std::collections::VecDeque;
use std::rc::Rc;

use crate::error::LayoutError;
use crate::font::FontMetrics;
use crate::layout::cursor::{Cursor, PageGeometry};
use crate::layout::margins::Margins;
use crate::layout::page_break::{check_fits, PageBreakDecision};
use crate::layout::style::{Alignment, ResolvedStyle, TextStyle};
use crate::layout::table::{layout_row, try_split, CellBody, RowLayout, SplitResult, Table};
use crate::layout::text::{baseline_offset, measure, paragraph_lines, Line};
use crate::rect::Rect;
use crate::render::{ImageId, PageFactory, PageId, RectPaint, Renderer, Stroke};
use crate::units::Pt;
use serde::{Deserialize, Serialize};

/// Knobs that change how content is laid out but not what it looks like
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Number of spaces a tab expands to
    pub tab_size: usize,
    /// Whether table header rows are drawn again on every page a table
    /// continues onto. Tables can override this individually.
    pub repeat_table_headers: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            tab_size: 4,
            repeat_table_headers: true,
        }
    }
}

/// A single line of text drawn at the top (header) or bottom (footer) of
/// every page, inside the page margins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// `{page}` is replaced with the 1-based page number
    pub text: String,
    /// Vertical space the band takes away from content
    pub height: Pt,
    #[serde(default)]
    pub style: TextStyle,
}

impl Band {
    pub fn new<S: Into<String>>(text: S, height: Pt) -> Band {
        Band {
            text: text.into(),
            height,
            style: TextStyle::default(),
        }
    }

    pub fn with_style(mut self, style: TextStyle) -> Band {
        self.style = style;
        self
    }

    fn text_for_page(&self, page_number: usize) -> String {
        self.text.replace("{page}", &page_number.to_string())
    }
}

/// Text drawn rotated through the middle of every page, behind the content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Watermark {
    pub text: String,
    #[serde(default)]
    pub style: TextStyle,
    /// Counter-clockwise, in radians
    pub rotation: f32,
}

impl Watermark {
    pub fn new<S: Into<String>>(text: S) -> Watermark {
        Watermark {
            text: text.into(),
            style: TextStyle::default(),
            rotation: std::f32::consts::FRAC_PI_4,
        }
    }

    pub fn with_style(mut self, style: TextStyle) -> Watermark {
        self.style = style;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Watermark {
        self.rotation = rotation;
        self
    }
}

/// Everything that is the same on every page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSetup {
    pub geometry: PageGeometry,
    pub margins: Margins,
    /// The style everything else inherits from
    pub style: ResolvedStyle,
    pub header: Option<Band>,
    pub footer: Option<Band>,
    pub watermark: Option<Watermark>,
}

impl PageSetup {
    /// Pages of the given size with one inch margins
    pub fn new(geometry: PageGeometry, style: ResolvedStyle) -> PageSetup {
        PageSetup {
            geometry,
            margins: Margins::all(Pt(72.0)),
            style,
            header: None,
            footer: None,
            watermark: None,
        }
    }

    pub fn with_margins(mut self, margins: Margins) -> PageSetup {
        self.margins = margins;
        self
    }

    pub fn with_header(mut self, header: Band) -> PageSetup {
        self.header = Some(header);
        self
    }

    pub fn with_footer(mut self, footer: Band) -> PageSetup {
        self.footer = Some(footer);
        self
    }

    pub fn with_watermark(mut self, watermark: Watermark) -> PageSetup {
        self.watermark = Some(watermark);
        self
    }

    /// Where content starts on a fresh page: below the top margin and the
    /// header band
    pub fn top(&self) -> Pt {
        self.geometry.height
            - self.margins.top
            - self.header.as_ref().map_or(Pt::ZERO, |h| h.height)
    }

    /// Space kept free above the bottom margin for the footer
    pub fn reserved_footer(&self) -> Pt {
        self.footer.as_ref().map_or(Pt::ZERO, |f| f.height)
    }

    pub fn content_width(&self) -> Pt {
        self.geometry.width - self.margins.horizontal()
    }
}

/// A run of text, broken into lines across the content width
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub style: TextStyle,
    /// Space around the paragraph. The top margin is applied once, before the
    /// first line; the bottom margin is left empty after the last.
    pub margins: Margins,
    /// Narrower than the content width, if set
    pub max_width: Option<Pt>,
}

impl Paragraph {
    pub fn new<S: Into<String>>(text: S) -> Paragraph {
        Paragraph {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_style(mut self, style: TextStyle) -> Paragraph {
        self.style = style;
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Paragraph {
        self.margins = margins;
        self
    }

    pub fn with_max_width(mut self, max_width: Pt) -> Paragraph {
        self.max_width = Some(max_width);
        self
    }
}

/// An image that either fits below the cursor or moves to the next page
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBlock {
    pub image: ImageId,
    pub width: Pt,
    pub height: Pt,
    pub alignment: Alignment,
    pub margins: Margins,
}

impl ImageBlock {
    pub fn new(image: ImageId, width: Pt, height: Pt) -> ImageBlock {
        ImageBlock {
            image,
            width,
            height,
            alignment: Alignment::Start,
            margins: Margins::empty(),
        }
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> ImageBlock {
        self.alignment = alignment;
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> ImageBlock {
        self.margins = margins;
        self
    }
}

/// A horizontal line across the content width
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub stroke: Stroke,
    pub margins: Margins,
}

impl Rule {
    pub fn new(stroke: Stroke) -> Rule {
        Rule {
            stroke,
            margins: Margins::empty(),
        }
    }

    pub fn with_margins(mut self, margins: Margins) -> Rule {
        self.margins = margins;
        self
    }
}

/// Content to be flowed onto pages
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
    Image(ImageBlock),
    Rule(Rule),
    /// Vertical space. Dropped rather than carried over when the page ends.
    Spacer(Pt),
    /// Start the following content on a new page
    PageBreak,
}

/// A line of text at its final position
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub page: PageId,
    pub x: Pt,
    pub baseline: Pt,
    pub line: Line,
}

/// A table row, or part of one, at its final position
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedRow {
    pub page: PageId,
    pub top: Pt,
    pub row: RowLayout,
    pub header: bool,
}

/// Where everything ended up
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Flow {
    /// Pages opened during layout, in order
    pub pages: Vec<PageId>,
    pub lines: Vec<PlacedLine>,
    pub rows: Vec<PlacedRow>,
    /// Where the next sibling should continue from
    pub cursor: Cursor,
}

/// The states of the pagination loop
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum State {
    /// Placing the next item of the queue on the current page
    Laying,
    /// The front of the queue needs a new page
    PageBreakPending,
    /// The queue is empty
    Done,
}

struct PendingLines {
    lines: VecDeque<Line>,
    style: ResolvedStyle,
    left: Pt,
    width: Pt,
    margin_top: Pt,
    margin_bottom: Pt,
}

struct PendingRow {
    row: RowLayout,
    /// Header rows to draw above this row if it lands on a new page
    repeat: Rc<Vec<RowLayout>>,
    header: bool,
    margin_top: Pt,
    margin_bottom: Pt,
}

enum Item {
    Block(Block),
    Lines(PendingLines),
    Row(PendingRow),
}

/// Lays blocks out onto pages obtained from `target`, painting them onto
/// `target` as their positions become final and measuring text with it.
pub struct Paginator<'a, T> {
    target: &'a mut T,
    setup: PageSetup,
    config: LayoutConfig,
    page: Option<PageId>,
    page_number: usize,
    cursor: Cursor,
    /// Whether anything other than decorations has been placed on the
    /// current page
    progressed: bool,
    flow: Flow,
}

impl<'a, T> Paginator<'a, T>
where
    T: PageFactory + Renderer + FontMetrics,
{
    pub fn new(target: &'a mut T, setup: PageSetup) -> Paginator<'a, T> {
        Paginator {
            target,
            setup,
            config: LayoutConfig::default(),
            page: None,
            page_number: 0,
            cursor: Cursor::unset(),
            progressed: false,
            flow: Flow::default(),
        }
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Paginator<'a, T> {
        self.config = config;
        self
    }

    /// Continue on a page that was started elsewhere, below `cursor`.
    /// `page_number` is the 1-based number of that page.
    pub fn resume(mut self, page: PageId, page_number: usize, cursor: Cursor) -> Paginator<'a, T> {
        self.page = Some(page);
        self.page_number = page_number;
        self.cursor = cursor;
        self.progressed = true;
        self
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn current_page(&self) -> Option<PageId> {
        self.page
    }

    /// Lay out a single paragraph, continuing from the current cursor
    pub fn layout_text_block(
        &mut self,
        paragraph: &Paragraph,
    ) -> Result<(Vec<PlacedLine>, Cursor), LayoutError> {
        let before = self.flow.lines.len();
        self.drive(VecDeque::from([Item::Block(Block::Paragraph(
            paragraph.clone(),
        ))]))?;
        Ok((self.flow.lines[before..].to_vec(), self.cursor))
    }

    /// Lay out a single table, continuing from the current cursor
    pub fn layout_table(&mut self, table: &Table) -> Result<(Vec<PlacedRow>, Cursor), LayoutError> {
        let before = self.flow.rows.len();
        self.drive(VecDeque::from([Item::Block(Block::Table(table.clone()))]))?;
        Ok((self.flow.rows[before..].to_vec(), self.cursor))
    }

    /// Lay out every block in order and report where everything went
    pub fn run(mut self, blocks: Vec<Block>) -> Result<Flow, LayoutError> {
        self.drive(blocks.into_iter().map(Item::Block).collect())?;
        Ok(self.finish())
    }

    /// Everything placed so far
    pub fn finish(mut self) -> Flow {
        self.flow.cursor = self.cursor;
        self.flow
    }

    fn drive(&mut self, mut queue: VecDeque<Item>) -> Result<(), LayoutError> {
        let mut state = State::Laying;
        loop {
            state = match state {
                State::Laying => match queue.pop_front() {
                    Some(item) => self.lay(item, &mut queue)?,
                    None => State::Done,
                },
                State::PageBreakPending => {
                    self.break_page()?;
                    if let Some(Item::Row(pending)) = queue.front() {
                        let header = Rc::clone(&pending.repeat);
                        self.repeat_header(&header);
                    }
                    State::Laying
                }
                State::Done => return Ok(()),
            };
        }
    }

    fn lay(&mut self, item: Item, queue: &mut VecDeque<Item>) -> Result<State, LayoutError> {
        match item {
            Item::Block(Block::Paragraph(paragraph)) => {
                self.expand_paragraph(&paragraph, queue)?;
                Ok(State::Laying)
            }
            Item::Block(Block::Table(table)) => {
                self.expand_table(&table, queue)?;
                Ok(State::Laying)
            }
            Item::Block(Block::Image(image)) => self.lay_image(image, queue),
            Item::Block(Block::Rule(rule)) => self.lay_rule(rule, queue),
            Item::Block(Block::Spacer(height)) => {
                self.lay_spacer(height);
                Ok(State::Laying)
            }
            Item::Block(Block::PageBreak) => {
                if self.page.is_some() {
                    self.open_page();
                }
                Ok(State::Laying)
            }
            Item::Lines(lines) => self.lay_lines(lines, queue),
            Item::Row(row) => self.lay_row(row, queue),
        }
    }

    fn expand_paragraph(
        &mut self,
        paragraph: &Paragraph,
        queue: &mut VecDeque<Item>,
    ) -> Result<(), LayoutError> {
        let style = paragraph.style.resolve(&self.setup.style);
        let available = self.setup.content_width() - paragraph.margins.horizontal();
        let width = paragraph
            .max_width
            .map_or(available, |max| max.min(available));
        let lines = paragraph_lines(
            &paragraph.text,
            width,
            &style,
            self.config.tab_size,
            &*self.target,
        )?;
        if lines.is_empty() {
            return Ok(());
        }

        queue.push_front(Item::Lines(PendingLines {
            lines: lines.into(),
            style,
            left: self.setup.margins.left + paragraph.margins.left,
            width,
            margin_top: paragraph.margins.top,
            margin_bottom: paragraph.margins.bottom,
        }));
        Ok(())
    }

    fn expand_table(&mut self, table: &Table, queue: &mut VecDeque<Item>) -> Result<(), LayoutError> {
        let defaults = table.defaults(&self.setup.style, self.config.tab_size);
        let left = self.setup.margins.left + table.margins.left;
        let header = table
            .header
            .iter()
            .map(|row| layout_row(row, left, &defaults, &*self.target))
            .collect::<Result<Vec<_>, _>>()?;
        let body = table
            .rows
            .iter()
            .map(|row| layout_row(row, left, &defaults, &*self.target))
            .collect::<Result<Vec<_>, _>>()?;

        let repeat = if table
            .repeat_header
            .unwrap_or(self.config.repeat_table_headers)
        {
            Rc::new(header.clone())
        } else {
            Rc::new(Vec::new())
        };
        let no_repeat = Rc::new(Vec::new());

        let count = header.len() + body.len();
        let rows = header
            .into_iter()
            .map(|row| (row, true))
            .chain(body.into_iter().map(|row| (row, false)));
        let items: Vec<Item> = rows
            .enumerate()
            .map(|(i, (row, header))| {
                Item::Row(PendingRow {
                    row,
                    repeat: if header {
                        Rc::clone(&no_repeat)
                    } else {
                        Rc::clone(&repeat)
                    },
                    header,
                    margin_top: if i == 0 { table.margins.top } else { Pt::ZERO },
                    margin_bottom: if i + 1 == count {
                        table.margins.bottom
                    } else {
                        Pt::ZERO
                    },
                })
            })
            .collect();
        for item in items.into_iter().rev() {
            queue.push_front(item);
        }
        Ok(())
    }

    fn check(&self, required: Pt, margin_top: Pt) -> (Pt, PageBreakDecision) {
        let y = self.cursor.y_or(self.setup.top());
        let decision = check_fits(
            y,
            required,
            margin_top,
            self.setup.margins.bottom,
            self.setup.reserved_footer(),
        );
        (y, decision)
    }

    fn lay_lines(
        &mut self,
        mut pending: PendingLines,
        queue: &mut VecDeque<Item>,
    ) -> Result<State, LayoutError> {
        let page = self.ensure_page();
        let pitch = pending.style.pitch();
        let ascent = baseline_offset(&*self.target, &pending.style);

        let mut placed = Vec::new();
        let mut y = self.cursor.y_or(self.setup.top());
        let mut fits = true;
        while !pending.lines.is_empty() {
            let (_, decision) = self.check(pitch, pending.margin_top);
            if let PageBreakDecision::BreakRequired { remaining } = decision {
                log::trace!("line does not fit in {remaining} on page {}", self.page_number);
                fits = false;
                break;
            }
            let Some(line) = pending.lines.pop_front() else {
                break;
            };
            let top = y - pending.margin_top;
            pending.margin_top = Pt::ZERO;
            placed.push(PlacedLine {
                page,
                x: pending.left + pending.style.alignment.offset(pending.width, line.width),
                baseline: top - ascent,
                line,
            });
            y = top - pitch;
            self.cursor.y = Some(y);
        }

        let paint = pending.style.paint();
        for placed in placed.iter().filter(|p| !p.line.text.is_empty()) {
            self.target
                .draw_text(page, (placed.x, placed.baseline), &placed.line.text, &paint);
        }
        if let Some(last) = placed.last() {
            self.progressed = true;
            self.cursor.x = Some(last.x + last.line.width);
        }
        self.flow.lines.extend(placed);

        if fits {
            self.cursor.y = Some(y - pending.margin_bottom);
            Ok(State::Laying)
        } else {
            queue.push_front(Item::Lines(pending));
            Ok(State::PageBreakPending)
        }
    }

    fn lay_row(
        &mut self,
        mut pending: PendingRow,
        queue: &mut VecDeque<Item>,
    ) -> Result<State, LayoutError> {
        let page = self.ensure_page();
        let (y, decision) = self.check(pending.row.height, pending.margin_top);
        let top = y - pending.margin_top;

        let remaining = match decision {
            PageBreakDecision::Fits => {
                self.finish_row(page, top, &pending);
                return Ok(State::Laying);
            }
            PageBreakDecision::BreakRequired { remaining } => remaining,
        };

        match try_split(&pending.row, remaining)? {
            Some(split) if split.is_zero_progress() => log::debug!(
                "no line of the row fits in {remaining} on page {}, moving it",
                self.page_number
            ),
            Some(SplitResult {
                kept,
                continuation: Some(continuation),
            }) => {
                log::debug!(
                    "split row on page {}: kept {} of {} lines",
                    self.page_number,
                    kept.line_count(),
                    pending.row.line_count()
                );
                self.place_row(page, top, &kept, pending.header);
                self.progressed = true;
                self.cursor.move_to(self.setup.margins.left, top - kept.height);
                pending.row = continuation;
                pending.margin_top = Pt::ZERO;
            }
            // every line fits, the row just ends flush with the bottom of the page
            Some(_) if pending.row.height <= remaining => {
                self.finish_row(page, top, &pending);
                return Ok(State::Laying);
            }
            _ => log::debug!(
                "moving row to the next page ({remaining} left on page {})",
                self.page_number
            ),
        }
        queue.push_front(Item::Row(pending));
        Ok(State::PageBreakPending)
    }

    fn finish_row(&mut self, page: PageId, top: Pt, pending: &PendingRow) {
        self.place_row(page, top, &pending.row, pending.header);
        self.progressed = true;
        self.cursor.move_to(
            self.setup.margins.left,
            top - pending.row.height - pending.margin_bottom,
        );
    }

    fn lay_image(
        &mut self,
        image: ImageBlock,
        queue: &mut VecDeque<Item>,
    ) -> Result<State, LayoutError> {
        let page = self.ensure_page();
        let available = self.setup.content_width() - image.margins.horizontal();
        if image.width > available {
            return Err(LayoutError::WidthTooSmall {
                width: available,
                size: image.width,
            });
        }

        let (y, decision) = self.check(image.height, image.margins.top);
        if let PageBreakDecision::BreakRequired { .. } = decision {
            queue.push_front(Item::Block(Block::Image(image)));
            return Ok(State::PageBreakPending);
        }

        let top = y - image.margins.top;
        let left = self.setup.margins.left + image.margins.left;
        let x = left + image.alignment.offset(available, image.width);
        self.target.draw_image(
            page,
            image.image,
            Rect::from_top_left(x, top, image.width, image.height),
        );
        self.progressed = true;
        self.cursor.move_to(
            self.setup.margins.left,
            top - image.height - image.margins.bottom,
        );
        Ok(State::Laying)
    }

    fn lay_rule(&mut self, rule: Rule, queue: &mut VecDeque<Item>) -> Result<State, LayoutError> {
        let page = self.ensure_page();
        let (y, decision) = self.check(rule.stroke.width, rule.margins.top);
        if let PageBreakDecision::BreakRequired { .. } = decision {
            queue.push_front(Item::Block(Block::Rule(rule)));
            return Ok(State::PageBreakPending);
        }

        let top = y - rule.margins.top;
        let middle = top - rule.stroke.width / 2.0;
        let left = self.setup.margins.left + rule.margins.left;
        let right = self.setup.geometry.width - self.setup.margins.right - rule.margins.right;
        self.target
            .draw_line(page, (left, middle), (right, middle), &rule.stroke);
        self.progressed = true;
        self.cursor.move_to(
            self.setup.margins.left,
            top - rule.stroke.width - rule.margins.bottom,
        );
        Ok(State::Laying)
    }

    fn lay_spacer(&mut self, height: Pt) {
        self.ensure_page();
        let (y, decision) = self.check(height, Pt::ZERO);
        match decision {
            PageBreakDecision::Fits => self.cursor.y = Some(y - height),
            PageBreakDecision::BreakRequired { .. } => {
                log::trace!("dropping {height} spacer at the end of page {}", self.page_number)
            }
        }
    }

    fn repeat_header(&mut self, header: &[RowLayout]) {
        let Some(page) = self.page else {
            return;
        };
        for row in header.iter() {
            let top = self.cursor.y_or(self.setup.top());
            self.place_row(page, top, row, true);
            self.cursor.move_to(self.setup.margins.left, top - row.height);
        }
    }

    fn place_row(&mut self, page: PageId, top: Pt, row: &RowLayout, header: bool) {
        self.draw_row(page, top, row);
        self.flow.rows.push(PlacedRow {
            page,
            top,
            row: row.clone(),
            header,
        });
    }

    fn draw_row(&mut self, page: PageId, top: Pt, row: &RowLayout) {
        for cell in row.cells.iter() {
            if cell.background.is_some() || cell.border.is_some() {
                self.target.draw_rect(
                    page,
                    Rect::from_top_left(cell.x, top, cell.width, row.height),
                    &RectPaint {
                        fill: cell.background,
                        stroke: cell.border,
                    },
                );
            }
            if cell.merged {
                continue;
            }

            let inner_x = cell.x + cell.padding.left;
            let inner_width = cell.width - cell.padding.horizontal();
            let inner_top = top - cell.padding.top;
            match &cell.body {
                CellBody::Lines(lines) => {
                    let ascent = baseline_offset(&*self.target, &cell.style);
                    let paint = cell.style.paint();
                    for (i, line) in lines.iter().enumerate() {
                        if line.text.is_empty() {
                            continue;
                        }
                        let x = inner_x + cell.style.alignment.offset(inner_width, line.width);
                        let baseline = inner_top - cell.style.pitch() * i as f32 - ascent;
                        self.target.draw_text(page, (x, baseline), &line.text, &paint);
                    }
                }
                CellBody::Image {
                    image,
                    width,
                    height,
                } => {
                    let x = inner_x + cell.style.alignment.offset(inner_width, *width);
                    self.target.draw_image(
                        page,
                        *image,
                        Rect::from_top_left(x, inner_top, *width, *height),
                    );
                }
                CellBody::Table(rows) => {
                    let mut nested_top = inner_top;
                    for nested in rows.iter() {
                        self.draw_row(page, nested_top, nested);
                        nested_top -= nested.height;
                    }
                }
            }
        }
    }

    fn ensure_page(&mut self) -> PageId {
        match self.page {
            Some(page) => page,
            None => self.open_page(),
        }
    }

    fn break_page(&mut self) -> Result<PageId, LayoutError> {
        if !self.progressed {
            log::debug!("nothing fits on fresh page {}", self.page_number);
            return Err(LayoutError::ZeroProgress {
                page: self.page_number,
            });
        }
        Ok(self.open_page())
    }

    fn open_page(&mut self) -> PageId {
        let page = self.target.new_page(self.setup.geometry);
        self.page = Some(page);
        self.page_number += 1;
        self.progressed = false;
        self.cursor = Cursor::at(self.setup.margins.left, self.setup.top());
        self.flow.pages.push(page);
        log::debug!("started page {}", self.page_number);
        self.decorate(page);
        page
    }

    /// Watermark first so that content paints over it, then header and footer
    fn decorate(&mut self, page: PageId) {
        let geometry = self.setup.geometry;
        let margins = self.setup.margins;
        let content_width = self.setup.content_width();

        if let Some(watermark) = &self.setup.watermark {
            let style = watermark.style.resolve(&self.setup.style);
            let width = measure(&*self.target, &style, &watermark.text);
            let (sin, cos) = watermark.rotation.sin_cos();
            let origin = (
                geometry.width / 2.0 - width * (cos / 2.0),
                geometry.height / 2.0 - width * (sin / 2.0),
            );
            let mut paint = style.paint();
            paint.rotation = watermark.rotation;
            self.target.draw_text(page, origin, &watermark.text, &paint);
        }

        if let Some(header) = &self.setup.header {
            let style = header.style.resolve(&self.setup.style);
            let text = header.text_for_page(self.page_number);
            let x = margins.left
                + style
                    .alignment
                    .offset(content_width, measure(&*self.target, &style, &text));
            let baseline = geometry.height - margins.top - baseline_offset(&*self.target, &style);
            self.target.draw_text(page, (x, baseline), &text, &style.paint());
        }

        if let Some(footer) = &self.setup.footer {
            let style = footer.style.resolve(&self.setup.style);
            let text = footer.text_for_page(self.page_number);
            let x = margins.left
                + style
                    .alignment
                    .offset(content_width, measure(&*self.target, &style, &text));
            let baseline = margins.bottom + footer.height - baseline_offset(&*self.target, &style);
            self.target.draw_text(page, (x, baseline), &text, &style.paint());
        }
    }
}
