use pdf_flow::layout::{
    Band, Block, Cell, ImageBlock, LayoutConfig, Margins, PageGeometry, PageSetup, Paginator,
    Paragraph, ResolvedStyle, Row, Rule, Table, TextStyle,
};
use pdf_flow::{
    colours, pagesize, Document, FontId, FontMetrics, Image, ImageId, Monospace, PageFactory,
    PageId, Pt, Rect, RectPaint, Renderer, Stroke, TextPaint,
};

/// Records pages, shapes and images on a real document, but keeps text to
/// itself since there is no font to draw it with
struct Target {
    doc: Document,
    metrics: Monospace,
    text: Vec<(PageId, String)>,
}

impl Target {
    fn new() -> Target {
        Target {
            doc: Document::default(),
            metrics: Monospace::new(Pt(6.0)),
            text: Vec::new(),
        }
    }
}

impl PageFactory for Target {
    fn new_page(&mut self, geometry: PageGeometry) -> PageId {
        self.doc.new_page(geometry)
    }
}

impl Renderer for Target {
    fn draw_text(&mut self, page: PageId, _origin: (Pt, Pt), text: &str, _paint: &TextPaint) {
        self.text.push((page, text.to_string()));
    }

    fn draw_line(&mut self, page: PageId, from: (Pt, Pt), to: (Pt, Pt), stroke: &Stroke) {
        self.doc.draw_line(page, from, to, stroke);
    }

    fn draw_rect(&mut self, page: PageId, rect: Rect, paint: &RectPaint) {
        self.doc.draw_rect(page, rect, paint);
    }

    fn draw_image(&mut self, page: PageId, image: ImageId, rect: Rect) {
        self.doc.draw_image(page, image, rect);
    }
}

impl FontMetrics for Target {
    fn text_width(&self, font: FontId, text: &str, size: Pt) -> Pt {
        self.metrics.text_width(font, text, size)
    }

    fn ascent(&self, font: FontId, size: Pt) -> Pt {
        self.metrics.ascent(font, size)
    }

    fn descent(&self, font: FontId, size: Pt) -> Pt {
        self.metrics.descent(font, size)
    }
}

fn setup() -> PageSetup {
    PageSetup::new(pagesize::A5, ResolvedStyle::new(FontId(0), Pt(10.0)))
        .with_margins(Margins::all(Pt(36.0)))
        .with_footer(Band::new("page {page}", Pt(18.0)))
}

fn report(image: ImageId) -> Vec<Block> {
    let padding = Margins::all(Pt(2.0));
    let border = Stroke::new(colours::BLACK, Pt(0.5));
    let rows = (0..12)
        .map(|i| {
            Row::new(vec![
                Cell::text(format!("item {i}"), Pt(80.0))
                    .with_padding(padding)
                    .with_border(border),
                Cell::text(lipsum::lipsum(10 + i * 7), Pt(220.0))
                    .with_padding(padding)
                    .with_border(border),
            ])
        })
        .collect();
    let header = Row::new(vec![
        Cell::text("Item", Pt(80.0))
            .with_padding(padding)
            .with_background(colours::LIGHT_GREY),
        Cell::text("Description", Pt(220.0))
            .with_padding(padding)
            .with_background(colours::LIGHT_GREY),
    ])
    .with_style(TextStyle::default().with_colour(colours::BLUE));

    vec![
        Block::Paragraph(
            Paragraph::new(lipsum::lipsum(250))
                .with_style(TextStyle::default().with_leading(Pt(2.0)))
                .with_margins(Margins::trbl(Pt(0.0), Pt(0.0), Pt(12.0), Pt(0.0))),
        ),
        Block::Rule(Rule::new(Stroke::default())),
        Block::Spacer(Pt(12.0)),
        Block::Table(Table::new(rows).with_header(vec![header])),
        Block::Image(ImageBlock::new(image, Pt(120.0), Pt(90.0))),
        Block::Paragraph(Paragraph::new("The end.")),
    ]
}

#[test]
fn lays_out_and_writes_a_multi_page_report() {
    let mut target = Target::new();
    let image = target.doc.add_image(Image::new_raster(
        image::DynamicImage::new_rgba8(4, 3),
    ));

    let flow = Paginator::new(&mut target, setup())
        .run(report(image))
        .expect("report lays out");

    assert!(flow.pages.len() > 2);
    assert_eq!(flow.pages.len(), target.doc.page_count());
    for (n, page) in flow.pages.iter().enumerate() {
        let footer = format!("page {}", n + 1);
        assert!(target.text.contains(&(*page, footer)));
    }
    assert_eq!(
        target.text.last().map(|(_, text)| text.as_str()),
        Some("The end.")
    );

    let mut out = Vec::new();
    target.doc.write(&mut out).expect("can write the document");
    assert!(out.starts_with(b"%PDF-"));
}

#[test]
fn table_text_survives_page_breaks() {
    let mut target = Target::new();
    let image = target.doc.add_image(Image::new_raster(
        image::DynamicImage::new_rgb8(1, 1),
    ));
    let blocks = report(image);
    let Block::Table(table) = &blocks[3] else {
        panic!("fourth block is the table");
    };
    let expected: Vec<String> = table
        .rows
        .iter()
        .map(|row| match &row.cells[1].content {
            pdf_flow::layout::CellContent::Text(text) => text.clone(),
            _ => unreachable!(),
        })
        .collect();

    let flow = Paginator::new(&mut target, setup())
        .run(blocks)
        .expect("report lays out");

    // rows are placed in order, so concatenating the description column of
    // every body row rebuilds the descriptions back to back
    let placed: String = flow
        .rows
        .iter()
        .filter(|r| !r.header)
        .flat_map(|r| r.row.cells[1].lines().iter().map(|l| l.text.clone()))
        .collect();
    assert_eq!(placed, expected.concat());

    let pages_with_tables: Vec<PageId> = flow
        .rows
        .iter()
        .filter(|r| !r.header)
        .map(|r| r.page)
        .collect();
    for page in pages_with_tables.iter() {
        assert!(flow.rows.iter().any(|r| r.header && r.page == *page));
    }
}

#[test]
fn laying_out_twice_is_identical() {
    let mut images = id_arena::Arena::<Image>::new();
    let image = images.alloc(Image::new_raster(image::DynamicImage::new_rgb8(1, 1)));
    // lipsum is random past its first sentence, so both runs share one copy
    let blocks = report(image);

    let run = |blocks: Vec<Block>| {
        let mut target = Target::new();
        let flow = Paginator::new(&mut target, setup())
            .run(blocks)
            .expect("report lays out");
        let lines: Vec<(usize, Pt, Pt, String)> = flow
            .lines
            .iter()
            .map(|l| (l.page.index(), l.x, l.baseline, l.line.text.clone()))
            .collect();
        let rows: Vec<(usize, Pt, Pt)> = flow
            .rows
            .iter()
            .map(|r| (r.page.index(), r.top, r.row.height))
            .collect();
        let text: Vec<(usize, String)> = target
            .text
            .into_iter()
            .map(|(page, text)| (page.index(), text))
            .collect();
        (lines, rows, flow.cursor, text)
    };
    assert_eq!(run(blocks.clone()), run(blocks));
}

#[test]
fn page_setup_loads_from_json() {
    let setup = setup().with_header(Band::new("Quarterly", Pt(20.0)));
    let json = serde_json::to_string(&setup).expect("serializes");
    let loaded: PageSetup = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(loaded, setup);

    let config: LayoutConfig =
        serde_json::from_str(r#"{"repeat_table_headers": false}"#).expect("deserializes");
    assert_eq!(config.tab_size, 4);
    assert!(!config.repeat_table_headers);
}
