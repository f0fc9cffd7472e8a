use crate::{
    font::{Font, FontId, FontMetrics},
    image::Image,
    info::Info,
    layout::PageGeometry,
    page::{Page, PageContents, TextSpan},
    rect::Rect,
    refs::{ObjectReferences, RefType},
    render::{ImageId, PageFactory, PageId, RectPaint, Renderer, Stroke, TextPaint},
    units::Pt,
    PDFError,
};
use id_arena::Arena;
use pdf_writer::{Pdf, Ref};
use std::io::Write;

#[derive(Default)]
/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write].
///
/// It is also the default target for layout: it hands out pages as a
/// [PageFactory], records paint calls onto them as a [Renderer], and measures
/// text with its fonts as [FontMetrics].
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<PageId>,
    pub fonts: Vec<Font>,
    pub images: Arena<Image>,
}

impl Document {
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document
    pub fn add_page(&mut self, page: Page) -> PageId {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    /// Get the 0-based position of a page in the document
    pub fn index_of_page(&self, page: PageId) -> Option<usize> {
        self.page_order.iter().position(|&p| p == page)
    }

    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// The pages in document order
    pub fn ordered_pages(&self) -> impl Iterator<Item = &Page> {
        self.page_order.iter().filter_map(|&id| self.pages.get(id))
    }

    /// Fonts are stored document-wide and referred to by the returned id
    pub fn add_font(&mut self, font: Font) -> FontId {
        self.fonts.push(font);
        FontId(self.fonts.len() - 1)
    }

    pub fn add_image(&mut self, image: Image) -> ImageId {
        self.images.alloc(image)
    }

    fn push(&mut self, page: PageId, item: PageContents) {
        self.pages[page].contents.push(item);
    }

    /// Write the entire document to the writer. The whole document is
    /// rendered in memory first.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), PDFError> {
        let Document {
            info,
            pages,
            page_order,
            fonts,
            images,
        } = self;

        let mut refs = ObjectReferences::new();
        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        let page_refs: Vec<Ref> = (0..page_order.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();
        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for (i, font) in fonts.iter().enumerate() {
            font.write(&mut refs, i, &mut writer);
        }
        for (id, image) in images.iter() {
            image.write(&mut refs, id.index(), &mut writer)?;
        }
        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(PDFError::PageMissing)?;
            page.write(&mut refs, page_index, &fonts, &images, &mut writer)?;
        }

        writer.catalog(catalog_id).pages(page_tree_id);

        log::debug!(
            "writing document with {} pages, {} fonts, {} images",
            page_order.len(),
            fonts.len(),
            images.len()
        );
        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}

impl PageFactory for Document {
    fn new_page(&mut self, geometry: PageGeometry) -> PageId {
        self.add_page(Page::new(geometry))
    }
}

impl Renderer for Document {
    fn draw_text(&mut self, page: PageId, origin: (Pt, Pt), text: &str, paint: &TextPaint) {
        self.fonts[paint.font.0].mark_used(text);
        self.push(
            page,
            PageContents::Text(TextSpan {
                text: text.to_string(),
                origin,
                paint: *paint,
            }),
        );
    }

    fn draw_line(&mut self, page: PageId, from: (Pt, Pt), to: (Pt, Pt), stroke: &Stroke) {
        self.push(
            page,
            PageContents::Line {
                from,
                to,
                stroke: *stroke,
            },
        );
    }

    fn draw_rect(&mut self, page: PageId, rect: Rect, paint: &RectPaint) {
        self.push(page, PageContents::Rect { rect, paint: *paint });
    }

    fn draw_image(&mut self, page: PageId, image: ImageId, rect: Rect) {
        self.push(page, PageContents::Image { image, rect });
    }
}

/// Measures with the document's fonts. Panics if `font` was not added to
/// this document.
impl FontMetrics for Document {
    fn text_width(&self, font: FontId, text: &str, size: Pt) -> Pt {
        self.fonts[font.0].width_of_text(text, size)
    }

    fn ascent(&self, font: FontId, size: Pt) -> Pt {
        self.fonts[font.0].ascent(size)
    }

    fn descent(&self, font: FontId, size: Pt) -> Pt {
        self.fonts[font.0].descent(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::pagesize;
    use image::DynamicImage;

    #[test]
    fn page_factory_appends_pages_in_order() {
        let mut doc = Document::default();
        let first = doc.new_page(pagesize::A4);
        let second = doc.new_page(pagesize::LETTER);
        assert_eq!(doc.index_of_page(first), Some(0));
        assert_eq!(doc.index_of_page(second), Some(1));
        assert_eq!(doc.pages[second].geometry(), pagesize::LETTER);
    }

    #[test]
    fn records_paint_calls_on_the_right_page() {
        let mut doc = Document::default();
        let first = doc.new_page(pagesize::A5);
        let second = doc.new_page(pagesize::A5);
        let rect = Rect::from_top_left(Pt(10.0), Pt(100.0), Pt(50.0), Pt(20.0));
        doc.draw_rect(second, rect, &RectPaint::default());
        doc.draw_line(second, (Pt(0.0), Pt(0.0)), (Pt(10.0), Pt(0.0)), &Stroke::default());

        assert!(doc.pages[first].contents.is_empty());
        assert_eq!(doc.pages[second].contents.len(), 2);
        assert_eq!(
            doc.pages[second].contents[0],
            PageContents::Rect {
                rect,
                paint: RectPaint::default()
            }
        );
    }

    #[test]
    fn writes_a_pdf() {
        let mut doc = Document::default();
        doc.set_info(Info::new().title("Shapes").author("pdf-flow"));
        let image = doc.add_image(Image::new_raster(DynamicImage::new_rgba8(2, 2)));
        let page = doc.new_page(pagesize::A6);
        doc.draw_rect(
            page,
            Rect::from_top_left(Pt(20.0), Pt(200.0), Pt(100.0), Pt(40.0)),
            &RectPaint {
                fill: Some(colours::LIGHT_GREY),
                stroke: Some(Stroke::default()),
            },
        );
        doc.draw_image(
            page,
            image,
            Rect::from_top_left(Pt(20.0), Pt(150.0), Pt(20.0), Pt(20.0)),
        );

        let mut out: Vec<u8> = Vec::new();
        doc.write(&mut out).expect("can write document");
        assert!(out.starts_with(b"%PDF-"));
        let tail = String::from_utf8_lossy(&out[out.len().saturating_sub(32)..]).to_string();
        assert!(tail.contains("%%EOF"));
    }
}
