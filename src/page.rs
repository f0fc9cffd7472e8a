use crate::content::render_contents;
use crate::font::Font;
use crate::image::Image;
use crate::layout::PageGeometry;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::render::{ImageId, RectPaint, Stroke, TextPaint};
use crate::units::*;
use crate::PDFError;
use id_arena::Arena;
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Name, Pdf, Ref};

/// A run of text positioned by its baseline origin
#[derive(Clone, PartialEq, Debug)]
pub struct TextSpan {
    pub text: String,
    pub origin: (Pt, Pt),
    pub paint: TextPaint,
}

/// Everything that can be painted onto a page, in painting order
#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(TextSpan),
    Line {
        from: (Pt, Pt),
        to: (Pt, Pt),
        stroke: Stroke,
    },
    Rect {
        rect: Rect,
        paint: RectPaint,
    },
    Image {
        image: ImageId,
        rect: Rect,
    },
}

/// A single page and the content that was painted onto it
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    pub contents: Vec<PageContents>,
}

impl Page {
    pub fn new(geometry: PageGeometry) -> Page {
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: geometry.width,
                y2: geometry.height,
            },
            contents: Vec::default(),
        }
    }

    pub fn geometry(&self) -> PageGeometry {
        PageGeometry::new(self.media_box.width(), self.media_box.height())
    }

    pub fn add_span(&mut self, span: TextSpan) {
        self.contents.push(PageContents::Text(span));
    }

    /// All text painted on this page, in painting order
    pub fn spans(&self) -> impl Iterator<Item = &TextSpan> {
        self.contents.iter().filter_map(|c| match c {
            PageContents::Text(span) => Some(span),
            _ => None,
        })
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &[Font],
        images: &Arena<Image>,
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        let id = refs.get_or_gen(RefType::Page(page_index));
        let content_id = refs.gen(RefType::ContentForPage(page_index));
        let font_refs: Vec<Ref> = (0..fonts.len())
            .map(|i| refs.get_or_gen(RefType::Font(i)))
            .collect();
        let image_refs: Vec<Ref> = (0..images.len())
            .map(|i| refs.get_or_gen(RefType::Image(i)))
            .collect();
        let page_tree = refs.get_or_gen(RefType::PageTree);

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.parent(page_tree);
        page.contents(content_id);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (i, font_ref) in font_refs.into_iter().enumerate() {
            resource_fonts.pair(Name(format!("F{i}").as_bytes()), font_ref);
        }
        resource_fonts.finish();
        let mut resource_xobjects = resources.x_objects();
        for (i, image_ref) in image_refs.into_iter().enumerate() {
            resource_xobjects.pair(Name(format!("I{i}").as_bytes()), image_ref);
        }
        resource_xobjects.finish();
        resources.finish();
        page.finish();

        let rendered = render_contents(&self.contents, fonts);
        let compressed = compress_to_vec_zlib(&rendered, CompressionLevel::DefaultLevel as u8);
        writer
            .stream(content_id, &compressed)
            .filter(Filter::FlateDecode);

        Ok(())
    }
}
