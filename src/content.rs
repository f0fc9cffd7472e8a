//! Turns recorded page contents into a PDF content stream.

use crate::colour::Colour;
use crate::font::Font;
use crate::page::{PageContents, TextSpan};
use crate::render::Stroke;
use crate::transform::Transform;
use pdf_writer::{Content, Name, Str};

pub(crate) fn render_contents(contents: &[PageContents], fonts: &[Font]) -> Vec<u8> {
    let mut content = Content::new();

    for item in contents.iter() {
        match item {
            PageContents::Text(span) => render_span(&mut content, span, fonts),
            PageContents::Line { from, to, stroke } => {
                content.save_state();
                set_stroke(&mut content, stroke);
                content.move_to(*from.0, *from.1);
                content.line_to(*to.0, *to.1);
                content.stroke();
                content.restore_state();
            }
            PageContents::Rect { rect, paint } => {
                let (x, y, w, h) = (*rect.x1, *rect.y1, *rect.width(), *rect.height());
                content.save_state();
                if let Some(fill) = paint.fill {
                    set_fill(&mut content, fill);
                    content.rect(x, y, w, h);
                    content.fill_nonzero();
                }
                if let Some(stroke) = &paint.stroke {
                    set_stroke(&mut content, stroke);
                    content.rect(x, y, w, h);
                    content.stroke();
                }
                content.restore_state();
            }
            PageContents::Image { image, rect } => {
                content.save_state();
                content.transform([*rect.width(), 0.0, 0.0, *rect.height(), *rect.x1, *rect.y1]);
                content.x_object(Name(format!("I{}", image.index()).as_bytes()));
                content.restore_state();
            }
        }
    }

    content.finish()
}

fn render_span(content: &mut Content, span: &TextSpan, fonts: &[Font]) {
    if span.text.is_empty() {
        return;
    }
    let paint = &span.paint;
    let font = &fonts[paint.font.0];

    content.save_state();
    set_fill(content, paint.colour);
    content.begin_text();
    content.set_font(Name(format!("F{}", paint.font.0).as_bytes()), *paint.size);
    if paint.character_spacing != crate::Pt::ZERO {
        content.set_char_spacing(*paint.character_spacing);
    }
    let placement = Transform::rotate(paint.rotation)
        .then(Transform::translate(span.origin.0, span.origin.1));
    content.set_text_matrix(placement.to_array());
    content.show(Str(&font.encode(&span.text)));
    content.end_text();
    content.restore_state();
}

fn set_fill(content: &mut Content, colour: Colour) {
    match colour {
        Colour::RGB { r, g, b } => content.set_fill_rgb(r, g, b),
        Colour::CMYK { c, m, y, k } => content.set_fill_cmyk(c, m, y, k),
        Colour::Grey { g } => content.set_fill_gray(g),
    };
}

fn set_stroke(content: &mut Content, stroke: &Stroke) {
    content.set_line_width(*stroke.width);
    match stroke.colour {
        Colour::RGB { r, g, b } => content.set_stroke_rgb(r, g, b),
        Colour::CMYK { c, m, y, k } => content.set_stroke_cmyk(c, m, y, k),
        Colour::Grey { g } => content.set_stroke_gray(g),
    };
}
