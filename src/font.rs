use crate::{
    refs::{ObjectReferences, RefType},
    PDFError, Pt,
};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Str,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Refers to a font by its index within a [`Document`](crate::Document)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontId(pub usize);

/// Glyph measurement, the only thing layout needs to know about fonts.
///
/// Implementations must be free of side effects: layout may call these any
/// number of times, in any order, and expects the same answer every time.
pub trait FontMetrics {
    /// The advance width of `text` set in `font` at `size`
    fn text_width(&self, font: FontId, text: &str, size: Pt) -> Pt;

    /// Distance from the baseline to the top of the font at `size`
    fn ascent(&self, font: FontId, size: Pt) -> Pt;

    /// Distance from the baseline to the bottom of the font at `size`.
    /// Usually negative.
    fn descent(&self, font: FontId, size: Pt) -> Pt;
}

/// Metrics for an imaginary font where every glyph has the same advance,
/// regardless of font size. Useful for previews and for reasoning about
/// layout without loading real font data.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Monospace {
    pub advance: Pt,
}

impl Monospace {
    pub fn new<P: Into<Pt>>(advance: P) -> Monospace {
        Monospace {
            advance: advance.into(),
        }
    }
}

impl FontMetrics for Monospace {
    fn text_width(&self, _font: FontId, text: &str, _size: Pt) -> Pt {
        self.advance * text.chars().count() as f32
    }

    fn ascent(&self, _font: FontId, size: Pt) -> Pt {
        size * 0.8
    }

    fn descent(&self, _font: FontId, size: Pt) -> Pt {
        size * -0.2
    }
}

/// A parsed TrueType / OpenType font. Fonts are embedded in their entirety in
/// the generated PDF, but only the glyphs that were actually drawn get width
/// and ToUnicode entries.
pub struct Font {
    pub face: OwnedFace,
    /// glyph id -> the character it was drawn for
    used: BTreeMap<u16, char>,
}

impl Font {
    /// Load a font from raw bytes, returning an error if the font could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, PDFError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(Font {
            face,
            used: BTreeMap::new(),
        })
    }

    fn scaling(&self, size: Pt) -> Pt {
        size / self.face.as_face_ref().units_per_em() as f32
    }

    /// Calculate the ascent for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().ascender() as f32
    }

    /// Calculate the descent for the given font size. Usually negative.
    pub fn descent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().descender() as f32
    }

    /// The advance width of a string of text. Characters missing from the font
    /// are measured as the glyph that will be drawn in their place.
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let scaling = self.scaling(size);
        text.chars()
            .map(|ch| {
                scaling
                    * self
                        .face
                        .as_face_ref()
                        .glyph_hor_advance(GlyphId(self.glyph_or_fallback(ch)))
                        .unwrap_or_default() as f32
            })
            .sum()
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    /// The glyph drawn for `ch`: its own glyph, else the replacement
    /// character, else `?`, else `.notdef`
    pub fn glyph_or_fallback(&self, ch: char) -> u16 {
        self.glyph_id(ch)
            .or_else(|| self.glyph_id('\u{FFFD}'))
            .or_else(|| self.glyph_id('?'))
            .unwrap_or(0)
    }

    /// Record that `text` was drawn with this font, so that its glyphs get
    /// widths and ToUnicode entries when the font is embedded
    pub(crate) fn mark_used(&mut self, text: &str) {
        for ch in text.chars() {
            let gid = self.glyph_or_fallback(ch);
            self.used.entry(gid).or_insert(ch);
        }
    }

    /// Glyph ids for `text`, encoded for an Identity-H content stream
    pub(crate) fn encode(&self, text: &str) -> Vec<u8> {
        text.chars()
            .flat_map(|ch| self.glyph_or_fallback(ch).to_be_bytes())
            .collect()
    }

    fn base_font_name(&self, index: usize) -> String {
        let postscript = self
            .face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| {
                name.name_id == owned_ttf_parser::name_id::POST_SCRIPT_NAME && name.is_unicode()
            })
            .and_then(|name| name.to_string());
        match postscript {
            Some(name) => name.replace(' ', ""),
            None => format!("F{index}"),
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, index: usize, writer: &mut Pdf) {
        let face = self.face.as_face_ref();
        let scale = 1000.0 / face.units_per_em() as f32;
        let base_font = self.base_font_name(index);

        let font_ref = refs.gen(RefType::Font(index));
        let cid_ref = refs.gen(RefType::CidFont(index));
        let descriptor_ref = refs.gen(RefType::FontDescriptor(index));
        let data_ref = refs.gen(RefType::FontData(index));
        let to_unicode_ref = refs.gen(RefType::ToUnicode(index));

        writer
            .type0_font(font_ref)
            .base_font(Name(base_font.as_bytes()))
            .encoding_predefined(Name(b"Identity-H"))
            .descendant_font(cid_ref)
            .to_unicode(to_unicode_ref);

        let mut cid_font = writer.cid_font(cid_ref);
        cid_font.subtype(CidFontType::Type2);
        cid_font.base_font(Name(base_font.as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(descriptor_ref);
        cid_font.default_width(0.0);

        // consecutive glyph ids share a single widths entry
        let mut widths = cid_font.widths();
        let mut run_start: Option<u16> = None;
        let mut run: Vec<f32> = Vec::new();
        for &gid in self.used.keys() {
            let width = face.glyph_hor_advance(GlyphId(gid)).unwrap_or_default() as f32 * scale;
            match run_start {
                Some(start) if start as usize + run.len() == gid as usize => run.push(width),
                Some(start) => {
                    widths.consecutive(start, run.drain(..));
                    run_start = Some(gid);
                    run.push(width);
                }
                None => {
                    run_start = Some(gid);
                    run.push(width);
                }
            }
        }
        if let Some(start) = run_start {
            widths.consecutive(start, run.drain(..));
        }
        widths.finish();
        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));
        cid_font.finish();

        let bbox = face.global_bounding_box();
        let mut flags = FontFlags::SYMBOLIC;
        if face.is_monospaced() {
            flags.insert(FontFlags::FIXED_PITCH);
        }
        if face.is_italic() {
            flags.insert(FontFlags::ITALIC);
        }
        writer
            .font_descriptor(descriptor_ref)
            .name(Name(base_font.as_bytes()))
            .flags(flags)
            .bbox(pdf_writer::Rect {
                x1: bbox.x_min as f32 * scale,
                y1: bbox.y_min as f32 * scale,
                x2: bbox.x_max as f32 * scale,
                y2: bbox.y_max as f32 * scale,
            })
            .italic_angle(0.0)
            .ascent(face.ascender() as f32 * scale)
            .descent(face.descender() as f32 * scale)
            .cap_height(
                face.capital_height()
                    .map(|h| h as f32 * scale)
                    .unwrap_or(face.ascender() as f32 * scale),
            )
            .stem_v(80.0)
            .font_file2(data_ref);

        let level = CompressionLevel::DefaultLevel as u8;
        let data = compress_to_vec_zlib(self.face.as_slice(), level);
        writer
            .stream(data_ref, &data)
            .filter(Filter::FlateDecode)
            .pair(Name(b"Length1"), self.face.as_slice().len() as i32);

        let cmap = compress_to_vec_zlib(self.to_unicode_cmap().as_bytes(), level);
        writer
            .stream(to_unicode_ref, &cmap)
            .filter(Filter::FlateDecode);
    }

    fn to_unicode_cmap(&self) -> String {
        let mut cmap = String::from(
            "/CIDInit /ProcSet findresource begin\n\
             12 dict begin\n\
             begincmap\n\
             /CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
             /CMapName /Adobe-Identity-UCS def\n\
             /CMapType 2 def\n\
             1 begincodespacerange\n\
             <0000> <FFFF>\n\
             endcodespacerange\n",
        );

        // bfchar sections hold at most 100 entries each
        let used: Vec<(u16, char)> = self.used.iter().map(|(&gid, &ch)| (gid, ch)).collect();
        for chunk in used.chunks(100) {
            cmap.push_str(&format!("{} beginbfchar\n", chunk.len()));
            for (gid, ch) in chunk {
                let mut utf16 = [0u16; 2];
                let units: String = ch
                    .encode_utf16(&mut utf16)
                    .iter()
                    .map(|unit| format!("{unit:04x}"))
                    .collect();
                cmap.push_str(&format!("<{gid:04x}> <{units}>\n"));
            }
            cmap.push_str("endbfchar\n");
        }

        cmap.push_str("endcmap\nCMapName currentdict /CMap defineresource pop\nend\nend\n");
        cmap
    }
}
