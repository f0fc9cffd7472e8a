//! Text style inheritance.
//!
//! Styles are layered page → table → row → cell. Each layer is a partial
//! [`TextStyle`] where `None` means "inherit", and the chain is collapsed into
//! a concrete [`ResolvedStyle`] with [`TextStyle::resolve`] before layout
//! starts, so nothing downstream has to walk the chain again.

use crate::colour::Colour;
use crate::font::FontId;
use crate::render::TextPaint;
use crate::units::Pt;
use serde::{Deserialize, Serialize};

/// Horizontal placement of a line (or an image) within its available width
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    #[default]
    Start,
    Center,
    End,
}

impl Alignment {
    /// How far from the start edge something `width` wide is placed within
    /// `available`
    pub fn offset(self, available: Pt, width: Pt) -> Pt {
        match self {
            Alignment::Start => Pt::ZERO,
            Alignment::Center => (available - width) / 2.0,
            Alignment::End => available - width,
        }
    }
}

/// A partially specified style. Unset attributes are inherited from the
/// enclosing layer.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub font: Option<FontId>,
    pub size: Option<Pt>,
    /// Extra space between lines, on top of the font size
    pub leading: Option<Pt>,
    pub colour: Option<Colour>,
    pub alignment: Option<Alignment>,
    pub character_spacing: Option<Pt>,
}

impl TextStyle {
    pub fn with_font(mut self, font: FontId) -> Self {
        self.font = Some(font);
        self
    }

    pub fn with_size<P: Into<Pt>>(mut self, size: P) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_leading<P: Into<Pt>>(mut self, leading: P) -> Self {
        self.leading = Some(leading.into());
        self
    }

    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = Some(colour);
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn with_character_spacing<P: Into<Pt>>(mut self, spacing: P) -> Self {
        self.character_spacing = Some(spacing.into());
        self
    }

    /// Fill every attribute left unset here from `parent`
    pub fn or(self, parent: &TextStyle) -> TextStyle {
        TextStyle {
            font: self.font.or(parent.font),
            size: self.size.or(parent.size),
            leading: self.leading.or(parent.leading),
            colour: self.colour.or(parent.colour),
            alignment: self.alignment.or(parent.alignment),
            character_spacing: self.character_spacing.or(parent.character_spacing),
        }
    }

    /// Apply this layer's overrides on top of a fully resolved base
    pub fn resolve(&self, base: &ResolvedStyle) -> ResolvedStyle {
        ResolvedStyle {
            font: self.font.unwrap_or(base.font),
            size: self.size.unwrap_or(base.size),
            leading: self.leading.unwrap_or(base.leading),
            colour: self.colour.unwrap_or(base.colour),
            alignment: self.alignment.unwrap_or(base.alignment),
            character_spacing: self.character_spacing.unwrap_or(base.character_spacing),
        }
    }
}

/// A style with every attribute known
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedStyle {
    pub font: FontId,
    pub size: Pt,
    pub leading: Pt,
    pub colour: Colour,
    pub alignment: Alignment,
    pub character_spacing: Pt,
}

impl ResolvedStyle {
    /// Black, start-aligned text with no leading or extra spacing
    pub fn new<P: Into<Pt>>(font: FontId, size: P) -> ResolvedStyle {
        ResolvedStyle {
            font,
            size: size.into(),
            leading: Pt::ZERO,
            colour: Colour::default(),
            alignment: Alignment::Start,
            character_spacing: Pt::ZERO,
        }
    }

    /// Baseline-to-baseline distance
    pub fn pitch(&self) -> Pt {
        self.size + self.leading
    }

    pub fn paint(&self) -> TextPaint {
        TextPaint {
            font: self.font,
            size: self.size,
            colour: self.colour,
            character_spacing: self.character_spacing,
            rotation: 0.0,
        }
    }
}
