//! Shared text formatting types for presentation content.

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Left-aligned (the PresentationML default, no algn attribute emitted)
    #[default]
    Left,
    /// Centered (algn="ctr")
    Center,
}

/// Text formatting options for a paragraph of text.
///
/// All fields are optional; unset fields fall back to the theme defaults.
#[derive(Debug, Clone, Default)]
pub struct TextFormat {
    /// Font family name (e.g., "Calibri")
    pub font: Option<String>,

    /// Font size in points
    pub size: Option<f64>,

    /// Bold text
    pub bold: Option<bool>,

    /// Font color as hex RGB (e.g., "1DB954")
    pub color: Option<String>,

    /// Paragraph alignment
    pub align: Alignment,

    /// Space before the paragraph, in points
    pub space_before: Option<f64>,
}

impl TextFormat {
    /// Create a new format with all fields unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set font size in points.
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    /// Builder method: set bold.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Builder method: set font color (hex RGB, no leading '#').
    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    /// Builder method: set paragraph alignment.
    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Builder method: set space before the paragraph, in points.
    pub fn with_space_before(mut self, points: f64) -> Self {
        self.space_before = Some(points);
        self
    }

    /// Builder method: set font family.
    pub fn with_font(mut self, font: &str) -> Self {
        self.font = Some(font.to_string());
        self
    }
}
