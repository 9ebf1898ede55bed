//! Talk deck construction.
//!
//! Four slide archetypes cover the whole deck: a title slide, content slides
//! with a heading and bullets, section break slides, and a closing slide.
//! Every slide gets the dark background and the brand palette below.

pub mod content;

use crate::common::unit::inches_to_emu;
use crate::pptx::{Alignment, Package, SlideBackground, TextFormat};

/// Background color
pub const BLACK: &str = "191919";
/// Bullet text color
pub const WHITE: &str = "FFFFFF";
/// Accent color for headings (Spotify green)
pub const GREEN: &str = "1DB954";
/// Secondary text color
pub const GRAY: &str = "B3B3B3";

/// Builds a presentation out of the four slide archetypes.
pub struct DeckBuilder {
    package: Package,
}

impl Default for DeckBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckBuilder {
    /// Create a builder with an empty 16:9 presentation (10" x 5.625").
    pub fn new() -> Self {
        let mut package = Package::new();
        package
            .presentation_mut()
            .set_slide_size(inches_to_emu(10.0), inches_to_emu(5.625));
        Self { package }
    }

    /// Finish building and return the package.
    pub fn finish(self) -> Package {
        self.package
    }

    /// Add the opening title slide.
    ///
    /// Large centered title with a centered subtitle below it. The subtitle
    /// may contain newlines for multi-line attribution.
    pub fn title_slide(&mut self, title: &str, subtitle: &str, notes: &str) -> &mut Self {
        let slide = self.package.presentation_mut().add_slide();
        slide.set_background(SlideBackground::solid(BLACK));

        slide
            .add_text_box(
                inches_to_emu(1.0),
                inches_to_emu(2.0),
                inches_to_emu(8.0),
                inches_to_emu(1.5),
            )
            .add_paragraph(
                title,
                TextFormat::new()
                    .with_size(40.0)
                    .with_bold(true)
                    .with_color(GREEN)
                    .with_align(Alignment::Center),
            );

        slide
            .add_text_box(
                inches_to_emu(1.0),
                inches_to_emu(3.6),
                inches_to_emu(8.0),
                inches_to_emu(1.5),
            )
            .add_paragraph(
                subtitle,
                TextFormat::new()
                    .with_size(22.0)
                    .with_color(GRAY)
                    .with_align(Alignment::Center),
            );

        if !notes.is_empty() {
            slide.set_notes(notes);
        }

        self
    }

    /// Add a content slide: left-aligned heading with bullet paragraphs.
    pub fn content_slide(&mut self, title: &str, bullets: &[&str], notes: &str) -> &mut Self {
        let slide = self.package.presentation_mut().add_slide();
        slide.set_background(SlideBackground::solid(BLACK));

        slide
            .add_text_box(
                inches_to_emu(0.8),
                inches_to_emu(0.5),
                inches_to_emu(8.4),
                inches_to_emu(1.0),
            )
            .add_paragraph(
                title,
                TextFormat::new()
                    .with_size(32.0)
                    .with_bold(true)
                    .with_color(GREEN),
            );

        let body = slide.add_text_box(
            inches_to_emu(0.8),
            inches_to_emu(1.7),
            inches_to_emu(8.4),
            inches_to_emu(5.0),
        );
        for (i, bullet) in bullets.iter().enumerate() {
            let mut format = TextFormat::new().with_size(22.0).with_color(WHITE);
            if i > 0 {
                format = format.with_space_before(12.0);
            }
            body.add_paragraph(bullet, format);
        }

        if !notes.is_empty() {
            slide.set_notes(notes);
        }

        self
    }

    /// Add a section break slide: centered heading, optional subtitle.
    pub fn section_slide(&mut self, title: &str, subtitle: &str, notes: &str) -> &mut Self {
        let slide = self.package.presentation_mut().add_slide();
        slide.set_background(SlideBackground::solid(BLACK));

        slide
            .add_text_box(
                inches_to_emu(1.0),
                inches_to_emu(2.5),
                inches_to_emu(8.0),
                inches_to_emu(1.5),
            )
            .add_paragraph(
                title,
                TextFormat::new()
                    .with_size(38.0)
                    .with_bold(true)
                    .with_color(GREEN)
                    .with_align(Alignment::Center),
            );

        if !subtitle.is_empty() {
            slide
                .add_text_box(
                    inches_to_emu(1.0),
                    inches_to_emu(3.8),
                    inches_to_emu(8.0),
                    inches_to_emu(1.0),
                )
                .add_paragraph(
                    subtitle,
                    TextFormat::new()
                        .with_size(22.0)
                        .with_color(GRAY)
                        .with_align(Alignment::Center),
                );
        }

        if !notes.is_empty() {
            slide.set_notes(notes);
        }

        self
    }

    /// Add the closing slide: centered heading with centered contact lines.
    ///
    /// Empty strings in `lines` produce blank spacer paragraphs.
    pub fn closing_slide(&mut self, title: &str, lines: &[&str], notes: &str) -> &mut Self {
        let slide = self.package.presentation_mut().add_slide();
        slide.set_background(SlideBackground::solid(BLACK));

        slide
            .add_text_box(
                inches_to_emu(1.0),
                inches_to_emu(1.5),
                inches_to_emu(8.0),
                inches_to_emu(1.2),
            )
            .add_paragraph(
                title,
                TextFormat::new()
                    .with_size(38.0)
                    .with_bold(true)
                    .with_color(GREEN)
                    .with_align(Alignment::Center),
            );

        let body = slide.add_text_box(
            inches_to_emu(1.0),
            inches_to_emu(3.0),
            inches_to_emu(8.0),
            inches_to_emu(3.5),
        );
        for (i, line) in lines.iter().enumerate() {
            let mut format = TextFormat::new()
                .with_size(20.0)
                .with_color(GRAY)
                .with_align(Alignment::Center);
            if i > 0 {
                format = format.with_space_before(8.0);
            }
            body.add_paragraph(line, format);
        }

        if !notes.is_empty() {
            slide.set_notes(notes);
        }

        self
    }
}
