/// Slide model and XML generation.
use crate::common::xml::escape_xml;
use crate::error::{Error, Result};
use std::fmt::Write as FmtWrite;

use super::background::SlideBackground;
use super::shape::MutableShape;

/// A mutable slide in a presentation.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID (unique identifier)
    pub(crate) slide_id: u32,
    /// Shapes on the slide
    pub(crate) shapes: Vec<MutableShape>,
    /// Speaker notes for the slide
    pub(crate) notes: Option<String>,
    /// Slide background
    pub(crate) background: Option<SlideBackground>,
}

impl MutableSlide {
    /// Create a new empty slide.
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            shapes: Vec::new(),
            notes: None,
            background: None,
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Set speaker notes for the slide.
    pub fn set_notes(&mut self, notes: &str) {
        self.notes = Some(notes.to_string());
    }

    /// Get the speaker notes for the slide.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Check if the slide has speaker notes.
    pub fn has_notes(&self) -> bool {
        self.notes.is_some()
    }

    /// Set a background for the slide.
    pub fn set_background(&mut self, background: SlideBackground) {
        self.background = Some(background);
    }

    /// Add an empty text box to the slide, returning it for populating.
    ///
    /// Position and size are in EMUs.
    pub fn add_text_box(&mut self, x: i64, y: i64, width: i64, height: i64) -> &mut MutableShape {
        // IDs: 1=group shape, 2+=user shapes
        let shape_id = (self.shapes.len() + 2) as u32;
        let shape = MutableShape::new_text_box(shape_id, x, y, width, height);
        self.shapes.push(shape);
        let idx = self.shapes.len() - 1;
        &mut self.shapes[idx]
    }

    /// Get the number of shapes on the slide.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Generate slide XML content.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);

        xml.push_str(
            r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        xml.push_str("<p:cSld>");

        // Background must come before the shape tree
        if let Some(ref background) = self.background {
            xml.push_str(&background.to_xml()?);
        }

        xml.push_str("<p:spTree>");
        Self::write_group_shape_properties(&mut xml);

        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }

    /// Generate notes slide XML content.
    ///
    /// Returns `None` if the slide has no speaker notes. Newlines in the
    /// notes text become separate paragraphs in the notes placeholder.
    pub(crate) fn notes_xml(&self) -> Option<Result<String>> {
        let notes_text = self.notes.as_ref()?;

        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);

        xml.push_str(
            r#"<p:notes xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");
        Self::write_group_shape_properties(&mut xml);

        // Notes body placeholder
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        xml.push_str(r#"<p:cNvPr id="2" name="Notes Placeholder"/>"#);
        xml.push_str("<p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr>");
        xml.push_str("<p:nvPr><p:ph type=\"body\" idx=\"1\"/></p:nvPr>");
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr/>");

        xml.push_str("<p:txBody>");
        xml.push_str("<a:bodyPr/>");
        xml.push_str("<a:lstStyle/>");
        for line in notes_text.split('\n') {
            xml.push_str("<a:p>");
            if !line.is_empty() {
                xml.push_str("<a:r>");
                xml.push_str("<a:rPr lang=\"en-US\" dirty=\"0\"/>");
                if let Err(e) = write!(xml, "<a:t>{}</a:t>", escape_xml(line)) {
                    return Some(Err(Error::Xml(e.to_string())));
                }
                xml.push_str("</a:r>");
            }
            xml.push_str("</a:p>");
        }
        xml.push_str("</p:txBody>");
        xml.push_str("</p:sp>");

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:notes>");

        Some(Ok(xml))
    }

    /// Write the required group shape properties opening the shape tree.
    fn write_group_shape_properties(xml: &mut String) {
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pptx::format::TextFormat;

    #[test]
    fn test_background_precedes_shape_tree() {
        let mut slide = MutableSlide::new(256);
        slide.set_background(SlideBackground::solid("191919"));
        slide
            .add_text_box(0, 0, 100, 100)
            .add_paragraph("Hi", TextFormat::new());

        let xml = slide.to_xml().unwrap();
        let bg_pos = xml.find("<p:bg>").unwrap();
        let tree_pos = xml.find("<p:spTree>").unwrap();
        assert!(bg_pos < tree_pos);
    }

    #[test]
    fn test_shape_ids_follow_group_shape() {
        let mut slide = MutableSlide::new(256);
        slide.add_text_box(0, 0, 100, 100);
        slide.add_text_box(0, 0, 100, 100);

        let xml = slide.to_xml().unwrap();
        assert!(xml.contains(r#"<p:cNvPr id="2" name="TextBox 2"/>"#));
        assert!(xml.contains(r#"<p:cNvPr id="3" name="TextBox 3"/>"#));
    }

    #[test]
    fn test_notes_xml() {
        let mut slide = MutableSlide::new(256);
        slide.set_notes("Welcome everyone.\nSecond paragraph.");

        let xml = slide.notes_xml().unwrap().unwrap();
        assert!(xml.contains("<p:notes"));
        assert!(xml.contains(r#"<p:ph type="body" idx="1"/>"#));
        assert!(xml.contains("<a:t>Welcome everyone.</a:t>"));
        assert!(xml.contains("<a:t>Second paragraph.</a:t>"));
    }

    #[test]
    fn test_no_notes_no_xml() {
        let slide = MutableSlide::new(256);
        assert!(slide.notes_xml().is_none());
    }
}
