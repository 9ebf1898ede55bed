/// Shape types for building slide content.
use crate::common::unit::pt_to_centipoints;
use crate::common::xml::escape_xml;
use crate::error::{Error, Result};
use std::fmt::Write as FmtWrite;

pub use super::format::{Alignment, TextFormat};

/// A paragraph of text within a text box.
///
/// Newlines in the text become line breaks within the paragraph, matching
/// how presentation editors treat a single block of wrapped text. Separate
/// paragraphs carry their own formatting, notably space-before for bullet
/// spacing.
#[derive(Debug, Clone)]
pub struct Paragraph {
    /// Paragraph text; embedded '\n' characters become line breaks
    pub text: String,
    /// Formatting applied to the paragraph and its runs
    pub format: TextFormat,
}

impl Paragraph {
    pub fn new(text: &str, format: TextFormat) -> Self {
        Self {
            text: text.to_string(),
            format,
        }
    }
}

/// A shape on a slide.
#[derive(Debug, Clone)]
pub struct MutableShape {
    /// Shape ID
    pub(crate) shape_id: u32,
    /// Shape type
    pub(crate) shape_type: ShapeType,
}

#[derive(Debug, Clone)]
pub(crate) enum ShapeType {
    TextBox {
        paragraphs: Vec<Paragraph>,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    },
}

impl MutableShape {
    /// Create a new empty text box shape.
    pub(crate) fn new_text_box(shape_id: u32, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::TextBox {
                paragraphs: Vec::new(),
                x,
                y,
                width,
                height,
            },
        }
    }

    /// Append a paragraph to this text box.
    pub fn add_paragraph(&mut self, text: &str, format: TextFormat) -> &mut Self {
        let ShapeType::TextBox {
            ref mut paragraphs, ..
        } = self.shape_type;
        paragraphs.push(Paragraph::new(text, format));
        self
    }

    /// Get the number of paragraphs in this text box.
    pub fn paragraph_count(&self) -> usize {
        let ShapeType::TextBox { ref paragraphs, .. } = self.shape_type;
        paragraphs.len()
    }

    /// Generate XML for this shape, appending to `xml`.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        let ShapeType::TextBox {
            ref paragraphs,
            x,
            y,
            width,
            height,
        } = self.shape_type;

        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="TextBox {}"/>"#,
            self.shape_id, self.shape_id
        )
        .map_err(|e| Error::Xml(e.to_string()))?;
        xml.push_str("<p:cNvSpPr txBox=\"1\"/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr>");
        xml.push_str("<a:xfrm>");
        write!(xml, r#"<a:off x="{}" y="{}"/>"#, x, y).map_err(|e| Error::Xml(e.to_string()))?;
        write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, width, height)
            .map_err(|e| Error::Xml(e.to_string()))?;
        xml.push_str("</a:xfrm>");
        xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
        xml.push_str("</p:spPr>");

        xml.push_str("<p:txBody>");
        xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0"/>"#);
        xml.push_str("<a:lstStyle/>");

        if paragraphs.is_empty() {
            // A txBody must contain at least one paragraph
            xml.push_str("<a:p/>");
        }

        for para in paragraphs {
            Self::write_paragraph(xml, para)?;
        }

        xml.push_str("</p:txBody>");
        xml.push_str("</p:sp>");

        Ok(())
    }

    /// Write a single `<a:p>` element.
    fn write_paragraph(xml: &mut String, para: &Paragraph) -> Result<()> {
        let format = &para.format;

        xml.push_str("<a:p>");

        // Paragraph properties: alignment and space-before
        if format.align == Alignment::Center || format.space_before.is_some() {
            xml.push_str("<a:pPr");
            if format.align == Alignment::Center {
                xml.push_str(r#" algn="ctr""#);
            }
            if let Some(points) = format.space_before {
                xml.push('>');
                write!(
                    xml,
                    r#"<a:spcBef><a:spcPts val="{}"/></a:spcBef>"#,
                    pt_to_centipoints(points)
                )
                .map_err(|e| Error::Xml(e.to_string()))?;
                xml.push_str("</a:pPr>");
            } else {
                xml.push_str("/>");
            }
        }

        // Newlines split the paragraph text into runs joined by line breaks
        let mut first = true;
        for segment in para.text.split('\n') {
            if !first {
                xml.push_str("<a:br/>");
            }
            first = false;

            if segment.is_empty() {
                continue;
            }

            xml.push_str("<a:r>");
            Self::write_run_properties(xml, format, "a:rPr")?;
            write!(xml, "<a:t>{}</a:t>", escape_xml(segment))
                .map_err(|e| Error::Xml(e.to_string()))?;
            xml.push_str("</a:r>");
        }

        // Keep sizing on empty paragraphs so blank lines occupy the right height
        if para.text.is_empty() {
            Self::write_run_properties(xml, format, "a:endParaRPr")?;
        }

        xml.push_str("</a:p>");

        Ok(())
    }

    /// Write run properties (`a:rPr` or `a:endParaRPr`) for a format.
    fn write_run_properties(xml: &mut String, format: &TextFormat, tag: &str) -> Result<()> {
        write!(xml, "<{} lang=\"en-US\" dirty=\"0\"", tag)
            .map_err(|e| Error::Xml(e.to_string()))?;

        if let Some(size) = format.size {
            write!(xml, " sz=\"{}\"", pt_to_centipoints(size))
                .map_err(|e| Error::Xml(e.to_string()))?;
        }

        if let Some(true) = format.bold {
            xml.push_str(" b=\"1\"");
        }

        if format.color.is_none() && format.font.is_none() {
            xml.push_str("/>");
            return Ok(());
        }

        xml.push('>');

        if let Some(ref color) = format.color {
            write!(
                xml,
                "<a:solidFill><a:srgbClr val=\"{}\"/></a:solidFill>",
                color
            )
            .map_err(|e| Error::Xml(e.to_string()))?;
        }

        if let Some(ref font) = format.font {
            write!(xml, "<a:latin typeface=\"{}\"/>", escape_xml(font))
                .map_err(|e| Error::Xml(e.to_string()))?;
        }

        write!(xml, "</{}>", tag).map_err(|e| Error::Xml(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(shape: &MutableShape) -> String {
        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_text_box_geometry() {
        let mut shape = MutableShape::new_text_box(3, 914400, 1828800, 7315200, 914400);
        shape.add_paragraph("Hello", TextFormat::new());

        let xml = render(&shape);
        assert!(xml.contains(r#"<a:off x="914400" y="1828800"/>"#));
        assert!(xml.contains(r#"<a:ext cx="7315200" cy="914400"/>"#));
        assert!(xml.contains("<a:t>Hello</a:t>"));
    }

    #[test]
    fn test_run_formatting() {
        let mut shape = MutableShape::new_text_box(3, 0, 0, 100, 100);
        shape.add_paragraph(
            "Styled",
            TextFormat::new().with_size(40.0).with_bold(true).with_color("1DB954"),
        );

        let xml = render(&shape);
        assert!(xml.contains(r#"sz="4000""#));
        assert!(xml.contains(r#"b="1""#));
        assert!(xml.contains(r#"<a:srgbClr val="1DB954"/>"#));
    }

    #[test]
    fn test_centered_paragraph_with_spacing() {
        let mut shape = MutableShape::new_text_box(3, 0, 0, 100, 100);
        shape.add_paragraph(
            "Centered",
            TextFormat::new()
                .with_align(Alignment::Center)
                .with_space_before(12.0),
        );

        let xml = render(&shape);
        assert!(xml.contains(r#"<a:pPr algn="ctr"><a:spcBef><a:spcPts val="1200"/></a:spcBef></a:pPr>"#));
    }

    #[test]
    fn test_newlines_become_line_breaks() {
        let mut shape = MutableShape::new_text_box(3, 0, 0, 100, 100);
        shape.add_paragraph("Line one\n\nLine three", TextFormat::new());

        let xml = render(&shape);
        let breaks = xml.matches("<a:br/>").count();
        assert_eq!(breaks, 2);
        assert!(xml.contains("<a:t>Line one</a:t>"));
        assert!(xml.contains("<a:t>Line three</a:t>"));
    }

    #[test]
    fn test_empty_paragraph_keeps_sizing() {
        let mut shape = MutableShape::new_text_box(3, 0, 0, 100, 100);
        shape.add_paragraph("", TextFormat::new().with_size(20.0));

        let xml = render(&shape);
        assert!(xml.contains(r#"<a:endParaRPr lang="en-US" dirty="0" sz="2000"/>"#));
        assert!(!xml.contains("<a:r>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut shape = MutableShape::new_text_box(3, 0, 0, 100, 100);
        shape.add_paragraph("Ads & APIs <beta>", TextFormat::new());

        let xml = render(&shape);
        assert!(xml.contains("<a:t>Ads &amp; APIs &lt;beta&gt;</a:t>"));
    }
}
