//! Slide background support.

use crate::error::{Error, Result};
use std::fmt::Write as FmtWrite;

/// A slide background fill.
///
/// Emitted as a `<p:bg>` element, which must precede the shape tree in the
/// slide XML.
#[derive(Debug, Clone)]
pub struct SlideBackground {
    fill: BackgroundFill,
}

#[derive(Debug, Clone)]
enum BackgroundFill {
    /// Solid color fill (hex RGB)
    Solid(String),
}

impl SlideBackground {
    /// Create a solid color background.
    ///
    /// `color` is a hex RGB string without a leading '#', e.g. "191919".
    pub fn solid(color: &str) -> Self {
        Self {
            fill: BackgroundFill::Solid(color.to_string()),
        }
    }

    /// Generate the `<p:bg>` XML for this background.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(128);

        match &self.fill {
            BackgroundFill::Solid(color) => {
                xml.push_str("<p:bg><p:bgPr>");
                write!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color)
                    .map_err(|e| Error::Xml(e.to_string()))?;
                xml.push_str("<a:effectLst/>");
                xml.push_str("</p:bgPr></p:bg>");
            },
        }

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_background_xml() {
        let bg = SlideBackground::solid("191919");
        let xml = bg.to_xml().unwrap();
        assert!(xml.starts_with("<p:bg>"));
        assert!(xml.contains(r#"<a:srgbClr val="191919"/>"#));
    }
}
