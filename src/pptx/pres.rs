/// Presentation model and presentation.xml generation.
use crate::common::unit::inches_to_emu;
use crate::error::{Error, Result};
use std::fmt::Write as FmtWrite;

use super::slide::MutableSlide;

/// First slide ID in the sldIdLst; must be >= 256 per PresentationML
const FIRST_SLIDE_ID: u32 = 256;

/// Slide master ID; must be >= 2147483648
const SLIDE_MASTER_ID: u32 = 2_147_483_648;

/// A mutable presentation being assembled slide by slide.
#[derive(Debug)]
pub struct MutablePresentation {
    /// Slides in presentation order
    slides: Vec<MutableSlide>,
    /// Slide width in EMUs
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}

impl MutablePresentation {
    /// Create a new empty presentation with the traditional 4:3 slide size
    /// (10" x 7.5").
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: inches_to_emu(10.0),
            slide_height: inches_to_emu(7.5),
        }
    }

    /// Set the slide size in EMUs.
    pub fn set_slide_size(&mut self, width: i64, height: i64) {
        self.slide_width = width;
        self.slide_height = height;
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Add a new empty slide, returning it for populating.
    pub fn add_slide(&mut self) -> &mut MutableSlide {
        let slide_id = FIRST_SLIDE_ID + self.slides.len() as u32;
        self.slides.push(MutableSlide::new(slide_id));
        let idx = self.slides.len() - 1;
        &mut self.slides[idx]
    }

    /// Get the slides in presentation order.
    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Generate the presentation.xml content.
    ///
    /// The caller supplies the rIds already registered in the presentation
    /// part's relationships: the slide master, the notes master, and one rId
    /// per slide in presentation order.
    pub(crate) fn to_xml(
        &self,
        master_rid: &str,
        notes_master_rid: &str,
        slide_rids: &[String],
    ) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);

        xml.push_str(
            r#"<p:presentation xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        xml.push_str("<p:sldMasterIdLst>");
        write!(
            xml,
            r#"<p:sldMasterId id="{}" r:id="{}"/>"#,
            SLIDE_MASTER_ID, master_rid
        )
        .map_err(|e| Error::Xml(e.to_string()))?;
        xml.push_str("</p:sldMasterIdLst>");

        xml.push_str("<p:notesMasterIdLst>");
        write!(xml, r#"<p:notesMasterId r:id="{}"/>"#, notes_master_rid)
            .map_err(|e| Error::Xml(e.to_string()))?;
        xml.push_str("</p:notesMasterIdLst>");

        xml.push_str("<p:sldIdLst>");
        for (slide, r_id) in self.slides.iter().zip(slide_rids) {
            write!(xml, r#"<p:sldId id="{}" r:id="{}"/>"#, slide.slide_id(), r_id)
                .map_err(|e| Error::Xml(e.to_string()))?;
        }
        xml.push_str("</p:sldIdLst>");

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )
        .map_err(|e| Error::Xml(e.to_string()))?;

        // Notes pages are portrait letter
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);

        xml.push_str("</p:presentation>");

        Ok(xml)
    }
}
