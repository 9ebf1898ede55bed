//! Presentation package assembly.
//!
//! Turns a [`MutablePresentation`] into a complete OPC package: the
//! presentation part, one part per slide and notes slide, the static master
//! and theme parts, document properties, and all the relationships wiring
//! them together.

use crate::error::Result;
use crate::opc::constants::{content_type as ct, relationship_type as rt};
use crate::opc::error::OpcError;
use crate::opc::{OpcPackage, PackURI, PackageWriter, Part};
use std::path::Path;

use super::pres::MutablePresentation;
use super::properties::DocumentProperties;
use super::template;

/// A presentation package ready to be saved as a .pptx file.
pub struct Package {
    pres: MutablePresentation,
    properties: DocumentProperties,
}

impl Default for Package {
    fn default() -> Self {
        Self::new()
    }
}

impl Package {
    /// Create a new empty presentation package.
    pub fn new() -> Self {
        Self {
            pres: MutablePresentation::new(),
            properties: DocumentProperties::new(),
        }
    }

    /// Get the presentation.
    pub fn presentation(&self) -> &MutablePresentation {
        &self.pres
    }

    /// Get the presentation for modification.
    pub fn presentation_mut(&mut self) -> &mut MutablePresentation {
        &mut self.pres
    }

    /// Get the document properties.
    pub fn properties(&self) -> &DocumentProperties {
        &self.properties
    }

    /// Replace the document properties.
    pub fn set_properties(&mut self, properties: DocumentProperties) {
        self.properties = properties;
    }

    /// Save the presentation to a .pptx file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let pkg = self.build_opc()?;
        PackageWriter::write(path, &pkg)?;
        Ok(())
    }

    /// Serialize the presentation to .pptx bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let pkg = self.build_opc()?;
        Ok(PackageWriter::to_bytes(&pkg)?)
    }

    /// Assemble the OPC package for this presentation.
    fn build_opc(&self) -> Result<OpcPackage> {
        let mut pkg = OpcPackage::new();

        let pres_uri = uri("/ppt/presentation.xml")?;
        let master_uri = uri("/ppt/slideMasters/slideMaster1.xml")?;
        let layout_uri = uri("/ppt/slideLayouts/slideLayout1.xml")?;
        let notes_master_uri = uri("/ppt/notesMasters/notesMaster1.xml")?;
        let theme_uri = uri("/ppt/theme/theme1.xml")?;
        let pres_props_uri = uri("/ppt/presProps.xml")?;
        let view_props_uri = uri("/ppt/viewProps.xml")?;
        let table_styles_uri = uri("/ppt/tableStyles.xml")?;
        let core_uri = uri("/docProps/core.xml")?;
        let app_uri = uri("/docProps/app.xml")?;

        // Static parts shared by every generated deck
        pkg.add_part(Part::new(theme_uri.clone(), ct::OFC_THEME, template::THEME_XML))?;
        pkg.add_part(Part::new(
            master_uri.clone(),
            ct::PML_SLIDE_MASTER,
            template::SLIDE_MASTER_XML,
        ))?;
        pkg.add_part(Part::new(
            layout_uri.clone(),
            ct::PML_SLIDE_LAYOUT,
            template::SLIDE_LAYOUT_XML,
        ))?;
        pkg.add_part(Part::new(
            notes_master_uri.clone(),
            ct::PML_NOTES_MASTER,
            template::NOTES_MASTER_XML,
        ))?;
        pkg.add_part(Part::new(
            pres_props_uri.clone(),
            ct::PML_PRES_PROPS,
            template::PRES_PROPS_XML,
        ))?;
        pkg.add_part(Part::new(
            view_props_uri.clone(),
            ct::PML_VIEW_PROPS,
            template::VIEW_PROPS_XML,
        ))?;
        pkg.add_part(Part::new(
            table_styles_uri.clone(),
            ct::PML_TABLE_STYLES,
            template::TABLE_STYLES_XML,
        ))?;

        // Master references its layout as rId1 (the sldLayoutIdLst entry),
        // then the theme
        {
            let master = pkg.part_mut(&master_uri)?;
            master.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
            master.relate_to(&theme_uri, rt::THEME);
        }
        pkg.part_mut(&layout_uri)?
            .relate_to(&master_uri, rt::SLIDE_MASTER);
        pkg.part_mut(&notes_master_uri)?
            .relate_to(&theme_uri, rt::THEME);

        // Slide and notes slide parts
        for (idx, slide) in self.pres.slides().iter().enumerate() {
            let n = idx + 1;
            let slide_uri = uri(&format!("/ppt/slides/slide{}.xml", n))?;
            pkg.add_part(Part::new(slide_uri.clone(), ct::PML_SLIDE, slide.to_xml()?))?;

            pkg.part_mut(&slide_uri)?
                .relate_to(&layout_uri, rt::SLIDE_LAYOUT);

            if let Some(notes_xml) = slide.notes_xml() {
                let notes_uri = uri(&format!("/ppt/notesSlides/notesSlide{}.xml", n))?;
                pkg.add_part(Part::new(notes_uri.clone(), ct::PML_NOTES_SLIDE, notes_xml?))?;

                pkg.part_mut(&slide_uri)?
                    .relate_to(&notes_uri, rt::NOTES_SLIDE);

                let notes = pkg.part_mut(&notes_uri)?;
                notes.relate_to(&notes_master_uri, rt::NOTES_MASTER);
                notes.relate_to(&slide_uri, rt::SLIDE);
            }
        }

        // Presentation part: register relationships first, then generate the
        // XML that references them by rId
        pkg.add_part(Part::new(
            pres_uri.clone(),
            ct::PML_PRESENTATION_MAIN,
            Vec::new(),
        ))?;
        let (master_rid, notes_master_rid, slide_rids) = {
            let pres_part = pkg.part_mut(&pres_uri)?;
            let master_rid = pres_part.relate_to(&master_uri, rt::SLIDE_MASTER);
            let notes_master_rid = pres_part.relate_to(&notes_master_uri, rt::NOTES_MASTER);

            let mut slide_rids = Vec::with_capacity(self.pres.slide_count());
            for n in 1..=self.pres.slide_count() {
                let slide_uri = uri(&format!("/ppt/slides/slide{}.xml", n))?;
                slide_rids.push(pres_part.relate_to(&slide_uri, rt::SLIDE));
            }

            pres_part.relate_to(&pres_props_uri, rt::PRES_PROPS);
            pres_part.relate_to(&view_props_uri, rt::VIEW_PROPS);
            pres_part.relate_to(&theme_uri, rt::THEME);
            pres_part.relate_to(&table_styles_uri, rt::TABLE_STYLES);

            (master_rid, notes_master_rid, slide_rids)
        };
        let pres_xml = self.pres.to_xml(&master_rid, &notes_master_rid, &slide_rids)?;
        pkg.part_mut(&pres_uri)?.set_blob(pres_xml);

        // Document properties
        pkg.add_part(Part::new(
            core_uri.clone(),
            ct::OPC_CORE_PROPERTIES,
            self.properties.to_core_xml(),
        ))?;
        pkg.add_part(Part::new(
            app_uri.clone(),
            ct::OFC_EXTENDED_PROPERTIES,
            self.properties.to_app_xml(self.pres.slide_count()),
        ))?;

        // Package-level relationships
        pkg.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);
        pkg.relate_to(&core_uri, rt::CORE_PROPERTIES);
        pkg.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

        Ok(pkg)
    }
}

fn uri(s: &str) -> Result<PackURI> {
    Ok(PackURI::new(s).map_err(OpcError::InvalidPackUri)?)
}
