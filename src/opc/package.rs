/// OPC package, the collection of parts making up an Office document.
///
/// The package owns the parts and the package-level relationships (those in
/// "/_rels/.rels"). It is assembled in memory and handed to the package
/// writer for serialization.
use crate::opc::error::{OpcError, Result};
use crate::opc::packuri::PackURI;
use crate::opc::part::Part;
use crate::opc::rel::Relationships;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct OpcPackage {
    /// Parts keyed by partname
    parts: HashMap<PackURI, Part>,

    /// Package-level relationships
    rels: Relationships,
}

impl OpcPackage {
    /// Create a new empty package.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part to the package.
    ///
    /// Returns an error if a part with the same partname already exists.
    pub fn add_part(&mut self, part: Part) -> Result<()> {
        if self.parts.contains_key(part.partname()) {
            return Err(OpcError::DuplicatePart(part.partname().to_string()));
        }
        self.parts.insert(part.partname().clone(), part);
        Ok(())
    }

    /// Get a part by its partname.
    pub fn part(&self, partname: &PackURI) -> Result<&Part> {
        self.parts
            .get(partname)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// Get a mutable reference to a part by its partname.
    pub fn part_mut(&mut self, partname: &PackURI) -> Result<&mut Part> {
        self.parts
            .get_mut(partname)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// Add a package-level relationship to the target part, returning its
    /// rId. Package-level targets are expressed relative to the package
    /// root, i.e. without a leading slash.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        self.rels.get_or_add(reltype, target.membername())
    }

    /// Get the package-level relationships.
    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Get the parts in deterministic order, sorted by partname.
    ///
    /// HashMap iteration order varies between runs; sorting here keeps the
    /// serialized package byte-stable for identical input.
    pub fn iter_parts(&self) -> Vec<&Part> {
        let mut parts: Vec<&Part> = self.parts.values().collect();
        parts.sort_by(|a, b| a.partname().as_str().cmp(b.partname().as_str()));
        parts
    }

    /// Get the number of parts in the package.
    #[inline]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Check whether the package contains no parts.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opc::constants::{content_type, relationship_type};

    fn pres_part() -> Part {
        let partname = PackURI::new("/ppt/presentation.xml").unwrap();
        Part::new(
            partname,
            content_type::PML_PRESENTATION_MAIN,
            "<p:presentation/>".as_bytes(),
        )
    }

    #[test]
    fn test_add_and_get_part() {
        let mut pkg = OpcPackage::new();
        pkg.add_part(pres_part()).unwrap();

        let partname = PackURI::new("/ppt/presentation.xml").unwrap();
        let part = pkg.part(&partname).unwrap();
        assert_eq!(part.content_type(), content_type::PML_PRESENTATION_MAIN);
    }

    #[test]
    fn test_duplicate_part_rejected() {
        let mut pkg = OpcPackage::new();
        pkg.add_part(pres_part()).unwrap();
        assert!(matches!(
            pkg.add_part(pres_part()),
            Err(OpcError::DuplicatePart(_))
        ));
    }

    #[test]
    fn test_missing_part() {
        let pkg = OpcPackage::new();
        let partname = PackURI::new("/ppt/missing.xml").unwrap();
        assert!(matches!(pkg.part(&partname), Err(OpcError::PartNotFound(_))));
    }

    #[test]
    fn test_package_relationship_target() {
        let mut pkg = OpcPackage::new();
        pkg.add_part(pres_part()).unwrap();

        let partname = PackURI::new("/ppt/presentation.xml").unwrap();
        let r_id = pkg.relate_to(&partname, relationship_type::OFFICE_DOCUMENT);
        assert_eq!(r_id, "rId1");
        assert_eq!(
            pkg.rels().get("rId1").unwrap().target_ref(),
            "ppt/presentation.xml"
        );
    }

    #[test]
    fn test_iter_parts_sorted() {
        let mut pkg = OpcPackage::new();
        for name in ["/ppt/slides/slide2.xml", "/ppt/slides/slide1.xml", "/docProps/core.xml"] {
            let partname = PackURI::new(name).unwrap();
            pkg.add_part(Part::new(partname, content_type::XML, Vec::new()))
                .unwrap();
        }

        let names: Vec<&str> = pkg
            .iter_parts()
            .iter()
            .map(|p| p.partname().as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "/docProps/core.xml",
                "/ppt/slides/slide1.xml",
                "/ppt/slides/slide2.xml",
            ]
        );
    }
}
