/// Package part, the building block of an OPC package.
///
/// A part is a named blob with a content type and its own set of outgoing
/// relationships. Parts hold their serialized XML (or binary) payload; the
/// package collects them and the writer lays them out in the Zip archive.
use crate::opc::packuri::PackURI;
use crate::opc::rel::Relationships;

#[derive(Debug)]
pub struct Part {
    /// Pack URI of this part (e.g., "/ppt/slides/slide1.xml")
    partname: PackURI,

    /// Content type of this part
    content_type: String,

    /// Serialized payload of this part
    blob: Vec<u8>,

    /// Outgoing relationships from this part
    rels: Relationships,
}

impl Part {
    /// Create a new part with the given partname, content type and payload.
    pub fn new<B: Into<Vec<u8>>>(partname: PackURI, content_type: &str, blob: B) -> Self {
        Self {
            partname,
            content_type: content_type.to_string(),
            blob: blob.into(),
            rels: Relationships::new(),
        }
    }

    /// Get the partname of this part.
    #[inline]
    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    /// Get the content type of this part.
    #[inline]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Get the payload of this part.
    #[inline]
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    /// Replace the payload of this part.
    ///
    /// Used when a part's XML can only be finalized once its relationships
    /// are known, e.g. the presentation part referring to its slides by rId.
    pub fn set_blob<B: Into<Vec<u8>>>(&mut self, blob: B) {
        self.blob = blob.into();
    }

    /// Get the outgoing relationships of this part.
    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Add a relationship from this part to the target part, returning its
    /// rId. The Target attribute is expressed relative to this part's base
    /// URI, as required for part-level .rels files.
    ///
    /// If a relationship of the same type to the same target already exists,
    /// its rId is returned instead of creating a duplicate.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        let target_ref = target.relative_ref(self.partname.base_uri());
        self.rels.get_or_add(reltype, &target_ref)
    }
}
