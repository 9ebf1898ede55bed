//! Open Packaging Conventions (OPC) support.
//!
//! A .pptx file is an OPC package: a ZIP archive of XML parts wired together
//! by relationships, with a [Content_Types].xml item describing each part's
//! format. This module provides the package model and the writer that
//! serializes it.

pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

pub use error::{OpcError, Result};
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
