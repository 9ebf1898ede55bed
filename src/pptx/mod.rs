//! PresentationML (.pptx) generation.
//!
//! The model is write-only: build a [`MutablePresentation`] slide by slide,
//! wrap it in a [`Package`] and save. Slides are blank-layout canvases
//! populated with positioned text boxes.

pub mod background;
pub mod format;
pub mod package;
pub mod pres;
pub mod properties;
pub mod shape;
pub mod slide;
pub mod template;

pub use background::SlideBackground;
pub use format::{Alignment, TextFormat};
pub use package::Package;
pub use pres::MutablePresentation;
pub use properties::DocumentProperties;
pub use shape::{MutableShape, Paragraph};
pub use slide::MutableSlide;
