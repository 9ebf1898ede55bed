//! Generates a conference talk deck as a .pptx presentation.
//!
//! The crate is organized in three layers:
//!
//! - [`opc`]: Open Packaging Conventions support — parts, relationships,
//!   and the ZIP-based package writer shared by all Office formats.
//! - [`pptx`]: the PresentationML model — slides, text box shapes, the
//!   presentation part, and package assembly.
//! - [`deck`]: the talk itself — the slide archetypes and the content of
//!   every slide.
//!
//! # Example
//!
//! ```no_run
//! use talkdeck::deck::content::build_deck;
//!
//! let package = build_deck();
//! package.save("talk.pptx")?;
//! # Ok::<(), talkdeck::Error>(())
//! ```

pub mod common;
pub mod deck;
pub mod error;
pub mod opc;
pub mod pptx;

pub use error::{Error, Result};
