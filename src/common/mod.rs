//! Shared utilities used by the OPC and PresentationML layers.

pub mod unit;
pub mod xml;
