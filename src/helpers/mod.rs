//! Helper functions shared by the output builders

mod url;
mod xml;

pub use url::*;
pub use xml::*;
