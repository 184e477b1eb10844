#![deny(warnings)]
pub mod manifest;
pub mod style;

pub use manifest::{IconManifest, MANIFEST_ENV, ManifestError, TableError};
pub use style::IconStyle;
