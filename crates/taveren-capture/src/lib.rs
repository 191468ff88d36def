pub mod error;
pub mod import;

pub use error::CaptureError;
pub use import::export::{parse_export, ExportImporter};
pub use import::shape::ExportShape;
