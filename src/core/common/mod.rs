pub mod error;
pub use error::TesseraError;
