//! Grammar-level parsing, validation and formatting.

pub mod constants;
pub mod formatter;
#[cfg(feature = "http")]
pub mod headers;
pub mod parser;
pub mod utils;
pub mod validate;

pub use constants::*;
pub use formatter::*;
#[cfg(feature = "http")]
pub use headers::*;
pub use parser::*;
pub use utils::*;
pub use validate::*;
