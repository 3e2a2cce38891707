pub mod content_range;
pub mod range;

pub use content_range::ContentRange;
pub use range::{InclRange, Range, RangeResp, UnsatisfiedRange};
