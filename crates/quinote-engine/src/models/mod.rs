pub mod element;
pub mod parse_result;

pub use element::{Element, ElementKind, PreOrder};
pub use parse_result::ParseResult;
