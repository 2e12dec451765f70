pub mod marker;
pub mod source;
