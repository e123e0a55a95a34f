pub mod parse;
pub mod timeout;
