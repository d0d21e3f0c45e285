//! Output formatting for briefings

pub mod console;
pub mod formatter;
pub mod markdown;
