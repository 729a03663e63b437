pub mod date;
pub mod duration;
pub mod formatting;
pub mod fs_utils;
pub mod path;
pub mod table;

pub use formatting::sanitize_cell;
