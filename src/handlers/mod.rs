pub mod categories;
pub mod play;
pub mod questions;
