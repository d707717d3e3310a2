pub mod commands;
pub mod history;

pub use commands::*;
pub use history::*;
