pub mod cli;
pub mod commands;
mod context;
pub mod identity;

pub use context::AppContext;
