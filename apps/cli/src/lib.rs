pub mod config;
mod main_lib;

pub use main_lib::{handle_bytes, handle_input, init_tracing};
