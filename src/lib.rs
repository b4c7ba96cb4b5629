pub mod config;
pub mod core;
pub mod detection;

pub use config::{load_config, HantypeConfig};
pub use crate::core::converter::{byte_length, compose, convert, Conversion, Converter};
pub use crate::core::decomposer::decompose;
pub use detection::{detect, Direction};
