//! Configuration for storyscout.

mod settings;

pub use settings::{Config, DataConfig};
