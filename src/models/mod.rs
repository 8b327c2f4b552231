pub mod config;

pub use config::{AppConfig, LumaSetting, PaddingSetting};
