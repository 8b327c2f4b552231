pub mod converter;

pub use converter::{ConversionOutput, Converter};
