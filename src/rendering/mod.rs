pub mod array_literal;
pub mod png_source;
pub mod preview;

pub use array_literal::{is_valid_symbol, render_array_literal, render_c_declaration};
pub use png_source::PngImage;
pub use preview::encode_preview_png;
