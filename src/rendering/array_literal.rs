//! Textual emission of packed bitmaps.
//!
//! The plain literal is the compatibility format and must stay byte-exact:
//!
//! ```text
//! {
//! 0x55,0xaa,
//! 0x00,0xff,
//! }
//! ```
//!
//! One line per image row, each byte as `0x` plus two lowercase hex digits
//! and a trailing comma, no spaces.

use std::fmt;

use mono_bitmap::PackedBitmap;

use crate::error::ConvertError;

/// Render the brace-delimited literal.
pub fn render_array_literal(bitmap: &PackedBitmap) -> String {
    ArrayLiteral(bitmap).to_string()
}

/// Render the literal as a `static const unsigned char` declaration.
pub fn render_c_declaration(bitmap: &PackedBitmap, symbol: &str) -> Result<String, ConvertError> {
    if !is_valid_symbol(symbol) {
        return Err(ConvertError::InvalidSymbol(symbol.to_string()));
    }
    Ok(CDeclaration { bitmap, symbol }.to_string())
}

/// Whether `symbol` is a C identifier: `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_valid_symbol(symbol: &str) -> bool {
    let mut chars = symbol.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn write_rows(f: &mut fmt::Formatter<'_>, bitmap: &PackedBitmap) -> fmt::Result {
    for row in bitmap.rows() {
        for byte in row {
            write!(f, "0x{byte:02x},")?;
        }
        writeln!(f)?;
    }
    Ok(())
}

struct ArrayLiteral<'a>(&'a PackedBitmap);

impl fmt::Display for ArrayLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        write_rows(f, self.0)?;
        writeln!(f, "}}")
    }
}

struct CDeclaration<'a> {
    bitmap: &'a PackedBitmap,
    symbol: &'a str,
}

impl fmt::Display for CDeclaration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bitmap = self.bitmap;
        writeln!(
            f,
            "// {}x{}, stride {}",
            bitmap.width(),
            bitmap.height(),
            bitmap.row_bytes()
        )?;
        writeln!(
            f,
            "static const unsigned char {}[{}] = {{",
            self.symbol,
            bitmap.bytes().len()
        )?;
        write_rows(f, bitmap)?;
        writeln!(f, "}};")
    }
}
