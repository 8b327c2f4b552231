/// A decoded pixel with 8-bit red, green and blue channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// A neutral pixel with all three channels set to `value`.
    #[inline]
    pub const fn grey(value: u8) -> Self {
        Self::new(value, value, value)
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<(u8, u8, u8)> for Rgb8 {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions_agree() {
        assert_eq!(Rgb8::from([1, 2, 3]), Rgb8::new(1, 2, 3));
        assert_eq!(Rgb8::from((1, 2, 3)), Rgb8::new(1, 2, 3));
        assert_eq!(Rgb8::grey(9), Rgb8::new(9, 9, 9));
    }
}
