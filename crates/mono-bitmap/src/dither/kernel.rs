//! Error diffusion kernel definition.

/// An error diffusion kernel.
///
/// Each entry is a neighbour offset `(dx, dy)` and a weight. The neighbour
/// receives `error * weight / divisor`, multiplied first and divided with
/// truncation toward zero.
///
/// Offsets must point at cells later in row-major order: `dy > 0`, or
/// `dy == 0` with `dx > 0`.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// `(dx, dy, weight)` entries.
    pub entries: &'static [(i32, i32, u8)],

    /// Divisor applied to every weight.
    pub divisor: u8,
}

/// Floyd-Steinberg kernel, 16/16 of the error propagated.
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};
