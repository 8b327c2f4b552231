//! Floyd-Steinberg error diffusion on an 8-bit buffer.
//!
//! The buffer is walked row-major, top to bottom and left to right. Each
//! cell is settled with [`binarize`] and its signed error
//! `old - new` is pushed onto the unvisited neighbours named by the kernel:
//!
//! ```text
//!        X   7/16
//! 3/16 5/16 1/16
//! ```
//!
//! Every neighbour write is clamped to `0..=255` before it is stored, so a
//! run of same-signed errors saturates instead of wrapping. Neighbours
//! outside the grid are skipped, not clamped onto the edge.

use super::binarize;
use super::kernel::Kernel;

/// Diffuse `cells` in place. `cells.len()` must be `width * height`.
pub(super) fn diffuse(cells: &mut [u8], width: usize, height: usize, kernel: &Kernel) {
    debug_assert_eq!(cells.len(), width * height);
    let divisor = i32::from(kernel.divisor);

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let old = cells[idx];
            let new = binarize(old);
            cells[idx] = new;

            let error = i32::from(old) - i32::from(new);
            if error == 0 {
                continue;
            }

            for &(dx, dy, weight) in kernel.entries {
                let Some(nx) = x.checked_add_signed(dx as isize).filter(|&nx| nx < width) else {
                    continue;
                };
                let ny = y + dy as usize;
                if ny >= height {
                    continue;
                }

                let n = ny * width + nx;
                let share = error * i32::from(weight) / divisor;
                cells[n] = (i32::from(cells[n]) + share).clamp(0, 255) as u8;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dither::FLOYD_STEINBERG;

    fn run(mut cells: Vec<u8>, width: usize, height: usize) -> Vec<u8> {
        diffuse(&mut cells, width, height, &FLOYD_STEINBERG);
        cells
    }

    #[test]
    fn test_mid_grey_row_alternates() {
        // 127 -> 255 (err -128), right neighbour 127 - 56 = 71 -> 0 (err 71),
        // next 127 + 31 = 158 -> 255, and the pattern settles into 255, 0.
        let out = run(vec![0x7F; 16], 16, 1);
        let expected: Vec<u8> = (0..16).map(|i| if i % 2 == 0 { 255 } else { 0 }).collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn test_flat_grey_square() {
        let out = run(vec![100; 16], 4, 4);
        assert_eq!(
            out,
            vec![
                0, 255, 0, 0, //
                0, 255, 0, 255, //
                0, 255, 0, 0, //
                0, 0, 255, 0,
            ]
        );
    }

    #[test]
    fn test_gradient_square() {
        let out = run(vec![0, 64, 128, 192, 255, 200, 100, 50, 25], 3, 3);
        assert_eq!(out, vec![0, 0, 255, 255, 255, 255, 0, 0, 0]);
    }

    #[test]
    fn test_solid_levels_are_untouched() {
        assert!(run(vec![0; 12], 4, 3).iter().all(|&v| v == 0));
        assert!(run(vec![255; 12], 4, 3).iter().all(|&v| v == 255));
    }

    #[test]
    fn test_negative_accumulation_clamps_at_zero() {
        // 128 -> 255 pushes -39 down onto 10. Stored as 0, not -29, so the
        // 10 settles with no error and 130 below stays white.
        let out = run(vec![128, 10, 130], 1, 3);
        assert_eq!(out, vec![255, 0, 255]);
    }

    #[test]
    fn test_positive_accumulation_clamps_at_255() {
        // 126 -> 0 pushes +39 down onto 250. Stored as 255, so it settles
        // with no error and 126 below stays black.
        let out = run(vec![126, 250, 126], 1, 3);
        assert_eq!(out, vec![0, 255, 0]);
    }

    #[test]
    fn test_left_edge_has_no_bottom_left_neighbour() {
        // If x = 0 wrapped to the previous row's last column, the 3/16 share
        // would land on an already settled cell or out of bounds.
        let out = run(vec![127, 1, 1, 1, 1, 1], 3, 2);
        assert_eq!(out, vec![255, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_right_edge_skips_out_of_range() {
        // Single column: only the bottom neighbour exists.
        let out = run(vec![200, 200], 1, 2);
        assert_eq!(out, vec![255, 255]);
    }

    #[test]
    fn test_deterministic() {
        let input: Vec<u8> = (0..256).map(|i| (i * 37 % 256) as u8).collect();
        assert_eq!(run(input.clone(), 16, 16), run(input, 16, 16));
    }
}
