use super::binarize;

/// Threshold every cell in place.
pub(super) fn apply(cells: &mut [u8]) {
    for cell in cells.iter_mut() {
        *cell = binarize(*cell);
    }
}
