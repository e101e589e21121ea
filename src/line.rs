//! Single-line transitions.
//!
//! A line is one row or one column of the board, read in the direction the
//! tiles slide toward (index 0 is the wall). Every directional move is built
//! from these helpers.

use crate::constants::{EMPTY, MAX_TILE};

/// Slide all tiles toward index 0, keeping their order and padding with
/// empty cells.
///
/// Returns the new line and whether any cell changed position.
pub fn compress(line: &[u32]) -> (Vec<u32>, bool) {
    let mut out: Vec<u32> = line.iter().copied().filter(|&v| v != EMPTY).collect();
    out.resize(line.len(), EMPTY);
    let changed = out.as_slice() != line;
    (out, changed)
}

/// Whether two neighbouring cells combine into one tile.
///
/// Tiles already at [`MAX_TILE`] stay apart so the doubled value still fits.
pub fn can_merge(a: u32, b: u32) -> bool {
    a != EMPTY && a == b && a < MAX_TILE
}

/// Merge equal neighbours left to right.
///
/// A merged tile is skipped over, so it can't merge again in the same pass:
/// `[2, 2, 2, 2]` becomes `[4, 0, 4, 0]`.
pub fn merge(line: &[u32]) -> (Vec<u32>, bool) {
    let mut out = line.to_vec();
    let mut changed = false;
    let mut i = 0;
    while i + 1 < out.len() {
        if can_merge(out[i], out[i + 1]) {
            out[i] *= 2;
            out[i + 1] = EMPTY;
            changed = true;
            i += 2;
        } else {
            i += 1;
        }
    }
    (out, changed)
}

/// Reverse a line, so a slide toward the far end can reuse [`slide`].
pub fn reverse(line: &[u32]) -> Vec<u32> {
    line.iter().rev().copied().collect()
}

/// Full slide toward index 0: compress, merge, compress.
///
/// The changed flag comes from the first compress and the merge only; the
/// closing compress just tidies the gaps the merge left behind.
pub fn slide(line: &[u32]) -> (Vec<u32>, bool) {
    let (compressed, moved) = compress(line);
    let (merged, merged_any) = merge(&compressed);
    let (out, _) = compress(&merged);
    (out, moved || merged_any)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_keeps_order() {
        let (out, changed) = compress(&[0, 4, 0, 2]);
        assert_eq!(out, vec![4, 2, 0, 0]);
        assert!(changed);
    }

    #[test]
    fn test_compress_already_packed() {
        let (out, changed) = compress(&[8, 2, 0, 0]);
        assert_eq!(out, vec![8, 2, 0, 0]);
        assert!(!changed);
    }

    #[test]
    fn test_compress_idempotent() {
        let lines: [[u32; 4]; 5] = [
            [0, 0, 0, 0],
            [2, 0, 2, 0],
            [0, 0, 0, 16],
            [4, 8, 16, 32],
            [0, 2, 2, 0],
        ];
        for line in lines {
            let (once, _) = compress(&line);
            let (twice, changed) = compress(&once);
            assert_eq!(once, twice);
            assert!(!changed);
            assert_eq!(once.len(), line.len());
        }
    }

    #[test]
    fn test_merge_no_pairs_is_noop() {
        let (out, changed) = merge(&[2, 4, 8, 16]);
        assert_eq!(out, vec![2, 4, 8, 16]);
        assert!(!changed);

        let (out, changed) = merge(&[0, 0, 0, 0]);
        assert_eq!(out, vec![0, 0, 0, 0]);
        assert!(!changed);
    }

    #[test]
    fn test_merge_does_not_cascade() {
        let (out, changed) = merge(&[2, 2, 2, 2]);
        assert_eq!(out, vec![4, 0, 4, 0]);
        assert!(changed);
    }

    #[test]
    fn test_merge_new_tile_stays_put() {
        // 2+2 makes a 4 that must not absorb the neighbouring 4.
        let (out, _) = merge(&[2, 2, 4, 0]);
        assert_eq!(out, vec![4, 0, 4, 0]);
    }

    #[test]
    fn test_slide_gap_then_merge() {
        let (out, changed) = slide(&[0, 2, 0, 2]);
        assert_eq!(out, vec![4, 0, 0, 0]);
        assert!(changed);
    }

    #[test]
    fn test_slide_four_equal() {
        let (out, changed) = slide(&[2, 2, 2, 2]);
        assert_eq!(out, vec![4, 4, 0, 0]);
        assert!(changed);
    }

    #[test]
    fn test_slide_blocked() {
        let (out, changed) = slide(&[2, 4, 2, 4]);
        assert_eq!(out, vec![2, 4, 2, 4]);
        assert!(!changed);
    }

    #[test]
    fn test_max_tiles_stay_apart() {
        let (out, changed) = merge(&[MAX_TILE, MAX_TILE, 4, 4]);
        assert_eq!(out, vec![MAX_TILE, MAX_TILE, 8, 0]);
        assert!(changed);

        let (out, changed) = slide(&[0, MAX_TILE, 0, MAX_TILE]);
        assert_eq!(out, vec![MAX_TILE, MAX_TILE, 0, 0]);
        assert!(changed);

        let (out, changed) = slide(&[MAX_TILE / 2, MAX_TILE / 2, 0, 0]);
        assert_eq!(out, vec![MAX_TILE, 0, 0, 0]);
        assert!(changed);
    }

    #[test]
    fn test_can_merge() {
        assert!(can_merge(2, 2));
        assert!(can_merge(MAX_TILE / 2, MAX_TILE / 2));
        assert!(!can_merge(0, 0));
        assert!(!can_merge(2, 4));
        assert!(!can_merge(MAX_TILE, MAX_TILE));
    }

    #[test]
    fn test_reverse() {
        assert_eq!(reverse(&[1, 2, 3, 4]), vec![4, 3, 2, 1]);
        assert_eq!(reverse(&[]), Vec::<u32>::new());
    }
}
