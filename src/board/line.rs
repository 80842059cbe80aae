//! Single-line compression and merging.
//!
//! Every move reduces to the same operation on each row or column: drop the
//! empty cells, merge equal neighbours once in a single pass from the leading
//! end, then pad back to the line length. The board decides which end leads
//! by reversing lines before and after.

use smallvec::SmallVec;

/// Merged values for one line.
///
/// SmallVec keeps lines up to 8 cells off the heap.
pub type LineBuf = SmallVec<[u32; 8]>;

/// Largest value a cell can hold.
///
/// Doubling it would overflow `u32`, so two `MAX_TILE` neighbours stay
/// where they are instead of merging.
pub const MAX_TILE: u32 = 1 << 31;

/// Whether two neighbouring values merge when slid together.
#[inline]
#[must_use]
pub fn can_merge(a: u32, b: u32) -> bool {
    a != 0 && a == b && a < MAX_TILE
}

/// Merge a line of tile values in one left-to-right pass.
///
/// Zeros are filtered out first. Each remaining value is compared with the
/// next value of the filtered input, never with a value produced earlier in
/// the same pass, so a tile merges at most once per move:
///
/// ```
/// use rust_2048::board::merge_line;
///
/// let (merged, delta) = merge_line(&[2, 2, 2]);
/// assert_eq!(merged.as_slice(), &[4, 2]);
/// assert_eq!(delta, 4);
///
/// let (merged, delta) = merge_line(&[4, 0, 4, 8]);
/// assert_eq!(merged.as_slice(), &[8, 8]);
/// assert_eq!(delta, 8);
/// ```
///
/// Returns the merged values (no padding) and the score gained, which is the
/// sum of every doubled value. A pair of [`MAX_TILE`]s is left unmerged.
#[must_use]
pub fn merge_line(values: &[u32]) -> (LineBuf, u64) {
    let compressed: LineBuf = values.iter().copied().filter(|&v| v != 0).collect();

    let mut merged = LineBuf::new();
    let mut delta = 0u64;
    let mut i = 0;
    while i < compressed.len() {
        let current = compressed[i];
        match compressed.get(i + 1) {
            Some(&next) if can_merge(current, next) => {
                let doubled = current << 1;
                merged.push(doubled);
                delta += u64::from(doubled);
                i += 2;
            }
            _ => {
                merged.push(current);
                i += 1;
            }
        }
    }

    (merged, delta)
}

/// Slide a line toward index 0: merge, then pad with zeros to the input length.
#[must_use]
pub fn slide_line(line: &[u32]) -> (LineBuf, u64) {
    let (mut merged, delta) = merge_line(line);
    merged.resize(line.len(), 0);
    (merged, delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(line: &[u32]) -> (Vec<u32>, u64) {
        let (out, delta) = slide_line(line);
        (out.to_vec(), delta)
    }

    #[test]
    fn test_three_equal_merge_once() {
        assert_eq!(slide(&[2, 2, 2, 0]), (vec![4, 2, 0, 0], 4));
        assert_eq!(slide(&[2, 2, 2]), (vec![4, 2, 0], 4));
    }

    #[test]
    fn test_four_equal_merge_pairwise() {
        assert_eq!(slide(&[2, 2, 2, 2]), (vec![4, 4, 0, 0], 8));
    }

    #[test]
    fn test_merged_value_not_remerged() {
        assert_eq!(slide(&[4, 0, 4, 8]), (vec![8, 8, 0, 0], 8));
        assert_eq!(slide(&[2, 2, 4, 0]), (vec![4, 4, 0, 0], 4));
    }

    #[test]
    fn test_gaps_compress() {
        assert_eq!(slide(&[0, 0, 0, 2]), (vec![2, 0, 0, 0], 0));
        assert_eq!(slide(&[0, 2, 0, 2]), (vec![4, 0, 0, 0], 4));
        assert_eq!(slide(&[2, 0, 0, 4]), (vec![2, 4, 0, 0], 0));
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(slide(&[0, 0, 0, 0]), (vec![0, 0, 0, 0], 0));
        assert_eq!(slide(&[8, 0, 0, 0]), (vec![8, 0, 0, 0], 0));
        assert_eq!(slide(&[]), (vec![], 0));
    }

    #[test]
    fn test_no_adjacent_pairs_unchanged() {
        assert_eq!(slide(&[2, 4, 2, 4]), (vec![2, 4, 2, 4], 0));
    }

    #[test]
    fn test_merge_line_has_no_padding() {
        let (merged, delta) = merge_line(&[0, 16, 16, 0, 32]);
        assert_eq!(merged.as_slice(), &[32, 32]);
        assert_eq!(delta, 32);
    }

    #[test]
    fn test_long_line() {
        let line = [2, 2, 4, 4, 8, 8, 16, 16, 0, 32];
        let (out, delta) = slide(&line);
        assert_eq!(out, vec![4, 8, 16, 32, 32, 0, 0, 0, 0, 0]);
        assert_eq!(delta, 4 + 8 + 16 + 32);
    }

    #[test]
    fn test_max_tiles_do_not_merge() {
        assert_eq!(slide(&[MAX_TILE, MAX_TILE]), (vec![MAX_TILE, MAX_TILE], 0));
        assert_eq!(
            slide(&[0, MAX_TILE, 0, MAX_TILE]),
            (vec![MAX_TILE, MAX_TILE, 0, 0], 0)
        );
    }

    #[test]
    fn test_half_max_tiles_merge_into_max() {
        let half = MAX_TILE / 2;
        let (out, delta) = slide(&[half, half, MAX_TILE]);
        assert_eq!(out, vec![MAX_TILE, MAX_TILE, 0]);
        assert_eq!(delta, u64::from(MAX_TILE));
    }

    #[test]
    fn test_can_merge() {
        assert!(can_merge(2, 2));
        assert!(can_merge(MAX_TILE / 2, MAX_TILE / 2));
        assert!(!can_merge(MAX_TILE, MAX_TILE));
        assert!(!can_merge(0, 0));
        assert!(!can_merge(2, 4));
    }
}
