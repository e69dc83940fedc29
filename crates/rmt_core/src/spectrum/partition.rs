//! Bulk/tail partition of a histogrammed spectrum.
//!
//! Each bin is represented by its *left* edge: `bins[i]` stands for
//! `counts[i]`, and the final upper edge is dropped. A bin belongs to the
//! bulk when its left edge lies in `[-2, 2]` (both ends inclusive) and to
//! the tail otherwise. Bins whose edge is NaN fall in the tail.

use crate::distributions::{constant, SEMICIRCLE_EDGE};
use crate::types::RmtError;
use num_traits::Float;

/// Counts and left edges of the bins that fall in one region.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpectrumRegion<C, B> {
    /// Counts (or densities) of the selected bins, in histogram order.
    pub counts: Vec<C>,
    /// Left edge of each selected bin.
    pub edges: Vec<B>,
}

impl<C, B> SpectrumRegion<C, B> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: Vec::with_capacity(capacity),
            edges: Vec::with_capacity(capacity),
        }
    }

    /// Number of bins in the region.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the region holds no bins.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Result of [`get_bulk_edge_values`].
///
/// The named `bulk`/`tail` fields replace positional access; use
/// [`BulkEdgeSplit::into_parts`] for the flat
/// `(bulk_counts, bulk_edges, tail_counts, tail_edges)` ordering.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BulkEdgeSplit<C, B> {
    /// Bins whose left edge lies inside the semicircle support.
    pub bulk: SpectrumRegion<C, B>,
    /// Bins whose left edge lies outside the support.
    pub tail: SpectrumRegion<C, B>,
    /// Per-bin membership of the bulk, aligned with the input counts.
    pub bulk_mask: Vec<bool>,
}

impl<C, B> BulkEdgeSplit<C, B> {
    /// Per-bin membership of the tail; the complement of `bulk_mask`.
    pub fn tail_mask(&self) -> Vec<bool> {
        self.bulk_mask.iter().map(|&in_bulk| !in_bulk).collect()
    }

    /// Flattens into `(bulk_counts, bulk_edges, tail_counts, tail_edges)`.
    pub fn into_parts(self) -> (Vec<C>, Vec<B>, Vec<C>, Vec<B>) {
        (
            self.bulk.counts,
            self.bulk.edges,
            self.tail.counts,
            self.tail.edges,
        )
    }
}

/// Marks which positions lie inside the semicircle support `[-2, 2]`.
///
/// # Examples
/// ```
/// use rmt_core::spectrum::bulk_mask;
///
/// assert_eq!(bulk_mask(&[-3.0_f64, -2.0, 0.5, 2.0, 2.1]), vec![false, true, true, true, false]);
/// ```
pub fn bulk_mask<B: Float>(positions: &[B]) -> Vec<bool> {
    let edge = constant::<B>(SEMICIRCLE_EDGE);
    positions
        .iter()
        .map(|&x| x <= edge && x >= -edge)
        .collect()
}

/// Separates the bulk of a histogram from its tails.
///
/// The bulk is defined by the semicircle law: λ in `[-2, 2]`, tested on
/// the left edge of each bin.
///
/// # Arguments
/// * `counts` - Histogram counts or densities, length `k`
/// * `bins` - Histogram edges, length `k + 1`
///
/// # Errors
/// Returns `RmtError::DimensionMismatch` unless `bins.len() == counts.len() + 1`.
///
/// # Examples
/// ```
/// use rmt_core::spectrum::get_bulk_edge_values;
///
/// let split = get_bulk_edge_values(&[1, 2, 3, 4], &[-3.0_f64, -1.0, 0.0, 1.0, 3.0]).unwrap();
/// let (bulk_counts, bulk_edges, tail_counts, tail_edges) = split.into_parts();
///
/// assert_eq!(bulk_counts, vec![2, 3, 4]);
/// assert_eq!(bulk_edges, vec![-1.0, 0.0, 1.0]);
/// assert_eq!(tail_counts, vec![1]);
/// assert_eq!(tail_edges, vec![-3.0]);
/// ```
pub fn get_bulk_edge_values<C: Copy, B: Float>(
    counts: &[C],
    bins: &[B],
) -> Result<BulkEdgeSplit<C, B>, RmtError> {
    if bins.len() != counts.len() + 1 {
        return Err(RmtError::DimensionMismatch {
            operation: "get_bulk_edge_values",
            expected: counts.len() + 1,
            actual: bins.len(),
        });
    }

    let lefts = &bins[..counts.len()];
    let mask = bulk_mask(lefts);

    let mut bulk = SpectrumRegion::with_capacity(counts.len());
    let mut tail = SpectrumRegion::with_capacity(counts.len());
    for ((&count, &edge), &in_bulk) in counts.iter().zip(lefts).zip(&mask) {
        let region = if in_bulk { &mut bulk } else { &mut tail };
        region.counts.push(count);
        region.edges.push(edge);
    }

    Ok(BulkEdgeSplit {
        bulk,
        tail,
        bulk_mask: mask,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reference_partition() {
        let counts = [1.0_f32, 2.0, 3.0, 4.0];
        let bins = [-3.0_f32, -1.0, 0.0, 1.0, 3.0];
        let split = get_bulk_edge_values(&counts, &bins).unwrap();

        assert_eq!(split.bulk_mask, vec![false, true, true, true]);
        assert_eq!(split.tail_mask(), vec![true, false, false, false]);
        assert_eq!(split.bulk.counts, vec![2.0, 3.0, 4.0]);
        assert_eq!(split.bulk.edges, vec![-1.0, 0.0, 1.0]);
        assert_eq!(split.tail.counts, vec![1.0]);
        assert_eq!(split.tail.edges, vec![-3.0]);
    }

    #[test]
    fn test_support_endpoints_are_bulk() {
        let split = get_bulk_edge_values(&[5, 6, 7], &[-2.0_f64, 0.0, 2.0, 4.0]).unwrap();
        assert_eq!(split.bulk_mask, vec![true, true, true]);
        assert!(split.tail.is_empty());
        assert_eq!(split.bulk.len(), 3);
    }

    #[test]
    fn test_last_edge_is_ignored() {
        // The final upper edge 100.0 never represents a bin
        let split = get_bulk_edge_values(&[1, 1], &[0.0_f64, 1.0, 100.0]).unwrap();
        assert!(split.tail.is_empty());
    }

    #[test]
    fn test_nan_edges_fall_in_tail() {
        let split = get_bulk_edge_values(&[1, 2], &[f64::NAN, 0.0, 1.0]).unwrap();
        assert_eq!(split.tail.counts, vec![1]);
        assert_eq!(split.bulk.counts, vec![2]);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let result = get_bulk_edge_values(&[1, 2, 3], &[0.0_f64, 1.0, 2.0]);
        assert_eq!(
            result,
            Err(RmtError::DimensionMismatch {
                operation: "get_bulk_edge_values",
                expected: 4,
                actual: 3,
            })
        );

        let too_long = get_bulk_edge_values(&[1], &[0.0_f64, 1.0, 2.0]);
        assert!(too_long.is_err());
    }

    #[test]
    fn test_empty_histogram() {
        let counts: [u32; 0] = [];
        let split = get_bulk_edge_values(&counts, &[0.0_f64]).unwrap();
        assert!(split.bulk.is_empty());
        assert!(split.tail.is_empty());
    }

    #[test]
    fn test_into_parts_order() {
        let split = get_bulk_edge_values(&[10, 20], &[-5.0_f64, 1.0, 5.0]).unwrap();
        let (bulk_counts, bulk_edges, tail_counts, tail_edges) = split.into_parts();
        assert_eq!(bulk_counts, vec![20]);
        assert_eq!(bulk_edges, vec![1.0]);
        assert_eq!(tail_counts, vec![10]);
        assert_eq!(tail_edges, vec![-5.0]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn test_masks_are_complementary(
            mut edges in prop::collection::vec(-5.0_f64..5.0, 2..64)
        ) {
            edges.sort_by(|a, b| a.total_cmp(b));
            let counts: Vec<usize> = (0..edges.len() - 1).collect();
            let split = get_bulk_edge_values(&counts, &edges).unwrap();

            prop_assert_eq!(split.bulk.len() + split.tail.len(), counts.len());
            for (b, t) in split.bulk_mask.iter().zip(split.tail_mask()) {
                prop_assert!(*b != t);
            }

            // Every bin index appears in exactly one region
            let mut seen: Vec<usize> = split
                .bulk
                .counts
                .iter()
                .chain(&split.tail.counts)
                .copied()
                .collect();
            seen.sort_unstable();
            prop_assert_eq!(seen, counts);
        }
    }
}
