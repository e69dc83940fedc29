//! Goodness of fit of an empirical spectral density to the semicircle law.

use super::partition::get_bulk_edge_values;
use crate::distributions::wigner;
use crate::stats::{rmse, Histogram};
use crate::types::RmtError;

/// Bulk comparison between a density histogram and the semicircle.
///
/// Composes the standard pipeline: partition the histogram, evaluate the
/// semicircle at the left edge of every bulk bin, and score the bulk with
/// [`rmse`]. Tail bins are excluded from the error since the semicircle
/// is undefined there; their share of the total mass is reported instead.
///
/// # Examples
/// ```
/// use rmt_core::spectrum::SemicircleFit;
/// use rmt_core::stats::Histogram;
///
/// let sample: Vec<f64> = (0..1000).map(|i| -1.9 + 3.8 * i as f64 / 999.0).collect();
/// let hist = Histogram::new(&sample, 20, Some((-2.5, 2.5)), true).unwrap();
/// let fit = SemicircleFit::from_histogram(&hist).unwrap();
///
/// assert_eq!(fit.bulk_bins + fit.tail_bins, 20);
/// assert_eq!(fit.bulk_bins, 17);
/// assert_eq!(fit.tail_fraction, 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SemicircleFit {
    /// RMSE between bulk densities and the semicircle at the bulk left edges.
    pub bulk_rmse: f32,
    /// Number of bins in the bulk.
    pub bulk_bins: usize,
    /// Number of bins in the tails.
    pub tail_bins: usize,
    /// Fraction of the histogram mass carried by tail bins.
    pub tail_fraction: f64,
}

impl SemicircleFit {
    /// Scores a density-normalised histogram against the semicircle.
    ///
    /// # Errors
    /// - `RmtError::InvalidParameter` if the histogram holds raw counts
    /// - `RmtError::EmptyInput` if no bin falls in the bulk
    pub fn from_histogram(hist: &Histogram) -> Result<Self, RmtError> {
        if !hist.is_density() {
            return Err(RmtError::InvalidParameter {
                name: "histogram",
                reason: "must be density-normalised".to_string(),
            });
        }

        let split = get_bulk_edge_values(hist.counts(), hist.edges())?;

        let observed: Vec<f32> = split.bulk.counts.iter().map(|&c| c as f32).collect();
        let expected = wigner(&split.bulk.edges);
        let bulk_rmse = rmse(&observed, &expected)?;

        let widths: Vec<f64> = hist.edges().windows(2).map(|w| w[1] - w[0]).collect();
        let (total, tail): (f64, f64) = hist
            .counts()
            .iter()
            .zip(&widths)
            .zip(&split.bulk_mask)
            .fold((0.0, 0.0), |(total, tail), ((&c, &w), &in_bulk)| {
                let mass = c * w;
                (total + mass, if in_bulk { tail } else { tail + mass })
            });

        Ok(Self {
            bulk_rmse,
            bulk_bins: split.bulk.len(),
            tail_bins: split.tail.len(),
            tail_fraction: if total > 0.0 { tail / total } else { 0.0 },
        })
    }
}
