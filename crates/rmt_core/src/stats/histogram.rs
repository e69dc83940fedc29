//! Equal-width histogram of an eigenvalue sample.
//!
//! The binning convention is the usual one for spectral studies:
//! - `bins` equal-width bins over `[lo, hi]`, described by `bins + 1` edges
//! - every bin is half-open `[e_i, e_{i+1})` except the last, which is closed
//! - values outside the range (and NaN) are ignored
//! - a degenerate range `lo == hi` is widened to `[lo - 0.5, hi + 0.5]`
//!
//! With `density = true` the counts are normalised so the histogram
//! integrates to one over the range, making it directly comparable with
//! [`crate::distributions::wigner`].

use crate::types::RmtError;
use num_traits::Float;

/// Binned counts (or densities) and their edges.
///
/// `edges().len() == counts().len() + 1` always holds, which is the layout
/// [`crate::spectrum::get_bulk_edge_values`] expects.
///
/// # Examples
/// ```
/// use rmt_core::stats::Histogram;
///
/// let values = [0.1_f32, 0.2, 0.6, 0.9, 1.0];
/// let hist = Histogram::new(&values, 2, Some((0.0, 1.0)), false).unwrap();
///
/// assert_eq!(hist.counts(), &[2.0, 3.0]);
/// assert_eq!(hist.edges(), &[0.0, 0.5, 1.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "HistogramData"))]
pub struct Histogram {
    counts: Vec<f64>,
    edges: Vec<f64>,
    density: bool,
}

/// Unchecked wire form of [`Histogram`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct HistogramData {
    counts: Vec<f64>,
    edges: Vec<f64>,
    density: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<HistogramData> for Histogram {
    type Error = RmtError;

    fn try_from(data: HistogramData) -> Result<Self, Self::Error> {
        if data.counts.is_empty() {
            return Err(RmtError::EmptyInput {
                operation: "histogram",
            });
        }
        if data.edges.len() != data.counts.len() + 1 {
            return Err(RmtError::DimensionMismatch {
                operation: "histogram",
                expected: data.counts.len() + 1,
                actual: data.edges.len(),
            });
        }
        Ok(Self {
            counts: data.counts,
            edges: data.edges,
            density: data.density,
        })
    }
}

impl Histogram {
    /// Bins `values` into `bins` equal-width bins.
    ///
    /// # Arguments
    /// * `values` - Sample to bin
    /// * `bins` - Number of bins, at least 1
    /// * `range` - Optional `(lo, hi)`; defaults to the sample minimum and maximum
    /// * `density` - Normalise counts to a probability density
    ///
    /// # Errors
    /// - `RmtError::EmptyInput` if `values` is empty
    /// - `RmtError::InvalidParameter` if `bins == 0`, the range is not
    ///   finite, or `lo > hi`
    pub fn new<T: Float>(
        values: &[T],
        bins: usize,
        range: Option<(f64, f64)>,
        density: bool,
    ) -> Result<Self, RmtError> {
        if values.is_empty() {
            return Err(RmtError::EmptyInput {
                operation: "histogram",
            });
        }
        if bins == 0 {
            return Err(RmtError::InvalidParameter {
                name: "bins",
                reason: "must be at least 1".to_string(),
            });
        }

        let samples: Vec<f64> = values
            .iter()
            .map(|v| v.to_f64().unwrap_or(f64::NAN))
            .collect();

        let (mut lo, mut hi) = match range {
            Some(bounds) => bounds,
            None => samples
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                    (lo.min(v), hi.max(v))
                }),
        };
        if !lo.is_finite() || !hi.is_finite() {
            return Err(RmtError::InvalidParameter {
                name: "range",
                reason: format!("[{}, {}] is not finite", lo, hi),
            });
        }
        if lo > hi {
            return Err(RmtError::InvalidParameter {
                name: "range",
                reason: format!("lower bound {} exceeds upper bound {}", lo, hi),
            });
        }
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let step = (hi - lo) / bins as f64;
        let mut edges: Vec<f64> = (0..bins).map(|i| lo + i as f64 * step).collect();
        edges.push(hi);

        let mut counts = vec![0.0_f64; bins];
        for &v in samples.iter().filter(|&&v| v >= lo && v <= hi) {
            counts[bin_index(v, &edges)] += 1.0;
        }

        if density {
            let total: f64 = counts.iter().sum();
            for (count, window) in counts.iter_mut().zip(edges.windows(2)) {
                *count /= total * (window[1] - window[0]);
            }
        }

        Ok(Self {
            counts,
            edges,
            density,
        })
    }

    /// Counts per bin, or densities when built with `density = true`.
    #[inline]
    pub fn counts(&self) -> &[f64] {
        &self.counts
    }

    /// All `bins + 1` bin edges in ascending order.
    #[inline]
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Left edge of each bin (all edges except the last).
    #[inline]
    pub fn left_edges(&self) -> &[f64] {
        &self.edges[..self.counts.len()]
    }

    /// Midpoint of each bin.
    pub fn centers(&self) -> Vec<f64> {
        self.edges.windows(2).map(|w| 0.5 * (w[0] + w[1])).collect()
    }

    /// Nominal bin width `(hi - lo) / bins`.
    #[inline]
    pub fn bin_width(&self) -> f64 {
        (self.edges[self.counts.len()] - self.edges[0]) / self.counts.len() as f64
    }

    /// Number of bins.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the histogram has no bins.
    ///
    /// Never true for a histogram from [`Histogram::new`], which requires
    /// at least one bin.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Whether the counts are normalised to a density.
    #[inline]
    pub fn is_density(&self) -> bool {
        self.density
    }
}

/// Locates the bin of an in-range value, correcting for rounding in the
/// edge arithmetic so the result agrees with the stored edges.
fn bin_index(v: f64, edges: &[f64]) -> usize {
    let bins = edges.len() - 1;
    let lo = edges[0];
    let hi = edges[bins];

    let scaled = ((v - lo) / (hi - lo) * bins as f64).floor();
    let mut idx = if scaled < 0.0 {
        0
    } else {
        (scaled as usize).min(bins - 1)
    };

    if idx > 0 && v < edges[idx] {
        idx -= 1;
    } else if idx + 1 < bins && v >= edges[idx + 1] {
        idx += 1;
    }
    idx
}
