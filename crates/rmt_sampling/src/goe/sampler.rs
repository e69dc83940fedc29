//! Monte Carlo sampler of GOE eigenvalues.
//!
//! Each draw builds an `N×N` matrix `X` with i.i.d. N(0, σ²) entries,
//! σ = N^(-1/2), symmetrises it as `Xs = (X + Xᵀ) / √2`, and records the
//! eigenvalues of `Xs` from a symmetric eigensolver (so they are real by
//! construction), sorted ascending and narrowed to `f32`.

use super::config::SamplingConfig;
use super::error::{ConfigError, SamplingError};
use nalgebra::DMatrix;
use rand::Rng;
use rand_distr::Normal;
use std::f64::consts::SQRT_2;
use std::slice::ChunksExact;
use tracing::{debug, trace};

/// Flattened eigenvalues of `n_samples` independent GOE draws.
///
/// Draw `k` occupies `values[k * N..(k + 1) * N]`, sorted ascending.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SampleData"))]
pub struct EigenvalueSample {
    values: Vec<f32>,
    n_samples: usize,
    matrix_size: usize,
}

/// Unchecked wire form of [`EigenvalueSample`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SampleData {
    values: Vec<f32>,
    n_samples: usize,
    matrix_size: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<SampleData> for EigenvalueSample {
    type Error = ConfigError;

    fn try_from(data: SampleData) -> Result<Self, Self::Error> {
        let config = SamplingConfig::builder()
            .n_samples(data.n_samples)
            .matrix_size(data.matrix_size)
            .build()?;
        if data.values.len() != config.total_eigenvalues() {
            return Err(ConfigError::InvalidParameter {
                name: "values",
                value: format!(
                    "expected {} eigenvalues, found {}",
                    config.total_eigenvalues(),
                    data.values.len()
                ),
            });
        }
        Ok(Self {
            values: data.values,
            n_samples: data.n_samples,
            matrix_size: data.matrix_size,
        })
    }
}

impl EigenvalueSample {
    /// All eigenvalues, draw after draw.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Consumes the sample, returning the flat eigenvalue vector.
    #[inline]
    pub fn into_vec(self) -> Vec<f32> {
        self.values
    }

    /// Iterates over the per-draw eigenvalue slices.
    #[inline]
    pub fn draws(&self) -> ChunksExact<'_, f32> {
        self.values.chunks_exact(self.matrix_size)
    }

    /// Number of draws.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Matrix dimension N.
    #[inline]
    pub fn matrix_size(&self) -> usize {
        self.matrix_size
    }

    /// Total number of eigenvalues, `n_samples × N`.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the sample holds no eigenvalues.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// GOE eigenvalue sampler for a fixed sampling shape.
///
/// The sampler owns no random state; every call to [`GoeSampler::sample`]
/// consumes the caller's generator.
///
/// # Examples
///
/// ```rust
/// use rmt_sampling::{GoeSampler, SamplingConfig, SpectrumRng};
///
/// let config = SamplingConfig::builder().n_samples(4).matrix_size(8).build().unwrap();
/// let sampler = GoeSampler::new(config);
///
/// let sample = sampler.sample(&mut SpectrumRng::from_seed(1)).unwrap();
/// assert_eq!(sample.len(), 32);
/// assert_eq!(sample.draws().count(), 4);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GoeSampler {
    config: SamplingConfig,
}

impl GoeSampler {
    /// Creates a sampler for the given configuration.
    #[inline]
    pub fn new(config: SamplingConfig) -> Self {
        Self { config }
    }

    /// Returns the sampling configuration.
    #[inline]
    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }

    /// Draws `n_samples` matrices and collects their eigenvalues.
    ///
    /// # Errors
    ///
    /// - `SamplingError::Config` if the configuration fails validation
    /// - `SamplingError::Distribution` if the entry scale is rejected
    pub fn sample<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<EigenvalueSample, SamplingError> {
        self.config.validate()?;

        let n_samples = self.config.n_samples();
        let n = self.config.matrix_size();
        let sigma = self.config.sigma();
        let entries = entry_distribution(sigma)?;

        debug!(n_samples, matrix_size = n, sigma, "Starting GOE sampling");

        let mut values = Vec::with_capacity(self.config.total_eigenvalues());
        for draw in 0..n_samples {
            let xs = symmetrised_draw(n, entries, rng);
            let eigenvalues = sorted_eigenvalues(&xs);
            trace!(
                draw,
                min = ?eigenvalues.first(),
                max = ?eigenvalues.last(),
                "GOE draw complete"
            );
            values.extend(eigenvalues.into_iter().map(|l| l as f32));
        }

        debug!(total = values.len(), "GOE sampling complete");

        Ok(EigenvalueSample {
            values,
            n_samples,
            matrix_size: n,
        })
    }
}

/// Samples GOE eigenvalues for `n_samples` independent `N×N` matrices.
///
/// Returns a flat vector of length `n_samples × N`; each consecutive block
/// of `N` values is one draw, sorted ascending.
///
/// # Errors
///
/// Returns `SamplingError::Config` if `n_samples` or `n` is zero.
///
/// # Examples
///
/// ```rust
/// use rmt_sampling::{rm_sampling, SpectrumRng};
///
/// let mut rng = SpectrumRng::from_seed(42);
/// assert_eq!(rm_sampling(1, 2, &mut rng).unwrap().len(), 2);
/// assert_eq!(rm_sampling(5, 3, &mut rng).unwrap().len(), 15);
/// assert!(rm_sampling(0, 3, &mut rng).is_err());
/// ```
pub fn rm_sampling<R: Rng + ?Sized>(
    n_samples: usize,
    n: usize,
    rng: &mut R,
) -> Result<Vec<f32>, SamplingError> {
    let config = SamplingConfig::builder()
        .n_samples(n_samples)
        .matrix_size(n)
        .build()?;

    Ok(GoeSampler::new(config).sample(rng)?.into_vec())
}

/// Draws a single symmetrised GOE matrix `Xs = (X + Xᵀ) / √2` of size `n`.
///
/// Off-diagonal entries of `Xs` have variance `1/n`, diagonal entries `2/n`.
///
/// # Errors
///
/// Returns `SamplingError::Config` if `n` is zero.
pub fn sample_matrix<R: Rng + ?Sized>(
    n: usize,
    rng: &mut R,
) -> Result<DMatrix<f64>, SamplingError> {
    if n == 0 {
        return Err(ConfigError::InvalidMatrixSize(n).into());
    }
    let sigma = (n as f64).sqrt().recip();
    Ok(symmetrised_draw(n, entry_distribution(sigma)?, rng))
}

fn entry_distribution(sigma: f64) -> Result<Normal<f64>, SamplingError> {
    Normal::new(0.0, sigma).map_err(|e| SamplingError::Distribution(e.to_string()))
}

fn symmetrised_draw<R: Rng + ?Sized>(
    n: usize,
    entries: Normal<f64>,
    rng: &mut R,
) -> DMatrix<f64> {
    let x = DMatrix::from_fn(n, n, |_, _| rng.sample(entries));
    (&x + x.transpose()) / SQRT_2
}

/// Eigenvalues of a symmetric matrix in ascending order.
fn sorted_eigenvalues(xs: &DMatrix<f64>) -> Vec<f64> {
    let mut eigenvalues: Vec<f64> = xs.symmetric_eigenvalues().iter().copied().collect();
    eigenvalues.sort_by(f64::total_cmp);
    eigenvalues
}
