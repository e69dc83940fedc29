//! GOE sampling configuration.
//!
//! This module provides the configuration type and builder describing the
//! shape of a Monte Carlo run: how many matrices to draw and their size.

use super::error::ConfigError;

/// GOE sampling configuration.
///
/// Immutable configuration specifying the sampling shape.
/// Use [`SamplingConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use rmt_sampling::SamplingConfig;
///
/// let config = SamplingConfig::builder()
///     .n_samples(100)
///     .matrix_size(400)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.total_eigenvalues(), 40_000);
/// assert_eq!(config.sigma(), 0.05);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SamplingConfigBuilder"))]
pub struct SamplingConfig {
    /// Number of independent matrix draws.
    n_samples: usize,
    /// Dimension N of each N×N matrix.
    matrix_size: usize,
}

impl SamplingConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SamplingConfigBuilder {
        SamplingConfigBuilder::default()
    }

    /// Returns the number of matrix draws.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Returns the matrix dimension N.
    #[inline]
    pub fn matrix_size(&self) -> usize {
        self.matrix_size
    }

    /// Per-entry standard deviation `N^(-1/2)`.
    ///
    /// This scaling keeps the spectrum on `[-2, 2]` as N grows.
    #[inline]
    pub fn sigma(&self) -> f64 {
        (self.matrix_size as f64).sqrt().recip()
    }

    /// Length of the flattened eigenvalue output, `n_samples × N`.
    ///
    /// Validation guarantees the product fits in `usize`.
    #[inline]
    pub fn total_eigenvalues(&self) -> usize {
        self.n_samples * self.matrix_size
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_samples` is 0
    /// - `matrix_size` is 0
    /// - `n_samples × matrix_size` overflows `usize`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_samples == 0 {
            return Err(ConfigError::InvalidSampleCount(self.n_samples));
        }
        if self.matrix_size == 0 {
            return Err(ConfigError::InvalidMatrixSize(self.matrix_size));
        }
        if self.n_samples.checked_mul(self.matrix_size).is_none() {
            return Err(ConfigError::InvalidParameter {
                name: "n_samples",
                value: format!(
                    "{} draws of size {} overflow the output length",
                    self.n_samples, self.matrix_size
                ),
            });
        }
        Ok(())
    }
}

/// Builder for [`SamplingConfig`].
///
/// Provides a fluent API with validation at build time.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct SamplingConfigBuilder {
    n_samples: Option<usize>,
    matrix_size: Option<usize>,
}

impl SamplingConfigBuilder {
    /// Sets the number of matrix draws (at least 1).
    #[inline]
    pub fn n_samples(mut self, n_samples: usize) -> Self {
        self.n_samples = Some(n_samples);
        self
    }

    /// Sets the matrix dimension N (at least 1).
    #[inline]
    pub fn matrix_size(mut self, matrix_size: usize) -> Self {
        self.matrix_size = Some(matrix_size);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_samples` not set or zero
    /// - `matrix_size` not set or zero
    /// - the total eigenvalue count overflows `usize`
    pub fn build(self) -> Result<SamplingConfig, ConfigError> {
        let n_samples = self.n_samples.ok_or(ConfigError::InvalidParameter {
            name: "n_samples",
            value: "must be specified".to_string(),
        })?;

        let matrix_size = self.matrix_size.ok_or(ConfigError::InvalidParameter {
            name: "matrix_size",
            value: "must be specified".to_string(),
        })?;

        let config = SamplingConfig {
            n_samples,
            matrix_size,
        };

        config.validate()?;
        Ok(config)
    }
}

impl TryFrom<SamplingConfigBuilder> for SamplingConfig {
    type Error = ConfigError;

    fn try_from(builder: SamplingConfigBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_config_builder_valid() {
        let config = SamplingConfig::builder()
            .n_samples(5)
            .matrix_size(3)
            .build()
            .unwrap();

        assert_eq!(config.n_samples(), 5);
        assert_eq!(config.matrix_size(), 3);
        assert_eq!(config.total_eigenvalues(), 15);
    }

    #[test]
    fn test_sigma_scaling() {
        let config = SamplingConfig::builder()
            .n_samples(1)
            .matrix_size(100)
            .build()
            .unwrap();
        assert_relative_eq!(config.sigma(), 0.1, epsilon = 1e-15);

        let single = SamplingConfig::builder()
            .n_samples(1)
            .matrix_size(1)
            .build()
            .unwrap();
        assert_eq!(single.sigma(), 1.0);
    }

    #[test]
    fn test_config_invalid_zero_samples() {
        let result = SamplingConfig::builder().n_samples(0).matrix_size(10).build();
        assert!(matches!(result, Err(ConfigError::InvalidSampleCount(0))));
    }

    #[test]
    fn test_config_invalid_zero_matrix_size() {
        let result = SamplingConfig::builder().n_samples(10).matrix_size(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidMatrixSize(0))));
    }

    #[test]
    fn test_config_missing_samples() {
        let result = SamplingConfig::builder().matrix_size(10).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "n_samples",
                ..
            })
        ));
    }

    #[test]
    fn test_config_missing_matrix_size() {
        let result = SamplingConfig::builder().n_samples(10).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "matrix_size",
                ..
            })
        ));
    }

    #[test]
    fn test_config_overflowing_shape_rejected() {
        let result = SamplingConfig::builder()
            .n_samples(usize::MAX / 2 + 1)
            .matrix_size(2)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "n_samples",
                ..
            })
        ));

        // Largest shape whose product still fits
        let edge = SamplingConfig::builder()
            .n_samples(usize::MAX / 2)
            .matrix_size(2)
            .build()
            .unwrap();
        assert_eq!(edge.total_eigenvalues(), usize::MAX - 1);
    }

    #[test]
    fn test_try_from_builder_validates() {
        let builder = SamplingConfig::builder().n_samples(3).matrix_size(0);
        assert_eq!(
            SamplingConfig::try_from(builder),
            Err(ConfigError::InvalidMatrixSize(0))
        );
    }
}
