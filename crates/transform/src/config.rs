use thiserror::Error;

/// Configuration for a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_len: usize,
}

/// Errors that can occur when validating a transform config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_len must be positive")]
    ZeroMaxLen,
}

impl Default for Config {
    fn default() -> Self {
        Self::unlimited()
    }
}

impl Config {
    /// Creates a config that rejects inputs longer than `max_len`.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_len` is zero.
    pub fn new(max_len: usize) -> Result<Self, ConfigError> {
        if max_len == 0 {
            return Err(ConfigError::ZeroMaxLen);
        }

        Ok(Self { max_len })
    }

    /// Creates a config with no length limit.
    #[must_use]
    pub fn unlimited() -> Self {
        Self { max_len: usize::MAX }
    }

    /// Returns the maximum accepted input length.
    #[must_use]
    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_max_len_is_rejected() {
        assert_eq!(Config::new(0), Err(ConfigError::ZeroMaxLen));
    }

    #[test]
    fn default_is_unlimited() {
        assert_eq!(Config::default().max_len(), usize::MAX);
        assert_eq!(Config::new(3).unwrap().max_len(), 3);
    }
}
