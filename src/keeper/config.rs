//! Keep-policy configuration.

use thiserror::Error;

use crate::asset::DEFAULT_MIME_PRIORITY;

/// Errors raised by [`KeeperConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("mime_priority[{index}] is empty")]
    EmptyMimeType { index: usize },

    #[error("mime type {mime:?} is listed more than once")]
    DuplicateMimeType { mime: String },
}

/// Configuration for the [`AssetRanker`](super::AssetRanker).
///
/// The default reproduces the standard keep policy: HEIC preferred over
/// HEIF, every other type equal.
///
/// # Examples
///
/// ```
/// use dupe_keeper::keeper::KeeperConfig;
///
/// let config = KeeperConfig::default()
///     .with_mime_priority(["image/avif", "image/heic", "image/heif"]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeeperConfig {
    /// MIME types in preference order, most preferred first.
    ///
    /// Matched case-insensitively. Unlisted types rank below all listed
    /// ones and equal to each other.
    pub mime_priority: Vec<String>,

    /// Whether batch selection fans groups out over rayon.
    ///
    /// Only honoured when the crate is built with the `parallel` feature.
    pub parallel: bool,
}

impl Default for KeeperConfig {
    fn default() -> Self {
        Self {
            mime_priority: DEFAULT_MIME_PRIORITY.iter().map(|s| s.to_string()).collect(),
            parallel: false,
        }
    }
}

impl KeeperConfig {
    pub fn with_mime_priority<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mime_priority = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, mime) in self.mime_priority.iter().enumerate() {
            if mime.trim().is_empty() {
                return Err(ConfigError::EmptyMimeType { index });
            }
            let repeated = self.mime_priority[..index]
                .iter()
                .any(|earlier| earlier.eq_ignore_ascii_case(mime));
            if repeated {
                return Err(ConfigError::DuplicateMimeType { mime: mime.clone() });
            }
        }
        Ok(())
    }
}
