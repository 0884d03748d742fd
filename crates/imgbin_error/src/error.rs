//! Top-level error wrapper types.

use crate::{ConfigError, ImageError, ServerError, StoreError};

/// The foundation error enum for the imgbin workspace.
///
/// # Examples
///
/// ```
/// use imgbin_error::{ImgbinError, ConfigError};
///
/// let cfg_err = ConfigError::new("snapshot path not set");
/// let err: ImgbinError = cfg_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ImgbinErrorKind {
    /// Record store error
    #[from(StoreError)]
    Store(StoreError),
    /// Image file error
    #[from(ImageError)]
    Image(ImageError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// HTTP server error
    #[from(ServerError)]
    Server(ServerError),
}

/// Imgbin error with kind discrimination.
///
/// # Examples
///
/// ```
/// use imgbin_error::{ImgbinResult, ConfigError};
///
/// fn might_fail() -> ImgbinResult<()> {
///     Err(ConfigError::new("missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Imgbin Error: {}", _0)]
pub struct ImgbinError(Box<ImgbinErrorKind>);

impl ImgbinError {
    /// Create a new error from a kind.
    pub fn new(kind: ImgbinErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ImgbinErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ImgbinErrorKind
impl<T> From<T> for ImgbinError
where
    T: Into<ImgbinErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for imgbin operations.
///
/// # Examples
///
/// ```
/// use imgbin_error::{ImgbinResult, ConfigError};
///
/// fn load_settings() -> ImgbinResult<()> {
///     Err(ConfigError::new("landing page not found"))?
/// }
/// ```
pub type ImgbinResult<T> = std::result::Result<T, ImgbinError>;
