//! Image persistence error types.

/// Kinds of image file errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ImageErrorKind {
    /// Save invoked on a record whose bytes were already written
    #[display("Image '{}' has already been saved", _0)]
    AlreadySaved(String),
    /// Failed to create the image directory
    #[display("Failed to create image directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write the image file
    #[display("Failed to write image: {}", _0)]
    FileWrite(String),
    /// Failed to read the image file
    #[display("Failed to read image: {}", _0)]
    FileRead(String),
    /// Image file not found at the recorded path
    #[display("Image not found: {}", _0)]
    NotFound(String),
}

/// Image error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Image Error: {} at line {} in {}", kind, line, file)]
pub struct ImageError {
    /// The kind of error that occurred
    pub kind: ImageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ImageError {
    /// Create a new image error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ImageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
