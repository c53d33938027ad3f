//! Engine error types

use thiserror::Error;

/// Errors surfaced by the redaction engine.
///
/// All operations are local and synchronous; none of these are retryable.
/// The only recovery path before a bake is undo, and there is no recovery
/// after one.
#[derive(Debug, Error)]
pub enum RedactError {
    /// Bake was requested with zero committed shapes. Reported to the user
    /// rather than silently ignored, since baking is the explicit terminal
    /// action of the workflow.
    #[error("no redaction regions have been drawn")]
    EmptyRedaction,

    /// The drawing surface has a zero-sized (or non-finite) rendered
    /// bounding box, so display coordinates cannot be mapped to native
    /// pixels. Pointer events hitting this are dropped.
    #[error("drawing surface has no rendered size")]
    DegenerateTransform,

    /// The document is not a raster image; no drawing surface attaches and
    /// the document passes through unredacted.
    #[error("redaction unavailable for this file type: {0}")]
    UnsupportedDocument(String),

    #[error("document index {0} out of bounds")]
    DocumentOutOfBounds(usize),

    #[error("page index {0} out of bounds")]
    PageOutOfBounds(usize),

    /// The page image has not been decoded yet.
    #[error("page {0} is not ready for drawing")]
    PageNotReady(usize),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}
