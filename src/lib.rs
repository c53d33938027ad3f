//! Document redaction engine.
//!
//! Before a scanned clinical document is digitized, the user draws opaque
//! regions over sensitive areas and bakes them permanently into the pixel
//! data. This crate owns the drawing state, coordinate mapping, live preview
//! rendering, the irreversible bake, and sequencing across documents and
//! pages. Everything else (routing, storage, upload, the widget tree) belongs
//! to the host UI.
//!
//! Typical flow: the host builds a [`RedactionController`] from an ordered
//! document list, feeds it pointer events (with the drawing surface's current
//! rendered bounding box), redraws from [`RedactionController::render_preview`]
//! whenever the redraw hook fires, and persists the bitmap returned by
//! [`RedactionController::bake`].

pub mod config;
pub mod controller;
pub mod document;
pub mod domain;
pub mod error;
pub mod render;
pub mod session;

pub use config::{StrokeSize, ToolSettings};
pub use controller::{BakeOutcome, EngineState, RedactionController};
pub use document::{Document, DocumentKind};
pub use domain::geometry::Point;
pub use domain::shape::{RedactionShape, ShapeId, ShapeKind};
pub use domain::viewport::{CoordinateMapper, Viewport};
pub use error::RedactError;
pub use session::state::RedactionSession;
