//! Documents and pages consumed by the redaction engine
//!
//! The upload collaborator owns the canonical files; the engine works on an
//! in-memory view of them: per-page raster images plus a flag remembering
//! whether a page has been redacted. Non-raster kinds are represented but
//! never get a drawing surface.

use image::RgbaImage;
use std::io::Cursor;

use crate::error::RedactError;

/// MIME-derived document classification
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocumentKind {
    /// A raster image; redaction operates on its pixels
    Raster,
    /// Anything else passes through the workflow unredacted
    Unsupported(String),
}

impl DocumentKind {
    /// Classify a MIME-like kind string
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("image/") {
            DocumentKind::Raster
        } else {
            DocumentKind::Unsupported(mime.to_string())
        }
    }
}

/// One page of a document.
///
/// The image is `None` until the host finishes decoding it; pointer
/// interaction on a pending page is dropped.
#[derive(Clone, Debug, Default)]
struct Page {
    image: Option<RgbaImage>,
    redacted: bool,
}

/// A document in the review queue: identity, kind, and its page images.
#[derive(Clone, Debug)]
pub struct Document {
    id: String,
    name: String,
    kind: DocumentKind,
    pages: Vec<Page>,
}

impl Document {
    /// Create a raster document whose pages have not been decoded yet.
    pub fn new_raster(id: impl Into<String>, name: impl Into<String>, page_count: usize) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: DocumentKind::Raster,
            pages: vec![Page::default(); page_count.max(1)],
        }
    }

    /// Create a single-page raster document from an already decoded image.
    pub fn from_image(id: impl Into<String>, name: impl Into<String>, image: RgbaImage) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: DocumentKind::Raster,
            pages: vec![Page {
                image: Some(image),
                redacted: false,
            }],
        }
    }

    /// Create a multi-page raster document from an ordered page list.
    pub fn from_pages(
        id: impl Into<String>,
        name: impl Into<String>,
        pages: Vec<RgbaImage>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: DocumentKind::Raster,
            pages: pages
                .into_iter()
                .map(|image| Page {
                    image: Some(image),
                    redacted: false,
                })
                .collect(),
        }
    }

    /// Create a non-raster document. It carries no pages and never gets a
    /// drawing surface, whatever the mime string says; raster documents go
    /// through [`Document::new_raster`] or the image constructors.
    pub fn unsupported(id: impl Into<String>, name: impl Into<String>, mime: &str) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: DocumentKind::Unsupported(mime.to_string()),
            pages: Vec::new(),
        }
    }

    /// Decode source bytes into a drawable bitmap.
    ///
    /// This is the engine's one asynchronous boundary: hosts run it off the
    /// UI thread for large scans and attach the result when done.
    pub fn decode_image(bytes: &[u8]) -> Result<RgbaImage, RedactError> {
        let rgba = image::load_from_memory(bytes)?.to_rgba8();
        log::debug!("decoded page image: {}x{} pixels", rgba.width(), rgba.height());
        Ok(rgba)
    }

    /// Attach a decoded image to a page, marking it ready for drawing.
    pub fn attach_page_image(
        &mut self,
        page_index: usize,
        image: RgbaImage,
    ) -> Result<(), RedactError> {
        match self.kind {
            DocumentKind::Raster => {}
            DocumentKind::Unsupported(ref mime) => {
                return Err(RedactError::UnsupportedDocument(mime.clone()));
            }
        }
        let page = self
            .pages
            .get_mut(page_index)
            .ok_or(RedactError::PageOutOfBounds(page_index))?;
        page.image = Some(image);
        Ok(())
    }

    /// Swap in a freshly baked bitmap as the page's new base image and
    /// remember that redaction has occurred.
    pub(crate) fn replace_page_image(&mut self, page_index: usize, image: RgbaImage) {
        if let Some(page) = self.pages.get_mut(page_index) {
            page.image = Some(image);
            page.redacted = true;
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &DocumentKind {
        &self.kind
    }

    /// True when this document's pixels can be redacted
    pub fn supports_redaction(&self) -> bool {
        self.kind == DocumentKind::Raster
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// True for raster documents with more than one page
    pub fn is_multi_page(&self) -> bool {
        self.pages.len() > 1
    }

    /// The page's current base image: the original, or the output of a
    /// previous bake. `None` while decoding is still pending.
    pub fn page_image(&self, page_index: usize) -> Option<&RgbaImage> {
        self.pages.get(page_index)?.image.as_ref()
    }

    /// Native resolution of a page, once decoded
    pub fn native_size(&self, page_index: usize) -> Option<(u32, u32)> {
        let image = self.page_image(page_index)?;
        Some((image.width(), image.height()))
    }

    /// Whether a page has been baked at least once
    pub fn page_redacted(&self, page_index: usize) -> bool {
        self.pages
            .get(page_index)
            .map(|p| p.redacted)
            .unwrap_or(false)
    }

    /// Encode a page's current base image as PNG for the document store.
    pub fn encode_page_png(&self, page_index: usize) -> Result<Vec<u8>, RedactError> {
        let image = self
            .page_image(page_index)
            .ok_or(RedactError::PageNotReady(page_index))?;
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }
}
