//! Navigation and session control
//!
//! One controller owns the ordered document list, the active
//! (document, page) position, the tool settings, and the per-page
//! [`RedactionSession`]. Navigation discards the session unconditionally:
//! unbaked annotations never survive leaving a document or page.

use image::RgbaImage;

use crate::config::{StrokeSize, ToolSettings};
use crate::document::{Document, DocumentKind};
use crate::domain::geometry::Point;
use crate::domain::shape::ShapeKind;
use crate::domain::viewport::{CoordinateMapper, Viewport};
use crate::error::RedactError;
use crate::render::{bake, preview};
use crate::session::state::RedactionSession;

/// Interaction state of the active page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// No shape in progress; navigation and bake are allowed
    Viewing,
    /// A shape is being drawn; ends on pointer-up/leave
    Drawing,
}

/// Result of an explicit bake, handed back to the document store.
///
/// The collaborator persists `image` as the new canonical representation of
/// the page; the engine keeps no shape state once this is produced.
#[derive(Clone, Debug)]
pub struct BakeOutcome {
    pub document_id: String,
    pub page_index: usize,
    pub image: RgbaImage,
}

/// Sequences redaction across an ordered list of documents and their pages.
pub struct RedactionController {
    documents: Vec<Document>,
    /// Last viewed page per document, restored when navigating back
    page_positions: Vec<usize>,
    active_document: usize,
    active_page: usize,
    session: RedactionSession,
    tools: ToolSettings,
    redraw_hook: Option<Box<dyn FnMut()>>,
}

impl RedactionController {
    /// Build a controller over the host's ordered document list. The first
    /// document (page 0) starts active with an empty session.
    pub fn new(documents: Vec<Document>) -> Self {
        Self {
            page_positions: vec![0; documents.len()],
            documents,
            active_document: 0,
            active_page: 0,
            session: RedactionSession::new(),
            tools: ToolSettings::default(),
            redraw_hook: None,
        }
    }

    /// Register the host's redraw callback. It fires after every session
    /// mutation and every navigation, and the host re-invokes
    /// [`Self::render_preview`] in response.
    pub fn set_redraw_hook(&mut self, hook: Box<dyn FnMut()>) {
        self.redraw_hook = Some(hook);
    }

    fn request_redraw(&mut self) {
        if let Some(hook) = self.redraw_hook.as_mut() {
            hook();
        }
    }

    // ------------------------------------------------------------------
    // Tools
    // ------------------------------------------------------------------

    pub fn tools(&self) -> &ToolSettings {
        &self.tools
    }

    /// Select a tool, or deselect it when already active
    pub fn toggle_tool(&mut self, kind: ShapeKind) {
        self.tools.toggle_tool(kind);
    }

    pub fn set_stroke_size(&mut self, size: StrokeSize) {
        self.tools.stroke_size = size;
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn active_document_index(&self) -> usize {
        self.active_document
    }

    pub fn active_page_index(&self) -> usize {
        self.active_page
    }

    pub fn active_document(&self) -> Option<&Document> {
        self.documents.get(self.active_document)
    }

    pub fn is_first_document(&self) -> bool {
        self.active_document == 0
    }

    pub fn is_last_document(&self) -> bool {
        self.active_document + 1 >= self.documents.len()
    }

    /// Jump to a document, discarding the current session.
    ///
    /// Only the shape session is lost: bake results live on the documents
    /// themselves, and the destination resumes at the page it was last
    /// viewed on.
    pub fn navigate_to_document(&mut self, index: usize) -> Result<(), RedactError> {
        if index >= self.documents.len() {
            return Err(RedactError::DocumentOutOfBounds(index));
        }
        log::debug!("navigating to document {index}");
        if let Some(position) = self.page_positions.get_mut(self.active_document) {
            *position = self.active_page;
        }
        self.active_document = index;
        self.active_page = self.page_positions[index];
        self.session.clear();
        self.request_redraw();
        Ok(())
    }

    /// Advance to the next document; returns false at the end of the list.
    pub fn next_document(&mut self) -> bool {
        if self.is_last_document() {
            return false;
        }
        let next = self.active_document + 1;
        self.navigate_to_document(next).is_ok()
    }

    /// Go back to the previous document; returns false at the start.
    pub fn previous_document(&mut self) -> bool {
        if self.active_document == 0 {
            return false;
        }
        let prev = self.active_document - 1;
        self.navigate_to_document(prev).is_ok()
    }

    /// Switch pages within the active document, discarding the session.
    pub fn navigate_to_page(&mut self, page_index: usize) -> Result<(), RedactError> {
        let page_count = self
            .active_document()
            .map(|d| d.page_count())
            .unwrap_or(0);
        if page_index >= page_count {
            return Err(RedactError::PageOutOfBounds(page_index));
        }
        self.active_page = page_index;
        self.session.clear();
        self.request_redraw();
        Ok(())
    }

    /// Attach a decoded image to a page, marking it ready for interaction.
    pub fn attach_page_image(
        &mut self,
        document_index: usize,
        page_index: usize,
        image: RgbaImage,
    ) -> Result<(), RedactError> {
        let document = self
            .documents
            .get_mut(document_index)
            .ok_or(RedactError::DocumentOutOfBounds(document_index))?;
        document.attach_page_image(page_index, image)?;
        self.request_redraw();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Interaction
    // ------------------------------------------------------------------

    pub fn state(&self) -> EngineState {
        if self.session.is_drawing() {
            EngineState::Drawing
        } else {
            EngineState::Viewing
        }
    }

    pub fn session(&self) -> &RedactionSession {
        &self.session
    }

    /// Why the active page cannot be drawn on, if it cannot.
    ///
    /// Hosts surface [`RedactError::UnsupportedDocument`] as "redaction
    /// unavailable for this file type" and let the document pass through
    /// unredacted.
    pub fn redaction_availability(&self) -> Result<(), RedactError> {
        let document = self
            .active_document()
            .ok_or(RedactError::DocumentOutOfBounds(self.active_document))?;
        match document.kind() {
            DocumentKind::Raster => {}
            DocumentKind::Unsupported(mime) => {
                return Err(RedactError::UnsupportedDocument(mime.clone()));
            }
        }
        if document.page_image(self.active_page).is_none() {
            return Err(RedactError::PageNotReady(self.active_page));
        }
        Ok(())
    }

    pub fn redaction_available(&self) -> bool {
        self.redaction_availability().is_ok()
    }

    /// Build a mapper for the active page from the surface's current
    /// rendered bounding box. Recomputed per pointer event, never cached.
    fn mapper(&self, viewport: Viewport) -> Result<CoordinateMapper, RedactError> {
        let document = self
            .active_document()
            .ok_or(RedactError::DocumentOutOfBounds(self.active_document))?;
        let (native_w, native_h) = document
            .native_size(self.active_page)
            .ok_or(RedactError::PageNotReady(self.active_page))?;
        CoordinateMapper::new(viewport, native_w, native_h)
    }

    /// Pointer pressed on the drawing surface. Dropped (not queued) when no
    /// tool is selected, the page is not ready, the document is not a
    /// raster, or the surface has no rendered size.
    pub fn pointer_down(&mut self, viewport: Viewport, display: Point) {
        if self.redaction_availability().is_err() || !display.is_finite() {
            return;
        }
        let Some(kind) = self.tools.active_tool else {
            return;
        };
        let Ok(mapper) = self.mapper(viewport) else {
            log::debug!("pointer event dropped: degenerate surface transform");
            return;
        };
        self.session
            .begin_shape(kind, mapper.to_native(display), self.tools.stroke_size.width());
        self.request_redraw();
    }

    /// Pointer moved while drawing. No-op outside the `Drawing` state.
    pub fn pointer_move(&mut self, viewport: Viewport, display: Point) {
        if !self.session.is_drawing() || !display.is_finite() {
            return;
        }
        let Ok(mapper) = self.mapper(viewport) else {
            return;
        };
        self.session.extend_shape(mapper.to_native(display));
        self.request_redraw();
    }

    /// Pointer released: commits the in-progress shape.
    pub fn pointer_up(&mut self) {
        if self.session.is_drawing() {
            self.session.commit_shape();
            self.request_redraw();
        }
    }

    /// Pointer left the surface mid-stroke; treated exactly like a release.
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    /// Remove the most recently committed shape
    pub fn undo(&mut self) {
        let before = self.session.revision();
        self.session.undo_last();
        if self.session.revision() != before {
            self.request_redraw();
        }
    }

    /// Discard all shapes on the active page without baking
    pub fn clear_shapes(&mut self) {
        let before = self.session.revision();
        self.session.clear();
        if self.session.revision() != before {
            self.request_redraw();
        }
    }

    // ------------------------------------------------------------------
    // Projection & bake
    // ------------------------------------------------------------------

    /// Render the live preview for the active page: base image plus all
    /// shapes, translucent. `None` while the page image is not ready or the
    /// document is not a raster.
    pub fn render_preview(&self) -> Option<RgbaImage> {
        let document = self.active_document()?;
        let base = document.page_image(self.active_page)?;
        Some(preview::render_preview(base, &self.session))
    }

    /// Bake all committed shapes into the active page.
    ///
    /// Baking is only valid from `Viewing`: a still-in-progress shape is
    /// committed first (the same transition pointer-up/leave performs), so
    /// the session clear below never destroys a live stroke. Replaces the
    /// page's base image with the new bitmap, marks the page redacted,
    /// clears the session, and hands the result to the caller for
    /// persistence. Only the displayed page is touched; other pages keep
    /// their own bake state. Irreversible once performed.
    pub fn bake(&mut self) -> Result<BakeOutcome, RedactError> {
        self.pointer_up();
        if self.session.shapes().is_empty() {
            return Err(RedactError::EmptyRedaction);
        }
        self.redaction_availability()?;

        let page_index = self.active_page;
        let document = &mut self.documents[self.active_document];
        // Availability was just checked, so the page image exists
        let base = document
            .page_image(page_index)
            .ok_or(RedactError::PageNotReady(page_index))?;

        let baked = bake::bake(&mut self.session, base)?;
        document.replace_page_image(page_index, baked.clone());
        log::debug!(
            "document {} page {page_index} baked and swapped",
            document.id()
        );

        let outcome = BakeOutcome {
            document_id: document.id().to_string(),
            page_index,
            image: baked,
        };
        self.request_redraw();
        Ok(outcome)
    }
}
