//! Tool settings for the redaction workspace
//!
//! The engine holds the active tool and freehand stroke size; everything is
//! serde-serializable so the host can persist the user's last-used settings.

use serde::{Deserialize, Serialize};

use crate::domain::shape::ShapeKind;

/// Freehand stroke size presets, in native pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StrokeSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl StrokeSize {
    /// Stroke width in native pixels
    pub fn width(self) -> f32 {
        match self {
            StrokeSize::Small => 8.0,
            StrokeSize::Medium => 16.0,
            StrokeSize::Large => 24.0,
        }
    }

    /// Human-readable label for toolbars
    pub fn label(self) -> &'static str {
        match self {
            StrokeSize::Small => "Small",
            StrokeSize::Medium => "Medium",
            StrokeSize::Large => "Large",
        }
    }
}

/// Active drawing tool state
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ToolSettings {
    /// Currently selected tool, or `None` when drawing is disabled (the
    /// host typically hands pointer events to pan/zoom instead)
    pub active_tool: Option<ShapeKind>,
    /// Stroke size applied to freehand shapes at creation time
    pub stroke_size: StrokeSize,
}

impl ToolSettings {
    /// Select a tool, or deselect it when it is already active (toolbar
    /// buttons act as toggles).
    pub fn toggle_tool(&mut self, kind: ShapeKind) {
        if self.active_tool == Some(kind) {
            self.active_tool = None;
        } else {
            self.active_tool = Some(kind);
        }
    }
}
