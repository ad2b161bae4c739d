use crate::control::Control;
use eframe::egui;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Foreground used for text watermarks.
pub const WATERMARK_FOREGROUND: egui::Color32 = egui::Color32::GRAY;

/// How a control's background is painted.
///
/// The behavior only ever swaps between the solid paint a control started
/// with and a [`WatermarkBrush`] wrapping the overlay visual.
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    Solid(egui::Color32),
    Watermark(WatermarkBrush),
}

impl Default for Background {
    fn default() -> Self {
        Background::Solid(egui::Color32::WHITE)
    }
}

impl Background {
    /// The overlay painted by this background, if it is a watermark brush.
    pub fn overlay(&self) -> Option<&Arc<Overlay>> {
        match self {
            Background::Watermark(brush) => Some(&brush.visual),
            Background::Solid(_) => None,
        }
    }
}

/// Scaling applied when a brush paints its visual into the control bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stretch {
    /// Paint at natural size, no scaling.
    #[default]
    None,
    /// Scale to fill the bounds, ignoring aspect ratio.
    Fill,
    /// Scale uniformly until the visual fits the bounds.
    Uniform,
}

/// Background that paints an [`Overlay`] instead of a solid color.
#[derive(Debug, Clone, PartialEq)]
pub struct WatermarkBrush {
    pub visual: Arc<Overlay>,
    pub stretch: Stretch,
}

impl WatermarkBrush {
    pub fn new(visual: Arc<Overlay>) -> Self {
        Self {
            visual,
            stretch: Stretch::None,
        }
    }
}

/// Font attributes mirrored from a control onto its text overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub font_id: egui::FontId,
    pub italic: bool,
    /// Horizontal stretch factor, `1.0` is normal width.
    pub stretch: f32,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            font_id: egui::FontId::default(),
            italic: false,
            stretch: 1.0,
        }
    }
}

/// Source of a caller-supplied watermark visual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementSource {
    /// Styled text provided by the host.
    Text(String),
    /// Path or URI of an image the host painter understands.
    Image(String),
}

/// A caller-supplied visual used instead of the standard text label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub source: ElementSource,
    /// Layout size `(width, height)` when the element exposes one. `None`
    /// means the element has no explicit layout box and is left alone.
    #[serde(default)]
    pub size: Option<(f32, f32)>,
}

impl Element {
    pub fn text(source: impl Into<String>) -> Self {
        Self {
            source: ElementSource::Text(source.into()),
            size: Some((0.0, 0.0)),
        }
    }

    pub fn image(source: impl Into<String>) -> Self {
        Self {
            source: ElementSource::Image(source.into()),
            size: Some((0.0, 0.0)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OverlayContent {
    Text(String),
    Element(Element),
}

/// The visual shown in place of a control's content while it is empty.
///
/// Built once per registration and reused across every show/hide cycle, so
/// the copied font metrics never drift from what was captured at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub content: OverlayContent,
    pub foreground: egui::Color32,
    /// Original control background the label paints behind its text; `None`
    /// for element overlays, which bring their own look.
    pub background: Option<Background>,
    pub font: FontSpec,
    /// Label size; zero when the control exposes no layout size.
    pub size: egui::Vec2,
}

impl Overlay {
    /// Watermark text, when this is a text overlay.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            OverlayContent::Text(text) => Some(text),
            OverlayContent::Element(_) => None,
        }
    }
}

/// Build the standard gray text label for `control`.
///
/// Font metrics and size are copied from the control when it exposes them;
/// anything the control kind lacks stays at the overlay's own defaults, the
/// size at zero. `original_background` is the paint captured at registration
/// time, not whatever the control shows right now.
pub fn text_overlay(
    control: &dyn Control,
    original_background: &Background,
    text: &str,
) -> Overlay {
    Overlay {
        content: OverlayContent::Text(text.to_owned()),
        foreground: WATERMARK_FOREGROUND,
        background: Some(original_background.clone()),
        font: control.font().unwrap_or_default(),
        size: control.size().unwrap_or(egui::Vec2::ZERO),
    }
}

/// Wrap a caller-supplied element as the overlay for `control`.
///
/// Only the element's layout size is touched: when it exposes one it is set
/// from the control's size, defaulting to zero if the control has none.
pub fn element_overlay(control: &dyn Control, mut element: Element) -> Overlay {
    if element.size.is_some() {
        let size = control.size().unwrap_or(egui::Vec2::ZERO);
        element.size = Some((size.x, size.y));
    }
    Overlay {
        content: OverlayContent::Element(element),
        foreground: egui::Color32::BLACK,
        background: None,
        font: FontSpec::default(),
        size: egui::Vec2::ZERO,
    }
}
