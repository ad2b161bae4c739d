use crate::overlay::{Background, FontSpec};
use eframe::egui;

/// Stable identity token the host assigns to each control instance.
///
/// Registry keys and event dispatch use this token, never a hash of the
/// control's contents, so two controls can never be conflated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(pub u64);

/// Snapshot of a named value-bearing attribute, used by the explicit
/// emptiness path.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Text(String),
    Number(f64),
    /// A selection-like slot; `None` when nothing is chosen.
    Item(Option<String>),
}

impl PropertyValue {
    /// Whether the value equals its type's zero/default.
    pub fn is_default(&self) -> bool {
        match self {
            PropertyValue::Text(text) => text.is_empty(),
            PropertyValue::Number(value) => *value == 0.0,
            PropertyValue::Item(item) => item.is_none(),
        }
    }
}

/// What the behavior consumes from a host control.
///
/// Everything beyond identity and background is optional: a control kind
/// reports only the attributes and value capabilities it really has, and
/// every consumer degrades to a default when an accessor returns `None`.
/// The background setter is the single mutation the behavior performs.
pub trait Control {
    fn id(&self) -> ControlId;

    fn background(&self) -> Background;

    fn set_background(&mut self, background: Background);

    /// Font metrics, when the control kind has any. Observation only.
    fn font(&self) -> Option<FontSpec> {
        None
    }

    /// Explicit layout size, when the control kind has one. Observation only.
    fn size(&self) -> Option<egui::Vec2> {
        None
    }

    /// Secret/password capability, probed first by the emptiness fallback.
    fn as_secret(&self) -> Option<&dyn HasSecretValue> {
        None
    }

    /// Rich-document capability, probed second.
    fn as_rich_document(&self) -> Option<&dyn HasRichDocument> {
        None
    }

    /// Single-selection capability, probed third.
    fn as_selection(&self) -> Option<&dyn HasSelection> {
        None
    }

    /// Plain-text capability, probed last.
    fn as_text(&self) -> Option<&dyn HasTextValue> {
        None
    }

    /// Look up a named value-bearing attribute. `None` when the control kind
    /// has no such attribute; never an error.
    fn property(&self, _name: &str) -> Option<PropertyValue> {
        None
    }
}

/// Holds a secret value that must not leak through the plain-text capability.
pub trait HasSecretValue {
    fn secret(&self) -> &str;
}

/// Holds a structured document with an extractable plain-text span.
pub trait HasRichDocument {
    fn plain_text(&self) -> String;
}

/// Holds a single-selection slot.
pub trait HasSelection {
    fn selected_item(&self) -> Option<&str>;
}

/// Holds a plain text value.
pub trait HasTextValue {
    fn text(&self) -> &str;
}
