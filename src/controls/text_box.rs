use crate::control::{Control, ControlId, HasTextValue, PropertyValue};
use crate::overlay::{Background, FontSpec};
use eframe::egui;

/// Single-line text input model.
pub struct TextBox {
    id: ControlId,
    pub text: String,
    pub background: Background,
    pub font: FontSpec,
    pub size: egui::Vec2,
}

impl TextBox {
    pub fn new(id: ControlId) -> Self {
        Self {
            id,
            text: String::new(),
            background: Background::default(),
            font: FontSpec::default(),
            size: egui::Vec2::ZERO,
        }
    }
}

impl Control for TextBox {
    fn id(&self) -> ControlId {
        self.id
    }

    fn background(&self) -> Background {
        self.background.clone()
    }

    fn set_background(&mut self, background: Background) {
        self.background = background;
    }

    fn font(&self) -> Option<FontSpec> {
        Some(self.font.clone())
    }

    fn size(&self) -> Option<egui::Vec2> {
        Some(self.size)
    }

    fn as_text(&self) -> Option<&dyn HasTextValue> {
        Some(self)
    }

    fn property(&self, name: &str) -> Option<PropertyValue> {
        match name {
            "Text" => Some(PropertyValue::Text(self.text.clone())),
            "Width" => Some(PropertyValue::Number(self.size.x as f64)),
            "Height" => Some(PropertyValue::Number(self.size.y as f64)),
            _ => None,
        }
    }
}

impl HasTextValue for TextBox {
    fn text(&self) -> &str {
        &self.text
    }
}
