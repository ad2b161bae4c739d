use crate::control::{Control, ControlId, HasSecretValue, PropertyValue};
use crate::overlay::{Background, FontSpec};
use eframe::egui;

/// Password input model. The secret is exposed through the secret capability
/// only, never through the plain-text one.
pub struct PasswordBox {
    id: ControlId,
    pub password: String,
    pub background: Background,
    pub font: FontSpec,
    pub size: egui::Vec2,
}

impl PasswordBox {
    pub fn new(id: ControlId) -> Self {
        Self {
            id,
            password: String::new(),
            background: Background::default(),
            font: FontSpec::default(),
            size: egui::Vec2::ZERO,
        }
    }
}

impl Control for PasswordBox {
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

    fn as_secret(&self) -> Option<&dyn HasSecretValue> {
        Some(self)
    }

    fn property(&self, name: &str) -> Option<PropertyValue> {
        match name {
            "Password" => Some(PropertyValue::Text(self.password.clone())),
            "Width" => Some(PropertyValue::Number(self.size.x as f64)),
            "Height" => Some(PropertyValue::Number(self.size.y as f64)),
            _ => None,
        }
    }
}

impl HasSecretValue for PasswordBox {
    fn secret(&self) -> &str {
        &self.password
    }
}
