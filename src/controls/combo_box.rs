use crate::control::{Control, ControlId, HasSelection, PropertyValue};
use crate::overlay::{Background, FontSpec};
use eframe::egui;

/// Single-selection list model. Starts with nothing selected.
pub struct ComboBox {
    id: ControlId,
    pub items: Vec<String>,
    selected: Option<usize>,
    pub background: Background,
    pub font: FontSpec,
    pub size: egui::Vec2,
}

impl ComboBox {
    pub fn new(id: ControlId, items: Vec<String>) -> Self {
        Self {
            id,
            items,
            selected: None,
            background: Background::default(),
            font: FontSpec::default(),
            size: egui::Vec2::ZERO,
        }
    }

    /// Select an item by index. Out-of-range indices clear the selection.
    pub fn select(&mut self, index: usize) {
        self.selected = (index < self.items.len()).then_some(index);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.map(|index| self.items[index].as_str())
    }
}

impl Control for ComboBox {
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

    fn as_selection(&self) -> Option<&dyn HasSelection> {
        Some(self)
    }

    fn property(&self, name: &str) -> Option<PropertyValue> {
        match name {
            "SelectedItem" => Some(PropertyValue::Item(
                self.selected().map(str::to_owned),
            )),
            "Width" => Some(PropertyValue::Number(self.size.x as f64)),
            "Height" => Some(PropertyValue::Number(self.size.y as f64)),
            _ => None,
        }
    }
}

impl HasSelection for ComboBox {
    fn selected_item(&self) -> Option<&str> {
        self.selected()
    }
}
