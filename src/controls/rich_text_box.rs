use crate::control::{Control, ControlId, HasRichDocument, PropertyValue};
use crate::overlay::{Background, FontSpec};
use eframe::egui;

/// Paragraph-structured document with an extractable plain-text span.
///
/// A fresh document holds one empty paragraph, so its plain text is blank
/// but not zero-length; the emptiness probe treats whitespace-only spans as
/// empty for exactly this reason.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    paragraphs: Vec<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            paragraphs: vec![String::new()],
        }
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_paragraph(&mut self, text: impl Into<String>) {
        self.paragraphs.push(text.into());
    }

    pub fn clear(&mut self) {
        self.paragraphs = vec![String::new()];
    }

    /// Flatten the document to its plain-text span. Every paragraph ends
    /// with a newline, so even a fresh document yields `"\n"`.
    pub fn plain_text(&self) -> String {
        let mut text = self.paragraphs.join("\n");
        text.push('\n');
        text
    }
}

/// Rich-text editor model.
pub struct RichTextBox {
    id: ControlId,
    pub document: Document,
    pub background: Background,
    pub font: FontSpec,
    pub size: egui::Vec2,
}

impl RichTextBox {
    pub fn new(id: ControlId) -> Self {
        Self {
            id,
            document: Document::new(),
            background: Background::default(),
            font: FontSpec::default(),
            size: egui::Vec2::ZERO,
        }
    }
}

impl Control for RichTextBox {
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

    fn as_rich_document(&self) -> Option<&dyn HasRichDocument> {
        Some(self)
    }

    fn property(&self, name: &str) -> Option<PropertyValue> {
        match name {
            "Document" => Some(PropertyValue::Text(self.document.plain_text())),
            "Width" => Some(PropertyValue::Number(self.size.x as f64)),
            "Height" => Some(PropertyValue::Number(self.size.y as f64)),
            _ => None,
        }
    }
}

impl HasRichDocument for RichTextBox {
    fn plain_text(&self) -> String {
        self.document.plain_text()
    }
}

#[cfg(test)]
mod tests {
    use super::Document;

    #[test]
    fn fresh_document_is_blank_but_not_zero_length() {
        let document = Document::new();
        assert_eq!(document.plain_text(), "\n");

        let mut document = Document::new();
        document.append_paragraph("first");
        document.append_paragraph("second");
        assert_eq!(document.plain_text(), "\nfirst\nsecond\n");

        document.clear();
        assert_eq!(document.plain_text(), "\n");
    }
}
