use crate::control::Control;

/// Decide whether a control's observable value counts as empty.
///
/// With an explicit property name the named attribute is compared against
/// its type's zero/default; a control that lacks the attribute is reported
/// non-empty, so a bad declaration can never make a watermark stick. A blank
/// or whitespace-only name counts as undeclared.
///
/// Without one, a fixed priority list of value capabilities is probed
/// (secret, rich document, selection, plain text) and the first capability
/// the control exposes with an empty value wins. A control exposing none of
/// them is treated as non-empty and simply never shows a watermark.
pub fn is_empty(control: &dyn Control, explicit_property: Option<&str>) -> bool {
    match explicit_property.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => property_is_default(control, name),
        None => probe_capabilities(control),
    }
}

fn property_is_default(control: &dyn Control, name: &str) -> bool {
    match control.property(name) {
        Some(value) => value.is_default(),
        None => false,
    }
}

fn probe_capabilities(control: &dyn Control) -> bool {
    if let Some(secret) = control.as_secret() {
        if secret.secret().is_empty() {
            return true;
        }
    }

    if let Some(document) = control.as_rich_document() {
        if document.plain_text().trim().is_empty() {
            return true;
        }
    }

    if let Some(selection) = control.as_selection() {
        if selection.selected_item().is_none() {
            return true;
        }
    }

    match control.as_text() {
        Some(text) => text.text().is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::is_empty;
    use crate::control::{Control, ControlId, HasSecretValue, HasTextValue, PropertyValue};
    use crate::controls::{ComboBox, PasswordBox, RichTextBox, TextBox};
    use crate::overlay::Background;

    struct Bare;

    impl Control for Bare {
        fn id(&self) -> ControlId {
            ControlId(0)
        }

        fn background(&self) -> Background {
            Background::default()
        }

        fn set_background(&mut self, _background: Background) {}
    }

    #[test]
    fn empty_secret_wins_first() {
        let control = PasswordBox::new(ControlId(1));
        assert!(is_empty(&control, None));

        let mut control = PasswordBox::new(ControlId(1));
        control.password = "hunter2".into();
        assert!(!is_empty(&control, None));
    }

    #[test]
    fn whitespace_document_is_empty() {
        let mut control = RichTextBox::new(ControlId(2));
        control.document.append_paragraph("  \t ");
        assert!(is_empty(&control, None));

        control.document.append_paragraph("notes");
        assert!(!is_empty(&control, None));
    }

    #[test]
    fn unset_selection_is_empty() {
        let mut control = ComboBox::new(ControlId(3), vec!["a".into(), "b".into()]);
        assert!(is_empty(&control, None));

        control.select(0);
        assert!(!is_empty(&control, None));
    }

    #[test]
    fn plain_text_probed_last() {
        let control = TextBox::new(ControlId(4));
        assert!(is_empty(&control, None));

        let mut control = TextBox::new(ControlId(4));
        control.text = "Alice".into();
        assert!(!is_empty(&control, None));
    }

    #[test]
    fn capability_less_control_is_never_empty() {
        assert!(!is_empty(&Bare, None));
    }

    #[test]
    fn explicit_selected_item_property() {
        let mut control = ComboBox::new(ControlId(5), vec!["a".into(), "b".into()]);
        assert!(is_empty(&control, Some("SelectedItem")));

        control.select(1);
        assert!(!is_empty(&control, Some("SelectedItem")));
    }

    #[test]
    fn missing_explicit_property_fails_safe() {
        let control = TextBox::new(ControlId(6));
        // Empty text, but the declared property does not exist on the kind.
        assert!(!is_empty(&control, Some("Password")));
    }

    #[test]
    fn blank_explicit_property_uses_fallback() {
        let control = TextBox::new(ControlId(7));
        assert!(is_empty(&control, Some("   ")));
    }

    #[test]
    fn non_empty_secret_falls_through_to_later_probes() {
        // A kind with both a secret and a plain text value: the filled secret
        // does not decide, the empty text does.
        struct Both {
            password: String,
            text: String,
        }

        impl Control for Both {
            fn id(&self) -> ControlId {
                ControlId(8)
            }

            fn background(&self) -> Background {
                Background::default()
            }

            fn set_background(&mut self, _background: Background) {}

            fn as_secret(&self) -> Option<&dyn HasSecretValue> {
                Some(self)
            }

            fn as_text(&self) -> Option<&dyn HasTextValue> {
                Some(self)
            }

            fn property(&self, name: &str) -> Option<PropertyValue> {
                match name {
                    "Password" => Some(PropertyValue::Text(self.password.clone())),
                    "Text" => Some(PropertyValue::Text(self.text.clone())),
                    _ => None,
                }
            }
        }

        impl HasSecretValue for Both {
            fn secret(&self) -> &str {
                &self.password
            }
        }

        impl HasTextValue for Both {
            fn text(&self) -> &str {
                &self.text
            }
        }

        let control = Both {
            password: "set".into(),
            text: String::new(),
        };
        assert!(is_empty(&control, None));

        let control = Both {
            password: "set".into(),
            text: "typed".into(),
        };
        assert!(!is_empty(&control, None));
    }
}
