use crate::control::{Control, ControlId};
use crate::emptiness;
use crate::options::WatermarkOptions;
use crate::overlay::{self, Background, Overlay, WatermarkBrush};
use std::collections::HashMap;
use std::sync::Arc;

/// Lifecycle and focus events the host forwards per control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    Loaded,
    FocusGained,
    FocusLost,
}

/// Per-control tracking record: the original look plus the overlay built for
/// it at registration time.
#[derive(Debug, Clone)]
pub struct ControlState {
    control: ControlId,
    original_background: Background,
    overlay: Arc<Overlay>,
}

impl ControlState {
    pub fn control(&self) -> ControlId {
        self.control
    }

    /// Background captured when the control loaded; immutable afterwards.
    pub fn original_background(&self) -> &Background {
        &self.original_background
    }

    /// The overlay built once for this registration and reused across every
    /// show/hide cycle.
    pub fn overlay(&self) -> &Arc<Overlay> {
        &self.overlay
    }
}

/// The attached-behavior surface.
///
/// Owns the registry of [`ControlState`] records and drives overlay
/// show/hide from the events the host forwards. All transitions run on the
/// UI thread; the `&mut` receivers encode the single-writer rule, and a host
/// delivering events from several threads has to add its own wrapper.
#[derive(Default)]
pub struct WatermarkController {
    attachments: HashMap<ControlId, WatermarkOptions>,
    registry: Vec<ControlState>,
}

impl WatermarkController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare watermark options for a control.
    ///
    /// Options with `enabled: false` unsubscribe the control instead, the
    /// same as [`detach`](Self::detach); events for unattached controls are
    /// ignored.
    pub fn attach(&mut self, control: ControlId, options: WatermarkOptions) {
        if options.enabled {
            tracing::debug!(control = control.0, "watermark attached");
            self.attachments.insert(control, options);
        } else {
            self.detach(control);
        }
    }

    /// Stop reacting to the control's events. Registry records are kept, as
    /// the original background may still need restoring on a later attach.
    pub fn detach(&mut self, control: ControlId) {
        if self.attachments.remove(&control).is_some() {
            tracing::debug!(control = control.0, "watermark detached");
        }
    }

    /// Teardown hook: forget everything kept for a control, declaration and
    /// registry records both. Never called implicitly; a host that destroys
    /// controls calls this to reclaim their records.
    pub fn release(&mut self, control: ControlId) {
        self.attachments.remove(&control);
        self.registry.retain(|state| state.control != control);
    }

    pub fn is_attached(&self, control: ControlId) -> bool {
        self.attachments.contains_key(&control)
    }

    /// First-match lookup of the tracking record for a control.
    pub fn state(&self, control: ControlId) -> Option<&ControlState> {
        self.registry.iter().find(|state| state.control == control)
    }

    /// How many registry records exist for a control. More than one means
    /// `Loaded` fired repeatedly; the first record keeps winning lookups.
    pub fn record_count(&self, control: ControlId) -> usize {
        self.registry
            .iter()
            .filter(|state| state.control == control)
            .count()
    }

    /// Forward a control event. Unattached controls are ignored.
    pub fn handle_event(&mut self, control: &mut dyn Control, event: ControlEvent) {
        let Some(options) = self.attachments.get(&control.id()) else {
            return;
        };
        let options = options.clone();
        match event {
            ControlEvent::Loaded => self.on_loaded(control, &options),
            ControlEvent::FocusGained => self.on_focus_gained(control, &options),
            ControlEvent::FocusLost => self.on_focus_lost(control, &options),
        }
    }

    /// Register the control: capture its background, build the overlay, and
    /// show it right away when the control starts out empty.
    ///
    /// A re-fired `Loaded` appends another record; lookups keep returning
    /// the first one.
    fn on_loaded(&mut self, control: &mut dyn Control, options: &WatermarkOptions) {
        let original_background = control.background();
        let overlay = Arc::new(build_overlay(control, &original_background, options));
        let state = ControlState {
            control: control.id(),
            original_background,
            overlay: overlay.clone(),
        };
        self.registry.push(state);
        tracing::debug!(
            control = control.id().0,
            records = self.record_count(control.id()),
            "control registered"
        );

        if emptiness::is_empty(control, options.emptiness_property.as_deref()) {
            apply_overlay(control, overlay);
        }
    }

    /// Focus gained: restore the original background, but only when no
    /// explicit emptiness property is declared. A declared property leaves
    /// the background untouched on this path. A control the registry does
    /// not know means nothing to restore.
    fn on_focus_gained(&mut self, control: &mut dyn Control, options: &WatermarkOptions) {
        if options.declared_property().is_some() {
            return;
        }
        match self.state(control.id()) {
            Some(state) => {
                let original = state.original_background().clone();
                control.set_background(original);
                tracing::debug!(control = control.id().0, "background restored");
            }
            None => {
                tracing::debug!(control = control.id().0, "not registered; nothing to restore");
            }
        }
    }

    /// Focus lost: re-evaluate emptiness and show the overlay again when the
    /// control reverted to empty. A non-empty control keeps whatever
    /// background it currently has.
    fn on_focus_lost(&mut self, control: &mut dyn Control, options: &WatermarkOptions) {
        if !emptiness::is_empty(control, options.emptiness_property.as_deref()) {
            return;
        }
        if let Some(state) = self.state(control.id()) {
            let overlay = state.overlay().clone();
            apply_overlay(control, overlay);
        }
    }
}

/// Element overlays win over text overlays when both are declared.
fn build_overlay(
    control: &dyn Control,
    original_background: &Background,
    options: &WatermarkOptions,
) -> Overlay {
    match &options.watermark_element {
        Some(element) => overlay::element_overlay(control, element.clone()),
        None => overlay::text_overlay(control, original_background, &options.watermark_text),
    }
}

/// Swap the control's background for a brush painting the overlay, unscaled.
fn apply_overlay(control: &mut dyn Control, overlay: Arc<Overlay>) {
    tracing::debug!(control = control.id().0, "overlay shown");
    control.set_background(Background::Watermark(WatermarkBrush::new(overlay)));
}

#[cfg(test)]
mod tests {
    use super::{ControlEvent, WatermarkController};
    use crate::control::{Control, ControlId};
    use crate::controls::TextBox;
    use crate::options::WatermarkOptions;
    use crate::overlay::{Background, Element, OverlayContent};
    use eframe::egui;

    #[test]
    fn disabled_options_do_not_attach() {
        let mut controller = WatermarkController::new();
        let mut control = TextBox::new(ControlId(1));
        controller.attach(
            control.id(),
            WatermarkOptions {
                enabled: false,
                watermark_text: "hint".into(),
                ..WatermarkOptions::default()
            },
        );

        assert!(!controller.is_attached(control.id()));
        controller.handle_event(&mut control, ControlEvent::Loaded);
        assert!(controller.state(control.id()).is_none());
        assert_eq!(control.background(), Background::default());
    }

    #[test]
    fn attach_with_disabled_options_detaches() {
        let mut controller = WatermarkController::new();
        let control = ControlId(2);
        controller.attach(control, WatermarkOptions::text("hint"));
        assert!(controller.is_attached(control));

        controller.attach(control, WatermarkOptions::default());
        assert!(!controller.is_attached(control));
    }

    #[test]
    fn element_overlay_wins_over_text() {
        let mut controller = WatermarkController::new();
        let mut control = TextBox::new(ControlId(3));
        controller.attach(
            control.id(),
            WatermarkOptions {
                enabled: true,
                watermark_text: "ignored".into(),
                watermark_element: Some(Element::image("hint.png")),
                ..WatermarkOptions::default()
            },
        );
        controller.handle_event(&mut control, ControlEvent::Loaded);

        let state = controller.state(control.id()).expect("registered");
        assert!(matches!(
            state.overlay().content,
            OverlayContent::Element(_)
        ));
    }

    #[test]
    fn release_forgets_every_record() {
        let mut controller = WatermarkController::new();
        let mut control = TextBox::new(ControlId(4));
        controller.attach(control.id(), WatermarkOptions::text("hint"));
        controller.handle_event(&mut control, ControlEvent::Loaded);
        controller.handle_event(&mut control, ControlEvent::Loaded);
        assert_eq!(controller.record_count(control.id()), 2);

        controller.release(control.id());
        assert_eq!(controller.record_count(control.id()), 0);
        assert!(!controller.is_attached(control.id()));
    }

    #[test]
    fn loaded_with_non_empty_value_keeps_background() {
        let mut controller = WatermarkController::new();
        let mut control = TextBox::new(ControlId(5));
        control.background = Background::Solid(egui::Color32::LIGHT_BLUE);
        control.text = "prefilled".into();
        controller.attach(control.id(), WatermarkOptions::text("hint"));
        controller.handle_event(&mut control, ControlEvent::Loaded);

        assert_eq!(
            control.background(),
            Background::Solid(egui::Color32::LIGHT_BLUE)
        );
        // Registered all the same; only the initial show was skipped.
        assert!(controller.state(control.id()).is_some());
    }
}
