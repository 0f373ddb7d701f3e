// Degree selector - one button per scale degree, 1 to 7

use crate::theory::Degree;
use eframe::egui;
use egui::{Response, Ui};

const BUTTON_SIZE: f32 = 44.0;
const LABEL_SIZE: f32 = 20.0;

/// Stateless degree picker
///
/// Holds no selection: every click is forwarded to `on_select` and the
/// caller decides what to do with it.
pub struct DegreeSelector<F: FnMut(Degree)> {
    on_select: F,
    disabled: bool,
}

impl<F: FnMut(Degree)> DegreeSelector<F> {
    pub fn new(on_select: F) -> Self {
        Self {
            on_select,
            disabled: false,
        }
    }

    /// Grey out every button; clicks are ignored
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Forward an activation of `degree` to the callback
    ///
    /// Returns false (and calls nothing) when the selector is disabled.
    pub fn activate(&mut self, degree: Degree) -> bool {
        if self.disabled {
            return false;
        }
        (self.on_select)(degree);
        true
    }

    pub fn show(mut self, ui: &mut Ui) -> Response {
        ui.horizontal(|ui| {
            for degree in Degree::ALL {
                let button = egui::Button::new(
                    egui::RichText::new(degree.to_string()).size(LABEL_SIZE),
                )
                .min_size(egui::vec2(BUTTON_SIZE, BUTTON_SIZE));

                if ui.add_enabled(!self.disabled, button).clicked() {
                    self.activate(degree);
                }
            }
        })
        .response
    }
}
