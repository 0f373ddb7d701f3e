// Key selector - multi-select toggles over a fixed list of note names

use crate::theory::{Instrument, KeyName, NOTES};
use eframe::egui;
use egui::{Response, Ui};
use std::collections::HashSet;

const BUTTON_SIZE: f32 = 40.0;

/// Stateless key picker
///
/// The selection belongs to the caller: this widget only reads
/// `selected_keys` to draw the toggles and reports clicks through
/// `on_toggle_key`. Adding or removing the key is up to the caller, who
/// passes the updated set on the next frame.
pub struct KeySelector<'a, F: FnMut(KeyName)> {
    selected_keys: &'a HashSet<KeyName>,
    on_toggle_key: F,
    vocabulary: &'a [KeyName],
    instrument: Instrument,
}

impl<'a, F: FnMut(KeyName)> KeySelector<'a, F> {
    pub fn new(selected_keys: &'a HashSet<KeyName>, instrument: Instrument, on_toggle_key: F) -> Self {
        Self {
            selected_keys,
            on_toggle_key,
            vocabulary: &NOTES,
            instrument,
        }
    }

    /// Use another list of keys instead of the twelve chromatic notes
    pub fn with_vocabulary(mut self, vocabulary: &'a [KeyName]) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    pub fn instrument(&self) -> Instrument {
        self.instrument
    }

    /// Each key of the vocabulary with its current selected state, in order
    pub fn toggles(&self) -> Vec<(KeyName, bool)> {
        self.vocabulary
            .iter()
            .map(|&key| (key, self.selected_keys.contains(&key)))
            .collect()
    }

    /// Forward a click on `key`. Keys outside the vocabulary are ignored.
    pub fn activate(&mut self, key: KeyName) -> bool {
        if !self.vocabulary.contains(&key) {
            return false;
        }
        (self.on_toggle_key)(key);
        true
    }

    pub fn show(mut self, ui: &mut Ui) -> Response {
        let toggles = self.toggles();

        ui.horizontal_wrapped(|ui| {
            for (key, selected) in toggles {
                let button = egui::Button::new(key.as_str())
                    .selected(selected)
                    .min_size(egui::vec2(BUTTON_SIZE, BUTTON_SIZE));

                if ui.add(button).clicked() {
                    self.activate(key);
                }
            }
        })
        .response
    }
}
