// Main UI App - practice screen hosting the announcer and both selectors

use crate::config::PracticeConfig;
use crate::theory::{Degree, KeyName};
use crate::ui::announcer::AnnouncerOverlay;
use crate::ui::degree_selector::DegreeSelector;
use crate::ui::key_selector::KeySelector;
use eframe::egui;
use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

const ANNOUNCER_ID: &str = "practice_announcer";

pub struct PracticeApp {
    config: PracticeConfig,
    // Announcer (None = unmounted)
    announcer: Option<AnnouncerOverlay>,
    message_input: String,
    completed_announcements: Rc<Cell<u32>>,
    // Caller-owned selections
    selected_degree: Option<Degree>,
    selected_keys: HashSet<KeyName>,
}

impl PracticeApp {
    pub fn new(config: PracticeConfig) -> Self {
        let message_input = config.greeting.clone().unwrap_or_default();

        let mut app = Self {
            config,
            announcer: None,
            message_input,
            completed_announcements: Rc::new(Cell::new(0)),
            selected_degree: None,
            selected_keys: HashSet::new(),
        };

        let greeting = app.config.greeting.clone();
        app.mount_announcer(greeting);
        app
    }

    /// Replace the current announcer (if any) by a fresh one
    fn mount_announcer(&mut self, message: Option<String>) {
        let completed = self.completed_announcements.clone();
        self.announcer = Some(AnnouncerOverlay::new(
            ANNOUNCER_ID,
            message,
            self.config.timing,
            move || completed.set(completed.get() + 1),
        ));
    }

    /// Drop the announcer; a pending announcement never completes
    pub fn dismiss_announcer(&mut self) {
        if self.announcer.take().is_some() {
            tracing::debug!("Announcer dismissed");
        }
    }

    /// Announce the message typed in the text field from the beginning
    pub fn replay_announcer(&mut self) {
        let message = message_from_input(&self.message_input);
        match self.announcer.as_mut() {
            Some(announcer) => {
                if !announcer.set_message(message) {
                    announcer.replay();
                }
            }
            None => self.mount_announcer(message),
        }
    }

    pub fn is_announcing(&self) -> bool {
        self.announcer.as_ref().is_some_and(AnnouncerOverlay::is_active)
    }

    pub fn completed_announcements(&self) -> u32 {
        self.completed_announcements.get()
    }

    pub fn selected_degree(&self) -> Option<Degree> {
        self.selected_degree
    }

    pub fn selected_keys(&self) -> &HashSet<KeyName> {
        &self.selected_keys
    }

    /// Add the key if absent, remove it otherwise
    pub fn toggle_key(&mut self, key: KeyName) {
        if !self.selected_keys.remove(&key) {
            self.selected_keys.insert(key);
        }
    }

    fn draw_announcer_controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Announcement");

        ui.horizontal(|ui| {
            ui.label("Message:");
            let edited = ui.text_edit_singleline(&mut self.message_input).changed();

            // Un message modifié en cours d'annonce la redémarre
            if edited {
                let message = message_from_input(&self.message_input);
                if let Some(announcer) = self.announcer.as_mut() {
                    if announcer.is_active() {
                        announcer.set_message(message);
                    }
                }
            }

            if ui.button("▶ Replay").clicked() {
                self.replay_announcer();
            }
            if ui.button("✖ Dismiss").clicked() {
                self.dismiss_announcer();
            }
        });

        ui.label(format!(
            "Completed announcements: {}",
            self.completed_announcements()
        ));
    }

    fn draw_degree_selector(&mut self, ui: &mut egui::Ui) {
        ui.heading("Scale degree");

        let announcing = self.is_announcing();
        let selected_degree = &mut self.selected_degree;
        DegreeSelector::new(|degree| *selected_degree = Some(degree))
            .disabled(announcing)
            .show(ui);

        match self.selected_degree {
            Some(degree) => ui.label(format!("Selected degree: {}", degree)),
            None => ui.label("No degree selected"),
        };
    }

    fn draw_key_selector(&mut self, ui: &mut egui::Ui) {
        ui.heading("Keys");

        let mut toggled = None;
        KeySelector::new(&self.selected_keys, self.config.instrument, |key| {
            toggled = Some(key)
        })
        .show(ui);

        if let Some(key) = toggled {
            self.toggle_key(key);
        }

        ui.label(format!("{} key(s) selected", self.selected_keys.len()));
    }

    /// Draw one frame
    pub fn ui(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("MyMusic Practice");
            ui.separator();

            self.draw_announcer_controls(ui);
            ui.add_space(10.0);
            ui.separator();

            self.draw_degree_selector(ui);
            ui.add_space(10.0);
            ui.separator();

            self.draw_key_selector(ui);
        });

        // Overlay last so it sits above the panel
        if let Some(announcer) = self.announcer.as_mut() {
            announcer.show(ctx);
        }
    }
}

impl eframe::App for PracticeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

/// Text field content to announcer input: blank means "no message"
pub fn message_from_input(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnnouncerTiming;
    use std::time::Duration;

    #[test]
    fn test_message_from_input() {
        assert_eq!(message_from_input(""), None);
        assert_eq!(message_from_input("   "), None);
        assert_eq!(message_from_input(" READY "), Some("READY".to_string()));
    }

    #[test]
    fn test_toggle_key() {
        let mut app = PracticeApp::new(PracticeConfig::default());
        let c = KeyName::new("C");

        app.toggle_key(c);
        assert!(app.selected_keys().contains(&c));
        app.toggle_key(c);
        assert!(app.selected_keys().is_empty());
    }

    #[test]
    fn test_greeting_is_announced_on_start() {
        let app = PracticeApp::new(PracticeConfig::default());
        assert!(app.is_announcing());
        assert_eq!(app.completed_announcements(), 0);
        assert_eq!(app.selected_degree(), None);
    }

    #[test]
    fn test_dismiss_cancels_announcement() {
        let mut app = PracticeApp::new(PracticeConfig::default());
        app.dismiss_announcer();
        assert!(!app.is_announcing());
        assert_eq!(app.completed_announcements(), 0);
    }

    #[test]
    fn test_no_greeting_completes_on_first_frame() {
        let config = PracticeConfig {
            greeting: None,
            ..PracticeConfig::default()
        };
        let mut app = PracticeApp::new(config);
        let ctx = egui::Context::default();

        let _ = ctx.run(egui::RawInput::default(), |ctx| app.ui(ctx));

        assert!(!app.is_announcing());
        assert_eq!(app.completed_announcements(), 1);
    }

    #[test]
    fn test_zero_timing_announcement_finishes_in_one_frame() {
        let config = PracticeConfig {
            timing: AnnouncerTiming::new(Duration::ZERO, Duration::ZERO),
            ..PracticeConfig::default()
        };
        let mut app = PracticeApp::new(config);
        let ctx = egui::Context::default();

        let _ = ctx.run(egui::RawInput::default(), |ctx| app.ui(ctx));
        assert_eq!(app.completed_announcements(), 1);

        // Rejouer le même message relance une annonce complète
        app.replay_announcer();
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.ui(ctx));
        assert_eq!(app.completed_announcements(), 2);
    }
}
