// Announcer overlay - draws the staged announcer on top of everything else

use crate::config::AnnouncerTiming;
use crate::sequencer::StageSequencer;
use eframe::egui;
use egui::{Align2, Color32, FontId, LayerId, Order};
use std::hash::Hash;
use std::time::Instant;

const MESSAGE_FONT_SIZE: f32 = 96.0;
const MESSAGE_COLOR: Color32 = Color32::from_rgb(255, 210, 0);
const BACKDROP_ALPHA: u8 = 180;

/// egui host of a [`StageSequencer`]
///
/// Mounting = constructing, unmounting = dropping. Call [`AnnouncerOverlay::show`]
/// every frame; it advances the sequencer, schedules the next repaint and
/// paints the overlay when there is one.
pub struct AnnouncerOverlay {
    id: egui::Id,
    sequencer: StageSequencer,
}

impl AnnouncerOverlay {
    pub fn new(
        id_salt: impl Hash,
        message: Option<String>,
        timing: AnnouncerTiming,
        on_complete: impl FnMut() + 'static,
    ) -> Self {
        Self::mounted_at(id_salt, message, timing, Instant::now(), on_complete)
    }

    pub fn mounted_at(
        id_salt: impl Hash,
        message: Option<String>,
        timing: AnnouncerTiming,
        now: Instant,
        on_complete: impl FnMut() + 'static,
    ) -> Self {
        Self {
            id: egui::Id::new(id_salt),
            sequencer: StageSequencer::with_timing(message, timing, now, on_complete),
        }
    }

    pub fn sequencer(&self) -> &StageSequencer {
        &self.sequencer
    }

    /// True until the completion callback has fired
    pub fn is_active(&self) -> bool {
        self.sequencer.is_running()
    }

    /// Change the message; a different one restarts the announcement
    pub fn set_message(&mut self, message: Option<String>) -> bool {
        self.sequencer.set_message(message, Instant::now())
    }

    /// Announce the current message again from the start
    pub fn replay(&mut self) -> bool {
        self.sequencer.restart(Instant::now())
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        self.show_at(ctx, Instant::now());
    }

    pub fn show_at(&mut self, ctx: &egui::Context, now: Instant) {
        self.sequencer.tick(now);

        if let Some(wait) = self.sequencer.time_until_next(now) {
            ctx.request_repaint_after(wait);
        }

        if !self.sequencer.is_overlay_visible() {
            return;
        }

        let key = self.sequencer.render_key();
        let text = self.sequencer.visible_text();

        // Fondu du fond pendant le drain
        let drain_secs = self.sequencer.timing().drain().as_secs_f32();
        let opacity = ctx.animate_bool_with_time(
            self.id.with(("backdrop", key.generation)),
            text.is_some(),
            drain_secs,
        );

        // Nouvelle couche par étape : pas d'état partagé entre deux messages
        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, self.id.with(key)));
        let screen = ctx.screen_rect();
        painter.rect_filled(
            screen,
            0.0,
            Color32::from_black_alpha(BACKDROP_ALPHA).gamma_multiply(opacity),
        );

        if let Some(text) = text {
            painter.text(
                screen.center(),
                Align2::CENTER_CENTER,
                text,
                FontId::proportional(MESSAGE_FONT_SIZE),
                MESSAGE_COLOR,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    fn painted_texts(output: &egui::FullOutput) -> Vec<String> {
        output
            .shapes
            .iter()
            .filter_map(|clipped| match &clipped.shape {
                egui::Shape::Text(text) => Some(text.galley.text().to_owned()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_overlay_paints_message_then_nothing() {
        let ctx = egui::Context::default();
        let t0 = Instant::now();
        let done = Rc::new(Cell::new(0));
        let done_inner = done.clone();

        let mut overlay = AnnouncerOverlay::mounted_at(
            "announcer",
            Some("READY".to_string()),
            AnnouncerTiming::default(),
            t0,
            move || done_inner.set(done_inner.get() + 1),
        );

        let output = ctx.run(egui::RawInput::default(), |ctx| overlay.show_at(ctx, t0));
        assert_eq!(painted_texts(&output), vec!["READY".to_string()]);

        let at = t0 + Duration::from_millis(1200);
        let output = ctx.run(egui::RawInput::default(), |ctx| overlay.show_at(ctx, at));
        assert!(painted_texts(&output).is_empty());
        assert!(overlay.is_active());

        let at = t0 + Duration::from_millis(1500);
        let output = ctx.run(egui::RawInput::default(), |ctx| overlay.show_at(ctx, at));
        assert!(output.shapes.is_empty());
        assert!(!overlay.is_active());
        assert_eq!(done.get(), 1);
    }

    #[test]
    fn test_no_message_never_paints() {
        let ctx = egui::Context::default();
        let t0 = Instant::now();
        let done = Rc::new(Cell::new(0));
        let done_inner = done.clone();

        let mut overlay = AnnouncerOverlay::mounted_at(
            "announcer",
            None,
            AnnouncerTiming::default(),
            t0,
            move || done_inner.set(done_inner.get() + 1),
        );
        assert_eq!(done.get(), 0);

        for step in 0..3u64 {
            let at = t0 + Duration::from_millis(step * 16);
            let output = ctx.run(egui::RawInput::default(), |ctx| overlay.show_at(ctx, at));
            assert!(output.shapes.is_empty());
        }
        assert_eq!(done.get(), 1);
    }

    #[test]
    fn test_unmount_before_completion() {
        let ctx = egui::Context::default();
        let t0 = Instant::now();
        let done = Rc::new(Cell::new(0));
        let done_inner = done.clone();

        let mut overlay = AnnouncerOverlay::mounted_at(
            "announcer",
            Some("READY".to_string()),
            AnnouncerTiming::default(),
            t0,
            move || done_inner.set(done_inner.get() + 1),
        );
        let _ = ctx.run(egui::RawInput::default(), |ctx| overlay.show_at(ctx, t0));
        drop(overlay);

        let _ = ctx.run(egui::RawInput::default(), |_ctx| {});
        assert_eq!(done.get(), 0);
    }
}
