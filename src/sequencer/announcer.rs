// Staged announcer - timed message sequence ending with a single completion signal
//
// The sequencer never sleeps and owns no thread: the host feeds it the current
// time with `tick()` (once per UI frame) and asks for a repaint after
// `time_until_next()`. Every transition re-arms its successor from the previous
// deadline, so late frames catch up in order without drifting the schedule.

use super::stage::{StageCursor, StageSequence};
use super::timer::TimerSlot;
use crate::config::AnnouncerTiming;
use std::fmt;
use std::time::{Duration, Instant};

/// Callback invoked when a mount reaches [`AnnouncerPhase::Done`]
pub type CompletionCallback = Box<dyn FnMut()>;

/// Announcer state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnouncerPhase {
    /// No stages: completion is pending for the next tick
    IdleEmpty,
    /// Stage `i` is on screen
    Displaying(usize),
    /// Every stage shown, overlay still mounted without text
    Draining,
    /// Completion fired (terminal for this mount)
    Done,
    /// Torn down before completion, nothing will fire anymore
    Cancelled,
}

impl AnnouncerPhase {
    /// True while a transition is still expected
    pub fn is_running(self) -> bool {
        matches!(
            self,
            AnnouncerPhase::IdleEmpty | AnnouncerPhase::Displaying(_) | AnnouncerPhase::Draining
        )
    }
}

/// Identifies what is on screen: one value per (mount, stage) pair
///
/// Used as the egui id salt so that every stage is drawn as a fresh element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderKey {
    pub generation: u64,
    pub cursor: usize,
}

/// Timing state machine behind the announcer overlay
pub struct StageSequencer {
    /// Input of the current mount, rebuilt only when the input changes
    stages: StageSequence,
    cursor: StageCursor,
    phase: AnnouncerPhase,
    timer: TimerSlot,
    timing: AnnouncerTiming,
    /// Incremented on every (re)mount
    generation: u64,
    on_complete: CompletionCallback,
}

impl StageSequencer {
    /// Mount a sequencer for `message` at `now` with default timing
    pub fn new(message: Option<String>, now: Instant, on_complete: impl FnMut() + 'static) -> Self {
        Self::with_timing(message, AnnouncerTiming::default(), now, on_complete)
    }

    pub fn with_timing(
        message: Option<String>,
        timing: AnnouncerTiming,
        now: Instant,
        on_complete: impl FnMut() + 'static,
    ) -> Self {
        Self::with_stages(StageSequence::from_message(message.as_deref()), timing, now, on_complete)
    }

    /// Mount a sequencer over an arbitrary number of stages
    pub fn with_stages(
        stages: StageSequence,
        timing: AnnouncerTiming,
        now: Instant,
        on_complete: impl FnMut() + 'static,
    ) -> Self {
        let mut sequencer = Self {
            stages,
            cursor: StageCursor::start(),
            phase: AnnouncerPhase::IdleEmpty,
            timer: TimerSlot::new(),
            timing,
            generation: 0,
            on_complete: Box::new(on_complete),
        };
        sequencer.mount(now);
        sequencer
    }

    /// Start the current stage sequence from stage 0
    ///
    /// Any pending transition of the previous mount is cancelled first.
    fn mount(&mut self, now: Instant) {
        if self.timer.cancel() {
            tracing::debug!(
                "Announcer mount {}: pending transition cancelled by remount",
                self.generation
            );
        }

        self.generation += 1;
        self.cursor = StageCursor::start();

        if self.stages.is_empty() {
            // Pas de message : on complète au prochain tick, jamais pendant le rendu
            self.phase = AnnouncerPhase::IdleEmpty;
            self.timer.arm(now, Duration::ZERO);
        } else {
            self.phase = AnnouncerPhase::Displaying(0);
            self.timer.arm(now, self.timing.dwell());
        }

        tracing::debug!(
            "Announcer mount {}: {} stage(s), phase {:?}",
            self.generation,
            self.stages.len(),
            self.phase
        );
    }

    /// Run every transition due at `now`
    ///
    /// Returns true if the phase changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Some(fired_at) = self.timer.take_due(now) {
            self.advance(fired_at);
            changed = true;
        }
        changed
    }

    /// One transition, triggered by the timer that expired at `fired_at`
    fn advance(&mut self, fired_at: Instant) {
        match self.phase {
            AnnouncerPhase::IdleEmpty | AnnouncerPhase::Draining => self.complete(),
            AnnouncerPhase::Displaying(_) => {
                let len = self.stages.len();
                self.cursor.advance(len);

                if self.cursor.is_past_end(len) {
                    self.phase = AnnouncerPhase::Draining;
                    self.timer.arm(fired_at, self.timing.drain());
                } else {
                    self.phase = AnnouncerPhase::Displaying(self.cursor.index());
                    self.timer.arm(fired_at, self.timing.dwell());
                }

                tracing::debug!(
                    "Announcer mount {}: -> {:?}",
                    self.generation,
                    self.phase
                );
            }
            AnnouncerPhase::Done | AnnouncerPhase::Cancelled => {}
        }
    }

    fn complete(&mut self) {
        self.phase = AnnouncerPhase::Done;
        tracing::info!(
            "Announcer mount {} complete ({} stage(s))",
            self.generation,
            self.stages.len()
        );
        (self.on_complete)();
    }

    /// Change the message input
    ///
    /// A different value restarts the whole sequence from stage 0; the same
    /// value keeps the current run untouched. Returns true on restart.
    pub fn set_message(&mut self, message: Option<String>, now: Instant) -> bool {
        self.set_stages(StageSequence::from_message(message.as_deref()), now)
    }

    /// Same as [`StageSequencer::set_message`] for a multi-stage input
    pub fn set_stages(&mut self, stages: StageSequence, now: Instant) -> bool {
        if self.phase == AnnouncerPhase::Cancelled || stages == self.stages {
            return false;
        }
        self.stages = stages;
        self.mount(now);
        true
    }

    /// Run the current message again from the beginning, even if it already completed
    pub fn restart(&mut self, now: Instant) -> bool {
        if self.phase == AnnouncerPhase::Cancelled {
            return false;
        }
        self.mount(now);
        true
    }

    /// Tear down: drop the pending transition, completion will never fire
    pub fn cancel(&mut self) {
        if self.phase == AnnouncerPhase::Cancelled {
            return;
        }
        if self.timer.cancel() {
            tracing::debug!(
                "Announcer mount {} cancelled in {:?}",
                self.generation,
                self.phase
            );
        }
        self.phase = AnnouncerPhase::Cancelled;
    }

    pub fn phase(&self) -> AnnouncerPhase {
        self.phase
    }

    pub fn cursor(&self) -> usize {
        self.cursor.index()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn stages(&self) -> &StageSequence {
        &self.stages
    }

    pub fn timing(&self) -> AnnouncerTiming {
        self.timing
    }

    pub fn is_complete(&self) -> bool {
        self.phase == AnnouncerPhase::Done
    }

    pub fn is_running(&self) -> bool {
        self.phase.is_running()
    }

    /// Overlay is drawn while a stage is shown and during the drain
    pub fn is_overlay_visible(&self) -> bool {
        matches!(
            self.phase,
            AnnouncerPhase::Displaying(_) | AnnouncerPhase::Draining
        )
    }

    /// Text to draw, only while the cursor points at a real stage
    pub fn visible_text(&self) -> Option<&str> {
        match self.phase {
            AnnouncerPhase::Displaying(index) => self.stages.get(index),
            _ => None,
        }
    }

    pub fn render_key(&self) -> RenderKey {
        RenderKey {
            generation: self.generation,
            cursor: self.cursor.index(),
        }
    }

    /// Wait before the next transition, `None` when nothing is scheduled
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.timer.remaining(now)
    }
}

impl fmt::Debug for StageSequencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StageSequencer")
            .field("stages", &self.stages)
            .field("phase", &self.phase)
            .field("cursor", &self.cursor)
            .field("generation", &self.generation)
            .field("pending", &self.timer.pending())
            .finish()
    }
}

impl Drop for StageSequencer {
    fn drop(&mut self) {
        if self.timer.cancel() {
            tracing::debug!(
                "Announcer mount {} dropped in {:?}, pending transition discarded",
                self.generation,
                self.phase
            );
        }
    }
}
