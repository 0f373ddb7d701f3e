// Sequencer module - staged announcer
// Stage list, one-shot timer slot and the timing state machine driving the overlay

pub mod announcer;
pub mod stage;
pub mod timer;

pub use announcer::{AnnouncerPhase, CompletionCallback, RenderKey, StageSequencer};
pub use stage::{StageCursor, StageSequence};
pub use timer::{StageTimer, TimerSlot};
