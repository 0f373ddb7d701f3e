// MyMusic Practice - Library exports for tests and the practice binary

pub mod config;
pub mod sequencer;
pub mod theory;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::{AnnouncerTiming, ConfigError, PracticeConfig};
pub use sequencer::{AnnouncerPhase, StageSequence, StageSequencer};
pub use theory::{Degree, DegreeError, Instrument, KeyName, NOTES};
pub use ui::{AnnouncerOverlay, DegreeSelector, KeySelector, PracticeApp};
