// UI module - egui widgets and the practice screen

pub mod announcer;
pub mod app;
pub mod degree_selector;
pub mod key_selector;

pub use announcer::AnnouncerOverlay;
pub use app::PracticeApp;
pub use degree_selector::DegreeSelector;
pub use key_selector::KeySelector;
