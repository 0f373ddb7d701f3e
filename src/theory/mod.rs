// Music theory vocabulary shared by the selectors

pub mod degree;
pub mod notes;

pub use degree::{Degree, DegreeError};
pub use notes::{Instrument, KeyName, NOTES};
