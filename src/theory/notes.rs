// Note names and instrument tag

use serde::Deserialize;
use std::fmt;

/// Name of a selectable key (e.g. "C", "F#")
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyName(&'static str);

impl KeyName {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for KeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The twelve chromatic notes, in keyboard order
pub const NOTES: [KeyName; 12] = [
    KeyName::new("C"),
    KeyName::new("C#"),
    KeyName::new("D"),
    KeyName::new("D#"),
    KeyName::new("E"),
    KeyName::new("F"),
    KeyName::new("F#"),
    KeyName::new("G"),
    KeyName::new("G#"),
    KeyName::new("A"),
    KeyName::new("A#"),
    KeyName::new("B"),
];

/// Look up a note of [`NOTES`] by name
pub fn note_by_name(name: &str) -> Option<KeyName> {
    NOTES.iter().copied().find(|note| note.as_str() == name)
}

/// Instrument being practised
///
/// Carried by the key selector for later use; no behaviour depends on it yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
pub enum Instrument {
    #[default]
    Piano,
    Guitar,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notes_order() {
        let names: Vec<&str> = NOTES.iter().map(|n| n.as_str()).collect();
        assert_eq!(
            names,
            vec!["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"]
        );
    }

    #[test]
    fn test_note_by_name() {
        assert_eq!(note_by_name("G"), Some(KeyName::new("G")));
        assert_eq!(note_by_name("H"), None);
        assert_eq!(KeyName::new("F#").to_string(), "F#");
    }
}
