// Stage sequence - ordered messages shown by the announcer, plus the cursor walking them

/// Ordered list of messages displayed one after another.
///
/// Built once per mount and never modified afterwards. Duplicates are kept
/// and order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageSequence {
    stages: Vec<String>,
}

impl StageSequence {
    /// Build the sequence for a single optional message
    ///
    /// No message gives an empty sequence (the announcer completes without
    /// drawing anything), otherwise a one-stage sequence.
    pub fn from_message(message: Option<&str>) -> Self {
        Self {
            stages: message.map(str::to_owned).into_iter().collect(),
        }
    }

    /// Build a multi-stage sequence (e.g. "Ready", "Set", "Go")
    pub fn from_stages<I, S>(stages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stages: stages.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Message of stage `index`, `None` past the end
    pub fn get(&self, index: usize) -> Option<&str> {
        self.stages.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.stages.iter().map(String::as_str)
    }
}

/// Position in a [`StageSequence`]
///
/// Valid values are `0..=len`: `len` itself is the "just past the end"
/// sentinel meaning every stage has been shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StageCursor(usize);

impl StageCursor {
    pub const fn start() -> Self {
        Self(0)
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// Move one stage forward, never beyond `len`
    pub fn advance(&mut self, len: usize) {
        if self.0 < len {
            self.0 += 1;
        }
    }

    /// True once every stage of a sequence of length `len` has been passed
    pub fn is_past_end(self, len: usize) -> bool {
        self.0 >= len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_message_gives_empty_sequence() {
        let seq = StageSequence::from_message(None);
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
        assert_eq!(seq.get(0), None);
    }

    #[test]
    fn test_single_message_sequence() {
        let seq = StageSequence::from_message(Some("READY"));
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.get(0), Some("READY"));
        assert_eq!(seq.get(1), None);
    }

    #[test]
    fn test_empty_string_is_still_a_stage() {
        // Un message vide reste un message : seul None court-circuite
        let seq = StageSequence::from_message(Some(""));
        assert_eq!(seq.len(), 1);
    }

    #[test]
    fn test_multi_stage_keeps_order_and_duplicates() {
        let seq = StageSequence::from_stages(["Ready", "Set", "Set", "Go"]);
        let stages: Vec<&str> = seq.iter().collect();
        assert_eq!(stages, vec!["Ready", "Set", "Set", "Go"]);
    }

    #[test]
    fn test_cursor_saturates_at_len() {
        let mut cursor = StageCursor::start();
        assert_eq!(cursor.index(), 0);
        assert!(!cursor.is_past_end(2));

        cursor.advance(2);
        cursor.advance(2);
        assert_eq!(cursor.index(), 2);
        assert!(cursor.is_past_end(2));

        cursor.advance(2);
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn test_cursor_on_empty_sequence() {
        let mut cursor = StageCursor::start();
        assert!(cursor.is_past_end(0));
        cursor.advance(0);
        assert_eq!(cursor.index(), 0);
    }
}
