// Scale degrees - closed set 1..=7

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DegreeError {
    #[error("Scale degree out of range: {0} (expected 1-7)")]
    OutOfRange(u8),
}

/// Position in a seven-note scale (1 = tonic ... 7 = leading tone)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Degree(u8);

impl Degree {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 7;

    /// Every degree, ascending
    pub const ALL: [Degree; 7] = [
        Degree(1),
        Degree(2),
        Degree(3),
        Degree(4),
        Degree(5),
        Degree(6),
        Degree(7),
    ];

    pub fn new(value: u8) -> Result<Self, DegreeError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DegreeError::OutOfRange(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Degree {
    type Error = DegreeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Degree> for u8 {
    fn from(degree: Degree) -> u8 {
        degree.0
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_degrees() {
        for value in 1..=7 {
            assert_eq!(Degree::new(value).map(Degree::value), Ok(value));
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(Degree::new(0), Err(DegreeError::OutOfRange(0)));
        assert_eq!(Degree::try_from(8), Err(DegreeError::OutOfRange(8)));
        assert_eq!(
            DegreeError::OutOfRange(9).to_string(),
            "Scale degree out of range: 9 (expected 1-7)"
        );
    }

    #[test]
    fn test_all_is_ascending() {
        let values: Vec<u8> = Degree::ALL.iter().map(|d| d.value()).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Degree::ALL[3].to_string(), "4");
        assert_eq!(u8::from(Degree::ALL[6]), 7);
    }
}
