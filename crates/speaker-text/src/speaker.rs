use serde::{Deserialize, Serialize};

use crate::Error;

/// Canonical speaker identity. `Speaker 2`, `speaker02` and `S2` all map to
/// `Speaker2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpeakerId(u32);

impl SpeakerId {
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    /// Uses the first run of ASCII digits in `label`, or 1 when there is none.
    pub fn from_label(label: &str) -> Self {
        let digits: String = label
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect();

        if digits.is_empty() {
            return Self(1);
        }

        Self(digits.parse().unwrap_or(u32::MAX))
    }

    pub fn number(&self) -> u32 {
        self.0
    }

    /// Index into a list of `slot_count` voice settings. Out-of-range
    /// numbers clamp to the nearest slot.
    pub fn slot(&self, slot_count: usize) -> Result<usize, Error> {
        if slot_count == 0 {
            return Err(Error::NoSlots(*self));
        }

        let wanted = usize::try_from(self.number()).unwrap_or(usize::MAX);
        Ok(wanted.saturating_sub(1).min(slot_count - 1))
    }
}

impl std::fmt::Display for SpeakerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Speaker{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerSegment {
    pub speaker: SpeakerId,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_forms() {
        assert_eq!(SpeakerId::from_label("Speaker 2").to_string(), "Speaker2");
        assert_eq!(SpeakerId::from_label("speaker02").to_string(), "Speaker2");
        assert_eq!(SpeakerId::from_label("S3").to_string(), "Speaker3");
        assert_eq!(SpeakerId::from_label("narrator").to_string(), "Speaker1");
        assert_eq!(
            SpeakerId::from_label("S99999999999999").number(),
            u32::MAX
        );
    }

    #[test]
    fn slot_clamps_both_ends() {
        assert_eq!(SpeakerId::new(1).slot(2), Ok(0));
        assert_eq!(SpeakerId::new(2).slot(2), Ok(1));
        assert_eq!(SpeakerId::new(3).slot(2), Ok(1));
        assert_eq!(SpeakerId::new(0).slot(2), Ok(0));
        assert_eq!(SpeakerId::new(u32::MAX).slot(1), Ok(0));
        assert_eq!(
            SpeakerId::new(1).slot(0),
            Err(Error::NoSlots(SpeakerId::new(1)))
        );
    }
}
