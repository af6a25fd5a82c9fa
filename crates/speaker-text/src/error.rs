#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("no valid speaker segments found in the text")]
    NoSegments,
    #[error("no voice slots configured for {0}")]
    NoSlots(crate::SpeakerId),
}
