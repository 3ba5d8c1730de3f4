use crate::domain::{DetectionResult, RevisionCatalog};

/// Port for board detection.
///
/// Implementations probe the host and describe the board it runs on.
pub trait BoardDetector: Send + Sync {
    /// Detect the current board.
    ///
    /// Never fails: anything that prevents identification yields
    /// [`DetectionResult::not_detected`]. Results are not cached.
    fn detect(&self) -> DetectionResult;

    /// The catalog used to resolve revision codes.
    fn catalog(&self) -> &RevisionCatalog;
}
