/// Error type for profile rendering.
///
/// The render path has exactly one failure mode: breakpoint storage could
/// not grow. Malformed domain state is not validated here; out-of-range
/// fronts are silently excluded by the assembler and anything else produces
/// an incorrect but unflagged profile.
use std::collections::TryReserveError;

use thiserror::Error;

/// Result alias for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;

#[derive(Error, Debug)]
pub enum ProfileError {
    /// Breakpoint storage could not be grown. Rendering is deterministic and
    /// read-only on the domain, so the caller may retry the whole call.
    #[error("failed to allocate breakpoint storage: {0}")]
    Allocation(#[from] TryReserveError),
}
