//! Terminal trial statuses.

use std::fmt;

/// Why a trial stopped.
///
/// Only `Completed` means the target collision count was reached; the others
/// are expected physical outcomes, not failures.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TrialStatus {
    Completed,
    /// No light particle can ever reach the heavy one.
    NoBigCollision,
    /// Neither a heavy-light nor a light-light collision exists.
    NoBigLittleCollision,
    /// The heavy particle left the square domain.
    OutsideEnv,
}

impl TrialStatus {
    pub const ALL: [TrialStatus; 4] = [
        TrialStatus::Completed,
        TrialStatus::NoBigCollision,
        TrialStatus::NoBigLittleCollision,
        TrialStatus::OutsideEnv,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TrialStatus::Completed            => "completed",
            TrialStatus::NoBigCollision       => "no_big_collision",
            TrialStatus::NoBigLittleCollision => "no_big_little_collision",
            TrialStatus::OutsideEnv           => "outside_env",
        }
    }

    #[inline]
    pub fn is_completed(self) -> bool {
        self == TrialStatus::Completed
    }
}

impl fmt::Display for TrialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
