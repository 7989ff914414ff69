use thiserror::Error;

/// Rejections from the roster store. The roster is left untouched whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Team '{team}' already has a captain.")]
    CaptainConflict { team: String },

    #[error("Team '{team}' already has a vice-captain.")]
    ViceCaptainConflict { team: String },

    #[error("Player '{name}' already exists.")]
    DuplicateName { name: String },

    #[error("Player '{name}' not found.")]
    NotFound { name: String },
}

impl RosterError {
    pub fn is_conflict(&self) -> bool {
        !matches!(self, RosterError::NotFound { .. })
    }
}

pub type RosterResult<T> = Result<T, RosterError>;
