use thiserror::Error;

pub type Result<T> = std::result::Result<T, RosterError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddError {
    #[error("Name is empty")]
    EmptyName,

    #[error("Name already in roster: {0}")]
    DuplicateName(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoveError {
    #[error("Index {index} out of range for roster of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClearError {
    #[error("Roster is already empty")]
    AlreadyEmpty,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PickError {
    /// Raised for both the empty and the single-participant roster; `size`
    /// tells the two apart.
    #[error("Not enough participants: need at least 2, have {size}")]
    NotEnoughParticipants { size: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    #[error("Nothing to export, roster is empty")]
    EmptyRoster,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error(transparent)]
    Add(#[from] AddError),

    #[error(transparent)]
    Remove(#[from] RemoveError),

    #[error(transparent)]
    Clear(#[from] ClearError),

    #[error(transparent)]
    Pick(#[from] PickError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
