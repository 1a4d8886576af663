use roster_core::{AddError, ExportError, PickError, RosterError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Name spans several lines: {0:?}")]
    MultilineName(String),

    #[error("Dialog error: {0}")]
    Dialog(String),
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        CliError::Dialog(err.to_string())
    }
}

impl From<AddError> for CliError {
    fn from(err: AddError) -> Self {
        CliError::Roster(err.into())
    }
}

impl From<PickError> for CliError {
    fn from(err: PickError) -> Self {
        CliError::Roster(err.into())
    }
}

impl From<ExportError> for CliError {
    fn from(err: ExportError) -> Self {
        CliError::Roster(err.into())
    }
}
