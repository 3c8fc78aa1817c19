use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoloError {
    #[error("invalid phone number: {0}")]
    InvalidPhone(String),

    #[error("invalid birthday: {0}")]
    InvalidBirthday(String),

    #[error("contact doesn't exist: {0}")]
    ContactNotFound(String),

    #[error("phone number doesn't exist: {0}")]
    PhoneNotFound(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("wrong input: {0}")]
    MalformedCommand(String),

    #[error("no saved contacts: {0}")]
    SnapshotUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RoloError>;
