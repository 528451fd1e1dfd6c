use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TreeError {
    #[error("element name must not be empty")]
    EmptyName,
}

pub type TreeResult<T> = Result<T, TreeError>;
