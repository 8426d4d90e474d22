use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("page size must be a positive integer, got {0}")]
    InvalidPageSize(usize),
}
