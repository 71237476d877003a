use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("cooking_time_minutes cannot be negative (got {0})")]
    NegativeCookingTime(i32),
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),
}
