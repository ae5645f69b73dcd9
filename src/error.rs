use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("grid has no rows")]
    Empty,
    #[error("malformed grid: row {row} has {len} tiles, expected {expected}")]
    MalformedGrid {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("invalid tile {value:?} at row {row}, col {col}")]
    InvalidTile {
        row: usize,
        col: usize,
        value: String,
    },
    #[error("invalid character {value:?} at line {line}, column {column}")]
    InvalidCharacter {
        line: usize,
        column: usize,
        value: char,
    },
    #[error("invalid screen dimension: {0}")]
    InvalidDimension(f32),
    #[error("tile ({row}, {col}) is out of bounds")]
    OutOfBounds { row: i64, col: i64 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
