// error.rs - Errors raised while building or seeding a grid

#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    #[error("grid must have at least one row and one column, got {rows}x{columns}")]
    EmptyGrid { rows: usize, columns: usize },

    #[error("line {line}: expected {expected} cells, found {found}")]
    RaggedRows { line: usize, expected: usize, found: usize },

    #[error("line {line}, column {column}: unknown glyph {glyph:?}")]
    UnknownGlyph { line: usize, column: usize, glyph: char },

    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),

    #[error("row task failed: {0}")]
    RowTask(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, LifeError>;
