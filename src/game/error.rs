/// Errors raised by the board, the protocol layer, and the move policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidDimensions(usize, usize),
    InvalidColumn(usize),
    ColumnFull(usize),
    MalformedField(String),
    NoLegalMove,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDimensions(r, c) => write!(f, "invalid dimensions: {}x{}", r, c),
            Self::InvalidColumn(c) => write!(f, "column out of range: {}", c),
            Self::ColumnFull(c) => write!(f, "column full: {}", c),
            Self::MalformedField(s) => write!(f, "malformed field: {}", s),
            Self::NoLegalMove => write!(f, "no legal move on a full board"),
        }
    }
}

impl std::error::Error for Error {}
