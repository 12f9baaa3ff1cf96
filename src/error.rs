//! Application error type.
//!
//! Every pipeline stage either returns a valid result or an `AppError` whose
//! `ErrorKind` callers can match on programmatically. The kind also decides
//! the process exit code, so `main` stays a thin wrapper.

/// Machine-readable failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input file does not exist.
    NotFound,
    /// Input file contains no parsable data rows.
    EmptyData,
    /// A data row (or the file itself) could not be parsed.
    Parse,
    /// Fewer points than the analysis needs.
    InsufficientData,
    /// A band gap type outside {direct, indirect}.
    InvalidBandgapType,
    /// No usable absorption edge was found in the series.
    NoAbsorptionEdge,
    /// The linear fit produced no finite, non-degenerate solution.
    FitDivergence,
    /// An option value is out of range.
    Config,
    /// Rendering or output file writing failed.
    Render,
}

impl ErrorKind {
    /// Process exit code for this failure category.
    ///
    /// 2 = input/usage error, 3 = empty or insufficient data,
    /// 4 = analysis/render failure.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::NotFound
            | ErrorKind::Parse
            | ErrorKind::InvalidBandgapType
            | ErrorKind::Config => 2,
            ErrorKind::EmptyData | ErrorKind::InsufficientData => 3,
            ErrorKind::NoAbsorptionEdge | ErrorKind::FitDivergence | ErrorKind::Render => 4,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        self.kind.exit_code()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
