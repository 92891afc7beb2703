//! Error types for beamcheck

use thiserror::Error;

use crate::loads::CaseId;

/// Main error type for beam and code-check operations
#[derive(Error, Debug)]
pub enum BeamError {
    #[error("load tables must be rows of 7 values (position + 6 components), got {len} values")]
    LoadCaseShape { len: usize },

    #[error("load positions must be in ascending order: row {index} has position {position} after {previous}")]
    LoadPositionOrder {
        index: usize,
        position: f64,
        previous: f64,
    },

    #[error("load positions must lie between 0.0 and 1.0, got {position}")]
    LoadPositionRange { position: f64 },

    #[error("load case {0} not found on element")]
    LoadCaseNotFound(CaseId),

    #[error("unknown load component '{0}'")]
    UnknownComponent(String),

    #[error("load component codes run from 1 to 6, got {0}")]
    InvalidComponentCode(usize),

    #[error("element length must be >= 0.0, got {0}")]
    NegativeLength(f64),

    #[error("local position on zero length element {element} is ambiguous")]
    ZeroLengthElement { element: usize },

    #[error("position {position} is not within element {element}")]
    PositionNotInElement { position: f64, element: usize },

    #[error("position {position} is not on the beam (beam length is {length})")]
    PositionNotInBeam { position: f64, length: f64 },

    #[error("local positions must lie between 0.0 and 1.0, got {0}")]
    LocalPositionRange(f64),

    #[error("load case ids must match across all elements of a beam: expected {expected:?}, found {found:?}")]
    ElementCaseMismatch {
        expected: Vec<CaseId>,
        found: Vec<CaseId>,
    },

    #[error("a beam requires at least one element")]
    EmptyBeam,

    #[error("interpolation axis must not decrease at index {0}")]
    AxisNotIncreasing(usize),

    #[error("interpolation requires a non-empty {0}")]
    EmptyInterpolation(&'static str),

    #[error("at least one query position is required")]
    EmptyQuery,

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("no strength stored for thickness {thickness} m in material '{material}'")]
    InvalidThickness { thickness: f64, material: String },

    #[error("AS4100 applies to steel only, material was '{0}'")]
    InvalidMaterial(String),

    #[error("operation requires a beam but the check holds only a section")]
    SectionOnly,

    #[error("a code check requires either a beam or a section")]
    NothingToCheck,

    #[error("solver guesses must bracket the root")]
    SolverBracket,

    #[error("solver exceeded {iterations} iterations, best approximation {root}")]
    SolverMaxIterations { iterations: usize, root: f64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for beamcheck operations
pub type BeamResult<T> = Result<T, BeamError>;
