use thiserror::Error;

/// Top-level error type for curve fitting and export.
#[derive(Debug, Error)]
pub enum CurveError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors raised while validating caller-supplied input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("sample sequences differ in length: x has {x}, y has {y}")]
    LengthMismatch { x: usize, y: usize },

    #[error("a closed curve needs at least 2 samples, got {len}")]
    TooFewSamples { len: usize },

    #[error("non-finite {axis} sample at index {index}: {value}")]
    NonFinite {
        axis: &'static str,
        index: usize,
        value: f64,
    },

    #[error("harmonic count must be at least 1, got {0}")]
    InvalidHarmonicCount(usize),

    #[error("term count must be -1 or non-negative, got {0}")]
    InvalidTermCount(i64),

    #[error("sampling step must be finite and in (0, 2pi], got {0}")]
    InvalidStep(f64),
}

/// Errors related to the geometry of the sample loop.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to querying a computed series.
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("requested {requested} terms but only {available} were computed")]
    TermCountOutOfRange { requested: usize, available: usize },
}

/// Errors related to the serialized coefficient forms.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot parse coefficient list: {0}")]
    Parse(String),

    #[error("coefficient list of length {len} does not have the 2(2n+1) layout")]
    MalformedList { len: usize },
}

/// Convenience type alias for results using [`CurveError`].
pub type Result<T> = std::result::Result<T, CurveError>;
