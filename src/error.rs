use thiserror::Error;

#[derive(Error, Debug)]
pub enum LightsError {
    #[error("Missing reference frame: {0}")]
    MissingReferenceFrame(String),

    #[error("Degenerate angle range: [{min}, {max})")]
    DegenerateAngleRange { min: f64, max: f64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LightsError>;
