use crate::catalog::GarmentId;
use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `tempfeel`.
///
/// Library callers can match on these to decide whether a failed submission
/// is worth retrying; the config loader and the binary use `anyhow::Result`
/// for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum TempFeelError {
    // ── Prediction service ──────────────────────────────────────────────
    #[error("service: {0}")]
    Service(#[from] ServiceError),

    // ── Catalog ─────────────────────────────────────────────────────────
    #[error("catalog: {0}")]
    Catalog(#[from] CatalogError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Prediction service errors ──────────────────────────────────────────────

/// Failure of a single remote call. None of these mutate committed state.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },

    #[error("{endpoint} returned HTTP {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("could not decode response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

// ─── Catalog errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("garment {0} appears more than once")]
    DuplicateGarment(GarmentId),

    #[error("garment {id} has invalid insulation value {value}")]
    InvalidInsulation { id: GarmentId, value: f64 },
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, TempFeelError>;
