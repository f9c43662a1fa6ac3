//! Typed error type for the bots crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotsError {
    #[error(transparent)]
    Db(#[from] db::DbError),

    /// The backing table could not be checked or created; the repository is
    /// unusable without it, so construction fails.
    #[error("failed to provision table {0}")]
    TableProvisioning(String),
}
