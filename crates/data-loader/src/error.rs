use models::validate::SchemaError;
use sea_orm::DbErr;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a load
///
/// Unresolved course references are not in here: during prerequisite
/// normalization they are dropped, and during requirement loading they are
/// collected into the load report and a warning.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Db(#[from] DbErr),
}
