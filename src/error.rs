use std::path::PathBuf;

use canvas::import::ImportError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("missing scene file; pass --scene or set SHAPEFORGE_SCENE")]
    MissingScene,
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },
    #[error("invalid scene document: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("import rejected: {0}")]
    Import(#[from] ImportError),
    #[error("no shape with id {0} in the scene")]
    UnknownShape(uuid::Uuid),
}
