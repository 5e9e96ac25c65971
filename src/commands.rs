//! Subcommand implementations. Each returns the text to emit; `main` decides
//! where it goes.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use std::fs;
use std::path::Path;

use canvas::engine::{EngineConfig, EngineCore};
use canvas::import::ShapeDescriptor;
use canvas::scene::{SceneDocument, SceneModel};
use codegen::{ExportScope, ExportSet, Registry};
use uuid::Uuid;

use crate::cli::{ExportArgs, ImportArgs, SceneArgs};
use crate::error::CliError;

pub fn export(args: &ExportArgs) -> Result<String, CliError> {
    let set = load_set(&args.scene)?;
    Ok(codegen::export(&Registry::default(), &set, &args.target))
}

pub fn css(args: &SceneArgs) -> Result<String, CliError> {
    let set = load_set(args)?;
    Ok(set.preview_stylesheet().to_string())
}

pub fn import_figma(args: &ImportArgs) -> Result<String, CliError> {
    let payload = read(&args.input)?;
    let mut engine = open_engine(args.scene.as_deref())?;
    engine.import_figma(&payload)?;
    save(&engine)
}

pub fn import_shapes(args: &ImportArgs) -> Result<String, CliError> {
    let descriptors: Vec<ShapeDescriptor> = serde_json::from_str(&read(&args.input)?)?;
    let mut engine = open_engine(args.scene.as_deref())?;
    engine.insert_descriptors(descriptors)?;
    save(&engine)
}

#[must_use]
pub fn targets() -> String {
    Registry::default()
        .iter()
        .map(|e| format!("{}\t{}\n", e.id(), e.label()))
        .collect()
}

/// Write `text` to `out`, or stdout when `out` is `None`.
pub fn emit(text: &str, out: Option<&Path>) -> Result<(), CliError> {
    match out {
        Some(path) => {
            fs::write(path, text).map_err(|source| CliError::Write { path: path.to_path_buf(), source })?;
            tracing::info!(path = %path.display(), bytes = text.len(), "wrote output");
        }
        None => println!("{text}"),
    }
    Ok(())
}

pub fn load_document(path: &Path) -> Result<SceneDocument, CliError> {
    let doc: SceneDocument = serde_json::from_str(&read(path)?)?;
    tracing::debug!(path = %path.display(), shapes = doc.shapes.len(), "loaded scene");
    Ok(doc)
}

fn load_set(args: &SceneArgs) -> Result<ExportSet, CliError> {
    let path = args.scene.as_deref().ok_or(CliError::MissingScene)?;
    let scene = SceneModel::from_document(load_document(path)?);
    let scope = match args.select {
        Some(id) => {
            require_shape(&scene, id)?;
            ExportScope::Selection(id)
        }
        None => ExportScope::Scene,
    };
    Ok(ExportSet::collect(scene.shapes(), scene.overlay(), scope))
}

fn require_shape(scene: &SceneModel, id: Uuid) -> Result<(), CliError> {
    match scene.shape(id) {
        Some(_) => Ok(()),
        None => Err(CliError::UnknownShape(id)),
    }
}

fn open_engine(scene: Option<&Path>) -> Result<EngineCore, CliError> {
    let config = EngineConfig::default();
    match scene {
        Some(path) => Ok(EngineCore::with_document(config, load_document(path)?)),
        None => Ok(EngineCore::new(config)),
    }
}

fn save(engine: &EngineCore) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(&engine.scene.to_document())?)
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read { path: path.to_path_buf(), source })
}
