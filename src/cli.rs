use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

#[cfg(test)]
#[path = "cli_test.rs"]
mod cli_test;

#[derive(Parser, Debug)]
#[command(name = "shapeforge", about = "Shape composer scene export and import")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate component source (or IR JSON) for a scene or one component.
    Export(ExportArgs),
    /// Emit the live-preview stylesheet for a scene or one component.
    Css(SceneArgs),
    /// Add the shapes of a Figma file payload to a scene.
    ImportFigma(ImportArgs),
    /// Add a JSON array of shape descriptors to a scene as one component.
    ImportShapes(ImportArgs),
    /// List the registered export targets.
    Targets,
}

/// Scene input, export scope and output destination.
#[derive(Args, Debug)]
pub struct SceneArgs {
    /// Scene document (`{ shapes, overlay }` JSON).
    #[arg(long, env = "SHAPEFORGE_SCENE")]
    pub scene: Option<PathBuf>,

    /// Restrict to the component containing this shape id.
    #[arg(long)]
    pub select: Option<Uuid>,

    /// Write here instead of stdout.
    #[arg(long, env = "SHAPEFORGE_OUT")]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub scene: SceneArgs,

    /// Target id or label (see `shapeforge targets`).
    #[arg(long, env = "SHAPEFORGE_TARGET", default_value = "react")]
    pub target: String,
}

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Payload to import.
    pub input: PathBuf,

    /// Existing scene to add to; an empty scene when omitted.
    #[arg(long, env = "SHAPEFORGE_SCENE")]
    pub scene: Option<PathBuf>,

    /// Write the updated scene here instead of stdout.
    #[arg(long, env = "SHAPEFORGE_OUT")]
    pub out: Option<PathBuf>,
}
