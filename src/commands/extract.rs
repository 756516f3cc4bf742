//! `modeldoc extract` command.

use crate::config::Config;
use crate::context::ServiceContext;
use crate::extract::{self, diagram, ModelGraph};

/// Execute the `extract` command.
///
/// Bootstraps the model registry, builds the model graph and writes the
/// class diagram, replacing any previous file.
///
/// # Errors
///
/// Returns an error string if the registry cannot be initialized or the
/// diagram cannot be written.
pub fn run(ctx: &ServiceContext, config: &Config) -> Result<ModelGraph, String> {
    let registry = ctx.bootstrap_registry(config)?;
    let models = registry.models()?;

    let graph = extract::extract(&models);
    ctx.write_output(&config.diagram, &diagram::render(&graph), config.editable)?;

    println!(
        "Diagram written to {}: {} entities, {} junction tables, {} relationships",
        config.diagram.display(),
        graph.entities.len(),
        graph.junction_tables.len(),
        graph.foreign_keys.len() + graph.many_to_many.len(),
    );
    Ok(graph)
}
