//! `modeldoc dictionary` command.

use crate::config::Config;
use crate::context::ServiceContext;
use crate::dictionary;

/// Execute the `dictionary` command.
///
/// Reads the class diagram, recovers its entity blocks and writes the
/// markdown data dictionary. Returns the rendered document.
///
/// # Errors
///
/// Returns an error string if the diagram cannot be read or the document
/// cannot be written.
pub fn run(ctx: &ServiceContext, config: &Config) -> Result<String, String> {
    let text = ctx
        .fs
        .read_to_string(&config.diagram)
        .map_err(|e| format!("failed to read diagram {}: {e}", config.diagram.display()))?;

    let classes = dictionary::parse(&text);
    let markdown = dictionary::render(&classes, &config.document_title(), config.locale);
    ctx.write_output(&config.dictionary, &markdown, config.editable)?;

    println!(
        "Data dictionary written to {}: {} entities",
        config.dictionary.display(),
        classes.len()
    );
    Ok(markdown)
}
