//! PlantUML serialization of a [`ModelGraph`].

use std::fmt::Write;

use super::{Cardinality, Column, ModelGraph, Relationship};

/// Style directives emitted right after `@startuml`.
const STYLE_DIRECTIVES: &str = "!theme plain\ntop to bottom direction\nskinparam linetype ortho\n";

/// Edge style for single-valued references.
const FOREIGN_KEY_EDGE: &str = "-[#595959,plain]-^";

/// Edge style for many-valued references.
const MANY_TO_MANY_EDGE: &str = "-[#595959,dashed]-";

/// Renders the full diagram text.
///
/// Order: entity blocks, junction blocks, foreign-key edges, many-to-many
/// edges. Output depends only on the graph, so identical input gives
/// byte-identical text.
#[must_use]
pub fn render(graph: &ModelGraph) -> String {
    let mut out = String::new();
    out.push_str("@startuml\n\n");
    out.push_str(STYLE_DIRECTIVES);
    out.push('\n');

    for entity in &graph.entities {
        write_block(&mut out, &entity.name, &entity.columns);
    }
    for junction in &graph.junction_tables {
        write_block(&mut out, &junction.name.to_lowercase(), &junction.columns);
    }
    for relationship in graph.foreign_keys.iter().chain(&graph.many_to_many) {
        write_edge(&mut out, relationship);
    }

    out.push_str("\n@enduml\n");
    out
}

fn write_block(out: &mut String, name: &str, columns: &[Column]) {
    let _ = writeln!(out, "class {name} {{");
    for column in columns {
        let _ = writeln!(out, "  {}: {}", column.name, column.type_label);
    }
    out.push_str("}\n");
}

fn write_edge(out: &mut String, relationship: &Relationship) {
    let style = match relationship.cardinality {
        Cardinality::Single => FOREIGN_KEY_EDGE,
        Cardinality::Many => MANY_TO_MANY_EDGE,
    };
    let _ = writeln!(
        out,
        "{} {style} {} : {}:id",
        relationship.source.to_lowercase(),
        relationship.target.to_lowercase(),
        relationship.field.to_lowercase()
    );
}
