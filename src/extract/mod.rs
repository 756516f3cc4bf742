//! Model extraction: model descriptors to a class diagram.
//!
//! A single pass over the models (in registry order) builds a [`ModelGraph`]:
//! one [`EntityBlock`] per model, plus the junction tables and relationships
//! discovered along the way. [`diagram::render`] then serializes the graph.

pub mod diagram;

use crate::model::{map_type, EntityRef, FieldKind, ModelDescriptor};

/// One `name: type` line in a diagram block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Storage type label.
    pub type_label: String,
}

impl Column {
    fn new(name: impl Into<String>, type_label: impl Into<String>) -> Self {
        Self { name: name.into(), type_label: type_label.into() }
    }
}

/// A model rendered as a diagram class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityBlock {
    /// Block name, `{namespace}_{entity}` with the entity lower-cased.
    pub name: String,
    /// Columns in field declaration order.
    pub columns: Vec<Column>,
}

/// Junction table synthesized for a many-to-many field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JunctionTable {
    /// `{sourceNamespace}_{sourceEntity}_{targetNamespace}_{targetEntity}`, case preserved.
    pub name: String,
    /// Both foreign-key columns, then the surrogate `id`.
    pub columns: Vec<Column>,
}

impl JunctionTable {
    /// Builds the junction table linking `source` to `target`.
    #[must_use]
    pub fn between(source: &EntityRef, target: &EntityRef) -> Self {
        Self {
            name: format!(
                "{}_{}_{}_{}",
                source.namespace, source.name, target.namespace, target.name
            ),
            columns: vec![
                Column::new(format!("{}_id", source.name), "integer"),
                Column::new(format!("{}_id", target.name), "integer"),
                Column::new("id", "integer"),
            ],
        }
    }
}

/// Whether a relationship points at one row or many.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Foreign key or one-to-one link.
    Single,
    /// Many-to-many link through a junction table.
    Many,
}

/// A reference discovered while walking the fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Table holding the reference, as named in the diagram (before lower-casing).
    pub source: String,
    /// Referenced table name, `{namespace}_{entity}`.
    pub target: String,
    /// Reference column name, `{field}_id`.
    pub field: String,
    /// Single- or many-valued.
    pub cardinality: Cardinality,
}

/// Everything the extractor derives from the models.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelGraph {
    /// One block per model, in registry order.
    pub entities: Vec<EntityBlock>,
    /// Junction tables in discovery order.
    pub junction_tables: Vec<JunctionTable>,
    /// Single-valued relationships in discovery order.
    pub foreign_keys: Vec<Relationship>,
    /// Many-valued relationships in discovery order.
    pub many_to_many: Vec<Relationship>,
}

/// Walks the models once and builds the graph.
///
/// Reverse accessors are skipped. Many-to-many fields contribute no column to
/// their own block; they surface as a junction table and a dashed edge.
#[must_use]
pub fn extract(models: &[ModelDescriptor]) -> ModelGraph {
    let mut graph = ModelGraph::default();

    for model in models {
        let source = model.entity_ref();
        let mut columns = Vec::with_capacity(model.fields.len());

        for field in &model.fields {
            match &field.kind {
                FieldKind::Reverse { target } => {
                    match target {
                        Some(target) => log::debug!(
                            "skipping reverse accessor {source}.{} from {target}",
                            field.name
                        ),
                        None => log::debug!("skipping reverse accessor {source}.{}", field.name),
                    }
                }
                FieldKind::ManyToMany { target } => {
                    let junction = JunctionTable::between(&source, target);
                    graph.many_to_many.push(Relationship {
                        source: junction.name.clone(),
                        target: target_table(target),
                        field: format!("{}_id", field.name),
                        cardinality: Cardinality::Many,
                    });
                    graph.junction_tables.push(junction);
                }
                FieldKind::ForeignKey { target, one_to_one } => {
                    let fk_name = format!("{}_id", field.name);
                    if *one_to_one {
                        log::debug!("{source}.{} is a one-to-one link to {target}", field.name);
                    }
                    graph.foreign_keys.push(Relationship {
                        source: format!("{}_{}", source.namespace, source.name),
                        target: target_table(target),
                        field: fk_name.clone(),
                        cardinality: Cardinality::Single,
                    });
                    columns.push(Column::new(fk_name, map_type(&field.kind)));
                }
                kind => columns.push(Column::new(field.name.clone(), map_type(kind))),
            }
        }

        graph.entities.push(EntityBlock { name: model.block_name(), columns });
    }

    log::debug!(
        "extracted {} entities, {} junction tables, {} foreign keys",
        graph.entities.len(),
        graph.junction_tables.len(),
        graph.foreign_keys.len()
    );
    graph
}

fn target_table(target: &EntityRef) -> String {
    format!("{}_{}", target.namespace, target.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldDescriptor, ScalarKind};

    pub(crate) fn blog_models() -> Vec<ModelDescriptor> {
        vec![
            ModelDescriptor {
                namespace: "blog".into(),
                name: "Post".into(),
                fields: vec![
                    FieldDescriptor::new("id", FieldKind::Scalar(ScalarKind::Auto)),
                    FieldDescriptor::new(
                        "title",
                        FieldKind::Scalar(ScalarKind::Char { max_length: Some(200) }),
                    ),
                    FieldDescriptor::new(
                        "author",
                        FieldKind::ForeignKey {
                            target: EntityRef::new("auth", "User"),
                            one_to_one: false,
                        },
                    ),
                    FieldDescriptor::new(
                        "tags",
                        FieldKind::ManyToMany { target: EntityRef::new("blog", "Tag") },
                    ),
                    FieldDescriptor::new(
                        "comments",
                        FieldKind::Reverse { target: Some(EntityRef::new("blog", "Comment")) },
                    ),
                ],
            },
            ModelDescriptor {
                namespace: "blog".into(),
                name: "Tag".into(),
                fields: vec![
                    FieldDescriptor::new("id", FieldKind::Scalar(ScalarKind::Auto)),
                    FieldDescriptor::new("name", FieldKind::Scalar(ScalarKind::Slug)),
                ],
            },
        ]
    }

    #[test]
    fn entity_blocks_follow_registry_order() {
        let graph = extract(&blog_models());
        let names: Vec<&str> = graph.entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["blog_post", "blog_tag"]);
    }

    #[test]
    fn foreign_key_becomes_uuid_column_and_relationship() {
        let graph = extract(&blog_models());
        let post = &graph.entities[0];
        assert_eq!(
            post.columns,
            vec![
                Column::new("id", "serial"),
                Column::new("title", "varchar(200)"),
                Column::new("author_id", "uuid"),
            ]
        );
        assert_eq!(
            graph.foreign_keys,
            vec![Relationship {
                source: "blog_Post".into(),
                target: "auth_User".into(),
                field: "author_id".into(),
                cardinality: Cardinality::Single,
            }]
        );
    }

    #[test]
    fn many_to_many_synthesizes_junction_table() {
        let graph = extract(&blog_models());
        assert_eq!(
            graph.junction_tables,
            vec![JunctionTable {
                name: "blog_Post_blog_Tag".into(),
                columns: vec![
                    Column::new("Post_id", "integer"),
                    Column::new("Tag_id", "integer"),
                    Column::new("id", "integer"),
                ],
            }]
        );
        assert_eq!(graph.many_to_many.len(), 1);
        assert_eq!(graph.many_to_many[0].source, "blog_Post_blog_Tag");
        assert_eq!(graph.many_to_many[0].target, "blog_Tag");
        assert_eq!(graph.many_to_many[0].field, "tags_id");
        assert_eq!(graph.many_to_many[0].cardinality, Cardinality::Many);
    }

    #[test]
    fn reverse_accessors_are_skipped() {
        let graph = extract(&blog_models());
        assert!(graph.entities[0].columns.iter().all(|c| c.name != "comments"));
        assert!(graph.foreign_keys.iter().all(|r| r.target != "blog_Comment"));
    }

    #[test]
    fn reverse_accessor_without_target_is_skipped() {
        let models = vec![ModelDescriptor {
            namespace: "blog".into(),
            name: "Comment".into(),
            fields: vec![
                FieldDescriptor::new("id", FieldKind::Scalar(ScalarKind::Auto)),
                FieldDescriptor::new("tagged_items", FieldKind::Reverse { target: None }),
            ],
        }];
        let graph = extract(&models);
        assert_eq!(graph.entities[0].columns, vec![Column::new("id", "serial")]);
        assert!(graph.foreign_keys.is_empty());
        assert!(graph.many_to_many.is_empty());
    }

    #[test]
    fn one_to_one_is_a_single_valued_reference() {
        let models = vec![ModelDescriptor {
            namespace: "accounts".into(),
            name: "Profile".into(),
            fields: vec![FieldDescriptor::new(
                "user",
                FieldKind::ForeignKey { target: EntityRef::new("auth", "User"), one_to_one: true },
            )],
        }];
        let graph = extract(&models);
        assert_eq!(graph.entities[0].columns, vec![Column::new("user_id", "uuid")]);
        assert_eq!(graph.foreign_keys[0].cardinality, Cardinality::Single);
    }

    #[test]
    fn unmapped_kind_falls_back_to_undefined() {
        let models = vec![ModelDescriptor {
            namespace: "geo".into(),
            name: "Place".into(),
            fields: vec![FieldDescriptor::new(
                "location",
                FieldKind::Scalar(ScalarKind::Unmapped("PointField".into())),
            )],
        }];
        let graph = extract(&models);
        assert_eq!(graph.entities[0].columns, vec![Column::new("location", "undefined")]);
    }

    #[test]
    fn empty_registry_gives_empty_graph() {
        assert_eq!(extract(&[]), ModelGraph::default());
    }
}
