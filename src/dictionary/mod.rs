//! Data dictionary generation from a class diagram.
//!
//! The diagram text is the only hand-off from the extractor: [`parse`]
//! recovers the entity blocks from it, and [`render`] lays them out as a
//! markdown document grouped by namespace.

mod locale;
mod parse;
mod render;

pub use locale::{Labels, Locale};
pub use parse::{parse, ParsedClass, ParsedField};
pub use render::{normalize_type, render};

/// Separator between namespace and entity in diagram class names.
pub const SEPARATOR: char = '_';

/// Turns a project name into a document title: first letter upper-cased,
/// the rest lower-cased.
#[must_use]
pub fn document_title(project_name: &str) -> String {
    let mut chars = project_name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::document_title;

    #[test]
    fn title_is_capitalized() {
        assert_eq!(document_title("myshop"), "Myshop");
        assert_eq!(document_title("MyShop"), "Myshop");
        assert_eq!(document_title(""), "");
    }
}
