//! Markdown rendering of parsed entity blocks.

use std::collections::BTreeMap;
use std::fmt::Write;

use super::locale::Locale;
use super::parse::ParsedClass;

const PROJECT_DESCRIPTION_PLACEHOLDER: &str = "LINE_FOR_PROJECT_DESCRIPTION";
const DICTIONARY_DESCRIPTION_PLACEHOLDER: &str = "LINE_FOR_DATA_DICTIONARY_DESCRIPTION";
const MODEL_DESCRIPTION_PLACEHOLDER: &str = "LINE_FOR_MODEL_DESCRIPTION";

/// Corrects the one label the upstream mapping can leave truncated.
#[must_use]
pub fn normalize_type(type_label: &str) -> &str {
    if type_label == "timestamp" {
        "timestamp with time zone"
    } else {
        type_label
    }
}

/// Renders the data dictionary document.
///
/// Namespaces and the entities inside each one are sorted by name, so the
/// output depends only on the set of classes and the title.
#[must_use]
pub fn render(classes: &[ParsedClass], title: &str, locale: Locale) -> String {
    let labels = locale.labels();
    let groups = group_by_namespace(classes);

    let mut md = String::new();
    let _ = writeln!(md, "## {title}\n");
    let _ = writeln!(md, "{PROJECT_DESCRIPTION_PLACEHOLDER}\n");
    let _ = writeln!(md, "- [{}](#{})", labels.dictionary, labels.dictionary_anchor);
    for (namespace, members) in &groups {
        let _ = writeln!(md, "  - {}", namespace.to_lowercase());
        for class in members {
            let _ = writeln!(md, "      - [{}](#{})", class.name, class.name.to_lowercase());
        }
    }

    let _ = writeln!(
        md,
        "\n### {} <span id=\"{}\"></span>\n",
        labels.dictionary, labels.dictionary_anchor
    );
    let _ = writeln!(md, "{DICTIONARY_DESCRIPTION_PLACEHOLDER}\n");

    for class in groups.values().flatten() {
        let anchor = class.name.to_lowercase();
        let _ = writeln!(md, "#### {} <span id=\"{anchor}\"></span>\n", class.name);
        let _ = writeln!(md, "{MODEL_DESCRIPTION_PLACEHOLDER}\n");
        let _ = writeln!(
            md,
            "| {:<10} | {:<12} | {} |",
            labels.field, labels.type_, labels.description
        );
        let _ = writeln!(
            md,
            "|:-----------|:-------------|:{}|",
            "-".repeat(labels.description.chars().count() + 1)
        );
        for field in &class.fields {
            let type_label = normalize_type(&field.type_label);
            let _ = writeln!(md, "| {} | {type_label} |           |", field.name);
        }
        md.push('\n');
    }

    md
}

fn group_by_namespace(classes: &[ParsedClass]) -> BTreeMap<&str, Vec<&ParsedClass>> {
    let mut groups: BTreeMap<&str, Vec<&ParsedClass>> = BTreeMap::new();
    for class in classes {
        groups.entry(class.namespace()).or_default().push(class);
    }
    for members in groups.values_mut() {
        members.sort_by(|a, b| a.name.cmp(&b.name));
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::parse::ParsedField;

    fn class(name: &str, fields: &[(&str, &str)]) -> ParsedClass {
        ParsedClass {
            name: name.into(),
            fields: fields
                .iter()
                .map(|(n, t)| ParsedField { name: (*n).into(), type_label: (*t).into(), param: None })
                .collect(),
        }
    }

    #[test]
    fn renders_full_document() {
        let classes = vec![
            class("blog_post", &[("id", "serial"), ("created", "timestamp")]),
            class("auth_user", &[("username", "varchar(150)")]),
        ];
        let expected = "\
## Shop

LINE_FOR_PROJECT_DESCRIPTION

- [Data Dictionary](#data-dictionary)
  - auth
      - [auth_user](#auth_user)
  - blog
      - [blog_post](#blog_post)

### Data Dictionary <span id=\"data-dictionary\"></span>

LINE_FOR_DATA_DICTIONARY_DESCRIPTION

#### auth_user <span id=\"auth_user\"></span>

LINE_FOR_MODEL_DESCRIPTION

| Field      | Type         | Description |
|:-----------|:-------------|:------------|
| username | varchar(150) |           |

#### blog_post <span id=\"blog_post\"></span>

LINE_FOR_MODEL_DESCRIPTION

| Field      | Type         | Description |
|:-----------|:-------------|:------------|
| id | serial |           |
| created | timestamp with time zone |           |

";
        assert_eq!(render(&classes, "Shop", Locale::En), expected);
    }

    #[test]
    fn entities_sorted_within_namespace() {
        let classes = vec![class("shop_order", &[]), class("shop_item", &[]), class("auth_user", &[])];
        let md = render(&classes, "Shop", Locale::En);
        let item = md.find("#### shop_item").unwrap();
        let order = md.find("#### shop_order").unwrap();
        let user = md.find("#### auth_user").unwrap();
        assert!(user < item && item < order);
    }

    #[test]
    fn namespace_grouping_is_exact() {
        let classes = vec![class("blog_post", &[]), class("blogextra_note", &[])];
        let md = render(&classes, "Shop", Locale::En);
        assert!(md.contains("  - blog\n      - [blog_post](#blog_post)\n  - blogextra\n"));
    }

    #[test]
    fn only_bare_timestamp_is_normalized() {
        assert_eq!(normalize_type("timestamp"), "timestamp with time zone");
        assert_eq!(normalize_type("timestamp with time zone"), "timestamp with time zone");
        assert_eq!(normalize_type("date"), "date");
        assert_eq!(normalize_type("varchar(20)"), "varchar(20)");
    }

    #[test]
    fn portuguese_labels() {
        let md = render(&[class("auth_user", &[("id", "serial")])], "Loja", Locale::PtBr);
        assert!(md.contains("- [Dicionário de Dados](#dicionario-de-dados)"));
        assert!(md.contains("### Dicionário de Dados <span id=\"dicionario-de-dados\"></span>"));
        assert!(md.contains("| Campo      | Tipo         | Descrição |"));
        assert!(md.contains("|:-----------|:-------------|:----------|"));
    }

    #[test]
    fn empty_input_still_has_frame() {
        let md = render(&[], "Shop", Locale::En);
        assert!(md.starts_with("## Shop\n\n"));
        assert!(md.contains("### Data Dictionary"));
        assert!(!md.contains("####"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let classes = vec![class("b_x", &[("a", "text")]), class("a_y", &[("b", "uuid")])];
        assert_eq!(render(&classes, "T", Locale::En), render(&classes, "T", Locale::En));
    }
}
