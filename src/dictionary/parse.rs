//! Recovers entity blocks from diagram text.

use std::sync::LazyLock;

use regex::Regex;

use super::SEPARATOR;

/// One `name: type` line recovered from a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedField {
    /// Column name.
    pub name: String,
    /// Full type label, including any parenthesized parameter.
    pub type_label: String,
    /// The parenthesized parameter alone (`200`, `10,2`), when present.
    pub param: Option<String>,
}

/// An entity block recovered from the diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedClass {
    /// Class name, `{namespace}_{entity}`.
    pub name: String,
    /// Fields in block order.
    pub fields: Vec<ParsedField>,
}

impl ParsedClass {
    /// Namespace prefix: everything before the first separator.
    #[must_use]
    pub fn namespace(&self) -> &str {
        self.name.split(SEPARATOR).next().unwrap_or(&self.name)
    }

    /// Junction tables carry two or more separators in their name.
    #[must_use]
    pub fn is_junction(&self) -> bool {
        self.name.matches(SEPARATOR).count() > 1
    }
}

static CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"class\s+(?P<name>\w+)\s+\{(?P<body>[^}]*)\}").expect("class pattern is valid")
});

static FIELD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<name>\w+):\s+(?P<base>\w+(?: \w+)*)(?:\((?P<param>\d+(?:,\d+)?)\))?\s*$")
        .expect("field pattern is valid")
});

/// Parses every well-formed class block and keeps the entity blocks.
///
/// Blocks whose name marks them as junction tables are dropped, as are body
/// lines that are not `name: type`. Neither is an error.
#[must_use]
pub fn parse(text: &str) -> Vec<ParsedClass> {
    let mut classes = Vec::new();
    for caps in CLASS_RE.captures_iter(text) {
        let class = ParsedClass {
            name: caps["name"].to_string(),
            fields: caps["body"].lines().filter_map(parse_field).collect(),
        };
        if class.is_junction() {
            log::debug!("skipping junction table {}", class.name);
            continue;
        }
        classes.push(class);
    }
    classes
}

fn parse_field(line: &str) -> Option<ParsedField> {
    if line.trim().is_empty() {
        return None;
    }
    let Some(caps) = FIELD_RE.captures(line) else {
        log::debug!("skipping unrecognized diagram line {line:?}");
        return None;
    };
    let param = caps.name("param").map(|m| m.as_str().to_string());
    let type_label = match &param {
        Some(param) => format!("{}({param})", &caps["base"]),
        None => caps["base"].to_string(),
    };
    Some(ParsedField { name: caps["name"].to_string(), type_label, param })
}
