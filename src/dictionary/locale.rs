//! Fixed document wording per language.

use clap::ValueEnum;

/// Language of the generated document's fixed wording.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Brazilian Portuguese.
    #[value(name = "pt-br", alias = "pt_br", alias = "pt")]
    PtBr,
}

/// Headings and column names used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    /// Dictionary section heading.
    pub dictionary: &'static str,
    /// Anchor id of the dictionary section.
    pub dictionary_anchor: &'static str,
    /// First table column.
    pub field: &'static str,
    /// Second table column.
    pub type_: &'static str,
    /// Third table column, left blank in every row.
    pub description: &'static str,
}

impl Locale {
    /// Wording for this locale.
    #[must_use]
    pub fn labels(self) -> Labels {
        match self {
            Self::En => Labels {
                dictionary: "Data Dictionary",
                dictionary_anchor: "data-dictionary",
                field: "Field",
                type_: "Type",
                description: "Description",
            },
            Self::PtBr => Labels {
                dictionary: "Dicionário de Dados",
                dictionary_anchor: "dicionario-de-dados",
                field: "Campo",
                type_: "Tipo",
                description: "Descrição",
            },
        }
    }
}
