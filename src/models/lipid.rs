use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identity of a lipid species from the reference database.
///
/// Only used to identify and display an annotation; none of the fields
/// take part in adduct detection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lipid {
    pub compound_id: i64,
    pub name: String,
    #[serde(default)]
    pub formula: String,
    #[serde(default)]
    pub lipid_type: String,
    #[serde(default)]
    pub carbon_count: u32,
    #[serde(default)]
    pub double_bonds_count: u32,
}

impl Lipid {
    pub fn new(
        compound_id: i64,
        name: impl Into<String>,
        formula: impl Into<String>,
        lipid_type: impl Into<String>,
        carbon_count: u32,
        double_bonds_count: u32,
    ) -> Self {
        Self {
            compound_id,
            name: name.into(),
            formula: formula.into(),
            lipid_type: lipid_type.into(),
            carbon_count,
            double_bonds_count,
        }
    }
}

impl Display for Lipid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
