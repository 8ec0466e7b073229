use super::adduct_table::AdductTable;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IonizationMode {
    Positive,
    Negative,
}

impl IonizationMode {
    /// The built-in adduct table for this polarity.
    pub fn adduct_table(&self) -> &'static AdductTable {
        match self {
            Self::Positive => AdductTable::positive(),
            Self::Negative => AdductTable::negative(),
        }
    }
}

impl Display for IonizationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
        }
    }
}
