use crate::errors::{LipidQueryError, Result};
use crate::models::adduct_table::AdductTable;
use crate::models::ionization_mode::IonizationMode;
use crate::traits::tolerance::PpmTolerance;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Settings for an annotation run.
///
/// Example (all fields optional):
/// ```json
/// {
///   "ppm_tolerance": 10,
///   "positive_adducts": { "[M+H]+": 1.007276, "[M+Na]+": 22.989218 }
/// }
/// ```
///
/// Custom adduct tables replace the built-in table for their polarity. The
/// order of the keys is the order used during detection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationSettings {
    #[serde(default)]
    pub ppm_tolerance: PpmTolerance,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positive_adducts: Option<AdductTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_adducts: Option<AdductTable>,
}

impl AnnotationSettings {
    pub fn table_for(&self, mode: IonizationMode) -> &AdductTable {
        let custom = match mode {
            IonizationMode::Positive => self.positive_adducts.as_ref(),
            IonizationMode::Negative => self.negative_adducts.as_ref(),
        };
        custom.unwrap_or_else(|| mode.adduct_table())
    }

    /// Checks that custom tables only hold parseable labels of the right polarity.
    pub fn validate(&self) -> Result<()> {
        let custom = [
            (IonizationMode::Positive, &self.positive_adducts),
            (IonizationMode::Negative, &self.negative_adducts),
        ];
        for (expected, table) in custom {
            let Some(table) = table else {
                continue;
            };
            match table.validate()? {
                Some(found) if found != expected => {
                    return Err(LipidQueryError::custom(format!(
                        "{} adduct table holds {} adducts",
                        expected, found
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

pub fn read_settings(path: &Path) -> Result<AnnotationSettings> {
    let settings: AnnotationSettings = serde_json::from_str(&std::fs::read_to_string(path)?)?;
    settings.validate()?;
    info!("Using annotation settings: {:#?}", settings);
    Ok(settings)
}
