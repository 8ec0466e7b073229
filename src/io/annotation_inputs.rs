use crate::errors::Result;
use crate::models::annotation::Annotation;
use crate::models::ionization_mode::IonizationMode;
use crate::models::lipid::Lipid;
use crate::models::peak::Peak;
use crate::models::peak_group::PeakGroup;
use crate::traits::aggregator::Aggregator;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// User-friendly format for specifying annotations in an input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationInput {
    pub lipid: Lipid,
    pub mz: f64,
    /// Defaults to the intensity of the most abundant grouped peak.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f64>,
    #[serde(alias = "retention_time")]
    #[serde(alias = "rt")]
    pub rt_min: f64,
    pub ionization_mode: IonizationMode,
    #[serde(default)]
    pub grouped_signals: Vec<Peak>,
    /// Scores from earlier stages, applied in order.
    #[serde(default)]
    pub score_deltas: Vec<i64>,
}

impl From<AnnotationInput> for Annotation {
    fn from(val: AnnotationInput) -> Self {
        let grouped_signals = PeakGroup::new(val.grouped_signals);
        let intensity = val
            .intensity
            .or_else(|| grouped_signals.most_intense().map(|p| p.intensity))
            .unwrap_or(0.0);
        let mut annotation = Annotation::with_grouped_signals(
            val.lipid,
            val.mz,
            intensity,
            val.rt_min,
            val.ionization_mode,
            Vec::<Peak>::from(grouped_signals),
        );
        annotation.score_accumulator_mut().add_all(val.score_deltas);
        annotation
    }
}

pub fn read_annotation_inputs(path: &Path) -> Result<Vec<AnnotationInput>> {
    let inputs: Vec<AnnotationInput> = serde_json::from_str(&std::fs::read_to_string(path)?)?;
    info!("Loaded {} annotations from {}", inputs.len(), path.display());
    Ok(inputs)
}
