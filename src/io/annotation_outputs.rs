use crate::errors::Result;
use crate::models::annotation::Annotation;
use crate::models::ionization_mode::IonizationMode;
use crate::models::lipid::Lipid;
use crate::models::peak::Peak;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationOutput {
    pub lipid: Lipid,
    pub mz: f64,
    pub rt_min: f64,
    pub intensity: f64,
    pub ionization_mode: IonizationMode,
    pub adduct: Option<String>,
    pub score: i64,
    pub normalized_score: f64,
    pub grouped_signals: Vec<Peak>,
}

impl From<&Annotation> for AnnotationOutput {
    fn from(annotation: &Annotation) -> Self {
        Self {
            lipid: annotation.lipid().clone(),
            mz: annotation.mz(),
            rt_min: annotation.rt_min(),
            intensity: annotation.intensity(),
            ionization_mode: annotation.ionization_mode(),
            adduct: annotation.adduct().map(str::to_string),
            score: annotation.score(),
            normalized_score: annotation.normalized_score(),
            grouped_signals: annotation.grouped_signals().as_slice().to_vec(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SerializationFormat {
    Json,
    #[default]
    PrettyJson,
    Ndjson,
}

impl SerializationFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Json | Self::PrettyJson => "results.json",
            Self::Ndjson => "results.ndjson",
        }
    }
}

pub fn write_outputs(
    path: &Path,
    outputs: &[AnnotationOutput],
    format: SerializationFormat,
) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    match format {
        SerializationFormat::Json => serde_json::to_writer(&mut writer, outputs)?,
        SerializationFormat::PrettyJson => serde_json::to_writer_pretty(&mut writer, outputs)?,
        SerializationFormat::Ndjson => {
            for output in outputs {
                serde_json::to_writer(&mut writer, output)?;
                writer.write_all(b"\n")?;
            }
        }
    }
    writer.flush()?;
    info!("Wrote {} annotations to {}", outputs.len(), path.display());
    Ok(())
}
