use indicatif::ParallelProgressIterator;
use lipidquery::io::{
    read_annotation_inputs, read_settings, write_outputs, AnnotationInput, AnnotationOutput,
    AnnotationSettings,
};
use lipidquery::{Annotation, IonizationMode, Lipid, Peak, PpmTolerance};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::Instant;
use tabled::{Table, Tabled};
use tracing::{info, instrument, warn};

use crate::cli::error::CliError;
use crate::cli::{AnnotateArgs, WriteTemplateArgs};

#[derive(Tabled)]
struct AdductCount {
    adduct: String,
    annotations: usize,
}

/// Main function for the 'annotate' subcommand.
#[instrument]
pub fn main_annotate(args: AnnotateArgs) -> Result<(), CliError> {
    let mut settings = match &args.settings_path {
        Some(path) => read_settings(path)?,
        None => AnnotationSettings::default(),
    };
    if let Some(ppm) = args.ppm_tolerance {
        settings.ppm_tolerance = PpmTolerance::try_from(ppm)?;
        info!("Tolerance overridden from the command line: {}", settings.ppm_tolerance);
    }

    let inputs = read_annotation_inputs(&args.annotations_path)?;
    let mut annotations: Vec<Annotation> = inputs.into_iter().map(Annotation::from).collect();

    let undetectable = annotations
        .iter()
        .filter(|a| a.grouped_signals().len() < 2)
        .count();
    if undetectable > 0 {
        warn!(
            "{} of {} annotations have fewer than two grouped peaks, their adduct stays unknown",
            undetectable,
            annotations.len()
        );
    }

    let start = Instant::now();
    let num_annotations = annotations.len() as u64;
    annotations
        .par_iter_mut()
        .progress_count(num_annotations)
        .for_each(|annotation| {
            let table = settings.table_for(annotation.ionization_mode());
            annotation.detect_adduct_with(table, settings.ppm_tolerance);
        });
    info!(
        "Detected adducts for {} annotations in {:?}",
        num_annotations,
        start.elapsed()
    );

    println!("{}", summary_table(&annotations));

    let outputs: Vec<AnnotationOutput> = annotations.iter().map(AnnotationOutput::from).collect();
    std::fs::create_dir_all(&args.output_path)?;
    let put_path = args.output_path.join(args.format.file_name());
    write_outputs(&put_path, &outputs, args.format)?;
    Ok(())
}

fn summary_table(annotations: &[Annotation]) -> Table {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for annotation in annotations {
        *counts
            .entry(annotation.adduct().unwrap_or("unknown"))
            .or_default() += 1;
    }
    Table::new(counts.into_iter().map(|(adduct, annotations)| AdductCount {
        adduct: adduct.to_string(),
        annotations,
    }))
}

/// Main function for the 'write-template' subcommand.
pub fn main_write_template(args: WriteTemplateArgs) -> Result<(), CliError> {
    let output_path = args.output_path;
    let annotations = template_annotations()?;
    let settings = AnnotationSettings::default();

    let annotations_json = serde_json::to_string_pretty(&annotations)?;
    let settings_json = serde_json::to_string_pretty(&settings)?;

    std::fs::create_dir_all(&output_path)?;
    println!("Writing to {}", output_path.display());
    let annotations_json_path = output_path.join("annotations.json");
    let settings_json_path = output_path.join("settings.json");
    std::fs::write(&annotations_json_path, annotations_json)?;
    std::fs::write(&settings_json_path, settings_json)?;
    println!(
        "use as `lipidquery annotate --output-path '.' --annotations-path {:#?} --settings-path {:#?}`",
        annotations_json_path, settings_json_path,
    );
    Ok(())
}

fn template_annotations() -> Result<Vec<AnnotationInput>, CliError> {
    // (lipid, neutral mass, rt, mode, adducts seen)
    let templates = [
        (
            Lipid::new(1, "PC 34:1", "C42H82NO8P", "PC", 34, 1),
            759.5778,
            6.5,
            IonizationMode::Positive,
            vec!["[M+H]+", "[M+Na]+"],
        ),
        (
            Lipid::new(2, "PE 36:2", "C41H78NO8P", "PE", 36, 2),
            743.5465,
            8.1,
            IonizationMode::Negative,
            vec!["[M-H]-", "[M+HCOOH-H]-"],
        ),
        (
            Lipid::new(3, "TG 52:2", "C55H102O6", "TG", 52, 2),
            858.7676,
            14.2,
            IonizationMode::Positive,
            vec!["[M+NH4]+"],
        ),
    ];

    let mut out = Vec::with_capacity(templates.len());
    for (lipid, neutral_mass, rt_min, mode, adducts) in templates {
        let table = mode.adduct_table();
        let mut grouped_signals = Vec::with_capacity(adducts.len());
        for (i, adduct) in adducts.iter().enumerate() {
            let mz = table.mz_from_monoisotopic_mass(neutral_mass, adduct)?;
            grouped_signals.push(Peak::new(mz, 1.0e6 / (i + 1) as f64));
        }
        out.push(AnnotationInput {
            lipid,
            mz: grouped_signals[0].mz,
            intensity: None,
            rt_min,
            ionization_mode: mode,
            grouped_signals,
            score_deltas: vec![1],
        });
    }
    Ok(out)
}
