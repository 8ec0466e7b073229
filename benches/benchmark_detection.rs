use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::hint::black_box;
use std::time::{Duration, Instant};
use tabled::{Table, Tabled};
use tracing::info;
use tracing::subscriber::set_global_default;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::Registry;
use tracing_subscriber::EnvFilter;

use lipidquery::{Annotation, IonizationMode, Lipid, Peak, PpmTolerance};

const NUM_ANNOTATIONS: usize = 20_000;
const MAX_GROUPED_PEAKS: usize = 8;
const MIN_MASS: f64 = 400.0;
const MAX_MASS: f64 = 1000.0;
const NUM_REPEATS: usize = 5;

// Half of the annotations get peaks placed at real adduct m/z values, the
// rest get uniform noise.
fn build_annotations(seed: u64) -> Vec<Annotation> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(NUM_ANNOTATIONS);

    for i in 0..NUM_ANNOTATIONS {
        let mode = if rng.gen_bool(0.5) {
            IonizationMode::Positive
        } else {
            IonizationMode::Negative
        };
        let table = mode.adduct_table();
        let labels: Vec<&str> = table.labels().collect();
        let neutral_mass = rng.gen::<f64>() * (MAX_MASS - MIN_MASS) + MIN_MASS;
        let num_peaks = rng.gen_range(0..=MAX_GROUPED_PEAKS);

        let peaks: Vec<Peak> = (0..num_peaks)
            .map(|_| {
                let mz = if rng.gen_bool(0.5) {
                    let label = labels[rng.gen_range(0..labels.len())];
                    table
                        .mz_from_monoisotopic_mass(neutral_mass, label)
                        .expect("labels come from the table")
                } else {
                    rng.gen::<f64>() * (MAX_MASS - MIN_MASS) + MIN_MASS
                };
                Peak::new(mz, rng.gen::<f64>() * 1e6)
            })
            .collect();

        let lipid = Lipid::new(i as i64, format!("LIPID {}", i), "", "", 0, 0);
        let rt_min = rng.gen::<f64>() * 30.0;
        out.push(Annotation::with_grouped_signals(
            lipid,
            neutral_mass,
            1e6,
            rt_min,
            mode,
            peaks,
        ));
    }
    out
}

#[derive(Tabled)]
struct BenchRow {
    strategy: &'static str,
    annotations: usize,
    detected: usize,
    best_ms: String,
    per_annotation_us: String,
}

fn time_strategy(
    strategy: &'static str,
    annotations: &[Annotation],
    f: impl Fn(&mut [Annotation]),
) -> BenchRow {
    let mut best = Duration::MAX;
    let mut detected = 0;
    for _ in 0..NUM_REPEATS {
        let mut local = annotations.to_vec();
        let start = Instant::now();
        f(black_box(local.as_mut_slice()));
        best = best.min(start.elapsed());
        detected = local.iter().filter(|a| a.adduct().is_some()).count();
    }
    BenchRow {
        strategy,
        annotations: annotations.len(),
        detected,
        best_ms: format!("{:.2}", best.as_secs_f64() * 1e3),
        per_annotation_us: format!("{:.3}", best.as_secs_f64() * 1e6 / annotations.len() as f64),
    }
}

fn main() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = Registry::default()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer());
    set_global_default(subscriber).expect("Setting default subscriber failed");

    let tolerance = PpmTolerance::new(10);
    let annotations = build_annotations(43u64);
    info!("Built {} annotations", annotations.len());

    let rows = vec![
        time_strategy("serial", &annotations, |anns| {
            for ann in anns.iter_mut() {
                ann.detect_adduct(tolerance);
            }
        }),
        time_strategy("rayon", &annotations, |anns| {
            anns.par_iter_mut().for_each(|ann| {
                ann.detect_adduct(tolerance);
            });
        }),
    ];
    println!("{}", Table::new(rows));
}
