use super::adduct_detection::{find_adduct_match, AdductMatch};
use super::adduct_table::AdductTable;
use super::aggregators::ScoreAccumulator;
use super::ionization_mode::IonizationMode;
use super::lipid::Lipid;
use super::peak::Peak;
use super::peak_group::PeakGroup;
use crate::traits::tolerance::PpmTolerance;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

/// A lipid assigned to one (m/z, retention time) observation, together with
/// the peaks grouped under it, its adduct (once known) and a running score.
///
/// Two annotations are equal when they share lipid, m/z and retention time.
/// Floats are compared bit for bit. Intensity, adduct, grouped peaks and
/// score are not part of the identity.
#[derive(Debug, Clone)]
pub struct Annotation {
    lipid: Lipid,
    mz: f64,
    intensity: f64,
    rt_min: f64,
    ionization_mode: IonizationMode,
    adduct: Option<String>,
    grouped_signals: PeakGroup,
    score: ScoreAccumulator,
}

impl Annotation {
    pub fn new(
        lipid: Lipid,
        mz: f64,
        intensity: f64,
        rt_min: f64,
        ionization_mode: IonizationMode,
    ) -> Self {
        Self::with_grouped_signals(
            lipid,
            mz,
            intensity,
            rt_min,
            ionization_mode,
            Vec::new(),
        )
    }

    pub fn with_grouped_signals(
        lipid: Lipid,
        mz: f64,
        intensity: f64,
        rt_min: f64,
        ionization_mode: IonizationMode,
        grouped_signals: impl IntoIterator<Item = Peak>,
    ) -> Self {
        Self {
            lipid,
            mz,
            intensity,
            rt_min,
            ionization_mode,
            adduct: None,
            grouped_signals: PeakGroup::new(grouped_signals),
            score: ScoreAccumulator::new(),
        }
    }

    pub fn lipid(&self) -> &Lipid {
        &self.lipid
    }

    pub fn mz(&self) -> f64 {
        self.mz
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    pub fn rt_min(&self) -> f64 {
        self.rt_min
    }

    pub fn ionization_mode(&self) -> IonizationMode {
        self.ionization_mode
    }

    pub fn adduct(&self) -> Option<&str> {
        self.adduct.as_deref()
    }

    pub fn set_adduct(&mut self, adduct: impl Into<String>) {
        self.adduct = Some(adduct.into());
    }

    pub fn clear_adduct(&mut self) {
        self.adduct = None;
    }

    pub fn grouped_signals(&self) -> &PeakGroup {
        &self.grouped_signals
    }

    pub fn score(&self) -> i64 {
        self.score.score()
    }

    pub fn total_scores_applied(&self) -> u64 {
        self.score.total_scores_applied()
    }

    pub fn add_score(&mut self, delta: i64) {
        self.score.add_score(delta);
    }

    /// See [`ScoreAccumulator::set_score`]: the application count is kept.
    pub fn set_score(&mut self, score: i64) {
        self.score.set_score(score);
    }

    pub fn reset_score(&mut self) {
        self.score.reset();
    }

    pub fn normalized_score(&self) -> f64 {
        self.score.normalized_score()
    }

    pub fn score_accumulator_mut(&mut self) -> &mut ScoreAccumulator {
        &mut self.score
    }

    /// Detects the adduct from the grouped peaks using the built-in table
    /// for this annotation's ionization mode. The result (including `None`
    /// when nothing matched) replaces the current adduct.
    pub fn detect_adduct(&mut self, tolerance: PpmTolerance) -> Option<&str> {
        let table = self.ionization_mode.adduct_table();
        self.detect_adduct_with(table, tolerance);
        self.adduct()
    }

    /// Same as [`Annotation::detect_adduct`] with a caller supplied table.
    /// Returns the evidence behind the call.
    pub fn detect_adduct_with(
        &mut self,
        table: &AdductTable,
        tolerance: PpmTolerance,
    ) -> Option<AdductMatch> {
        let found = find_adduct_match(&self.grouped_signals, table, tolerance);
        self.adduct = found.as_ref().map(|m| m.adduct.clone());
        found
    }
}

impl PartialEq for Annotation {
    fn eq(&self, other: &Self) -> bool {
        self.mz.to_bits() == other.mz.to_bits()
            && self.rt_min.to_bits() == other.rt_min.to_bits()
            && self.lipid == other.lipid
    }
}

impl Eq for Annotation {}

impl Hash for Annotation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lipid.hash(state);
        self.mz.to_bits().hash(state);
        self.rt_min.to_bits().hash(state);
    }
}

/// A missing adduct is printed as `unknown`.
impl Display for Annotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Annotation({}, mz={:.4}, RT={:.2}, adduct={}, intensity={:.1}, score={})",
            self.lipid.name,
            self.mz,
            self.rt_min,
            self.adduct.as_deref().unwrap_or("unknown"),
            self.intensity,
            self.score.score()
        )
    }
}
