use super::ionization_mode::IonizationMode;
use crate::errors::{LipidQueryError, Result};
use crate::utils::mass::PROTON_MASS;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

const WATER_MASS: f64 = 18.010565;
const SODIUM_ION_MASS: f64 = 22.989218;
const POTASSIUM_ION_MASS: f64 = 38.963158;
const AMMONIUM_ION_MASS: f64 = 18.033823;
const CHLORIDE_ION_MASS: f64 = 34.969402;
const FORMATE_ION_MASS: f64 = 44.998201;
const ACETATE_ION_MASS: f64 = 59.013851;

static POSITIVE_ADDUCTS: LazyLock<AdductTable> = LazyLock::new(|| {
    AdductTable::from_iter([
        ("[M+H]+", PROTON_MASS),
        ("[M+2H]2+", 2.0 * PROTON_MASS),
        ("[M+Na]+", SODIUM_ION_MASS),
        ("[M+NH4]+", AMMONIUM_ION_MASS),
        ("[M+H-H2O]+", PROTON_MASS - WATER_MASS),
        ("[M+K]+", POTASSIUM_ION_MASS),
        ("[M+H+NH4]2+", PROTON_MASS + AMMONIUM_ION_MASS),
        ("[2M+H]+", PROTON_MASS),
        ("[2M+Na]+", SODIUM_ION_MASS),
        ("[M+2Na-H]+", 2.0 * SODIUM_ION_MASS - PROTON_MASS),
    ])
});

static NEGATIVE_ADDUCTS: LazyLock<AdductTable> = LazyLock::new(|| {
    AdductTable::from_iter([
        ("[M-H]-", -PROTON_MASS),
        ("[M-2H]2-", -2.0 * PROTON_MASS),
        ("[M+Cl]-", CHLORIDE_ION_MASS),
        ("[M+HCOOH-H]-", FORMATE_ION_MASS),
        ("[M+CH3COOH-H]-", ACETATE_ION_MASS),
        ("[M-H-H2O]-", -PROTON_MASS - WATER_MASS),
        ("[2M-H]-", -PROTON_MASS),
        ("[M+Na-2H]-", SODIUM_ION_MASS - 2.0 * PROTON_MASS),
    ])
});

/// Adduct labels mapped to the mass they add to the (possibly multimeric)
/// neutral molecule before dividing by the charge:
///
/// `mz = (multimer * M + mass) / charge`
///
/// Iteration order is insertion order, which makes adduct detection
/// deterministic when several adduct pairs would match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdductTable {
    adducts: IndexMap<String, f64>,
}

impl AdductTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in table of positive mode adducts.
    pub fn positive() -> &'static AdductTable {
        &POSITIVE_ADDUCTS
    }

    /// Built-in table of negative mode adducts.
    pub fn negative() -> &'static AdductTable {
        &NEGATIVE_ADDUCTS
    }

    /// Adds an adduct, returning the previous mass if the label was present.
    /// Re-inserting a label keeps its original position.
    pub fn insert(&mut self, label: impl Into<String>, mass: f64) -> Option<f64> {
        self.adducts.insert(label.into(), mass)
    }

    pub fn mass(&self, label: &str) -> Option<f64> {
        self.adducts.get(label).copied()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.adducts.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.adducts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adducts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.adducts.iter().map(|(label, mass)| (label.as_str(), *mass))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.adducts.keys().map(String::as_str)
    }

    /// Checks that every label parses and that all of them share one polarity.
    pub fn validate(&self) -> Result<Option<IonizationMode>> {
        let mut polarity = None;
        for label in self.labels() {
            let stoichiometry = AdductStoichiometry::parse(label)?;
            match polarity {
                None => polarity = Some(stoichiometry.polarity),
                Some(p) if p != stoichiometry.polarity => {
                    return Err(LipidQueryError::malformed_label(
                        label,
                        format!("table mixes polarities, expected {}", p),
                    ));
                }
                Some(_) => {}
            }
        }
        Ok(polarity)
    }

    /// Neutral monoisotopic mass that would produce `mz` if the ion were
    /// the adduct `label`.
    pub fn monoisotopic_mass_from_mz(&self, mz: f64, label: &str) -> Result<f64> {
        let mass = self
            .mass(label)
            .ok_or_else(|| LipidQueryError::UnknownAdduct(label.to_string()))?;
        let st = AdductStoichiometry::parse(label)?;
        Ok((mz * f64::from(st.charge) - mass) / f64::from(st.multimer))
    }

    /// Inverse of [`AdductTable::monoisotopic_mass_from_mz`].
    pub fn mz_from_monoisotopic_mass(&self, monoisotopic_mass: f64, label: &str) -> Result<f64> {
        let mass = self
            .mass(label)
            .ok_or_else(|| LipidQueryError::UnknownAdduct(label.to_string()))?;
        let st = AdductStoichiometry::parse(label)?;
        Ok((f64::from(st.multimer) * monoisotopic_mass + mass) / f64::from(st.charge))
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for AdductTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            adducts: iter
                .into_iter()
                .map(|(label, mass)| (label.into(), mass))
                .collect(),
        }
    }
}

/// What an adduct label such as `[2M+Na]+` or `[M-2H]2-` says about the ion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdductStoichiometry {
    pub multimer: u32,
    pub charge: u32,
    pub polarity: IonizationMode,
}

impl AdductStoichiometry {
    /// Parses labels of the form `[<n>M<modifications>]<z><sign>`, where
    /// `n` and `z` default to 1 when omitted.
    pub fn parse(label: &str) -> Result<Self> {
        let label = label.trim();
        let body = label
            .strip_prefix('[')
            .ok_or_else(|| LipidQueryError::malformed_label(label, "missing '['"))?;
        let (inner, suffix) = body
            .rsplit_once(']')
            .ok_or_else(|| LipidQueryError::malformed_label(label, "missing ']'"))?;

        let digits_end = inner
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(inner.len());
        let (multimer_digits, rest) = inner.split_at(digits_end);
        if !rest.starts_with('M') {
            return Err(LipidQueryError::malformed_label(
                label,
                "expected 'M' after the multimer count",
            ));
        }
        let multimer = parse_count(label, multimer_digits)?;

        let (charge_digits, polarity) = if let Some(digits) = suffix.strip_suffix('+') {
            (digits, IonizationMode::Positive)
        } else if let Some(digits) = suffix
            .strip_suffix('-')
            .or_else(|| suffix.strip_suffix('\u{2212}'))
        {
            (digits, IonizationMode::Negative)
        } else {
            return Err(LipidQueryError::malformed_label(label, "missing charge sign"));
        };
        if !charge_digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(LipidQueryError::malformed_label(
                label,
                "charge must be a number",
            ));
        }
        let charge = parse_count(label, charge_digits)?;

        Ok(Self {
            multimer,
            charge,
            polarity,
        })
    }
}

fn parse_count(label: &str, digits: &str) -> Result<u32> {
    if digits.is_empty() {
        return Ok(1);
    }
    match digits.parse::<u32>() {
        Ok(0) => Err(LipidQueryError::malformed_label(label, "counts must be positive")),
        Ok(n) => Ok(n),
        Err(e) => Err(LipidQueryError::malformed_label(label, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-6, "Expected {}, got {}", b, a);
    }

    #[test]
    fn test_default_tables_are_valid() {
        assert_eq!(
            AdductTable::positive().validate().unwrap(),
            Some(IonizationMode::Positive)
        );
        assert_eq!(
            AdductTable::negative().validate().unwrap(),
            Some(IonizationMode::Negative)
        );
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let mut table = AdductTable::from_iter([("[M+Na]+", 22.989218), ("[M+H]+", 1.007276)]);
        table.insert("[M+K]+", 38.963158);
        table.insert("[M+Na]+", 22.99);
        let labels: Vec<&str> = table.labels().collect();
        assert_eq!(labels, vec!["[M+Na]+", "[M+H]+", "[M+K]+"]);
        assert_eq!(table.mass("[M+Na]+"), Some(22.99));
    }

    #[test]
    fn test_parse_stoichiometry() {
        let st = AdductStoichiometry::parse("[2M+Na]+").unwrap();
        assert_eq!((st.multimer, st.charge, st.polarity), (2, 1, IonizationMode::Positive));

        let st = AdductStoichiometry::parse("[M-2H]2-").unwrap();
        assert_eq!((st.multimer, st.charge, st.polarity), (1, 2, IonizationMode::Negative));

        let st = AdductStoichiometry::parse("[M-H]\u{2212}").unwrap();
        assert_eq!(st.polarity, IonizationMode::Negative);
    }

    #[test]
    fn test_parse_malformed_labels() {
        for bad in ["M+H]+", "[M+H+", "[X+H]+", "[M+H]", "[0M+H]+", "[M+H]x+", "[M+H]0+"] {
            assert!(
                AdductStoichiometry::parse(bad).is_err(),
                "Expected {:?} to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_monoisotopic_mass_from_mz() {
        let table = AdductTable::positive();
        assert_close(table.monoisotopic_mass_from_mz(701.007276, "[M+H]+").unwrap(), 700.0);
        assert_close(table.monoisotopic_mass_from_mz(351.007276, "[M+2H]2+").unwrap(), 700.0);
        assert_close(table.monoisotopic_mass_from_mz(1422.989218, "[2M+Na]+").unwrap(), 700.0);

        let table = AdductTable::negative();
        assert_close(table.monoisotopic_mass_from_mz(698.992724, "[M-H]-").unwrap(), 700.0);
    }

    #[test]
    fn test_mz_from_monoisotopic_mass_multiply_charged() {
        // (700 + 1.007276 + 18.033823) / 2
        let mz = AdductTable::positive()
            .mz_from_monoisotopic_mass(700.0, "[M+H+NH4]2+")
            .unwrap();
        assert_close(mz, 359.5205495);

        // (700 - 2 * 1.007276) / 2
        let mz = AdductTable::negative()
            .mz_from_monoisotopic_mass(700.0, "[M-2H]2-")
            .unwrap();
        assert_close(mz, 348.992724);
    }

    #[test]
    fn test_unknown_adduct() {
        let err = AdductTable::negative()
            .monoisotopic_mass_from_mz(700.0, "[M+H]+")
            .unwrap_err();
        assert!(matches!(err, LipidQueryError::UnknownAdduct(ref l) if l == "[M+H]+"));
    }

    #[test]
    fn test_table_from_json_keeps_order() {
        let table: AdductTable =
            serde_json::from_str(r#"{"[M+K]+": 38.963158, "[M+H]+": 1.007276}"#).unwrap();
        let labels: Vec<&str> = table.labels().collect();
        assert_eq!(labels, vec!["[M+K]+", "[M+H]+"]);
    }

    #[test]
    fn test_mixed_polarity_table_fails_validation() {
        let table = AdductTable::from_iter([("[M+H]+", 1.007276), ("[M-H]-", -1.007276)]);
        assert!(table.validate().is_err());
    }
}
