use super::adduct_table::AdductTable;
use super::peak::Peak;
use super::peak_group::PeakGroup;
use crate::traits::tolerance::PpmTolerance;
use crate::utils::mass::ppm_difference;
use serde::Serialize;
use tracing::debug;

/// Evidence for an adduct call: two grouped peaks whose m/z difference
/// matches the mass difference between two adducts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdductMatch {
    /// Adduct assigned to the lower m/z peak. This is the annotation's adduct.
    pub adduct: String,
    /// Adduct explaining the higher m/z peak.
    pub partner_adduct: String,
    pub lower_peak: Peak,
    pub upper_peak: Peak,
    pub observed_delta: f64,
    pub expected_delta: f64,
    pub ppm: u64,
}

/// Looks for a pair of grouped peaks whose m/z difference matches the
/// difference between two adducts of `table` within `tolerance`.
///
/// Peak pairs are visited in ascending (lower, upper) index order over the
/// m/z sorted group, and for each of them adduct pairs in table order, outer
/// loop first. The first match wins; no attempt is made to find the
/// smallest deviation. Adduct pairs with identical masses are skipped since
/// their relative deviation is undefined.
///
/// The lower m/z peak is explained by the adduct with the smaller mass,
/// which is the one reported in [`AdductMatch::adduct`].
pub fn find_adduct_match(
    group: &PeakGroup,
    table: &AdductTable,
    tolerance: PpmTolerance,
) -> Option<AdductMatch> {
    if group.len() < 2 {
        debug!(
            "Cannot detect adducts with {} grouped peak(s), need at least 2",
            group.len()
        );
        return None;
    }

    let peaks = group.as_slice();
    for (i, lower) in peaks.iter().enumerate() {
        for upper in &peaks[i + 1..] {
            let observed_delta = (upper.mz - lower.mz).abs();
            for (label_a, mass_a) in table.iter() {
                for (label_b, mass_b) in table.iter() {
                    if label_a == label_b {
                        continue;
                    }
                    let expected_delta = (mass_a - mass_b).abs();
                    let Some(ppm) = ppm_difference(observed_delta, expected_delta) else {
                        continue;
                    };
                    if !tolerance.accepts(ppm) {
                        continue;
                    }

                    let (adduct, partner_adduct) = if mass_a <= mass_b {
                        (label_a, label_b)
                    } else {
                        (label_b, label_a)
                    };
                    debug!(
                        "Matched {} ({:.4}) / {} ({:.4}) at {} ppm",
                        adduct, lower.mz, partner_adduct, upper.mz, ppm
                    );
                    return Some(AdductMatch {
                        adduct: adduct.to_string(),
                        partner_adduct: partner_adduct.to_string(),
                        lower_peak: *lower,
                        upper_peak: *upper,
                        observed_delta,
                        expected_delta,
                        ppm,
                    });
                }
            }
        }
    }

    debug!(
        "No adduct pair within {} for {} grouped peaks",
        tolerance,
        group.len()
    );
    None
}

/// Label of the adduct assigned by [`find_adduct_match`], `None` if unknown.
pub fn detect_adduct(
    group: &PeakGroup,
    table: &AdductTable,
    tolerance: PpmTolerance,
) -> Option<String> {
    find_adduct_match(group, table, tolerance).map(|m| m.adduct)
}
