use super::peak::Peak;
use serde::{Deserialize, Serialize};

/// The co-eluting peaks grouped under a single annotation.
///
/// Peaks are kept sorted by ascending m/z and are unique by m/z: when two
/// input peaks share the exact same m/z only the first one supplied is
/// kept, whatever its intensity.
///
/// Example:
/// ```
/// use lipidquery::{Peak, PeakGroup};
///
/// let group = PeakGroup::new(vec![
///     Peak::new(722.99, 50.0),
///     Peak::new(701.01, 100.0),
///     Peak::new(722.99, 10.0),
/// ]);
/// assert_eq!(group.len(), 2);
/// assert_eq!(group.as_slice()[0].mz, 701.01);
/// assert_eq!(group.as_slice()[1].intensity, 50.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Peak>", into = "Vec<Peak>")]
pub struct PeakGroup {
    peaks: Vec<Peak>,
}

impl PeakGroup {
    pub fn new(peaks: impl IntoIterator<Item = Peak>) -> Self {
        let mut peaks: Vec<Peak> = peaks.into_iter().collect();
        // Stable sort, so `dedup_by` below keeps the earliest duplicate.
        peaks.sort_by(|a, b| a.cmp_mz(b));
        peaks.dedup_by(|later, earlier| later.same_mz(earlier));
        Self { peaks }
    }

    pub fn len(&self) -> usize {
        self.peaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peaks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Peak> {
        self.peaks.iter()
    }

    pub fn as_slice(&self) -> &[Peak] {
        &self.peaks
    }

    /// Lowest m/z peak.
    pub fn first(&self) -> Option<&Peak> {
        self.peaks.first()
    }

    /// Highest m/z peak.
    pub fn last(&self) -> Option<&Peak> {
        self.peaks.last()
    }

    /// Peak with the highest intensity. Ties go to the lower m/z.
    pub fn most_intense(&self) -> Option<&Peak> {
        self.peaks.iter().reduce(|best, p| {
            if p.intensity.total_cmp(&best.intensity).is_gt() {
                p
            } else {
                best
            }
        })
    }
}

impl From<Vec<Peak>> for PeakGroup {
    fn from(peaks: Vec<Peak>) -> Self {
        Self::new(peaks)
    }
}

impl From<PeakGroup> for Vec<Peak> {
    fn from(group: PeakGroup) -> Self {
        group.peaks
    }
}

impl FromIterator<Peak> for PeakGroup {
    fn from_iter<I: IntoIterator<Item = Peak>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a PeakGroup {
    type Item = &'a Peak;
    type IntoIter = std::slice::Iter<'a, Peak>;

    fn into_iter(self) -> Self::IntoIter {
        self.peaks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_group() {
        let group = PeakGroup::new(Vec::new());
        assert!(group.is_empty());
        assert!(group.first().is_none());
        assert!(group.most_intense().is_none());
    }

    #[test]
    fn test_sorted_by_mz() {
        let group: PeakGroup = [(300.0, 1.0), (100.0, 2.0), (200.0, 3.0)]
            .into_iter()
            .map(Peak::from)
            .collect();
        let mzs: Vec<f64> = group.iter().map(|p| p.mz).collect();
        assert_eq!(mzs, vec![100.0, 200.0, 300.0]);
        assert_eq!(group.first().unwrap().mz, 100.0);
        assert_eq!(group.last().unwrap().mz, 300.0);
    }

    #[test]
    fn test_duplicate_mz_collapses_to_first_supplied() {
        let group = PeakGroup::new(vec![
            Peak::new(500.0, 10.0),
            Peak::new(400.0, 1.0),
            Peak::new(500.0, 99.0),
            Peak::new(500.0, 5.0),
        ]);
        assert_eq!(group.len(), 2);
        assert_eq!(group.as_slice()[1], Peak::new(500.0, 10.0));
    }

    #[test]
    fn test_most_intense() {
        let group = PeakGroup::new(vec![
            Peak::new(500.0, 10.0),
            Peak::new(400.0, 30.0),
            Peak::new(600.0, 30.0),
        ]);
        assert_eq!(group.most_intense().unwrap().mz, 400.0);
    }

    #[test]
    fn test_deserialize_sorts_and_dedups() {
        let group: PeakGroup = serde_json::from_str(
            r#"[{"mz": 2.0, "intensity": 1.0}, {"mz": 1.0, "intensity": 1.0}, {"mz": 2.0, "intensity": 5.0}]"#,
        )
        .unwrap();
        assert_eq!(group.len(), 2);
        assert_eq!(group.as_slice()[0].mz, 1.0);
        assert_eq!(group.as_slice()[1].intensity, 1.0);
    }
}
