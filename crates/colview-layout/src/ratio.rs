// ABOUTME: Normalized column width proportions.
// ABOUTME: Includes the stretch variant used when the last column collapses.

use crate::LayoutError;

/// Share of the last ratio that the collapsed last column keeps
const COLLAPSED_SHARE: f64 = 0.1;

/// Column proportions summing to 1.0
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatioSet(Vec<f64>);

impl RatioSet {
    /// Scale configured ratios so they sum to 1.0. An empty input gives an
    /// empty set; zero, negative, or non-finite entries are rejected.
    pub fn normalize(ratios: &[f64]) -> Result<Self, LayoutError> {
        if let Some(bad) = ratios.iter().find(|r| !r.is_finite() || **r <= 0.0) {
            return Err(LayoutError::InvalidRatios(format!(
                "{bad} in {ratios:?} is not a positive number"
            )));
        }
        let sum: f64 = ratios.iter().sum();
        if !sum.is_finite() {
            return Err(LayoutError::InvalidRatios(format!("{ratios:?} sum overflows")));
        }
        Ok(Self(ratios.iter().map(|r| r / sum).collect()))
    }

    /// Variant where the second-to-last column takes 90% of the last one's
    /// share. Needs at least two ratios.
    pub fn stretch(&self) -> Option<RatioSet> {
        let n = self.0.len();
        if n < 2 {
            return None;
        }
        let last = self.0[n - 1];
        let mut stretched = self.0[..n - 2].to_vec();
        stretched.push(self.0[n - 2] + last * (1.0 - COLLAPSED_SHARE));
        stretched.push(last * COLLAPSED_SHARE);
        Some(Self(stretched))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
