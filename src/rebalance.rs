//! Target allocations per risk tolerance and the mock valuation drift
//! applied when a portfolio is rebalanced.

use rand::Rng;
use std::fmt;
use std::str::FromStr;

use crate::mock_data::slice;
use crate::models::{AllocationSlice, Portfolio};

/// Total value moves by a factor drawn from this range on every rebalance.
pub const VALUE_DRIFT: std::ops::Range<f64> = -0.01..0.02;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    ModerateAggressive,
    Aggressive,
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskTolerance::Conservative => "Conservative",
            RiskTolerance::Moderate => "Moderate",
            RiskTolerance::ModerateAggressive => "Moderate-Aggressive",
            RiskTolerance::Aggressive => "Aggressive",
        };
        f.write_str(s)
    }
}

impl FromStr for RiskTolerance {
    type Err = String;
    /// Exact profile labels only; anything else keeps the current allocation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Conservative" => Ok(RiskTolerance::Conservative),
            "Moderate" => Ok(RiskTolerance::Moderate),
            "Moderate-Aggressive" => Ok(RiskTolerance::ModerateAggressive),
            "Aggressive" => Ok(RiskTolerance::Aggressive),
            _ => Err(format!("unknown risk tolerance: {}", s)),
        }
    }
}

impl RiskTolerance {
    /// Percentages for Index Funds, Mutual Funds, ETFs, Stocks, Gold/SGBs.
    const fn weights(&self) -> [f64; 5] {
        match self {
            RiskTolerance::Conservative => [20.0, 30.0, 10.0, 5.0, 35.0],
            RiskTolerance::Moderate => [35.0, 25.0, 20.0, 10.0, 10.0],
            RiskTolerance::ModerateAggressive => [45.0, 22.0, 18.0, 8.0, 7.0],
            RiskTolerance::Aggressive => [50.0, 20.0, 15.0, 10.0, 5.0],
        }
    }

    pub fn target_allocation(&self) -> Vec<AllocationSlice> {
        const BUCKETS: [(&str, &str); 5] = [
            ("Index Funds", "#4F46E5"),
            ("Mutual Funds", "#10B981"),
            ("ETFs", "#F59E0B"),
            ("Stocks", "#8B5CF6"),
            ("Gold/SGBs", "#EC4899"),
        ];
        BUCKETS
            .iter()
            .zip(self.weights())
            .map(|((name, color), pct)| slice(name, pct, color))
            .collect()
    }
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Apply the target allocation for `risk_tolerance` (unknown labels keep the
/// current one) and drift the total value.
pub fn rebalance<R: Rng + ?Sized>(portfolio: &mut Portfolio, risk_tolerance: &str, rng: &mut R) {
    match risk_tolerance.parse::<RiskTolerance>() {
        Ok(risk) => portfolio.allocation = risk.target_allocation(),
        Err(e) => tracing::warn!("{} - keeping current allocation", e),
    }
    let drift = rng.gen_range(VALUE_DRIFT);
    portfolio.total_value = round2(portfolio.total_value * (1.0 + drift));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data::{DEMO_USER_ID, portfolios};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn every_target_sums_to_100() {
        for risk in [
            RiskTolerance::Conservative,
            RiskTolerance::Moderate,
            RiskTolerance::ModerateAggressive,
            RiskTolerance::Aggressive,
        ] {
            let total: f64 = risk.target_allocation().iter().map(|s| s.percentage).sum();
            assert!((total - 100.0).abs() < 1e-9, "{risk} sums to {total}");
            assert_eq!(risk.to_string().parse::<RiskTolerance>(), Ok(risk));
        }
    }

    #[test]
    fn rebalance_applies_target_and_bounded_drift() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut p = portfolios().remove(DEMO_USER_ID).unwrap();
        let before = p.total_value;
        rebalance(&mut p, "Moderate-Aggressive", &mut rng);

        let pcts: Vec<f64> = p.allocation.iter().map(|s| s.percentage).collect();
        assert_eq!(pcts, vec![45.0, 22.0, 18.0, 8.0, 7.0]);
        assert!(p.total_value >= round2(before * 0.99) - 0.01);
        assert!(p.total_value <= round2(before * 1.02) + 0.01);
        assert_eq!(p.total_value, round2(p.total_value));
    }

    #[test]
    fn unknown_tolerance_keeps_allocation() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut p = portfolios().remove(DEMO_USER_ID).unwrap();
        let original = p.allocation.clone();
        rebalance(&mut p, "YOLO", &mut rng);
        assert_eq!(p.allocation, original);
    }
}
