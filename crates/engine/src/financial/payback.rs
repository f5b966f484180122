use serde::{Deserialize, Serialize};

use crate::cashflow::CashFlowProjector;

/// What to report when the investment is not recovered within its lifespan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnrecoveredPayback {
    /// Report `lifespan + 1` years, a value no recovered scenario can reach.
    #[default]
    HorizonPlusOne,

    /// Report no period at all.
    Undefined,
}

/// How a discounted payback period was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaybackStatus {
    /// The cost is recovered within the lifespan.
    Recovered,

    /// The cumulative discounted benefit never reaches the cost.
    NotRecovered,

    /// The annual benefit is not positive, so there is nothing to recover with.
    Undefined,
}

/// A discounted payback period with its resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountedPayback {
    pub period: Option<f64>,
    pub status: PaybackStatus,
}

/// Years needed for the undiscounted benefit to repay the cost.
///
/// Returns `None` if the benefit is not positive.
#[must_use]
pub fn simple_payback(cost: f64, annual_benefit: f64) -> Option<f64> {
    (annual_benefit > 0.0).then(|| cost / annual_benefit)
}

/// Walks the discounted series until the cumulative benefit covers the cost.
///
/// Inside the recovery year the period is interpolated linearly:
///
/// ```text
/// period = (year − 1) + (cost − cumulative_before) / dcf(year)
/// ```
#[must_use]
pub fn discounted_payback(
    cost: f64,
    projector: &CashFlowProjector,
    unrecovered: UnrecoveredPayback,
) -> DiscountedPayback {
    if projector.annual_benefit() <= 0.0 {
        return DiscountedPayback {
            period: None,
            status: PaybackStatus::Undefined,
        };
    }

    let mut cumulative_before = 0.0;
    for flow in projector.iter() {
        if flow.cumulative >= cost {
            let fraction = if flow.discounted > 0.0 {
                ((cost - cumulative_before) / flow.discounted).clamp(0.0, 1.0)
            } else {
                0.0
            };
            return DiscountedPayback {
                period: Some(f64::from(flow.year - 1) + fraction),
                status: PaybackStatus::Recovered,
            };
        }
        cumulative_before = flow.cumulative;
    }

    let period = match unrecovered {
        UnrecoveredPayback::HorizonPlusOne => Some(f64::from(projector.horizon()) + 1.0),
        UnrecoveredPayback::Undefined => None,
    };

    DiscountedPayback {
        period,
        status: PaybackStatus::NotRecovered,
    }
}
