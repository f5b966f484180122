//! Itemized cost aggregation.
//!
//! ```text
//! equipment = Σ quantity_i × unit_price_i + fixed_installation_cost
//! total     = equipment × (1 + contingency_rate) × (1 + tax_rate)   (markup)
//! total     = equipment                                             (no markup)
//! ```
//!
//! Every line is validated as finite and non-negative before it is summed,
//! so the total is non-negative by construction.

use retrofit_core::constraint::{Constrained, Finite, NonNegative};
use serde::{Deserialize, Serialize};

use crate::error::{InputError, finite_non_negative};

/// One priced item of a cost estimate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CostLine {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
}

impl CostLine {
    pub fn new(description: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
        }
    }

    /// Returns `quantity × unit_price` once both are validated.
    fn amount(&self, index: usize) -> Result<Constrained<f64, NonNegative>, InputError> {
        let check = |field: &'static str, value: f64| {
            finite_non_negative(value).map_err(|source| InputError::InvalidCostLine {
                index,
                description: self.description.clone(),
                field,
                source,
            })
        };

        Ok(check("quantity", self.quantity)? * check("unit_price", self.unit_price)?)
    }
}

fn default_apply_markup() -> bool {
    true
}

/// The cost side of a scenario: priced lines plus a fixed installation cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    #[serde(default)]
    pub lines: Vec<CostLine>,

    #[serde(default)]
    pub fixed_installation_cost: f64,

    /// Whether contingency and tax are added on top of the equipment cost.
    #[serde(default = "default_apply_markup")]
    pub apply_markup: bool,
}

impl Default for CostBreakdown {
    fn default() -> Self {
        Self::from_lines(Vec::new())
    }
}

impl CostBreakdown {
    /// Creates a marked-up breakdown with no fixed installation cost.
    #[must_use]
    pub fn from_lines(lines: Vec<CostLine>) -> Self {
        Self {
            lines,
            fixed_installation_cost: 0.0,
            apply_markup: default_apply_markup(),
        }
    }

    /// Totals the breakdown.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] naming the first cost line (or the fixed
    /// installation cost) that is negative or not finite, or flagging a total
    /// too large to represent.
    pub fn aggregate(&self, markup: &Markup) -> Result<CostSummary, InputError> {
        let lines: Constrained<f64, NonNegative> = self
            .lines
            .iter()
            .enumerate()
            .map(|(index, line)| line.amount(index))
            .sum::<Result<_, _>>()?;

        let fixed = finite_non_negative(self.fixed_installation_cost)
            .map_err(InputError::field("fixed_installation_cost"))?;

        let equipment_cost = Finite::new((lines + fixed).into_inner())
            .map_err(InputError::field("total_investment_cost"))?
            .into_inner();

        let summary = if self.apply_markup {
            CostSummary::with_markup(equipment_cost, markup)
        } else {
            CostSummary::without_markup(equipment_cost)
        };

        Finite::new(summary.total).map_err(InputError::field("total_investment_cost"))?;
        Ok(summary)
    }
}

/// Contingency and tax rates applied to marked-up breakdowns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Markup {
    /// Contingency as a ratio (0.09 = 9 %).
    pub contingency_rate: f64,

    /// Tax as a ratio, applied after contingency.
    pub tax_rate: f64,
}

impl Default for Markup {
    fn default() -> Self {
        Self {
            contingency_rate: 0.09,
            tax_rate: 0.24,
        }
    }
}

/// The aggregated investment cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    /// Sum of all lines plus the fixed installation cost.
    pub equipment_cost: f64,
    pub contingency: f64,
    pub tax: f64,

    /// Total investment cost.
    pub total: f64,
}

impl CostSummary {
    fn with_markup(equipment_cost: f64, markup: &Markup) -> Self {
        let after_contingency = equipment_cost * (1.0 + markup.contingency_rate);
        let total = after_contingency * (1.0 + markup.tax_rate);
        Self {
            equipment_cost,
            contingency: after_contingency - equipment_cost,
            tax: total - after_contingency,
            total,
        }
    }

    fn without_markup(equipment_cost: f64) -> Self {
        Self {
            equipment_cost,
            contingency: 0.0,
            tax: 0.0,
            total: equipment_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use retrofit_core::constraint::ConstraintError;

    fn breakdown(apply_markup: bool) -> CostBreakdown {
        CostBreakdown {
            lines: vec![
                CostLine::new("heat pump", 2.0, 3_000.0),
                CostLine::new("piping", 15.0, 20.0),
            ],
            fixed_installation_cost: 700.0,
            apply_markup,
        }
    }

    #[test]
    fn equipment_cost_without_markup() {
        let summary = breakdown(false).aggregate(&Markup::default()).unwrap();

        assert_eq!(summary.equipment_cost, 7_000.0);
        assert_eq!(summary.total, 7_000.0);
        assert_eq!(summary.contingency, 0.0);
        assert_eq!(summary.tax, 0.0);
    }

    #[test]
    fn markup_compounds_contingency_then_tax() {
        let summary = breakdown(true).aggregate(&Markup::default()).unwrap();

        assert_relative_eq!(summary.total, 7_000.0 * 1.09 * 1.24, max_relative = 1e-12);
        assert_relative_eq!(summary.contingency, 630.0, max_relative = 1e-12);
        assert_relative_eq!(
            summary.equipment_cost + summary.contingency + summary.tax,
            summary.total,
            max_relative = 1e-12
        );
    }

    #[test]
    fn custom_markup() {
        let markup = Markup {
            contingency_rate: 0.0,
            tax_rate: 0.2,
        };
        let summary = breakdown(true).aggregate(&markup).unwrap();
        assert_relative_eq!(summary.total, 8_400.0, max_relative = 1e-12);
    }

    #[test]
    fn empty_breakdown_costs_nothing() {
        let summary = CostBreakdown::default()
            .aggregate(&Markup::default())
            .unwrap();
        assert_eq!(summary.total, 0.0);
    }

    #[test]
    fn rejects_negative_line() {
        let mut costs = breakdown(true);
        costs.lines.push(CostLine::new("credit", 1.0, -50.0));

        let err = costs.aggregate(&Markup::default()).unwrap_err();

        assert_eq!(
            err,
            InputError::InvalidCostLine {
                index: 2,
                description: "credit".into(),
                field: "unit_price",
                source: ConstraintError::Negative,
            }
        );
    }

    #[test]
    fn rejects_non_finite_quantity() {
        let costs = CostBreakdown::from_lines(vec![CostLine::new("panel", f64::NAN, 10.0)]);

        assert!(matches!(
            costs.aggregate(&Markup::default()),
            Err(InputError::InvalidCostLine {
                field: "quantity",
                source: ConstraintError::NotANumber,
                ..
            })
        ));
    }

    #[test]
    fn rejects_negative_fixed_cost() {
        let costs = CostBreakdown {
            fixed_installation_cost: -1.0,
            ..breakdown(false)
        };

        assert_eq!(
            costs.aggregate(&Markup::default()),
            Err(InputError::InvalidField {
                field: "fixed_installation_cost",
                source: ConstraintError::Negative,
            })
        );
    }

    #[test]
    fn rejects_overflowing_total() {
        let costs = CostBreakdown::from_lines(vec![CostLine::new("bulk", 1e200, 1e200)]);

        assert_eq!(
            costs.aggregate(&Markup::default()),
            Err(InputError::InvalidField {
                field: "total_investment_cost",
                source: ConstraintError::NotFinite,
            })
        );
    }

    #[test]
    fn rejects_total_overflowing_after_markup() {
        let costs = CostBreakdown::from_lines(vec![CostLine::new("bulk", 1.0, f64::MAX / 1.01)]);
        assert!(
            CostBreakdown {
                apply_markup: false,
                ..costs.clone()
            }
            .aggregate(&Markup::default())
            .is_ok()
        );

        assert_eq!(
            costs.aggregate(&Markup::default()),
            Err(InputError::InvalidField {
                field: "total_investment_cost",
                source: ConstraintError::NotFinite,
            })
        );
    }

    #[test]
    fn missing_flag_defaults_to_markup() {
        let costs: CostBreakdown = serde_json::from_str(
            r#"{ "lines": [{ "description": "valve", "quantity": 1.0, "unit_price": 100.0 }] }"#,
        )
        .unwrap();
        assert!(costs.apply_markup);
    }
}
