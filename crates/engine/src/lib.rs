//! Energy-savings and investment-viability engine for building retrofits.
//!
//! The engine turns the physical description of a retrofit scenario (an air
//! conditioner swap, a roof insulation job, a photovoltaic array, ...) into an
//! annual savings figure and then into the financial metrics an auditor needs
//! to rank it: total investment, annual benefit, simple and discounted
//! payback, Net Present Value, and Internal Rate of Return.
//!
//! Every evaluation is a pure function of its inputs. Persistence, request
//! handling, and the decision of *when* to re-evaluate belong to the caller.
//!
//! # Modules
//!
//! - [`units`]: unit and physics conversions shared by the calculators
//! - [`savings`]: one savings calculator per scenario family
//! - [`cost`]: itemized cost aggregation with optional contingency and tax
//! - [`cashflow`]: the discounted cash-flow series behind NPV and payback
//! - [`financial`]: payback, NPV, and IRR
//! - [`scenario`]: the tagged scenario input records
//! - [`pipeline`]: validation, dispatch, and price resolution
//! - [`config`]: TOML-loadable engine policy
//!
//! # Example
//!
//! ```
//! use retrofit_engine::{
//!     config::EngineConfig,
//!     cost::{CostBreakdown, CostLine},
//!     pipeline::{ProjectPrices, ScenarioEvaluationPipeline},
//!     savings::lighting::{BulbReplacement, LightingLoad},
//!     scenario::{EconomicParameters, Measure, ScenarioInput},
//! };
//!
//! let pipeline = ScenarioEvaluationPipeline::new(EngineConfig::default()).unwrap();
//!
//! let input = ScenarioInput {
//!     measure: Measure::BulbReplacement(BulbReplacement {
//!         old: LightingLoad { power_w: 60.0, quantity: 40, hours_per_year: 2500.0 },
//!         new: LightingLoad { power_w: 9.0, quantity: 40, hours_per_year: 2500.0 },
//!     }),
//!     costs: CostBreakdown::from_lines(vec![CostLine::new("LED bulb", 40.0, 6.5)]),
//!     economics: EconomicParameters {
//!         energy_price_per_kwh: None,
//!         maintenance_cost_annual: 0.0,
//!         lifespan_years: 10,
//!         discount_rate_percent: 4.0,
//!     },
//! };
//!
//! let prices = ProjectPrices { electricity_per_kwh: Some(0.2), heating_fuel_per_kwh: None };
//! let evaluation = pipeline.evaluate(&input, &prices).unwrap();
//!
//! assert!(evaluation.financial.net_present_value > 0.0);
//! ```

pub mod cashflow;
pub mod config;
pub mod cost;
mod error;
pub mod financial;
pub mod pipeline;
pub mod savings;
pub mod scenario;
pub mod units;

pub use error::InputError;
