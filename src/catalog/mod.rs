// Static catalog data.
// Analysis models, pricing tiers, and sample practice history.

pub mod history;
pub mod models;
pub mod pricing;

pub use history::{HistoryRecord, average_score, best_score, sample_history};
pub use models::ModelSelection;
pub use pricing::{BillingCycle, PLANS, PlanId, PricingPlan, format_price};
