// Pricing tier catalog.
// Static subscription tiers, the feature comparison table, and billing FAQ.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Subscription tier identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanId {
    #[default]
    Free,
    Advanced,
    Pro,
    Elite,
}

impl PlanId {
    pub fn id(&self) -> &'static str {
        match self {
            PlanId::Free => "free",
            PlanId::Advanced => "advanced",
            PlanId::Pro => "pro",
            PlanId::Elite => "elite",
        }
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PlanId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(PlanId::Free),
            "advanced" => Ok(PlanId::Advanced),
            "pro" => Ok(PlanId::Pro),
            "elite" => Ok(PlanId::Elite),
            other => Err(format!("unknown plan: {}", other)),
        }
    }
}

/// Billing cadence shown on the pricing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn toggle(&self) -> Self {
        match self {
            BillingCycle::Monthly => BillingCycle::Yearly,
            BillingCycle::Yearly => BillingCycle::Monthly,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Yearly => "yearly",
        }
    }
}

/// A subscription tier. Prices are in cents per month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingPlan {
    pub id: PlanId,
    pub name: &'static str,
    pub monthly_cents: u32,
    /// Per-month price when billed yearly (10% off).
    pub yearly_cents: u32,
    pub features: &'static [&'static str],
    pub limitations: &'static [&'static str],
    pub popular: bool,
}

impl PricingPlan {
    pub fn is_free(&self) -> bool {
        self.monthly_cents == 0
    }

    /// Per-month price for the given billing cycle.
    pub fn price_cents(&self, cycle: BillingCycle) -> u32 {
        match cycle {
            BillingCycle::Monthly => self.monthly_cents,
            BillingCycle::Yearly => self.yearly_cents,
        }
    }

    /// Whole dollars saved per year on yearly billing, rounded half up.
    /// Twelve months at a 10% discount is 1.2 monthly prices.
    pub fn yearly_savings_dollars(&self) -> u32 {
        (self.monthly_cents * 12 + 500) / 1000
    }
}

/// Format a cent amount as a price label.
pub fn format_price(cents: u32) -> String {
    if cents == 0 {
        "Free".to_string()
    } else {
        format!("${}.{:02}", cents / 100, cents % 100)
    }
}

pub static PLANS: [PricingPlan; 4] = [
    PricingPlan {
        id: PlanId::Free,
        name: "FREE",
        monthly_cents: 0,
        yearly_cents: 0,
        features: &[
            "3 video analyses per month",
            "Basic technique feedback",
            "Standard model only",
            "Basic progress tracking",
        ],
        limitations: &[
            "Limited to 30-second videos",
            "No advanced analytics",
            "No video export",
        ],
        popular: false,
    },
    PricingPlan {
        id: PlanId::Advanced,
        name: "ADVANCED",
        monthly_cents: 1199,
        yearly_cents: 1079,
        features: &[
            "25 video analyses per month",
            "All pro models (Federer, Nadal)",
            "Detailed mistake detection",
            "Slow-motion breakdowns",
            "Progress analytics",
            "Video export (720p)",
        ],
        limitations: &[],
        popular: false,
    },
    PricingPlan {
        id: PlanId::Pro,
        name: "PRO",
        monthly_cents: 2299,
        yearly_cents: 2069,
        features: &[
            "100 video analyses per month",
            "All pro models + custom training",
            "Advanced biomechanics analysis",
            "Frame-by-frame breakdown",
            "Personalized improvement plans",
            "HD video export (1080p)",
            "Priority support",
            "PDF technique reports",
        ],
        limitations: &[],
        popular: true,
    },
    PricingPlan {
        id: PlanId::Elite,
        name: "ELITE",
        monthly_cents: 3399,
        yearly_cents: 3059,
        features: &[
            "Unlimited video analyses",
            "All features + AI coach chat",
            "Real-time technique scoring",
            "Custom drill recommendations",
            "4K video export",
            "Team/coach dashboard",
            "API access",
            "White-label options",
            "Dedicated account manager",
        ],
        limitations: &[],
        popular: false,
    },
];

/// Look up a plan by identifier.
pub fn plan(id: PlanId) -> &'static PricingPlan {
    PLANS
        .iter()
        .find(|p| p.id == id)
        .unwrap_or(&PLANS[0])
}

/// Feature comparison rows: label followed by one cell per plan, in `PLANS` order.
pub static COMPARISON: [(&str, [&str; 4]); 5] = [
    ("Monthly video analyses", ["3", "25", "100", "Unlimited"]),
    ("Pro models (Federer, Nadal)", ["no", "yes", "yes", "yes"]),
    ("Video export quality", ["None", "720p", "1080p", "4K"]),
    ("Advanced analytics", ["no", "yes", "yes", "yes"]),
    ("Priority support", ["no", "no", "yes", "yes"]),
];

pub static FAQ: [(&str, &str); 4] = [
    (
        "Can I change plans anytime?",
        "Yes, you can upgrade or downgrade your plan at any time. Changes take effect immediately.",
    ),
    (
        "What payment methods do you accept?",
        "We accept all major credit cards, PayPal, and bank transfers for yearly subscriptions.",
    ),
    (
        "Is there a free trial?",
        "Our FREE plan gives you 3 analyses per month. Upgrade anytime to unlock more features.",
    ),
    (
        "Can I cancel anytime?",
        "Absolutely. Cancel your subscription anytime with no cancellation fees or penalties.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_order_and_ids() {
        let ids: Vec<&str> = PLANS.iter().map(|p| p.id.id()).collect();
        assert_eq!(ids, ["free", "advanced", "pro", "elite"]);
        assert_eq!(PLANS.iter().filter(|p| p.popular).count(), 1);
        assert!(plan(PlanId::Pro).popular);
    }

    #[test]
    fn test_yearly_price_is_ten_percent_off() {
        for p in PLANS.iter() {
            // Catalog prices are truncated to the cent
            let discounted = p.monthly_cents * 9 / 10;
            assert!(p.yearly_cents.abs_diff(discounted) <= 1, "{}", p.name);
        }
    }

    #[test]
    fn test_yearly_savings() {
        assert_eq!(plan(PlanId::Free).yearly_savings_dollars(), 0);
        assert_eq!(plan(PlanId::Advanced).yearly_savings_dollars(), 14);
        assert_eq!(plan(PlanId::Pro).yearly_savings_dollars(), 28);
        assert_eq!(plan(PlanId::Elite).yearly_savings_dollars(), 41);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "Free");
        assert_eq!(format_price(1199), "$11.99");
        assert_eq!(format_price(3059), "$30.59");
        assert_eq!(format_price(500), "$5.00");
    }

    #[test]
    fn test_billing_toggle() {
        let cycle = BillingCycle::default();
        assert_eq!(cycle, BillingCycle::Monthly);
        assert_eq!(cycle.toggle(), BillingCycle::Yearly);
        assert_eq!(cycle.toggle().toggle(), BillingCycle::Monthly);
        assert_eq!(plan(PlanId::Elite).price_cents(BillingCycle::Yearly), 3059);
    }

    #[test]
    fn test_plan_parse() {
        assert_eq!("PRO".parse(), Ok(PlanId::Pro));
        assert!("platinum".parse::<PlanId>().is_err());
    }
}
