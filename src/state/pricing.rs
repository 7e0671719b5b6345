// Pricing view state.
// Billing cycle toggle, highlighted tier, and the mock subscribe action.

use tracing::info;

use crate::catalog::pricing::plan;
use crate::catalog::{BillingCycle, PLANS, PlanId, PricingPlan};

/// State for the Pricing view.
#[derive(Debug)]
pub struct PricingPanel {
    pub billing: BillingCycle,
    /// Index into `PLANS` of the highlighted card.
    pub selected: usize,
    pub current_plan: PlanId,
}

impl PricingPanel {
    pub fn new(current_plan: PlanId) -> Self {
        Self {
            billing: BillingCycle::default(),
            selected: 0,
            current_plan,
        }
    }

    pub fn toggle_billing(&mut self) {
        self.billing = self.billing.toggle();
    }

    pub fn selected_plan(&self) -> &'static PricingPlan {
        &PLANS[self.selected.min(PLANS.len() - 1)]
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < PLANS.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Tier the user is subscribed to.
    pub fn current(&self) -> &'static PricingPlan {
        plan(self.current_plan)
    }

    pub fn is_current(&self, plan: &PricingPlan) -> bool {
        plan.id == self.current_plan
    }

    /// Call-to-action label for a card.
    pub fn action_label(&self, plan: &PricingPlan) -> &'static str {
        if self.is_current(plan) {
            "Current Plan"
        } else if plan.is_free() {
            "Get Started"
        } else {
            "Upgrade Now"
        }
    }

    /// Subscribe to the highlighted plan. No payment is taken; the returned
    /// message is shown to the user. Returns None for the current plan.
    pub fn subscribe(&self) -> Option<String> {
        let plan = self.selected_plan();
        if self.is_current(plan) {
            return None;
        }
        info!(plan = plan.id.id(), billing = self.billing.label(), "subscribe requested");
        Some(format!(
            "Redirecting to payment for {} plan ({} billing)",
            plan.id.id().to_uppercase(),
            self.billing.label()
        ))
    }
}

impl Default for PricingPanel {
    fn default() -> Self {
        Self::new(PlanId::Free)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_current_plan_disabled() {
        let panel = PricingPanel::default();
        assert_eq!(panel.selected_plan().id, PlanId::Free);
        assert_eq!(panel.subscribe(), None);
        assert_eq!(panel.action_label(panel.selected_plan()), "Current Plan");
    }

    #[test]
    fn test_subscribe_message() {
        let mut panel = PricingPanel::default();
        panel.select_next();
        panel.select_next();
        panel.toggle_billing();
        assert_eq!(panel.selected_plan().id, PlanId::Pro);
        assert_eq!(
            panel.subscribe().as_deref(),
            Some("Redirecting to payment for PRO plan (yearly billing)")
        );
        assert_eq!(panel.action_label(panel.selected_plan()), "Upgrade Now");
    }

    #[test]
    fn test_free_plan_label_when_paying() {
        let panel = PricingPanel::new(PlanId::Elite);
        assert_eq!(panel.current().name, "ELITE");
        assert_eq!(panel.action_label(&PLANS[0]), "Get Started");
        assert!(panel.subscribe().is_some());
    }

    #[test]
    fn test_selection_bounds() {
        let mut panel = PricingPanel::default();
        panel.select_prev();
        assert_eq!(panel.selected, 0);
        for _ in 0..10 {
            panel.select_next();
        }
        assert_eq!(panel.selected_plan().id, PlanId::Elite);
    }
}
