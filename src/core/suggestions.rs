//! Retention suggestions as ordered decision tables.
//!
//! Every rule in the table for the predicted label is evaluated; each one
//! that matches contributes its message, in table order. Rules are
//! independent: there is no early exit and no fallback message.

use crate::domain::model::{ChurnLabel, CustomerRecord, PlanChoice};

pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&CustomerRecord) -> bool,
    pub message: &'static str,
}

pub const LOYALTY_PROGRAM: &str = "Long-term customer, send a loyalty program.";
pub const IMPROVE_NEW_CUSTOMER_EXPERIENCE: &str =
    "New customer, improve their service experience.";
pub const PROPOSE_INTL_PLAN_ON_CHURN: &str = "Propose an international plan to reduce costs.";
pub const RECOMMEND_VOICEMAIL: &str = "Recommend signing up for voicemail service.";
pub const UNLIMITED_DAY_PLAN: &str = "Propose an unlimited day plan.";
pub const EVENING_DISCOUNT: &str = "Propose an evening call discount plan.";
pub const NIGHT_DISCOUNT: &str = "Consider offering a night plan discount.";
pub const INTL_CALL_DISCOUNT: &str = "Introduce an international call discount plan.";
pub const SUPPORT_FOLLOW_UP: &str = "Check the customer's issues and provide timely support.";

pub const GRATITUDE_PROGRAM: &str = "These are loyal customers, come up with gratitude programs.";
pub const NEW_CUSTOMER_INCENTIVES: &str = "This is a new customer, please offer special incentives and policies to increase service experience and retain customers.";
pub const REGULAR_USAGE_PROMO: &str = "These are customers who regularly use the company's services. Make promotional announcements like the next recharge discount";
pub const PROPOSE_INTL_PLAN_ON_RETAIN: &str =
    "Propose signing up for an international plan to reduce costs.";
pub const EXPERIENCE_SURVEY: &str = "Participate in our experience survey to receive offers.";

fn long_tenure(r: &CustomerRecord) -> bool {
    r.account_length > 180
}

fn short_tenure(r: &CustomerRecord) -> bool {
    r.account_length < 50
}

fn in_band(value: f64, low: f64, high: f64) -> bool {
    (low..=high).contains(&value)
}

pub static CHURN_RULES: [Rule; 9] = [
    Rule {
        name: "long_tenure",
        applies: long_tenure,
        message: LOYALTY_PROGRAM,
    },
    Rule {
        name: "short_tenure",
        applies: short_tenure,
        message: IMPROVE_NEW_CUSTOMER_EXPERIENCE,
    },
    Rule {
        name: "heavy_intl_without_plan",
        applies: |r| r.international_plan == PlanChoice::No && r.total_intl_minutes > 15.0,
        message: PROPOSE_INTL_PLAN_ON_CHURN,
    },
    Rule {
        name: "voicemail_without_plan",
        applies: |r| r.voice_mail_plan == PlanChoice::No && r.number_vmail_messages > 10,
        message: RECOMMEND_VOICEMAIL,
    },
    Rule {
        name: "heavy_day_usage",
        applies: |r| r.total_day_minutes > 250.0,
        message: UNLIMITED_DAY_PLAN,
    },
    Rule {
        name: "heavy_evening_usage",
        applies: |r| r.total_eve_minutes > 300.0,
        message: EVENING_DISCOUNT,
    },
    Rule {
        name: "heavy_night_usage",
        applies: |r| r.total_night_minutes > 350.0,
        message: NIGHT_DISCOUNT,
    },
    Rule {
        name: "frequent_intl_calls",
        applies: |r| r.total_intl_calls > 10,
        message: INTL_CALL_DISCOUNT,
    },
    Rule {
        name: "many_service_calls",
        applies: |r| r.customer_service_calls > 5,
        message: SUPPORT_FOLLOW_UP,
    },
];

pub static RETAIN_RULES: [Rule; 5] = [
    Rule {
        name: "long_tenure",
        applies: long_tenure,
        message: GRATITUDE_PROGRAM,
    },
    Rule {
        name: "short_tenure",
        applies: short_tenure,
        message: NEW_CUSTOMER_INCENTIVES,
    },
    Rule {
        name: "regular_usage",
        applies: |r| {
            in_band(r.total_day_minutes, 50.0, 200.0)
                && in_band(r.total_eve_minutes, 100.0, 250.0)
                && in_band(r.total_night_minutes, 100.0, 250.0)
        },
        message: REGULAR_USAGE_PROMO,
    },
    Rule {
        name: "intl_usage_without_plan",
        applies: |r| r.total_intl_minutes > 10.0 && r.international_plan == PlanChoice::No,
        message: PROPOSE_INTL_PLAN_ON_RETAIN,
    },
    Rule {
        name: "no_service_calls",
        applies: |r| r.customer_service_calls == 0,
        message: EXPERIENCE_SURVEY,
    },
];

pub fn rules_for(label: ChurnLabel) -> &'static [Rule] {
    match label {
        ChurnLabel::Churn => &CHURN_RULES,
        ChurnLabel::NoChurn => &RETAIN_RULES,
    }
}

/// Messages of every matching rule for `label`, in declaration order.
pub fn suggest(record: &CustomerRecord, label: ChurnLabel) -> Vec<String> {
    rules_for(label)
        .iter()
        .filter(|rule| {
            let hit = (rule.applies)(record);
            if hit {
                tracing::debug!("rule '{}' matched", rule.name);
            }
            hit
        })
        .map(|rule| rule.message.to_string())
        .collect()
}
