use crate::domain::model::{CustomerRecord, FeatureVector};

/// Assembles the model input in fixed column order (see `FEATURE_COLUMNS`).
pub fn encode(record: &CustomerRecord) -> FeatureVector {
    FeatureVector([
        f64::from(record.account_length),
        record.international_plan.index(),
        record.voice_mail_plan.index(),
        f64::from(record.number_vmail_messages),
        record.total_day_minutes,
        f64::from(record.total_day_calls),
        record.total_eve_minutes,
        f64::from(record.total_eve_calls),
        record.total_night_minutes,
        f64::from(record.total_night_calls),
        record.total_intl_minutes,
        f64::from(record.total_intl_calls),
        f64::from(record.customer_service_calls),
    ])
}
