//! Turns a submitted form into a checked `CustomerRecord`.

use crate::domain::model::{CustomerForm, CustomerRecord, PlanChoice};
use crate::domain::ports::Storage;
use crate::utils::error::{ChurnError, Result};
use crate::utils::validation::{validate_minutes, Validate};

fn parse_plan(field_name: &str, raw: &str) -> Result<PlanChoice> {
    raw.parse::<PlanChoice>()
        .map_err(|e| ChurnError::validation(field_name, raw, e.to_string()))
}

/// Loads a submitted form from a JSON file. An unreadable file is an input
/// error, not a system failure.
pub async fn read_form<S: Storage>(storage: &S, path: &str) -> Result<CustomerForm> {
    let bytes = storage
        .read_file(path)
        .await
        .map_err(|e| ChurnError::validation("input", path, format!("Cannot read form: {}", e)))?;
    let content = String::from_utf8(bytes)
        .map_err(|_| ChurnError::validation("input", path, "Form file is not valid UTF-8"))?;
    CustomerForm::from_json(&content)
}

/// Parses the categorical answers and checks the minutes fields.
pub fn collect(form: &CustomerForm) -> Result<CustomerRecord> {
    let international_plan = parse_plan("international_plan", &form.international_plan)?;
    let voice_mail_plan = parse_plan("voice_mail_plan", &form.voice_mail_plan)?;

    validate_minutes("total_day_minutes", form.total_day_minutes)?;
    validate_minutes("total_eve_minutes", form.total_eve_minutes)?;
    validate_minutes("total_night_minutes", form.total_night_minutes)?;
    validate_minutes("total_intl_minutes", form.total_intl_minutes)?;

    Ok(CustomerRecord {
        account_length: form.account_length,
        international_plan,
        voice_mail_plan,
        number_vmail_messages: form.number_vmail_messages,
        total_day_minutes: form.total_day_minutes,
        total_day_calls: form.total_day_calls,
        total_eve_minutes: form.total_eve_minutes,
        total_eve_calls: form.total_eve_calls,
        total_night_minutes: form.total_night_minutes,
        total_night_calls: form.total_night_calls,
        total_intl_minutes: form.total_intl_minutes,
        total_intl_calls: form.total_intl_calls,
        customer_service_calls: form.customer_service_calls,
    })
}

/// Rejects a record whose numeric fields are all zero. Plans are not checked.
pub fn validate(record: &CustomerRecord) -> Result<()> {
    let counts = [
        record.account_length,
        record.number_vmail_messages,
        record.total_day_calls,
        record.total_eve_calls,
        record.total_night_calls,
        record.total_intl_calls,
        record.customer_service_calls,
    ];
    let minutes = [
        record.total_day_minutes,
        record.total_eve_minutes,
        record.total_night_minutes,
        record.total_intl_minutes,
    ];

    if counts.iter().all(|&v| v == 0) && minutes.iter().all(|&v| v == 0.0) {
        return Err(ChurnError::EmptyInput);
    }
    Ok(())
}

impl TryFrom<&CustomerForm> for CustomerRecord {
    type Error = ChurnError;

    fn try_from(form: &CustomerForm) -> Result<Self> {
        collect(form)
    }
}

impl Validate for CustomerRecord {
    fn validate(&self) -> Result<()> {
        validate(self)
    }
}
