use churn_advisor::core::encoder::encode;
use churn_advisor::core::intake;
use churn_advisor::core::suggestions::{
    suggest, CHURN_RULES, EXPERIENCE_SURVEY, NEW_CUSTOMER_INCENTIVES, RETAIN_RULES,
};
use churn_advisor::domain::model::{ChurnLabel, CustomerForm, CustomerRecord};

fn record(form: CustomerForm) -> CustomerRecord {
    intake::collect(&form).unwrap()
}

#[test]
fn test_new_customer_with_no_service_calls() {
    let r = record(CustomerForm {
        account_length: 30,
        customer_service_calls: 0,
        ..CustomerForm::default()
    });
    let out = suggest(&r, ChurnLabel::NoChurn);
    assert_eq!(out.first().map(String::as_str), Some(NEW_CUSTOMER_INCENTIVES));
    assert_eq!(out.last().map(String::as_str), Some(EXPERIENCE_SURVEY));
}

#[test]
fn test_tables_have_declared_sizes() {
    assert_eq!(CHURN_RULES.len(), 9);
    assert_eq!(RETAIN_RULES.len(), 5);
}

#[test]
fn test_output_follows_table_order() {
    let r = record(CustomerForm {
        account_length: 10,
        international_plan: "No".to_string(),
        voice_mail_plan: "No".to_string(),
        number_vmail_messages: 30,
        total_day_minutes: 320.0,
        total_intl_minutes: 25.0,
        total_intl_calls: 12,
        customer_service_calls: 0,
        ..CustomerForm::default()
    });

    for (label, table) in [
        (ChurnLabel::Churn, &CHURN_RULES[..]),
        (ChurnLabel::NoChurn, &RETAIN_RULES[..]),
    ] {
        let out = suggest(&r, label);
        assert!(!out.is_empty());
        let positions: Vec<usize> = out
            .iter()
            .map(|m| table.iter().position(|rule| rule.message == m.as_str()).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }
}

#[test]
fn test_same_record_same_outputs() {
    let a = record(CustomerForm::default());
    let b = record(CustomerForm::default());
    assert_eq!(encode(&a), encode(&b));
    assert_eq!(suggest(&a, ChurnLabel::Churn), suggest(&b, ChurnLabel::Churn));
}
