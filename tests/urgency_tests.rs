use pathboard::board::{Eta, Urgency};
use serde_json::json;

#[test]
fn urgency_at_zero_minutes() {
    assert_eq!(Urgency::from_eta(&Eta::Minutes(0)), Urgency::Urgent);
}

#[test]
fn urgency_at_five_minutes() {
    assert_eq!(Urgency::from_eta(&Eta::Minutes(5)), Urgency::Urgent);
}

#[test]
fn urgency_at_six_minutes() {
    assert_eq!(Urgency::from_eta(&Eta::Minutes(6)), Urgency::Warning);
}

#[test]
fn urgency_at_ten_minutes() {
    assert_eq!(Urgency::from_eta(&Eta::Minutes(10)), Urgency::Warning);
}

#[test]
fn urgency_at_eleven_minutes() {
    assert_eq!(Urgency::from_eta(&Eta::Minutes(11)), Urgency::Normal);
}

#[test]
fn urgency_far_out() {
    assert_eq!(Urgency::from_eta(&Eta::Minutes(45)), Urgency::Normal);
}

#[test]
fn urgency_for_delayed_trains() {
    assert_eq!(Urgency::from_eta(&Eta::Delayed), Urgency::Urgent);
}

#[test]
fn urgency_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Urgency::Urgent).unwrap(), json!("urgent"));
    assert_eq!(serde_json::to_value(Urgency::Warning).unwrap(), json!("warning"));
    assert_eq!(serde_json::to_value(Urgency::Normal).unwrap(), json!("normal"));
}
