use std::collections::BTreeMap;

use serde_json::Value;

use crate::models::session::Session;

/// Field name → required value. Applied as an exact-equality conjunction:
/// a session passes only if every constrained field equals its value, with
/// no type coercion (the string "18" never matches the number 18).
pub type FilterCriteria = BTreeMap<String, Value>;

/// Keep the sessions matching every criterion, preserving input order.
/// An empty criteria map passes everything through unchanged.
pub fn filter_sessions(sessions: Vec<Session>, criteria: &FilterCriteria) -> Vec<Session> {
    sessions
        .into_iter()
        .filter(|session| matches_criteria(session, criteria))
        .collect()
}

fn matches_criteria(session: &Session, criteria: &FilterCriteria) -> bool {
    let fields = match serde_json::to_value(session) {
        Ok(fields) => fields,
        Err(_) => return false,
    };
    criteria
        .iter()
        .all(|(field, required)| fields.get(field) == Some(required))
}
