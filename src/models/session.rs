use serde::{Deserialize, Serialize};

/// Whether a session charges for the dose. CoWin only ever emits these two
/// values; anything else fails decoding as a malformed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeeType {
    Free,
    Paid,
}

/// One vaccination-center appointment entry for a given date and pincode,
/// as returned by the CoWin `findByPin` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
    pub pincode: u32,
    pub date: String,
    pub vaccine: String,
    pub fee_type: FeeType,
    pub available_capacity: u32,
    pub available_capacity_dose1: Option<u32>,
    pub available_capacity_dose2: Option<u32>,
    pub min_age_limit: u32,
}

/// Top-level shape of a `findByPin` response. A body without the `sessions`
/// key fails to decode instead of surfacing as a lookup error downstream.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionsResponse {
    pub sessions: Vec<Session>,
}
