use tracing::info;

use crate::models::session::{FeeType, Session};
use crate::notify::Notify;

/// What the reporter does with one filtered session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Paid sessions are never reported, regardless of capacity.
    Skipped,
    /// Free session with zero total capacity: informational line only.
    NoSlots,
    /// Free session with open capacity: detail block plus audible alert.
    Available,
}

pub fn assess(session: &Session) -> Outcome {
    if session.fee_type == FeeType::Paid {
        Outcome::Skipped
    } else if session.available_capacity == 0 {
        Outcome::NoSlots
    } else {
        Outcome::Available
    }
}

/// Log the filtered sessions and fire the alert for each bookable one.
pub fn report_sessions(sessions: &[Session], notifier: &dyn Notify) {
    if sessions.is_empty() {
        info!("Sorry! No centers available\n");
        return;
    }

    for session in sessions {
        match assess(session) {
            Outcome::Skipped => {}
            Outcome::NoSlots => {
                info!("Sorry! Center {} has no available slots\n", session.name);
            }
            Outcome::Available => {
                info!("{}", detail_block(session));
                notifier.alert();
            }
        }
    }
}

fn detail_block(session: &Session) -> String {
    format!(
        "\nCenter Name: {}\nDose 1 Slots Available: {}\nDose 2 Slots Available: {}\nVaccine: {}\nPincode: {}\nDate: {}\n",
        session.name,
        capacity_or_dash(session.available_capacity_dose1),
        capacity_or_dash(session.available_capacity_dose2),
        session.vaccine,
        session.pincode,
        session.date,
    )
}

fn capacity_or_dash(capacity: Option<u32>) -> String {
    match capacity {
        Some(n) => n.to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct RecordingNotifier {
        alerts: AtomicUsize,
    }

    impl RecordingNotifier {
        fn new() -> Self {
            RecordingNotifier {
                alerts: AtomicUsize::new(0),
            }
        }

        fn count(&self) -> usize {
            self.alerts.load(Ordering::SeqCst)
        }
    }

    impl Notify for RecordingNotifier {
        fn alert(&self) {
            self.alerts.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn session(name: &str, fee_type: FeeType, capacity: u32) -> Session {
        Session {
            name: name.to_string(),
            pincode: 400057,
            date: "07-08-2021".to_string(),
            vaccine: "COVISHIELD".to_string(),
            fee_type,
            available_capacity: capacity,
            available_capacity_dose1: Some(capacity / 2),
            available_capacity_dose2: Some(capacity - capacity / 2),
            min_age_limit: 18,
        }
    }

    #[test]
    fn paid_sessions_are_skipped_regardless_of_capacity() {
        assert_eq!(assess(&session("A", FeeType::Paid, 5)), Outcome::Skipped);
        assert_eq!(assess(&session("A", FeeType::Paid, 0)), Outcome::Skipped);
    }

    #[test]
    fn free_session_with_zero_capacity_has_no_slots() {
        assert_eq!(assess(&session("B", FeeType::Free, 0)), Outcome::NoSlots);
    }

    #[test]
    fn free_session_with_capacity_is_available() {
        assert_eq!(assess(&session("C", FeeType::Free, 3)), Outcome::Available);
    }

    #[test]
    fn alerts_fire_once_per_bookable_session() {
        let notifier = RecordingNotifier::new();
        let sessions = vec![
            session("A", FeeType::Paid, 5),
            session("B", FeeType::Free, 0),
            session("C", FeeType::Free, 3),
        ];

        report_sessions(&sessions, &notifier);
        assert_eq!(notifier.count(), 1);
    }

    #[test]
    fn empty_list_triggers_no_alert() {
        let notifier = RecordingNotifier::new();
        report_sessions(&[], &notifier);
        assert_eq!(notifier.count(), 0);
    }

    #[test]
    fn detail_block_lists_all_fields() {
        let block = detail_block(&session("Cooper Hospital", FeeType::Free, 10));
        assert!(block.contains("Center Name: Cooper Hospital"));
        assert!(block.contains("Dose 1 Slots Available: 5"));
        assert!(block.contains("Dose 2 Slots Available: 5"));
        assert!(block.contains("Vaccine: COVISHIELD"));
        assert!(block.contains("Pincode: 400057"));
        assert!(block.contains("Date: 07-08-2021"));
    }

    #[test]
    fn missing_dose_capacity_renders_as_dash() {
        let mut s = session("Cooper Hospital", FeeType::Free, 10);
        s.available_capacity_dose1 = None;
        assert!(detail_block(&s).contains("Dose 1 Slots Available: -"));
    }
}
