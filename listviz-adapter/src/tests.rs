use crate::*;

use listviz::{EngineOptions, MessageKind, Operation, Outcome};

#[test]
fn parse_number_reads_leading_integer() {
    assert_eq!(parse_number("42"), Some(42));
    assert_eq!(parse_number("  -7"), Some(-7));
    assert_eq!(parse_number("+3"), Some(3));
    assert_eq!(parse_number("12.5"), Some(12));
    assert_eq!(parse_number("8abc"), Some(8));
    assert_eq!(parse_number(""), None);
    assert_eq!(parse_number("   "), None);
    assert_eq!(parse_number("-"), None);
    assert_eq!(parse_number("abc"), None);
    assert_eq!(parse_number("99999999999999999999"), None);
}

#[test]
fn from_input_ignores_blank_required_fields() {
    assert_eq!(Command::from_input(Operation::InsertAtHead, "", ""), None);
    assert_eq!(Command::from_input(Operation::InsertAtPosition, "5", ""), None);
    assert_eq!(Command::from_input(Operation::DeleteAtPosition, "5", ""), None);
    assert_eq!(Command::from_input(Operation::Search, "", "1"), None);

    assert_eq!(
        Command::from_input(Operation::InsertAtPosition, "5", "-1"),
        Some(Command::InsertAtPosition { value: 5, pos: -1 })
    );
    assert_eq!(
        Command::from_input(Operation::DeleteFromTail, "", ""),
        Some(Command::DeleteFromTail)
    );
    assert_eq!(
        Command::from_input(Operation::Reverse, "junk", "junk"),
        Some(Command::Reverse)
    );
}

#[test]
fn every_operation_round_trips_through_command() {
    for op in Operation::ALL {
        let cmd = Command::from_input(op, "1", "0").unwrap();
        assert_eq!(cmd.op(), op);
    }
}

#[test]
fn insert_marker_clears_after_dwell() {
    let mut c = Controller::default();
    let r = c.apply(Command::InsertAtTail(10), 1_000);
    assert_eq!(r.outcome, Outcome::Ok);
    assert_eq!(c.engine().new_index(), Some(0));
    assert_eq!(c.status().unwrap().text, "Node added at tail!");
    assert_eq!(c.next_deadline(), Some(1_300));

    assert!(!c.tick(1_299));
    assert_eq!(c.engine().new_index(), Some(0));
    assert!(c.tick(1_300));
    assert_eq!(c.engine().new_index(), None);
    assert!(c.status().is_some());

    assert!(c.tick(3_000));
    assert!(c.status().is_none());
    assert!(c.is_idle());
}

#[test]
fn search_highlight_and_message_share_alert_dwell() {
    let mut c = Controller::from_engine(
        listviz::Engine::from_values([3, 1, 4], EngineOptions::new()),
        Dwell::default(),
    );
    c.apply(Command::Search(4), 0);
    assert_eq!(c.engine().highlight_index(), Some(2));
    assert_eq!(c.next_deadline(), Some(3_000));

    assert!(!c.tick(2_999));
    assert!(c.tick(3_000));
    assert_eq!(c.engine().highlight_index(), None);
    assert!(c.status().is_none());
}

#[test]
fn newer_message_replaces_older_one() {
    let mut c = Controller::default();
    c.apply(Command::InsertAtHead(1), 0);
    let r = c.apply(Command::InsertAtPosition { value: 2, pos: 9 }, 1_000);
    assert_eq!(r.outcome, Outcome::InvalidPosition);

    let status = c.status().unwrap();
    assert_eq!(status.kind, MessageKind::Error);
    assert_eq!(status.text, "Invalid position!");

    // The first message would have expired at 2_000.
    c.tick(2_000);
    assert!(c.status().is_some());
    c.tick(4_000);
    assert!(c.status().is_none());
}

#[test]
fn noop_keeps_current_message() {
    let mut c = Controller::default();
    c.apply(Command::Reverse, 0);
    let r = c.apply(Command::DeleteFromHead, 10);
    assert_eq!(r.outcome, Outcome::Noop);
    assert_eq!(c.status().unwrap().text, "List reversed!");
    assert_eq!(c.next_deadline(), Some(2_000));
}

#[test]
fn reference_options_do_not_arm_positional_marker() {
    let mut c = Controller::new(EngineOptions::reference(), Dwell::default());
    c.apply(Command::InsertAtPosition { value: 1, pos: 0 }, 0);
    assert_eq!(c.engine().new_index(), None);
    // Only the status message is pending.
    assert_eq!(c.next_deadline(), Some(2_000));
}

#[test]
fn unmarked_positional_insert_keeps_earlier_deadline() {
    let mut c = Controller::new(EngineOptions::reference(), Dwell::default());
    c.apply(Command::InsertAtHead(1), 0);
    c.apply(Command::InsertAtPosition { value: 2, pos: 1 }, 250);
    assert_eq!(c.engine().new_index(), Some(0));

    assert!(c.tick(300));
    assert_eq!(c.engine().new_index(), None);
}

#[test]
fn tick_reports_false_for_markers_already_gone() {
    let mut c = Controller::from_engine(
        listviz::Engine::from_values([1, 2, 3], EngineOptions::new()),
        Dwell::default(),
    );
    c.apply(Command::Search(3), 0);
    c.apply(Command::DeleteFromTail, 100);
    assert_eq!(c.engine().highlight_index(), None);

    assert!(c.tick(2_100));
    assert!(c.status().is_none());
    assert!(!c.tick(3_000));
    assert!(c.is_idle());
}

#[test]
fn submit_parses_fields() {
    let mut c = Controller::default();
    assert!(c.submit(Operation::InsertAtHead, "", "", 0).is_none());
    assert!(c.status().is_none());

    c.submit(Operation::InsertAtTail, "10", "", 0).unwrap();
    c.submit(Operation::InsertAtTail, "20", "", 0).unwrap();
    c.submit(Operation::InsertAtHead, "5", "", 0).unwrap();
    c.submit(Operation::DeleteAtPosition, "", "1", 0).unwrap();
    c.submit(Operation::Reverse, "", "", 0).unwrap();
    assert_eq!(c.engine().values(), &[20, 5]);
}

#[test]
fn clear_transients_resets_everything() {
    let mut c = Controller::default();
    c.apply(Command::InsertAtHead(1), 0);
    c.apply(Command::Search(1), 0);
    c.clear_transients();
    assert!(c.is_idle());
    assert!(c.status().is_none());
    assert_eq!(c.engine().new_index(), None);
    assert_eq!(c.engine().highlight_index(), None);
}

#[test]
fn shared_engine_serializes_callers() {
    let shared = SharedEngine::default();
    let handles: std::vec::Vec<_> = (0..4)
        .map(|t| {
            let shared = shared.clone();
            std::thread::spawn(move || {
                for i in 0..25 {
                    shared.apply(Command::InsertAtTail(t * 100 + i), 0);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(shared.snapshot().values.len(), 100);
    assert!(shared.tick(10_000));
    assert!(shared.with(|c| c.is_idle()));
}
