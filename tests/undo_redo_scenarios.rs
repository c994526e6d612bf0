//! Undo/redo behavior of the history log
//!
//! Walks through the documented scenarios and checks the capacity and
//! post-condition invariants over randomized operation sequences.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use undo_accumulator::{Accumulator, EngineConfig, HistoryLog, Operation, Session, Snapshot};

fn assert_tail_matches(log: &HistoryLog, acc: &Accumulator) {
    if let Some(last) = log.last() {
        assert_eq!(last.snapshot.value(), acc.value());
    }
}

/// 0 -> add 1 -> multiply 2 -> undo -> undo
#[test]
fn test_undo_walks_back_to_start() {
    let mut session = Session::default();

    assert_eq!(session.apply(Operation::Add(1)).unwrap(), 1);
    assert_eq!(session.apply(Operation::Multiply(2)).unwrap(), 2);
    assert_eq!(session.undo(), Some(1));
    assert_eq!(session.undo(), Some(0));
    assert!(session.history().is_empty());
}

/// 0 -> add 1 -> redo -> redo
#[test]
fn test_redo_repeats_last_operation() {
    let mut session = Session::default();

    assert_eq!(session.apply(Operation::Add(1)).unwrap(), 1);
    assert_eq!(session.redo().unwrap(), Some(2));
    assert_eq!(session.redo().unwrap(), Some(3));
    assert_eq!(session.history().len(), 3);
}

#[test]
fn test_redo_reexecutes_instead_of_replaying() {
    let mut session = Session::default();

    assert_eq!(session.apply(Operation::Add(5)).unwrap(), 5);
    assert_eq!(session.redo().unwrap(), Some(10));
}

#[test]
fn test_undo_on_fresh_log_is_noop() {
    let mut session = Session::new(&EngineConfig {
        history_capacity: 100,
        initial_value: 17,
    });

    assert_eq!(session.undo(), None);
    assert_eq!(session.redo().unwrap(), None);
    assert_eq!(session.value(), 17);
}

#[test]
fn test_eviction_past_capacity() {
    let mut session = Session::default();

    for _ in 0..101 {
        session.apply(Operation::Add(1)).unwrap();
    }

    let history = session.history();
    assert_eq!(history.len(), 100);
    // The first entry (value 1) was evicted
    assert_eq!(history.entries().next().unwrap().snapshot.value(), 2);

    for _ in 0..99 {
        session.undo();
    }
    // Back to the value after the second applied operation
    assert_eq!(session.value(), 2);
    assert_eq!(session.history().len(), 1);

    // Undoing the oldest remaining entry resets to the initial value
    assert_eq!(session.undo(), Some(0));
    assert_eq!(session.undo(), None);
}

#[test]
fn test_undo_restores_value_before_add() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let mut log = HistoryLog::new();
        let mut acc = Accumulator::default();

        let prior = rng.gen_range(0..5);
        for _ in 0..prior {
            log.apply(Operation::Add(rng.gen_range(-1000..1000)), &mut acc)
                .unwrap();
        }

        let before = acc.value();
        log.apply(Operation::Add(rng.gen_range(-1000..1000)), &mut acc)
            .unwrap();
        let restored = log.undo(&mut acc).unwrap();

        assert_eq!(restored.value(), before);
        assert_eq!(acc.value(), before);
    }
}

#[test]
fn test_capacity_and_tail_invariants_hold() {
    let mut rng = StdRng::seed_from_u64(42);

    for capacity in [1, 3, 10, 100] {
        let mut log = HistoryLog::with_capacity(capacity);
        let mut acc = Accumulator::default();
        // Values recorded by the log, kept in application order
        let mut expected: Vec<i64> = Vec::new();

        for _ in 0..500 {
            match rng.gen_range(0..4) {
                0 => {
                    let op = Operation::Add(rng.gen_range(-50..50));
                    if log.apply(op, &mut acc).is_ok() {
                        expected.push(acc.value());
                    }
                }
                1 => {
                    let op = Operation::Multiply(rng.gen_range(-3..4));
                    if log.apply(op, &mut acc).is_ok() {
                        expected.push(acc.value());
                    }
                }
                2 => {
                    if let Ok(Some(snapshot)) = log.redo(&mut acc) {
                        expected.push(snapshot.value());
                    }
                }
                _ => {
                    if log.undo(&mut acc).is_some() {
                        expected.pop();
                    }
                }
            }

            assert!(log.len() <= capacity);
            let keep = expected.len().min(capacity);
            expected.drain(..expected.len() - keep);
            let recorded: Vec<i64> = log.entries().map(|e| e.snapshot.value()).collect();
            assert_eq!(recorded, expected);
            assert_tail_matches(&log, &acc);
        }
    }
}

#[test]
fn test_record_keeps_last_entries_in_order() {
    let mut log = HistoryLog::with_capacity(100);

    for count in 1..=250i64 {
        log.record(Operation::Add(1), Snapshot::from(count));
        assert!(log.len() <= 100);

        let first = (count - 100).max(0) + 1;
        let recorded: Vec<i64> = log.entries().map(|e| e.snapshot.value()).collect();
        assert_eq!(recorded, (first..=count).collect::<Vec<_>>());
    }
}

#[test]
fn test_overflow_does_not_touch_history() {
    let mut session = Session::default();

    session.apply(Operation::Add(i64::MAX)).unwrap();
    assert!(session.apply(Operation::Add(1)).is_err());
    assert!(session.redo().is_err());

    assert_eq!(session.value(), i64::MAX);
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.undo(), Some(0));
}
