//! Property-based tests for event dispatch.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated transition tables and event sequences.

use featherstate::{transition_between, Dispatch, Machine, State, StateId};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

const STATES: usize = 4;
const EVENTS: u8 = 5;

type Log = Rc<RefCell<Vec<String>>>;

/// Declared edge: (source index, event, target index, guard verdict).
type Edge = (usize, u8, usize, bool);

fn traced_machine(log: &Log) -> (Machine<u8>, Vec<StateId>) {
    let mut machine = Machine::new();
    let ids = (0..STATES)
        .map(|i| {
            let (enter, leave) = (Rc::clone(log), Rc::clone(log));
            machine.add_state(
                State::new()
                    .on_enter(move |_| enter.borrow_mut().push(format!("enter {i}")))
                    .on_leave(move |_| leave.borrow_mut().push(format!("leave {i}"))),
            )
        })
        .collect();
    (machine, ids)
}

prop_compose! {
    fn arbitrary_edge()(
        from in 0..STATES,
        event in 0..EVENTS,
        to in 0..STATES,
        passes in any::<bool>(),
    ) -> Edge {
        (from, event, to, passes)
    }
}

proptest! {
    #[test]
    fn absent_keys_are_inert(
        edges in prop::collection::vec(arbitrary_edge(), 0..12),
        start in 0..STATES,
        event in 0..EVENTS,
    ) {
        prop_assume!(!edges.iter().any(|(from, e, _, _)| *from == start && *e == event));

        let log = Log::default();
        let (mut machine, ids) = traced_machine(&log);
        for (from, e, to, passes) in &edges {
            let passes = *passes;
            machine.register(transition_between(ids[*from], ids[*to]).on(*e).when(move |_| passes));
        }
        machine.start(ids[start]);
        log.borrow_mut().clear();

        prop_assert_eq!(machine.notify(event), Dispatch::Unhandled);
        prop_assert_eq!(machine.current_state(), Some(ids[start]));
        prop_assert!(log.borrow().is_empty());
    }

    #[test]
    fn first_passing_candidate_wins_and_short_circuits(
        verdicts in prop::collection::vec(any::<bool>(), 1..8),
    ) {
        let evaluated = Rc::new(RefCell::new(Vec::new()));
        let mut machine: Machine<u8> = Machine::new();
        let source = machine.add_state(State::new());
        let targets: Vec<StateId> = verdicts
            .iter()
            .map(|_| machine.add_state(State::new()))
            .collect();

        for (i, verdict) in verdicts.iter().copied().enumerate() {
            let seen = Rc::clone(&evaluated);
            machine.register(transition_between(source, targets[i]).on(0).when(move |_| {
                seen.borrow_mut().push(i);
                verdict
            }));
        }
        machine.start(source);

        let outcome = machine.notify(0);
        match verdicts.iter().position(|v| *v) {
            Some(winner) => {
                prop_assert_eq!(outcome, Dispatch::Fired { from: source, to: targets[winner] });
                prop_assert_eq!(evaluated.borrow().clone(), (0..=winner).collect::<Vec<_>>());
            }
            None => {
                prop_assert_eq!(outcome, Dispatch::Unhandled);
                prop_assert_eq!(machine.current_state(), Some(source));
                prop_assert_eq!(evaluated.borrow().len(), verdicts.len());
            }
        }
    }

    #[test]
    fn leave_then_actions_then_enter(
        action_count in 0..6usize,
        from in 0..STATES,
        to in 0..STATES,
    ) {
        let log = Log::default();
        let (mut machine, ids) = traced_machine(&log);

        let mut transition = transition_between(ids[from], ids[to]).on(1);
        for n in 0..action_count {
            let sink = Rc::clone(&log);
            transition = transition.with_action(move |_| sink.borrow_mut().push(format!("action {n}")));
        }
        machine.register(transition);
        machine.start(ids[from]);
        log.borrow_mut().clear();

        machine.notify(1);

        let mut expected = vec![format!("leave {from}")];
        expected.extend((0..action_count).map(|n| format!("action {n}")));
        expected.push(format!("enter {to}"));
        prop_assert_eq!(log.borrow().clone(), expected);
    }

    #[test]
    fn machine_follows_reference_model(
        edges in prop::collection::vec(arbitrary_edge(), 0..16),
        events in prop::collection::vec(0..EVENTS, 0..32),
        start in 0..STATES,
    ) {
        let log = Log::default();
        let (mut machine, ids) = traced_machine(&log);
        for (from, e, to, passes) in &edges {
            let passes = *passes;
            machine.register(transition_between(ids[*from], ids[*to]).on(*e).when(move |_| passes));
        }
        machine.start(ids[start]);

        let mut current = start;
        for event in events {
            let expected = edges
                .iter()
                .find(|(from, e, _, passes)| *from == current && *e == event && *passes)
                .map(|(_, _, to, _)| *to);

            let outcome = machine.notify(event);
            match expected {
                Some(to) => {
                    prop_assert_eq!(outcome, Dispatch::Fired { from: ids[current], to: ids[to] });
                    current = to;
                }
                None => prop_assert_eq!(outcome, Dispatch::Unhandled),
            }
            prop_assert_eq!(machine.current_state(), Some(ids[current]));
        }
    }

    #[test]
    fn start_enters_once_and_stop_leaves_once(start in 0..STATES, stops in 1..4usize) {
        let log = Log::default();
        let (mut machine, ids) = traced_machine(&log);

        machine.start(ids[start]);
        for _ in 0..stops {
            machine.stop();
        }

        prop_assert_eq!(
            log.borrow().clone(),
            vec![format!("enter {start}"), format!("leave {start}")]
        );
    }
}
