//! Subset construction algorithm for converting an ε-NFA to a DFA.

use std::collections::VecDeque;

use indexmap::IndexSet;
use itertools::Itertools;

use super::{AutomatonError, Dfa, DfaState, Nfa, StateSet, Symbol};

/// Convert an epsilon-NFA to an equivalent DFA using the powerset construction.
///
/// Each DFA state is the set of NFA states the NFA can be in after reading some input, closed under epsilon transitions.
/// States are discovered breadth-first from the epsilon closure of the NFA's initial state.
/// If no NFA state is reachable on some symbol, the transition goes to [DfaState::Dead], which loops on every symbol.
/// The resulting transition table is total.
pub fn subset_construction(nfa: &Nfa) -> Result<Dfa, AutomatonError> {
    let alphabet: Vec<Symbol> = nfa
        .alphabet()
        .iter()
        .filter(|s| !s.is_epsilon())
        .cloned()
        .sorted()
        .collect();

    let initial_set = match nfa.initial_state() {
        Some(q0) => nfa.epsilon_closure(&StateSet::singleton(q0.clone()))?,
        None => return Err(AutomatonError::MissingInitialState),
    };
    let initial_state = DfaState::Set(initial_set.clone());

    let mut dfa = Dfa::new(initial_state.clone());
    for symbol in &alphabet {
        dfa.add_symbol(symbol.clone())?;
    }
    if initial_set.intersects(nfa.final_states()) {
        dfa.add_final_state(initial_state)?;
    }

    let mut worklist: VecDeque<StateSet> = VecDeque::new();
    let mut expanded: IndexSet<StateSet> = IndexSet::new();
    worklist.push_back(initial_set);

    while let Some(current) = worklist.pop_front() {
        if !expanded.insert(current.clone()) {
            continue;
        }
        log::trace!("Expanding {}", current);
        let source = DfaState::Set(current.clone());

        for symbol in &alphabet {
            let next = nfa.closed_step(&current, symbol)?;

            let target = if next.is_empty() {
                add_dead_state(&mut dfa, &alphabet)?;
                DfaState::Dead
            } else {
                let target = DfaState::Set(next.clone());
                if dfa.add_state(target.clone()) {
                    if next.intersects(nfa.final_states()) {
                        dfa.add_final_state(target.clone())?;
                    }
                    worklist.push_back(next);
                }
                target
            };

            dfa.add_transition(source.clone(), symbol.clone(), target)?;
        }
    }

    debug_assert!(dfa.is_total());
    log::debug!(
        "Subset construction yielded {} states ({} final) from {} NFA states",
        dfa.states().len(),
        dfa.final_states().len(),
        nfa.states().len()
    );
    Ok(dfa)
}

/// Adds the dead state on first use, with a self-loop on every symbol.
fn add_dead_state(dfa: &mut Dfa, alphabet: &[Symbol]) -> Result<(), AutomatonError> {
    if dfa.add_state(DfaState::Dead) {
        log::trace!("Adding dead state");
        for symbol in alphabet {
            dfa.add_transition(DfaState::Dead, symbol.clone(), DfaState::Dead)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::automata::{
        build_nfa,
        nfa::tests::{example_nfa, letters, t, SmallNfa},
        symbols_of_chars,
    };

    fn state(name: &str) -> DfaState {
        name.parse().unwrap()
    }

    /// All words over `alphabet` of length at most `max_len`.
    fn words(alphabet: &[Symbol], max_len: usize) -> Vec<Vec<Symbol>> {
        let mut all = vec![vec![]];
        let mut last = vec![vec![]];
        for _ in 0..max_len {
            last = last
                .iter()
                .cartesian_product(alphabet.iter())
                .map(|(w, s): (&Vec<Symbol>, &Symbol)| {
                    let mut w = w.clone();
                    w.push(s.clone());
                    w
                })
                .collect();
            all.extend(last.iter().cloned());
        }
        all
    }

    #[test]
    fn test_subset_construction_basic() {
        // 0 -a-> 1, 0 -a-> 2, 1 -b-> 3(final), 2 -b-> 3(final)
        let nfa = build_nfa(
            letters(&["a", "b"]),
            ["0", "1", "2", "3"],
            "0",
            ["3"],
            vec![t("0", "a", "1"), t("0", "a", "2"), t("1", "b", "3"), t("2", "b", "3")],
        )
        .unwrap();

        let dfa = subset_construction(&nfa).unwrap();

        assert_eq!(dfa.initial_state(), &state("0"));
        assert_eq!(
            dfa.transition(&state("0"), &Symbol::from("a")),
            Some(&state("1.2"))
        );
        assert_eq!(
            dfa.transition(&state("1.2"), &Symbol::from("b")),
            Some(&state("3"))
        );
        assert!(dfa.is_final(&state("3")));
        assert!(dfa.accepts(&symbols_of_chars("ab")).unwrap());
        assert!(!dfa.accepts(&symbols_of_chars("abb")).unwrap());
    }

    #[test]
    fn test_subset_construction_with_epsilon() {
        let nfa = example_nfa();
        let dfa = subset_construction(&nfa).unwrap();

        assert_eq!(dfa.initial_state(), &state("q0.q1"));
        assert!(!dfa.is_final(dfa.initial_state()));
        assert!(dfa.alphabet().iter().all(|s| !s.is_epsilon()));

        for word in ["", "a", "b", "ab", "ba", "abb", "aab"] {
            let input = symbols_of_chars(word);
            assert_eq!(
                dfa.accepts(&input).unwrap(),
                nfa.accepts(&input).unwrap(),
                "Mismatch on '{}'",
                word
            );
        }
        assert!(dfa.accepts(&symbols_of_chars("ab")).unwrap());
        assert!(!dfa.accepts(&symbols_of_chars("ba")).unwrap());
    }

    #[test]
    fn test_initial_state_final_via_epsilon() {
        let nfa = build_nfa(
            letters(&["a"]),
            ["q0", "q1"],
            "q0",
            ["q1"],
            vec![t("q0", "λ", "q1")],
        )
        .unwrap();
        let dfa = subset_construction(&nfa).unwrap();
        assert!(dfa.is_final(&state("q0.q1")));
        assert!(dfa.accepts(&[]).unwrap());
    }

    #[test]
    fn test_undefined_symbol_goes_to_dead_state() {
        // `b` is never read by any state
        let nfa = build_nfa(
            letters(&["a", "b"]),
            ["q0", "q1"],
            "q0",
            ["q1"],
            vec![t("q0", "a", "q1"), t("q1", "a", "q1")],
        )
        .unwrap();
        let dfa = subset_construction(&nfa).unwrap();

        let b = Symbol::from("b");
        assert_eq!(dfa.transition(&state("q0"), &b), Some(&DfaState::Dead));
        assert_eq!(dfa.transition(&state("q1"), &b), Some(&DfaState::Dead));
        for symbol in dfa.alphabet() {
            assert_eq!(
                dfa.transition(&DfaState::Dead, symbol),
                Some(&DfaState::Dead)
            );
        }
        assert!(!dfa.is_final(&DfaState::Dead));
        assert!(!dfa.accepts(&symbols_of_chars("aba")).unwrap());
    }

    #[test]
    fn test_dead_state_not_confused_with_state_names() {
        let nfa = build_nfa(
            letters(&["a"]),
            ["NIL", "DEAD"],
            "NIL",
            ["DEAD"],
            vec![t("NIL", "a", "DEAD")],
        )
        .unwrap();
        let dfa = subset_construction(&nfa).unwrap();
        assert_eq!(dfa.states().len(), 3);
        assert!(dfa.states().contains(&DfaState::Dead));
        assert!(dfa.is_final(&state("DEAD")));
    }

    #[test]
    fn test_empty_alphabet() {
        let nfa = build_nfa(vec![], ["q0"], "q0", ["q0"], vec![]).unwrap();
        let dfa = subset_construction(&nfa).unwrap();
        assert_eq!(dfa.states().len(), 1);
        assert!(dfa.is_total());
        assert!(dfa.accepts(&[]).unwrap());
    }

    #[test]
    fn test_missing_initial_state() {
        let nfa = Nfa::new();
        assert!(matches!(
            subset_construction(&nfa),
            Err(AutomatonError::MissingInitialState)
        ));
    }

    #[test]
    fn test_deterministic_regardless_of_insertion_order() {
        let transitions = vec![
            t("q0", "a", "q1"),
            t("q0", "a", "q2"),
            t("q1", "λ", "q2"),
            t("q2", "b", "q0"),
            t("q1", "b", "q1"),
        ];
        let forward = build_nfa(
            letters(&["a", "b"]),
            ["q0", "q1", "q2"],
            "q0",
            ["q2"],
            transitions.clone(),
        )
        .unwrap();
        let backward = build_nfa(
            letters(&["b", "a"]),
            ["q2", "q1", "q0"],
            "q0",
            ["q2"],
            transitions.into_iter().rev(),
        )
        .unwrap();

        let d1 = subset_construction(&forward).unwrap();
        let d2 = subset_construction(&backward).unwrap();
        assert_eq!(d1.to_string(), d2.to_string());
        assert_eq!(d1.states(), d2.states());
    }

    #[quickcheck]
    fn test_result_is_total(nfa: SmallNfa) -> bool {
        let dfa = subset_construction(&nfa.0).unwrap();
        dfa.is_total() && !dfa.is_final(&DfaState::Dead)
    }

    #[quickcheck]
    fn test_language_equivalence(nfa: SmallNfa) -> bool {
        let nfa = nfa.0;
        let dfa = subset_construction(&nfa).unwrap();
        words(&letters(&["a", "b"]), 5)
            .iter()
            .all(|w| dfa.accepts(w).unwrap() == nfa.accepts(w).unwrap())
    }

    #[quickcheck]
    fn test_construction_is_idempotent(nfa: SmallNfa) -> bool {
        let d1 = subset_construction(&nfa.0).unwrap();
        let d2 = subset_construction(&nfa.0).unwrap();
        d1.to_string() == d2.to_string()
    }

    #[quickcheck]
    fn test_dead_state_absorbs(nfa: SmallNfa) -> bool {
        let dfa = subset_construction(&nfa.0).unwrap();
        if !dfa.states().contains(&DfaState::Dead) {
            return true;
        }
        words(dfa.alphabet().iter().cloned().collect::<Vec<_>>().as_slice(), 3)
            .iter()
            .all(|w| {
                let dead = DfaState::Dead;
                let mut current = &dead;
                for s in w {
                    current = dfa.transition(current, s).unwrap();
                }
                current.is_dead()
            })
    }
}
