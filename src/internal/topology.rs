//! Opt-in diagnostics for the topology of a compiled state machine.

use std::collections::VecDeque;

use log::debug;

use crate::{FsmError, FsmErrorKind, Result};

use super::{compiled_machine::CompiledMachine, StateID};

impl<T, S, L> CompiledMachine<T, S, L>
where
    S: std::fmt::Debug,
{
    /// Check that every referenced state resolves and every accepting state is reachable.
    pub(crate) fn check_topology(&self) -> Result<()> {
        if self.states[self.initial_state].is_unresolved() {
            return Err(FsmError::new(FsmErrorKind::UnknownInitialState(format!(
                "{:?}",
                self.names[self.initial_state]
            ))));
        }

        for (from, state) in self.states.iter().enumerate() {
            let Some(transitions) = &state.transitions else {
                continue;
            };
            for transition in transitions {
                if let Some(target) = transition
                    .targets
                    .iter()
                    .find(|target| self.states[**target].is_unresolved())
                {
                    return Err(FsmError::new(FsmErrorKind::DanglingTarget {
                        from: format!("{:?}", self.names[from]),
                        target: format!("{:?}", self.names[*target]),
                    }));
                }
            }
        }

        let reachable = self.reachable_states();
        for (id, state) in self.states.iter().enumerate() {
            if state.accept.is_some() && !reachable[id] {
                return Err(FsmError::new(FsmErrorKind::UnreachableAcceptingState(
                    format!("{:?}", self.names[id]),
                )));
            }
        }
        debug!("Topology check passed for {} states", self.states.len());
        Ok(())
    }

    /// Breadth first search over all transition targets, regardless of what the matchers accept.
    pub(crate) fn reachable_states(&self) -> Vec<bool> {
        let mut reachable = vec![false; self.states.len()];
        let mut queue = VecDeque::<StateID>::new();
        reachable[self.initial_state.as_usize()] = true;
        queue.push_back(self.initial_state);
        while let Some(state) = queue.pop_front() {
            let Some(transitions) = &self.states[state].transitions else {
                continue;
            };
            for target in transitions.iter().flat_map(|t| t.targets.iter()) {
                if !reachable[target.as_usize()] {
                    reachable[target.as_usize()] = true;
                    queue.push_back(*target);
                }
            }
        }
        reachable
    }
}
