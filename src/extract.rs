//! Component I: the plan extractor. `SPEC_FULL.md` §4.I.
//!
//! Walks every non-terminal time point of a satisfying model and, for each,
//! finds the one action/argument-tuple pair whose firing literal is true —
//! in declared-action order, then odometer order over the argument tuple
//! (rightmost parameter fastest, matching §6's observable ordering).

use crate::alphabet::Alphabet;
use crate::domain::Domain;
use crate::engine::Model;
use crate::plan::{Plan, Step};
use crate::scope::Scope;
use crate::term::{Atom, Term};
use tracing::trace;

pub fn extract<M: Model>(alphabet: &Alphabet, scope: &Scope, domain: &Domain, model: &M) -> Plan {
    let mut steps = Vec::new();

    for t in 0..model.len().saturating_sub(1) {
        let step = find_step(alphabet, scope, domain, model, t)
            .unwrap_or_else(|| panic!("no action fires at time {t} in a model reported satisfiable — an encoding bug"));
        trace!(t, action = %step.action, "extracted step");
        steps.push(step);
    }

    Plan::new(steps)
}

fn find_step<M: Model>(alphabet: &Alphabet, scope: &Scope, domain: &Domain, model: &M, t: usize) -> Option<Step> {
    for (i, action) in domain.actions.iter().enumerate() {
        let rel = scope.action_rel(i);

        if action.params.is_empty() {
            if model.value(&Atom::new(rel, []), t) {
                return Some(Step::new(action.name.clone(), vec![]));
            }
            continue;
        }

        let domains: Vec<Vec<_>> = action
            .params
            .iter()
            .map(|&v| alphabet.domain_of(alphabet.var(v).sort).to_vec())
            .collect();
        let gens: Vec<_> = domains.iter().map(|d| d.iter().copied());
        let mut it = crate::utils::enumerate(gens.collect());
        while let Some(tuple) = it.next() {
            let atom = Atom::new(rel, tuple.iter().map(|&o| Term::Obj(o)));
            if model.value(&atom, t) {
                return Some(Step::new(action.name.clone(), tuple.to_vec()));
            }
        }
    }
    None
}
