//! The reference `Engine`: a bounded, forward-chaining planner.
//!
//! Grounded on the same idea as the teacher's `aries_plan_validator`: a small
//! interpreter that replays action semantics directly, rather than a
//! production-grade CP/SAT backend. It explores ground action sequences
//! breadth-first up to [`crate::config::MAX_HORIZON`] and, for every
//! candidate trace, builds a [`BoundedModel`] and checks it against the
//! *compiled* formula via [`super::eval`] — so the search strategy
//! (forward-chaining over `Domain`) and the correctness check (evaluating
//! the assembled LTLf-FO formula from `crate::encode`) are independent, and
//! a bug in either is likely to surface as a mismatch.
//!
//! It is exponential in the worst case and only fit for the small scenario
//! domains this crate tests against. It reports `Verdict::False` when the
//! search exhausts the horizon without a match — sound for the bounded test
//! scenarios this crate ships, but not a general unsatisfiability proof.

use crate::alphabet::{Alphabet, ObjId, RelId};
use crate::config;
use crate::domain::Domain;
use crate::engine::{eval, substitute, Engine, Model, Verdict};
use crate::formula::Formula;
use crate::problem::Problem;
use crate::scope::Scope;
use crate::term::{Atom, Term};
use hashbrown::{HashMap, HashSet};
use tracing::{debug, trace};

type GroundAtom = (RelId, Vec<ObjId>);

/// A finite trace of closed-world states. The action firing at each
/// non-terminal transition is recorded as a ground atom *in the departing
/// state*, alongside the fluents/predicates that hold there, so that
/// `value` can answer `apply(a, args)` queries the same way it answers any
/// other atom.
pub struct BoundedModel {
    states: Vec<HashSet<GroundAtom>>,
}

impl Model for BoundedModel {
    fn len(&self) -> usize {
        self.states.len()
    }

    fn value(&self, atom: &Atom, t: usize) -> bool {
        let args: Vec<ObjId> = atom
            .args
            .iter()
            .map(|term| match term {
                Term::Obj(o) => *o,
                Term::Var(_) => panic!("model queried with a non-ground atom"),
            })
            .collect();
        self.states[t].contains(&(atom.rel, args))
    }
}

/// Forward-chaining reference engine, specialized to the domain/problem it
/// was built for (unlike a general `Engine`, which only needs scope and
/// formula, this one needs action semantics to generate candidate traces).
pub struct BoundedEngine<'a> {
    domain: &'a Domain,
    problem: &'a Problem,
    scope: &'a Scope,
}

impl<'a> BoundedEngine<'a> {
    pub fn new(domain: &'a Domain, problem: &'a Problem, scope: &'a Scope) -> Self {
        BoundedEngine { domain, problem, scope }
    }

    fn initial_state(&self) -> HashSet<GroundAtom> {
        let mut state = HashSet::new();
        for &f in &self.problem.init.fluents {
            state.insert((f, Vec::new()));
        }
        for atom in &self.problem.init.predicates {
            state.insert((atom.rel, ground_args(atom)));
        }
        state
    }

    fn ground_actions(&self, alphabet: &Alphabet) -> Vec<(usize, Vec<ObjId>)> {
        let mut out = Vec::new();
        for (i, action) in self.domain.actions.iter().enumerate() {
            let domains: Vec<Vec<ObjId>> = action
                .params
                .iter()
                .map(|&v| alphabet.domain_of(alphabet.var(v).sort).to_vec())
                .collect();
            let gens: Vec<_> = domains.iter().map(|d| d.iter().copied());
            let mut it = crate::utils::enumerate(gens.collect());
            while let Some(tuple) = it.next() {
                out.push((i, tuple.to_vec()));
            }
        }
        out
    }

    /// Returns the next state if `action_index`/`args` is applicable in
    /// `state` (its precondition holds), else `None`.
    fn apply(&self, alphabet: &Alphabet, state: &HashSet<GroundAtom>, action_index: usize, args: &[ObjId]) -> Option<HashSet<GroundAtom>> {
        let action = &self.domain.actions[action_index];
        let map: HashMap<_, _> = action.params.iter().copied().zip(args.iter().copied()).collect();
        let pre = substitute(&action.precondition, &map);
        if !eval(&pre, &StateModel(state), 0, alphabet) {
            return None;
        }
        let mut next = state.clone();
        for effect in &action.effects {
            let grounded_pre = substitute(&effect.precondition, &map);
            if !eval(&grounded_pre, &StateModel(state), 0, alphabet) {
                continue;
            }
            for &fluent in &effect.fluents {
                if effect.positive {
                    next.insert((fluent, Vec::new()));
                } else {
                    next.remove(&(fluent, Vec::new()));
                }
            }
            for atom in &effect.predicates {
                let grounded: Vec<ObjId> = atom
                    .args
                    .iter()
                    .map(|&t| match substitute_term(t, &map) {
                        Term::Obj(o) => o,
                        Term::Var(_) => panic!("effect atom references an unbound variable"),
                    })
                    .collect();
                if effect.positive {
                    next.insert((atom.rel, grounded));
                } else {
                    next.remove(&(atom.rel, grounded));
                }
            }
        }
        Some(next)
    }

    fn build_model(&self, states: Vec<HashSet<GroundAtom>>) -> BoundedModel {
        BoundedModel { states }
    }
}

fn substitute_term(t: Term, map: &HashMap<crate::alphabet::VarId, ObjId>) -> Term {
    match t {
        Term::Var(v) => map.get(&v).map(|&o| Term::Obj(o)).unwrap_or(t),
        Term::Obj(_) => t,
    }
}

fn ground_args(atom: &Atom) -> Vec<ObjId> {
    atom.args
        .iter()
        .map(|t| match t {
            Term::Obj(o) => *o,
            Term::Var(_) => panic!("initial-state atom must be fully ground"),
        })
        .collect()
}

/// A single-state view of a partial trace, used to evaluate non-temporal
/// preconditions against the current search state (`G`/`F` collapse to a
/// single time point, `X` has no successor, `wX` is trivially true).
struct StateModel<'s>(&'s HashSet<GroundAtom>);

impl<'s> Model for StateModel<'s> {
    fn len(&self) -> usize {
        1
    }

    fn value(&self, atom: &Atom, _t: usize) -> bool {
        self.0.contains(&(atom.rel, ground_args(atom)))
    }
}

impl<'a> Engine for BoundedEngine<'a> {
    type Model = BoundedModel;

    fn decide(&mut self, alphabet: &Alphabet, formula: &Formula) -> (Verdict, Option<BoundedModel>) {
        let max_horizon = *config::MAX_HORIZON.get();
        let ground_actions = self.ground_actions(alphabet);
        if ground_actions.len() > *config::MAX_GROUNDINGS.get() {
            return (Verdict::Undefined, None);
        }

        // Breadth-first over action sequences: frontier holds, for each
        // reachable prefix, its full state trace so far (one `HashSet` per
        // time point, the departing state of each transition already
        // carrying its firing atom).
        let mut frontier: Vec<Vec<HashSet<GroundAtom>>> = vec![vec![self.initial_state()]];

        for depth in 0..=max_horizon {
            trace!(depth, frontier = frontier.len(), "bounded engine: exploring depth");
            for states in &frontier {
                let model = self.build_model(states.clone());
                if eval(formula, &model, 0, alphabet) {
                    debug!(steps = states.len() - 1, "bounded engine: found a satisfying trace");
                    return (Verdict::True, Some(model));
                }
            }
            if depth == max_horizon {
                break;
            }
            let mut next_frontier = Vec::new();
            for states in frontier {
                let current = states.last().expect("a trace always has at least one state");
                for &(action_index, ref args) in &ground_actions {
                    if let Some(next_state) = self.apply(alphabet, current, action_index, args) {
                        let mut states2 = states.clone();
                        let firing_atom = (self.scope.action_rel(action_index), args.clone());
                        states2
                            .last_mut()
                            .expect("a trace always has at least one state")
                            .insert(firing_atom);
                        states2.push(next_state);
                        next_frontier.push(states2);
                    }
                }
            }
            frontier = next_frontier;
        }
        (Verdict::False, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::State;
    use crate::sym::Sym;

    #[test]
    fn empty_domain_already_satisfied_goal_is_true_with_empty_plan() {
        let mut alphabet = Alphabet::new();
        let light = alphabet.declare_rel(Sym::from("light_on"), vec![]);
        let domain = Domain::new(vec![light], vec![], vec![]);
        let init = State::new(vec![light], vec![]);
        let problem = Problem::new(vec![], init, Formula::atom(Atom::new(light, [])), Formula::True);
        let scope = Scope { action_rels: vec![] };
        let formula = crate::encode::assemble::assemble(&mut alphabet, &scope, &domain, &problem);
        let mut engine = BoundedEngine::new(&domain, &problem, &scope);
        let (verdict, model) = engine.decide(&alphabet, &formula);
        assert_eq!(verdict, Verdict::True);
        assert_eq!(model.unwrap().len(), 1);
    }

    #[test]
    fn unreachable_goal_without_any_action_is_false() {
        let mut alphabet = Alphabet::new();
        let light = alphabet.declare_rel(Sym::from("light_on"), vec![]);
        let domain = Domain::new(vec![light], vec![], vec![]);
        let init = State::new(vec![], vec![]);
        let problem = Problem::new(vec![], init, Formula::atom(Atom::new(light, [])), Formula::True);
        let scope = Scope { action_rels: vec![] };
        let formula = crate::encode::assemble::assemble(&mut alphabet, &scope, &domain, &problem);
        let mut engine = BoundedEngine::new(&domain, &problem, &scope);
        let (verdict, _) = engine.decide(&alphabet, &formula);
        assert_eq!(verdict, Verdict::False);
    }
}
