//! Component H: the top-level assembler. `SPEC_FULL.md` §4.H.
//!
//! `init ∧ G(transition) ∧ trajectory ∧ F(goal ∧ wX(⊥))`, where
//! `transition = preconditions ∧ effects ∧ frames ∧ parallelism`.

use crate::alphabet::Alphabet;
use crate::domain::Domain;
use crate::encode::{axioms, frame, init, parallelism};
use crate::formula::Formula;
use crate::problem::Problem;
use crate::scope::Scope;
use tracing::debug;

pub fn assemble(alphabet: &mut Alphabet, scope: &Scope, domain: &Domain, problem: &Problem) -> Formula {
    let init = init::encode(alphabet, domain, problem);

    let preconditions = axioms::preconditions(domain, scope);
    let effects = axioms::effects(domain, scope);

    let mut frames = Vec::with_capacity(2 * (domain.fluents.len() + domain.predicates.len()));
    for &fluent in &domain.fluents {
        frames.push(frame::fluent_frame(domain, scope, fluent, true));
        frames.push(frame::fluent_frame(domain, scope, fluent, false));
    }
    for &pred in &domain.predicates {
        frames.push(frame::predicate_frame(alphabet, domain, scope, pred, true));
        frames.push(frame::predicate_frame(alphabet, domain, scope, pred, false));
    }
    let frames = Formula::and(frames);

    let parallelism = parallelism::axioms(alphabet, domain, scope);

    let transition = Formula::and([preconditions, effects, frames, parallelism]);

    let terminal_goal = Formula::and([problem.goal.clone(), Formula::False.weak_next()]).eventually();

    debug!(
        fluents = domain.fluents.len(),
        predicates = domain.predicates.len(),
        actions = domain.actions.len(),
        "assembled LTLf-FO encoding"
    );

    Formula::and([init, transition.globally(), problem.trajectory.clone(), terminal_goal])
}
