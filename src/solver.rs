//! The public entry point: `Solver`, a small state machine wrapping
//! components A–I behind the three-valued verdict of `SPEC_FULL.md` §7.
//!
//! States: `Fresh -> Solved(verdict, plan?)`. The intermediate `Bound` state
//! of the conceptual state machine (scope + formula assembled, engine not
//! yet run) is not separately observable — `solve` is a single blocking call
//! — so it is not represented as a distinct variant here; see `DESIGN.md`.

use crate::alphabet::Alphabet;
use crate::domain::Domain;
use crate::encode::assemble;
use crate::engine::bounded::BoundedEngine;
use crate::engine::{Engine, Verdict};
use crate::extract;
use crate::plan::Plan;
use crate::problem::Problem;
use crate::scope::build_scope;
use tracing::debug;

enum State {
    Fresh,
    Solved { verdict: Verdict, plan: Option<Plan> },
}

/// Compiles a domain/problem pair to LTLf-FO, decides it with the reference
/// [`BoundedEngine`], and extracts a ground plan on success.
pub struct Solver {
    state: State,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    pub fn new() -> Self {
        Solver { state: State::Fresh }
    }

    /// Runs components A through I against `domain`/`problem`. Replaces
    /// whatever a previous `solve` call stored; any previously returned
    /// [`Plan`] remains valid since plans are owned values (§4's state
    /// machine note).
    pub fn solve(&mut self, alphabet: &mut Alphabet, domain: &Domain, problem: &Problem) -> Verdict {
        let scope = match build_scope(alphabet, domain, problem) {
            Ok(scope) => scope,
            Err(err) => {
                debug!(%err, "scope construction failed, verdict is undefined");
                self.state = State::Solved {
                    verdict: Verdict::Undefined,
                    plan: None,
                };
                return Verdict::Undefined;
            }
        };

        let formula = assemble::assemble(alphabet, &scope, domain, problem);

        let mut engine = BoundedEngine::new(domain, problem, &scope);
        let (verdict, model) = engine.decide(alphabet, &formula);

        let plan = match (&verdict, &model) {
            (Verdict::True, Some(model)) => Some(extract::extract(alphabet, &scope, domain, model)),
            _ => None,
        };

        self.state = State::Solved { verdict, plan };
        verdict
    }

    /// Valid only after a successful `solve`; `Some(plan)` iff the last
    /// verdict was `Verdict::True`.
    pub fn solution(&self) -> Option<Plan> {
        match &self.state {
            State::Fresh => None,
            State::Solved { plan, .. } => plan.clone(),
        }
    }

    /// The verdict from the last `solve` call, if any.
    pub fn verdict(&self) -> Option<Verdict> {
        match &self.state {
            State::Fresh => None,
            State::Solved { verdict, .. } => Some(*verdict),
        }
    }
}
