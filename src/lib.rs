//! `ltlfp`: compiles expressive, lifted first-order planning problems to a
//! single LTLf-FO formula and extracts ground plans from satisfying models.
//!
//! See `SPEC_FULL.md` for the full design. In short: build a [`Domain`] and
//! [`Problem`] against a shared [`Alphabet`], hand them to [`Solver::solve`],
//! and read off [`Solver::solution`] on a `Verdict::True` outcome.
//!
//! ```
//! use ltlfp::{Alphabet, Domain, Effect, Formula, Problem, Solver, State, Sym, Verdict};
//!
//! let mut alphabet = Alphabet::new();
//! let light = alphabet.declare_rel(Sym::from("light_on"), vec![]);
//! let switch_on = ltlfp::Action::new(
//!     "switch_on",
//!     vec![],
//!     Formula::True,
//!     vec![Effect::unconditional(vec![light], vec![], true)],
//! );
//! let domain = Domain::new(vec![light], vec![], vec![switch_on]);
//! let problem = Problem::new(
//!     vec![],
//!     State::new(vec![], vec![]),
//!     Formula::atom(ltlfp::Atom::new(light, [])),
//!     Formula::True,
//! );
//!
//! let mut solver = Solver::new();
//! assert_eq!(solver.solve(&mut alphabet, &domain, &problem), Verdict::True);
//! assert_eq!(solver.solution().unwrap().len(), 1);
//! ```

pub mod alphabet;
pub mod config;
pub mod domain;
pub mod encode;
pub mod engine;
pub mod extract;
pub mod formula;
pub mod plan;
pub mod predicate;
pub mod problem;
pub mod scope;
pub mod solver;
pub mod sym;
pub mod term;
pub mod utils;

pub use alphabet::{Alphabet, ObjId, RelId, SortId, VarId};
pub use domain::{Action, Domain, Effect};
pub use engine::{Engine, Model, Verdict};
pub use formula::Formula;
pub use plan::{Plan, Step};
pub use predicate::Predicate;
pub use problem::{Problem, State};
pub use scope::{build_scope, Scope, ScopeError};
pub use solver::Solver;
pub use sym::Sym;
pub use term::{Atom, Term};
