//! Component D: the applicability literal `apply(a, decls)`.
//!
//! The symbolic literal asserting "action `a` fires with these arguments now".
//! Ground actions (no parameters) use a bare 0-ary proposition; parametrized
//! actions apply their firing relation to the given declarations.

use crate::alphabet::{RelId, VarId};
use crate::domain::Action;
use crate::formula::Formula;
use crate::term::{Atom, Term};

/// `apply(rel, decls)`: the literal for relation `rel` applied to `decls`
/// (or the bare proposition, when `decls` is empty).
pub fn literal(rel: RelId, decls: &[VarId]) -> Formula {
    Formula::atom(Atom::new(rel, decls.iter().map(|&v| Term::Var(v))))
}

/// Convenience form using the action's own declared parameters.
pub fn apply(action: &Action, rel: RelId) -> Formula {
    literal(rel, &action.params)
}
