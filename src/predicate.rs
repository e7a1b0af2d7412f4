//! A small ergonomic wrapper over a declared predicate relation, matching
//! `SPEC_FULL.md` §6: `predicate(name, params)` with a call operator that
//! accepts either bare variables or variable declarations and returns the
//! applied atom.

use crate::alphabet::{RelId, VarId};
use crate::term::{Atom, Term};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Predicate {
    pub rel: RelId,
    pub arity: usize,
}

impl Predicate {
    pub fn new(rel: RelId, arity: usize) -> Self {
        Predicate { rel, arity }
    }

    /// Applies the predicate to an explicit argument list (a mix of bound
    /// variables and objects, via `Term`).
    pub fn call(&self, args: impl IntoIterator<Item = Term>) -> Atom {
        let atom = Atom::new(self.rel, args);
        debug_assert_eq!(atom.args.len(), self.arity, "predicate applied with the wrong arity");
        atom
    }

    /// Applies the predicate to its own parameter variables, e.g. when
    /// building `R(π)` over the slot variables used by a frame axiom.
    pub fn applied_to(&self, vars: &[VarId]) -> Atom {
        self.call(vars.iter().map(|&v| Term::Var(v)))
    }
}
