//! LTLf-FO formulas.
//!
//! Re-architected per the teacher's "open polymorphism over formula shape"
//! design note: rather than pattern-matching an open AST with an `otherwise`
//! catch-all, `Formula` is a closed sum type matched exhaustively everywhere
//! it is inspected.

use crate::alphabet::VarId;
use crate::term::{Atom, Term};

#[derive(Clone, Debug)]
pub enum Formula {
    True,
    False,
    Atom(Atom),
    Eq(Term, Term),
    Not(Box<Formula>),
    And(Vec<Formula>),
    Or(Vec<Formula>),
    Implies(Box<Formula>, Box<Formula>),
    Forall(Vec<VarId>, Box<Formula>),
    Exists(Vec<VarId>, Box<Formula>),
    /// Strong next: `X`. Effect axioms use this to bind the post-state.
    Next(Box<Formula>),
    /// Weak next: `wX`. `wX(false)` identifies the final state of a finite
    /// trace (there is no successor to demand anything of).
    WeakNext(Box<Formula>),
    Globally(Box<Formula>),
    Eventually(Box<Formula>),
}

impl Formula {
    pub fn atom(a: Atom) -> Formula {
        Formula::Atom(a)
    }

    pub fn not(self) -> Formula {
        match self {
            Formula::True => Formula::False,
            Formula::False => Formula::True,
            Formula::Not(f) => *f,
            other => Formula::Not(Box::new(other)),
        }
    }

    /// Conjunction, eliding `True` conjuncts and collapsing to `False` if any
    /// conjunct is `False`. An empty conjunction is `True` (§4.B).
    pub fn and(conjuncts: impl IntoIterator<Item = Formula>) -> Formula {
        let mut flat = Vec::new();
        for f in conjuncts {
            match f {
                Formula::True => continue,
                Formula::False => return Formula::False,
                Formula::And(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        match flat.len() {
            0 => Formula::True,
            1 => flat.into_iter().next().unwrap(),
            _ => Formula::And(flat),
        }
    }

    /// Disjunction, dual to [`Formula::and`]. An empty disjunction is `False`.
    pub fn or(disjuncts: impl IntoIterator<Item = Formula>) -> Formula {
        let mut flat = Vec::new();
        for f in disjuncts {
            match f {
                Formula::False => continue,
                Formula::True => return Formula::True,
                Formula::Or(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        match flat.len() {
            0 => Formula::False,
            1 => flat.into_iter().next().unwrap(),
            _ => Formula::Or(flat),
        }
    }

    pub fn implies(self, then: Formula) -> Formula {
        match (&self, &then) {
            (Formula::True, _) => then,
            (Formula::False, _) => Formula::True,
            (_, Formula::True) => Formula::True,
            _ => Formula::Implies(Box::new(self), Box::new(then)),
        }
    }

    pub fn forall(vars: Vec<VarId>, body: Formula) -> Formula {
        if vars.is_empty() {
            body
        } else {
            Formula::Forall(vars, Box::new(body))
        }
    }

    pub fn exists(vars: Vec<VarId>, body: Formula) -> Formula {
        if vars.is_empty() {
            body
        } else {
            Formula::Exists(vars, Box::new(body))
        }
    }

    pub fn next(self) -> Formula {
        Formula::Next(Box::new(self))
    }

    pub fn weak_next(self) -> Formula {
        Formula::WeakNext(Box::new(self))
    }

    pub fn globally(self) -> Formula {
        Formula::Globally(Box::new(self))
    }

    pub fn eventually(self) -> Formula {
        Formula::Eventually(Box::new(self))
    }

    pub fn eq(lhs: impl Into<Term>, rhs: impl Into<Term>) -> Formula {
        Formula::Eq(lhs.into(), rhs.into())
    }

    pub fn neq(lhs: impl Into<Term>, rhs: impl Into<Term>) -> Formula {
        Formula::Eq(lhs.into(), rhs.into()).not()
    }

    /// Every atom appearing anywhere in the formula, innermost first.
    /// Used by encoders that need to know which relations a formula mentions.
    pub fn atoms(&self, out: &mut Vec<Atom>) {
        match self {
            Formula::True | Formula::False | Formula::Eq(_, _) => {}
            Formula::Atom(a) => out.push(a.clone()),
            Formula::Not(f) | Formula::Forall(_, f) | Formula::Exists(_, f) => f.atoms(out),
            Formula::Next(f) | Formula::WeakNext(f) | Formula::Globally(f) | Formula::Eventually(f) => f.atoms(out),
            Formula::And(fs) | Formula::Or(fs) => fs.iter().for_each(|f| f.atoms(out)),
            Formula::Implies(a, b) => {
                a.atoms(out);
                b.atoms(out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn and_elides_true_and_flattens() {
        let f = Formula::and(vec![Formula::True, Formula::and(vec![Formula::True, Formula::True])]);
        assert!(matches!(f, Formula::True));
    }

    #[test]
    fn and_short_circuits_on_false() {
        let f = Formula::and(vec![Formula::True, Formula::False, Formula::True]);
        assert!(matches!(f, Formula::False));
    }

    #[test]
    fn double_negation_cancels() {
        let f = Formula::True.not().not();
        assert!(matches!(f, Formula::True));
    }

    #[test]
    fn forall_over_no_vars_is_identity() {
        let f = Formula::forall(vec![], Formula::True);
        assert!(matches!(f, Formula::True));
    }
}
