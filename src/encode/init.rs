//! Component C: the closed-world initial-state encoder.
//!
//! Asserts every listed fluent and negates every unlisted one; for each
//! predicate, asserts a universally-quantified biconditional tying the
//! predicate's extension to the explicit atoms of `problem.init`, per
//! `SPEC_FULL.md` §4.C.

use crate::alphabet::Alphabet;
use crate::domain::Domain;
use crate::formula::Formula;
use crate::problem::Problem;
use crate::sym::Sym;
use crate::term::{Atom, Term};
use hashbrown::HashSet;

/// `a ⟺ b`, built from the connectives `Formula` exposes (no native `Iff`
/// variant — see the "open polymorphism over formula shape" design note).
fn iff(a: Formula, b: Formula) -> Formula {
    Formula::and([a.clone().implies(b.clone()), b.implies(a)])
}

pub fn encode(alphabet: &mut Alphabet, domain: &Domain, problem: &Problem) -> Formula {
    let asserted: HashSet<_> = problem.init.fluents.iter().copied().collect();
    let props = Formula::and(domain.fluents.iter().map(|&f| {
        let atom = Formula::atom(Atom::new(f, []));
        if asserted.contains(&f) {
            atom
        } else {
            atom.not()
        }
    }));

    let preds = Formula::and(domain.predicates.iter().map(|&pred| {
        let params = alphabet.rel(pred).params.clone();
        let pred_name = alphabet.rel(pred).name.clone();
        let pi: Vec<_> = params
            .iter()
            .enumerate()
            .map(|(i, &sort)| alphabet.fresh_var(Sym::from(format!("_{pred_name}_{i}")), sort))
            .collect();

        let mut guards = Vec::new();
        for atom in &problem.init.predicates {
            if atom.rel != pred {
                continue;
            }
            debug_assert_eq!(
                atom.args.len(),
                pi.len(),
                "initial-state atom for `{pred_name}` has the wrong arity"
            );
            let eqs = pi
                .iter()
                .zip(atom.args.iter())
                .map(|(&v, &term)| Formula::eq(Term::Var(v), term));
            guards.push(Formula::and(eqs));
        }

        let applied = Formula::atom(Atom::new(pred, pi.iter().map(|&v| Term::Var(v))));
        Formula::forall(pi, iff(applied, Formula::or(guards)))
    }));

    Formula::and([props, preds])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::State;

    #[test]
    fn predicate_with_no_matching_atoms_is_universally_false() {
        let mut alphabet = Alphabet::new();
        let sort = alphabet.declare_sort(Sym::from("room"), vec![Sym::from("a"), Sym::from("b")]);
        let pred = alphabet.declare_rel(Sym::from("connected"), vec![sort, sort]);
        let domain = Domain::new(vec![], vec![pred], vec![]);
        let problem = Problem::new(vec![sort], State::default(), Formula::True, Formula::True);
        let f = encode(&mut alphabet, &domain, &problem);
        // `preds` conjunct should reduce to a universally-quantified
        // biconditional whose right-hand side is `False` (empty disjunction).
        assert!(!matches!(f, Formula::False));
    }
}
