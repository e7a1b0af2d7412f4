//! Component G: the serial-plan (mutex) axioms. `SPEC_FULL.md` §4.G.
//!
//! Two families: no two distinct actions fire at once, and no action fires
//! with two distinct argument tuples at once. Per the documented decision in
//! `SPEC_FULL.md` §9 ("the reimplementation may deduplicate"), the first
//! family is generated once per unordered pair rather than twice.

use crate::alphabet::Alphabet;
use crate::domain::Domain;
use crate::encode::applicability;
use crate::formula::Formula;
use crate::scope::Scope;
use crate::sym::Sym;
use crate::term::Term;
use itertools::Itertools;

pub fn axioms(alphabet: &mut Alphabet, domain: &Domain, scope: &Scope) -> Formula {
    let mut out = Vec::new();

    for ((i, a1), (j, a2)) in domain.actions.iter().enumerate().tuple_combinations::<(_, _)>() {
        let fires1 = applicability::apply(a1, scope.action_rel(i));
        let fires2 = applicability::apply(a2, scope.action_rel(j));
        out.push(Formula::or([
            Formula::exists(a1.params.clone(), fires1.not()),
            Formula::exists(a2.params.clone(), fires2.not()),
        ]));
    }

    for (i, a) in domain.actions.iter().enumerate() {
        if a.params.is_empty() {
            continue;
        }
        let rel = scope.action_rel(i);
        let primes: Vec<_> = a
            .params
            .iter()
            .map(|&v| {
                let record = alphabet.var(v);
                let name = Sym::from(format!("_prime_{}", record.name));
                let sort = record.sort;
                alphabet.fresh_var(name, sort)
            })
            .collect();

        let guard = Formula::or(
            a.params
                .iter()
                .zip(primes.iter())
                .map(|(&v, &pv)| Formula::neq(Term::Var(v), Term::Var(pv))),
        );

        let fires = applicability::apply(a, rel);
        let fires_primed = applicability::literal(rel, &primes);

        out.push(Formula::forall(
            a.params.clone(),
            fires.implies(Formula::forall(primes, guard.implies(fires_primed.not()))),
        ));
    }

    Formula::and(out)
}
