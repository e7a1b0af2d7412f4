//! Component F: closed-world frame axioms, for fluents and predicates, both
//! change directions. `SPEC_FULL.md` §4.F.

use crate::alphabet::{Alphabet, RelId, VarId};
use crate::domain::Domain;
use crate::encode::applicability;
use crate::formula::Formula;
use crate::scope::Scope;
use crate::sym::Sym;
use crate::term::{Atom, Term};

/// Frame axiom for a propositional fluent in one change direction: a fluent
/// can only flip polarity when some firing action names it, with matching
/// polarity, in an effect whose precondition held.
pub fn fluent_frame(domain: &Domain, scope: &Scope, fluent: RelId, change_to_true: bool) -> Formula {
    let p = Formula::atom(Atom::new(fluent, []));
    let head = if change_to_true {
        Formula::and([p.clone().not(), p.clone().next()])
    } else {
        Formula::and([p.clone(), p.clone().not().next()])
    };

    let body = Formula::or(domain.actions.iter().enumerate().map(|(i, a)| {
        let fires = applicability::apply(a, scope.action_rel(i));
        let pre = Formula::or(
            a.effects
                .iter()
                .filter(|e| e.positive == change_to_true && e.fluents.contains(&fluent))
                .map(|e| e.precondition.clone()),
        );
        Formula::exists(a.params.clone(), Formula::and([fires, pre]))
    }));

    head.implies(body)
}

/// Frame axiom for a `k`-ary predicate in one change direction. The fresh
/// universally-quantified slot variables `π` stand for "the instance that
/// (did not) change"; the body binds action-parameter occurrences to `π` via
/// an equality mapping so the lifted law talks about the *same* instance the
/// firing action's effect names.
pub fn predicate_frame(alphabet: &mut Alphabet, domain: &Domain, scope: &Scope, pred: RelId, change_to_true: bool) -> Formula {
    let params = alphabet.rel(pred).params.clone();
    let pred_name = alphabet.rel(pred).name.clone();
    let pi: Vec<VarId> = params
        .iter()
        .enumerate()
        .map(|(i, &sort)| alphabet.fresh_var(Sym::from(format!("_{pred_name}_{i}")), sort))
        .collect();

    let applied = Formula::atom(Atom::new(pred, pi.iter().map(|&v| Term::Var(v))));
    let head = if change_to_true {
        Formula::and([applied.clone().not(), applied.clone().next()])
    } else {
        Formula::and([applied.clone(), applied.clone().not().next()])
    };

    let body = Formula::or(domain.actions.iter().enumerate().map(|(i, a)| {
        let fires = applicability::apply(a, scope.action_rel(i));
        let mut mappings = Vec::new();
        let mut pre = Vec::new();
        for e in &a.effects {
            if e.positive != change_to_true {
                continue;
            }
            for t in &e.predicates {
                if t.rel != pred {
                    continue;
                }
                pre.push(e.precondition.clone());
                for (&term, &slot) in t.args.iter().zip(pi.iter()) {
                    mappings.push(Formula::eq(term, Term::Var(slot)));
                }
            }
        }
        Formula::exists(a.params.clone(), Formula::and([fires, Formula::and(mappings), Formula::or(pre)]))
    }));

    Formula::forall(pi, head.implies(body))
}
