//! Component E: precondition and effect axioms.
//!
//! `SPEC_FULL.md` §4.E:
//! - Preconditions: `⋀ₐ ∀a.params. apply(a) ⇒ a.precondition`.
//! - Effects: `⋀ₐ ⋀ₑ ∀a.params. (apply(a) ∧ e.precondition) ⇒ X(encode(e))`.

use crate::domain::Domain;
use crate::encode::{applicability, effect};
use crate::formula::Formula;
use crate::scope::Scope;

pub fn preconditions(domain: &Domain, scope: &Scope) -> Formula {
    Formula::and(domain.actions.iter().enumerate().map(|(i, a)| {
        let fires = applicability::apply(a, scope.action_rel(i));
        Formula::forall(a.params.clone(), fires.implies(a.precondition.clone()))
    }))
}

pub fn effects(domain: &Domain, scope: &Scope) -> Formula {
    Formula::and(domain.actions.iter().enumerate().map(|(i, a)| {
        let fires = applicability::apply(a, scope.action_rel(i));
        Formula::and(a.effects.iter().map(|e| {
            let trigger = Formula::and([fires.clone(), e.precondition.clone()]);
            let consequence = effect::encode(e).next();
            Formula::forall(a.params.clone(), trigger.implies(consequence))
        }))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;
    use crate::domain::{Action, Effect};
    use crate::scope::build_scope;
    use crate::problem::{Problem, State};
    use crate::sym::Sym;

    #[test]
    fn ground_action_precondition_axiom_has_no_quantifier() {
        let mut alphabet = Alphabet::new();
        let light = alphabet.declare_rel(Sym::from("light_on"), vec![]);
        let on = Action::new(
            "switch_on",
            vec![],
            Formula::True,
            vec![Effect::unconditional(vec![light], vec![], true)],
        );
        let domain = Domain::new(vec![light], vec![], vec![on]);
        let problem = Problem::new(vec![], State::default(), Formula::True, Formula::True);
        let scope = build_scope(&mut alphabet, &domain, &problem).unwrap();
        let _ = preconditions(&domain, &scope);
        let f = effects(&domain, &scope);
        assert!(!matches!(f, Formula::Forall(_, _)));
    }
}
