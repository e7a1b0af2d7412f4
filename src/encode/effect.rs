//! Component B: the effect encoder.
//!
//! Translates a single [`Effect`] into the conjunction of (possibly negated)
//! literals it asserts at the next state, per `SPEC_FULL.md` §4.B.

use crate::domain::Effect;
use crate::formula::Formula;
use crate::term::Atom;

/// `lit(x) = x if e.positive else ¬x`, conjoined over `e.fluents` and
/// `e.predicates`. An empty conjunction is `⊤`.
pub fn encode(e: &Effect) -> Formula {
    let lit = |f: Formula| if e.positive { f } else { f.not() };
    let fluents = e.fluents.iter().map(|&rel| lit(Formula::atom(Atom::new(rel, []))));
    let predicates = e.predicates.iter().map(|atom| lit(Formula::atom(atom.clone())));
    Formula::and(fluents.chain(predicates))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;
    use crate::sym::Sym;

    #[test]
    fn empty_effect_is_true() {
        let e = Effect::unconditional(vec![], vec![], true);
        assert!(matches!(encode(&e), Formula::True));
    }

    #[test]
    fn negative_effect_negates_every_literal() {
        let mut alphabet = Alphabet::new();
        let p = alphabet.declare_rel(Sym::from("p"), vec![]);
        let e = Effect::unconditional(vec![p], vec![], false);
        let f = encode(&e);
        assert!(matches!(f, Formula::Not(_)));
    }
}
