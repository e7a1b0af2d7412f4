//! The `Engine` port: the pluggable LTLf-FO decision procedure.
//!
//! The compiler (see [`crate::encode`]) and the plan extractor
//! ([`crate::extract`]) are agnostic to how satisfiability is actually
//! decided; they only need a [`Model`] that can answer point-wise truth
//! queries over a finite trace. This module also carries the standard
//! LTLf-FO evaluation semantics (`eval`) shared by every `Engine`
//! implementation that works by direct formula evaluation against a
//! candidate model, such as [`crate::engine::bounded::BoundedEngine`].

pub mod bounded;

use crate::alphabet::{Alphabet, ObjId, VarId};
use crate::formula::Formula;
use crate::term::{Atom, Term};
use hashbrown::HashMap;

/// The three-valued outcome of a decision attempt.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Verdict {
    True,
    False,
    Undefined,
}

/// A finite trace that can answer "is this atom true at time `t`?".
pub trait Model {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `atom` must be fully ground (no `Term::Var` left); `t` must be `< len()`.
    fn value(&self, atom: &Atom, t: usize) -> bool;
}

/// A pluggable LTLf-FO decision procedure.
pub trait Engine {
    type Model: Model;

    fn decide(&mut self, alphabet: &Alphabet, formula: &Formula) -> (Verdict, Option<Self::Model>);
}

/// Replaces every bound variable in `map` with its corresponding object,
/// leaving free variables untouched. Used to ground a quantifier body (or an
/// action's precondition/effects) before evaluating it against a model.
pub fn substitute(f: &Formula, map: &HashMap<VarId, ObjId>) -> Formula {
    match f {
        Formula::True => Formula::True,
        Formula::False => Formula::False,
        Formula::Atom(a) => Formula::Atom(Atom::new(a.rel, a.args.iter().map(|t| subst_term(t, map)))),
        Formula::Eq(l, r) => Formula::Eq(subst_term(l, map), subst_term(r, map)),
        Formula::Not(inner) => substitute(inner, map).not(),
        Formula::And(fs) => Formula::And(fs.iter().map(|x| substitute(x, map)).collect()),
        Formula::Or(fs) => Formula::Or(fs.iter().map(|x| substitute(x, map)).collect()),
        Formula::Implies(a, b) => Formula::Implies(Box::new(substitute(a, map)), Box::new(substitute(b, map))),
        Formula::Forall(vs, body) => Formula::Forall(vs.clone(), Box::new(substitute(body, map))),
        Formula::Exists(vs, body) => Formula::Exists(vs.clone(), Box::new(substitute(body, map))),
        Formula::Next(b) => Formula::Next(Box::new(substitute(b, map))),
        Formula::WeakNext(b) => Formula::WeakNext(Box::new(substitute(b, map))),
        Formula::Globally(b) => Formula::Globally(Box::new(substitute(b, map))),
        Formula::Eventually(b) => Formula::Eventually(Box::new(substitute(b, map))),
    }
}

fn subst_term(t: &Term, map: &HashMap<VarId, ObjId>) -> Term {
    match t {
        Term::Var(v) => map.get(v).map(|&o| Term::Obj(o)).unwrap_or(*t),
        Term::Obj(_) => *t,
    }
}

fn ground_term(t: Term) -> ObjId {
    match t {
        Term::Obj(o) => o,
        Term::Var(_) => panic!("model evaluation reached a non-ground atom (unresolved quantifier variable)"),
    }
}

/// Evaluates `f` against `model` at time `t`, per the standard LTLf-FO
/// semantics: `X` (strong next) is false with no successor state; `wX` (weak
/// next) is true with no successor state; `G`/`F` range over `t ..
/// model.len()`. Quantifiers range over the declared object domain of the
/// bound variable's sort.
pub fn eval(f: &Formula, model: &dyn Model, t: usize, alphabet: &Alphabet) -> bool {
    match f {
        Formula::True => true,
        Formula::False => false,
        Formula::Atom(a) => {
            let args: Vec<ObjId> = a.args.iter().map(|&term| ground_term(term)).collect();
            model.value(&Atom::new(a.rel, args.into_iter().map(Term::Obj)), t)
        }
        Formula::Eq(l, r) => ground_term(*l) == ground_term(*r),
        Formula::Not(inner) => !eval(inner, model, t, alphabet),
        Formula::And(fs) => fs.iter().all(|x| eval(x, model, t, alphabet)),
        Formula::Or(fs) => fs.iter().any(|x| eval(x, model, t, alphabet)),
        Formula::Implies(a, b) => !eval(a, model, t, alphabet) || eval(b, model, t, alphabet),
        Formula::Forall(vs, body) => eval_quantifier(vs, body, model, t, alphabet, true),
        Formula::Exists(vs, body) => eval_quantifier(vs, body, model, t, alphabet, false),
        Formula::Next(b) => t + 1 < model.len() && eval(b, model, t + 1, alphabet),
        Formula::WeakNext(b) => t + 1 >= model.len() || eval(b, model, t + 1, alphabet),
        Formula::Globally(b) => (t..model.len()).all(|t2| eval(b, model, t2, alphabet)),
        Formula::Eventually(b) => (t..model.len()).any(|t2| eval(b, model, t2, alphabet)),
    }
}

fn eval_quantifier(vs: &[VarId], body: &Formula, model: &dyn Model, t: usize, alphabet: &Alphabet, universal: bool) -> bool {
    let domains: Vec<Vec<ObjId>> = vs.iter().map(|&v| alphabet.domain_of(alphabet.var(v).sort).to_vec()).collect();
    let gens: Vec<_> = domains.iter().map(|d| d.iter().copied());
    let mut it = crate::utils::enumerate(gens.collect());
    while let Some(tuple) = it.next() {
        let map: HashMap<VarId, ObjId> = vs.iter().copied().zip(tuple.iter().copied()).collect();
        let grounded = substitute(body, &map);
        let holds = eval(&grounded, model, t, alphabet);
        if universal && !holds {
            return false;
        }
        if !universal && holds {
            return true;
        }
    }
    universal
}
