//! First-order terms and atoms over the alphabet.

use crate::alphabet::{Alphabet, ObjId, RelId, VarId};
use smallvec::SmallVec;
use std::fmt::{Display, Formatter};

/// A first-order term: either a bound/quantified variable or a constant
/// (object) from a sort's domain.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Term {
    Var(VarId),
    Obj(ObjId),
}

impl From<VarId> for Term {
    fn from(v: VarId) -> Self {
        Term::Var(v)
    }
}

impl From<ObjId> for Term {
    fn from(o: ObjId) -> Self {
        Term::Obj(o)
    }
}

/// A relation applied to an argument list: a predicate instance, or an
/// action's firing literal when `rel` names an action.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Atom {
    pub rel: RelId,
    pub args: SmallVec<[Term; 4]>,
}

impl Atom {
    pub fn new(rel: RelId, args: impl IntoIterator<Item = Term>) -> Self {
        Atom {
            rel,
            args: args.into_iter().collect(),
        }
    }

    /// A 0-ary atom, e.g. for a propositional fluent or a ground action's
    /// firing literal.
    pub fn prop(rel: RelId) -> Self {
        Atom::new(rel, [])
    }

    pub fn display<'a>(&'a self, alphabet: &'a Alphabet) -> impl Display + 'a {
        crate::utils::Fmt(move |f: &mut Formatter| {
            write!(f, "{}", alphabet.rel(self.rel).name)?;
            if !self.args.is_empty() {
                write!(f, "(")?;
                for (i, a) in self.args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    match a {
                        Term::Var(v) => write!(f, "{}", alphabet.var(*v).name)?,
                        Term::Obj(o) => write!(f, "{}", alphabet.object(*o).name)?,
                    }
                }
                write!(f, ")")?;
            }
            Ok(())
        })
    }
}
