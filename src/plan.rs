//! Ground plans: the output of a successful `solve`.

use crate::alphabet::{Alphabet, ObjId};
use crate::sym::Sym;
use crate::utils::Fmt;
use std::fmt::{Display, Formatter};

/// A single ground action instance: an action name plus one object per
/// declared parameter, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub action: Sym,
    pub args: Vec<ObjId>,
}

impl Step {
    pub fn new(action: Sym, args: Vec<ObjId>) -> Self {
        Step { action, args }
    }

    pub fn display<'a>(&'a self, alphabet: &'a Alphabet) -> impl Display + 'a {
        Fmt(move |f: &mut Formatter| {
            write!(f, "{}", self.action)?;
            if !self.args.is_empty() {
                write!(f, "(")?;
                for (i, a) in self.args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", alphabet.object(*a).name)?;
                }
                write!(f, ")")?;
            }
            Ok(())
        })
    }
}

/// An ordered sequence of ground action instances.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Plan {
    pub steps: Vec<Step>,
}

impl Plan {
    pub fn new(steps: Vec<Step>) -> Self {
        Plan { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
