//! Small formatting and enumeration helpers, adapted from the solver crate's
//! `utils` module.

use std::fmt::{Display, Error, Formatter};

pub use streaming_iterator::StreamingIterator;

/// Wraps a closure as a `Display` impl.
///
/// Source: <https://github.com/rust-lang/rust/issues/46591#issuecomment-350437057>
pub struct Fmt<F>(pub F)
where
    F: Fn(&mut Formatter) -> std::fmt::Result;

impl<F> Display for Fmt<F>
where
    F: Fn(&mut Formatter) -> std::fmt::Result,
{
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        (self.0)(f)
    }
}

#[allow(clippy::while_let_on_iterator)]
pub fn disp_iter<T: Display>(f: &mut Formatter<'_>, iterable: &[T], sep: &str) -> Result<(), Error> {
    let mut i = iterable.iter();
    if let Some(first) = i.next() {
        write!(f, "{first}")?;
        while let Some(other) = i.next() {
            write!(f, "{sep}")?;
            write!(f, "{other}")?;
        }
    }
    Result::Ok(())
}

/// Enumerate all combinations that can be drawn from a vector of iterators,
/// in odometer order: the *last* generator varies fastest.
///
/// `enumerate(vec![0..2, 5..7])` yields `[0,5], [0,6], [1,5], [1,6]`.
///
/// This is the deterministic tuple order required when grounding an action's
/// parameters against their sort domains (plan extraction and the mutex
/// axioms both rely on it).
pub fn enumerate<Item, Iter: Iterator<Item = Item> + Clone>(
    generators: Vec<Iter>,
) -> impl StreamingIterator<Item = [Item]> {
    Combination::new(generators)
}

struct Combination<Item, Iterable> {
    gen: Vec<Iterable>,
    cur: Vec<Iterable>,
    sol: Vec<Item>,
    is_first: bool,
    finished: bool,
}

impl<Item, Iterable: Iterator<Item = Item> + Clone> Combination<Item, Iterable> {
    fn new(instances: Vec<Iterable>) -> Self {
        let size = instances.len();
        Combination {
            gen: instances.clone(),
            cur: instances,
            sol: Vec::with_capacity(size),
            is_first: true,
            finished: false,
        }
    }
}

impl<I, It: Iterator<Item = I> + Clone> StreamingIterator for Combination<I, It> {
    type Item = [I];

    fn advance(&mut self) {
        if self.finished {
            return;
        } else if self.is_first && self.gen.is_empty() {
            // empty generator list: the only solution is the empty tuple
            self.is_first = false;
            return;
        } else if !self.is_first {
            if self.sol.is_empty() {
                self.finished = true;
                return;
            }
            debug_assert!(self.sol.len() == self.gen.len());
            self.sol.pop();
        }
        self.is_first = false;
        loop {
            let lvl = self.sol.len();
            if let Some(i) = self.cur[lvl].next() {
                self.sol.push(i);
            } else {
                if self.sol.is_empty() {
                    self.finished = true;
                    return;
                }
                self.sol.pop();
                self.cur[lvl] = self.gen[lvl].clone();
            }
            if self.sol.len() == self.gen.len() {
                return;
            }
        }
    }

    fn get(&self) -> Option<&Self::Item> {
        if self.finished {
            None
        } else {
            debug_assert_eq!(self.sol.len(), self.gen.len());
            Some(self.sol.as_slice())
        }
    }
}
