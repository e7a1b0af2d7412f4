//! Component A: the scope builder.
//!
//! Registers, with the shared alphabet, a fresh firing relation per action
//! and checks that every sort referenced by the domain's predicates and
//! actions was declared by the problem. Failure here is a caller-visible
//! [`ScopeError`], folded by [`crate::solver::Solver::solve`] into
//! `Verdict::Undefined` rather than panicking (see `SPEC_FULL.md` §7).

use crate::alphabet::{Alphabet, RelId, SortId};
use crate::domain::Domain;
use crate::problem::Problem;
use crate::sym::Sym;
use hashbrown::HashSet;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScopeError {
    #[error("sort used by `{rel}` was not declared by the problem")]
    UndeclaredSort { rel: Sym },
    #[error("relation name `{0}` is declared more than once (shared between a predicate/fluent and an action, or between two actions)")]
    DuplicateRelationName(Sym),
}

/// The typed scope Ξ: the firing relation created for each action, aligned
/// by index with `domain.actions`.
pub struct Scope {
    pub action_rels: Vec<RelId>,
}

impl Scope {
    pub fn action_rel(&self, action_index: usize) -> RelId {
        self.action_rels[action_index]
    }
}

pub fn build_scope(alphabet: &mut Alphabet, domain: &Domain, problem: &Problem) -> Result<Scope, ScopeError> {
    let declared_sorts: HashSet<SortId> = problem.types.iter().copied().collect();

    let mut used_names: HashSet<Sym> = HashSet::new();
    for &rel in domain.fluents.iter().chain(domain.predicates.iter()) {
        let record = alphabet.rel(rel);
        if !used_names.insert(record.name.clone()) {
            return Err(ScopeError::DuplicateRelationName(record.name.clone()));
        }
        for &sort in &record.params {
            if !declared_sorts.contains(&sort) {
                return Err(ScopeError::UndeclaredSort { rel: record.name.clone() });
            }
        }
    }

    let mut action_rels = Vec::with_capacity(domain.actions.len());
    for action in &domain.actions {
        if !used_names.insert(action.name.clone()) {
            return Err(ScopeError::DuplicateRelationName(action.name.clone()));
        }
        let param_sorts: Vec<SortId> = action
            .params
            .iter()
            .map(|&v| alphabet.var(v).sort)
            .collect();
        for &sort in &param_sorts {
            if !declared_sorts.contains(&sort) {
                return Err(ScopeError::UndeclaredSort {
                    rel: action.name.clone(),
                });
            }
        }
        let rel = alphabet.declare_rel(action.name.clone(), param_sorts);
        action_rels.push(rel);
    }

    debug!(
        sorts = declared_sorts.len(),
        fluents = domain.fluents.len(),
        predicates = domain.predicates.len(),
        actions = domain.actions.len(),
        "scope built"
    );

    Ok(Scope { action_rels })
}
