// Rust guideline compliant 2026-10-16

//! Name-to-identifier resolution for platform resources.
//!
//! Users may refer to projects, servers, jobs and environments either by ID
//! or by display name. Display names are not unique, so a name only resolves
//! when exactly one candidate carries it. Candidates are always supplied by
//! the caller; nothing here performs I/O.

use crate::{Error, Result};
use uuid::Uuid;

/// A resource with a stable unique identifier.
pub trait Identified {
    /// Returns the resource identifier.
    fn id(&self) -> Uuid;
}

/// Describes a resource kind in resolution error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kind {
    noun: &'static str,
    qualifier: Option<String>,
    scope: Option<&'static str>,
}

impl Kind {
    /// Creates a kind from its bare noun, e.g. `project`.
    #[must_use]
    pub fn new(noun: &'static str) -> Self {
        Self {
            noun,
            qualifier: None,
            scope: None,
        }
    }

    /// Adds a qualifier placed before the noun, e.g. `running`.
    #[must_use]
    pub fn qualified(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }

    /// Adds a scope phrase placed after the name, e.g. `in this project`.
    #[must_use]
    pub fn scoped(mut self, scope: &'static str) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Returns the bare noun.
    #[must_use]
    pub fn noun(&self) -> &'static str {
        self.noun
    }

    /// Returns the noun with its qualifier, e.g. `running server`.
    #[must_use]
    pub fn describe(&self) -> String {
        match &self.qualifier {
            Some(qualifier) => format!("{} {}", qualifier, self.noun),
            None => self.noun.to_string(),
        }
    }

    fn scope_suffix(&self) -> String {
        self.scope.map(|s| format!(" {s}")).unwrap_or_default()
    }

    fn not_found(&self, name: &str) -> Error {
        Error::NameNotFound {
            kind: self.describe(),
            name: name.to_string(),
            scope: self.scope_suffix(),
        }
    }

    fn ambiguous(&self, name: &str) -> Error {
        Error::AmbiguousName {
            kind: self.describe(),
            noun: self.noun.to_string(),
            name: name.to_string(),
        }
    }
}

/// Parses `query` as an identifier literal.
///
/// # Returns
///
/// `Some(id)` when `query` is a valid UUID in any of its textual forms.
#[must_use]
pub fn parse_identifier(query: &str) -> Option<Uuid> {
    Uuid::parse_str(query).ok()
}

/// Resolves a name or identifier literal to a resource identifier.
///
/// # Arguments
///
/// * `query` - Name or identifier supplied by the user
/// * `candidates` - Resources to match the name against
/// * `name_of` - Extracts the display name of a candidate
/// * `kind` - Resource kind for error messages
///
/// # Returns
///
/// `query` itself when it is an identifier literal, otherwise the identifier
/// of the single candidate named `query`.
///
/// # Errors
///
/// Returns `Error::NameNotFound` if no candidate is named `query` and
/// `Error::AmbiguousName` if several are.
pub fn resolve<T, F>(query: &str, candidates: &[T], name_of: F, kind: &Kind) -> Result<Uuid>
where
    T: Identified,
    F: Fn(&T) -> &str,
{
    resolve_where(query, candidates, name_of, |_| true, kind)
}

/// Resolves like [`resolve`], considering only candidates accepted by
/// `predicate`.
///
/// # Errors
///
/// Returns `Error::NameNotFound` or `Error::AmbiguousName` as for [`resolve`].
pub fn resolve_where<T, F, P>(
    query: &str,
    candidates: &[T],
    name_of: F,
    predicate: P,
    kind: &Kind,
) -> Result<Uuid>
where
    T: Identified,
    F: Fn(&T) -> &str,
    P: Fn(&T) -> bool,
{
    if let Some(id) = parse_identifier(query) {
        return Ok(id);
    }
    match_name(query, candidates, name_of, predicate, kind).map(Identified::id)
}

/// Finds the single candidate accepted by `predicate` and named `name`.
///
/// Names are compared exactly and case-sensitively. Identifier literals are
/// not special here.
///
/// # Errors
///
/// Returns `Error::NameNotFound` if nothing matches and
/// `Error::AmbiguousName` if more than one candidate matches.
pub fn match_name<'c, T, F, P>(
    name: &str,
    candidates: &'c [T],
    name_of: F,
    predicate: P,
    kind: &Kind,
) -> Result<&'c T>
where
    F: Fn(&T) -> &str,
    P: Fn(&T) -> bool,
{
    let mut matches = candidates
        .iter()
        .filter(|candidate| predicate(*candidate) && name_of(*candidate) == name);

    match (matches.next(), matches.next()) {
        (Some(found), None) => Ok(found),
        (None, _) => Err(kind.not_found(name)),
        (Some(_), Some(_)) => Err(kind.ambiguous(name)),
    }
}

/// Picks the only candidate accepted by `predicate`.
///
/// Used when the user gave no name at all.
///
/// # Errors
///
/// Returns `Error::NoneAvailable` if no candidate is accepted and
/// `Error::SelectionRequired` if several are.
pub fn select_only<'c, T, P>(candidates: &'c [T], predicate: P, kind: &Kind) -> Result<&'c T>
where
    P: Fn(&T) -> bool,
{
    let accepted: Vec<&T> = candidates.iter().filter(|c| predicate(*c)).collect();

    match accepted.as_slice() {
        [only] => Ok(*only),
        [] => Err(Error::NoneAvailable {
            kind: kind.describe(),
            scope: kind.scope_suffix(),
        }),
        many => Err(Error::SelectionRequired {
            kind: kind.describe(),
            noun: kind.noun.to_string(),
            scope: kind.scope_suffix(),
            count: many.len(),
        }),
    }
}
