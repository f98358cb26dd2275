//! Repositories and repository groups.
//!
//! A [`Repository`] is the immutable set of statements decoded from one
//! source. A [`RepositoryGroup`] is the append-only list of repositories
//! backing one entity kind, together with the subject index over them.

use std::path::{Path, PathBuf};

use crate::index::SubjectIndex;
use crate::record::EntityKind;
use crate::statement::{Statement, Term};

/// An ordered collection of statements loaded from one source.
#[derive(Debug, Clone)]
pub struct Repository {
    source: PathBuf,
    statements: Vec<Statement>,
}

impl Repository {
    /// Creates a repository from already decoded statements.
    pub fn new(source: impl Into<PathBuf>, statements: Vec<Statement>) -> Self {
        Self {
            source: source.into(),
            statements,
        }
    }

    /// Returns the source this repository was loaded from.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Returns the number of statements (the triple count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Returns `true` if the repository holds no statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Iterates over the statements in their original order.
    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }

    /// Returns the statement at `offset`.
    #[must_use]
    pub fn get(&self, offset: usize) -> Option<&Statement> {
        self.statements.get(offset)
    }

    /// Rewrites every blank node, in subject and object position, to its
    /// [`blank_node_key`] under `scope`.
    fn scope_blank_nodes(&mut self, scope: usize) {
        for statement in &mut self.statements {
            if let Some(key) = scoped(&statement.subject, scope) {
                statement.subject = key;
            }
            if let Term::BlankNode(node) = &mut statement.object {
                if let Some(key) = scoped(node, scope) {
                    *node = key;
                }
            }
        }
    }
}

/// Returns the group-wide key of blank node `_:label` from the repository
/// at position `repository`.
///
/// Blank-node labels are local to the document they were parsed from, so
/// two repositories may both use `_:b0` for unrelated nodes. A group keys
/// them as `_:r{repository}.{label}`.
#[must_use]
pub fn blank_node_key(repository: usize, label: &str) -> String {
    format!("_:r{repository}.{label}")
}

fn scoped(node: &str, scope: usize) -> Option<String> {
    node.strip_prefix("_:").map(|label| blank_node_key(scope, label))
}

impl<'a> IntoIterator for &'a Repository {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The repositories backing lookups for one entity kind.
///
/// Groups only move forward: each [`append`](Self::append) adds one
/// repository and there is no way to remove one.
#[derive(Debug)]
pub struct RepositoryGroup {
    kind: EntityKind,
    repositories: Vec<Repository>,
    index: SubjectIndex,
}

impl RepositoryGroup {
    /// Creates an empty group for `kind`.
    #[must_use]
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            repositories: Vec::new(),
            index: SubjectIndex::new(),
        }
    }

    /// Returns the entity kind this group serves.
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Appends `repository` and indexes its statements. Returns the number
    /// of statements it contributed.
    ///
    /// Blank nodes are rekeyed with [`blank_node_key`] so that nodes from
    /// different repositories never share a subject.
    pub fn append(&mut self, mut repository: Repository) -> usize {
        let position = self.repositories.len();
        repository.scope_blank_nodes(position);
        self.index.insert_repository(position, &repository);
        let count = repository.len();
        self.repositories.push(repository);
        count
    }

    /// Returns every statement about `subject`, ordered by repository load
    /// order and then by position within the repository.
    #[must_use]
    pub fn find_by_subject(&self, subject: &str) -> Vec<&Statement> {
        self.index
            .lookup(subject)
            .iter()
            .filter_map(|r| self.repositories.get(r.repository)?.get(r.offset))
            .collect()
    }

    /// Full-scan equivalent of [`find_by_subject`](Self::find_by_subject).
    ///
    /// Reference implementation for checking the index; lookups should go
    /// through `find_by_subject`.
    #[doc(hidden)]
    #[must_use]
    pub fn scan_by_subject(&self, subject: &str) -> Vec<&Statement> {
        self.repositories
            .iter()
            .flat_map(Repository::iter)
            .filter(|st| st.subject == subject)
            .collect()
    }

    /// Returns the total number of statements across all repositories.
    #[must_use]
    pub fn triple_count(&self) -> usize {
        self.repositories.iter().map(Repository::len).sum()
    }

    /// Returns the number of repositories loaded so far.
    #[must_use]
    pub fn repository_count(&self) -> usize {
        self.repositories.len()
    }

    /// Returns the number of distinct subjects across all repositories.
    #[must_use]
    pub fn subject_count(&self) -> usize {
        self.index.subject_count()
    }

    /// Returns the sources of all repositories, in load order.
    pub fn sources(&self) -> impl Iterator<Item = &Path> {
        self.repositories.iter().map(Repository::source)
    }
}
