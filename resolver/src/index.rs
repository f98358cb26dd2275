//! Subject-keyed statement index for a repository group.
//!
//! Repositories are append-only, so the index only ever grows: appending
//! repository `n` pushes one [`StatementRef`] per statement onto the posting
//! list of its subject. Posting lists are therefore already ordered by
//! (repository load order, offset within repository), which is the order the
//! record builder relies on for last-write-wins.

use std::collections::HashMap;

use crate::repository::Repository;

/// Position of a statement inside a repository group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatementRef {
    /// Index of the repository in load order.
    pub repository: usize,
    /// Offset of the statement within that repository.
    pub offset: usize,
}

/// Maps each subject to the positions of the statements about it.
#[derive(Debug, Default)]
pub struct SubjectIndex {
    postings: HashMap<String, Vec<StatementRef>>,
}

impl SubjectIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes every statement of `repo`, which was loaded at position
    /// `repository` of its group.
    pub fn insert_repository(&mut self, repository: usize, repo: &Repository) {
        for (offset, statement) in repo.iter().enumerate() {
            self.postings
                .entry(statement.subject.clone())
                .or_default()
                .push(StatementRef { repository, offset });
        }
    }

    /// Returns the positions of all statements about `subject`, in load order.
    #[must_use]
    pub fn lookup(&self, subject: &str) -> &[StatementRef] {
        self.postings.get(subject).map_or(&[], Vec::as_slice)
    }

    /// Returns the number of distinct subjects.
    #[must_use]
    pub fn subject_count(&self) -> usize {
        self.postings.len()
    }
}
