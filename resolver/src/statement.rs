//! Statements: immutable subject-predicate-object triples.

use std::fmt;

/// The object position of a [`Statement`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// An absolute IRI.
    Iri(String),
    /// A blank node, keyed as `_:label`. The same key is used when the
    /// node appears as a statement subject.
    BlankNode(String),
    /// A literal value.
    Literal {
        /// Lexical form of the literal.
        lexical: String,
        /// Datatype IRI, if the decoder reported one.
        datatype: Option<String>,
        /// Language tag of a `rdf:langString` literal.
        language: Option<String>,
    },
}

impl Term {
    /// Creates an IRI term.
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    /// Creates a plain literal with no datatype or language tag.
    pub fn literal(lexical: impl Into<String>) -> Self {
        Term::Literal {
            lexical: lexical.into(),
            datatype: None,
            language: None,
        }
    }

    /// Returns the plain string view of the term: the IRI, the blank node
    /// key, or the literal's lexical form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Term::Iri(iri) => iri,
            Term::BlankNode(key) => key,
            Term::Literal { lexical, .. } => lexical,
        }
    }

    /// Returns `true` for IRI terms.
    #[must_use]
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::BlankNode(key) => f.write_str(key),
            Term::Literal {
                lexical,
                datatype,
                language,
            } => {
                write!(f, "{lexical:?}")?;
                if let Some(lang) = language {
                    write!(f, "@{lang}")
                } else if let Some(dt) = datatype {
                    write!(f, "^^<{dt}>")
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// A single subject-predicate-object triple.
///
/// Statements have no identity beyond structural equality. Blank-node
/// subjects are stored as `_:label`, the same key as [`Term::BlankNode`];
/// a repository group rescopes both per repository on append.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Statement {
    /// Subject identifier.
    pub subject: String,
    /// Predicate IRI.
    pub predicate: String,
    /// Object value.
    pub object: Term,
}

impl Statement {
    /// Creates a statement.
    pub fn new(subject: impl Into<String>, predicate: impl Into<String>, object: Term) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}> <{}> {} .", self.subject, self.predicate, self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_string_view() {
        assert_eq!(Term::iri("http://example.org/a").as_str(), "http://example.org/a");
        assert_eq!(Term::BlankNode("_:b0".into()).as_str(), "_:b0");
        assert_eq!(Term::BlankNode("_:b0".into()).to_string(), "_:b0");
        let lit = Term::Literal {
            lexical: "Nitric oxide".into(),
            datatype: None,
            language: Some("en-US".into()),
        };
        assert_eq!(lit.as_str(), "Nitric oxide");
    }

    #[test]
    fn display_is_ntriples_like() {
        let st = Statement::new(
            "http://example.org/s",
            "http://www.w3.org/2000/01/rdf-schema#label",
            Term::Literal {
                lexical: "NO".into(),
                datatype: None,
                language: Some("en".into()),
            },
        );
        assert_eq!(
            st.to_string(),
            "<http://example.org/s> <http://www.w3.org/2000/01/rdf-schema#label> \"NO\"@en ."
        );
    }
}
