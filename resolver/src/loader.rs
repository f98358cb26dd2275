//! Repository loading.
//!
//! A [`Decoder`] turns a source path into statements and distinguishes an
//! absent source (`Ok(None)`) from a malformed one ([`Error::Parse`]).
//! [`RdfDecoder`] is the default decoder and reads Turtle and N-Triples
//! through `sophia_turtle`.

use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use sophia_api::source::TripleSource;
use sophia_api::term::TermKind;
use sophia_api::triple::Triple as _;
use sophia_turtle::parser::{nt, turtle};

use crate::error::{Error, Result};
use crate::repository::Repository;
use crate::statement::{Statement, Term};

/// Decodes a repository source into statements.
pub trait Decoder: Send + Sync {
    /// Decodes `source`.
    ///
    /// Returns `Ok(None)` if the source does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the source is malformed and [`Error::Io`]
    /// if it exists but cannot be read.
    fn decode(&self, source: &Path) -> Result<Option<Vec<Statement>>>;
}

/// Serialization formats understood by [`RdfDecoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    /// Turtle 1.1.
    Turtle,
    /// N-Triples.
    NTriples,
}

impl RdfFormat {
    /// Picks the format from the file extension. Anything that is not
    /// `.nt`/`.ntriples` is read as Turtle, which is a superset of N-Triples.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("nt") || ext.eq_ignore_ascii_case("ntriples") => {
                RdfFormat::NTriples
            }
            _ => RdfFormat::Turtle,
        }
    }

    /// Returns `true` if `path` has an extension this decoder recognises.
    #[must_use]
    pub fn is_rdf_file(path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                ["ttl", "turtle", "nt", "ntriples"]
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            })
    }
}

/// The default Turtle / N-Triples decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct RdfDecoder;

impl RdfDecoder {
    /// Decodes in-memory text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if `text` is not valid in `format`.
    pub fn parse_str(text: &str, format: RdfFormat) -> Result<Vec<Statement>> {
        let origin = Path::new("<string>");
        match format {
            RdfFormat::Turtle => collect_statements(turtle::parse_str(text), origin),
            RdfFormat::NTriples => collect_statements(nt::parse_str(text), origin),
        }
    }
}

impl Decoder for RdfDecoder {
    fn decode(&self, source: &Path) -> Result<Option<Vec<Statement>>> {
        let file = match File::open(source) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(Error::Io {
                    path: source.to_path_buf(),
                    source: err,
                })
            }
        };
        let reader = BufReader::new(file);
        let statements = match RdfFormat::from_path(source) {
            RdfFormat::Turtle => collect_statements(turtle::parse_bufread(reader), source)?,
            RdfFormat::NTriples => collect_statements(nt::parse_bufread(reader), source)?,
        };
        Ok(Some(statements))
    }
}

/// Decodes `path` into a repository.
///
/// Returns `Ok(None)` when the source is absent or holds no statements;
/// nothing should be registered in either case.
///
/// # Errors
///
/// Propagates the decoder's error for unreadable or malformed sources.
pub fn load_repository(decoder: &dyn Decoder, path: &Path) -> Result<Option<Repository>> {
    match decoder.decode(path)? {
        None => {
            tracing::debug!("Repository source {} does not exist; nothing loaded", path.display());
            Ok(None)
        }
        Some(statements) if statements.is_empty() => {
            tracing::debug!("Repository source {} holds no statements", path.display());
            Ok(None)
        }
        Some(statements) => Ok(Some(Repository::new(path, statements))),
    }
}

/// A term the statement model cannot represent (RDF-star, variables).
#[derive(Debug, thiserror::Error)]
#[error("unsupported {position} term: {kind}")]
struct UnsupportedTerm {
    position: &'static str,
    kind: String,
}

fn collect_statements<S: TripleSource>(mut source: S, origin: &Path) -> Result<Vec<Statement>> {
    let mut statements = Vec::new();
    source
        .try_for_each_triple(|t| -> std::result::Result<(), UnsupportedTerm> {
            let subject = match convert(t.s(), "subject")? {
                Term::Iri(iri) => iri,
                Term::BlankNode(key) => key,
                Term::Literal { .. } => return Err(unsupported("subject", "literal")),
            };
            let predicate = match convert(t.p(), "predicate")? {
                Term::Iri(iri) => iri,
                _ => return Err(unsupported("predicate", "non-IRI")),
            };
            let object = convert(t.o(), "object")?;
            statements.push(Statement {
                subject,
                predicate,
                object,
            });
            Ok(())
        })
        .map_err(|err| Error::Parse {
            source_path: PathBuf::from(origin),
            message: err.to_string(),
        })?;
    Ok(statements)
}

fn convert<T: sophia_api::term::Term>(
    term: T,
    position: &'static str,
) -> std::result::Result<Term, UnsupportedTerm> {
    let kind = term.kind();
    let converted = match kind {
        TermKind::Iri => term.iri().map(|iri| Term::Iri(iri.as_str().to_string())),
        TermKind::BlankNode => term
            .bnode_id()
            .map(|id| Term::BlankNode(format!("_:{}", id.as_str()))),
        TermKind::Literal => term.lexical_form().map(|lexical| Term::Literal {
            lexical: lexical.to_string(),
            datatype: term.datatype().map(|dt| dt.as_str().to_string()),
            language: term.language_tag().map(|tag| tag.as_str().to_string()),
        }),
        _ => None,
    };
    converted.ok_or_else(|| unsupported(position, &format!("{kind:?}")))
}

fn unsupported(position: &'static str, kind: &str) -> UnsupportedTerm {
    UnsupportedTerm {
        position,
        kind: kind.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sosa_vocab::namespaces::{rdf, rdfs, xsd};

    #[test]
    fn format_from_extension() {
        assert_eq!(RdfFormat::from_path(Path::new("a.nt")), RdfFormat::NTriples);
        assert_eq!(RdfFormat::from_path(Path::new("a.NT")), RdfFormat::NTriples);
        assert_eq!(RdfFormat::from_path(Path::new("a.ttl")), RdfFormat::Turtle);
        assert_eq!(RdfFormat::from_path(Path::new("a")), RdfFormat::Turtle);
        assert!(RdfFormat::is_rdf_file(Path::new("dir/x.ttl")));
        assert!(!RdfFormat::is_rdf_file(Path::new("dir/x.toml")));
        assert!(!RdfFormat::is_rdf_file(Path::new("dir/ttl")));
    }

    #[test]
    fn extension_checks_agree_on_case() {
        for name in ["X.NT", "x.Ttl", "x.NTRIPLES", "x.TURTLE"] {
            let path = Path::new(name);
            assert!(RdfFormat::is_rdf_file(path), "{name} should be loadable");
        }
        assert_eq!(RdfFormat::from_path(Path::new("X.NT")), RdfFormat::NTriples);
    }

    #[test]
    fn parse_turtle_terms() {
        let text = r#"
            @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
            @prefix ex: <http://example.org/> .
            ex:a a ex:Thing ;
                rdfs:label "Thing A"@en .
            _:b rdfs:label "B" .
        "#;
        let statements = RdfDecoder::parse_str(text, RdfFormat::Turtle).unwrap();
        assert_eq!(statements.len(), 3);
        assert_eq!(statements[0].subject, "http://example.org/a");
        assert_eq!(statements[0].predicate, rdf::TYPE);
        assert_eq!(statements[0].object, Term::iri("http://example.org/Thing"));
        assert_eq!(statements[1].predicate, rdfs::LABEL);
        match &statements[1].object {
            Term::Literal { lexical, language, .. } => {
                assert_eq!(lexical, "Thing A");
                assert_eq!(language.as_deref(), Some("en"));
            }
            other => panic!("expected literal, got {other:?}"),
        }
        assert!(statements[2].subject.starts_with("_:"));
    }

    #[test]
    fn blank_node_keys_match_across_positions() {
        let text = r#"
            @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
            @prefix ex: <http://example.org/> .
            ex:a ex:part _:b .
            _:b rdfs:label "B" .
        "#;
        let statements = RdfDecoder::parse_str(text, RdfFormat::Turtle).unwrap();
        assert!(matches!(statements[0].object, Term::BlankNode(_)));
        assert_eq!(statements[0].object.as_str(), statements[1].subject);
    }

    #[test]
    fn parse_ntriples_datatype() {
        let text = "<http://example.org/a> <http://example.org/n> \"3\"^^<http://www.w3.org/2001/XMLSchema#integer> .\n";
        let statements = RdfDecoder::parse_str(text, RdfFormat::NTriples).unwrap();
        match &statements[0].object {
            Term::Literal { lexical, datatype, .. } => {
                assert_eq!(lexical, "3");
                assert_eq!(datatype.as_deref(), Some(xsd::INTEGER));
            }
            other => panic!("expected literal, got {other:?}"),
        }
    }

    #[test]
    fn malformed_text_is_a_parse_error() {
        let err = RdfDecoder::parse_str("<http://example.org/a> <oops", RdfFormat::Turtle)
            .unwrap_err();
        assert!(matches!(err, Error::Parse { .. }), "{err:?}");
    }

    #[test]
    fn absent_file_decodes_to_none() {
        let decoded = RdfDecoder.decode(Path::new("does/not/exist.ttl")).unwrap();
        assert!(decoded.is_none());
        assert!(load_repository(&RdfDecoder, Path::new("does/not/exist.ttl"))
            .unwrap()
            .is_none());
    }
}
