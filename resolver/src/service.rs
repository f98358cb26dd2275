//! The resolution service: repository groups plus load and resolve.
//!
//! A [`ResolutionService`] owns one [`RepositoryGroup`] per registered
//! [`EntityKind`]. It is an ordinary value: construct it once at the
//! composition root and share it (typically through an `Arc`).
//!
//! Each group sits behind its own `RwLock`. Loads decode their source
//! before taking the write lock, so appends are serialised but parsing is
//! not; resolves only take the read lock and may run in parallel.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use walkdir::WalkDir;

use crate::builder::build;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::loader::{load_repository, Decoder, RdfDecoder, RdfFormat};
use crate::record::{
    EntityKind, FeatureOfInterest, Procedure, Property, Record, Resource, System,
};
use crate::repository::{Repository, RepositoryGroup};
use crate::statement::Statement;
use crate::unit::{UnitCatalog, UnitResolver};

/// Loads repositories and resolves resource IRIs into records.
pub struct ResolutionService {
    groups: BTreeMap<EntityKind, RwLock<RepositoryGroup>>,
    decoder: Arc<dyn Decoder>,
    units: Arc<dyn UnitResolver>,
}

impl ResolutionService {
    /// Creates a service with a group for every [`EntityKind`], the
    /// built-in unit catalog, and the Turtle / N-Triples decoder.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Returns a builder for a customised service.
    #[must_use]
    pub fn builder() -> ResolutionServiceBuilder {
        ResolutionServiceBuilder::default()
    }

    /// Builds a service from a configuration and loads its sources in order.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while reading unit catalogs or
    /// loading sources.
    pub fn from_config(config: &Config) -> Result<Self> {
        let decoder = RdfDecoder;
        let mut catalog = if config.units.builtin {
            UnitCatalog::builtin()
        } else {
            UnitCatalog::empty()
        };
        for path in &config.units.catalogs {
            catalog.load_qudt(&decoder, path)?;
        }

        let service = Self::builder()
            .decoder(decoder)
            .unit_resolver(catalog)
            .build();
        for source in &config.sources {
            if source.path.is_dir() {
                service.load_dir(source.kind, &source.path)?;
            } else {
                service.load(source.kind, &source.path)?;
            }
        }
        tracing::info!(
            "Resolution service ready with {} configured sources",
            config.sources.len()
        );
        Ok(service)
    }

    /// Returns the registered kinds.
    pub fn kinds(&self) -> impl Iterator<Item = EntityKind> + '_ {
        self.groups.keys().copied()
    }

    /// Loads the repository at `path` into the group for `kind`.
    ///
    /// Returns the number of statements contributed. An absent or empty
    /// source contributes `0` and leaves the group unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownKind`] if `kind` is not registered, and
    /// [`Error::Parse`] or [`Error::Io`] if the source is malformed or
    /// unreadable. The group is unchanged on error.
    pub fn load(&self, kind: EntityKind, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let group = self.group(kind)?;
        let Some(repository) = load_repository(self.decoder.as_ref(), path)? else {
            return Ok(0);
        };
        let count = write(group).append(repository);
        tracing::info!("Loaded {} statements from {} into {}", count, path.display(), kind);
        Ok(count)
    }

    /// Loads every Turtle / N-Triples file under `dir`, in sorted path
    /// order. Returns the total number of statements contributed; an absent
    /// directory contributes `0`.
    ///
    /// # Errors
    ///
    /// Fails on the first file that cannot be loaded; files loaded before it
    /// stay loaded.
    pub fn load_dir(&self, kind: EntityKind, dir: impl AsRef<Path>) -> Result<usize> {
        let dir = dir.as_ref();
        self.group(kind)?;
        if !dir.exists() {
            tracing::debug!("Repository directory {} does not exist", dir.display());
            return Ok(0);
        }

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(|err| Error::Io {
                path: dir.to_path_buf(),
                source: err.into(),
            })?;
            if entry.file_type().is_file() && RdfFormat::is_rdf_file(entry.path()) {
                files.push(entry.into_path());
            }
        }

        let mut total = 0;
        for file in &files {
            total += self.load(kind, file)?;
        }
        Ok(total)
    }

    /// Appends an already decoded repository to the group for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownKind`] if `kind` is not registered.
    pub fn load_repository(&self, kind: EntityKind, repository: Repository) -> Result<usize> {
        let group = self.group(kind)?;
        if repository.is_empty() {
            return Ok(0);
        }
        Ok(write(group).append(repository))
    }

    /// Resolves `resource_iri` into a record of the given kind.
    ///
    /// An IRI with no statements resolves to a default-filled record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownKind`] if `kind` is not registered and
    /// [`Error::Transform`] if a mapped value cannot be converted.
    pub fn resolve(&self, kind: EntityKind, resource_iri: &str) -> Result<Resource> {
        Ok(match kind {
            EntityKind::FeatureOfInterest => Resource::FeatureOfInterest(self.get(resource_iri)?),
            EntityKind::Property => Resource::Property(self.get(resource_iri)?),
            EntityKind::System => Resource::System(self.get(resource_iri)?),
            EntityKind::Procedure => Resource::Procedure(self.get(resource_iri)?),
        })
    }

    /// Resolves `resource_iri` into a record of type `R`.
    ///
    /// # Errors
    ///
    /// Same as [`resolve`](Self::resolve).
    pub fn get<R: Record>(&self, resource_iri: &str) -> Result<R> {
        let group = read(self.group(R::KIND)?);
        let statements = group.find_by_subject(resource_iri);
        tracing::debug!(
            "Resolving {} as {} from {} statements",
            resource_iri,
            R::KIND,
            statements.len()
        );
        build(resource_iri, statements, self.units.as_ref())
    }

    /// Resolves a feature of interest.
    ///
    /// # Errors
    ///
    /// Same as [`resolve`](Self::resolve).
    pub fn feature_of_interest(&self, resource_iri: &str) -> Result<FeatureOfInterest> {
        self.get(resource_iri)
    }

    /// Resolves a property.
    ///
    /// # Errors
    ///
    /// Same as [`resolve`](Self::resolve).
    pub fn property(&self, resource_iri: &str) -> Result<Property> {
        self.get(resource_iri)
    }

    /// Resolves a system.
    ///
    /// # Errors
    ///
    /// Same as [`resolve`](Self::resolve).
    pub fn system(&self, resource_iri: &str) -> Result<System> {
        self.get(resource_iri)
    }

    /// Resolves a procedure.
    ///
    /// # Errors
    ///
    /// Same as [`resolve`](Self::resolve).
    pub fn procedure(&self, resource_iri: &str) -> Result<Procedure> {
        self.get(resource_iri)
    }

    /// Returns copies of the statements about `subject` in the group for
    /// `kind`, in resolution order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownKind`] if `kind` is not registered.
    pub fn find_by_subject(&self, kind: EntityKind, subject: &str) -> Result<Vec<Statement>> {
        let group = read(self.group(kind)?);
        Ok(group.find_by_subject(subject).into_iter().cloned().collect())
    }

    /// Returns the total number of statements loaded for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownKind`] if `kind` is not registered.
    pub fn triple_count(&self, kind: EntityKind) -> Result<usize> {
        Ok(read(self.group(kind)?).triple_count())
    }

    /// Returns the number of repositories loaded for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownKind`] if `kind` is not registered.
    pub fn repository_count(&self, kind: EntityKind) -> Result<usize> {
        Ok(read(self.group(kind)?).repository_count())
    }

    /// Returns the number of distinct subjects loaded for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownKind`] if `kind` is not registered.
    pub fn subject_count(&self, kind: EntityKind) -> Result<usize> {
        Ok(read(self.group(kind)?).subject_count())
    }

    /// Returns the sources loaded for `kind`, in load order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownKind`] if `kind` is not registered.
    pub fn sources(&self, kind: EntityKind) -> Result<Vec<PathBuf>> {
        Ok(read(self.group(kind)?)
            .sources()
            .map(Path::to_path_buf)
            .collect())
    }

    fn group(&self, kind: EntityKind) -> Result<&RwLock<RepositoryGroup>> {
        self.groups
            .get(&kind)
            .ok_or_else(|| Error::UnknownKind(kind.to_string()))
    }
}

impl Default for ResolutionService {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ResolutionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionService")
            .field("kinds", &self.groups.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

// Groups are append-only and appends happen in a single call, so a panic
// while holding a lock cannot leave a half-registered repository behind.
fn read(lock: &RwLock<RepositoryGroup>) -> RwLockReadGuard<'_, RepositoryGroup> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write(lock: &RwLock<RepositoryGroup>) -> RwLockWriteGuard<'_, RepositoryGroup> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// Builder for [`ResolutionService`].
pub struct ResolutionServiceBuilder {
    kinds: Vec<EntityKind>,
    decoder: Arc<dyn Decoder>,
    units: Arc<dyn UnitResolver>,
}

impl Default for ResolutionServiceBuilder {
    fn default() -> Self {
        Self {
            kinds: EntityKind::ALL.to_vec(),
            decoder: Arc::new(RdfDecoder),
            units: Arc::new(UnitCatalog::builtin()),
        }
    }
}

impl ResolutionServiceBuilder {
    /// Registers only the given kinds. Lookups for any other kind fail
    /// with [`Error::UnknownKind`].
    #[must_use]
    pub fn kinds(mut self, kinds: impl IntoIterator<Item = EntityKind>) -> Self {
        self.kinds = kinds.into_iter().collect();
        self
    }

    /// Replaces the repository decoder.
    #[must_use]
    pub fn decoder(mut self, decoder: impl Decoder + 'static) -> Self {
        self.decoder = Arc::new(decoder);
        self
    }

    /// Replaces the unit resolver.
    #[must_use]
    pub fn unit_resolver(mut self, units: impl UnitResolver + 'static) -> Self {
        self.units = Arc::new(units);
        self
    }

    /// Builds the service with empty repository groups.
    #[must_use]
    pub fn build(self) -> ResolutionService {
        let groups = self
            .kinds
            .into_iter()
            .map(|kind| (kind, RwLock::new(RepositoryGroup::new(kind))))
            .collect();
        ResolutionService {
            groups,
            decoder: self.decoder,
            units: self.units,
        }
    }
}
