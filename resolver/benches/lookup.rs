//! Subject lookup: index versus full scan.
//!
//! Builds a property group of synthetic repositories and measures the cost
//! of collecting the statements for one subject both ways, plus a complete
//! record resolution through the service.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sosa_resolver::{
    EntityKind, Repository, RepositoryGroup, ResolutionService, Statement, Term,
};
use sosa_vocab::namespaces::{qudt, rdf, rdfs, sosa, unit};

const SUBJECTS_PER_REPO: usize = 2_000;

fn repository(repo: usize) -> Repository {
    let mut statements = Vec::with_capacity(SUBJECTS_PER_REPO * 3);
    for i in 0..SUBJECTS_PER_REPO {
        let subject = format!("http://example.org/property/{i}");
        statements.push(Statement::new(&subject, rdf::TYPE, Term::iri(sosa::OBSERVABLE_PROPERTY)));
        statements.push(Statement::new(&subject, rdfs::LABEL, Term::literal(format!("p{i} r{repo}"))));
        statements.push(Statement::new(&subject, qudt::UNIT, Term::iri(unit::PPM)));
    }
    Repository::new(format!("repo-{repo}.ttl"), statements)
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_by_subject");
    for repos in [1usize, 4, 16] {
        let mut rg = RepositoryGroup::new(EntityKind::Property);
        for r in 0..repos {
            rg.append(repository(r));
        }
        let probe = format!("http://example.org/property/{}", SUBJECTS_PER_REPO / 2);

        group.bench_with_input(BenchmarkId::new("index", repos), &probe, |b, probe| {
            b.iter(|| black_box(rg.find_by_subject(black_box(probe))).len())
        });
        group.bench_with_input(BenchmarkId::new("scan", repos), &probe, |b, probe| {
            b.iter(|| black_box(rg.scan_by_subject(black_box(probe))).len())
        });
    }
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let service = ResolutionService::new();
    for r in 0..4 {
        service
            .load_repository(EntityKind::Property, repository(r))
            .unwrap();
    }
    let probe = format!("http://example.org/property/{}", SUBJECTS_PER_REPO - 1);

    c.bench_function("resolve_property", |b| {
        b.iter(|| service.property(black_box(&probe)).map(|p| p.unit))
    });
}

criterion_group!(benches, bench_lookup, bench_resolve);
criterion_main!(benches);
