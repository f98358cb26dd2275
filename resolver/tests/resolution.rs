//! End-to-end resolution tests over the repository fixtures.

use std::path::PathBuf;

use sosa_resolver::repository::blank_node_key;
use sosa_resolver::{
    Config, Decoder, EntityKind, Error, FeatureOfInterest, Property, RdfDecoder, Record,
    ResolutionService, Resource, UnitCatalog,
};
use sosa_vocab::namespaces::{qudt, sosa, unit};

const NITRIC_OXIDE: &str = "http://aclima.io/schema/1.0/NitricOxide";
const RAW_AVERAGE: &str = "http://aclima.io/schema/1.0/RawAverage";
const SENSOR_42: &str = "http://aclima.io/schema/1.0/Sensor42";
const ONE_MINUTE: &str = "http://aclima.io/schema/1.0/OneMinuteAverage";

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn absent_source_is_a_no_op() {
    let service = ResolutionService::new();
    service
        .load(EntityKind::FeatureOfInterest, fixture("features.ttl"))
        .unwrap();
    let before = service.feature_of_interest(NITRIC_OXIDE).unwrap();

    let loaded = service
        .load(EntityKind::FeatureOfInterest, fixture("does-not-exist.ttl"))
        .unwrap();

    assert_eq!(loaded, 0);
    assert_eq!(service.repository_count(EntityKind::FeatureOfInterest).unwrap(), 1);
    assert_eq!(service.feature_of_interest(NITRIC_OXIDE).unwrap(), before);
}

#[test]
fn empty_source_registers_nothing() {
    let service = ResolutionService::new();
    let loaded = service
        .load(EntityKind::Procedure, fixture("empty.ttl"))
        .unwrap();
    assert_eq!(loaded, 0);
    assert_eq!(service.repository_count(EntityKind::Procedure).unwrap(), 0);
}

#[test]
fn malformed_source_leaves_group_unchanged() {
    let service = ResolutionService::new();
    service
        .load(EntityKind::FeatureOfInterest, fixture("features.ttl"))
        .unwrap();

    let err = service
        .load(EntityKind::FeatureOfInterest, fixture("malformed.ttl"))
        .unwrap_err();

    assert!(matches!(err, Error::Parse { .. }), "{err:?}");
    assert_eq!(service.repository_count(EntityKind::FeatureOfInterest).unwrap(), 1);
    assert_eq!(service.triple_count(EntityKind::FeatureOfInterest).unwrap(), 8);
}

#[test]
fn growth_is_monotonic() {
    let service = ResolutionService::new();
    let n = service
        .load(EntityKind::FeatureOfInterest, fixture("features.ttl"))
        .unwrap();
    let m = service
        .load(EntityKind::FeatureOfInterest, fixture("features_override.ttl"))
        .unwrap();

    assert_eq!((n, m), (8, 2));
    assert_eq!(service.triple_count(EntityKind::FeatureOfInterest).unwrap(), n + m);
    assert_eq!(
        service.feature_of_interest("http://aclima.io/schema/1.0/Ozone").unwrap().abbreviation,
        "O3"
    );
    assert_eq!(
        service
            .feature_of_interest("http://aclima.io/schema/1.0/CarbonMonoxide")
            .unwrap()
            .label,
        "Carbon monoxide"
    );
    assert_eq!(
        service.sources(EntityKind::FeatureOfInterest).unwrap(),
        vec![fixture("features.ttl"), fixture("features_override.ttl")]
    );
}

#[test]
fn directory_loads_in_sorted_order() {
    let service = ResolutionService::new();
    let loaded = service
        .load_dir(EntityKind::Procedure, fixture("procedures"))
        .unwrap();

    assert_eq!(loaded, 4);
    assert_eq!(service.repository_count(EntityKind::Procedure).unwrap(), 2);
    let procedure = service.procedure(ONE_MINUTE).unwrap();
    assert_eq!(procedure.label, "1-min average");
    assert_eq!(procedure.type_iri, sosa::PROCEDURE);
}

#[test]
fn absent_directory_is_a_no_op() {
    let service = ResolutionService::new();
    let loaded = service
        .load_dir(EntityKind::Procedure, fixture("no-such-dir"))
        .unwrap();
    assert_eq!(loaded, 0);
}

#[test]
fn directory_loading_ignores_extension_case() {
    let service = ResolutionService::new();
    let direct = ResolutionService::new();

    let via_dir = service
        .load_dir(EntityKind::System, fixture("uppercase"))
        .unwrap();
    let by_path = direct
        .load(EntityKind::System, fixture("uppercase").join("SENSORS.NT"))
        .unwrap();

    assert_eq!((via_dir, by_path), (1, 1));
    assert_eq!(
        service.system("http://aclima.io/schema/1.0/Sensor7").unwrap().label,
        "PM sensor"
    );
}

#[test]
fn anonymous_nodes_from_different_sources_stay_apart() {
    let service = ResolutionService::new();
    service
        .load(EntityKind::FeatureOfInterest, fixture("anonymous_a.ttl"))
        .unwrap();
    service
        .load(EntityKind::FeatureOfInterest, fixture("anonymous_b.ttl"))
        .unwrap();

    assert_eq!(service.subject_count(EntityKind::FeatureOfInterest).unwrap(), 2);
    let sources = [(0, "anonymous_a.ttl", "from A"), (1, "anonymous_b.ttl", "from B")];
    for (position, name, label) in sources {
        let decoded = RdfDecoder.decode(&fixture(name)).unwrap().unwrap();
        let local = decoded[0].subject.trim_start_matches("_:");
        let key = blank_node_key(position, local);

        let feature = service.feature_of_interest(&key).unwrap();
        assert_eq!(feature.label, label);
        assert_eq!(
            service
                .find_by_subject(EntityKind::FeatureOfInterest, &key)
                .unwrap()
                .len(),
            1
        );
    }
}

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn feature_of_interest_is_fully_populated() {
    let service = ResolutionService::new();
    service
        .load(EntityKind::FeatureOfInterest, fixture("features.ttl"))
        .unwrap();

    let feature = service.feature_of_interest(NITRIC_OXIDE).unwrap();

    assert_eq!(
        feature,
        FeatureOfInterest {
            resource_iri: NITRIC_OXIDE.into(),
            type_iri: sosa::FEATURE_OF_INTEREST.into(),
            label: "Nitric oxide".into(),
            description: "Nitrogen oxide or nitrogen monoxide".into(),
            abbreviation: "NO".into(),
        }
    );
    assert_eq!(feature.to_string(), "NO");
}

#[test]
fn later_repository_wins_per_field() {
    let service = ResolutionService::new();
    service
        .load(EntityKind::FeatureOfInterest, fixture("features.ttl"))
        .unwrap();
    service
        .load(EntityKind::FeatureOfInterest, fixture("features_override.ttl"))
        .unwrap();

    let feature = service.feature_of_interest(NITRIC_OXIDE).unwrap();

    assert_eq!(feature.label, "Nitrogen monoxide");
    // Fields the override does not mention keep the earlier values.
    assert_eq!(feature.abbreviation, "NO");
    assert_eq!(feature.description, "Nitrogen oxide or nitrogen monoxide");
}

#[test]
fn unknown_subject_yields_default_record() {
    let service = ResolutionService::new();
    service
        .load(EntityKind::Property, fixture("properties.ttl"))
        .unwrap();

    let iri = "http://aclima.io/schema/1.0/NeverDefined";
    assert_eq!(service.property(iri).unwrap(), Property::new(iri));
}

#[test]
fn property_unit_is_resolved() {
    let service = ResolutionService::new();
    service
        .load(EntityKind::Property, fixture("properties.ttl"))
        .unwrap();

    let prop = service.property(RAW_AVERAGE).unwrap();
    assert_eq!(prop.type_iri, sosa::OBSERVABLE_PROPERTY);
    assert_eq!(prop.label, "Raw average");
    assert_eq!(prop.unit.resource_iri, unit::PPB);
    assert_eq!(prop.to_string(), "Raw average");

    let count = service.property("http://aclima.io/schema/1.0/Count").unwrap();
    assert!(count.unit.is_unitless());
}

#[test]
fn unresolvable_unit_is_a_transform_error() {
    let service = ResolutionService::new();
    service
        .load(EntityKind::Property, fixture("bad_unit.ttl"))
        .unwrap();

    let err = service
        .property("http://aclima.io/schema/1.0/Distance")
        .unwrap_err();

    match err {
        Error::Transform { predicate, value, .. } => {
            assert_eq!(predicate, qudt::UNIT);
            assert_eq!(value, "http://qudt.org/vocab/unit/FURLONG");
        }
        other => panic!("expected transform error, got {other:?}"),
    }
}

#[test]
fn extended_unit_catalog_resolves_custom_units() {
    let mut catalog = UnitCatalog::builtin();
    let added = catalog
        .load_qudt(&RdfDecoder, &fixture("units.ttl"))
        .unwrap();
    assert_eq!(added, 2);

    let service = ResolutionService::builder().unit_resolver(catalog).build();
    service
        .load(EntityKind::Property, fixture("bad_unit.ttl"))
        .unwrap();

    let prop = service
        .property("http://aclima.io/schema/1.0/Distance")
        .unwrap();
    assert_eq!(prop.unit.label, "Furlong");
    assert_eq!(prop.unit.abbreviation, "fur");
}

#[test]
fn system_from_ntriples() {
    let service = ResolutionService::new();
    service
        .load(EntityKind::System, fixture("systems.nt"))
        .unwrap();

    let system = service.system(SENSOR_42).unwrap();
    assert_eq!(system.type_iri, sosa::SENSOR);
    assert_eq!(system.manufacturer, "Alphasense");
    assert_eq!(system.model, "NO-B4");
    assert_eq!(system.serial_number, "162740123");
    assert_eq!(system.version, "2.1");
    assert_eq!(system.to_string(), "NO sensor (NO-B4)");
}

#[test]
fn resolution_is_idempotent() {
    let service = ResolutionService::new();
    service
        .load(EntityKind::FeatureOfInterest, fixture("features.ttl"))
        .unwrap();

    let first = service.resolve(EntityKind::FeatureOfInterest, NITRIC_OXIDE).unwrap();
    let second = service.resolve(EntityKind::FeatureOfInterest, NITRIC_OXIDE).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.kind(), EntityKind::FeatureOfInterest);
    assert_eq!(first.label(), "Nitric oxide");
}

#[test]
fn dynamic_resolution_matches_typed() {
    let service = ResolutionService::new();
    service
        .load(EntityKind::Property, fixture("properties.ttl"))
        .unwrap();

    let dynamic = service.resolve(EntityKind::Property, RAW_AVERAGE).unwrap();
    let typed = service.property(RAW_AVERAGE).unwrap();
    assert_eq!(dynamic, Resource::Property(typed));
}

#[test]
fn groups_do_not_share_subjects() {
    let service = ResolutionService::new();
    service
        .load(EntityKind::FeatureOfInterest, fixture("features.ttl"))
        .unwrap();

    let prop = service.property(NITRIC_OXIDE).unwrap();
    assert_eq!(prop, Property::new(NITRIC_OXIDE));
}

#[test]
fn statements_come_back_in_load_order() {
    let service = ResolutionService::new();
    service
        .load(EntityKind::FeatureOfInterest, fixture("features.ttl"))
        .unwrap();
    service
        .load(EntityKind::FeatureOfInterest, fixture("features_override.ttl"))
        .unwrap();

    let statements = service
        .find_by_subject(EntityKind::FeatureOfInterest, NITRIC_OXIDE)
        .unwrap();
    assert_eq!(statements.len(), 6);
    assert_eq!(statements[0].object.as_str(), sosa::FEATURE_OF_INTEREST);
    assert_eq!(statements[5].object.as_str(), "Nitrogen monoxide");
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn service_from_config_file() {
    let config = Config::from_path(fixture("service.toml")).unwrap();
    let service = ResolutionService::from_config(&config).unwrap();

    assert_eq!(service.feature_of_interest(NITRIC_OXIDE).unwrap().label, "Nitrogen monoxide");
    assert_eq!(service.property(RAW_AVERAGE).unwrap().unit.resource_iri, unit::PPB);
    // units.ttl from the config extends the catalog.
    assert_eq!(
        service
            .property("http://aclima.io/schema/1.0/Distance")
            .unwrap()
            .unit
            .abbreviation,
        "fur"
    );
    assert_eq!(service.system(SENSOR_42).unwrap().model, "NO-B4");
    assert_eq!(service.procedure(ONE_MINUTE).unwrap().label, "1-min average");
    assert_eq!(service.triple_count(EntityKind::Procedure).unwrap(), 4);
}

#[test]
fn concurrent_file_loads_each_register_once() {
    const THREADS: usize = 6;
    let service = std::sync::Arc::new(ResolutionService::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let service = std::sync::Arc::clone(&service);
            std::thread::spawn(move || {
                service
                    .load(EntityKind::FeatureOfInterest, fixture("features.ttl"))
                    .unwrap()
            })
        })
        .collect();
    let loaded: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

    assert_eq!(loaded, 8 * THREADS);
    assert_eq!(service.repository_count(EntityKind::FeatureOfInterest).unwrap(), THREADS);
    assert_eq!(service.triple_count(EntityKind::FeatureOfInterest).unwrap(), loaded);
    assert_eq!(
        service
            .find_by_subject(EntityKind::FeatureOfInterest, NITRIC_OXIDE)
            .unwrap()
            .len(),
        5 * THREADS
    );
    assert_eq!(service.feature_of_interest(NITRIC_OXIDE).unwrap().abbreviation, "NO");
}

#[test]
fn resolution_is_shareable_across_threads() {
    let service = std::sync::Arc::new(ResolutionService::new());
    service
        .load(EntityKind::FeatureOfInterest, fixture("features.ttl"))
        .unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let service = std::sync::Arc::clone(&service);
            std::thread::spawn(move || service.feature_of_interest(NITRIC_OXIDE).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().abbreviation, "NO");
    }
}
