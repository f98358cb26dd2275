//! `sosa:` — Sensor, Observation, Sample, and Actuator.
//!
//! Reference: <https://www.w3.org/TR/vocab-ssn/>

use crate::model::Namespace;

/// The `sosa:` namespace.
pub const NAMESPACE: Namespace = Namespace {
    prefix: "sosa",
    iri: "http://www.w3.org/ns/sosa/",
    label: "SOSA",
};

/// `sosa:ObservableProperty`: An observable quality (property,
/// characteristic) of a FeatureOfInterest.
pub const OBSERVABLE_PROPERTY: &str = "http://www.w3.org/ns/sosa/ObservableProperty";

/// `sosa:Observation`: Act of carrying out an (observation) Procedure to
/// estimate or calculate a value of a property of a FeatureOfInterest.
pub const OBSERVATION: &str = "http://www.w3.org/ns/sosa/Observation";

/// `sosa:ObservationCollection`: A collection of one or more observations.
pub const OBSERVATION_COLLECTION: &str = "http://www.w3.org/ns/sosa/ObservationCollection";

/// `sosa:Sensor`: Device, agent (including humans), or software (simulation)
/// involved in, or implementing, a Procedure.
pub const SENSOR: &str = "http://www.w3.org/ns/sosa/Sensor";

/// `sosa:observedProperty`: Relation linking an Observation to the property
/// that was observed.
pub const OBSERVED_PROPERTY: &str = "http://www.w3.org/ns/sosa/observedProperty";

/// `sosa:phenomenonTime`: The time that the Result of an Observation,
/// Actuation, or Sampling applies to the FeatureOfInterest.
pub const PHENOMENON_TIME: &str = "http://www.w3.org/ns/sosa/phenomenonTime";

/// `sosa:observes`: Relation between a Sensor and an ObservableProperty that
/// it is capable of sensing.
pub const OBSERVES: &str = "http://www.w3.org/ns/sosa/observes";

/// `sosa:isObservedBy`: Relation between an ObservableProperty and the Sensor
/// able to observe it.
pub const IS_OBSERVED_BY: &str = "http://www.w3.org/ns/sosa/isObservedBy";

/// `sosa:madeObservation`: Relation between a Sensor and an Observation made
/// by the Sensor.
pub const MADE_OBSERVATION: &str = "http://www.w3.org/ns/sosa/madeObservation";

/// `sosa:madeBySensor`: Relation between an Observation and the Sensor which
/// made the Observation.
pub const MADE_BY_SENSOR: &str = "http://www.w3.org/ns/sosa/madeBySensor";

/// `sosa:hasMember`: Link to a member within a collection of observations.
pub const HAS_MEMBER: &str = "http://www.w3.org/ns/sosa/hasMember";

/// `sosa:ActuatableProperty`: An actuatable quality (property,
/// characteristic) of a FeatureOfInterest.
pub const ACTUATABLE_PROPERTY: &str = "http://www.w3.org/ns/sosa/ActuatableProperty";

/// `sosa:Actuation`: An Actuation carries out an (Actuation) Procedure to
/// change the state of the world using an Actuator.
pub const ACTUATION: &str = "http://www.w3.org/ns/sosa/Actuation";

/// `sosa:Actuator`: A device that is used by, or implements, an (Actuation)
/// Procedure that changes the state of the world.
pub const ACTUATOR: &str = "http://www.w3.org/ns/sosa/Actuator";

/// `sosa:actsOnProperty`: Relation between an Actuation and the property of a
/// FeatureOfInterest it is acting upon.
pub const ACTS_ON_PROPERTY: &str = "http://www.w3.org/ns/sosa/actsOnProperty";

/// `sosa:isActedOnBy`: Relation between an ActuatableProperty of a
/// FeatureOfInterest and an Actuation changing its state.
pub const IS_ACTED_ON_BY: &str = "http://www.w3.org/ns/sosa/isActedOnBy";

/// `sosa:madeActuation`: Relation between an Actuator and the Actuation it
/// has made.
pub const MADE_ACTUATION: &str = "http://www.w3.org/ns/sosa/madeActuation";

/// `sosa:madeByActuator`: Relation linking an Actuation to the Actuator that
/// made that Actuation.
pub const MADE_BY_ACTUATOR: &str = "http://www.w3.org/ns/sosa/madeByActuator";

/// `sosa:Sample`: Feature which is intended to be representative of a
/// FeatureOfInterest on which Observations may be made.
pub const SAMPLE: &str = "http://www.w3.org/ns/sosa/Sample";

/// `sosa:Sampling`: An act of Sampling carries out a sampling Procedure to
/// create or transform one or more samples.
pub const SAMPLING: &str = "http://www.w3.org/ns/sosa/Sampling";

/// `sosa:Sampler`: A device that is used by, or implements, a Sampling
/// Procedure to create or transform one or more samples.
pub const SAMPLER: &str = "http://www.w3.org/ns/sosa/Sampler";

/// `sosa:hasSample`: Relation between a FeatureOfInterest and the Sample used
/// to represent it.
pub const HAS_SAMPLE: &str = "http://www.w3.org/ns/sosa/hasSample";

/// `sosa:isSampleOf`: Relation from a Sample to the FeatureOfInterest that it
/// is intended to be representative of.
pub const IS_SAMPLE_OF: &str = "http://www.w3.org/ns/sosa/isSampleOf";

/// `sosa:madeSampling`: Relation between a Sampler and the Sampling act it
/// performed.
pub const MADE_SAMPLING: &str = "http://www.w3.org/ns/sosa/madeSampling";

/// `sosa:madeBySampler`: Relation linking an act of Sampling to the Sampler
/// that made it.
pub const MADE_BY_SAMPLER: &str = "http://www.w3.org/ns/sosa/madeBySampler";

/// `sosa:hasOriginalSample`: Links a derived Sample to the original Sample
/// from which it was derived.
pub const HAS_ORIGINAL_SAMPLE: &str = "http://www.w3.org/ns/sosa/hasOriginalSample";

/// `sosa:hasSampledFeature`: Links a Sample to the FeatureOfInterest it
/// represents.
pub const HAS_SAMPLED_FEATURE: &str = "http://www.w3.org/ns/sosa/hasSampledFeature";

/// `sosa:FeatureOfInterest`: The thing whose property is being estimated or
/// calculated in the course of an Observation.
pub const FEATURE_OF_INTEREST: &str = "http://www.w3.org/ns/sosa/FeatureOfInterest";

/// `sosa:hasFeatureOfInterest`: A relation between an Observation and the
/// entity whose quality was observed.
pub const HAS_FEATURE_OF_INTEREST: &str = "http://www.w3.org/ns/sosa/hasFeatureOfInterest";

/// `sosa:isFeatureOfInterestOf`: A relation between a FeatureOfInterest and
/// an Observation about it.
pub const IS_FEATURE_OF_INTEREST_OF: &str = "http://www.w3.org/ns/sosa/isFeatureOfInterestOf";

/// `sosa:hasUltimateFeatureOfInterest`: Link to the ultimate
/// FeatureOfInterest of an Observation or Actuation.
pub const HAS_ULTIMATE_FEATURE_OF_INTEREST: &str = "http://www.w3.org/ns/sosa/hasUltimateFeatureOfInterest";

/// `sosa:Result`: The Result of an Observation, Actuation, or act of
/// Sampling.
pub const RESULT: &str = "http://www.w3.org/ns/sosa/Result";

/// `sosa:hasResult`: Relation linking an Observation, Actuation, or act of
/// Sampling and a Result.
pub const HAS_RESULT: &str = "http://www.w3.org/ns/sosa/hasResult";

/// `sosa:isResultOf`: Relation linking a Result to the Observation,
/// Actuation, or act of Sampling that created it.
pub const IS_RESULT_OF: &str = "http://www.w3.org/ns/sosa/isResultOf";

/// `sosa:hasSimpleResult`: The simple value of an Observation, Actuation, or
/// act of Sampling.
pub const HAS_SIMPLE_RESULT: &str = "http://www.w3.org/ns/sosa/hasSimpleResult";

/// `sosa:resultTime`: The result time is the instant of time when the
/// Observation, Actuation, or Sampling activity was completed.
pub const RESULT_TIME: &str = "http://www.w3.org/ns/sosa/resultTime";

/// `sosa:Procedure`: A workflow, protocol, plan, algorithm, or computational
/// method specifying how to make an Observation, create a Sample, or make a
/// change to the state of the world.
pub const PROCEDURE: &str = "http://www.w3.org/ns/sosa/Procedure";

/// `sosa:usedProcedure`: A relation to link to a re-usable Procedure used in
/// making an Observation, an Actuation, or a Sample.
pub const USED_PROCEDURE: &str = "http://www.w3.org/ns/sosa/usedProcedure";

/// `sosa:Platform`: A Platform is an entity that hosts other entities,
/// particularly Sensors, Actuators, Samplers, and other Platforms.
pub const PLATFORM: &str = "http://www.w3.org/ns/sosa/Platform";

/// `sosa:hosts`: Relation between a Platform and a Sensor, Actuator, Sampler,
/// or Platform hosted or mounted on it.
pub const HOSTS: &str = "http://www.w3.org/ns/sosa/hosts";

/// `sosa:isHostedBy`: Relation between a Sensor, Actuator, Sampler, or
/// Platform and the Platform that it is mounted on or hosted by.
pub const IS_HOSTED_BY: &str = "http://www.w3.org/ns/sosa/isHostedBy";
