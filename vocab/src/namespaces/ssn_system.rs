//! `ssn-system:` — system capabilities, operating and survival ranges.
//!
//! Reference: <https://www.w3.org/TR/vocab-ssn/#System-capabilities>

use crate::model::Namespace;

/// The `ssn-system:` namespace.
pub const NAMESPACE: Namespace = Namespace {
    prefix: "ssn-system",
    iri: "http://www.w3.org/ns/ssn/systems/",
    label: "SSN System",
};

/// `ssn-system:Condition`: Used to specify ranges for qualities that act as
/// conditions on a System's operation.
pub const CONDITION: &str = "http://www.w3.org/ns/ssn/systems/Condition";

/// `ssn-system:SystemCapability`: Describes normal measurement, actuation, or
/// sampling properties of a System under some specified Conditions.
pub const SYSTEM_CAPABILITY: &str = "http://www.w3.org/ns/ssn/systems/SystemCapability";

/// `ssn-system:SystemProperty`: An identifiable and observable characteristic
/// that represents the System's ability to operate its primary purpose.
pub const SYSTEM_PROPERTY: &str = "http://www.w3.org/ns/ssn/systems/SystemProperty";

/// `ssn-system:MeasurementRange`: The set of values that the Sensor can
/// return as the Result of an Observation under the defined Conditions.
pub const MEASUREMENT_RANGE: &str = "http://www.w3.org/ns/ssn/systems/MeasurementRange";

/// `ssn-system:ActuationRange`: The set of values that the Actuator can aim
/// to set as the Result of an Actuation under the defined Conditions.
pub const ACTUATION_RANGE: &str = "http://www.w3.org/ns/ssn/systems/ActuationRange";

/// `ssn-system:Accuracy`: The closeness of agreement between the Result of an
/// Observation or Actuation and the true value.
pub const ACCURACY: &str = "http://www.w3.org/ns/ssn/systems/Accuracy";

/// `ssn-system:DetectionLimit`: An observed value for which the probability
/// of falsely claiming the absence of a component is beta.
pub const DETECTION_LIMIT: &str = "http://www.w3.org/ns/ssn/systems/DetectionLimit";

/// `ssn-system:Drift`: A continuous or incremental change in the reported
/// values of Observations over time.
pub const DRIFT: &str = "http://www.w3.org/ns/ssn/systems/Drift";

/// `ssn-system:Frequency`: The smallest possible time between one
/// Observation, Actuation, or Sampling and the next.
pub const FREQUENCY: &str = "http://www.w3.org/ns/ssn/systems/Frequency";

/// `ssn-system:Latency`: The time between a command for an Observation or
/// Actuation and the Sensor providing a Result.
pub const LATENCY: &str = "http://www.w3.org/ns/ssn/systems/Latency";

/// `ssn-system:Precision`: The closeness of agreement between replicate
/// Observations on an unchanged ObservableProperty.
pub const PRECISION: &str = "http://www.w3.org/ns/ssn/systems/Precision";

/// `ssn-system:Resolution`: The smallest difference in the value of an
/// ObservableProperty being observed that would result in perceptably
/// different values.
pub const RESOLUTION: &str = "http://www.w3.org/ns/ssn/systems/Resolution";

/// `ssn-system:ResponseTime`: The time between a step change in the value of
/// an observed ObservableProperty and a Sensor reporting a given percentage
/// of that change.
pub const RESPONSE_TIME: &str = "http://www.w3.org/ns/ssn/systems/ResponseTime";

/// `ssn-system:Selectivity`: A Property of a System such that Observations
/// made by it are unaffected by other properties of the FeatureOfInterest.
pub const SELECTIVITY: &str = "http://www.w3.org/ns/ssn/systems/Selectivity";

/// `ssn-system:Sensitivity`: The quotient of the change in a Result of Sensor
/// and the corresponding change in a value.
pub const SENSITIVITY: &str = "http://www.w3.org/ns/ssn/systems/Sensitivity";

/// `ssn-system:OperatingRange`: Describes normal OperatingProperties of a
/// System under some specified Conditions.
pub const OPERATING_RANGE: &str = "http://www.w3.org/ns/ssn/systems/OperatingRange";

/// `ssn-system:OperatingProperty`: An identifiable characteristic that
/// represents how the System operates.
pub const OPERATING_PROPERTY: &str = "http://www.w3.org/ns/ssn/systems/OperatingProperty";

/// `ssn-system:MaintenanceSchedule`: Schedule of maintenance for a System in
/// the specified OperatingRange.
pub const MAINTENANCE_SCHEDULE: &str = "http://www.w3.org/ns/ssn/systems/MaintenanceSchedule";

/// `ssn-system:OperatingPowerRange`: Power range in which the System is
/// expected to operate.
pub const OPERATING_POWER_RANGE: &str = "http://www.w3.org/ns/ssn/systems/OperatingPowerRange";

/// `ssn-system:SurvivalRange`: Describes SurvivalProperties of a System under
/// some specified Conditions.
pub const SURVIVAL_RANGE: &str = "http://www.w3.org/ns/ssn/systems/SurvivalRange";

/// `ssn-system:SurvivalProperty`: An identifiable characteristic that
/// represents the extent of the System's useful life.
pub const SURVIVAL_PROPERTY: &str = "http://www.w3.org/ns/ssn/systems/SurvivalProperty";

/// `ssn-system:SystemLifetime`: Total useful life of a System.
pub const SYSTEM_LIFETIME: &str = "http://www.w3.org/ns/ssn/systems/SystemLifetime";

/// `ssn-system:BatteryLifetime`: Total useful life of a System's battery.
pub const BATTERY_LIFETIME: &str = "http://www.w3.org/ns/ssn/systems/BatteryLifetime";
