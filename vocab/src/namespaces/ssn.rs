//! `ssn:` — the Semantic Sensor Network core vocabulary.
//!
//! Reference: <https://www.w3.org/TR/vocab-ssn/>

use crate::model::Namespace;

/// The `ssn:` namespace.
pub const NAMESPACE: Namespace = Namespace {
    prefix: "ssn",
    iri: "http://www.w3.org/ns/ssn/",
    label: "Semantic Sensor Network",
};

/// `ssn:Property`: A quality of an entity. An aspect of an entity that is
/// intrinsic to and cannot exist without the entity.
pub const PROPERTY: &str = "http://www.w3.org/ns/ssn/Property";

/// `ssn:Input`: Any information that is provided to a Procedure for its use.
pub const INPUT: &str = "http://www.w3.org/ns/ssn/Input";

/// `ssn:Output`: Any information that is reported from a Procedure.
pub const OUTPUT: &str = "http://www.w3.org/ns/ssn/Output";

/// `ssn:implements`: Relation between an entity that implements a Procedure
/// in some executable way and the Procedure.
pub const IMPLEMENTS: &str = "http://www.w3.org/ns/ssn/implements";

/// `ssn:isImplementedBy`: Relation between a Procedure and an entity that
/// implements it.
pub const IS_IMPLEMENTED_BY: &str = "http://www.w3.org/ns/ssn/isImplementedBy";

/// `ssn:hasInput`: Relation between a Procedure and an Input to it.
pub const HAS_INPUT: &str = "http://www.w3.org/ns/ssn/hasInput";

/// `ssn:hasOutput`: Relation between a Procedure and an Output of it.
pub const HAS_OUTPUT: &str = "http://www.w3.org/ns/ssn/hasOutput";

/// `ssn:System`: System is a unit of abstraction for pieces of infrastructure
/// that implement Procedures.
pub const SYSTEM: &str = "http://www.w3.org/ns/ssn/System";

/// `ssn:Deployment`: Describes the Deployment of one or more Systems for a
/// particular purpose.
pub const DEPLOYMENT: &str = "http://www.w3.org/ns/ssn/Deployment";

/// `ssn:hasSubSystem`: Relation between a System and its component parts.
pub const HAS_SUB_SYSTEM: &str = "http://www.w3.org/ns/ssn/hasSubSystem";

/// `ssn:deployedSystem`: Relation between a Deployment and a deployed System.
pub const DEPLOYED_SYSTEM: &str = "http://www.w3.org/ns/ssn/deployedSystem";

/// `ssn:hasDeployment`: Relation between a System and a Deployment.
pub const HAS_DEPLOYMENT: &str = "http://www.w3.org/ns/ssn/hasDeployment";

/// `ssn:deployedOnPlatform`: Relation between a Deployment and the Platform
/// on which the Systems are deployed.
pub const DEPLOYED_ON_PLATFORM: &str = "http://www.w3.org/ns/ssn/deployedOnPlatform";

/// `ssn:inDeployment`: Relation between a Platform and a Deployment.
pub const IN_DEPLOYMENT: &str = "http://www.w3.org/ns/ssn/inDeployment";
