//! `schema:` — schema.org properties used to describe resources and devices.
//!
//! Reference: <https://schema.org/>

use crate::model::Namespace;

/// The `schema:` namespace.
pub const NAMESPACE: Namespace = Namespace {
    prefix: "schema",
    iri: "http://schema.org/",
    label: "Schema.org",
};

/// `schema:description`: a description of the item.
pub const DESCRIPTION: &str = "http://schema.org/description";

/// `schema:manufacturer`: the manufacturer of the product.
pub const MANUFACTURER: &str = "http://schema.org/manufacturer";

/// `schema:model`: the model of the product.
pub const MODEL: &str = "http://schema.org/model";

/// `schema:serialNumber`: the serial number or any alphanumeric identifier
/// of a particular product.
pub const SERIAL_NUMBER: &str = "http://schema.org/serialNumber";

/// `schema:provider`: the service provider, operator, or goods producer.
pub const PROVIDER: &str = "http://schema.org/provider";
