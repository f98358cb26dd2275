//! Record construction from the statements about one subject.

use crate::error::{Error, Result};
use crate::mapping::{rule_for, Assign};
use crate::record::Record;
use crate::statement::Statement;
use crate::unit::UnitResolver;

/// Builds a record of type `R` for `subject` from `statements`.
///
/// Statements are folded in the order given; each one whose predicate has a
/// rule in `R`'s field table overwrites that field, so the last matching
/// statement wins. Unmapped predicates are ignored. Fields never touched keep
/// their defaults, and an empty input yields a record with only
/// `resource_iri` set.
///
/// # Errors
///
/// Returns [`Error::Transform`] if a unit-mapped value cannot be resolved by
/// `units`. No record is returned in that case.
pub fn build<'a, R, I>(subject: &str, statements: I, units: &dyn UnitResolver) -> Result<R>
where
    R: Record,
    I: IntoIterator<Item = &'a Statement>,
{
    let mut record = R::new(subject);
    for statement in statements {
        let Some(rule) = rule_for(R::field_rules(), &statement.predicate) else {
            continue;
        };
        let value = statement.object.as_str();
        match rule.assign {
            Assign::Text(set) => set(&mut record, value.to_string()),
            Assign::Unit(set) => {
                let unit = units.resolve_unit(value).map_err(|source| Error::Transform {
                    predicate: statement.predicate.clone(),
                    value: value.to_string(),
                    source,
                })?;
                set(&mut record, unit);
            }
        }
    }
    Ok(record)
}
