//! Mapping engine - resolves destination fields against sources and copies values.
//!
//! For each destination field, in declaration order:
//! 1. skip it if it is excluded
//! 2. take its effective name (alias, else declared name)
//! 3. find the first source field whose *declared* name matches, ignoring case
//! 4. skip unless the two type tags are equal and the source field is not excluded
//! 5. copy the source value into the destination field
//!
//! Source aliases are never consulted. A destination field that finds no
//! qualifying source keeps its previous value.

use duckmap_core::{FieldDef, TypeDescriptor};
use duckmap_registry::{Describe, Mappable};
use tracing::{debug, trace};

use crate::error::{MapError, MapResult};

/// Why a destination field was left untouched by a merge pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Skip {
    Excluded,
    NoMatch,
    TypeMismatch,
    SourceExcluded,
}

fn resolve_field(field: &FieldDef, source: &TypeDescriptor) -> Result<usize, Skip> {
    if field.is_excluded() {
        return Err(Skip::Excluded);
    }

    // Only the first same-named source field is considered, even if its type differs.
    let index = source.position(field.effective_name()).ok_or(Skip::NoMatch)?;
    let candidate = &source.fields()[index];

    if candidate.type_tag != field.type_tag {
        return Err(Skip::TypeMismatch);
    }
    if candidate.is_excluded() {
        return Err(Skip::SourceExcluded);
    }
    Ok(index)
}

/// Plan a single-source merge pass.
///
/// Returns `(destination index, source index)` for every destination field that
/// takes its value from `source`, in destination declaration order.
pub fn resolve(destination: &TypeDescriptor, source: &TypeDescriptor) -> Vec<(usize, usize)> {
    destination
        .fields()
        .iter()
        .enumerate()
        .filter_map(|(i, field)| match resolve_field(field, source) {
            Ok(j) => Some((i, j)),
            Err(reason) => {
                trace!(
                    destination = destination.type_name(),
                    source = source.type_name(),
                    field = %field.name,
                    ?reason,
                    "field skipped"
                );
                None
            }
        })
        .collect()
}

/// Merge one source into `destination`.
pub fn merge(destination: &mut dyn Mappable, source: &dyn Mappable) {
    let plan = resolve(destination.descriptor(), source.descriptor());

    let mut copied = 0usize;
    for (dest_index, source_index) in plan {
        let Some(value) = source.read_field(source_index) else {
            continue;
        };
        match destination.write_field(dest_index, value) {
            Ok(()) => copied += 1,
            Err(value) => trace!(
                destination = destination.descriptor().type_name(),
                index = dest_index,
                value_type = value.type_name(),
                "destination rejected value"
            ),
        }
    }

    debug!(
        destination = destination.descriptor().type_name(),
        source = source.descriptor().type_name(),
        copied,
        "merge pass complete"
    );
}

/// Map every source into `destination`, in order.
///
/// Each source is checked immediately before its pass. An absent source stops
/// the call with `InvalidArgument`; passes already made are kept.
pub fn map_into<'s, I>(destination: Option<&mut dyn Mappable>, sources: I) -> MapResult<()>
where
    I: IntoIterator<Item = Option<&'s dyn Mappable>>,
{
    let destination = destination.ok_or_else(MapError::missing_destination)?;

    for (position, source) in sources.into_iter().enumerate() {
        let source = source.ok_or_else(|| MapError::missing_source(position))?;
        merge(destination, source);
    }
    Ok(())
}

/// Map a slice of sources into `destination`.
pub fn map(destination: &mut dyn Mappable, sources: &[&dyn Mappable]) -> MapResult<()> {
    map_into(Some(destination), sources.iter().map(|s| Some(*s)))
}

/// Construct a fresh `T` and map every source into it.
///
/// Fails with `UnsupportedType` when `T` registered no parameterless constructor.
pub fn map_new<'s, T, I>(sources: I) -> MapResult<T>
where
    T: Describe,
    I: IntoIterator<Item = Option<&'s dyn Mappable>>,
{
    let schema = T::schema();
    let mut instance = schema
        .construct()
        .ok_or_else(|| MapError::unsupported_type(schema.type_name()))?;

    map_into(Some(&mut instance as &mut dyn Mappable), sources)?;
    Ok(instance)
}

/// Map any number of sources into a destination.
///
/// ```ignore
/// map!(person, db_model, birthday_value)?;
/// ```
///
/// The destination must be a place expression of a `Mappable` type; sources are
/// borrowed. A destination held as `&mut T` is passed dereferenced:
///
/// ```ignore
/// fn refresh(person: &mut Person, row: &PersonRow) -> MapResult<()> {
///     map!(*person, *row)
/// }
/// ```
#[macro_export]
macro_rules! map {
    ($destination:expr $(, $source:expr)+ $(,)?) => {
        $crate::map_into(
            ::core::option::Option::Some(&mut $destination as &mut dyn $crate::Mappable),
            [$(::core::option::Option::Some(&$source as &dyn $crate::Mappable)),+],
        )
    };
}

/// Construct a `Describe` type from any number of sources.
///
/// ```ignore
/// let person = map_new!(Person, db_model, birthday_value)?;
/// ```
#[macro_export]
macro_rules! map_new {
    ($ty:ty $(, $source:expr)+ $(,)?) => {
        $crate::map_new::<$ty, _>(
            [$(::core::option::Option::Some(&$source as &dyn $crate::Mappable)),+],
        )
    };
}
