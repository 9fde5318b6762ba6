use crate::{
    stmt::{Key, Value},
    Entity, Result,
};

use rowmap_core::schema::Policy;

use std::{
    any::TypeId,
    collections::{BTreeMap, HashMap},
    sync::{OnceLock, PoisonError, RwLock},
};

type Cache = RwLock<HashMap<(TypeId, Policy), &'static [usize]>>;

/// Resolved field lists per entity type and policy. Entries are never
/// removed, so handing out `'static` slices is sound.
static CACHE: OnceLock<Cache> = OnceLock::new();

/// Returns the indices of `E`'s fields kept by `policy`, in declaration
/// order.
///
/// Only read-write fields are ever returned.
pub fn resolve_fields<E: Entity>(policy: Policy) -> &'static [usize] {
    let cache = CACHE.get_or_init(Default::default);
    let id = (TypeId::of::<E>(), policy);

    let cached = cache
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&id)
        .copied();

    if let Some(fields) = cached {
        return fields;
    }

    let mut cache = cache.write().unwrap_or_else(PoisonError::into_inner);

    *cache.entry(id).or_insert_with(|| {
        let fields: Vec<usize> = E::fields()
            .iter()
            .enumerate()
            .filter(|(_, field)| policy.admits(field))
            .map(|(index, _)| index)
            .collect();

        tracing::trace!(table = E::TABLE, ?policy, ?fields, "resolved fields");

        Box::leak(fields.into_boxed_slice())
    })
}

/// Column names of the fields kept by `policy`.
pub fn columns<E: Entity>(policy: Policy) -> Vec<&'static str> {
    let fields = E::fields();

    resolve_fields::<E>(policy)
        .iter()
        .map(|&index| fields[index].column_name())
        .collect()
}

/// Builds the primary key of `entity` from its declared key fields.
pub fn resolve_key<E: Entity>(entity: &E) -> Result<Key> {
    let fields = E::fields();

    Key::new(
        E::key_fields()
            .iter()
            .map(|&index| (fields[index].column_name(), entity.value(index))),
    )
}

/// Field indices of `E`'s duplication groups, ordered by group index.
pub fn duplication_groups<E: Entity>() -> Vec<Vec<usize>> {
    let fields = E::fields();
    let mut groups = BTreeMap::<u32, Vec<usize>>::new();

    for &index in resolve_fields::<E>(Policy::DUPLICATION) {
        let group = fields[index].duplication_group.unwrap_or_default();
        groups.entry(group).or_default().push(index);
    }

    groups.into_values().collect()
}

/// The current values of `fields`, paired with their column names.
pub(crate) fn pairs<E: Entity>(entity: &E, fields: &[usize]) -> Vec<(&'static str, Value)> {
    let descriptors = E::fields();

    fields
        .iter()
        .map(|&index| (descriptors[index].column_name(), entity.value(index)))
        .collect()
}
