//! Statement planning shared by the async and blocking lifecycle paths.
//!
//! Nothing here touches a connection: each function turns an entity (or a
//! key, or a predicate) into the SQL text and operation to run. `Session`
//! executes the plan and interprets the response.

use crate::{
    bail,
    schema::{self, Policy},
    stmt::{Key, Predicate},
    Entity, Generator, Result,
};

use rowmap_core::driver::Operation;

/// An `INSERT` ready to run.
#[derive(Debug)]
pub(crate) struct Insert {
    pub(crate) sql: String,

    /// The identity field to populate from the statement's scalar result
    pub(crate) identity: Option<usize>,
}

impl Insert {
    pub(crate) fn operation(&self) -> Operation {
        if self.identity.is_some() {
            Operation::Scalar(self.sql.clone())
        } else {
            Operation::NonQuery(self.sql.clone())
        }
    }
}

/// `SELECT <fields under policy> FROM table[ WHERE filter]`.
fn select<E: Entity>(generator: &Generator, policy: Policy, filter: &str) -> Result<String> {
    let columns = schema::columns::<E>(policy);

    if columns.is_empty() {
        bail!("entity `{}` has no fields to select", E::TABLE);
    }

    let mut sql = generator.select(E::TABLE, &columns)?;

    if !filter.is_empty() {
        sql.push(' ');
        sql.push_str(filter);
    }

    Ok(sql)
}

pub(crate) fn get<E: Entity>(generator: &Generator, key: &Key) -> Result<String> {
    let filter = generator.where_clause(key, true)?;
    select::<E>(generator, Policy::SELECT, &filter)
}

pub(crate) fn query<E: Entity>(
    generator: &Generator,
    policy: Policy,
    predicate: &Predicate,
) -> Result<String> {
    let filter = if predicate.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", predicate.render()?)
    };

    select::<E>(generator, policy, &filter)
}

pub(crate) fn count<E: Entity>(generator: &Generator, predicate: &Predicate) -> Result<String> {
    let filter = if predicate.is_empty() {
        String::new()
    } else {
        predicate.render()?
    };

    generator.count(E::TABLE, &filter)
}

/// Returns `None` when the entity has no insertable fields.
pub(crate) fn insert<E: Entity>(generator: &Generator, entity: &E) -> Result<Option<Insert>> {
    let fields = schema::resolve_fields::<E>(Policy::INSERT);

    if fields.is_empty() {
        return Ok(None);
    }

    let mut sql = generator.insert(E::TABLE, &schema::pairs(entity, fields))?;

    let identity = E::fields().iter().position(|field| field.is_identity());

    if identity.is_some() {
        sql.push_str(generator.flavor().identity_fetch());
    }

    Ok(Some(Insert { sql, identity }))
}

/// Returns `None` when no field is left to assign once key fields are
/// removed.
pub(crate) fn update<E: Entity>(generator: &Generator, entity: &E) -> Result<Option<String>> {
    let key = entity.key()?;
    let descriptors = E::fields();

    let fields: Vec<usize> = schema::resolve_fields::<E>(Policy::UPDATE)
        .iter()
        .copied()
        .filter(|&index| !key.contains_column(descriptors[index].column_name()))
        .collect();

    if fields.is_empty() {
        return Ok(None);
    }

    let mut sql = generator.update(E::TABLE, &schema::pairs(entity, &fields), 1)?;
    sql.push(' ');
    sql.push_str(&generator.where_clause(&key, true)?);

    Ok(Some(sql))
}

pub(crate) fn delete<E: Entity>(generator: &Generator, entity: &E) -> Result<String> {
    let key = entity.key()?;
    generator.delete(E::TABLE, &key, 1)
}

/// Returns `None` when the entity declares no duplication groups.
pub(crate) fn is_duplicated<E: Entity>(
    generator: &Generator,
    entity: &E,
) -> Result<Option<String>> {
    let groups = schema::duplication_groups::<E>();

    if groups.is_empty() {
        return Ok(None);
    }

    let clauses = groups
        .iter()
        .map(|group| {
            let clause = generator.where_clause(&schema::pairs(entity, group), false)?;
            Ok(format!("({clause})"))
        })
        .collect::<Result<Vec<_>>>()?;

    generator.count(E::TABLE, &clauses.join(" AND ")).map(Some)
}
