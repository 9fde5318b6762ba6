use crate::{
    err,
    stmt::{ResultSet, Row, Value},
    Entity, Result,
};

/// Maps every row of `rows` onto a fresh `E`, in row order.
///
/// Only the fields listed in `fields` are read; the others keep their
/// default.
pub fn load_rows<E: Entity>(rows: &ResultSet, fields: &[usize]) -> Result<Vec<E>> {
    rows.rows().map(|row| load_row(row, fields)).collect()
}

/// Maps one row onto a fresh `E`.
///
/// A null cell leaves the field at its default. Enumerations are read back
/// through their symbolic name.
pub fn load_row<E: Entity>(row: Row<'_>, fields: &[usize]) -> Result<E> {
    let descriptors = E::fields();
    let mut entity = E::default();

    for &index in fields {
        let field = &descriptors[index];
        let cell = row.get(field.column_name())?;

        if cell.is_null() {
            continue;
        }

        let value = if field.ty.is_enum() {
            Value::String(cell.to_text().unwrap_or_default())
        } else {
            cell.clone()
        };

        entity.set_value(index, value).map_err(|e| {
            e.context(err!(
                "failed to load column `{}` of `{}`",
                field.column_name(),
                E::TABLE
            ))
        })?;
    }

    Ok(entity)
}
