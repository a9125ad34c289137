//! Renders typed queries into parameterised PostgreSQL.
//!
//! Table and column names come from the static descriptors in
//! `gatherly_core::resource`; every value is a positional `$n` bind. Rows are
//! returned as JSON via `row_to_json` so the gateway can pass them through
//! untouched.

use gatherly_core::query::{Patch, Query};
use gatherly_core::resource::{Field, FieldKind, Resource};

/// Alias used for the target table in every statement.
const ALIAS: &str = "t";

/// `SELECT` for [`Query`]. Binds: predicate values in order.
pub fn select(query: &Query) -> String {
    let mut sql = format!(
        "SELECT row_to_json({ALIAS}) FROM {} {ALIAS}",
        query.resource.table()
    );
    sql.push_str(&where_clause(query, 1));
    if let Some(order) = query.order_by {
        sql.push_str(&format!(" ORDER BY {ALIAS}.{} ASC", order.name));
    }
    if query.single {
        sql.push_str(" LIMIT 1");
    }
    sql
}

/// `INSERT ... RETURNING`. Binds: patch values in order.
pub fn insert(resource: Resource, patch: &Patch) -> String {
    let (columns, values): (Vec<_>, Vec<_>) = patch
        .iter()
        .enumerate()
        .map(|(i, (field, _))| (field.name, placeholder(field, i + 1)))
        .unzip();

    format!(
        "INSERT INTO {} AS {ALIAS} ({}) VALUES ({}) RETURNING row_to_json({ALIAS})",
        resource.table(),
        columns.join(", "),
        values.join(", "),
    )
}

/// `UPDATE ... RETURNING`. Binds: patch values, then predicate values.
pub fn update(query: &Query, patch: &Patch) -> String {
    let assignments: Vec<_> = patch
        .iter()
        .enumerate()
        .map(|(i, (field, _))| format!("{} = {}", field.name, placeholder(field, i + 1)))
        .collect();

    format!(
        "UPDATE {} AS {ALIAS} SET {}{} RETURNING row_to_json({ALIAS})",
        query.resource.table(),
        assignments.join(", "),
        where_clause(query, patch.len() + 1),
    )
}

/// `DELETE`. Binds: predicate values in order.
pub fn delete(query: &Query) -> String {
    format!(
        "DELETE FROM {} AS {ALIAS}{}",
        query.resource.table(),
        where_clause(query, 1)
    )
}

fn where_clause(query: &Query, first_bind: usize) -> String {
    if query.predicates.is_empty() {
        return String::new();
    }
    let conditions: Vec<_> = query
        .predicates
        .iter()
        .enumerate()
        .map(|(i, p)| {
            format!(
                "{ALIAS}.{} {} {}",
                p.field.name,
                p.op.as_sql(),
                placeholder(p.field, first_bind + i)
            )
        })
        .collect();
    format!(" WHERE {}", conditions.join(" AND "))
}

/// Values are bound as text; non-text columns get an explicit cast.
fn placeholder(field: Field, n: usize) -> String {
    match field.kind {
        FieldKind::Text => format!("${n}"),
        FieldKind::Timestamp => format!("${n}::timestamp"),
    }
}
