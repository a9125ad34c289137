//! Typed query predicates and field patches.
//!
//! A [`Query`] names a resource, a conjunction of equality predicates, an
//! optional ascending sort field and whether a single row is expected. Store
//! implementations translate it into their own access language; handlers
//! never build SQL.

use crate::resource::{Field, Resource};

/// Comparison operator of a [`Predicate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Eq,
}

impl Op {
    pub const fn as_sql(self) -> &'static str {
        match self {
            Op::Eq => "=",
        }
    }

    /// Evaluate the operator against a stored text value.
    pub fn matches(self, stored: &str, expected: &str) -> bool {
        match self {
            Op::Eq => stored == expected,
        }
    }
}

/// A single `field <op> value` restriction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub field: Field,
    pub op: Op,
    pub value: String,
}

/// A read, update or delete target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub resource: Resource,
    pub predicates: Vec<Predicate>,
    /// Ascending sort field, if any.
    pub order_by: Option<Field>,
    /// At most one row is expected.
    pub single: bool,
}

impl Query {
    /// An unrestricted query over `resource`.
    pub fn on(resource: Resource) -> Self {
        Self {
            resource,
            predicates: Vec::new(),
            order_by: None,
            single: false,
        }
    }

    /// Single-row lookup by the resource's identifying key.
    pub fn by_key(resource: Resource, key: impl Into<String>) -> Self {
        Self::on(resource).eq(resource.key(), key).single()
    }

    /// Add an equality predicate.
    pub fn eq(mut self, field: Field, value: impl Into<String>) -> Self {
        self.predicates.push(Predicate {
            field,
            op: Op::Eq,
            value: value.into(),
        });
        self
    }

    pub fn order_asc(mut self, field: Field) -> Self {
        self.order_by = Some(field);
        self
    }

    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }
}

/// Ordered field assignments used for inserts and partial updates.
///
/// Absent optional values are skipped, so an update touches only the
/// columns the caller actually supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patch {
    fields: Vec<(Field, String)>,
}

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `value` to `field`, replacing an earlier assignment.
    pub fn set(mut self, field: Field, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.fields.iter_mut().find(|(f, _)| f.name == field.name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((field, value)),
        }
        self
    }

    pub fn set_opt(self, field: Field, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.set(field, v),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(f, _)| f.name == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.fields.iter().map(|(f, v)| (*f, v.as_str()))
    }
}
