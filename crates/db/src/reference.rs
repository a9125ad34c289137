use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures::lock::Mutex;
use gatherly_core::query::{Patch, Query};
use gatherly_core::resource::Resource;
use gatherly_core::types::Record;
use serde_json::{Map, Value};

use crate::store::{RecordStore, StoreError};

type Row = Map<String, Value>;

/// In-memory reference implementation of [`RecordStore`].
///
/// Rows live in insertion order per resource. Predicates compare the text
/// form of stored values, which is also how PostgreSQL sees our binds.
#[derive(Clone, Default)]
pub struct ReferenceDb {
    tables: Arc<Mutex<HashMap<Resource, Vec<Row>>>>,
}

impl ReferenceDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a row as-is. Non-object values are ignored.
    pub async fn seed(&self, resource: Resource, record: Record) {
        if let Value::Object(row) = record {
            self.tables
                .lock()
                .await
                .entry(resource)
                .or_default()
                .push(row);
        }
    }

    /// Number of rows currently held for `resource`.
    pub async fn count(&self, resource: Resource) -> usize {
        self.tables
            .lock()
            .await
            .get(&resource)
            .map_or(0, Vec::len)
    }
}

/// Text form of a stored value; `None` for null or absent columns.
fn text_of(row: &Row, column: &str) -> Option<String> {
    match row.get(column)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn matches(row: &Row, query: &Query) -> bool {
    query.predicates.iter().all(|p| {
        text_of(row, p.field.name).is_some_and(|stored| p.op.matches(&stored, &p.value))
    })
}

fn select(rows: &[Row], query: &Query) -> Vec<Record> {
    let mut found: Vec<&Row> = rows.iter().filter(|row| matches(row, query)).collect();

    if let Some(order) = query.order_by {
        // Nulls sort last, as in PostgreSQL's default ascending order.
        found.sort_by(|a, b| match (text_of(a, order.name), text_of(b, order.name)) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
    }
    if query.single {
        found.truncate(1);
    }
    found.into_iter().cloned().map(Value::Object).collect()
}

fn apply(row: &mut Row, patch: &Patch) {
    for (field, value) in patch.iter() {
        row.insert(field.name.to_string(), Value::String(value.to_string()));
    }
}

#[async_trait]
impl RecordStore for ReferenceDb {
    async fn find_by_key(&self, query: &Query) -> Result<Option<Record>, StoreError> {
        let tables = self.tables.lock().await;
        let rows = tables.get(&query.resource).map_or(&[][..], Vec::as_slice);
        Ok(select(rows, &query.clone().single()).into_iter().next())
    }

    async fn list_by_filter(&self, query: &Query) -> Result<Vec<Record>, StoreError> {
        let tables = self.tables.lock().await;
        let rows = tables.get(&query.resource).map_or(&[][..], Vec::as_slice);
        Ok(select(rows, query))
    }

    async fn insert(&self, resource: Resource, patch: &Patch) -> Result<Vec<Record>, StoreError> {
        let key = resource.key().name;
        let mut tables = self.tables.lock().await;
        let rows = tables.entry(resource).or_default();

        if let Some(id) = patch.get(key) {
            if rows.iter().any(|row| text_of(row, key).as_deref() == Some(id)) {
                return Err(StoreError::Rejected(format!(
                    "duplicate key value violates primary key of {}",
                    resource.table()
                )));
            }
        }

        let mut row = Row::new();
        apply(&mut row, patch);
        rows.push(row.clone());
        Ok(vec![Value::Object(row)])
    }

    async fn update(&self, query: &Query, patch: &Patch) -> Result<Vec<Record>, StoreError> {
        let mut tables = self.tables.lock().await;
        let Some(rows) = tables.get_mut(&query.resource) else {
            return Ok(Vec::new());
        };

        let mut updated = Vec::new();
        for row in rows.iter_mut().filter(|row| matches(row, query)) {
            apply(row, patch);
            updated.push(Value::Object(row.clone()));
        }
        Ok(updated)
    }

    async fn delete_by_key(&self, query: &Query) -> Result<u64, StoreError> {
        let mut tables = self.tables.lock().await;
        let Some(rows) = tables.get_mut(&query.resource) else {
            return Ok(0);
        };

        let before = rows.len();
        rows.retain(|row| !matches(row, query));
        Ok((before - rows.len()) as u64)
    }

    async fn health(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use gatherly_core::resource::{event, guest, vendor};
    use serde_json::json;

    use super::*;

    async fn seeded() -> ReferenceDb {
        let db = ReferenceDb::new();
        db.seed(
            Resource::Vendor,
            json!({"vendor_id": "v-2", "business_name": "Zest Catering"}),
        )
        .await;
        db.seed(
            Resource::Vendor,
            json!({"vendor_id": "v-1", "business_name": "Aurora Florals"}),
        )
        .await;
        db.seed(
            Resource::Guest,
            json!({"guest_id": "g-1", "event_id": "evt-1", "name": "Ada"}),
        )
        .await;
        db.seed(
            Resource::Guest,
            json!({"guest_id": "g-2", "event_id": "evt-2", "name": "Grace"}),
        )
        .await;
        db
    }

    #[tokio::test]
    async fn list_sorts_by_display_field() {
        let db = seeded().await;
        let rows = db
            .list_by_filter(&Query::on(Resource::Vendor).order_asc(vendor::BUSINESS_NAME))
            .await
            .unwrap();
        let names: Vec<_> = rows.iter().map(|r| r["business_name"].clone()).collect();
        assert_eq!(names, [json!("Aurora Florals"), json!("Zest Catering")]);
    }

    #[tokio::test]
    async fn find_by_key_returns_none_when_absent() {
        let db = seeded().await;
        let row = db
            .find_by_key(&Query::by_key(Resource::Vendor, "v-404"))
            .await
            .unwrap();
        assert!(row.is_none());
    }

    #[tokio::test]
    async fn update_only_touches_composite_match() {
        let db = seeded().await;
        let query = Query::on(Resource::Guest)
            .eq(guest::EVENT_ID, "evt-2")
            .eq(guest::GUEST_ID, "g-1");
        let patch = Patch::new().set(guest::RSVP_STATUS, "accepted");

        assert!(db.update(&query, &patch).await.unwrap().is_empty());

        let query = Query::on(Resource::Guest)
            .eq(guest::EVENT_ID, "evt-1")
            .eq(guest::GUEST_ID, "g-1");
        let rows = db.update(&query, &patch).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["rsvp_status"], "accepted");
        assert_eq!(rows[0]["name"], "Ada");
    }

    #[tokio::test]
    async fn delete_reports_removed_count() {
        let db = seeded().await;
        let query = Query::by_key(Resource::Guest, "g-2");
        assert_eq!(db.delete_by_key(&query).await.unwrap(), 1);
        assert_eq!(db.delete_by_key(&query).await.unwrap(), 0);
        assert_eq!(db.count(Resource::Guest).await, 1);
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_key() {
        let db = ReferenceDb::new();
        let patch = Patch::new()
            .set(event::EVENT_ID, "evt-1")
            .set(event::NAME, "Gala");
        let rows = db.insert(Resource::Event, &patch).await.unwrap();
        assert_eq!(rows, vec![json!({"event_id": "evt-1", "name": "Gala"})]);

        assert_matches!(
            db.insert(Resource::Event, &patch).await,
            Err(StoreError::Rejected(_))
        );
    }
}
