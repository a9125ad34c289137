//! Exercises [`PgStore`] against a real database.
//!
//! Requires `DATABASE_URL` to point at a PostgreSQL server where sqlx may
//! create throwaway test databases. Run with `cargo test -- --ignored`.

use gatherly_core::query::{Patch, Query};
use gatherly_core::resource::{event, guest, planner, Resource};
use gatherly_db::{PgStore, RecordStore};
use sqlx::PgPool;

async fn seed_planner(store: &PgStore, id: &str) {
    store
        .insert(
            Resource::Planner,
            &Patch::new()
                .set(planner::PLANNER_ID, id)
                .set(planner::NAME, "John Doe"),
        )
        .await
        .unwrap();
}

fn new_event(id: &str, planner_id: &str, start_time: &str) -> Patch {
    Patch::new()
        .set(event::EVENT_ID, id)
        .set(event::PLANNER_ID, planner_id)
        .set(event::NAME, format!("Event {id}"))
        .set(event::START_TIME, start_time)
        .set(event::VENUE, "Town Hall")
        .set(event::THEME, "Garden")
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn events_list_in_start_time_order(pool: PgPool) {
    let store = PgStore::new(pool);
    seed_planner(&store, "p-1").await;

    store
        .insert(Resource::Event, &new_event("evt-late", "p-1", "2025-12-10T18:00:00"))
        .await
        .unwrap();
    store
        .insert(Resource::Event, &new_event("evt-early", "p-1", "2025-11-20T15:30:00"))
        .await
        .unwrap();

    let rows = store
        .list_by_filter(
            &Query::on(Resource::Event)
                .eq(event::PLANNER_ID, "p-1")
                .order_asc(event::START_TIME),
        )
        .await
        .unwrap();

    let ids: Vec<_> = rows.iter().map(|r| r["event_id"].clone()).collect();
    assert_eq!(ids, ["evt-early", "evt-late"]);
    assert_eq!(rows[0]["start_time"], "2025-11-20T15:30:00");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn guest_update_with_wrong_event_touches_nothing(pool: PgPool) {
    let store = PgStore::new(pool);
    seed_planner(&store, "p-1").await;
    store
        .insert(Resource::Event, &new_event("evt-1", "p-1", "2025-12-10T00:00:00"))
        .await
        .unwrap();
    store
        .insert(
            Resource::Guest,
            &Patch::new()
                .set(guest::GUEST_ID, "g-1")
                .set(guest::EVENT_ID, "evt-1")
                .set(guest::NAME, "Ada")
                .set(guest::EMAIL, "ada@example.com"),
        )
        .await
        .unwrap();

    let patch = Patch::new().set(guest::RSVP_STATUS, "accepted");
    let miss = Query::on(Resource::Guest)
        .eq(guest::EVENT_ID, "evt-2")
        .eq(guest::GUEST_ID, "g-1");
    assert!(store.update(&miss, &patch).await.unwrap().is_empty());

    let hit = Query::on(Resource::Guest)
        .eq(guest::EVENT_ID, "evt-1")
        .eq(guest::GUEST_ID, "g-1");
    let rows = store.update(&hit, &patch).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["rsvp_status"], "accepted");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn delete_by_key_is_not_repeatable(pool: PgPool) {
    let store = PgStore::new(pool);
    seed_planner(&store, "p-1").await;
    store
        .insert(Resource::Event, &new_event("evt-1", "p-1", "2025-12-10T00:00:00"))
        .await
        .unwrap();

    let query = Query::by_key(Resource::Event, "evt-1");
    assert_eq!(store.delete_by_key(&query).await.unwrap(), 1);
    assert_eq!(store.delete_by_key(&query).await.unwrap(), 0);
    assert!(store.find_by_key(&query).await.unwrap().is_none());
}
