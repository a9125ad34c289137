//! Resource descriptors: table names, identifying keys, display ordering and
//! delete policies for every entity the gateway serves.

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

/// Storage type of a column, used by the SQL renderer to cast bound text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Timestamp,
}

/// A named column of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
        }
    }

    pub const fn timestamp(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Timestamp,
        }
    }
}

/// Columns of the `events` table.
pub mod event {
    use super::Field;

    pub const EVENT_ID: Field = Field::text("event_id");
    pub const PLANNER_ID: Field = Field::text("planner_id");
    pub const NAME: Field = Field::text("name");
    pub const DESCRIPTION: Field = Field::text("description");
    pub const START_TIME: Field = Field::timestamp("start_time");
    pub const END_TIME: Field = Field::timestamp("end_time");
    pub const VENUE: Field = Field::text("venue");
    pub const THEME: Field = Field::text("theme");
}

/// Columns of the `guests` table.
pub mod guest {
    use super::Field;

    pub const GUEST_ID: Field = Field::text("guest_id");
    pub const EVENT_ID: Field = Field::text("event_id");
    pub const NAME: Field = Field::text("name");
    pub const EMAIL: Field = Field::text("email");
    pub const RSVP_STATUS: Field = Field::text("rsvp_status");
    pub const CELL_NUMBER: Field = Field::text("cell_number");
    pub const DIETARY_INFO: Field = Field::text("dietary_info");
}

/// Columns of the `planners` table.
pub mod planner {
    use super::Field;

    pub const PLANNER_ID: Field = Field::text("planner_id");
    pub const NAME: Field = Field::text("name");
}

/// Columns of the `vendors` table.
pub mod vendor {
    use super::Field;

    pub const VENDOR_ID: Field = Field::text("vendor_id");
    pub const BUSINESS_NAME: Field = Field::text("business_name");
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// How a resource's delete endpoint behaves.
///
/// Events and guests historically diverged; both behaviours are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletePolicy {
    /// Probe for the row first (404 when absent), then delete and answer
    /// 200 with a confirmation body.
    ProbeThenConfirm,
    /// Delete without probing and answer 204 with no body.
    Direct,
}

/// Every entity kind the gateway serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Event,
    Guest,
    Planner,
    Vendor,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::Event,
        Resource::Guest,
        Resource::Planner,
        Resource::Vendor,
    ];

    /// Backing table name.
    pub const fn table(self) -> &'static str {
        match self {
            Resource::Event => "events",
            Resource::Guest => "guests",
            Resource::Planner => "planners",
            Resource::Vendor => "vendors",
        }
    }

    /// Display name used in `"<Entity> not found"` messages.
    pub const fn entity(self) -> &'static str {
        match self {
            Resource::Event => "Event",
            Resource::Guest => "Guest",
            Resource::Planner => "Planner",
            Resource::Vendor => "Vendor",
        }
    }

    /// The identifying key column.
    pub const fn key(self) -> Field {
        match self {
            Resource::Event => event::EVENT_ID,
            Resource::Guest => guest::GUEST_ID,
            Resource::Planner => planner::PLANNER_ID,
            Resource::Vendor => vendor::VENDOR_ID,
        }
    }

    /// Field that list endpoints sort by (ascending).
    pub const fn display_order(self) -> Field {
        match self {
            Resource::Event => event::START_TIME,
            Resource::Guest => guest::NAME,
            Resource::Planner => planner::NAME,
            Resource::Vendor => vendor::BUSINESS_NAME,
        }
    }

    pub const fn delete_policy(self) -> DeletePolicy {
        match self {
            Resource::Event => DeletePolicy::ProbeThenConfirm,
            _ => DeletePolicy::Direct,
        }
    }
}
