/// Rows are passed through as JSON objects. The gateway only reads the
/// fields named by predicates and sort keys.
pub type Record = serde_json::Value;

/// All identifying keys are opaque text (e.g. `evt-123`, or a UUID).
pub type RecordKey = String;
