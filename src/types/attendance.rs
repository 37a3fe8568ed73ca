use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw scan payload. `identifier` stays a JSON value because scanners and
/// integrations have been seen sending bare numbers where a string was
/// expected; the sanitizer coerces. `station` keys the debounce slot, one
/// per physical input surface, defaulting to manual entry.
#[derive(Deserialize, Debug)]
pub struct RScan {
    pub identifier: Value,
    pub station: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct ScanRes {
    pub record: entity::attendance::Model,
    pub member: entity::member::Model,
}

#[derive(Serialize, Debug)]
pub struct AttendanceListRes {
    pub present: u64,
    pub registered: u64,
    pub records: Vec<entity::attendance::Model>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RemovedRes {
    pub removed: u64,
}
