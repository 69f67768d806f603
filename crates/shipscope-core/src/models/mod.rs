//! Domain models.

pub mod vessel;

pub use vessel::{valid_records, RawVesselRecord, Snapshot, VesselRecord};
