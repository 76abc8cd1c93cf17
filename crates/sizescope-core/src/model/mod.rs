/// Data model for SizeScope usage records.
///
/// Re-exports the record type and supporting size helpers.
pub mod record;
pub mod size;

pub use record::{EntryKind, UsageRecord};
