// ============================================================================
// Menu Domain - The Catalog
// ============================================================================
//
// This module contains all menu-specific code:
// - Value objects (MenuItem, the default seed set)
// - Catalog (paginated and searchable reads over the backing store)
//
// Menu items are read-mostly: created at seed time or by provisioning,
// immutable afterwards in normal operation.
//
// ============================================================================

pub mod catalog;
pub mod value_objects;

// Re-export for convenience
pub use catalog::*;
pub use value_objects::*;
