// ============================================================================
// Order Domain - The Ledger
// ============================================================================
//
// This module contains all order-specific code:
// - Value objects (Order, OrderLine, Customer, OrderStatus)
// - Status clock (age-based lifecycle stage computation)
// - Errors (OrderError enum)
// - Ledger (creation against catalog validation, lazy status refresh,
//   administrative overrides, bulk reset)
//
// Orders are created once, mutated only through status changes, and removed
// only by the bulk reset used for test isolation.
//
// ============================================================================

pub mod errors;
pub mod ledger;
pub mod status;
pub mod value_objects;

// Re-export for convenience
pub use errors::*;
pub use ledger::*;
pub use value_objects::*;
