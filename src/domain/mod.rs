// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// This module contains domain-specific logic, one subdirectory per area:
// - `menu`: the Catalog of orderable items (seeding, pagination, search)
// - `order`: the Ledger of placed orders (validation, status lifecycle)
//
// This layer is completely separate from the persistence backends; it talks
// to storage only through the DocumentStore trait.
//
// ============================================================================

pub mod menu;
pub mod order;
