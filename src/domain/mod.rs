// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// This module contains domain-specific entities and business logic.
// Each aggregate has its own subdirectory with:
// - Entities and value objects
// - Events and the handlers reacting to them
// - Errors
// - Factory and service
//
// Services that raise events receive the dispatcher by reference; there is
// no process-wide dispatcher.
//
// ============================================================================

pub mod customer;
pub mod product;
pub mod checkout;
