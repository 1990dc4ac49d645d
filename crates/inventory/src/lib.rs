//! Inventory domain module.
//!
//! In-memory product store, append-only movement ledger, and the service that
//! keeps the two consistent. Deterministic domain logic only: no terminal IO.

pub mod ledger;
pub mod product;
pub mod service;
pub mod store;

pub use ledger::{Movement, MovementKind, MovementLedger};
pub use product::{MAX_UNIT_PRICE, NewProduct, Product};
pub use service::InventoryService;
pub use store::{InventoryStore, ProductLookup};
