//! Domain modules organized as vertical slices.
//!
//! Sub-modules are built from:
//! - `mod.rs` — Domain types and enumerations
//! - `wire.rs` — Response envelopes, request bodies, and superset decode records
//! - `convert.rs` — Resolution of superset records into concrete variants
//! - `query.rs` — Query-string builders for list endpoints
//!
//! The polymorphic families (`order`, `transaction`) also carry `variants.rs`
//! with one struct per discriminator, and `order` has `request.rs` for Order
//! creation bodies.

pub mod account;
pub mod order;
pub mod position;
pub mod trade;
pub mod transaction;
