//! Small language demos that ship alongside the record tools.
//!
//! # Responsibility
//! - `library`: capability trait over composed structs.
//! - `animal`: trait-object dispatch over heterogeneous values.
//! - `generic`: generic helpers and a generic record type.
//! - `arith`: plain arithmetic helpers with table-driven tests.

pub mod animal;
pub mod arith;
pub mod generic;
pub mod library;
