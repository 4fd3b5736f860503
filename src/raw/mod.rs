//! Raw storage building blocks.
//!
//! This layer concentrates every unsafe slot operation in one module so the
//! holder's lifecycle code can be audited against a single, small surface.

pub(crate) mod slot;
