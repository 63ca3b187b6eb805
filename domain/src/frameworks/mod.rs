//! Deterministic business-analysis scoring frameworks.
//!
//! Each framework is a pure function over a typed input bucket producing a
//! typed report plus a formatted text rendering. No I/O and no hidden
//! state, so the same input always yields the same report. Missing fields default to
//! zero/empty at deserialization time, so the functions are total.

pub mod financial;
pub mod market;
pub mod three_c;
