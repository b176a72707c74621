//! Deserialization of geometry from interchange storage formats.

pub mod obj;
