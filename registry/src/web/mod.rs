//! HTTP surface for the registry

pub mod handlers;
