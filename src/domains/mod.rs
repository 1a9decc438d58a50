//! Domains module containing business logic organized by bounded contexts.
//!
//! The servers only expose tools; see [`tools`].

pub mod tools;
