//! Shop CRM - customer relationship management backend for retail shops.
//!
//! Layered onion architecture: `domain` holds the entities and invariants,
//! `ports` the trait contracts, `application` the use-case handlers, and
//! `adapters` the PostgreSQL, token, and HTTP implementations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
