//! Consuming side of the API: a typed REST client, a reducer-based state
//! store mirroring server-confirmed state, and the one adapter allowed to
//! persist the auth token. The server stays the source of truth.

pub mod api;
pub mod storage;
pub mod store;
