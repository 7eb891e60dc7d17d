pub mod adapter;
pub mod application;
pub mod client;
pub mod domain;
pub mod infra;
