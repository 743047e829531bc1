//! Adapters implementing the ports in [`crate::port`].

pub mod store;
pub mod submitter;
