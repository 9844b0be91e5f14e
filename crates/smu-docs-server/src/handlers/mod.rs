//! HTTP request handlers.

pub(crate) mod health;
pub(crate) mod layout;
pub(crate) mod pages;
