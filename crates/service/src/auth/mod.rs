//! Authentication and admin-account management: credential verification,
//! session issue/validation/invalidation, admin registration.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod sessions;
