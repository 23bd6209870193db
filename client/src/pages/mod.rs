//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state and delegates rendering details to
//! `components`. The four record sections share their signal plumbing
//! through `crud`.

pub mod animals;
pub mod clients;
pub(crate) mod crud;
pub mod dashboard;
pub mod documents;
pub mod horseshoes;
pub mod login;
