//! Record state shared by the section pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages hold a `SectionState<T>` per record type in an `RwSignal`. The
//! generic CRUD contract lives in `registry` and `section`; the entity
//! modules only describe fields, messages and seed data.

pub mod animals;
pub mod clients;
pub mod documents;
pub mod form;
pub mod horseshoes;
pub mod registry;
pub mod section;
