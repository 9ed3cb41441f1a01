//! Single-operation use-cases, grouped per entity.
//!
//! Each use-case wraps one repository call plus the small amount of logic
//! around it (id allocation, time stamping). Storage errors propagate
//! unchanged unless a use-case documents otherwise.

pub mod actor;
pub mod film;
pub mod film_actor;
