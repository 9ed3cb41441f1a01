//! Request bodies, validated before they reach a use-case.

pub mod actor_dto;
