//! Domain layer containing the request-scoped data model.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Provider and fetcher abstractions live next to their implementations
//! in [`crate::infrastructure`].

pub mod entities;
