//! Pure domain logic for the Copa Samurai 2025 tournament administration
//! system: participant/modality eligibility, team composition, the team
//! activation state machine, and derived statistics.
//!
//! This crate has zero internal deps and performs no I/O. The HTTP
//! transport, persistence, and rendering layers are external collaborators;
//! they hand records in, call the rule functions on every form edit, and
//! persist whatever comes back. Every operation here is synchronous and
//! side-effect-free, so each call is independent and safe to repeat.

pub mod category;
pub mod config;
pub mod dojo;
pub mod entity;
pub mod error;
pub mod modality;
pub mod participant;
pub mod roster;
pub mod sensei;
pub mod session;
pub mod stats;
pub mod team;
pub mod types;

pub use error::CoreError;
