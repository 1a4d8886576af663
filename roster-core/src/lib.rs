//! Roster draw core
//!
//! An ordered, duplicate-free roster of participant names and a uniform
//! random draw over it. Rendering, prompts and the reveal delay belong to
//! the caller; every operation here is synchronous and in-memory.

pub mod draw;
pub mod error;
pub mod roster;

pub use draw::{Selection, MIN_PARTICIPANTS};
pub use error::{AddError, ClearError, ExportError, PickError, RemoveError, Result, RosterError};
pub use roster::Roster;
