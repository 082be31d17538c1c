//! File-based storage for the active session.
//!
//! The session lives at `<data>/session.json` (data directory `.huddle/` by
//! default) and is replaced atomically on every write.
//!
//! ## Components
//!
//! - [`SessionStore`]: create, load, save and end the active session

mod session_store;

pub use session_store::SessionStore;
