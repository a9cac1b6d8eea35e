//! Form-layer logic for the editor dialogs.

pub mod job;
