//! LuckSystem GUI Shared - value shapes exchanged between the GUI backend and frontend
//!
//! This crate mirrors the value objects the backend hands to the frontend
//! (and receives back) as typed records:
//! - `DialogueFormatInfo` and `GamePreset`
//! - A permissive normalizing constructor for raw JSON values and JSON text
//! - A static registry of wire field names and types for binding checks
//!
//! # Design Principles
//!
//! 1. **Permissive** - Missing or wrong-typed fields become `None`, never errors
//! 2. **No business logic** - Pure data types and serialization
//! 3. **Wire names are the contract** - Field names match the frontend binding file

pub mod binding;
pub mod error;
pub mod mirror;
pub mod models;
pub mod source;

// =============================================================================
// Mirror
// =============================================================================
pub use error::MirrorError;
pub use mirror::{deserialize_permissive, FieldValue, ShapeMirror};
pub use source::Source;

// =============================================================================
// Mirrored Types
// =============================================================================
pub use models::{binding_for, bindings, DialogueFormatInfo, GamePreset};

// =============================================================================
// Binding Registry
// =============================================================================
pub use binding::{Binding, FieldSpec, FieldType};
