//! Mirrored value objects exchanged between the GUI backend and frontend.

pub mod dialogue;
pub mod preset;

pub use dialogue::DialogueFormatInfo;
pub use preset::GamePreset;

use crate::binding::Binding;
use crate::mirror::ShapeMirror;

/// Every mirrored kind, in the order the frontend binding file declares them.
pub fn bindings() -> &'static [Binding] {
    const ALL: &[Binding] = &[DialogueFormatInfo::BINDING, GamePreset::BINDING];
    ALL
}

/// Look up a mirrored kind by name
pub fn binding_for(kind: &str) -> Option<&'static Binding> {
    bindings().iter().find(|b| b.kind == kind)
}
