//! Placeholder for targets without an emitter yet.

use super::Emitter;
use crate::error::CodegenError;
use crate::ir::Ir;

/// Registered target that always reports [`CodegenError::NotImplemented`].
pub struct StubEmitter {
    id: &'static str,
    label: &'static str,
}

impl StubEmitter {
    #[must_use]
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

impl Emitter for StubEmitter {
    fn id(&self) -> &'static str {
        self.id
    }

    fn label(&self) -> &'static str {
        self.label
    }

    fn emit(&self, _ir: &Ir, _name: &str) -> Result<String, CodegenError> {
        tracing::warn!(export_target = self.id, "export target not implemented");
        Err(CodegenError::NotImplemented(self.label))
    }
}
