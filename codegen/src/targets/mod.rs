//! Export targets and the registry that dispatches to them.
//!
//! A target turns a normalized [`Ir`] plus a component name into text. The
//! set of targets is open: callers may register their own [`Emitter`]
//! implementations next to the built-in ones.
//!
//! | Id | Emitter |
//! |----|---------|
//! | `react` | [`react::ReactEmitter`] |
//! | `ir` | [`ir::IrEmitter`] |
//! | `vue`, `svelte`, `web-components` | [`stub::StubEmitter`] |

pub mod ir;
pub mod react;
pub mod stub;


use crate::error::CodegenError;
use crate::ir::Ir;

/// One export target.
pub trait Emitter: Send + Sync {
    /// Stable lowercase id used on the command line.
    fn id(&self) -> &'static str;

    /// Human-readable label, e.g. `React` or `IR (JSON)`.
    fn label(&self) -> &'static str;

    /// Render `ir` as a component called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CodegenError`] when the target cannot produce output.
    fn emit(&self, ir: &Ir, name: &str) -> Result<String, CodegenError>;
}

/// Ordered set of emitters, looked up by id or label.
pub struct Registry {
    emitters: Vec<Box<dyn Emitter>>,
}

impl Registry {
    /// A registry with no targets.
    #[must_use]
    pub fn empty() -> Self {
        Self { emitters: Vec::new() }
    }

    /// Add `emitter`, replacing any existing emitter with the same id.
    pub fn register(&mut self, emitter: Box<dyn Emitter>) {
        self.emitters.retain(|e| e.id() != emitter.id());
        self.emitters.push(emitter);
    }

    /// Find a target by id or label, ignoring ASCII case.
    #[must_use]
    pub fn get(&self, target: &str) -> Option<&dyn Emitter> {
        let target = target.trim();
        self.emitters
            .iter()
            .find(|e| e.id().eq_ignore_ascii_case(target) || e.label().eq_ignore_ascii_case(target))
            .map(Box::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Emitter> {
        self.emitters.iter().map(Box::as_ref)
    }

    /// Dispatch to the emitter registered for `target`.
    ///
    /// # Errors
    ///
    /// Returns [`CodegenError::UnknownTarget`] if no emitter matches, or the
    /// emitter's own error.
    pub fn emit(&self, target: &str, ir: &Ir, name: &str) -> Result<String, CodegenError> {
        let Some(emitter) = self.get(target) else {
            tracing::warn!(export_target = target, "unknown export target");
            return Err(CodegenError::UnknownTarget(target.to_string()));
        };
        tracing::debug!(export_target = emitter.id(), elements = ir.elements.len(), states = ir.states.len(), "emitting");
        emitter.emit(ir, name)
    }
}

impl Default for Registry {
    /// The built-in targets.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(react::ReactEmitter));
        registry.register(Box::new(stub::StubEmitter::new("vue", "Vue")));
        registry.register(Box::new(stub::StubEmitter::new("svelte", "Svelte")));
        registry.register(Box::new(stub::StubEmitter::new("web-components", "Web Components")));
        registry.register(Box::new(ir::IrEmitter));
        registry
    }
}
