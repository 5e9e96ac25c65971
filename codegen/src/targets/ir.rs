//! The canonical IR target: the normalized subset serialized verbatim.

use super::Emitter;
use crate::error::CodegenError;
use crate::ir::Ir;

pub struct IrEmitter;

impl Emitter for IrEmitter {
    fn id(&self) -> &'static str {
        "ir"
    }

    fn label(&self) -> &'static str {
        "IR (JSON)"
    }

    fn emit(&self, ir: &Ir, _name: &str) -> Result<String, CodegenError> {
        ir.to_json()
    }
}
