//! Setup failures for the rendering session.
//!
//! Every variant is terminal for the current attempt: nothing here is
//! retried, and the entry point halts initialization rather than render in a
//! degraded mode.

use std::fmt;

use thiserror::Error;

/// Pipeline stage a shader belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        })
    }
}

#[derive(Debug, Error)]
pub enum SetupError {
    /// No canvas in the document, or the browser refused a WebGL2 context.
    #[error("no drawing surface available or WebGL2 unsupported")]
    ContextUnavailable,

    #[error("could not allocate a {0} shader object")]
    ShaderAllocationFailed(ShaderStage),

    /// The driver rejected the shader source; `log` carries its diagnostics.
    #[error("{stage} shader failed to compile: {log}")]
    CompileFailed { stage: ShaderStage, log: String },

    #[error("could not allocate a program object")]
    ProgramAllocationFailed,

    #[error("program failed to link: {log}")]
    LinkFailed { log: String },

    /// A required attribute or uniform was missing after a successful link
    /// (typically optimised out, or misnamed in the shader source).
    #[error("could not resolve location of `{name}`")]
    LocationResolutionFailed { name: &'static str },
}

#[cfg(target_arch = "wasm32")]
impl From<SetupError> for wasm_bindgen::JsValue {
    fn from(err: SetupError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
