//! Shader compilation and program linking.
//!
//! Both operations are synchronous and all-or-nothing: a failed compile or
//! link surfaces the driver's info log through the logging channel, releases
//! the half-built object, and returns an error. The only way to obtain a
//! [`LinkedProgram`] is through a link that also resolved every location the
//! demo needs, so holding one is proof the program is usable; after a
//! failure callers rebuild from scratch.

use log::error;
use web_sys::{WebGl2RenderingContext as GL, WebGlProgram, WebGlShader, WebGlUniformLocation};

use super::context::GlContext;
use crate::error::{SetupError, ShaderStage};

fn stage_enum(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => GL::VERTEX_SHADER,
        ShaderStage::Fragment => GL::FRAGMENT_SHADER,
    }
}

/// Compiles `source` for the given stage.
///
/// The source text is passed through verbatim. On failure the shader object
/// is deleted before returning, never handed back half-compiled.
pub fn compile(
    ctx: &GlContext,
    stage: ShaderStage,
    source: &str,
) -> Result<WebGlShader, SetupError> {
    let shader = ctx
        .create_shader(stage_enum(stage))
        .ok_or(SetupError::ShaderAllocationFailed(stage))?;

    ctx.shader_source(&shader, source);
    ctx.compile_shader(&shader);

    if ctx
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let log = ctx.get_shader_info_log(&shader).unwrap_or_default();
        error!("failed to compile {stage} shader: {log}");
        ctx.delete_shader(Some(&shader));
        Err(SetupError::CompileFailed { stage, log })
    }
}

/// A successfully linked program with every required location resolved.
pub struct LinkedProgram {
    program: WebGlProgram,
    pub position_attrib: u32,
    pub resolution: WebGlUniformLocation,
    pub color: WebGlUniformLocation,
}

impl LinkedProgram {
    pub fn raw(&self) -> &WebGlProgram {
        &self.program
    }
}

/// Links `shaders` into a program and resolves the demo's locations.
///
/// Shaders are attached in slice order. The host API does not care about
/// that order, but keeping it deterministic keeps failures reproducible.
pub fn link(ctx: &GlContext, shaders: &[WebGlShader]) -> Result<LinkedProgram, SetupError> {
    let program = ctx
        .create_program()
        .ok_or(SetupError::ProgramAllocationFailed)?;

    for shader in shaders {
        ctx.attach_shader(&program, shader);
    }
    ctx.link_program(&program);

    if !ctx
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        let log = ctx.get_program_info_log(&program).unwrap_or_default();
        error!("failed to link program: {log}");
        ctx.delete_program(Some(&program));
        return Err(SetupError::LinkFailed { log });
    }

    // Resolve everything up front; a program missing any of these is not
    // usable and must not escape.
    let position_attrib = ctx.get_attrib_location(&program, "a_position");
    if position_attrib < 0 {
        ctx.delete_program(Some(&program));
        return Err(SetupError::LocationResolutionFailed { name: "a_position" });
    }
    let resolution = match ctx.get_uniform_location(&program, "u_resolution") {
        Some(loc) => loc,
        None => {
            ctx.delete_program(Some(&program));
            return Err(SetupError::LocationResolutionFailed {
                name: "u_resolution",
            });
        }
    };
    let color = match ctx.get_uniform_location(&program, "u_color") {
        Some(loc) => loc,
        None => {
            ctx.delete_program(Some(&program));
            return Err(SetupError::LocationResolutionFailed { name: "u_color" });
        }
    };

    Ok(LinkedProgram {
        program,
        position_attrib: position_attrib as u32,
        resolution,
        color,
    })
}
