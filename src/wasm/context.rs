//! Context acquisition and the call-tracing wrapper around WebGL2.

use log::{debug, info};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlUniformLocation, WebGlVertexArrayObject,
};

use crate::error::SetupError;

/// Handle to the session's WebGL2 state, bound to one canvas.
///
/// Every GL call the demo makes goes through a forwarding method here. With
/// `trace` set, each call logs its name and arguments at `debug` level before
/// forwarding; arguments and return values are never altered, so the traced
/// and untraced paths behave identically. This replaces the ambient
/// `window.WebGLDebugUtils` hook with an explicit value.
pub struct GlContext {
    gl: GL,
    canvas: HtmlCanvasElement,
    trace: bool,
}

/// Binds a WebGL2 context to the first `<canvas>` in the document and clears
/// it to opaque black, so a live-but-empty surface is visibly distinct from
/// no surface at all.
///
/// If the document holds more than one canvas, the first one found wins.
/// A missing canvas or an unsupported WebGL2 implementation is
/// [`SetupError::ContextUnavailable`]; the session cannot recover from it.
pub fn acquire(trace_calls: bool) -> Result<GlContext, SetupError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(SetupError::ContextUnavailable)?;
    let canvas = document
        .query_selector("canvas")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        .ok_or(SetupError::ContextUnavailable)?;
    let gl: GL = canvas
        .get_context("webgl2")
        .ok()
        .flatten()
        .and_then(|obj| obj.dyn_into::<GL>().ok())
        .ok_or(SetupError::ContextUnavailable)?;

    info!("WebGL2 context acquired");
    let ctx = GlContext {
        gl,
        canvas,
        trace: trace_calls,
    };

    // Sentinel clear: context is live, nothing drawn yet.
    ctx.clear_color(0.0, 0.0, 0.0, 1.0);
    ctx.clear(GL::COLOR_BUFFER_BIT);

    Ok(ctx)
}

impl GlContext {
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn trace_call(&self, call: &str, args: std::fmt::Arguments<'_>) {
        if self.trace {
            debug!(target: "gl", "{call}({args})");
        }
    }

    pub fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.trace_call("clearColor", format_args!("{r}, {g}, {b}, {a}"));
        self.gl.clear_color(r, g, b, a);
    }

    pub fn clear(&self, mask: u32) {
        self.trace_call("clear", format_args!("{mask:#x}"));
        self.gl.clear(mask);
    }

    pub fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.trace_call("viewport", format_args!("{x}, {y}, {width}, {height}"));
        self.gl.viewport(x, y, width, height);
    }

    pub fn create_shader(&self, stage: u32) -> Option<WebGlShader> {
        self.trace_call("createShader", format_args!("{stage:#x}"));
        self.gl.create_shader(stage)
    }

    pub fn shader_source(&self, shader: &WebGlShader, source: &str) {
        self.trace_call(
            "shaderSource",
            format_args!("<shader>, {} bytes", source.len()),
        );
        self.gl.shader_source(shader, source);
    }

    pub fn compile_shader(&self, shader: &WebGlShader) {
        self.trace_call("compileShader", format_args!("<shader>"));
        self.gl.compile_shader(shader);
    }

    pub fn get_shader_parameter(&self, shader: &WebGlShader, pname: u32) -> JsValue {
        self.trace_call("getShaderParameter", format_args!("<shader>, {pname:#x}"));
        self.gl.get_shader_parameter(shader, pname)
    }

    pub fn get_shader_info_log(&self, shader: &WebGlShader) -> Option<String> {
        self.trace_call("getShaderInfoLog", format_args!("<shader>"));
        self.gl.get_shader_info_log(shader)
    }

    pub fn delete_shader(&self, shader: Option<&WebGlShader>) {
        self.trace_call("deleteShader", format_args!("<shader>"));
        self.gl.delete_shader(shader);
    }

    pub fn create_program(&self) -> Option<WebGlProgram> {
        self.trace_call("createProgram", format_args!(""));
        self.gl.create_program()
    }

    pub fn attach_shader(&self, program: &WebGlProgram, shader: &WebGlShader) {
        self.trace_call("attachShader", format_args!("<program>, <shader>"));
        self.gl.attach_shader(program, shader);
    }

    pub fn link_program(&self, program: &WebGlProgram) {
        self.trace_call("linkProgram", format_args!("<program>"));
        self.gl.link_program(program);
    }

    pub fn get_program_parameter(&self, program: &WebGlProgram, pname: u32) -> JsValue {
        self.trace_call("getProgramParameter", format_args!("<program>, {pname:#x}"));
        self.gl.get_program_parameter(program, pname)
    }

    pub fn get_program_info_log(&self, program: &WebGlProgram) -> Option<String> {
        self.trace_call("getProgramInfoLog", format_args!("<program>"));
        self.gl.get_program_info_log(program)
    }

    pub fn delete_program(&self, program: Option<&WebGlProgram>) {
        self.trace_call("deleteProgram", format_args!("<program>"));
        self.gl.delete_program(program);
    }

    pub fn get_attrib_location(&self, program: &WebGlProgram, name: &str) -> i32 {
        self.trace_call("getAttribLocation", format_args!("<program>, {name:?}"));
        self.gl.get_attrib_location(program, name)
    }

    pub fn get_uniform_location(
        &self,
        program: &WebGlProgram,
        name: &str,
    ) -> Option<WebGlUniformLocation> {
        self.trace_call("getUniformLocation", format_args!("<program>, {name:?}"));
        self.gl.get_uniform_location(program, name)
    }

    pub fn use_program(&self, program: Option<&WebGlProgram>) {
        self.trace_call("useProgram", format_args!("<program>"));
        self.gl.use_program(program);
    }

    pub fn create_buffer(&self) -> Option<WebGlBuffer> {
        self.trace_call("createBuffer", format_args!(""));
        self.gl.create_buffer()
    }

    pub fn bind_buffer(&self, target: u32, buffer: Option<&WebGlBuffer>) {
        self.trace_call("bindBuffer", format_args!("{target:#x}, <buffer>"));
        self.gl.bind_buffer(target, buffer);
    }

    pub fn buffer_data_with_array_buffer_view(
        &self,
        target: u32,
        data: &js_sys::Object,
        usage: u32,
    ) {
        self.trace_call(
            "bufferData",
            format_args!("{target:#x}, <view>, {usage:#x}"),
        );
        self.gl.buffer_data_with_array_buffer_view(target, data, usage);
    }

    pub fn create_vertex_array(&self) -> Option<WebGlVertexArrayObject> {
        self.trace_call("createVertexArray", format_args!(""));
        self.gl.create_vertex_array()
    }

    pub fn bind_vertex_array(&self, vao: Option<&WebGlVertexArrayObject>) {
        self.trace_call("bindVertexArray", format_args!("<vao>"));
        self.gl.bind_vertex_array(vao);
    }

    pub fn enable_vertex_attrib_array(&self, index: u32) {
        self.trace_call("enableVertexAttribArray", format_args!("{index}"));
        self.gl.enable_vertex_attrib_array(index);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn vertex_attrib_pointer_with_i32(
        &self,
        index: u32,
        size: i32,
        type_: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        self.trace_call(
            "vertexAttribPointer",
            format_args!("{index}, {size}, {type_:#x}, {normalized}, {stride}, {offset}"),
        );
        self.gl
            .vertex_attrib_pointer_with_i32(index, size, type_, normalized, stride, offset);
    }

    pub fn uniform2f(&self, location: Option<&WebGlUniformLocation>, x: f32, y: f32) {
        self.trace_call("uniform2f", format_args!("<location>, {x}, {y}"));
        self.gl.uniform2f(location, x, y);
    }

    pub fn uniform4f(&self, location: Option<&WebGlUniformLocation>, x: f32, y: f32, z: f32, w: f32) {
        self.trace_call("uniform4f", format_args!("<location>, {x}, {y}, {z}, {w}"));
        self.gl.uniform4f(location, x, y, z, w);
    }

    pub fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        self.trace_call("drawArrays", format_args!("{mode:#x}, {first}, {count}"));
        self.gl.draw_arrays(mode, first, count);
    }
}
