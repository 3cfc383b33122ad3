//! Demo glue: compile the square program, upload vertices, draw once.

use log::info;
use wasm_bindgen::JsValue;
use web_sys::WebGl2RenderingContext as GL;

use super::context::{self, GlContext};
use super::shader::{self, LinkedProgram};
use crate::error::ShaderStage;

static VERT_SRC: &str = include_str!("shaders/square.vert");
static FRAG_SRC: &str = include_str!("shaders/square.frag");

// Where the square lands, in canvas pixels.
const SQUARE_X: f32 = 220.0;
const SQUARE_Y: f32 = 140.0;
const SQUARE_SIDE: f32 = 160.0;

/// Sets up the whole session and issues the one draw call.
///
/// Any [`SetupError`](crate::error::SetupError) on the way aborts
/// initialization; there is no degraded render path.
pub fn start(trace_calls: bool) -> Result<(), JsValue> {
    let ctx = context::acquire(trace_calls)?;

    let vert = shader::compile(&ctx, ShaderStage::Vertex, VERT_SRC)?;
    let frag = shader::compile(&ctx, ShaderStage::Fragment, FRAG_SRC)?;
    let program = shader::link(&ctx, &[vert, frag])?;

    upload_square(&ctx, &program, SQUARE_X, SQUARE_Y, SQUARE_SIDE)?;

    // Match the backing store to the CSS size before drawing; the viewport
    // is what converts clip space back to pixels.
    let canvas = ctx.canvas();
    let width = canvas.client_width().max(1) as u32;
    let height = canvas.client_height().max(1) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    ctx.viewport(0, 0, width as i32, height as i32);

    ctx.clear_color(0.2, 0.2, 0.2, 1.0);
    ctx.clear(GL::COLOR_BUFFER_BIT);

    ctx.use_program(Some(program.raw()));
    // Uniform values go after useProgram.
    ctx.uniform4f(Some(&program.color), 0.5, 0.2, 0.8, 1.0);
    ctx.uniform2f(Some(&program.resolution), width as f32, height as f32);

    ctx.draw_arrays(GL::TRIANGLES, 0, 6);
    info!("drew {SQUARE_SIDE}px square on a {width}x{height} canvas");
    Ok(())
}

/// Two triangles covering an axis-aligned square in pixel coordinates.
fn square_vertices(x: f32, y: f32, side: f32) -> [f32; 12] {
    let (x1, y1, x2, y2) = (x, y, x + side, y + side);
    [
        x1, y1, x2, y1, x1, y2, //
        x1, y2, x2, y1, x2, y2,
    ]
}

fn upload_square(
    ctx: &GlContext,
    program: &LinkedProgram,
    x: f32,
    y: f32,
    side: f32,
) -> Result<(), JsValue> {
    let buffer = ctx
        .create_buffer()
        .ok_or("failed to allocate vertex buffer")?;
    ctx.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    let positions = js_sys::Float32Array::from(square_vertices(x, y, side).as_slice());
    ctx.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &positions, GL::STATIC_DRAW);

    let vao = ctx
        .create_vertex_array()
        .ok_or("failed to allocate vertex array object")?;
    ctx.bind_vertex_array(Some(&vao));
    ctx.enable_vertex_attrib_array(program.position_attrib);
    // 2 floats per vertex, tightly packed.
    ctx.vertex_attrib_pointer_with_i32(program.position_attrib, 2, GL::FLOAT, false, 0, 0);
    Ok(())
}
