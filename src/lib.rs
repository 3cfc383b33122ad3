#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

pub mod error;
pub mod transform;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    pub mod context;
    pub mod logger;
    pub mod render;
    pub mod shader;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        // Call tracing is opt-in via the page URL, e.g. index.html?trace.
        let trace = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .map(|q| q.contains("trace"))
            .unwrap_or(false);

        logger::init(trace);
        render::start(trace)
    }
}

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
