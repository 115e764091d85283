#![cfg(target_arch = "wasm32")]
use blocks_core::{DeviceClass, OrbitCamera, SceneComposer};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod environment;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

use constants::{CANVAS_ID, MAX_ENV_TEXTURE_DIM};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("blocks-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    let config = dom::read_scene_config(&canvas);
    match &config.overlay {
        Some(text) => overlay::mount(&document, text)
            .map_err(|e| anyhow::anyhow!("overlay: {:?}", e))?,
        None => overlay::hide(&document),
    }

    let composer = SceneComposer::new(
        config,
        dom::browser_device_class as fn() -> DeviceClass,
    );
    let orbit = Rc::new(RefCell::new(OrbitCamera::new(
        &composer.config().camera,
        composer.config().orbit.clone(),
    )));

    let gpu = frame::init_gpu(&canvas, &composer).await;

    // First paint uses the default (desktop) background; the frame loop
    // swaps it once detection has run.
    let env_slot = environment::EnvironmentSlot::shared();
    environment::request(
        &env_slot,
        composer.environment_url().to_string(),
        MAX_ENV_TEXTURE_DIM,
    );

    events::wire_orbit_controls(canvas.clone(), orbit.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        composer,
        orbit,
        canvas,
        gpu,
        env_slot,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
