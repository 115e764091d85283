use crate::constants::{DATA_ENV_DESKTOP, DATA_ENV_MOBILE, DATA_TEXT, DATA_VARIANT};
use blocks_core::{DeviceClass, SceneConfig};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Keep the canvas backing store at CSS size × devicePixelRatio.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// `navigator.userAgent`, or `None` when there is no browser to ask.
pub fn user_agent() -> Option<String> {
    web::window().and_then(|w| w.navigator().user_agent().ok())
}

/// Device probe handed to the scene composer.
pub fn browser_device_class() -> DeviceClass {
    DeviceClass::from_user_agent(user_agent().as_deref())
}

/// Read the scene configuration from the canvas' `data-*` attributes,
/// falling back to the defaults when they do not parse.
pub fn read_scene_config(canvas: &web::HtmlCanvasElement) -> SceneConfig {
    let data = canvas.dataset();
    let variant = data.get(DATA_VARIANT);
    let text = data.get(DATA_TEXT);
    let mobile = data.get(DATA_ENV_MOBILE);
    let desktop = data.get(DATA_ENV_DESKTOP);
    match SceneConfig::from_host(
        variant.as_deref(),
        text.as_deref(),
        mobile.as_deref(),
        desktop.as_deref(),
    ) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            SceneConfig::default()
        }
    }
}
