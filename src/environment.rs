use js_sys::Promise;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Decoded environment image, tightly packed RGBA8, top row first.
pub struct EnvironmentImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Hand-off between the async image loader and the frame loop.
///
/// Only the most recently requested URL may land in `ready`; a load that
/// finishes after a newer request is dropped.
#[derive(Default)]
pub struct EnvironmentSlot {
    pub wanted: Option<String>,
    pub ready: Option<EnvironmentImage>,
}

impl EnvironmentSlot {
    pub fn shared() -> Rc<RefCell<EnvironmentSlot>> {
        Rc::new(RefCell::new(EnvironmentSlot::default()))
    }

    /// Record a new request; returns false if it is already the current one.
    pub fn begin(&mut self, url: &str) -> bool {
        if self.wanted.as_deref() == Some(url) {
            return false;
        }
        self.wanted = Some(url.to_string());
        self.ready = None;
        true
    }

    /// Accept a finished load if it is still wanted.
    pub fn deliver(&mut self, image: EnvironmentImage) -> bool {
        if self.wanted.as_deref() != Some(image.url.as_str()) {
            return false;
        }
        self.ready = Some(image);
        true
    }
}

/// Scale `(width, height)` so the longer side is at most `max_dim`,
/// preserving aspect ratio. Never returns a zero dimension.
pub fn fit_texture_size(width: u32, height: u32, max_dim: u32) -> (u32, u32) {
    let w = width.max(1);
    let h = height.max(1);
    let max_dim = max_dim.max(1);
    let longest = w.max(h);
    if longest <= max_dim {
        return (w, h);
    }
    let scale = max_dim as f64 / longest as f64;
    let sw = ((w as f64 * scale).round() as u32).clamp(1, max_dim);
    let sh = ((h as f64 * scale).round() as u32).clamp(1, max_dim);
    (sw, sh)
}

/// Start loading `url` into `slot` unless it is already the pending request.
pub fn request(slot: &Rc<RefCell<EnvironmentSlot>>, url: String, max_dim: u32) {
    if !slot.borrow_mut().begin(&url) {
        return;
    }
    log::info!("[env] loading {}", url);
    let slot = slot.clone();
    spawn_local(async move {
        match fetch_environment(&url, max_dim).await {
            Ok(image) => {
                let (w, h) = (image.width, image.height);
                if slot.borrow_mut().deliver(image) {
                    log::info!("[env] ready {}x{} {}", w, h, url);
                } else {
                    log::debug!("[env] dropping stale image {}", url);
                }
            }
            // Background stays on the placeholder color.
            Err(e) => log::error!("[env] failed to load {}: {:?}", url, e),
        }
    });
}

async fn load_image(url: &str) -> anyhow::Result<web::HtmlImageElement> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_cross_origin(Some("anonymous"));
    let img_for_promise = img.clone();
    let promise = Promise::new(&mut |resolve, reject| {
        let onload = Closure::once_into_js(move || {
            _ = resolve.call0(&JsValue::NULL);
        });
        let onerror = Closure::once_into_js(move || {
            _ = reject.call0(&JsValue::NULL);
        });
        img_for_promise.set_onload(Some(onload.unchecked_ref()));
        img_for_promise.set_onerror(Some(onerror.unchecked_ref()));
    });
    img.set_src(url);
    JsFuture::from(promise)
        .await
        .map_err(|_| anyhow::anyhow!("image request failed"))?;
    Ok(img)
}

/// Fetch and decode an image into RGBA8 by drawing it onto a scratch canvas.
pub async fn fetch_environment(url: &str, max_dim: u32) -> anyhow::Result<EnvironmentImage> {
    let img = load_image(url).await?;
    let (width, height) = fit_texture_size(img.natural_width(), img.natural_height(), max_dim);

    let document = web::window()
        .and_then(|w| w.document())
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(
        &img,
        0.0,
        0.0,
        width as f64,
        height as f64,
    )
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    // Throws for cross-origin images served without CORS headers.
    let data = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    Ok(EnvironmentImage {
        url: url.to_string(),
        width,
        height,
        rgba: data.data().0,
    })
}
