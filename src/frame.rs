use crate::constants::{MAX_ENV_TEXTURE_DIM, MAX_FRAME_DT_SEC};
use crate::environment::{self, EnvironmentSlot};
use crate::render::{self, EnvironmentPixels};
use blocks_core::{ComposerState, DeviceClass, OrbitCamera, SceneComposer};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type BrowserComposer = SceneComposer<fn() -> DeviceClass>;

pub struct FrameContext<'a> {
    pub composer: BrowserComposer,
    pub orbit: Rc<RefCell<OrbitCamera>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub env_slot: Rc<RefCell<EnvironmentSlot>>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        self.orbit.borrow_mut().update(dt_sec);

        if let Some(g) = &mut self.gpu {
            if let Some(image) = self.env_slot.borrow_mut().ready.take() {
                g.set_environment(EnvironmentPixels {
                    width: image.width,
                    height: image.height,
                    rgba: &image.rgba,
                });
            }
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(dt_sec, &self.orbit.borrow()) {
                log::error!("render error: {:?}", e);
            }
        }

        // Detection runs after the first frame has gone out with the default
        // background, so at most one swap is ever visible.
        if self.composer.state() == ComposerState::Detecting {
            self.detect_device();
        }
    }

    fn detect_device(&mut self) {
        if let Some(url) = self.composer.on_mounted() {
            environment::request(&self.env_slot, url.to_string(), MAX_ENV_TEXTURE_DIM);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    composer: &BrowserComposer,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, composer.config(), composer.scene()).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
