use crate::constants::{WHEEL_LINE_PX, WHEEL_PAGE_PX};
use crate::input::{self, DragMode, PointerState};
use blocks_core::OrbitCamera;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct OrbitWiring {
    pub canvas: web::HtmlCanvasElement,
    pub orbit: Rc<RefCell<OrbitCamera>>,
    pub pointer: Rc<RefCell<PointerState>>,
}

/// Hook pointer and wheel input on the canvas up to the orbit camera.
pub fn wire_orbit_controls(canvas: web::HtmlCanvasElement, orbit: Rc<RefCell<OrbitCamera>>) {
    let w = OrbitWiring {
        canvas,
        orbit,
        pointer: Rc::new(RefCell::new(PointerState::default())),
    };
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
    suppress_context_menu(&w.canvas);
}

fn wire_pointerdown(w: &OrbitWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mode = input::drag_mode_for(
            ev.button(),
            ev.shift_key(),
            ev.ctrl_key() || ev.meta_key(),
        );
        if mode == DragMode::None {
            return;
        }
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        {
            let mut ps = w.pointer.borrow_mut();
            ps.x = pos.x;
            ps.y = pos.y;
            ps.mode = mode;
            ps.pointer_id = ev.pointer_id();
        }
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &OrbitWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let (dx, dy, mode) = {
            let mut ps = w.pointer.borrow_mut();
            if ps.mode == DragMode::None || ps.pointer_id != ev.pointer_id() {
                return;
            }
            let d = (pos.x - ps.x, pos.y - ps.y, ps.mode);
            ps.x = pos.x;
            ps.y = pos.y;
            d
        };
        let h = w.canvas.height() as f32;
        let mut orbit = w.orbit.borrow_mut();
        match mode {
            DragMode::Rotate => orbit.rotate_by_pixels(dx, dy, h),
            DragMode::Pan => orbit.pan_by_pixels(dx, dy, h),
            DragMode::None => {}
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &OrbitWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut ps = w.pointer.borrow_mut();
        if ps.pointer_id == ev.pointer_id() {
            ps.mode = DragMode::None;
            _ = w.canvas.release_pointer_capture(ev.pointer_id());
        }
    }) as Box<dyn FnMut(_)>);
    for kind in ["pointerup", "pointercancel"] {
        _ = canvas_for_listener
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(w: &OrbitWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let dy = input::wheel_delta_px(ev.delta_y(), ev.delta_mode(), WHEEL_LINE_PX, WHEEL_PAGE_PX);
        w.orbit.borrow_mut().zoom_by_wheel(dy);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Secondary-button drags pan; keep the browser menu out of the way.
fn suppress_context_menu(canvas: &web::HtmlCanvasElement) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
    closure.forget();
}
