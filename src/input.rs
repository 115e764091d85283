use glam::Vec2;
use web_sys as web;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragMode {
    #[default]
    None,
    Rotate,
    Pan,
}

#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub mode: DragMode,
    pub pointer_id: i32,
}

/// Map `MouseEvent.button` (and modifiers) to an orbit gesture: primary
/// drag rotates, secondary or modified primary drag pans.
#[inline]
pub fn drag_mode_for(button: i16, shift: bool, ctrl_or_meta: bool) -> DragMode {
    match button {
        0 if shift || ctrl_or_meta => DragMode::Pan,
        0 => DragMode::Rotate,
        2 => DragMode::Pan,
        _ => DragMode::None,
    }
}

/// Normalize `WheelEvent.deltaY` to pixels.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32, line_px: f32, page_px: f32) -> f32 {
    let dy = delta_y as f32;
    match delta_mode {
        1 => dy * line_px,
        2 => dy * page_px,
        _ => dy,
    }
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}
