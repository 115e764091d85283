// Front-end wiring and frame tuning constants. Scene layout, lighting and
// material values live in blocks_core.

// Host page element ids
pub const CANVAS_ID: &str = "app-canvas";
pub const OVERLAY_ID: &str = "overlay";

// Canvas data attributes (dataset keys, camelCase of `data-*`)
pub const DATA_TEXT: &str = "text";
pub const DATA_VARIANT: &str = "variant";
pub const DATA_ENV_MOBILE: &str = "envMobile";
pub const DATA_ENV_DESKTOP: &str = "envDesktop";

// Largest environment texture side; equirect sources are often 8k wide
pub const MAX_ENV_TEXTURE_DIM: u32 = 4096;

// Clamp for frame delta so a backgrounded tab does not jump the orbit
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// WheelEvent.deltaMode units converted to pixels
pub const WHEEL_LINE_PX: f32 = 16.0;
pub const WHEEL_PAGE_PX: f32 = 800.0;
