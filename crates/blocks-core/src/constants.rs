// Shared layout, lighting and material constants used by the web frontend.

// Glyph geometry
pub const UNIT: f32 = 0.5; // cube pitch inside a glyph
pub const CUBE_EDGE: f32 = 0.5; // rendered cube edge length
pub const GLYPH_ROW_OFFSET: f32 = 1.0; // vertical centering of a 5-row glyph
pub const GLYPH_PITCH: f32 = 2.25; // distance between neighbouring glyph anchors

// Word group placement
pub const GROUP_POSITION: [f32; 3] = [-0.5, 0.0, 0.0];
pub const GROUP_ROTATION_Y: f32 = std::f32::consts::PI / 1.5;
pub const BACKDROP_GROUP_ROTATION_Y: f32 = std::f32::consts::PI / 4.0;

// Camera
pub const CAMERA_POSITION: [f32; 3] = [12.0, 0.0, -13.0];
pub const BACKDROP_CAMERA_POSITION: [f32; 3] = [0.0, 2.0, 15.0];
pub const CAMERA_FOV_DEG: f32 = 50.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 2000.0;

// Orbit controls
pub const AUTO_ROTATE_SPEED: f32 = 1.5; // 2.0 is one turn per 30 s
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // radius factor per wheel notch
pub const ORBIT_MIN_RADIUS: f32 = 2.0;
pub const ORBIT_MAX_RADIUS: f32 = 60.0;
pub const ORBIT_POLAR_EPS: f32 = 1e-3;

// Lights
pub const AMBIENT_INTENSITY: f32 = 0.6;
pub const DIRECTIONAL_POSITION: [f32; 3] = [5.0, 5.0, 5.0];
pub const DIRECTIONAL_INTENSITY: f32 = 0.7;
pub const DIRECTIONAL_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

// Cube material
pub const CUBE_COLOR: [f32; 3] = [1.0, 0.271, 0.0]; // #ff4500
pub const EDGE_COLOR: [f32; 3] = [1.0, 0.647, 0.0]; // #ffa500
pub const CUBE_ROUGHNESS: f32 = 0.2;
pub const CUBE_METALNESS: f32 = 0.7;
pub const CUBE_OPACITY: f32 = 0.9;
pub const CUBE_TRANSMISSION: f32 = 0.3;
pub const CUBE_CLEARCOAT: f32 = 1.0;

// Page background shown until the environment image is ready (#111827)
pub const PLACEHOLDER_BACKGROUND: [u8; 4] = [0x11, 0x18, 0x27, 0xff];

// Display and resources
pub const DEFAULT_DISPLAY_TEXT: &str = "AMP18";
pub const DEFAULT_MOBILE_ENV_URL: &str =
    "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/download3-7FArHVIJTFszlXm2045mQDPzsZqAyo.jpg";
pub const DEFAULT_DESKTOP_ENV_URL: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/dither_it_M3_Drone_Shot_equirectangular-jpg_San_Francisco_Big_City_1287677938_12251179%20(1)-NY2qcmpjkyG6rDp1cPGIdX0bHk3hMR.jpg";
