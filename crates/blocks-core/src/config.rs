//! Scene configuration.
//!
//! The landing page ships in two flavours that differ only in constants: the
//! `Showcase` variant angles the word toward the camera and carries the
//! marketing overlay, the `Backdrop` variant is a plain decorative stage.

use crate::constants::*;
use crate::device::DeviceClass;
use glam::Vec3;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown scene variant `{0}` (expected `showcase` or `backdrop`)")]
    UnknownVariant(String),
    #[error("{0} environment URL is empty")]
    EmptyResourceUrl(&'static str),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Showcase,
    Backdrop,
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "showcase" => Ok(Variant::Showcase),
            "backdrop" => Ok(Variant::Backdrop),
            _ => Err(ConfigError::UnknownVariant(s.to_string())),
        }
    }
}

/// Background images, one per device class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceUrls {
    pub mobile: String,
    pub desktop: String,
}

impl Default for ResourceUrls {
    fn default() -> Self {
        Self {
            mobile: DEFAULT_MOBILE_ENV_URL.to_string(),
            desktop: DEFAULT_DESKTOP_ENV_URL.to_string(),
        }
    }
}

impl ResourceUrls {
    pub fn new(mobile: impl Into<String>, desktop: impl Into<String>) -> Result<Self, ConfigError> {
        let urls = Self {
            mobile: mobile.into(),
            desktop: desktop.into(),
        };
        if urls.mobile.trim().is_empty() {
            return Err(ConfigError::EmptyResourceUrl("mobile"));
        }
        if urls.desktop.trim().is_empty() {
            return Err(ConfigError::EmptyResourceUrl("desktop"));
        }
        Ok(urls)
    }

    pub fn select(&self, class: DeviceClass) -> &str {
        match class {
            DeviceClass::Mobile => &self.mobile,
            DeviceClass::Desktop => &self.desktop,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_deg: f32,
    pub znear: f32,
    pub zfar: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitConfig {
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
    pub enable_rotate: bool,
    pub enable_zoom: bool,
    pub enable_pan: bool,
    pub damping: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            auto_rotate_speed: AUTO_ROTATE_SPEED,
            enable_rotate: true,
            enable_zoom: true,
            enable_pan: true,
            damping: ORBIT_DAMPING,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LightConfig {
    pub ambient_intensity: f32,
    pub directional_position: Vec3,
    pub directional_intensity: f32,
    pub directional_color: [f32; 3],
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            ambient_intensity: AMBIENT_INTENSITY,
            directional_position: Vec3::from_array(DIRECTIONAL_POSITION),
            directional_intensity: DIRECTIONAL_INTENSITY,
            directional_color: DIRECTIONAL_COLOR,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MaterialConfig {
    pub color: [f32; 3],
    pub edge_color: [f32; 3],
    pub roughness: f32,
    pub metalness: f32,
    pub opacity: f32,
    pub transmission: f32,
    pub clearcoat: f32,
    pub cube_edge: f32,
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            color: CUBE_COLOR,
            edge_color: EDGE_COLOR,
            roughness: CUBE_ROUGHNESS,
            metalness: CUBE_METALNESS,
            opacity: CUBE_OPACITY,
            transmission: CUBE_TRANSMISSION,
            clearcoat: CUBE_CLEARCOAT,
            cube_edge: CUBE_EDGE,
        }
    }
}

/// Static marketing copy drawn over the canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayText {
    pub heading: String,
    pub headline: String,
    pub highlight: String,
    pub tagline: String,
    pub call_to_action: String,
}

impl Default for OverlayText {
    fn default() -> Self {
        Self {
            heading: "AMP18 Events".to_string(),
            headline: "Coming Soon:".to_string(),
            highlight: "Blinding Nights-Chennai 1.0".to_string(),
            tagline: "Get ready for an electrifying experience like never before!".to_string(),
            call_to_action: "Stay Notified".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub variant: Variant,
    pub display_text: String,
    pub glyph_pitch: f32,
    pub group_position: Vec3,
    pub group_rotation_y: f32,
    pub camera: CameraConfig,
    pub orbit: OrbitConfig,
    pub lights: LightConfig,
    pub material: MaterialConfig,
    pub resources: ResourceUrls,
    pub overlay: Option<OverlayText>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::for_variant(Variant::default())
    }
}

impl SceneConfig {
    pub fn for_variant(variant: Variant) -> Self {
        let (group_rotation_y, camera_position, overlay) = match variant {
            Variant::Showcase => (
                GROUP_ROTATION_Y,
                Vec3::from_array(CAMERA_POSITION),
                Some(OverlayText::default()),
            ),
            Variant::Backdrop => (
                BACKDROP_GROUP_ROTATION_Y,
                Vec3::from_array(BACKDROP_CAMERA_POSITION),
                None,
            ),
        };
        Self {
            variant,
            display_text: DEFAULT_DISPLAY_TEXT.to_string(),
            glyph_pitch: GLYPH_PITCH,
            group_position: Vec3::from_array(GROUP_POSITION),
            group_rotation_y,
            camera: CameraConfig {
                position: camera_position,
                target: Vec3::ZERO,
                fov_deg: CAMERA_FOV_DEG,
                znear: CAMERA_ZNEAR,
                zfar: CAMERA_ZFAR,
            },
            orbit: OrbitConfig::default(),
            lights: LightConfig::default(),
            material: MaterialConfig::default(),
            resources: ResourceUrls::default(),
            overlay,
        }
    }

    /// Build a configuration from the optional values a host page provides.
    ///
    /// Absent values keep the variant defaults. A present but empty URL is
    /// rejected; an absent one is not.
    pub fn from_host(
        variant: Option<&str>,
        display_text: Option<&str>,
        mobile_url: Option<&str>,
        desktop_url: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let variant = match variant {
            Some(v) => v.parse()?,
            None => Variant::default(),
        };
        let mut config = Self::for_variant(variant);
        if let Some(text) = display_text {
            config.display_text = text.to_string();
        }
        if mobile_url.is_some() || desktop_url.is_some() {
            let defaults = ResourceUrls::default();
            config.resources = ResourceUrls::new(
                mobile_url.unwrap_or(&defaults.mobile),
                desktop_url.unwrap_or(&defaults.desktop),
            )?;
        }
        Ok(config)
    }

    pub fn with_display_text(mut self, text: impl Into<String>) -> Self {
        self.display_text = text.into();
        self
    }

    pub fn with_resources(mut self, resources: ResourceUrls) -> Self {
        self.resources = resources;
        self
    }
}
