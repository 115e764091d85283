//! Mount-time environment selection.
//!
//! The first frame is always drawn with the desktop background. Right after
//! mount the composer asks its probe for the device class once and reports a
//! replacement URL only if the answer differs, so the user sees at most one
//! background swap.

use crate::config::SceneConfig;
use crate::device::{DeviceClass, DeviceProbe};
use crate::scene::Scene;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComposerState {
    /// Device class not known yet; the default (desktop) resource is in use.
    Detecting,
    /// Terminal: the device class has been resolved.
    Ready(DeviceClass),
}

pub struct SceneComposer<P: DeviceProbe> {
    config: SceneConfig,
    scene: Scene,
    probe: P,
    state: ComposerState,
}

impl<P: DeviceProbe> SceneComposer<P> {
    pub fn new(config: SceneConfig, probe: P) -> Self {
        let scene = Scene::compose(&config);
        Self {
            config,
            scene,
            probe,
            state: ComposerState::Detecting,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn state(&self) -> ComposerState {
        self.state
    }

    /// Device class currently assumed; desktop until detection has run.
    pub fn device_class(&self) -> DeviceClass {
        match self.state {
            ComposerState::Detecting => DeviceClass::default(),
            ComposerState::Ready(class) => class,
        }
    }

    /// Environment image for the current state.
    pub fn environment_url(&self) -> &str {
        self.config.resources.select(self.device_class())
    }

    /// Run detection once. Returns the new environment URL when it differs
    /// from the one already shown, `None` otherwise and on every later call.
    pub fn on_mounted(&mut self) -> Option<&str> {
        if let ComposerState::Ready(_) = self.state {
            return None;
        }
        let before = DeviceClass::default();
        let class = self.probe.device_class();
        self.state = ComposerState::Ready(class);
        log::info!("[device] detected {:?}", class);
        let swap = self.config.resources.select(class) != self.config.resources.select(before);
        swap.then(|| self.config.resources.select(class))
    }
}
