//! Device-class detection.
//!
//! The only use of the device class is picking one of two background images,
//! so the classification is a plain user-agent match. Detection is supplied to
//! the composer as a [`DeviceProbe`] so it can be faked outside a browser.

use regex::Regex;
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    #[default]
    Desktop,
}

static MOBILE_UA_REGEX: OnceLock<Regex> = OnceLock::new();

fn mobile_ua_regex() -> &'static Regex {
    MOBILE_UA_REGEX.get_or_init(|| {
        Regex::new(r"(?i)Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini")
            .expect("Invalid mobile UA Regex")
    })
}

impl DeviceClass {
    /// Classify a user-agent string. A missing string means there is no
    /// browser to ask, which counts as desktop.
    pub fn from_user_agent(user_agent: Option<&str>) -> DeviceClass {
        match user_agent {
            Some(ua) if mobile_ua_regex().is_match(ua) => DeviceClass::Mobile,
            _ => DeviceClass::Desktop,
        }
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, DeviceClass::Mobile)
    }
}

/// Capability that reports the device class of the current runtime.
pub trait DeviceProbe {
    fn device_class(&self) -> DeviceClass;
}

impl<F> DeviceProbe for F
where
    F: Fn() -> DeviceClass,
{
    fn device_class(&self) -> DeviceClass {
        self()
    }
}

/// Probe backed by a fixed user-agent string (or its absence).
#[derive(Clone, Debug, Default)]
pub struct UserAgentProbe {
    pub user_agent: Option<String>,
}

impl UserAgentProbe {
    pub fn new(user_agent: Option<String>) -> Self {
        Self { user_agent }
    }
}

impl DeviceProbe for UserAgentProbe {
    fn device_class(&self) -> DeviceClass {
        DeviceClass::from_user_agent(self.user_agent.as_deref())
    }
}
