// Host-side tests for device classification and mount-time environment selection.

use blocks_core::*;
use std::cell::Cell;
use std::rc::Rc;

const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";
const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Mobile Safari/537.36";
const DESKTOP_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

#[test]
fn mobile_user_agents_are_detected() {
    for ua in [
        IPHONE_UA,
        ANDROID_UA,
        "Mozilla/5.0 (iPad; CPU OS 16_0 like Mac OS X)",
        "Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)",
        "Mozilla/5.0 (compatible; MSIE 10.0; Windows Phone 8.0; IEMobile/10.0)",
        "mozilla/5.0 (linux; android 10)",
    ] {
        assert_eq!(DeviceClass::from_user_agent(Some(ua)), DeviceClass::Mobile, "{ua}");
    }
}

#[test]
fn desktop_and_missing_user_agents_are_desktop() {
    assert_eq!(DeviceClass::from_user_agent(Some(DESKTOP_UA)), DeviceClass::Desktop);
    assert_eq!(DeviceClass::from_user_agent(Some("")), DeviceClass::Desktop);
    assert_eq!(DeviceClass::from_user_agent(None), DeviceClass::Desktop);
    assert_eq!(DeviceClass::default(), DeviceClass::Desktop);
}

#[test]
fn user_agent_probe_classifies_its_string() {
    assert!(UserAgentProbe::new(Some(IPHONE_UA.into())).device_class().is_mobile());
    assert!(!UserAgentProbe::new(None).device_class().is_mobile());
}

fn counting_probe(class: DeviceClass) -> (Rc<Cell<u32>>, impl Fn() -> DeviceClass) {
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    (calls, move || {
        counter.set(counter.get() + 1);
        class
    })
}

#[test]
fn first_frame_always_uses_desktop_resource() {
    let (calls, probe) = counting_probe(DeviceClass::Mobile);
    let composer = SceneComposer::new(SceneConfig::default(), probe);
    assert_eq!(composer.state(), ComposerState::Detecting);
    assert_eq!(composer.environment_url(), DEFAULT_DESKTOP_ENV_URL);
    assert_eq!(calls.get(), 0);
}

#[test]
fn mobile_device_swaps_once_to_mobile_resource() {
    let (calls, probe) = counting_probe(DeviceClass::Mobile);
    let mut composer = SceneComposer::new(SceneConfig::default(), probe);

    assert_eq!(composer.on_mounted(), Some(DEFAULT_MOBILE_ENV_URL));
    assert_eq!(composer.state(), ComposerState::Ready(DeviceClass::Mobile));
    assert_eq!(composer.environment_url(), DEFAULT_MOBILE_ENV_URL);

    assert_eq!(composer.on_mounted(), None);
    assert_eq!(calls.get(), 1);
    assert_eq!(composer.environment_url(), DEFAULT_MOBILE_ENV_URL);
}

#[test]
fn desktop_device_never_swaps() {
    let (calls, probe) = counting_probe(DeviceClass::Desktop);
    let mut composer = SceneComposer::new(SceneConfig::default(), probe);
    assert_eq!(composer.on_mounted(), None);
    assert_eq!(composer.state(), ComposerState::Ready(DeviceClass::Desktop));
    assert_eq!(composer.environment_url(), DEFAULT_DESKTOP_ENV_URL);
    assert_eq!(calls.get(), 1);
}

#[test]
fn identical_urls_do_not_swap() {
    let resources = ResourceUrls::new("env.jpg", "env.jpg").unwrap();
    let config = SceneConfig::default().with_resources(resources);
    let mut composer = SceneComposer::new(config, || DeviceClass::Mobile);
    assert_eq!(composer.on_mounted(), None);
    assert_eq!(composer.device_class(), DeviceClass::Mobile);
}

#[test]
fn composer_scene_matches_config() {
    let config = SceneConfig::default().with_display_text("18");
    let composer = SceneComposer::new(config, || DeviceClass::Desktop);
    assert_eq!(composer.scene().groups.len(), 2);
    assert_eq!(composer.config().display_text, "18");
}
