use crate::constants::OVERLAY_ID;
use blocks_core::OverlayText;
use wasm_bindgen::JsValue;
use web_sys as web;

fn append_text(
    document: &web::Document,
    parent: &web::Element,
    tag: &str,
    class: &str,
    text: &str,
) -> Result<web::Element, JsValue> {
    let el = document.create_element(tag)?;
    el.set_class_name(class);
    el.set_text_content(Some(text));
    parent.append_child(&el)?;
    Ok(el)
}

/// Fill the overlay container with the marketing copy.
pub fn mount(document: &web::Document, text: &OverlayText) -> Result<(), JsValue> {
    let Some(root) = document.get_element_by_id(OVERLAY_ID) else {
        log::warn!("[overlay] missing #{}", OVERLAY_ID);
        return Ok(());
    };
    root.set_text_content(None);

    append_text(document, &root, "h1", "overlay-heading", &text.heading)?;
    let headline = append_text(
        document,
        &root,
        "div",
        "overlay-headline",
        &format!("{} ", text.headline),
    )?;
    append_text(
        document,
        &headline,
        "span",
        "overlay-highlight",
        &text.highlight,
    )?;
    append_text(document, &root, "p", "overlay-tagline", &text.tagline)?;
    append_text(document, &root, "button", "overlay-cta", &text.call_to_action)?;

    show(document);
    Ok(())
}

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        _ = el.class_list().add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}
