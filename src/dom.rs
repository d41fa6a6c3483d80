use crate::constants::canvas_size_for_viewport;
use crate::core::CanvasSize;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{} for click listener", element_id);
    }
}

/// Call `handler` with the input's current text on every `input` event.
pub fn add_input_listener(
    input: &web::HtmlInputElement,
    mut handler: impl FnMut(String) + 'static,
) {
    let el = input.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
        handler(el.value());
    }) as Box<dyn FnMut(_)>);
    _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn create_element<T: JsCast>(document: &web::Document, tag: &str) -> anyhow::Result<T> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("cast <{}>: {:?}", tag, e))
}

/// Size the canvas backing store from the viewport once at startup.
pub fn size_canvas_to_viewport(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
) -> CanvasSize {
    let inner_w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let inner_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let (w_px, h_px) = canvas_size_for_viewport(inner_w, inner_h);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    CanvasSize::new(w_px as f64, h_px as f64)
}
