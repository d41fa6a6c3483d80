#![cfg(target_arch = "wasm32")]
use crate::constants::{ADD_BOX_BUTTON_ID, CANVAS_ID};
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod controls;
mod core;
mod dom;
mod frame;
mod render;

fn wire_add_box_button(document: &web::Document, frame: &Rc<RefCell<FrameContext>>) {
    let frame = frame.clone();
    let doc = document.clone();
    dom::add_click_listener(document, ADD_BOX_BUTTON_ID, move || {
        let index = frame.borrow_mut().add_box();
        if let Err(e) = controls::create_box_controls(&doc, &frame, index) {
            log::error!("[controls] box {}: {:?}", index, e);
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("speaker-grid starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Sized once; not resized with the window
    let canvas_size = dom::size_canvas_to_viewport(&window, &canvas);
    log::info!("[canvas] {}x{} px", canvas_size.width, canvas_size.height);

    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("get_context: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let frame = Rc::new(RefCell::new(FrameContext::new(ctx, canvas_size)));
    wire_add_box_button(&document, &frame);
    frame.borrow().redraw();

    Ok(())
}
