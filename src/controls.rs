use crate::constants::{CONTROLS_CONTAINER_ID, CONTROL_GROUP_CLASS};
use crate::core::constants::INPUT_STEP;
use crate::core::BoxField;
use crate::dom;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Build the input group for box `index` and insert it at the top of the
/// controls container, so the newest box is listed first.
pub fn create_box_controls(
    document: &web::Document,
    frame: &Rc<RefCell<FrameContext>>,
    index: usize,
) -> anyhow::Result<()> {
    let container = document
        .get_element_by_id(CONTROLS_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CONTROLS_CONTAINER_ID))?;

    let group: web::HtmlElement = dom::create_element(document, "div")?;
    _ = group.class_list().add_1(CONTROL_GROUP_CLASS);

    for field in BoxField::ALL {
        let initial = frame
            .borrow()
            .store
            .get(index)
            .map(|b| b.field_text(field))
            .unwrap_or_default();
        let input = create_field_input(document, index, field, &initial)?;

        let label: web::HtmlElement = dom::create_element(document, "label")?;
        _ = label.set_attribute("for", &field.input_id(index));
        label.set_text_content(Some(field.label()));

        append(&group, &label)?;
        append(&group, &input)?;
        let br: web::HtmlElement = dom::create_element(document, "br")?;
        append(&group, &br)?;

        let frame_for_input = frame.clone();
        dom::add_input_listener(&input, move |value| {
            if let Err(e) = frame_for_input.borrow_mut().edit(index, field, &value) {
                log::warn!("[controls] {}", e);
            }
        });
    }

    container
        .insert_before(&group, container.first_child().as_ref())
        .map_err(|e| anyhow::anyhow!("insert control group: {:?}", e))?;
    Ok(())
}

fn create_field_input(
    document: &web::Document,
    index: usize,
    field: BoxField,
    initial: &str,
) -> anyhow::Result<web::HtmlInputElement> {
    let input: web::HtmlInputElement = dom::create_element(document, "input")?;
    input.set_id(&field.input_id(index));
    if field.is_numeric() {
        input.set_type("number");
        input.set_step(&INPUT_STEP.to_string());
    } else {
        input.set_type("text");
    }
    input.set_value(initial);
    Ok(input)
}

fn append(parent: &web::HtmlElement, child: &web::Node) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append child: {:?}", e))
}
