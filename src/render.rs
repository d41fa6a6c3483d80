use crate::core::DrawOp;
use glam::DVec2;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Replay a display list on a 2D canvas context.
///
/// Style is set explicitly per operation so nothing carries over from the
/// previous one. Canvas errors are logged and the operation skipped.
pub fn draw(ctx: &web::CanvasRenderingContext2d, ops: &[DrawOp]) {
    for op in ops {
        match op {
            DrawOp::Clear { size } => ctx.clear_rect(0.0, 0.0, size.x, size.y),
            DrawOp::Line {
                from,
                to,
                paint,
                width,
                dash,
            } => {
                if let Some(pattern) = dash {
                    set_dash(ctx, pattern);
                }
                ctx.begin_path();
                ctx.move_to(from.x, from.y);
                ctx.line_to(to.x, to.y);
                ctx.set_stroke_style_str(&paint.css());
                ctx.set_line_width(*width);
                ctx.stroke();
                if dash.is_some() {
                    set_dash(ctx, &[]);
                }
            }
            DrawOp::FillRect {
                origin,
                size,
                paint,
            } => {
                if size.x > 0.0 {
                    ctx.set_fill_style_str(&paint.css());
                    ctx.fill_rect(origin.x, origin.y, size.x, size.y);
                }
            }
            DrawOp::Text {
                text,
                at,
                paint,
                font,
                align,
            } => fill_text(ctx, text, *at, &paint.css(), font, align.as_css()),
        }
    }
}

fn fill_text(
    ctx: &web::CanvasRenderingContext2d,
    text: &str,
    at: DVec2,
    css: &str,
    font: &str,
    align: &str,
) {
    ctx.set_fill_style_str(css);
    ctx.set_font(font);
    ctx.set_text_align(align);
    if let Err(e) = ctx.fill_text(text, at.x, at.y) {
        log::warn!("[render] fill_text failed: {:?}", e);
    }
}

fn set_dash(ctx: &web::CanvasRenderingContext2d, pattern: &[f64]) {
    let segments = js_sys::Array::new();
    for s in pattern {
        segments.push(&JsValue::from_f64(*s));
    }
    if let Err(e) = ctx.set_line_dash(&segments) {
        log::warn!("[render] set_line_dash failed: {:?}", e);
    }
}
