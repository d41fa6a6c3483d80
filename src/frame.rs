use crate::core::{
    layout_frame, BoxField, BoxStore, CanvasSize, EditError, GridConfig, RandomColors,
};
use crate::render;
use web_sys as web;

/// Editor state owned by the page: the box sequence plus everything needed
/// to redraw it. Shared with DOM closures through `Rc<RefCell<_>>`.
pub struct FrameContext {
    pub store: BoxStore,
    pub grid: GridConfig,
    pub canvas_size: CanvasSize,
    pub colors: RandomColors,
    pub ctx: web::CanvasRenderingContext2d,
}

impl FrameContext {
    pub fn new(ctx: web::CanvasRenderingContext2d, canvas_size: CanvasSize) -> Self {
        Self {
            store: BoxStore::new(),
            grid: GridConfig::default(),
            canvas_size,
            colors: RandomColors::from_entropy(),
            ctx,
        }
    }

    /// Clear and redraw the whole canvas from current state.
    pub fn redraw(&self) {
        let ops = layout_frame(self.store.as_slice(), self.canvas_size, &self.grid);
        render::draw(&self.ctx, &ops);
    }

    /// Append a new default box, redraw, and return its index.
    pub fn add_box(&mut self) -> usize {
        let index = self.store.add_box(&mut self.colors);
        if let Some(b) = self.store.get(index) {
            log::info!("[boxes] added {} ({}) at index {}", b.name, b.color, index);
        }
        self.redraw();
        index
    }

    /// Route one control edit through the store; redraw only if accepted.
    pub fn edit(&mut self, index: usize, field: BoxField, raw: &str) -> Result<(), EditError> {
        self.store.apply_edit(index, field, raw)?;
        log::debug!("[boxes] box {} {} <- {:?}", index, field, raw);
        self.redraw();
        Ok(())
    }
}
