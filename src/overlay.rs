use crate::constants::{OVERLAY_ID, OVERLAY_STYLE};
use glam::Vec2;
use hearts_core::{Rgba, Surface};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Full-viewport transparent canvas the hearts are painted on.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    // fill style currently set on the context
    fill: Option<Rgba>,
}

impl CanvasSurface {
    /// Create the overlay canvas and append it to `anchor`.
    pub fn create(
        document: &web::Document,
        anchor: &web::HtmlElement,
        width: u32,
        height: u32,
    ) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        canvas.set_id(OVERLAY_ID);
        _ = canvas.set_attribute("style", OVERLAY_STYLE);
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

        anchor
            .append_child(&canvas)
            .map_err(|e| anyhow::anyhow!("append overlay: {:?}", e))?;
        log::info!("[overlay] mounted {}x{}", width, height);
        Ok(Self {
            canvas,
            ctx,
            fill: None,
        })
    }

    /// Map a mouse/pointer event's client position into canvas pixels.
    pub fn client_to_canvas(&self, ev: &web::MouseEvent) -> Vec2 {
        let rect = self.canvas.get_bounding_client_rect();
        let x_css = ev.client_x() as f32 - rect.left() as f32;
        let y_css = ev.client_y() as f32 - rect.top() as f32;
        if rect.width() > 0.0 && rect.height() > 0.0 {
            let sx = (x_css / rect.width() as f32) * self.canvas.width() as f32;
            let sy = (y_css / rect.height() as f32) * self.canvas.height() as f32;
            Vec2::new(sx, sy)
        } else {
            Vec2::new(x_css, y_css)
        }
    }

    /// Remove the canvas from the document.
    pub fn destroy(self) {
        self.canvas.remove();
        log::info!("[overlay] removed");
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.clear_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        if self.fill != Some(color) {
            self.ctx.set_fill_style_str(&color.to_css());
            self.fill = Some(color);
        }
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        // setting the size resets context state, fill style included
        self.fill = None;
    }
}
