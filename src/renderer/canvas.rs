//! HTML canvas 2D backend (wasm32 only)

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::scene::DrawCommand;

/// Replays draw commands onto a canvas 2D context
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Grab the 2D context of `canvas`
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        ctx.set_text_align("center");
        Ok(Self { ctx })
    }

    pub fn draw(&self, commands: &[DrawCommand]) -> Result<(), JsValue> {
        for command in commands {
            match command {
                DrawCommand::Clear { width, height } => {
                    self.ctx
                        .clear_rect(0.0, 0.0, *width as f64, *height as f64);
                }
                DrawCommand::FillRect {
                    x,
                    y,
                    width,
                    height,
                    color,
                } => {
                    self.ctx.set_fill_style_str(color);
                    self.ctx
                        .fill_rect(*x as f64, *y as f64, *width as f64, *height as f64);
                }
                DrawCommand::FillCircle {
                    center,
                    radius,
                    color,
                } => {
                    self.ctx.set_fill_style_str(color);
                    self.ctx.begin_path();
                    self.ctx.arc(
                        center.x as f64,
                        center.y as f64,
                        *radius as f64,
                        0.0,
                        std::f64::consts::TAU,
                    )?;
                    self.ctx.close_path();
                    self.ctx.fill();
                }
                DrawCommand::Text {
                    text,
                    x,
                    y,
                    font,
                    color,
                } => {
                    self.ctx.set_fill_style_str(color);
                    self.ctx.set_font(font);
                    self.ctx.fill_text(text, *x as f64, *y as f64)?;
                }
            }
        }
        Ok(())
    }
}
