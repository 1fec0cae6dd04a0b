use super::draw_commands::{DrawCommand, TextAnchor};
use crate::domain::chart::Color;
use crate::domain::logging::{get_logger, LogComponent};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Canvas 2D backend replaying draw commands.
pub struct CanvasRenderer {
    canvas_id: String,
    width: u32,
    height: u32,
}

impl CanvasRenderer {
    pub fn new(canvas_id: impl Into<String>, width: u32, height: u32) -> Self {
        Self { canvas_id: canvas_id.into(), width, height }
    }

    fn context(&self) -> Result<CanvasRenderingContext2d, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| JsValue::from_str("canvas element not found"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("element is not a canvas"))?;

        canvas.set_width(self.width);
        canvas.set_height(self.height);

        canvas
            .get_context("2d")
            .map_err(|_| JsValue::from_str("failed to get 2d context"))?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("failed to cast 2d context"))
    }

    /// Clear the surface and replay one frame of commands.
    pub fn render(&self, commands: &[DrawCommand]) -> Result<(), JsValue> {
        let context = self.context()?;

        context.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        context.set_fill_style_str(&Color::BACKGROUND.to_css());
        context.fill_rect(0.0, 0.0, self.width as f64, self.height as f64);

        for command in commands {
            match command {
                DrawCommand::Line { from, to, width, color, dash } => {
                    match dash {
                        Some(pattern) => context.set_line_dash(&dash_array(*pattern))?,
                        None => context.set_line_dash(&js_sys::Array::new())?,
                    }
                    context.set_stroke_style_str(&color.to_css());
                    context.set_line_width(*width as f64);
                    context.begin_path();
                    context.move_to(from.0 as f64, from.1 as f64);
                    context.line_to(to.0 as f64, to.1 as f64);
                    context.stroke();
                }
                DrawCommand::Text { at, content, color, anchor, size_px } => {
                    context.set_fill_style_str(&color.to_css());
                    context.set_font(&format!("{}px sans-serif", size_px));
                    context.set_text_align(match anchor {
                        TextAnchor::Center => "center",
                        TextAnchor::Right => "right",
                    });
                    context.fill_text(content, at.0 as f64, at.1 as f64)?;
                }
            }
        }

        get_logger().debug(
            LogComponent::Infrastructure("CanvasRenderer"),
            &format!("Replayed {} draw commands", commands.len()),
        );

        Ok(())
    }

    pub fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

fn dash_array(pattern: [f32; 2]) -> js_sys::Array {
    js_sys::Array::of2(
        &JsValue::from_f64(pattern[0] as f64),
        &JsValue::from_f64(pattern[1] as f64),
    )
}
