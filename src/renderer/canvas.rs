//! Canvas2D renderer (browser only)

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::frame::{DrawCircle, Frame, Overlay, Sprite};
use crate::css_color;

/// Player face image, drawn instead of a plain circle once it has loaded
const PLAYER_IMAGE: &str = "panda_face.svg";

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    player_image: Option<HtmlImageElement>,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let player_image = match HtmlImageElement::new() {
            Ok(img) => {
                img.set_src(PLAYER_IMAGE);
                Some(img)
            }
            Err(e) => {
                log::warn!("Player image unavailable, using circles: {:?}", e);
                None
            }
        };

        Ok(Self { ctx, player_image })
    }

    pub fn render(&self, frame: &Frame) -> Result<(), JsValue> {
        self.ctx.clear_rect(0.0, 0.0, frame.width, frame.height);

        for circle in &frame.circles {
            match circle.sprite {
                Sprite::Player => self.draw_player(circle)?,
                Sprite::Dot => self.draw_circle(circle)?,
            }
        }

        if let Some(overlay) = &frame.overlay {
            self.draw_overlay(overlay, frame.width, frame.height)?;
        }
        Ok(())
    }

    fn draw_player(&self, circle: &DrawCircle) -> Result<(), JsValue> {
        match &self.player_image {
            Some(img) if img.complete() => {
                let size = circle.radius * 2.0;
                self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    img,
                    circle.pos.x - circle.radius,
                    circle.pos.y - circle.radius,
                    size,
                    size,
                )
            }
            _ => self.draw_circle(circle),
        }
    }

    fn draw_circle(&self, circle: &DrawCircle) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.arc(circle.pos.x, circle.pos.y, circle.radius, 0.0, TAU)?;
        self.ctx.set_fill_style_str(&css_color(circle.color));
        self.ctx.fill();
        self.ctx.close_path();
        Ok(())
    }

    fn draw_overlay(&self, overlay: &Overlay, width: f64, height: f64) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str("rgba(0, 0, 0, 0.5)");
        self.ctx.fill_rect(0.0, 0.0, width, height);

        self.ctx.set_fill_style_str("#FFFFFF");
        self.ctx.set_text_align("center");
        self.ctx.set_font("48px Roboto");
        self.ctx
            .fill_text(overlay.title, width / 2.0, height / 2.0 - 24.0)?;
        self.ctx.set_font("24px Roboto");
        self.ctx
            .fill_text(overlay.hint, width / 2.0, height / 2.0 + 24.0)?;
        Ok(())
    }
}
