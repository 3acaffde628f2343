//! Canvas 2D frame drawing

use game_core::{Bag, Config, Grandma, Kid, LevelState};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::assets::Sprites;

const BACKGROUND: &str = "#d9d9d9";
const GOAL_LINE: &str = "#555";
const ARM_BORDER: &str = "#000";
const ARM_SKIN: &str = "#f4d7b5";
const BANNER_FILL: &str = "rgba(255, 215, 0, 0.9)";

pub struct Renderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    win_x: f64,
}

impl Renderer {
    pub fn new(canvas: &HtmlCanvasElement, config: &Config) -> Result<Self, JsValue> {
        canvas.set_width(config.canvas_width as u32);
        canvas.set_height(config.canvas_height as u32);
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            width: config.canvas_width as f64,
            height: config.canvas_height as f64,
            win_x: config.win_x as f64,
        })
    }

    /// Draw one frame of the scene. Ticks the level-up banner countdown for
    /// each frame the overlay is actually shown.
    pub fn draw(
        &self,
        kid: &Kid,
        grandma: &Grandma,
        bag: &Bag,
        levels: &mut LevelState,
        sprites: &Sprites,
    ) -> Result<(), JsValue> {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
        self.ctx.set_fill_style_str(BACKGROUND);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);

        self.draw_goal_line()?;
        self.draw_bag(kid, grandma, bag, sprites)?;
        self.draw_kid(kid, sprites)?;
        self.draw_grandma(grandma, sprites)?;

        if levels.banner_active() {
            self.draw_banner(levels.level)?;
            levels.tick_banner();
        }

        Ok(())
    }

    /// Dashed vertical line at the fixed win position
    fn draw_goal_line(&self) -> Result<(), JsValue> {
        self.ctx.set_stroke_style_str(GOAL_LINE);
        self.ctx.set_line_width(4.0);
        let dash = js_sys::Array::of2(&JsValue::from_f64(10.0), &JsValue::from_f64(10.0));
        self.ctx.set_line_dash(&dash)?;
        self.ctx.begin_path();
        self.ctx.move_to(self.win_x, 0.0);
        self.ctx.line_to(self.win_x, self.height);
        self.ctx.stroke();
        self.ctx.set_line_dash(&js_sys::Array::new())?;
        Ok(())
    }

    /// Arm from the bag to grandma's fist, then the bag sprite on top
    fn draw_bag(
        &self,
        kid: &Kid,
        grandma: &Grandma,
        bag: &Bag,
        sprites: &Sprites,
    ) -> Result<(), JsValue> {
        let pos = Bag::position(kid, grandma);
        let hand = grandma.hand();
        // Grandma grips the far edge of the bag
        let grip_x = (pos.x + bag.size.x) as f64;
        let grip_y = (pos.y + 15.0) as f64;

        // Wider black border stroke under the skin-colored arm
        self.ctx.set_line_cap("round");
        self.ctx.set_stroke_style_str(ARM_BORDER);
        self.ctx.set_line_width(12.0);
        self.ctx.begin_path();
        self.ctx.move_to(grip_x, grip_y);
        self.ctx.line_to(hand.x as f64, hand.y as f64);
        self.ctx.stroke();

        self.ctx.set_stroke_style_str(ARM_SKIN);
        self.ctx.set_line_width(8.0);
        self.ctx.begin_path();
        self.ctx.move_to(grip_x, grip_y);
        self.ctx.line_to(hand.x as f64, hand.y as f64);
        self.ctx.stroke();

        if sprites.all_loaded() {
            self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                &sprites.bag,
                (pos.x - 10.0) as f64,
                (pos.y - 10.0) as f64,
                50.0,
                50.0,
            )?;
        }
        Ok(())
    }

    fn draw_kid(&self, kid: &Kid, sprites: &Sprites) -> Result<(), JsValue> {
        if sprites.all_loaded() {
            self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                &sprites.kid,
                (kid.pos.x - 20.0) as f64,
                (kid.pos.y - 10.0) as f64,
                80.0,
                80.0,
            )?;
        }
        Ok(())
    }

    fn draw_grandma(&self, grandma: &Grandma, sprites: &Sprites) -> Result<(), JsValue> {
        if sprites.all_loaded() {
            self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                &sprites.grandma,
                (grandma.pos.x - 30.0) as f64,
                (grandma.pos.y - 30.0) as f64,
                100.0,
                100.0,
            )?;
        }
        Ok(())
    }

    /// Centered outlined text announcing the new level
    fn draw_banner(&self, level: u32) -> Result<(), JsValue> {
        let text = format!("Level {level}!");
        let cx = self.width / 2.0;
        let cy = self.height / 2.0;

        self.ctx.save();
        self.ctx.set_fill_style_str(BANNER_FILL);
        self.ctx.set_stroke_style_str(ARM_BORDER);
        self.ctx.set_line_width(3.0);
        self.ctx.set_font("bold 48px Arial");
        self.ctx.set_text_align("center");
        self.ctx.stroke_text(&text, cx, cy)?;
        self.ctx.fill_text(&text, cx, cy)?;
        self.ctx.restore();
        Ok(())
    }
}
