//! DOM scoreboard: current level and progress percentage

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

pub struct Hud {
    level_el: Element,
    progress_el: Element,
    last_level: u32,
    last_percent: u8,
}

impl Hud {
    pub fn new(document: &Document) -> Result<Self, JsValue> {
        let level_el = document
            .get_element_by_id("level")
            .ok_or_else(|| JsValue::from_str("missing #level element"))?;
        let progress_el = document
            .get_element_by_id("progress")
            .ok_or_else(|| JsValue::from_str("missing #progress element"))?;
        Ok(Self {
            level_el,
            progress_el,
            last_level: 0,
            last_percent: u8::MAX,
        })
    }

    /// Push level and progress to the DOM, skipping unchanged values
    pub fn update(&mut self, level: u32, percent: u8) {
        if level != self.last_level {
            self.level_el.set_text_content(Some(&level.to_string()));
            self.last_level = level;
        }
        if percent != self.last_percent {
            self.progress_el.set_text_content(Some(&percent.to_string()));
            self.last_percent = percent;
        }
    }
}
