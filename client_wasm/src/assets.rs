//! Sprite loading
//!
//! The three SVG sprites load asynchronously; the renderer skips image draws
//! until every onload callback has fired. A slow or failed load is never
//! fatal, the scene just renders without sprites.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

const TOTAL_SPRITES: u32 = 3;

pub struct Sprites {
    pub kid: HtmlImageElement,
    pub grandma: HtmlImageElement,
    pub bag: HtmlImageElement,
    loaded: Rc<Cell<u32>>,
}

impl Sprites {
    pub fn load() -> Result<Self, JsValue> {
        let loaded = Rc::new(Cell::new(0));
        Ok(Self {
            kid: load_image("kid.svg", &loaded)?,
            grandma: load_image("grandma.svg", &loaded)?,
            bag: load_image("moneybag.svg", &loaded)?,
            loaded,
        })
    }

    pub fn all_loaded(&self) -> bool {
        self.loaded.get() >= TOTAL_SPRITES
    }
}

fn load_image(src: &str, loaded: &Rc<Cell<u32>>) -> Result<HtmlImageElement, JsValue> {
    let image = HtmlImageElement::new()?;

    let counter = loaded.clone();
    let name = src.to_owned();
    let closure = Closure::<dyn FnMut()>::new(move || {
        counter.set(counter.get() + 1);
        log::info!("Loaded sprite {name} ({}/{TOTAL_SPRITES})", counter.get());
    });
    image.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    image.set_src(src);
    Ok(image)
}
