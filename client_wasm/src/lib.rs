//! Canvas 2D client for the bag tug-of-war
//!
//! Owns the simulation world and resources, feeds keyboard input into the
//! mash tracker, and drives update-then-render once per animation frame.

#![cfg(target_arch = "wasm32")]

mod assets;
mod hud;
mod input;
mod renderer;

use std::cell::RefCell;
use std::rc::Rc;

use assets::Sprites;
use game_core::*;
use hecs::World;
use hud::Hud;
use renderer::Renderer;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, KeyboardEvent};

struct Game {
    world: World,
    tracker: MashTracker,
    levels: LevelState,
    progress: Progress,
    events: Events,
    config: Config,
    sprites: Sprites,
    renderer: Renderer,
    hud: Hud,
}

impl Game {
    fn new(canvas: &HtmlCanvasElement, document: &Document) -> Result<Self, JsValue> {
        let config = Config::new();
        let mut world = World::new();
        create_kid(&mut world, &config);
        create_grandma(&mut world);
        create_bag(&mut world);

        Ok(Self {
            world,
            tracker: MashTracker::new(),
            levels: LevelState::new(&config),
            progress: Progress::new(),
            events: Events::new(),
            sprites: Sprites::load()?,
            renderer: Renderer::new(canvas, &config)?,
            hud: Hud::new(document)?,
            config,
        })
    }

    /// One animation frame: step the simulation, then draw
    fn frame(&mut self) -> Result<(), JsValue> {
        step(
            &mut self.world,
            &mut self.tracker,
            &mut self.levels,
            &mut self.progress,
            &mut self.events,
            &self.config,
        );

        if self.events.leveled_up {
            log::info!("Level up! Now at level {}", self.levels.level);
        }

        let kid = self.snapshot::<Kid>()?;
        let grandma = self.snapshot::<Grandma>()?;
        let bag = self.snapshot::<Bag>()?;
        self.renderer
            .draw(&kid, &grandma, &bag, &mut self.levels, &self.sprites)?;
        self.hud.update(self.levels.level, self.progress.percent);
        Ok(())
    }

    /// Copy the single entity carrying component T out of the world
    fn snapshot<T: hecs::Component + Copy>(&self) -> Result<T, JsValue> {
        self.world
            .query::<&T>()
            .iter()
            .next()
            .map(|(_entity, c)| *c)
            .ok_or_else(|| JsValue::from_str("game entity missing"))
    }

    fn key_down(&mut self, event: &KeyboardEvent) {
        if let Some(key) = input::parse_mash_key(&event.key()) {
            event.prevent_default();
            self.tracker.key_down(key, event.repeat(), &self.config);
        }
    }

    fn key_up(&self, event: &KeyboardEvent) {
        // Arrows still scroll on keyup in some browsers
        if input::parse_mash_key(&event.key()).is_some() {
            event.prevent_default();
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Wire up the game on the given canvas and start the animation loop
#[wasm_bindgen]
pub fn run(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let game = Rc::new(RefCell::new(Game::new(&canvas, &document)?));
    attach_key_listeners(&document, game.clone())?;

    log::info!("bag-tug running");
    request_frame(game)
}

fn attach_key_listeners(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            game.borrow_mut().key_down(&event);
        });
        document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            game.borrow().key_up(&event);
        });
        document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn request_frame(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let closure = Closure::once(move |_time: f64| {
        game_loop(game);
    });
    window.request_animation_frame(closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn game_loop(game: Rc<RefCell<Game>>) {
    if let Err(e) = game.borrow_mut().frame() {
        log::error!("Frame failed: {e:?}");
    }
    if let Err(e) = request_frame(game) {
        log::error!("Failed to schedule next frame: {e:?}");
    }
}
