use crate::app::SnakeApp;
use crate::config::GameConfig;
use crate::game::Game;
use snake_common::app::App;
use snake_common::key::Key;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::Clamped;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData, KeyboardEvent};

/// Browser host for the game, drawing into `<canvas id="canvas">`.
///
/// The page drives it from `requestAnimationFrame`: `tick()` then
/// `draw_screen()`, and forwards `keydown`/`keyup` to `set_key`.
#[wasm_bindgen]
pub struct SnakeWasm {
    app: SnakeApp,
    ctx: CanvasRenderingContext2d,
    screen: Vec<u8>,
    rgba: Vec<u8>,
    last_tick_ms: Option<f64>,
}

#[wasm_bindgen]
impl SnakeWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<SnakeWasm, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no #canvas element"))?
            .dyn_into::<HtmlCanvasElement>()?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let app = SnakeApp::new(GameConfig::default()).map_err(to_js)?;
        canvas.set_width(app.width());
        canvas.set_height(app.height());
        let pixels = (app.width() * app.height()) as usize;

        let mut wasm = SnakeWasm {
            app,
            ctx,
            screen: vec![0; pixels * 3],
            rgba: vec![0xff; pixels * 4],
            last_tick_ms: None,
        };
        wasm.app.init();
        Ok(wasm)
    }

    /// Advances the game by the wall time since the previous call, read
    /// from `Date.now()`. The first call advances by zero.
    #[wasm_bindgen]
    pub fn tick(&mut self) {
        let now = js_sys::Date::now();
        let delta = frame_delta(self.last_tick_ms, now);
        self.last_tick_ms = Some(now);
        self.app.update(delta, &mut self.screen);
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) -> Result<(), JsValue> {
        let config = self.app.game.config().clone();
        self.app = SnakeApp::with_game(Game::new(config).map_err(to_js)?);
        self.last_tick_ms = None;
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_key(&mut self, evt: KeyboardEvent, pressed: bool) {
        if evt.repeat() {
            return;
        }
        if let Some(key) = key2btn(&evt.key()) {
            self.app.handle_key_event(key, pressed);
        }
    }

    #[wasm_bindgen]
    pub fn should_exit(&self) -> bool {
        self.app.should_exit()
    }

    #[wasm_bindgen]
    pub fn draw_screen(&mut self) -> Result<(), JsValue> {
        for (rgb, rgba) in self
            .screen
            .chunks_exact(3)
            .zip(self.rgba.chunks_exact_mut(4))
        {
            rgba[..3].copy_from_slice(rgb);
        }
        let image = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(&self.rgba[..]),
            self.app.width(),
            self.app.height(),
        )?;
        self.ctx.put_image_data(&image, 0.0, 0.0)
    }
}

fn to_js(err: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{err:#}"))
}

/// Time between two `Date.now()` readings; clocks stepping backwards count
/// as zero.
fn frame_delta(last_ms: Option<f64>, now_ms: f64) -> Duration {
    let dt_ms = last_ms.map_or(0.0, |last| (now_ms - last).max(0.0));
    Duration::from_secs_f64(dt_ms / 1000.0)
}

fn key2btn(key: &str) -> Option<Key> {
    match key {
        "w" | "W" => Some(Key::W),
        "a" | "A" => Some(Key::A),
        "s" | "S" => Some(Key::S),
        "d" | "D" => Some(Key::D),
        "p" | "P" => Some(Key::P),
        "ArrowLeft" => Some(Key::Left),
        "ArrowRight" => Some(Key::Right),
        "ArrowUp" => Some(Key::Up),
        "ArrowDown" => Some(Key::Down),
        "Enter" => Some(Key::Enter),
        "Escape" => Some(Key::Escape),
        _ => None,
    }
}
