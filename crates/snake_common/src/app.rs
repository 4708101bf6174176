use crate::key::Key;
use std::time::Duration;

/// A program that a frontend can host.
///
/// The frontend owns the window and the event loop. Once per frame it forwards
/// key events, then calls [`App::update`] with the wall time elapsed since the
/// previous frame and an RGB24 framebuffer of `width() * height()` pixels.
pub trait App {
    fn init(&mut self);
    fn update(&mut self, delta: Duration, screen: &mut [u8]);
    fn handle_key_event(&mut self, key: Key, is_down: bool);
    fn should_exit(&self) -> bool;
    fn exit(&mut self);

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn scale(&self) -> u32;
    fn title(&self) -> String;
}
