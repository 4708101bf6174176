use anyhow::{anyhow, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use std::time::{Duration, Instant};
use typed_builder::TypedBuilder;

pub use sdl2;
pub use snake_common;
pub use snake_common::app::App;

use snake_common::key::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    RGB24,
}

#[derive(TypedBuilder)]
pub struct SdlInitInfo {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub title: String,
    #[builder(default = PixelFormat::RGB24)]
    pub pixel_format: PixelFormat,
    #[builder(default = true)]
    pub resizable: bool,
    #[builder(default = 60)]
    pub target_fps: u32,
}

impl SdlInitInfo {
    /// Wall time budget for a single frame.
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps.max(1)
    }
}

pub struct SdlContext;

impl SdlContext {
    pub fn run(sdl_init_info: SdlInitInfo, mut app: impl App) -> Result<()> {
        let target_frame = sdl_init_info.frame_budget();
        let SdlInitInfo {
            width,
            height,
            scale,
            title,
            pixel_format,
            resizable,
            ..
        } = sdl_init_info;

        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let mut window_builder = video_subsystem.window(&title, width * scale, height * scale);
        window_builder.position_centered();
        if resizable {
            window_builder.resizable();
        }
        let window = window_builder.build()?;

        let mut canvas = window.into_canvas().present_vsync().build()?;
        // Keeps the aspect ratio when the window is resized.
        canvas.set_logical_size(width, height)?;
        let creator = canvas.texture_creator();
        let mut texture =
            creator.create_texture_streaming(map_pixel_format(pixel_format), width, height)?;

        let color_size = map_pixel_format_size(pixel_format);
        let mut screen_state = vec![0u8; (width * color_size * height) as usize];
        let mut event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;

        log::info!(
            "SDL2 window '{}' {}x{} (scale {}, {:?})",
            title,
            width,
            height,
            scale,
            pixel_format
        );

        app.init();
        let mut last_frame = Instant::now();
        loop {
            if app.should_exit() {
                app.exit();
                break;
            }

            for event in event_pump.poll_iter() {
                match event {
                    Event::Quit { .. } => {
                        app.exit();
                        return Ok(());
                    }
                    Event::KeyDown {
                        keycode: Some(keycode),
                        repeat: false,
                        ..
                    } => {
                        let key = map_keycode(keycode);
                        app.handle_key_event(key, true);
                    }
                    Event::KeyUp {
                        keycode: Some(keycode),
                        ..
                    } => {
                        let key = map_keycode(keycode);
                        app.handle_key_event(key, false);
                    }
                    _ => {}
                }
            }

            let now = Instant::now();
            let delta = now.duration_since(last_frame);
            last_frame = now;

            app.update(delta, &mut screen_state);

            texture.update(None, &screen_state, (width * color_size) as usize)?;
            canvas.clear();
            canvas.copy(&texture, None, None).map_err(|e| anyhow!(e))?;
            canvas.present();

            let spent = last_frame.elapsed();
            if spent < target_frame {
                std::thread::sleep(target_frame - spent);
            }
        }

        Ok(())
    }
}

pub fn map_pixel_format(pixel_format: PixelFormat) -> PixelFormatEnum {
    match pixel_format {
        PixelFormat::RGB24 => PixelFormatEnum::RGB24,
    }
}

pub fn map_pixel_format_size(pixel_format: PixelFormat) -> u32 {
    match pixel_format {
        PixelFormat::RGB24 => 3,
    }
}

pub fn map_keycode(keycode: Keycode) -> Key {
    match keycode {
        Keycode::W => Key::W,
        Keycode::A => Key::A,
        Keycode::S => Key::S,
        Keycode::D => Key::D,
        Keycode::P => Key::P,
        Keycode::Left => Key::Left,
        Keycode::Right => Key::Right,
        Keycode::Up => Key::Up,
        Keycode::Down => Key::Down,
        Keycode::Return | Keycode::KpEnter => Key::Enter,
        Keycode::Escape => Key::Escape,
        _ => Key::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_budget_follows_target_fps() {
        let info = SdlInitInfo::builder()
            .width(800)
            .height(800)
            .scale(1)
            .title("Snake".to_string())
            .build();
        assert_eq!(info.target_fps, 60);
        assert!(info.resizable);
        assert_eq!(info.frame_budget(), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn keycodes_map_to_both_bindings() {
        assert_eq!(map_keycode(Keycode::Left), Key::Left);
        assert_eq!(map_keycode(Keycode::A), Key::A);
        assert_eq!(map_keycode(Keycode::Return), Key::Enter);
        assert_eq!(map_keycode(Keycode::F12), Key::None);
        assert_eq!(map_keycode(Keycode::Space), Key::None);
    }
}
