use anyhow::Result;
use snake_game::{GameConfig, SnakeApp};
use snake_sdl2::App;
use snake_sdl2::{SdlContext, SdlInitInfo};

pub fn run(config: GameConfig) -> Result<()> {
    let app = SnakeApp::new(config)?;
    let init_info = SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .scale(app.scale())
        .title(app.title())
        .build();
    SdlContext::run(init_info, app)?;
    Ok(())
}
