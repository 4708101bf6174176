use snake_game::GameConfig;

fn main() {
    env_logger::init();

    if let Err(err) = snake::run(GameConfig::default()) {
        log::error!("{:#}", err);
        eprintln!("snake: {:#}", err);
        std::process::exit(1);
    }
}
