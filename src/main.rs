use anyhow::Result;
use macroquad::prelude::*;

use snake_arcade::app::App;
use snake_arcade::config::GameConfig;
use snake_arcade::game::WINDOW_SIDE;

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake Game".to_owned(),
        window_width: WINDOW_SIDE,
        window_height: WINDOW_SIDE,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(err) = run().await {
        error!("startup failed: {:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = GameConfig::default();

    info!("starting snake");
    let mut app = App::new(config).await?;
    app.run().await;

    Ok(())
}
