use anyhow::Context;
use game::Game;
use gridcast::{Config, Grid};
use sdl2::event::Event;
use std::time::{Duration, Instant};

mod game;

const CONFIG_PATH: &str = "gridcast.toml";

// helper trait to convert strings into std::error types
trait StringToAnyhow<T> {
    fn ah(self) -> anyhow::Result<T>;
}

impl<T> StringToAnyhow<T> for Result<T, String> {
    fn ah(self) -> anyhow::Result<T> {
        self.map_err(|err| anyhow::anyhow!("{err}"))
    }
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init_custom_env("GRIDCAST_LOG");

    let config_path = std::env::args().nth(1);
    let config = match &config_path {
        Some(path) => Config::load(path).with_context(|| format!("loading config {path}"))?,
        None => Config::load_or_default(CONFIG_PATH),
    };
    let grid = Grid::load(&config.map.path, config.screen.dimension)
        .with_context(|| format!("loading grid {}", config.map.path))?;
    let dimension = grid.screen_dimension() as u32;

    // sdl boilerplate
    log::info!("initializing sdl2");
    let sdl_ctx = sdl2::init().ah()?;
    log::info!("initializing video");
    let video = sdl_ctx.video().ah()?;

    log::info!("initializing window");
    let window = video
        .window(&config.window.title, dimension * 2, dimension)
        .position_centered()
        .build()?;
    log::info!("creating canvas");
    let canvas = window.into_canvas().build()?;
    let mut events = sdl_ctx.event_pump().ah()?;

    log::info!("initializing game state");
    let delta = Duration::from_millis(1_000 / config.window.target_fps.max(1));
    let mut game = Game::new(grid, config, canvas);

    'main_loop: loop {
        let prev = Instant::now();

        for ev in events.poll_iter() {
            match ev {
                Event::Quit { .. } => break 'main_loop,
                Event::KeyDown {
                    keycode: Some(k), ..
                } => {
                    game.key(k);
                    game.update = true;
                }
                _ => {}
            }
        }

        if !game.running {
            break;
        }

        if game.update {
            if let Err(err) = game.draw() {
                log::error!("error while drawing frame: {err}");
                Err(err)?;
            }
            game.canvas.present();
            game.update = false;
        }

        let diff = prev.elapsed();
        if diff < delta {
            std::thread::sleep(delta - diff);
        }
    }

    log::info!("exiting");
    Ok(())
}
