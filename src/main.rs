use macroquad::prelude::*;
use life_wasm::{
    LifeConfig, Simulation,
    domain::{SCREEN_HEIGHT, SCREEN_WIDTH},
    rendering,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Read the JSON file named by `LIFE_CONFIG`, falling back to defaults
#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> LifeConfig {
    let Ok(path) = std::env::var("LIFE_CONFIG") else {
        return LifeConfig::default();
    };
    let loaded = std::fs::read_to_string(&path)
        .map_err(life_wasm::ConfigError::from)
        .and_then(|json| LifeConfig::from_json(&json));

    match loaded {
        Ok(config) => {
            log::info!("Loaded config from {}", path);
            config
        }
        Err(err) => {
            log::warn!("Ignoring config {}: {}", path, err);
            LifeConfig::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> LifeConfig {
    LifeConfig::default()
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let config = load_config();
    let show_stats = config.show_stats;

    // Seed from the wall clock, like srand(time(NULL))
    let clock_seed = (macroquad::miniquad::date::now() * 1000.0) as u64;
    let mut sim = Simulation::seeded(config, clock_seed);

    let mut image = Image::gen_image_color(SCREEN_WIDTH as u16, SCREEN_HEIGHT as u16, BLACK);
    let texture = Texture2D::from_image(&image);
    texture.set_filter(FilterMode::Nearest);

    // next_frame() hands control back to the host scheduler once per tick
    loop {
        sim.tick(&mut image);
        rendering::present(&image, &texture);
        if show_stats {
            rendering::draw_stats(sim.generation(), sim.population());
        }

        next_frame().await;
    }
}
