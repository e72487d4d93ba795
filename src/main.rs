use std::io;

use log::{error, info};

use astro_shooter::assets::AssetRoot;
use astro_shooter::config::Config;
use astro_shooter::game::Game;
use astro_shooter::terminal_io::{SimulatedInput, TerminalHost};

fn main() -> io::Result<()> {
    let config = Config::from_env()?;
    simple_logging::log_to_file(&config.log_file, config.log_level)?;
    info!("Starting Astro Shooter with {:?}", config);

    let mut host = if config.debug {
        info!("Debug mode enabled.");
        TerminalHost::headless(SimulatedInput::demo())
    } else {
        TerminalHost::interactive()?
    };

    let mut game = Game::new(&mut host, AssetRoot::new(&config.asset_root), config.seed);
    let result = game.run(&mut host, config.max_frames);
    if let Err(e) = &result {
        error!("Game loop aborted: {}", e);
    }

    // Dropping the host restores the terminal before the process exits.
    drop(host);
    info!("Exiting after {} frames with score {}.", game.world.frame_count, game.world.score);
    result
}
