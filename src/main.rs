extern crate gameproject;

use clap::Parser;

use gameproject::app;
use gameproject::config::Cli;
use gameproject::App;
use gameproject::utils::Result;

fn run() -> Result<u64> {
    let config = Cli::parse().into_config()?;
    app::init_logging(config.log_level)?;

    let actor_count = config.actor_count;
    let mut app = App::new(config)?;
    app.spawn_demo_shapes(actor_count);

    Ok(app.run())
}

fn main() {
    match run() {
        Ok(_) => {},
        Err(error) => {
            println!("Unexpected error running program: {}\nExiting", error);
            std::process::exit(1);
        },
    };
}
