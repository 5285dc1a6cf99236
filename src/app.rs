use cgmath::{Deg, Vector3};
use rand::Rng;
use simple_logger::SimpleLogger;
use log::LevelFilter;

use crate::actors::Actor;
use crate::config::AppConfig;
use crate::graphics::{DrawList, RenderTarget};
use crate::objects::{Shape, Triangle};
use crate::scene::Scene;
use crate::time::{Clock, FixedClock, RealtimeClock};
use crate::utils::Result;

/// Installs the global logger. `RUST_LOG` takes precedence over `level`.
pub fn init_logging(level: LevelFilter) -> Result<()> {
    SimpleLogger::new()
        .with_level(level)
        .env()
        .init()?;

    Ok(())
}

/// The frame driver: asks the clock for a delta, updates the scene, then
/// redraws it into the draw list.
pub struct App {
    config: AppConfig,
    scene: Scene,
    clock: Box<dyn Clock>,
    target: DrawList,
    frame_count: u64,
}

impl App {
    pub fn new(config: AppConfig) -> Result<App> {
        config.validate()?;

        let clock: Box<dyn Clock> = match config.timestep {
            Some(timestep) => Box::new(FixedClock::new(timestep)),
            None => Box::new(RealtimeClock::new()),
        };

        Ok(App::with_clock(config, clock))
    }

    pub fn with_clock(config: AppConfig, clock: Box<dyn Clock>) -> App {
        App {
            config: config,
            scene: Scene::new(),
            clock: clock,
            target: DrawList::new(),
            frame_count: 0,
        }
    }

    pub fn config(&self) -> &AppConfig { &self.config }
    pub fn scene(&self) -> &Scene { &self.scene }
    pub fn scene_mut(&mut self) -> &mut Scene { &mut self.scene }
    pub fn target(&self) -> &DrawList { &self.target }

    /// Frames run since the app was created.
    pub fn frame_count(&self) -> u64 { self.frame_count }

    /// Adds `count` randomly placed, drifting and spinning shapes.
    pub fn spawn_demo_shapes(&mut self, count: usize) {
        let mut rng = rand::thread_rng();

        for _ in 0..count {
            let color = [rng.gen(), rng.gen(), rng.gen(), 1.0];
            let mut shape = Shape::new(vec![Triangle::equilateral(rng.gen_range(0.25..1.0))], color)
                .with_velocity(Vector3::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0), 0.0))
                .with_angular_velocity(Deg(rng.gen_range(-180.0f32..180.0)));

            shape.transformable_mut().set_position(Vector3::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0), 0.0));

            self.scene.add(shape);
        }

        debug!("Spawned {} demo shapes", count);
    }

    /// Runs until the clock runs out or the frame limit is reached and
    /// returns the number of frames run by this call.
    pub fn run(&mut self) -> u64 {
        info!("Running \"{}\" with {} actors", self.config.title, self.scene.len());

        let frames = self.main_loop();

        info!("Stopped after {} frames", frames);
        frames
    }

    fn main_loop(&mut self) -> u64 {
        let mut frames = 0;

        while self.config.frame_limit.map_or(true, |limit| frames < limit) {
            let delta_time = match self.clock.tick() {
                Some(delta_time) => delta_time,
                None => break,
            };

            self.draw_frame(delta_time);
            frames += 1;
        }

        frames
    }

    fn draw_frame(&mut self, delta_time: f32) {
        self.scene.update(delta_time);

        self.target.clear(self.config.clear_color);
        self.scene.draw(&mut self.target);

        self.frame_count += 1;
        debug!("Frame {}: dt {:.4}s, {} draw commands, {} vertices",
               self.frame_count, delta_time, self.target.len(), self.target.vertex_count());
    }
}
