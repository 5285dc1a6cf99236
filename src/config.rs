use std::ffi::OsString;

use clap::Parser;
use log::LevelFilter;

use crate::time::DEFAULT_TIMESTEP;
use crate::utils::{Error, ErrorKind, Result};

/// Settings of the demo application.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub title: String,
    /// Stop after this many frames; `None` runs until the clock runs out.
    pub frame_limit: Option<u64>,
    /// Fixed seconds per frame; `None` measures wall time.
    pub timestep: Option<f32>,
    pub actor_count: usize,
    pub clear_color: [f32; 4],
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            title: "gameproject".to_string(),
            frame_limit: Some(600),
            timestep: Some(DEFAULT_TIMESTEP),
            actor_count: 8,
            clear_color: [0.0, 0.0, 0.0, 1.0],
            log_level: LevelFilter::Info,
        }
    }
}

/// Frame timing picked on the command line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Timestep {
    Fixed(f32),
    Realtime,
}

fn parse_timestep(value: &str) -> std::result::Result<Timestep, String> {
    if value == "realtime" {
        return Ok(Timestep::Realtime);
    }

    value.parse()
        .map(Timestep::Fixed)
        .map_err(|_| format!("expected seconds or \"realtime\", got \"{}\"", value))
}

fn parse_level(value: &str) -> std::result::Result<LevelFilter, String> {
    value.parse()
        .map_err(|_| format!("\"{}\" is not a log level", value))
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Name shown in the log
    #[arg(long)]
    pub title: Option<String>,

    /// Frames to run, 0 for no limit
    #[arg(long)]
    pub frames: Option<u64>,

    /// Seconds per frame, or "realtime" to follow the wall clock
    #[arg(long, value_parser = parse_timestep)]
    pub timestep: Option<Timestep>,

    /// Number of demo shapes to spawn
    #[arg(long)]
    pub actors: Option<usize>,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, value_parser = parse_level)]
    pub log: Option<LevelFilter>,
}

impl Cli {
    /// Fills in the defaults and validates the result.
    pub fn into_config(self) -> Result<AppConfig> {
        let mut config = AppConfig::default();

        if let Some(title) = self.title {
            config.title = title;
        }
        if let Some(frames) = self.frames {
            config.frame_limit = if frames == 0 { None } else { Some(frames) };
        }
        if let Some(timestep) = self.timestep {
            config.timestep = match timestep {
                Timestep::Fixed(seconds) => Some(seconds),
                Timestep::Realtime => None,
            };
        }
        if let Some(actors) = self.actors {
            config.actor_count = actors;
        }
        if let Some(level) = self.log {
            config.log_level = level;
        }

        config.validate()?;
        Ok(config)
    }
}

impl AppConfig {
    /// Builds a configuration from a full command line, program name first.
    pub fn from_args<I, T>(args: I) -> Result<AppConfig>
        where I: IntoIterator<Item = T>,
              T: Into<OsString> + Clone
    {
        Cli::try_parse_from(args)?.into_config()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(timestep) = self.timestep {
            if !(timestep.is_finite() && timestep > 0.0) {
                return Err(Error::new(ErrorKind::InvalidArgument, format!("Timestep must be a positive number of seconds, got {}", timestep)));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(list: &[&str]) -> Result<AppConfig> {
        AppConfig::from_args(std::iter::once("gameproject").chain(list.iter().cloned()))
    }

    #[test]
    fn no_arguments_gives_defaults() {
        assert_eq!(parse(&[]).unwrap(), AppConfig::default());
    }

    #[test]
    fn parses_every_flag() {
        let config = parse(&[
            "--title", "demo",
            "--frames", "3",
            "--timestep", "0.5",
            "--actors", "2",
            "--log", "debug",
        ]).unwrap();

        assert_eq!(config.title, "demo");
        assert_eq!(config.frame_limit, Some(3));
        assert_eq!(config.timestep, Some(0.5));
        assert_eq!(config.actor_count, 2);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn zero_frames_and_realtime_lift_limits() {
        let config = parse(&["--frames", "0", "--timestep", "realtime"]).unwrap();
        assert_eq!(config.frame_limit, None);
        assert_eq!(config.timestep, None);
    }

    #[test]
    fn timestep_accepts_seconds_or_realtime() {
        assert_eq!(parse_timestep("0.25"), Ok(Timestep::Fixed(0.25)));
        assert_eq!(parse_timestep("realtime"), Ok(Timestep::Realtime));
        assert!(parse_timestep("fast").is_err());
    }

    #[test]
    fn reports_bad_arguments() {
        let kind = |list: &[&str]| parse(list).unwrap_err().kind();

        assert_eq!(kind(&["--frames"]), ErrorKind::InvalidArgument);
        assert_eq!(kind(&["--frames", "many"]), ErrorKind::InvalidArgument);
        assert_eq!(kind(&["--timestep=-1"]), ErrorKind::InvalidArgument);
        assert_eq!(kind(&["--timestep", "fast"]), ErrorKind::InvalidArgument);
        assert_eq!(kind(&["--log", "loud"]), ErrorKind::InvalidArgument);
        assert_eq!(kind(&["--fullscreen"]), ErrorKind::InvalidArgument);
    }

    #[test]
    fn command_line_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
