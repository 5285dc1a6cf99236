extern crate cgmath;
extern crate clap;
extern crate downcast_rs;
extern crate rand;
extern crate simple_logger;
#[macro_use]
extern crate log;

pub mod actors;
pub mod app;
pub mod config;
pub mod graphics;
pub mod interfaces;
pub mod objects;
pub mod scene;
pub mod time;
pub mod utils;

pub use crate::actors::{share, Actor, ActorCore, ActorRef, ActorView, Transformable, WeakActorRef, WeakActorView};
pub use crate::app::App;
pub use crate::config::AppConfig;
pub use crate::graphics::{DrawList, RenderStates, RenderTarget, Transform};
pub use crate::interfaces::{Drawable, SceneAccess, Updatable};
pub use crate::scene::Scene;
