use crate::actors::{self, Actor, ActorRef};
use crate::graphics::{RenderStates, RenderTarget};
use crate::interfaces::SceneAccess;
use crate::utils::{Error, ErrorKind, Result};

/// Owns the actors of a level and drives them each frame.
///
/// Actors are visited in insertion order, and the scene is the only place
/// where `Drawable::draw` can be called from.
#[derive(Debug, Default)]
pub struct Scene {
    actors: Vec<ActorRef>,
}

impl Scene {
    pub fn new() -> Self
    {
        Scene { actors: Vec::new() }
    }

    /// Shares `actor`, stores it and returns the typed handle.
    pub fn add<A: Actor>(&mut self, actor: A) -> ActorRef<A>
    {
        let actor = actors::share(actor);
        self.actors.push(actor.clone().into_dyn());
        debug!("Added actor {:?} ({} on scene)", actor, self.actors.len());
        actor
    }

    /// Stores an actor that is already shared. Inserting the same actor twice
    /// keeps a single entry.
    pub fn insert(&mut self, actor: ActorRef)
    {
        if self.contains(&actor) {
            warn!("Actor {:?} is already on the scene", actor);
            return;
        }

        self.actors.push(actor);
        debug!("Inserted actor ({} on scene)", self.actors.len());
    }

    pub fn remove<T: ?Sized>(&mut self, actor: &ActorRef<T>) -> Result<ActorRef>
    {
        let index = self.actors.iter()
            .position(|a| a.ptr_eq(actor))
            .ok_or_else(|| Error::new(ErrorKind::ActorNotFound, format!("Actor {:p} is not on the scene", actor.identity())))?;

        let removed = self.actors.remove(index);
        debug!("Removed actor {:?} ({} left)", removed, self.actors.len());
        Ok(removed)
    }

    pub fn contains<T: ?Sized>(&self, actor: &ActorRef<T>) -> bool
    {
        self.actors.iter().any(|a| a.ptr_eq(actor))
    }

    pub fn len(&self) -> usize
    {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.actors.is_empty()
    }

    pub fn clear(&mut self)
    {
        self.actors.clear();
    }

    pub fn actors(&self) -> &[ActorRef]
    {
        &self.actors
    }

    /// First actor whose concrete type is `T`.
    pub fn find<T: Actor>(&self) -> Option<ActorRef<T>>
    {
        self.actors.iter()
            .find_map(|a| a.downcast::<T>())
    }

    pub fn find_all<T: Actor>(&self) -> Vec<ActorRef<T>>
    {
        self.actors.iter()
            .filter_map(|a| a.downcast::<T>())
            .collect()
    }

    /// Updates every actor once with `delta_time` seconds.
    pub fn update(&mut self, delta_time: f32)
    {
        // Snapshot so the scene's own borrow is released while actors run.
        let actors = self.actors.clone();
        for actor in &actors {
            actor.borrow_mut().update(delta_time);
        }
        trace!("Updated {} actors by {}s", actors.len(), delta_time);
    }

    pub fn draw(&self, target: &mut dyn RenderTarget)
    {
        self.draw_with(target, RenderStates::default())
    }

    /// Draws every actor with `states` as the base states.
    pub fn draw_with(&self, target: &mut dyn RenderTarget, states: RenderStates)
    {
        let access = SceneAccess::new();
        for actor in &self.actors {
            actor.borrow().draw(target, states, &access);
        }
    }
}
