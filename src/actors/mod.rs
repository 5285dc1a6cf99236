//! Actors: everything that can exist on a scene.
//!
//! A concrete actor embeds an `ActorCore` and implements `Actor`,
//! `Updatable` and `Drawable`. It stays a plain value until `share` (or
//! `Scene::add`) moves it into shared ownership; only from then on do the
//! self-reference accessors return anything.

mod transformable;
mod pointers;

pub use self::transformable::Transformable;
pub use self::pointers::{ActorRef, ActorView, WeakActorRef, WeakActorView};

use std::any::{Any, type_name};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use downcast_rs::{impl_downcast, Downcast};

use crate::graphics::Transform;
use crate::interfaces::{Drawable, Updatable};

/// State every actor carries: its transform and a weak handle to itself.
pub struct ActorCore {
    transformable: Transformable,
    this: Option<Weak<RefCell<dyn Actor>>>,
    this_any: Option<Weak<dyn Any>>,
}

impl ActorCore {
    pub fn new() -> Self
    {
        ActorCore::with_transformable(Transformable::new())
    }

    pub fn with_transformable(transformable: Transformable) -> Self
    {
        ActorCore {
            transformable: transformable,
            this: None,
            this_any: None,
        }
    }

    pub fn transformable(&self) -> &Transformable
    {
        &self.transformable
    }

    pub fn transformable_mut(&mut self) -> &mut Transformable
    {
        &mut self.transformable
    }

    /// Whether the owning actor is currently alive in shared ownership.
    pub fn is_shared(&self) -> bool
    {
        self.this.as_ref().map_or(false, |w| w.strong_count() > 0)
    }

    pub fn weak(&self) -> WeakActorRef
    {
        match self.this {
            Some(ref this) => WeakActorRef::from_weak(this.clone()),
            None => WeakActorRef::empty(),
        }
    }

    pub fn shared(&self) -> Option<ActorRef>
    {
        self.weak().upgrade()
    }

    /// Owning handle typed as `T`; `None` when the actor is not a `T` or is
    /// not shared.
    pub fn shared_as<T: Actor>(&self) -> Option<ActorRef<T>>
    {
        let any = self.this_any.as_ref()?.upgrade()?;
        any.downcast::<RefCell<T>>().ok().map(ActorRef::from_rc)
    }

    fn bind<A: Actor>(&mut self, weak: &Weak<RefCell<A>>)
    {
        let this: Weak<RefCell<dyn Actor>> = weak.clone();
        let this_any: Weak<dyn Any> = weak.clone();
        self.this = Some(this);
        self.this_any = Some(this_any);
    }
}

impl Default for ActorCore {
    fn default() -> Self { ActorCore::new() }
}

/// A copy is a new, unshared actor: the self-reference is not carried over.
impl Clone for ActorCore {
    fn clone(&self) -> Self {
        ActorCore::with_transformable(self.transformable)
    }
}

impl fmt::Debug for ActorCore {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ActorCore")
            .field("transformable", &self.transformable)
            .field("shared", &self.is_shared())
            .finish()
    }
}

/// Base trait for every object that can exist on a scene.
pub trait Actor: Updatable + Drawable + Downcast + Any {
    fn core(&self) -> &ActorCore;

    fn core_mut(&mut self) -> &mut ActorCore;

    fn transformable(&self) -> &Transformable {
        self.core().transformable()
    }

    fn transformable_mut(&mut self) -> &mut Transformable {
        self.core_mut().transformable_mut()
    }

    fn get_transform(&self) -> Transform {
        self.transformable().get_transform()
    }

    /// Weak pointer to self (const).
    fn get_weak_ptr(&self) -> WeakActorView {
        self.core().weak().view()
    }

    /// Weak pointer to self.
    fn get_weak_ptr_mut(&mut self) -> WeakActorRef {
        self.core().weak()
    }

    /// Shared pointer to self (const).
    fn get_shared_ptr(&self) -> Option<ActorView> {
        self.core().shared().map(ActorView::from)
    }

    /// Shared pointer to self.
    fn get_shared_ptr_mut(&mut self) -> Option<ActorRef> {
        self.core().shared()
    }

    /// Shared pointer to self (const) as the concrete type `T`.
    fn get_shared_ptr_as<T: Actor>(&self) -> Option<ActorView<T>> where Self: Sized {
        self.core().shared_as::<T>().map(ActorView::from)
    }

    /// Shared pointer to self as the concrete type `T`.
    fn get_shared_ptr_mut_as<T: Actor>(&mut self) -> Option<ActorRef<T>> where Self: Sized {
        self.core().shared_as::<T>()
    }

    /// Absolute transform of something positioned relative to this actor:
    /// the relative transform is applied to a point after this actor's own.
    fn calculate_absolute_transform(&self, relative: &Transformable) -> Transform {
        relative.get_transform() * self.get_transform()
    }
}

impl dyn Actor {
    pub fn get_shared_ptr_as<T: Actor>(&self) -> Option<ActorView<T>> {
        self.core().shared_as::<T>().map(ActorView::from)
    }

    pub fn get_shared_ptr_mut_as<T: Actor>(&mut self) -> Option<ActorRef<T>> {
        self.core().shared_as::<T>()
    }
}

impl_downcast!(Actor);

/// Moves `actor` into shared ownership and binds its self-reference.
pub fn share<A: Actor>(actor: A) -> ActorRef<A> {
    let inner = Rc::new_cyclic(move |weak: &Weak<RefCell<A>>| {
        let mut actor = actor;
        actor.core_mut().bind(weak);
        RefCell::new(actor)
    });

    trace!("Shared actor {}", type_name::<A>());

    ActorRef::from_rc(inner)
}
