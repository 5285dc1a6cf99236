//! Owning and non-owning handles to shared actors.
//!
//! Actors live in an `Rc<RefCell<_>>`. The handles come in a mutable flavour
//! (`ActorRef`, `WeakActorRef`) and a read-only one (`ActorView`,
//! `WeakActorView`), mirroring `&mut self` and `&self` access. All of them
//! default to `dyn Actor`.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::actors::Actor;

fn address<T: ?Sized>(rc: &Rc<RefCell<T>>) -> *const () {
    Rc::as_ptr(rc) as *const ()
}

/// Owning handle with mutable access.
///
/// Handles come from `share`, `Scene::add` or an actor's own accessors;
/// an allocation made elsewhere cannot be wrapped:
///
/// ```compile_fail
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use gameproject::ActorRef;
///
/// let handle = ActorRef::from_rc(Rc::new(RefCell::new(0u32)));
/// ```
pub struct ActorRef<T: ?Sized = dyn Actor> {
    inner: Rc<RefCell<T>>,
}

impl<T: ?Sized> ActorRef<T> {
    /// Only `share` and the self-reference may wrap an allocation, so every
    /// handle points at a bound actor.
    pub(crate) fn from_rc(inner: Rc<RefCell<T>>) -> Self {
        ActorRef { inner: inner }
    }

    /// Panics if the actor is mutably borrowed.
    pub fn borrow(&self) -> Ref<'_, T> {
        self.inner.borrow()
    }

    /// Panics if the actor is already borrowed, e.g. when called on an
    /// actor's own handle from inside its `update`.
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.inner.borrow_mut()
    }

    pub fn downgrade(&self) -> WeakActorRef<T> {
        WeakActorRef { inner: Some(Rc::downgrade(&self.inner)) }
    }

    pub fn view(&self) -> ActorView<T> {
        ActorView { inner: self.inner.clone() }
    }

    pub fn strong_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }

    pub fn weak_count(&self) -> usize {
        Rc::weak_count(&self.inner)
    }

    /// Address of the shared allocation; equal for every handle to the
    /// same actor, whatever its static type.
    pub fn identity(&self) -> *const () {
        address(&self.inner)
    }

    pub fn ptr_eq<U: ?Sized>(&self, other: &ActorRef<U>) -> bool {
        self.identity() == other.identity()
    }

    pub fn into_rc(self) -> Rc<RefCell<T>> {
        self.inner
    }
}

impl<T: Actor> ActorRef<T> {
    /// Erases the concrete type.
    pub fn into_dyn(self) -> ActorRef {
        let inner: Rc<RefCell<dyn Actor>> = self.inner;
        ActorRef { inner: inner }
    }
}

impl ActorRef {
    /// Handle to the same actor typed as `T`; `None` when it is something
    /// else. Panics if the actor is mutably borrowed.
    pub fn downcast<T: Actor>(&self) -> Option<ActorRef<T>> {
        if !self.inner.borrow().is::<T>() {
            return None;
        }

        let raw: *const RefCell<dyn Actor> = Rc::into_raw(self.inner.clone());
        let raw: *const RefCell<T> = raw.cast();

        // SAFETY: the allocation was created as an `Rc<RefCell<T>>` and
        // unsized to `dyn Actor`; the check above confirms that `T` is that
        // concrete type.
        Some(ActorRef { inner: unsafe { Rc::from_raw(raw) } })
    }
}

impl<T: ?Sized> Clone for ActorRef<T> {
    fn clone(&self) -> Self {
        ActorRef { inner: self.inner.clone() }
    }
}

impl<T: ?Sized> fmt::Debug for ActorRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ActorRef({:p})", self.identity())
    }
}

/// Owning handle with read-only access.
pub struct ActorView<T: ?Sized = dyn Actor> {
    inner: Rc<RefCell<T>>,
}

impl<T: ?Sized> ActorView<T> {
    pub fn borrow(&self) -> Ref<'_, T> {
        self.inner.borrow()
    }

    pub fn downgrade(&self) -> WeakActorView<T> {
        WeakActorView { inner: Some(Rc::downgrade(&self.inner)) }
    }

    pub fn strong_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }

    pub fn identity(&self) -> *const () {
        address(&self.inner)
    }

    pub fn ptr_eq<U: ?Sized>(&self, other: &ActorView<U>) -> bool {
        self.identity() == other.identity()
    }
}

impl<T: ?Sized> Clone for ActorView<T> {
    fn clone(&self) -> Self {
        ActorView { inner: self.inner.clone() }
    }
}

impl<T: ?Sized> fmt::Debug for ActorView<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ActorView({:p})", self.identity())
    }
}

/// Non-owning handle with mutable access once upgraded.
///
/// An empty handle (never bound to a shared actor) behaves like an expired
/// one.
pub struct WeakActorRef<T: ?Sized = dyn Actor> {
    inner: Option<Weak<RefCell<T>>>,
}

impl<T: ?Sized> WeakActorRef<T> {
    pub fn empty() -> Self {
        WeakActorRef { inner: None }
    }

    pub(crate) fn from_weak(inner: Weak<RefCell<T>>) -> Self {
        WeakActorRef { inner: Some(inner) }
    }

    pub fn upgrade(&self) -> Option<ActorRef<T>> {
        self.inner.as_ref()
            .and_then(|w| w.upgrade())
            .map(ActorRef::from_rc)
    }

    pub fn is_expired(&self) -> bool {
        self.inner.as_ref().map_or(true, |w| w.strong_count() == 0)
    }

    pub fn view(&self) -> WeakActorView<T> {
        WeakActorView { inner: self.inner.clone() }
    }
}

impl<T: ?Sized> Clone for WeakActorRef<T> {
    fn clone(&self) -> Self {
        WeakActorRef { inner: self.inner.clone() }
    }
}

impl<T: ?Sized> Default for WeakActorRef<T> {
    fn default() -> Self { WeakActorRef::empty() }
}

impl<T: ?Sized> fmt::Debug for WeakActorRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "WeakActorRef(expired: {})", self.is_expired())
    }
}

/// Non-owning handle with read-only access once upgraded.
pub struct WeakActorView<T: ?Sized = dyn Actor> {
    inner: Option<Weak<RefCell<T>>>,
}

impl<T: ?Sized> WeakActorView<T> {
    pub fn empty() -> Self {
        WeakActorView { inner: None }
    }

    pub fn upgrade(&self) -> Option<ActorView<T>> {
        self.inner.as_ref()
            .and_then(|w| w.upgrade())
            .map(|inner| ActorView { inner: inner })
    }

    pub fn is_expired(&self) -> bool {
        self.inner.as_ref().map_or(true, |w| w.strong_count() == 0)
    }
}

impl<T: ?Sized> Clone for WeakActorView<T> {
    fn clone(&self) -> Self {
        WeakActorView { inner: self.inner.clone() }
    }
}

impl<T: ?Sized> Default for WeakActorView<T> {
    fn default() -> Self { WeakActorView::empty() }
}

impl<T: ?Sized> fmt::Debug for WeakActorView<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "WeakActorView(expired: {})", self.is_expired())
    }
}

impl<T: ?Sized> From<ActorRef<T>> for ActorView<T> {
    fn from(actor: ActorRef<T>) -> Self {
        ActorView { inner: actor.inner }
    }
}
