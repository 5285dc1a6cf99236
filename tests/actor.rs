extern crate cgmath;
extern crate gameproject;

use cgmath::{Deg, Matrix4, Point3, Quaternion, Vector3};
use cgmath::InnerSpace;
use cgmath::Rotation3;

use gameproject::{share, Actor, ActorCore, DrawList, Drawable, Scene, Transformable, Updatable};
use gameproject::time::ScriptedClock;
use gameproject::{App, AppConfig};

#[derive(Default)]
struct Player {
    core: ActorCore,
    updates: u32,
    elapsed: f32,
}

impl Updatable for Player {
    fn update(&mut self, delta_time: f32) {
        self.updates += 1;
        self.elapsed += delta_time;
    }
}

impl Drawable for Player {}

impl Actor for Player {
    fn core(&self) -> &ActorCore { &self.core }
    fn core_mut(&mut self) -> &mut ActorCore { &mut self.core }
}

#[derive(Default)]
struct Prop {
    core: ActorCore,
}

impl Updatable for Prop {}
impl Drawable for Prop {}

impl Actor for Prop {
    fn core(&self) -> &ActorCore { &self.core }
    fn core_mut(&mut self) -> &mut ActorCore { &mut self.core }
}

fn multiply(a: &Matrix4<f32>, b: &Matrix4<f32>) -> [[f32; 4]; 4] {
    let a: &[[f32; 4]; 4] = a.as_ref();
    let b: &[[f32; 4]; 4] = b.as_ref();
    let mut out = [[0.0f32; 4]; 4];
    // column-major: out[col][row]
    for col in 0..4 {
        for row in 0..4 {
            out[col][row] = (0..4).map(|k| a[k][row] * b[col][k]).sum::<f32>();
        }
    }
    out
}

#[test]
fn weak_pointer_tracks_owner_lifetime() {
    let player = share(Player::default());
    let weak = player.borrow().get_weak_ptr();
    let weak_mut = player.borrow_mut().get_weak_ptr_mut();

    assert!(weak.upgrade().unwrap().identity() == player.identity());
    assert!(weak_mut.upgrade().unwrap().ptr_eq(&player));

    drop(player);

    assert!(weak.is_expired());
    assert!(weak_mut.upgrade().is_none());
}

#[test]
fn shared_pointer_downcasts_by_runtime_type() {
    let player = share(Player::default());
    let erased = player.clone().into_dyn();

    let as_player = erased.borrow().get_shared_ptr_as::<Player>().unwrap();
    assert!(as_player.identity() == player.identity());
    assert!(erased.borrow().get_shared_ptr_as::<Prop>().is_none());
    assert!(erased.borrow_mut().get_shared_ptr_mut_as::<Prop>().is_none());

    assert_eq!(player.strong_count(), 3);
}

#[test]
fn self_reference_is_empty_before_sharing() {
    let prop = Prop::default();
    assert!(prop.get_weak_ptr().is_expired());
    assert!(prop.get_shared_ptr().is_none());
    assert!(prop.get_shared_ptr_as::<Prop>().is_none());
}

#[test]
fn absolute_transform_matches_manual_product() {
    let mut player = Player::default();
    player.transformable_mut().set_position(Vector3::new(2.0, -1.0, 0.0));
    player.transformable_mut().rotate_z(Deg(30.0));

    let mut relative = Transformable::new();
    relative.set_position(Vector3::new(0.0, 4.0, 1.0));
    relative.set_rotation(Quaternion::from_angle_z(Deg(120.0)));

    let absolute = player.calculate_absolute_transform(&relative);
    let manual = multiply(relative.get_transform().matrix(), player.get_transform().matrix());
    let actual: &[[f32; 4]; 4] = absolute.matrix().as_ref();

    for col in 0..4 {
        for row in 0..4 {
            assert!((actual[col][row] - manual[col][row]).abs() < 1e-5, "[{}][{}]", col, row);
        }
    }

    // own transform first, then the relative one
    let p = Point3::new(1.0, 1.0, 0.0);
    let stepwise = relative.get_transform().transform_point(player.get_transform().transform_point(p));
    assert!((absolute.transform_point(p) - stepwise).magnitude() < 1e-5);
}

#[test]
fn default_draw_leaves_target_untouched() {
    let mut scene = Scene::new();
    scene.add(Prop::default());
    scene.add(Player::default());

    let mut list = DrawList::new();
    scene.draw(&mut list);

    assert!(list.is_empty());
    assert_eq!(list.clear_color(), None);
    assert_eq!(list.clear_count(), 0);
}

#[test]
fn default_update_has_no_effect() {
    let mut prop = Prop::default();
    let before = *prop.transformable();
    prop.update(0.016);
    assert_eq!(*prop.transformable(), before);
}

#[test]
fn driver_updates_once_per_frame() {
    let config = AppConfig { frame_limit: None, ..AppConfig::default() };
    let mut app = App::with_clock(config, Box::new(ScriptedClock::new(vec![0.016, 0.016, 0.033])));
    let player = app.scene_mut().add(Player::default());
    let prop = app.scene_mut().add(Prop::default());

    assert_eq!(app.run(), 3);

    assert_eq!(player.borrow().updates, 3);
    assert!((player.borrow().elapsed - 0.065).abs() < 1e-6);
    assert_eq!(*prop.borrow().transformable(), Transformable::new());
}
