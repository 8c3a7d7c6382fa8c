use glfw::Key;
use strum::{EnumIter, IntoEnumIterator};

use crate::{camera::Camera, input::KeyState};

pub const DEFAULT_SPEED: f32 = 0.05;

pub struct CameraController {
    /// Distance travelled per frame while a key is held.
    pub speed: f32,
}

impl CameraController {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }

    /// Applies every held action once. Returns true if the camera moved.
    pub fn update(&self, camera: &mut Camera, keys: &impl KeyState) -> bool {
        let mut moved = false;
        for action in CameraAction::iter() {
            if keys.is_held(action.key()) {
                self.apply(camera, action);
                moved = true;
            }
        }
        moved
    }

    fn apply(&self, camera: &mut Camera, action: CameraAction) {
        match action {
            CameraAction::Forward => camera.move_forward(self.speed),
            CameraAction::Backward => camera.move_forward(-self.speed),
            CameraAction::Left => camera.move_right(-self.speed),
            CameraAction::Right => camera.move_right(self.speed),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter)]
pub enum CameraAction {
    Forward,
    Backward,
    Left,
    Right,
}

impl CameraAction {
    pub fn key(self) -> Key {
        match self {
            CameraAction::Forward => Key::W,
            CameraAction::Left => Key::A,
            CameraAction::Backward => Key::S,
            CameraAction::Right => Key::D,
        }
    }
}
