use nalgebra_glm::{Mat4, Vec3};

pub struct Camera {
    pub position: Vec3,
    pub front: Vec3,
    pub up: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: glm::vec3(0.0, 0.0, 3.0),
            front: glm::vec3(0.0, 0.0, -1.0),
            up: *Vec3::y_axis(),
        }
    }
}

impl Camera {
    pub fn new(position: Vec3, front: Vec3, up: Vec3) -> Self {
        Self {
            position,
            front,
            up,
        }
    }

    pub fn view(&self) -> Mat4 {
        glm::look_at(&self.position, &(self.position + self.front), &self.up)
    }

    pub fn right(&self) -> Vec3 {
        glm::normalize(&glm::cross(&self.front, &self.up))
    }

    pub fn move_(&mut self, delta: &Vec3) {
        self.position += delta;
    }

    pub fn move_forward(&mut self, distance: f32) {
        let delta = self.front * distance;
        self.move_(&delta);
    }

    pub fn move_right(&mut self, distance: f32) {
        let delta = self.right() * distance;
        self.move_(&delta);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Projection {
    pub fn matrix(&self, aspect: f32) -> Mat4 {
        glm::perspective(aspect, self.fov_degrees.to_radians(), self.near, self.far)
    }
}

/// Width over height, falling back to 1 for a degenerate framebuffer.
pub fn aspect_ratio(size: (i32, i32)) -> f32 {
    if size.0 <= 0 || size.1 <= 0 {
        1.0
    } else {
        size.0 as f32 / size.1 as f32
    }
}
