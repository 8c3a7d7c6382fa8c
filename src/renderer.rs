use crate::{
    camera::{Camera, Projection},
    config::Config,
    data3d::Mesh,
    error::Result,
    gl_wrappers::{self, ShaderProgram},
    points::PointCloud,
    shaders_src::{self, COLOR_UNIFORM, MODEL_UNIFORM, PROJECTION_UNIFORM, VIEW_UNIFORM},
};
use gl::types::GLint;
use nalgebra_glm::{Mat4, Vec3, Vec4};

struct Uniforms {
    projection: GLint,
    view: GLint,
    model: GLint,
    color: GLint,
}

impl Uniforms {
    fn locate(program: &ShaderProgram) -> Self {
        let uniforms = Self {
            projection: program.get_uniform(PROJECTION_UNIFORM),
            view: program.get_uniform(VIEW_UNIFORM),
            model: program.get_uniform(MODEL_UNIFORM),
            color: program.get_uniform(COLOR_UNIFORM),
        };
        for (name, location) in [
            (PROJECTION_UNIFORM, uniforms.projection),
            (VIEW_UNIFORM, uniforms.view),
            (MODEL_UNIFORM, uniforms.model),
            (COLOR_UNIFORM, uniforms.color),
        ] {
            if location < 0 {
                log::warn!("Uniform `{name}` is not active in the shader program");
            }
        }
        uniforms
    }
}

/// Draws one cube per point with a single flat color.
pub struct PointCloudRenderer {
    program: ShaderProgram,
    uniforms: Uniforms,
    cube: Mesh,
    projection: Projection,
    aspect: f32,
    clear_color: Vec4,
    cube_color: Vec4,
}

impl PointCloudRenderer {
    pub fn new(config: &Config, aspect: f32) -> Result<Self> {
        let vert = shaders_src::load_or_builtin(
            config.vertex_shader_path.as_deref(),
            shaders_src::VERTEX_SHADER_SRC,
        )?;
        let frag = shaders_src::load_or_builtin(
            config.fragment_shader_path.as_deref(),
            shaders_src::MONO_COLOR_FRAG_SHDR_SRC,
        )?;
        let program = ShaderProgram::from_vert_frag(&vert, &frag)?;
        let uniforms = Uniforms::locate(&program);
        let cube = Mesh::cube(config.render.cube_half_extent)?;

        Ok(Self {
            program,
            uniforms,
            cube,
            projection: config.camera.projection(),
            aspect,
            clear_color: config.render.clear_color(),
            cube_color: config.render.cube_color(),
        })
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn draw(&self, camera: &Camera, points: &PointCloud) {
        gl_wrappers::clear(&self.clear_color);

        self.program.use_();
        self.program
            .set_mat4(self.uniforms.projection, &self.projection.matrix(self.aspect));
        self.program.set_mat4(self.uniforms.view, &camera.view());
        self.program.set_vec4(self.uniforms.color, &self.cube_color);

        self.cube.bind();
        for point in points {
            self.program.set_mat4(self.uniforms.model, &model_matrix(point));
            gl_wrappers::draw_triangles(self.cube.vertex_count);
        }
    }
}

pub fn model_matrix(position: &Vec3) -> Mat4 {
    glm::translate(&Mat4::identity(), position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_matrix_translates_origin_to_point() {
        let point = glm::vec3(1.5, -2.0, 0.25);
        let moved = model_matrix(&point) * glm::vec4(0.0, 0.0, 0.0, 1.0);
        assert_eq!(moved, glm::vec4(1.5, -2.0, 0.25, 1.0));
    }

    #[test]
    fn model_matrix_keeps_cube_size() {
        let model = model_matrix(&glm::vec3(10.0, 0.0, 0.0));
        let corner = model * glm::vec4(0.05, 0.05, 0.05, 1.0);
        assert!((corner - glm::vec4(10.05, 0.05, 0.05, 1.0)).norm() < 1e-5);
    }
}
