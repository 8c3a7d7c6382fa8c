use crate::error::{Error, Result};
use gl::types::{GLboolean, GLenum, GLint, GLsizei, GLuint};
use nalgebra_glm::{Mat4, Vec4};
use std::ffi::{c_void, CStr, CString};

pub struct ShaderProgram {
    id: GLuint,
}

impl ShaderProgram {
    pub fn new() -> Option<Self> {
        let id = unsafe { gl::CreateProgram() };
        if id != 0 {
            Some(Self { id })
        } else {
            None
        }
    }

    pub fn get_uniform(&self, name: &str) -> GLint {
        let Ok(c_name) = CString::new(name) else {
            return -1;
        };
        unsafe { gl::GetUniformLocation(self.id, c_name.as_ptr().cast()) }
    }

    pub fn set_mat4(&self, location: GLint, value: &Mat4) {
        unsafe { gl::UniformMatrix4fv(location, 1, gl::FALSE, value.as_ptr()) };
    }

    pub fn set_vec4(&self, location: GLint, value: &Vec4) {
        unsafe { gl::Uniform4f(location, value.x, value.y, value.z, value.w) };
    }

    pub fn attach_shader(&self, shader: &Shader) {
        unsafe { gl::AttachShader(self.id, shader.id) };
    }

    pub fn link(&self) {
        unsafe { gl::LinkProgram(self.id) };
    }

    pub fn link_success(&self) -> bool {
        let mut success = 0;
        unsafe { gl::GetProgramiv(self.id, gl::LINK_STATUS, &mut success) };
        success == i32::from(gl::TRUE)
    }

    pub fn info_log(&self) -> String {
        let mut needed_len = 0;
        unsafe { gl::GetProgramiv(self.id, gl::INFO_LOG_LENGTH, &mut needed_len) };
        let mut v: Vec<u8> = Vec::with_capacity(needed_len.max(0) as usize);
        let mut len_written = 0_i32;
        unsafe {
            gl::GetProgramInfoLog(
                self.id,
                v.capacity() as GLsizei,
                &mut len_written,
                v.as_mut_ptr().cast(),
            );
            v.set_len(len_written.max(0) as usize);
        }
        String::from_utf8_lossy(&v).into_owned()
    }

    pub fn use_(&self) {
        unsafe { gl::UseProgram(self.id) };
    }

    pub fn unuse() {
        unsafe { gl::UseProgram(0) };
    }

    pub fn from_vert_frag(vert: &str, frag: &str) -> Result<Self> {
        let v = Shader::from_source(ShaderStage::Vertex, vert)?;
        let f = Shader::from_source(ShaderStage::Fragment, frag)?;
        let p = Self::new().ok_or(Error::GlAllocation("shader program"))?;
        p.attach_shader(&v);
        p.attach_shader(&f);
        p.link();
        if p.link_success() {
            Ok(p)
        } else {
            Err(Error::ProgramLink(p.info_log()))
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        ShaderProgram::unuse();
        unsafe { gl::DeleteProgram(self.id) };
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn gl_enum(self) -> GLenum {
        match self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

pub struct Shader {
    id: GLuint,
}

impl Shader {
    pub fn new(stage: ShaderStage) -> Option<Self> {
        let id = unsafe { gl::CreateShader(stage.gl_enum()) };
        if id != 0 {
            Some(Self { id })
        } else {
            None
        }
    }

    pub fn set_source(&self, src: &str) {
        unsafe {
            gl::ShaderSource(
                self.id,
                1,
                &(src.as_bytes().as_ptr().cast()),
                &(src.len() as GLint),
            );
        }
    }

    pub fn compile(&self) {
        unsafe { gl::CompileShader(self.id) };
    }

    pub fn compile_success(&self) -> bool {
        let mut compiled = 0;
        unsafe { gl::GetShaderiv(self.id, gl::COMPILE_STATUS, &mut compiled) };
        compiled == i32::from(gl::TRUE)
    }

    pub fn info_log(&self) -> String {
        let mut needed_len = 0;
        unsafe { gl::GetShaderiv(self.id, gl::INFO_LOG_LENGTH, &mut needed_len) };
        let mut v: Vec<u8> = Vec::with_capacity(needed_len.max(0) as usize);
        let mut len_written = 0_i32;
        unsafe {
            gl::GetShaderInfoLog(
                self.id,
                v.capacity() as GLsizei,
                &mut len_written,
                v.as_mut_ptr().cast(),
            );
            v.set_len(len_written.max(0) as usize);
        }
        String::from_utf8_lossy(&v).into_owned()
    }

    pub fn from_source(stage: ShaderStage, source: &str) -> Result<Self> {
        let shader = Self::new(stage).ok_or(Error::GlAllocation("shader"))?;
        shader.set_source(source);
        shader.compile();
        if shader.compile_success() {
            Ok(shader)
        } else {
            Err(Error::ShaderCompile {
                stage: stage.name(),
                log: shader.info_log(),
            })
        }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe { gl::DeleteShader(self.id) };
    }
}

pub struct VertexArrayObject {
    id: GLuint,
}

impl VertexArrayObject {
    pub fn new() -> Option<Self> {
        let mut id = 0;
        unsafe { gl::GenVertexArrays(1, &mut id) };
        if id != 0 {
            Some(Self { id })
        } else {
            None
        }
    }

    pub fn bind(&self) {
        unsafe { gl::BindVertexArray(self.id) }
    }

    pub fn unbind() {
        unsafe { gl::BindVertexArray(0) }
    }

    pub fn configure_attribute(
        index: GLuint,
        size: GLint,
        type_: GLenum,
        normalized: GLboolean,
        stride: usize,
    ) {
        unsafe {
            gl::VertexAttribPointer(
                index,
                size,
                type_,
                normalized,
                stride as GLsizei,
                std::ptr::null(),
            );
        }
    }

    pub fn enable_attribute(index: GLuint) {
        unsafe { gl::EnableVertexAttribArray(index) }
    }
}

impl Drop for VertexArrayObject {
    fn drop(&mut self) {
        unsafe { gl::DeleteVertexArrays(1, &self.id) };
    }
}

pub struct BufferObject {
    id: GLuint,
    target: GLenum,
}

impl BufferObject {
    pub fn new(target: GLenum) -> Option<Self> {
        let mut id = 0;
        unsafe { gl::GenBuffers(1, &mut id) };
        if id != 0 {
            Some(Self { id, target })
        } else {
            None
        }
    }

    pub fn bind(&self) {
        unsafe { gl::BindBuffer(self.target, self.id) }
    }

    pub fn buffer_data(&self, size: usize, data: *const c_void, usage: GLenum) {
        unsafe { gl::BufferData(self.target, size as isize, data, usage) }
    }
}

impl Drop for BufferObject {
    fn drop(&mut self) {
        unsafe { gl::DeleteBuffers(1, &self.id) }
    }
}

pub fn clear(color: &Vec4) {
    unsafe {
        gl::ClearColor(color.x, color.y, color.z, color.w);
        gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
    }
}

pub fn set_viewport(size: (i32, i32)) {
    unsafe { gl::Viewport(0, 0, size.0, size.1) }
}

pub fn draw_triangles(vertex_count: i32) {
    unsafe { gl::DrawArrays(gl::TRIANGLES, 0, vertex_count) }
}

pub fn version() -> String {
    unsafe {
        let ptr = gl::GetString(gl::VERSION);
        if ptr.is_null() {
            return "unknown".to_string();
        }
        CStr::from_ptr(ptr.cast()).to_string_lossy().into_owned()
    }
}
