use crate::error::RenderError;
use gl::types::*;
use std::ffi::CString;
use std::ptr;

/// shader program to use to render
pub struct ShaderProgram {
    pub id: GLuint,
}

impl ShaderProgram {
    /// compiles and links a new shader program from vertex and fragment source
    pub fn new(vertex_src: &str, fragment_src: &str) -> Result<Self, RenderError> {
        let vs = compile_shader(vertex_src, gl::VERTEX_SHADER)?;
        let fs = match compile_shader(fragment_src, gl::FRAGMENT_SHADER) {
            Ok(fs) => fs,
            Err(e) => {
                unsafe { gl::DeleteShader(vs) };
                return Err(e);
            }
        };
        let id = link_program(vs, fs)?;
        log::debug!("linked shader program {id}");
        Ok(Self { id })
    }

    /// makes this the active program
    pub fn bind(&self) {
        unsafe {
            gl::UseProgram(self.id);
        }
    }

    /// queries the location the driver assigned to a uniform
    pub fn uniform_location(&self, name: &str) -> Option<GLint> {
        let c_name = CString::new(name).ok()?;
        let location = unsafe { gl::GetUniformLocation(self.id, c_name.as_ptr()) };
        (location >= 0).then_some(location)
    }

    /// checks that a uniform sits at the location it was declared with
    pub fn expect_uniform(&self, name: &'static str, expected: GLint) -> Result<(), RenderError> {
        match self.uniform_location(name) {
            Some(found) if found == expected => Ok(()),
            found => Err(RenderError::UniformLayout {
                name,
                expected,
                found: found.unwrap_or(-1),
            }),
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}

/// human readable name of a shader stage
fn stage_name(ty: GLenum) -> &'static str {
    match ty {
        gl::VERTEX_SHADER => "vertex",
        gl::FRAGMENT_SHADER => "fragment",
        _ => "unknown",
    }
}

/// compiles a gl shader
fn compile_shader(src: &str, ty: GLenum) -> Result<GLuint, RenderError> {
    let c_str = CString::new(src.as_bytes()).map_err(|e| RenderError::ShaderCompile {
        stage: stage_name(ty),
        log: e.to_string(),
    })?;
    unsafe {
        // Create GLSL shaders
        let shader = gl::CreateShader(ty);
        // Attempt to compile the shader
        gl::ShaderSource(shader, 1, &c_str.as_ptr(), ptr::null());
        gl::CompileShader(shader);

        // Get the compile status
        let mut status = gl::FALSE as GLint;
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);

        if status != (gl::TRUE as GLint) {
            let mut len = 0;
            gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
            let mut buf = vec![0u8; len.max(1) as usize];
            gl::GetShaderInfoLog(
                shader,
                len,
                ptr::null_mut(),
                buf.as_mut_ptr() as *mut GLchar,
            );
            gl::DeleteShader(shader);
            let log = info_log_to_string(buf);
            return Err(RenderError::ShaderCompile {
                stage: stage_name(ty),
                log,
            });
        }
        log::debug!("compiled {} shader", stage_name(ty));
        Ok(shader)
    }
}

/// links a gl shader program
fn link_program(vs: GLuint, fs: GLuint) -> Result<GLuint, RenderError> {
    unsafe {
        let program = gl::CreateProgram();
        gl::AttachShader(program, vs);
        gl::AttachShader(program, fs);
        gl::LinkProgram(program);

        gl::DetachShader(program, fs);
        gl::DetachShader(program, vs);
        gl::DeleteShader(fs);
        gl::DeleteShader(vs);

        // Get the link status
        let mut status = gl::FALSE as GLint;
        gl::GetProgramiv(program, gl::LINK_STATUS, &mut status);

        if status != (gl::TRUE as GLint) {
            let mut len: GLint = 0;
            gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
            let mut buf = vec![0u8; len.max(1) as usize];
            gl::GetProgramInfoLog(
                program,
                len,
                ptr::null_mut(),
                buf.as_mut_ptr() as *mut GLchar,
            );
            gl::DeleteProgram(program);
            let log = info_log_to_string(buf);
            return Err(RenderError::ShaderLink(log));
        }
        Ok(program)
    }
}

/// strips the trailing null characters of a gl info log
fn info_log_to_string(mut buf: Vec<u8>) -> String {
    while buf.last() == Some(&0) {
        buf.pop();
    }
    String::from_utf8_lossy(&buf).trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_log_loses_its_terminator() {
        let log = info_log_to_string(b"0:12(3): error: syntax error\n\0".to_vec());
        assert_eq!(log, "0:12(3): error: syntax error");
        assert_eq!(info_log_to_string(vec![0]), "");
    }

    #[test]
    fn stages_are_named() {
        assert_eq!(stage_name(gl::VERTEX_SHADER), "vertex");
        assert_eq!(stage_name(gl::FRAGMENT_SHADER), "fragment");
    }
}
