//! Scalar types and the handful of enum values the loader itself needs.

#![allow(non_camel_case_types)]

use std::ffi::{c_char, c_void};

pub type GLenum = u32;
pub type GLboolean = u8;
pub type GLint = i32;
pub type GLuint = u32;
pub type GLsizei = i32;
pub type GLubyte = u8;
pub type GLchar = c_char;

pub const GL_FALSE: GLboolean = 0;
pub const GL_TRUE: GLboolean = 1;

pub const GL_DONT_CARE: GLenum = 0x1100;
pub const GL_EXTENSIONS: GLenum = 0x1F03;
pub const GL_VERSION: GLenum = 0x1F02;
pub const GL_NUM_EXTENSIONS: GLenum = 0x821D;

pub const GL_DEBUG_OUTPUT: GLenum = 0x92E0;
pub const GL_DEBUG_OUTPUT_SYNCHRONOUS: GLenum = 0x8242;
pub const GL_DEBUG_TYPE_ERROR: GLenum = 0x824C;
pub const GL_DEBUG_TYPE_DEPRECATED_BEHAVIOR: GLenum = 0x824D;
pub const GL_DEBUG_TYPE_UNDEFINED_BEHAVIOR: GLenum = 0x824E;
pub const GL_DEBUG_TYPE_PORTABILITY: GLenum = 0x824F;
pub const GL_DEBUG_TYPE_PERFORMANCE: GLenum = 0x8250;
pub const GL_DEBUG_TYPE_OTHER: GLenum = 0x8251;
pub const GL_DEBUG_TYPE_MARKER: GLenum = 0x8268;
pub const GL_DEBUG_TYPE_PUSH_GROUP: GLenum = 0x8269;
pub const GL_DEBUG_TYPE_POP_GROUP: GLenum = 0x826A;
pub const GL_DEBUG_SEVERITY_NOTIFICATION: GLenum = 0x826B;
pub const GL_DEBUG_SEVERITY_HIGH: GLenum = 0x9146;
pub const GL_DEBUG_SEVERITY_MEDIUM: GLenum = 0x9147;
pub const GL_DEBUG_SEVERITY_LOW: GLenum = 0x9148;

/// `glGetString`
pub type GetStringFn = unsafe extern "system" fn(name: GLenum) -> *const GLubyte;
/// `glGetStringi`
pub type GetStringiFn =
    unsafe extern "system" fn(name: GLenum, index: GLuint) -> *const GLubyte;
/// `glGetIntegerv`
pub type GetIntegervFn = unsafe extern "system" fn(pname: GLenum, data: *mut GLint);
/// `glEnable`
pub type EnableFn = unsafe extern "system" fn(cap: GLenum);
/// `glDebugMessageControl`
pub type DebugMessageControlFn = unsafe extern "system" fn(
    source: GLenum,
    kind: GLenum,
    severity: GLenum,
    count: GLsizei,
    ids: *const GLuint,
    enabled: GLboolean,
);
/// `GLDEBUGPROC`
pub type DebugProc = unsafe extern "system" fn(
    source: GLenum,
    kind: GLenum,
    id: GLuint,
    severity: GLenum,
    length: GLsizei,
    message: *const GLchar,
    user_param: *mut c_void,
);
/// `glDebugMessageCallback`
pub type DebugMessageCallbackFn =
    unsafe extern "system" fn(callback: Option<DebugProc>, user_param: *const c_void);

/// Lookup with an opaque user pointer, `GLADuserptrloadfunc` style.
pub type LoadUserPtrFunc =
    unsafe extern "C" fn(userptr: *mut c_void, name: *const c_char) -> *const c_void;

/// Plain lookup such as `SDL_GL_GetProcAddress` or `eglGetProcAddress`.
pub type LoadFunc = unsafe extern "C" fn(name: *const c_char) -> *const c_void;
