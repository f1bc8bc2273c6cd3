// Scripted stand-in for a GL driver: answers glGetString, glGetIntegerv and
// glGetStringi from thread local state and hands out fabricated addresses for
// every other registry entry point.

#![allow(dead_code)]

use glbind::types::{GLenum, GLint, GLubyte, GLuint, GL_EXTENSIONS, GL_NUM_EXTENSIONS, GL_VERSION};
use glbind::Command;
use std::cell::RefCell;
use std::ffi::{c_void, CStr, CString};

#[derive(Default)]
pub struct FakeDriver {
    pub version: Option<&'static str>,
    /// Names handed out one by one through glGetStringi.
    pub extensions: Vec<&'static str>,
    /// Answer for glGetString(GL_EXTENSIONS); null when `None`.
    pub combined: Option<&'static str>,
    /// glGetStringi returns null at this index.
    pub null_name_at: Option<u32>,
    /// Symbols the lookup refuses to resolve.
    pub missing: Vec<&'static str>,
}

#[derive(Default)]
struct State {
    version: Option<CString>,
    extensions: Vec<CString>,
    combined: Option<CString>,
    null_name_at: Option<u32>,
    missing: Vec<&'static str>,
    requested: Vec<CString>,
    get_stringi_calls: usize,
}

thread_local! {
    static STATE: RefCell<State> = RefCell::new(State::default());
}

impl FakeDriver {
    pub fn new(version: &'static str) -> Self {
        FakeDriver {
            version: Some(version),
            ..FakeDriver::default()
        }
    }

    pub fn with_extensions(mut self, extensions: &[&'static str]) -> Self {
        self.extensions = extensions.to_vec();
        self
    }

    pub fn with_combined(mut self, combined: &'static str) -> Self {
        self.combined = Some(combined);
        self
    }

    pub fn missing(mut self, symbols: &[&'static str]) -> Self {
        self.missing.extend_from_slice(symbols);
        self
    }

    /// Makes this driver the one answering on the calling thread.
    pub fn install(self) {
        let cstring = |text: &str| CString::new(text).unwrap();
        STATE.with(|state| {
            *state.borrow_mut() = State {
                version: self.version.map(cstring),
                extensions: self.extensions.iter().map(|name| cstring(name)).collect(),
                combined: self.combined.map(cstring),
                null_name_at: self.null_name_at,
                missing: self.missing,
                requested: Vec::new(),
                get_stringi_calls: 0,
            }
        });
    }
}

/// Address the fake driver reports for `name`; null for names outside the
/// registry.
pub fn fake_address(name: &CStr) -> *const c_void {
    Command::ALL
        .iter()
        .position(|command| command.name() == name)
        .map(|position| (0x10_0000 + position * 0x10) as *const c_void)
        .unwrap_or(std::ptr::null())
}

pub fn lookup(name: &CStr) -> *const c_void {
    let missing = STATE.with(|state| {
        let mut state = state.borrow_mut();
        state.requested.push(name.to_owned());
        state
            .missing
            .iter()
            .any(|symbol| symbol.as_bytes() == name.to_bytes())
    });
    if missing {
        return std::ptr::null();
    }

    match name.to_bytes() {
        b"glGetString" => get_string as *const c_void,
        b"glGetIntegerv" => get_integerv as *const c_void,
        b"glGetStringi" => get_stringi as *const c_void,
        _ => fake_address(name),
    }
}

/// Every name passed to [`lookup`] since the driver was installed.
pub fn requested() -> Vec<CString> {
    STATE.with(|state| state.borrow().requested.clone())
}

pub fn get_stringi_calls() -> usize {
    STATE.with(|state| state.borrow().get_stringi_calls)
}

fn as_gl_string(text: Option<&CString>) -> *const GLubyte {
    text.map(|text| text.as_ptr() as *const GLubyte)
        .unwrap_or(std::ptr::null())
}

pub unsafe extern "system" fn get_string(name: GLenum) -> *const GLubyte {
    STATE.with(|state| {
        let state = state.borrow();
        match name {
            GL_VERSION => as_gl_string(state.version.as_ref()),
            GL_EXTENSIONS => as_gl_string(state.combined.as_ref()),
            _ => std::ptr::null(),
        }
    })
}

pub unsafe extern "system" fn get_integerv(pname: GLenum, data: *mut GLint) {
    if pname == GL_NUM_EXTENSIONS {
        let count = STATE.with(|state| state.borrow().extensions.len());
        *data = count as GLint;
    }
}

pub unsafe extern "system" fn get_stringi(name: GLenum, index: GLuint) -> *const GLubyte {
    STATE.with(|state| {
        let mut state = state.borrow_mut();
        state.get_stringi_calls += 1;
        if name != GL_EXTENSIONS || state.null_name_at == Some(index) {
            return std::ptr::null();
        }
        as_gl_string(state.extensions.get(index as usize))
    })
}
