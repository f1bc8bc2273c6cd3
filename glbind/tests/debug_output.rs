mod common;

use common::{lookup, FakeDriver};
use glbind::types::*;
use glbind::{install_debug_output, Command, Context, LoadError};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::ffi::{c_void, CStr};

#[derive(Debug, Default, PartialEq)]
struct Recorded {
    enabled: Vec<GLenum>,
    controls: Vec<(GLenum, GLboolean)>,
    callback: bool,
}

thread_local! {
    static RECORDED: RefCell<Recorded> = RefCell::new(Recorded::default());
}

unsafe extern "system" fn enable(cap: GLenum) {
    RECORDED.with(|recorded| recorded.borrow_mut().enabled.push(cap));
}

unsafe extern "system" fn debug_message_control(
    _source: GLenum,
    kind: GLenum,
    _severity: GLenum,
    _count: GLsizei,
    _ids: *const GLuint,
    enabled: GLboolean,
) {
    RECORDED.with(|recorded| recorded.borrow_mut().controls.push((kind, enabled)));
}

unsafe extern "system" fn debug_message_callback(
    callback: Option<DebugProc>,
    _user_param: *const c_void,
) {
    RECORDED.with(|recorded| recorded.borrow_mut().callback = callback.is_some());
    if let Some(callback) = callback {
        let message = c"GL_INVALID_ENUM in glEnable(cap)";
        callback(
            0,
            GL_DEBUG_TYPE_ERROR,
            1280,
            GL_DEBUG_SEVERITY_HIGH,
            -1,
            message.as_ptr(),
            std::ptr::null_mut(),
        );
    }
}

fn debug_lookup(name: &CStr) -> *const c_void {
    let address = lookup(name);
    if address.is_null() {
        return address;
    }
    match name.to_bytes() {
        b"glEnable" => enable as *const c_void,
        b"glDebugMessageControl" | b"glDebugMessageControlARB" => {
            debug_message_control as *const c_void
        }
        b"glDebugMessageCallback" | b"glDebugMessageCallbackARB" => {
            debug_message_callback as *const c_void
        }
        _ => address,
    }
}

#[test]
fn test_debug_output_is_configured() {
    FakeDriver::new("4.3.0 Core").install();
    let mut context = Context::new();
    unsafe { context.load_with(debug_lookup) }.unwrap();

    assert_eq!(unsafe { install_debug_output(&context) }, Ok(()));
    let recorded = RECORDED.with(|recorded| std::mem::take(&mut *recorded.borrow_mut()));
    assert_eq!(
        recorded,
        Recorded {
            enabled: vec![GL_DEBUG_OUTPUT, GL_DEBUG_OUTPUT_SYNCHRONOUS],
            controls: vec![
                (GL_DONT_CARE, GL_FALSE),
                (GL_DEBUG_TYPE_ERROR, GL_TRUE),
                (GL_DEBUG_TYPE_UNDEFINED_BEHAVIOR, GL_TRUE),
                (GL_DEBUG_TYPE_DEPRECATED_BEHAVIOR, GL_TRUE),
                (GL_DEBUG_TYPE_PERFORMANCE, GL_TRUE),
            ],
            callback: true,
        }
    );
}

#[test]
fn test_arb_entry_points_are_enough() {
    // A 3.3 context exposing only GL_ARB_debug_output.
    FakeDriver::new("3.3")
        .with_extensions(&["GL_ARB_debug_output"])
        .install();
    let mut context = Context::new();
    unsafe { context.load_with(debug_lookup) }.unwrap();
    assert!(context.is_loaded(Command::DebugMessageCallback));

    assert_eq!(unsafe { install_debug_output(&context) }, Ok(()));
    assert!(RECORDED.with(|recorded| recorded.borrow().callback));
}

#[test]
fn test_missing_debug_entry_points() {
    FakeDriver::new("3.3").install();
    let mut context = Context::new();
    unsafe { context.load_with(debug_lookup) }.unwrap();
    assert_eq!(
        unsafe { install_debug_output(&context) },
        Err(LoadError::MissingCommand("glDebugMessageControl"))
    );
    assert_eq!(RECORDED.with(|recorded| recorded.borrow().enabled.len()), 0);
}
