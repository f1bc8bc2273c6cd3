//! Routing driver debug messages (`GL_KHR_debug`) into `tracing`.

use crate::context::Context;
use crate::error::{LoadError, Result};
use crate::registry::Command;
use crate::types::*;
use std::ffi::{c_void, CStr};
use tracing::{debug, error, info, trace, warn};

const REPORTED_TYPES: [GLenum; 4] = [
    GL_DEBUG_TYPE_ERROR,
    GL_DEBUG_TYPE_UNDEFINED_BEHAVIOR,
    GL_DEBUG_TYPE_DEPRECATED_BEHAVIOR,
    GL_DEBUG_TYPE_PERFORMANCE,
];

pub fn debug_type_name(kind: GLenum) -> &'static str {
    match kind {
        GL_DEBUG_TYPE_ERROR => "Error",
        GL_DEBUG_TYPE_DEPRECATED_BEHAVIOR => "Deprecated Behavior",
        GL_DEBUG_TYPE_UNDEFINED_BEHAVIOR => "Undefined Behavior",
        GL_DEBUG_TYPE_PORTABILITY => "Portability Issue",
        GL_DEBUG_TYPE_PERFORMANCE => "Performance Warning",
        GL_DEBUG_TYPE_MARKER => "Marker",
        GL_DEBUG_TYPE_PUSH_GROUP => "Push Group",
        GL_DEBUG_TYPE_POP_GROUP => "Pop Group",
        GL_DEBUG_TYPE_OTHER => "Other",
        _ => "Unknown",
    }
}

pub fn debug_severity_name(severity: GLenum) -> &'static str {
    match severity {
        GL_DEBUG_SEVERITY_HIGH => "High",
        GL_DEBUG_SEVERITY_MEDIUM => "Medium",
        GL_DEBUG_SEVERITY_LOW => "Low",
        GL_DEBUG_SEVERITY_NOTIFICATION => "Notification",
        _ => "Unknown",
    }
}

/// Turns on synchronous debug output for the GL context `context` was
/// loaded from and forwards errors, undefined and deprecated behaviour and
/// performance warnings to `tracing`.
///
/// # Safety
///
/// The GL context `context` was loaded from must be current on the calling
/// thread, and its `glEnable`, `glDebugMessageControl` and
/// `glDebugMessageCallback` slots must hold the driver's entry points.
pub unsafe fn install_debug_output(context: &Context) -> Result<()> {
    let enable = context
        .get_fn::<EnableFn>(Command::Enable)
        .ok_or(LoadError::MissingCommand("glEnable"))?;
    let control = context
        .get_fn::<DebugMessageControlFn>(Command::DebugMessageControl)
        .ok_or(LoadError::MissingCommand("glDebugMessageControl"))?;
    let callback = context
        .get_fn::<DebugMessageCallbackFn>(Command::DebugMessageCallback)
        .ok_or(LoadError::MissingCommand("glDebugMessageCallback"))?;

    enable(GL_DEBUG_OUTPUT);
    enable(GL_DEBUG_OUTPUT_SYNCHRONOUS);
    control(
        GL_DONT_CARE,
        GL_DONT_CARE,
        GL_DONT_CARE,
        0,
        std::ptr::null(),
        GL_FALSE,
    );
    for kind in REPORTED_TYPES {
        control(GL_DONT_CARE, kind, GL_DONT_CARE, 0, std::ptr::null(), GL_TRUE);
    }
    callback(Some(log_debug_message), std::ptr::null());
    debug!("debug output installed");
    Ok(())
}

unsafe extern "system" fn log_debug_message(
    _source: GLenum,
    kind: GLenum,
    id: GLuint,
    severity: GLenum,
    length: GLsizei,
    message: *const GLchar,
    _user_param: *mut c_void,
) {
    let message = if message.is_null() {
        String::new()
    } else if let Ok(length) = usize::try_from(length) {
        let bytes = std::slice::from_raw_parts(message as *const u8, length);
        String::from_utf8_lossy(bytes).into_owned()
    } else {
        CStr::from_ptr(message).to_string_lossy().into_owned()
    };
    let message = message.trim_end();
    let kind = debug_type_name(kind);

    match severity {
        GL_DEBUG_SEVERITY_HIGH => error!("GL Debug [{kind}] ({id}) {message}"),
        GL_DEBUG_SEVERITY_MEDIUM => warn!("GL Debug [{kind}] ({id}) {message}"),
        GL_DEBUG_SEVERITY_LOW => info!("GL Debug [{kind}] ({id}) {message}"),
        GL_DEBUG_SEVERITY_NOTIFICATION => debug!("GL Debug [{kind}] ({id}) {message}"),
        _ => trace!("GL Debug [{kind}] ({id}) {message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(debug_type_name(GL_DEBUG_TYPE_ERROR), "Error");
        assert_eq!(debug_type_name(GL_DEBUG_TYPE_PORTABILITY), "Portability Issue");
        assert_eq!(debug_type_name(0), "Unknown");
        assert_eq!(debug_severity_name(GL_DEBUG_SEVERITY_HIGH), "High");
        assert_eq!(debug_severity_name(GL_DEBUG_TYPE_ERROR), "Unknown");
    }

    #[test]
    fn test_missing_entry_point_is_named() {
        assert_eq!(
            unsafe { install_debug_output(&Context::new()) },
            Err(LoadError::MissingCommand("glEnable"))
        );
    }

    #[test]
    fn test_callback_accepts_both_message_forms() {
        unsafe {
            log_debug_message(
                0,
                GL_DEBUG_TYPE_ERROR,
                1,
                GL_DEBUG_SEVERITY_HIGH,
                5,
                c"error and more".as_ptr(),
                std::ptr::null_mut(),
            );
            log_debug_message(
                0,
                GL_DEBUG_TYPE_OTHER,
                2,
                GL_DEBUG_SEVERITY_NOTIFICATION,
                -1,
                c"buffer created\n".as_ptr(),
                std::ptr::null_mut(),
            );
            log_debug_message(0, 0, 3, 0, 0, std::ptr::null(), std::ptr::null_mut());
        }
    }
}
