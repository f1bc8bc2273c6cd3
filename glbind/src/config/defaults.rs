#[inline]
pub fn default_log_level() -> String {
    String::from("OFF")
}

#[inline]
pub fn default_search_paths() -> Vec<std::path::PathBuf> {
    vec![]
}

pub fn default_config_file_content() -> String {
    r#"# glbind configuration
#
# Library
#
# • search-paths: libraries tried, in order, before the platform defaults
#   (libGL.so.1 and libGL.so on Linux and the BSDs, opengl32.dll on Windows,
#   the OpenGL framework on macOS).
#
# • get-proc-address: symbol looked up in the opened library to resolve
#   extension entry points. Defaults to glXGetProcAddressARB, or
#   wglGetProcAddress on Windows. Unused on macOS.
#
# [library]
# search-paths = ["/usr/lib/x86_64-linux-gnu/libGL.so.1"]
# get-proc-address = "glXGetProcAddressARB"

# Extensions
#
# • disabled: extension names reported as absent even when the driver
#   advertises them. Their entry points are not resolved.
#
# • prefer-combined-string: read glGetString(GL_EXTENSIONS) on 3.0+ contexts
#   too, falling back to glGetStringi when the driver refuses.
#
# [extensions]
# disabled = ["GL_ARB_debug_output"]
# prefer-combined-string = false

# Developer
#
# • log-level: OFF, ERROR, WARN, INFO, DEBUG or TRACE. GLBIND_LOG_LEVEL
#   takes precedence.
#
[developer]
log-level = "OFF"
"#
    .to_string()
}
