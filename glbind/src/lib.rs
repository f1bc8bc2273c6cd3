//! OpenGL entry point loader.
//!
//! A [`Context`] is filled by asking a lookup function for every entry point
//! of every core tier the driver reports and every extension it advertises,
//! then completing alias groups. Callers check each entry point before use.
//!
//! ```no_run
//! # fn get_proc_address(_: &std::ffi::CStr) -> *const std::ffi::c_void { std::ptr::null() }
//! let mut gl = glbind::Context::new();
//! // The window's GL context is current on this thread.
//! let version = unsafe { gl.load_with(get_proc_address)? };
//! if gl.has_extension(glbind::Extension::KHR_debug) {
//!     unsafe { glbind::install_debug_output(&gl)? };
//! }
//! println!("OpenGL {version}");
//! # Ok::<(), glbind::LoadError>(())
//! ```

pub mod config;
pub mod context;
pub mod current;
pub mod debug;
pub mod error;
pub mod library;
pub mod load;
pub mod registry;
pub mod types;

pub use crate::config::Config;
pub use crate::context::{Context, GlVersion, Proc};
pub use crate::current::{make_current, take_current, with_current};
pub use crate::debug::{debug_severity_name, debug_type_name, install_debug_output};
pub use crate::error::{LoadError, Result};
pub use crate::library::GlLibrary;
pub use crate::load::probe::{has_token, ExtensionQuery};
pub use crate::load::version::parse_version;
pub use crate::registry::{Command, Extension, Gate, Version};
