//! Opening the system OpenGL library and resolving symbols from it without
//! help from a windowing library.

use crate::config;
use crate::error::{LoadError, Result};
use libloading::Library;
use std::ffi::{c_char, c_void, CStr, CString, OsString};
use std::ptr;
use tracing::{debug, info, warn};

type GetProcAddressFn = unsafe extern "system" fn(name: *const c_char) -> *const c_void;

#[cfg(target_os = "macos")]
const LIBRARY_CANDIDATES: &[&str] = &[
    "../Frameworks/OpenGL.framework/OpenGL",
    "/Library/Frameworks/OpenGL.framework/OpenGL",
    "/System/Library/Frameworks/OpenGL.framework/OpenGL",
    "/System/Library/Frameworks/OpenGL.framework/Versions/Current/OpenGL",
];

#[cfg(target_os = "windows")]
const LIBRARY_CANDIDATES: &[&str] = &["opengl32.dll"];

#[cfg(target_os = "cygwin")]
const LIBRARY_CANDIDATES: &[&str] = &["libGL-1.so", "libGL.so.1", "libGL.so"];

#[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "cygwin")))]
const LIBRARY_CANDIDATES: &[&str] = &["libGL.so.1", "libGL.so"];

#[cfg(target_os = "macos")]
const GET_PROC_ADDRESS: Option<&str> = None;

#[cfg(target_os = "windows")]
const GET_PROC_ADDRESS: Option<&str> = Some("wglGetProcAddress");

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const GET_PROC_ADDRESS: Option<&str> = Some("glXGetProcAddressARB");

/// A dynamically opened OpenGL library. Closed when dropped.
pub struct GlLibrary {
    // Declared before `library` so it can never outlive it.
    get_proc_address: Option<GetProcAddressFn>,
    library: Library,
    path: String,
}

impl std::fmt::Debug for GlLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("GlLibrary")
            .field("path", &self.path)
            .field("get_proc_address", &self.get_proc_address.is_some())
            .finish()
    }
}

impl GlLibrary {
    /// Platform library names, in the order they are tried.
    pub fn candidates() -> &'static [&'static str] {
        LIBRARY_CANDIDATES
    }

    /// Platform symbol used for extension entry points, if the platform
    /// has one.
    pub fn default_get_proc_address() -> Option<&'static str> {
        GET_PROC_ADDRESS
    }

    pub fn open() -> Result<Self> {
        Self::open_with(&config::Library::default())
    }

    /// Tries the configured search paths, then the platform candidates, and
    /// keeps the first library that opens. Each candidate is tried once.
    pub fn open_with(config: &config::Library) -> Result<Self> {
        let candidates = config
            .search_paths
            .iter()
            .map(|path| path.as_os_str().to_owned())
            .chain(LIBRARY_CANDIDATES.iter().map(OsString::from));

        let mut tried = Vec::new();
        for candidate in candidates {
            let path = candidate.to_string_lossy().into_owned();
            match unsafe { Library::new(&candidate) } {
                Ok(library) => {
                    info!("opened OpenGL library {path}");
                    let symbol = config.get_proc_address().or(GET_PROC_ADDRESS);
                    let get_proc_address =
                        symbol.and_then(|symbol| lookup_get_proc_address(&library, symbol));
                    return Ok(GlLibrary {
                        get_proc_address,
                        library,
                        path,
                    });
                }
                Err(err) => {
                    debug!("could not open {path}: {err}");
                    tried.push(path);
                }
            }
        }

        warn!("no OpenGL library found");
        Err(LoadError::LibraryNotFound { candidates: tried })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn has_get_proc_address(&self) -> bool {
        self.get_proc_address.is_some()
    }

    /// Resolves `name` through the platform lookup first, then as a plain
    /// exported symbol of the library. Null when neither knows it.
    pub fn proc_address(&self, name: &CStr) -> *const c_void {
        if let Some(get_proc_address) = self.get_proc_address {
            let address = unsafe { get_proc_address(name.as_ptr()) };
            if is_valid_address(address) {
                return address;
            }
        }

        unsafe { self.library.get::<*const c_void>(name.to_bytes_with_nul()) }
            .map(|symbol| *symbol)
            .unwrap_or(ptr::null())
    }
}

fn lookup_get_proc_address(library: &Library, symbol: &str) -> Option<GetProcAddressFn> {
    let Ok(name) = CString::new(symbol) else {
        warn!("invalid get-proc-address symbol {symbol:?}");
        return None;
    };
    match unsafe { library.get::<GetProcAddressFn>(name.as_bytes_with_nul()) } {
        Ok(function) => Some(*function),
        Err(err) => {
            debug!("{symbol} not found, using exported symbols only: {err}");
            None
        }
    }
}

// wglGetProcAddress reports failure with small sentinels as well as null.
#[cfg(target_os = "windows")]
#[inline]
fn is_valid_address(address: *const c_void) -> bool {
    !matches!(address as isize, -1 | 0 | 1 | 2 | 3)
}

#[cfg(not(target_os = "windows"))]
#[inline]
fn is_valid_address(address: *const c_void) -> bool {
    !address.is_null()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_platform_candidates() {
        assert!(!GlLibrary::candidates().is_empty());
        #[cfg(target_os = "linux")]
        {
            assert_eq!(GlLibrary::candidates(), &["libGL.so.1", "libGL.so"]);
            assert_eq!(
                GlLibrary::default_get_proc_address(),
                Some("glXGetProcAddressARB")
            );
        }
        #[cfg(target_os = "windows")]
        assert_eq!(GlLibrary::candidates(), &["opengl32.dll"]);
        #[cfg(target_os = "macos")]
        assert_eq!(GlLibrary::default_get_proc_address(), None);
    }

    #[test]
    fn test_failure_lists_every_candidate() {
        let config = config::Library {
            search_paths: vec![PathBuf::from("/glbind/does/not/exist/libGL.so")],
            get_proc_address: None,
        };
        // The system library may well exist; only the missing path is certain.
        if let Err(LoadError::LibraryNotFound { candidates }) = GlLibrary::open_with(&config)
        {
            assert_eq!(candidates[0], "/glbind/does/not/exist/libGL.so");
            assert_eq!(&candidates[1..], GlLibrary::candidates());
        }
    }

    #[test]
    fn test_null_is_never_valid() {
        assert!(!is_valid_address(ptr::null()));
        assert!(is_valid_address(0x1000 as *const c_void));
    }
}
