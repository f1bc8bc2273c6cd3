pub mod alias;
pub mod binder;
pub mod probe;
pub mod version;

use crate::config::Config;
use crate::context::{Context, GlVersion};
use crate::error::{LoadError, Result};
use crate::library::GlLibrary;
use crate::registry::{Command, Extension, Gate};
use crate::types::{GetStringFn, LoadFunc, LoadUserPtrFunc, GL_VERSION};
use alias::resolve_aliases;
use binder::{bind, bind_features};
use probe::ExtensionQuery;
use rustc_hash::FxHashSet;
use std::ffi::{c_char, c_void, CStr};
use std::sync::Arc;
use tracing::{debug, info, warn};
use version::parse_version;

impl Context {
    /// Resolves every entry point the current GL context provides, asking
    /// `lookup` for each registry name.
    ///
    /// Entry points from an earlier load are dropped first; the library
    /// handle is kept. On error the entry points bound before the failure
    /// stay in place.
    ///
    /// # Safety
    ///
    /// A GL context must be current on the calling thread, and `lookup` must
    /// return null or the real address of the named entry point: the loader
    /// calls `glGetString`, `glGetIntegerv` and `glGetStringi` through what
    /// it returns.
    pub unsafe fn load_with<F>(&mut self, lookup: F) -> Result<GlVersion>
    where
        F: FnMut(&CStr) -> *const c_void,
    {
        self.load_with_config(&Config::default(), lookup)
    }

    /// Like [`Context::load_with`], honouring disabled extensions and the
    /// preferred extension query.
    ///
    /// # Safety
    ///
    /// Same contract as [`Context::load_with`].
    pub unsafe fn load_with_config<F>(
        &mut self,
        config: &Config,
        mut lookup: F,
    ) -> Result<GlVersion>
    where
        F: FnMut(&CStr) -> *const c_void,
    {
        let disabled: FxHashSet<Extension> =
            config.disabled_extensions().into_iter().collect();
        self.clear();
        let result = load_context(
            self,
            &disabled,
            config.extensions.prefer_combined_string,
            &mut lookup,
        );
        if let Err(err) = &result {
            warn!("failed to load OpenGL: {err}");
        }
        result
    }

    /// C flavoured loader taking an opaque pointer handed back on every call.
    ///
    /// # Safety
    ///
    /// `load` must be safe to call with `userptr` and any NUL terminated
    /// name, and must return null or an address of the named entry point.
    /// A GL context must be current on the calling thread.
    pub unsafe fn load_with_userptr(
        &mut self,
        load: LoadUserPtrFunc,
        userptr: *mut c_void,
    ) -> Result<GlVersion> {
        self.load_with(|name| load(userptr, name.as_ptr()))
    }

    /// # Safety
    ///
    /// Same contract as [`Context::load_with_userptr`], minus the pointer.
    pub unsafe fn load(&mut self, load: LoadFunc) -> Result<GlVersion> {
        self.load_with_userptr(forward_to_load_func, load as *mut c_void)
    }

    /// Loads through the system GL library, opening it on first use.
    ///
    /// # Safety
    ///
    /// A GL context created from the system GL library must be current on
    /// the calling thread.
    pub unsafe fn load_default(&mut self) -> Result<GlVersion> {
        self.load_default_with(&Config::default())
    }

    /// Like [`Context::load_default`], honouring `config`. A library opened
    /// by this call is released again when the load fails.
    ///
    /// # Safety
    ///
    /// Same contract as [`Context::load_default`]. A configured
    /// `get-proc-address` symbol must have the platform lookup's signature.
    pub unsafe fn load_default_with(&mut self, config: &Config) -> Result<GlVersion> {
        let (library, opened) = match &self.library {
            Some(library) => (Arc::clone(library), false),
            None => (Arc::new(GlLibrary::open_with(&config.library)?), true),
        };
        self.library = Some(Arc::clone(&library));

        let result = self.load_with_config(config, |name| library.proc_address(name));
        if result.is_err() && opened {
            debug!("releasing {}", library.path());
            self.library = None;
        }
        result
    }

    /// Drops the library handle together with every entry point resolved
    /// from it. The library closes once no clone of this context holds it.
    pub fn unload_default(&mut self) {
        if let Some(library) = self.library.take() {
            debug!("releasing {}", library.path());
        }
        self.clear();
    }
}

// `userptr` carries the `LoadFunc` itself.
unsafe extern "C" fn forward_to_load_func(
    userptr: *mut c_void,
    name: *const c_char,
) -> *const c_void {
    let load: LoadFunc = std::mem::transmute::<*mut c_void, LoadFunc>(userptr);
    load(name)
}

unsafe fn load_context<F>(
    context: &mut Context,
    disabled: &FxHashSet<Extension>,
    prefer_combined: bool,
    lookup: &mut F,
) -> Result<GlVersion>
where
    F: FnMut(&CStr) -> *const c_void,
{
    bind(context, Command::GetString, true, lookup);
    let get_string = context
        .get_fn::<GetStringFn>(Command::GetString)
        .ok_or(LoadError::MissingGetString)?;

    let version = get_string(GL_VERSION);
    if version.is_null() {
        return Err(LoadError::MissingVersionString);
    }
    let version_string = CStr::from_ptr(version as *const c_char).to_string_lossy();
    let version = parse_version(&version_string);
    info!("OpenGL {version} ({version_string})");
    if version == GlVersion::default() {
        warn!("could not read a version from {version_string:?}");
    }
    context.set_version(version);

    debug!("binding core entry points");
    bind_features(context, |gate| matches!(gate, Gate::Version(_)), lookup);

    debug!("probing extensions");
    let query = ExtensionQuery::query(context, version, prefer_combined)?;
    for extension in Extension::ALL.iter().copied() {
        let advertised = query.has(extension.name());
        if advertised && disabled.contains(&extension) {
            debug!("{extension} is advertised but disabled");
        }
        context.set_extension(extension, advertised && !disabled.contains(&extension));
    }

    debug!("binding extension entry points");
    bind_features(context, |gate| matches!(gate, Gate::Extension(_)), lookup);

    let filled = resolve_aliases(context);
    debug!(
        "{} entry points resolved, {filled} through aliases",
        context.loaded_count()
    );
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Version;
    use std::cell::Cell;

    thread_local! {
        static VERSION: Cell<&'static CStr> = const { Cell::new(c"2.1 Mesa") };
    }

    unsafe extern "system" fn get_string(name: u32) -> *const u8 {
        match name {
            GL_VERSION => VERSION.with(|version| version.get()).as_ptr() as *const u8,
            crate::types::GL_EXTENSIONS => c"GL_ARB_multitexture GL_EXT_bgra".as_ptr() as *const u8,
            _ => std::ptr::null(),
        }
    }

    unsafe extern "C" fn plain_loader(name: *const c_char) -> *const c_void {
        match CStr::from_ptr(name).to_bytes() {
            b"glGetString" => get_string as *const c_void,
            _ => 0x1000 as *const c_void,
        }
    }

    unsafe extern "C" fn userptr_loader(
        userptr: *mut c_void,
        name: *const c_char,
    ) -> *const c_void {
        *(userptr as *mut usize) += 1;
        plain_loader(name)
    }

    #[test]
    fn test_missing_get_string() {
        let mut context = Context::new();
        let result = unsafe { context.load_with(|_| std::ptr::null()) };
        assert_eq!(result, Err(LoadError::MissingGetString));
        assert_eq!(context.loaded_count(), 0);
    }

    #[test]
    fn test_plain_loader() {
        let mut context = Context::new();
        let version = unsafe { context.load(plain_loader) }.unwrap();
        assert_eq!(version, GlVersion::new(2, 1));
        assert!(context.has_version(Version::V2_1));
        assert!(context.has_extension(Extension::ARB_multitexture));
        assert!(context.is_loaded(Command::ActiveTextureARB));
    }

    #[test]
    fn test_userptr_is_passed_through() {
        let mut context = Context::new();
        let mut calls = 0usize;
        unsafe {
            context.load_with_userptr(userptr_loader, &mut calls as *mut usize as *mut c_void)
        }
        .unwrap();
        assert!(calls > 1);
    }

    #[test]
    fn test_unparsable_version_loads_nothing_gated() {
        VERSION.with(|version| version.set(c"unknown"));
        let mut context = Context::new();
        let version = unsafe { context.load(plain_loader) }.unwrap();
        VERSION.with(|version| version.set(c"2.1 Mesa"));
        assert_eq!(version.packed(), 0);
        assert!(!context.has_version(Version::V1_0));
        assert!(!context.is_loaded(Command::Clear));
    }

    #[test]
    fn test_disabled_extensions_are_absent() {
        let mut config = Config::default();
        config.extensions.disabled = vec!["GL_ARB_multitexture".into()];
        let mut context = Context::new();
        unsafe { context.load_with_config(&config, |name| plain_loader(name.as_ptr())) }
            .unwrap();
        assert!(!context.has_extension(Extension::ARB_multitexture));
        assert!(!context.is_loaded(Command::ActiveTextureARB));
        assert!(context.has_extension(Extension::EXT_bgra));
    }

    #[test]
    fn test_unload_default_without_library() {
        let mut context = Context::new();
        unsafe { context.load(plain_loader) }.unwrap();
        context.unload_default();
        assert_eq!(context.loaded_count(), 0);
        assert!(context.library().is_none());
    }
}
