use crate::library::GlLibrary;
use crate::registry::{Command, Extension, Version};
use std::ffi::c_void;
use std::ptr::NonNull;
use std::sync::Arc;

/// Address of a resolved entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Proc(NonNull<c_void>);

// Code addresses carry no thread affinity.
unsafe impl Send for Proc {}
unsafe impl Sync for Proc {}

impl Proc {
    #[inline]
    pub fn new(address: *const c_void) -> Option<Proc> {
        NonNull::new(address as *mut c_void).map(Proc)
    }

    #[inline]
    pub fn as_ptr(self) -> *const c_void {
        self.0.as_ptr()
    }
}

/// Version reported by the driver.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GlVersion {
    pub major: u32,
    pub minor: u32,
}

impl GlVersion {
    #[inline]
    pub const fn new(major: u32, minor: u32) -> Self {
        GlVersion { major, minor }
    }

    /// Largest minor that survives [`GlVersion::packed`].
    pub const MAX_PACKED_MINOR: u32 = 9999;

    /// `major * 10000 + minor`, zero meaning "nothing loaded".
    ///
    /// Minors above [`GlVersion::MAX_PACKED_MINOR`] clamp to it so the major
    /// is never bumped, and versions past `u32::MAX` saturate.
    #[inline]
    pub const fn packed(self) -> u32 {
        let minor = if self.minor > Self::MAX_PACKED_MINOR {
            Self::MAX_PACKED_MINOR
        } else {
            self.minor
        };
        let packed = self.major as u64 * 10000 + minor as u64;
        if packed > u32::MAX as u64 {
            u32::MAX
        } else {
            packed as u32
        }
    }

    /// Inverse of [`GlVersion::packed`] for versions it did not clamp.
    #[inline]
    pub const fn from_packed(packed: u32) -> Self {
        GlVersion {
            major: packed / 10000,
            minor: packed % 10000,
        }
    }

    #[inline]
    pub const fn supports(self, version: Version) -> bool {
        version.is_supported_by(self.major, self.minor)
    }
}

impl std::fmt::Display for GlVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Capability table: one flag per core tier and extension, one slot per entry
/// point, plus the GL library when the context opened one itself.
///
/// Owned by the caller and filled in place by the `load*` methods. Nothing is
/// synchronised; install a clone per thread with [`crate::current`] when
/// several threads need one.
#[derive(Clone)]
pub struct Context {
    version: GlVersion,
    versions: [bool; Version::COUNT],
    extensions: Box<[bool]>,
    pointers: Box<[Option<Proc>]>,
    pub(crate) library: Option<Arc<GlLibrary>>,
}

impl Default for Context {
    fn default() -> Self {
        Context {
            version: GlVersion::default(),
            versions: [false; Version::COUNT],
            extensions: vec![false; Extension::COUNT].into_boxed_slice(),
            pointers: vec![None; Command::COUNT].into_boxed_slice(),
            library: None,
        }
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("version", &self.version)
            .field("extensions", &self.supported_extensions().count())
            .field("loaded", &self.loaded_count())
            .field("library", &self.library.as_ref().map(|library| library.path()))
            .finish()
    }
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn version(&self) -> GlVersion {
        self.version
    }

    #[inline]
    pub fn has_version(&self, version: Version) -> bool {
        self.versions[version.index()]
    }

    #[inline]
    pub fn has_extension(&self, extension: Extension) -> bool {
        self.extensions[extension.index()]
    }

    /// Looks an extension up by its advertised name. Names outside the
    /// registry are reported unsupported.
    pub fn is_extension_supported(&self, name: &str) -> bool {
        Extension::from_name(name)
            .map(|extension| self.has_extension(extension))
            .unwrap_or(false)
    }

    pub fn supported_extensions(&self) -> impl Iterator<Item = Extension> + '_ {
        Extension::ALL
            .iter()
            .copied()
            .filter(|extension| self.has_extension(*extension))
    }

    #[inline]
    pub fn get(&self, command: Command) -> Option<Proc> {
        self.pointers[command.index()]
    }

    #[inline]
    pub fn is_loaded(&self, command: Command) -> bool {
        self.get(command).is_some()
    }

    /// Reinterprets the slot as a typed function pointer.
    ///
    /// # Safety
    ///
    /// `F` must be an `unsafe extern "system" fn` type matching the registry
    /// signature of `command`.
    pub unsafe fn get_fn<F: Copy>(&self, command: Command) -> Option<F> {
        assert_eq!(
            std::mem::size_of::<F>(),
            std::mem::size_of::<*const c_void>(),
            "{command} must be read as a function pointer"
        );
        self.get(command)
            .map(|proc| std::mem::transmute_copy::<*const c_void, F>(&proc.as_ptr()))
    }

    pub fn loaded_count(&self) -> usize {
        self.pointers.iter().filter(|slot| slot.is_some()).count()
    }

    /// Path of the library opened by [`Context::load_default`], if any.
    pub fn library(&self) -> Option<&GlLibrary> {
        self.library.as_deref()
    }

    /// Forgets everything resolved so far. An opened library stays open.
    pub fn clear(&mut self) {
        let library = self.library.take();
        *self = Context {
            library,
            ..Context::default()
        };
    }

    #[inline]
    pub(crate) fn set(&mut self, command: Command, proc: Option<Proc>) {
        self.pointers[command.index()] = proc;
    }

    #[inline]
    pub(crate) fn set_version(&mut self, version: GlVersion) {
        self.version = version;
        for tier in Version::ALL {
            self.versions[tier.index()] = version.supports(*tier);
        }
    }

    #[inline]
    pub(crate) fn set_extension(&mut self, extension: Extension, present: bool) {
        self.extensions[extension.index()] = present;
    }
}
