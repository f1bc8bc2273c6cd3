use crate::context::{Context, GlVersion};
use crate::error::{LoadError, Result};
use crate::registry::Command;
use crate::types::{
    GetIntegervFn, GetStringFn, GetStringiFn, GLint, GL_EXTENSIONS, GL_NUM_EXTENSIONS,
};
use rustc_hash::FxHashSet;
use std::ffi::{c_char, CStr};
use tracing::debug;

/// Extensions advertised by the driver, in whichever shape it handed them out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionQuery {
    /// One name per `glGetStringi(GL_EXTENSIONS, i)` call, copied out.
    Indexed(FxHashSet<String>),
    /// The space separated `glGetString(GL_EXTENSIONS)` string.
    Combined(String),
}

impl ExtensionQuery {
    pub fn from_string(extensions: impl Into<String>) -> Self {
        ExtensionQuery::Combined(extensions.into())
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ExtensionQuery::Indexed(names.into_iter().map(Into::into).collect())
    }

    /// Whether `name` is advertised as a whole name, never as a prefix of a
    /// longer one.
    pub fn has(&self, name: &str) -> bool {
        match self {
            ExtensionQuery::Indexed(names) => names.contains(name),
            ExtensionQuery::Combined(extensions) => has_token(extensions, name),
        }
    }

    pub fn is_indexed(&self) -> bool {
        matches!(self, ExtensionQuery::Indexed(_))
    }

    /// Asks the driver behind `context` for its extensions.
    ///
    /// Contexts reporting 3.0 or newer are asked one name at a time and must
    /// provide `glGetIntegerv` and `glGetStringi`; older ones hand out the
    /// combined string. `prefer_combined` tries the combined string first on
    /// newer contexts too, which compatibility profiles still answer.
    ///
    /// # Safety
    ///
    /// The pointers stored for `glGetString`, `glGetIntegerv` and
    /// `glGetStringi` must be the driver's, callable on this thread.
    pub unsafe fn query(
        context: &Context,
        version: GlVersion,
        prefer_combined: bool,
    ) -> Result<Self> {
        let indexed = version.major >= 3;
        if !indexed || prefer_combined {
            match Self::query_combined(context) {
                Ok(query) => return Ok(query),
                Err(err) if !indexed => return Err(err),
                Err(err) => debug!("{err}, falling back to glGetStringi"),
            }
        }
        Self::query_indexed(context)
    }

    unsafe fn query_combined(context: &Context) -> Result<Self> {
        let get_string = context
            .get_fn::<GetStringFn>(Command::GetString)
            .ok_or(LoadError::MissingGetString)?;
        let extensions = get_string(GL_EXTENSIONS);
        if extensions.is_null() {
            return Err(LoadError::MissingExtensionString);
        }
        let extensions = CStr::from_ptr(extensions as *const c_char);
        Ok(ExtensionQuery::Combined(
            extensions.to_string_lossy().into_owned(),
        ))
    }

    unsafe fn query_indexed(context: &Context) -> Result<Self> {
        let (Some(get_integerv), Some(get_stringi)) = (
            context.get_fn::<GetIntegervFn>(Command::GetIntegerv),
            context.get_fn::<GetStringiFn>(Command::GetStringi),
        ) else {
            return Err(LoadError::MissingExtensionQuery);
        };

        let mut count: GLint = 0;
        get_integerv(GL_NUM_EXTENSIONS, &mut count);
        let count = u32::try_from(count).unwrap_or(0);

        let mut names = FxHashSet::with_capacity_and_hasher(
            count as usize,
            Default::default(),
        );
        for index in 0..count {
            let name = get_stringi(GL_EXTENSIONS, index);
            if name.is_null() {
                // Everything copied so far is dropped with `names`.
                return Err(LoadError::NullExtensionName { index });
            }
            let name = CStr::from_ptr(name as *const c_char);
            names.insert(name.to_string_lossy().into_owned());
        }
        debug!("driver advertises {} extensions", names.len());
        Ok(ExtensionQuery::Indexed(names))
    }
}

/// Token boundary aware search in a space separated list: `name` only
/// matches when flanked by spaces or the ends of `list`.
pub fn has_token(list: &str, name: &str) -> bool {
    !name.is_empty() && list.split(' ').any(|token| token == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_boundaries() {
        let list = "GL_ARB_shader_objects_foo GL_EXT_bgra";
        assert!(!has_token(list, "GL_ARB_shader_objects"));
        assert!(has_token(list, "GL_ARB_shader_objects_foo"));
        assert!(has_token(list, "GL_EXT_bgra"));

        assert!(has_token("GL_ARB_shader_objects", "GL_ARB_shader_objects"));
        assert!(has_token("GL_A GL_ARB_shader_objects", "GL_ARB_shader_objects"));
        assert!(has_token("GL_ARB_shader_objects GL_B", "GL_ARB_shader_objects"));
        assert!(has_token("GL_A GL_ARB_shader_objects ", "GL_ARB_shader_objects"));
        assert!(!has_token("XGL_ARB_shader_objects", "GL_ARB_shader_objects"));
        assert!(!has_token("GL_EXT_bgra", "GL_EXT"));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(!has_token("", "GL_EXT_bgra"));
        assert!(!has_token("GL_A  GL_B", ""));
        assert!(!ExtensionQuery::from_string("").has("GL_EXT_bgra"));
        assert!(!ExtensionQuery::from_names(Vec::<String>::new()).has("GL_EXT_bgra"));
    }

    #[test]
    fn test_indexed_is_exact() {
        let query = ExtensionQuery::from_names(["GL_ARB_shader_objects_foo", "GL_KHR_debug"]);
        assert!(query.is_indexed());
        assert!(query.has("GL_KHR_debug"));
        assert!(!query.has("GL_ARB_shader_objects"));
        assert!(!query.has("GL_KHR"));
    }
}
