use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glbind::types::{GLenum, GLint, GLubyte, GLuint, GL_EXTENSIONS, GL_NUM_EXTENSIONS, GL_VERSION};
use glbind::{has_token, Command, Context, Extension};
use std::ffi::{c_void, CStr};
use std::hint::black_box;
use std::sync::OnceLock;

// Advertises every extension the registry knows about.
fn extension_names() -> &'static [std::ffi::CString] {
    static NAMES: OnceLock<Vec<std::ffi::CString>> = OnceLock::new();
    NAMES.get_or_init(|| {
        Extension::ALL
            .iter()
            .filter_map(|extension| std::ffi::CString::new(extension.name()).ok())
            .collect()
    })
}

fn combined_string() -> &'static CStr {
    static COMBINED: OnceLock<std::ffi::CString> = OnceLock::new();
    COMBINED.get_or_init(|| {
        let names: Vec<&str> = Extension::ALL.iter().map(|extension| extension.name()).collect();
        std::ffi::CString::new(names.join(" ")).unwrap_or_default()
    })
}

unsafe extern "system" fn get_string_core(name: GLenum) -> *const GLubyte {
    match name {
        GL_VERSION => c"4.6.0 NVIDIA 535.54".as_ptr().cast(),
        _ => std::ptr::null(),
    }
}

unsafe extern "system" fn get_string_legacy(name: GLenum) -> *const GLubyte {
    match name {
        GL_VERSION => c"2.1 Mesa 23.0".as_ptr().cast(),
        GL_EXTENSIONS => combined_string().as_ptr().cast(),
        _ => std::ptr::null(),
    }
}

unsafe extern "system" fn get_integerv(pname: GLenum, data: *mut GLint) {
    if pname == GL_NUM_EXTENSIONS {
        *data = extension_names().len() as GLint;
    }
}

unsafe extern "system" fn get_stringi(_name: GLenum, index: GLuint) -> *const GLubyte {
    extension_names()
        .get(index as usize)
        .map(|name| name.as_ptr().cast())
        .unwrap_or(std::ptr::null())
}

fn lookup(get_string: *const c_void) -> impl FnMut(&CStr) -> *const c_void {
    move |name| match name.to_bytes() {
        b"glGetString" => get_string,
        b"glGetIntegerv" => get_integerv as *const c_void,
        b"glGetStringi" => get_stringi as *const c_void,
        _ => 0x1000 as *const c_void,
    }
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");
    let drivers = [
        ("indexed", get_string_core as *const c_void),
        ("combined", get_string_legacy as *const c_void),
    ];

    for (name, get_string) in drivers {
        group.bench_with_input(BenchmarkId::new("load_with", name), &get_string, |b, get_string| {
            let mut context = Context::new();
            b.iter(|| {
                let version = unsafe { context.load_with(lookup(*get_string)) };
                black_box(version)
            })
        });
    }
    group.finish();
}

fn bench_has_token(c: &mut Criterion) {
    let list = combined_string().to_string_lossy();
    let last = Extension::ALL[Extension::COUNT - 1].name();

    c.bench_function("has_token_last", |b| {
        b.iter(|| has_token(black_box(&list), black_box(last)))
    });
    c.bench_function("has_token_missing", |b| {
        b.iter(|| has_token(black_box(&list), black_box("GL_ARB_shader_objects_foo")))
    });
}

fn bench_lookup_by_name(c: &mut Criterion) {
    c.bench_function("command_from_name", |b| {
        b.iter(|| Command::from_name(black_box("glViewport")))
    });
}

criterion_group!(benches, bench_load, bench_has_token, bench_lookup_by_name);
criterion_main!(benches);
