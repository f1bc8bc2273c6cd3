use crate::context::GlVersion;

/// Prefixes some drivers put in front of the number, first match wins.
pub const VERSION_PREFIXES: &[&str] = &["OpenGL ES-CM ", "OpenGL ES-CL ", "OpenGL ES "];

/// Parses a `GL_VERSION` string such as `"4.6.0 NVIDIA 535.54"` or
/// `"OpenGL ES 3.1 Mesa 23.0"`.
///
/// Reads `<int>.<int>` the way `sscanf("%d.%d")` would: text that does not
/// parse leaves the affected component at zero instead of failing.
pub fn parse_version(version: &str) -> GlVersion {
    let version = VERSION_PREFIXES
        .iter()
        .find_map(|prefix| version.strip_prefix(prefix))
        .unwrap_or(version);

    let Some((major, rest)) = scan_int(version) else {
        return GlVersion::default();
    };
    let minor = rest
        .strip_prefix('.')
        .and_then(scan_int)
        .map(|(minor, _)| minor)
        .unwrap_or(0);

    GlVersion::new(major, minor)
}

// `%d`: optional leading whitespace, optional sign, at least one digit.
// Negative values clamp to zero since no tier is below 1.0.
fn scan_int(text: &str) -> Option<(u32, &str)> {
    let text = text.trim_start();
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits = unsigned
        .bytes()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }

    let value = unsigned[..digits]
        .bytes()
        .fold(0u32, |acc, byte| {
            acc.saturating_mul(10).saturating_add(u32::from(byte - b'0'))
        });
    let value = if negative { 0 } else { value };
    Some((value, &unsigned[digits..]))
}
