//! Pure path-string utilities
//!
//! Link targets and repository prefixes are URL-style, `/`-separated strings,
//! never OS paths. Everything here is a stateless string operation.

/// Append `suffix` unless the string is empty or already ends with it
pub fn suffix_with(text: &str, suffix: char) -> String {
    if text.is_empty() || text.ends_with(suffix) {
        text.to_string()
    } else {
        format!("{text}{suffix}")
    }
}

/// Prepend `prefix` unless the string is empty or already starts with it
pub fn prefix_with(text: &str, prefix: char) -> String {
    if text.is_empty() || text.starts_with(prefix) {
        text.to_string()
    } else {
        format!("{prefix}{text}")
    }
}

/// Strip trailing `/` and trailing `/.` segments
pub fn clean_full_path(path: &str) -> &str {
    let mut path = path;
    loop {
        if let Some(stripped) = path.strip_suffix('/') {
            path = stripped;
        } else if let Some(stripped) = path.strip_suffix("/.") {
            path = stripped;
        } else {
            return path;
        }
    }
}

/// Directory portion of a path, up to and including the last `/`
///
/// Empty when the path has no directory. `dir_part(p) + last_name(p) == p`
/// always holds.
pub fn dir_part(path: &str) -> &str {
    match path.rfind('/') {
        Some(pos) => &path[..=pos],
        None => "",
    }
}

/// File-name portion of a path (everything after the last `/`)
pub fn last_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}

/// File name without its extension
pub fn name_no_ext(path: &str) -> &str {
    let name = last_name(path);
    match name.rfind('.') {
        Some(pos) if pos > 0 => &name[..pos],
        _ => name,
    }
}

/// Extension of the file name, without the dot
///
/// A leading-dot name like `.gitignore` has no extension.
pub fn ext(path: &str) -> &str {
    let name = last_name(path);
    match name.rfind('.') {
        Some(pos) if pos > 0 => &name[pos + 1..],
        _ => "",
    }
}

/// Join `tail` onto `base` with base-relative semantics
///
/// Empty and `.` segments are dropped; `..` pops the last segment of the
/// accumulated path. The result carries no trailing slash.
pub fn append(base: &str, tail: &str) -> String {
    let mut full = clean_full_path(base).to_string();
    for part in tail.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                if let Some(pos) = full.rfind('/') {
                    full.truncate(pos);
                }
            }
            _ => {
                full.push('/');
                full.push_str(part);
            }
        }
    }
    full
}

/// Decode `%hh` percent escapes
///
/// Invalid escapes pass through untouched; decoded bytes are interpreted as
/// UTF-8, lossily.
pub fn url_decode(text: &str) -> String {
    if !text.contains('%') {
        return text.to_string();
    }

    let bytes = text.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let Some(byte) = hex_pair(bytes[i + 1], bytes[i + 2]) {
                decoded.push(byte);
                i += 3;
                continue;
            }
        }
        decoded.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

fn hex_pair(high: u8, low: u8) -> Option<u8> {
    let high = (high as char).to_digit(16)?;
    let low = (low as char).to_digit(16)?;
    Some((high * 16 + low) as u8)
}
