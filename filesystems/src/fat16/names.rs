// 8.3 name handling
// Case- and padding-insensitive comparison keys plus human-readable rendering

/// Lower-case `name` and drop 0x10 and 0x20 padding characters.
pub fn normalize_directory_name(name: &str) -> String {
    name.chars()
        .filter(|&c| c != '\u{10}' && c != ' ')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Like [`normalize_directory_name`], but also drops `.` so that `readme.txt`
/// matches the raw `README  TXT` field.
pub fn normalize_file_name(name: &str) -> String {
    let without_dots: String = name.chars().filter(|&c| c != '.').collect();
    normalize_directory_name(&without_dots)
}

/// The raw 11-byte field as a string, one char per byte, padding kept.
pub fn raw_name(name: &[u8; 11]) -> String {
    name.iter().map(|&b| b as char).collect()
}

/// Render a raw field as `BASE.EXT`, or `BASE` when the extension is blank.
pub fn display_name(name: &[u8; 11]) -> String {
    let (base, ext) = split_name(name);
    if ext.is_empty() {
        base
    } else {
        format!("{}.{}", base, ext)
    }
}

/// Base and extension with trailing padding removed.
pub fn split_name(name: &[u8; 11]) -> (String, String) {
    let mut base: String = name[0..8]
        .iter()
        .map(|&b| b as char)
        .collect::<String>()
        .trim_end()
        .to_string();

    // 0x05 stands in for a leading 0xE5 in a live entry
    if name[0] == 0x05 {
        base.replace_range(0..1, "\u{E5}");
    }

    let ext = name[8..11]
        .iter()
        .map(|&b| b as char)
        .collect::<String>()
        .trim_end()
        .to_string();

    (base, ext)
}
