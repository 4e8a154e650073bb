// Display rows for directory listings
// One row per decoded record; rendering itself is left to the caller

use super::directory::{DirectoryRecord, FileAttributes};
use super::names::split_name;
use super::timestamps::format_fat_datetime;
use serde::Serialize;

/// Attribute bits in bit order 0 to 5 with their glyphs.
pub const ATTRIBUTE_GLYPHS: [(u8, char); 6] = [
    (FileAttributes::READ_ONLY, 'R'),
    (FileAttributes::HIDDEN, 'H'),
    (FileAttributes::SYSTEM, 'S'),
    (FileAttributes::VOLUME_ID, 'V'),
    (FileAttributes::DIRECTORY, 'D'),
    (FileAttributes::ARCHIVE, 'A'),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingRow {
    pub name: String,
    pub extension: String,
    pub size: u32,
    pub size_display: String,
    pub attributes: String,
    pub first_cluster: String,
    pub modified: Option<String>,
}

impl From<&DirectoryRecord> for ListingRow {
    fn from(record: &DirectoryRecord) -> Self {
        let (name, extension) = split_name(&record.name);
        Self {
            name,
            extension,
            size: record.file_size,
            size_display: human_size(record.file_size as u64),
            attributes: attribute_glyphs(record.attributes),
            first_cluster: format!("{:04X}", record.first_cluster()),
            modified: format_fat_datetime(record.write_date, record.write_time),
        }
    }
}

pub fn listing_rows(records: &[DirectoryRecord]) -> Vec<ListingRow> {
    records.iter().map(ListingRow::from).collect()
}

/// Each bit is tested on its own, so combined attributes yield several glyphs.
pub fn attribute_glyphs(attributes: FileAttributes) -> String {
    ATTRIBUTE_GLYPHS
        .iter()
        .filter(|(mask, _)| attributes.0 & mask != 0)
        .map(|&(_, glyph)| glyph)
        .collect()
}

pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}
