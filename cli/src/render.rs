// Console rendering for listings and the boot sector header

use fateater_filesystems::{BootSectorGeometry, ListingRow};
use std::io::{self, Write};

const HEADERS: [&str; 6] = ["File Name", "File Extension", "File Size", "Attribute", "First Cluster", "Modified"];

fn cells(row: &ListingRow) -> [String; 6] {
    [
        row.name.clone(),
        row.extension.clone(),
        row.size_display.clone(),
        row.attributes.clone(),
        row.first_cluster.clone(),
        row.modified.clone().unwrap_or_else(|| "-".to_string()),
    ]
}

/// Left-aligned table with one column per listing field.
pub fn write_table<W: Write>(out: &mut W, rows: &[ListingRow]) -> io::Result<()> {
    let body: Vec<[String; 6]> = rows.iter().map(cells).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for line in &body {
        for (width, cell) in widths.iter_mut().zip(line.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let write_line = |out: &mut W, line: &[String]| -> io::Result<()> {
        let padded: Vec<String> = line
            .iter()
            .zip(widths.iter())
            .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
            .collect();
        writeln!(out, "{}", padded.join("  ").trim_end())
    };

    let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    write_line(out, &header)?;
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    write_line(out, &rule)?;
    for line in &body {
        write_line(out, line)?;
    }
    Ok(())
}

pub fn write_header<W: Write>(out: &mut W, header: &BootSectorGeometry) -> io::Result<()> {
    writeln!(out, "oem: {}", header.oem_name)?;
    writeln!(out, "bytesPerSector: {}", header.bytes_per_sector)?;
    writeln!(out, "sectorsPerCluster: {}", header.sectors_per_cluster)?;
    writeln!(out, "reservedSectorCount: {}", header.reserved_sector_count)?;
    writeln!(out, "fatCount: {}", header.fat_count)?;
    writeln!(out, "rootEntryCount: {}", header.root_entry_count)?;
    writeln!(out, "fatSize: {}", header.fat_size_16)?;
    writeln!(out, "totalSectors: {}", header.total_sectors())?;
    if let Some(label) = &header.volume_label {
        writeln!(out, "volumeLabel: {}", label)?;
    }
    if let Some(fs_type) = &header.fs_type {
        writeln!(out, "fsType: {}", fs_type)?;
    }
    Ok(())
}
