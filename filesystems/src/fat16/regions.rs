// FAT16 region layout
// FAT table, root directory and data region byte ranges derived from the BPB

use super::boot_sector::BootSectorGeometry;
use super::constants::DIR_ENTRY_SIZE;
use fateater_core::{InspectError, InspectResult};
use log::debug;
use serde::Serialize;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Regions {
    /// First copy of the FAT; the remaining copies are skipped.
    pub fat_table: Range<usize>,
    pub root_directory: Range<usize>,
    pub data: Range<usize>,
}

impl Regions {
    pub fn locate(geometry: &BootSectorGeometry, image_len: usize) -> InspectResult<Self> {
        let bytes_per_sector = geometry.bytes_per_sector as usize;
        let fat_size = geometry.fat_size_bytes();

        let overflow = || InspectError::MalformedImage("region offsets overflow".to_string());

        let fat_table_start = (geometry.reserved_sector_count as usize)
            .checked_mul(bytes_per_sector)
            .ok_or_else(overflow)?;
        let fat_table_end = fat_table_start.checked_add(fat_size).ok_or_else(overflow)?;

        let extra_fats = (geometry.fat_count as usize - 1)
            .checked_mul(fat_size)
            .ok_or_else(overflow)?;
        let root_dir_start = fat_table_end.checked_add(extra_fats).ok_or_else(overflow)?;
        let root_dir_end = root_dir_start
            .checked_add(geometry.root_entry_count as usize * DIR_ENTRY_SIZE)
            .ok_or_else(overflow)?;

        debug!(
            "FAT16 regions: fat {:#x}..{:#x}, root {:#x}..{:#x}, data {:#x}..{:#x}",
            fat_table_start, fat_table_end, root_dir_start, root_dir_end, root_dir_end, image_len
        );

        for (name, end) in [("FAT table", fat_table_end), ("root directory", root_dir_end)] {
            if end > image_len {
                return Err(InspectError::MalformedImage(format!(
                    "{} ends at byte {} but the image is only {} bytes",
                    name, end, image_len
                )));
            }
        }

        Ok(Self {
            fat_table: fat_table_start..fat_table_end,
            root_directory: root_dir_start..root_dir_end,
            data: root_dir_end..image_len,
        })
    }
}
