// FAT16 boot sector interpretation
// Decodes the BPB fields explicitly from a byte slice instead of aliasing a packed struct

use super::constants::*;
use byteorder::{ByteOrder, LittleEndian};
use fateater_core::{InspectError, InspectResult};
use serde::Serialize;

/// Geometry fields of a FAT16 boot sector, parsed once per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BootSectorGeometry {
    pub jump_boot: [u8; 3],
    pub oem_name: String,
    pub bytes_per_sector: u16,
    pub sectors_per_cluster: u8,
    pub reserved_sector_count: u16,
    pub fat_count: u8,
    pub root_entry_count: u16,
    pub total_sectors_16: u16,
    pub media_descriptor: u8,
    pub fat_size_16: u16,
    pub sectors_per_track: u16,
    pub head_count: u16,
    pub hidden_sectors: u32,
    pub total_sectors_32: u32,
    // Only present when the extended boot signature (0x29) is set
    pub volume_id: Option<u32>,
    pub volume_label: Option<String>,
    pub fs_type: Option<String>,
}

impl BootSectorGeometry {
    pub fn parse(image: &[u8]) -> InspectResult<Self> {
        if image.len() < BOOT_SECTOR_SIZE {
            return Err(InspectError::MalformedImage(format!(
                "image is {} bytes, shorter than the {}-byte boot sector",
                image.len(),
                BOOT_SECTOR_SIZE
            )));
        }
        let bs = &image[..BOOT_SECTOR_SIZE];

        let mut jump_boot = [0u8; 3];
        jump_boot.copy_from_slice(&bs[BS_JMP_BOOT..BS_JMP_BOOT + 3]);

        let extended = bs[BS16_BOOT_SIG] == EXTENDED_BOOT_SIGNATURE;

        let geometry = Self {
            jump_boot,
            oem_name: padded_ascii(&bs[BS_OEM_NAME..BS_OEM_NAME + 8]),
            bytes_per_sector: LittleEndian::read_u16(&bs[BPB_BYTES_PER_SEC..]),
            sectors_per_cluster: bs[BPB_SEC_PER_CLUS],
            reserved_sector_count: LittleEndian::read_u16(&bs[BPB_RSVD_SEC_CNT..]),
            fat_count: bs[BPB_NUM_FATS],
            root_entry_count: LittleEndian::read_u16(&bs[BPB_ROOT_ENT_CNT..]),
            total_sectors_16: LittleEndian::read_u16(&bs[BPB_TOT_SEC16..]),
            media_descriptor: bs[BPB_MEDIA],
            fat_size_16: LittleEndian::read_u16(&bs[BPB_FAT_SZ16..]),
            sectors_per_track: LittleEndian::read_u16(&bs[BPB_SEC_PER_TRK..]),
            head_count: LittleEndian::read_u16(&bs[BPB_NUM_HEADS..]),
            hidden_sectors: LittleEndian::read_u32(&bs[BPB_HIDD_SEC..]),
            total_sectors_32: LittleEndian::read_u32(&bs[BPB_TOT_SEC32..]),
            volume_id: extended.then(|| LittleEndian::read_u32(&bs[BS16_VOL_ID..])),
            volume_label: extended.then(|| padded_ascii(&bs[BS16_VOL_LAB..BS16_VOL_LAB + 11])),
            fs_type: extended.then(|| padded_ascii(&bs[BS16_FIL_SYS_TYPE..BS16_FIL_SYS_TYPE + 8])),
        };

        geometry.validate()?;
        Ok(geometry)
    }

    /// Every field the region arithmetic depends on must be non-zero.
    fn validate(&self) -> InspectResult<()> {
        let required = [
            ("bytes per sector", self.bytes_per_sector as u32),
            ("sectors per cluster", self.sectors_per_cluster as u32),
            ("reserved sector count", self.reserved_sector_count as u32),
            ("FAT count", self.fat_count as u32),
            ("root entry count", self.root_entry_count as u32),
            ("FAT size", self.fat_size_16 as u32),
        ];

        for (field, value) in required {
            if value == 0 {
                return Err(InspectError::MalformedImage(format!("{} is zero", field)));
            }
        }
        Ok(())
    }

    pub fn bytes_per_cluster(&self) -> usize {
        self.bytes_per_sector as usize * self.sectors_per_cluster as usize
    }

    pub fn fat_size_bytes(&self) -> usize {
        self.fat_size_16 as usize * self.bytes_per_sector as usize
    }

    /// Informational only; region layout never depends on it.
    pub fn total_sectors(&self) -> u64 {
        if self.total_sectors_16 != 0 {
            self.total_sectors_16 as u64
        } else {
            self.total_sectors_32 as u64
        }
    }
}

fn padded_ascii(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '.' })
        .collect::<String>()
        .trim_end()
        .to_string()
}
