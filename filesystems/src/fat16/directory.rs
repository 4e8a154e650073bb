// FAT16 directory entry decoding
// Turns 32-byte slots of the root directory or a data cluster into records

use super::constants::*;
use super::names;
use byteorder::{ByteOrder, LittleEndian};
use fateater_core::{InspectError, InspectResult};
use log::{debug, trace};

/// FAT Directory Entry Attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileAttributes(pub u8);

impl FileAttributes {
    pub const READ_ONLY: u8 = 0x01;
    pub const HIDDEN: u8 = 0x02;
    pub const SYSTEM: u8 = 0x04;
    pub const VOLUME_ID: u8 = 0x08;
    pub const DIRECTORY: u8 = 0x10;
    pub const ARCHIVE: u8 = 0x20;
    pub const LFN: u8 = 0x0F;  // Long filename entry

    pub fn is_read_only(&self) -> bool { self.0 & Self::READ_ONLY != 0 }
    pub fn is_hidden(&self) -> bool { self.0 & Self::HIDDEN != 0 }
    pub fn is_system(&self) -> bool { self.0 & Self::SYSTEM != 0 }
    pub fn is_volume_id(&self) -> bool { self.0 & Self::VOLUME_ID != 0 }
    pub fn is_directory(&self) -> bool { self.0 & Self::DIRECTORY != 0 }
    pub fn is_archive(&self) -> bool { self.0 & Self::ARCHIVE != 0 }
    pub fn is_lfn(&self) -> bool { self.0 == Self::LFN }
}

/// A decoded 8.3 directory entry. Owns its bytes; nothing points back into the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryRecord {
    pub name: [u8; 11],
    pub attributes: FileAttributes,
    pub reserved: u16,
    pub creation_time: u16,
    pub creation_date: u16,
    pub last_access_date: u16,
    pub first_cluster_high: u16,
    pub write_time: u16,
    pub write_date: u16,
    pub first_cluster_low: u16,
    pub file_size: u32,
}

impl DirectoryRecord {
    /// Decode one 32-byte slot.
    pub fn parse(slot: &[u8]) -> InspectResult<Self> {
        if slot.len() < DIR_ENTRY_SIZE {
            return Err(InspectError::CorruptRegion(format!(
                "directory slot is {} bytes, expected {}",
                slot.len(),
                DIR_ENTRY_SIZE
            )));
        }

        let mut name = [0u8; 11];
        name.copy_from_slice(&slot[DIR_NAME..DIR_NAME + 11]);

        Ok(Self {
            name,
            attributes: FileAttributes(slot[DIR_ATTR]),
            reserved: LittleEndian::read_u16(&slot[DIR_RESERVED..]),
            creation_time: LittleEndian::read_u16(&slot[DIR_CRT_TIME..]),
            creation_date: LittleEndian::read_u16(&slot[DIR_CRT_DATE..]),
            last_access_date: LittleEndian::read_u16(&slot[DIR_LST_ACC_DATE..]),
            first_cluster_high: LittleEndian::read_u16(&slot[DIR_FST_CLUS_HI..]),
            write_time: LittleEndian::read_u16(&slot[DIR_WRT_TIME..]),
            write_date: LittleEndian::read_u16(&slot[DIR_WRT_DATE..]),
            first_cluster_low: LittleEndian::read_u16(&slot[DIR_FST_CLUS_LO..]),
            file_size: LittleEndian::read_u32(&slot[DIR_FILE_SIZE..]),
        })
    }

    /// FAT16 only uses the low half.
    pub fn first_cluster(&self) -> u16 {
        self.first_cluster_low
    }

    pub fn raw_name(&self) -> String {
        names::raw_name(&self.name)
    }

    pub fn display_name(&self) -> String {
        names::display_name(&self.name)
    }

    pub fn is_directory(&self) -> bool {
        self.attributes.is_directory()
    }
}

/// Where a directory region came from. Dot entries are only reported for subdirectories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryKind {
    Root,
    Subdirectory,
}

/// Decode every live entry of `region` in on-disk order.
///
/// Stops at the first end-of-directory slot, skips deleted and LFN slots,
/// and skips `.`/`..` only when decoding the root directory.
pub fn decode_directory(region: &[u8], kind: DirectoryKind) -> InspectResult<Vec<DirectoryRecord>> {
    let mut records = Vec::new();
    let mut offset = 0;

    while offset < region.len() {
        let slot = region.get(offset..offset + DIR_ENTRY_SIZE).ok_or_else(|| {
            InspectError::CorruptRegion(format!(
                "directory slot at offset {:#x} runs past the {}-byte region",
                offset,
                region.len()
            ))
        })?;

        match slot[0] {
            ENTRY_END => {
                trace!("End of directory at offset {:#x}", offset);
                break;
            }
            ENTRY_DELETED => {
                trace!("Skipping deleted entry at offset {:#x}", offset);
            }
            ENTRY_DOT if kind == DirectoryKind::Root => {
                trace!("Skipping dot entry in root at offset {:#x}", offset);
            }
            _ if slot[DIR_ATTR] == FileAttributes::LFN => {
                trace!("Skipping LFN entry at offset {:#x}", offset);
            }
            _ => records.push(DirectoryRecord::parse(slot)?),
        }

        offset += DIR_ENTRY_SIZE;
    }

    debug!("Decoded {} entries from {:?} region", records.len(), kind);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(name: &[u8; 11], attr: u8, cluster: u16, size: u32) -> [u8; 32] {
        let mut slot = [0u8; 32];
        slot[0..11].copy_from_slice(name);
        slot[11] = attr;
        slot[26..28].copy_from_slice(&cluster.to_le_bytes());
        slot[28..32].copy_from_slice(&size.to_le_bytes());
        slot
    }

    fn region(slots: &[[u8; 32]], total_slots: usize) -> Vec<u8> {
        let mut region = vec![0u8; total_slots * 32];
        for (i, s) in slots.iter().enumerate() {
            region[i * 32..(i + 1) * 32].copy_from_slice(s);
        }
        region
    }

    #[test]
    fn test_parse_fields() {
        let mut raw = slot(b"README  TXT", FileAttributes::ARCHIVE, 0x0005, 1234);
        raw[20..22].copy_from_slice(&0x0001u16.to_le_bytes());
        raw[22..24].copy_from_slice(&0x6000u16.to_le_bytes());
        raw[24..26].copy_from_slice(&0x5821u16.to_le_bytes());

        let record = DirectoryRecord::parse(&raw).unwrap();
        assert_eq!(record.display_name(), "README.TXT");
        assert_eq!(record.attributes, FileAttributes(0x20));
        assert_eq!(record.first_cluster(), 5);
        assert_eq!(record.first_cluster_high, 1);
        assert_eq!(record.write_time, 0x6000);
        assert_eq!(record.write_date, 0x5821);
        assert_eq!(record.file_size, 1234);
        assert!(!record.is_directory());
    }

    #[test]
    fn test_end_marker_stops_decoding() {
        let mut slots: Vec<[u8; 32]> = (0..5)
            .map(|i| slot(format!("FILE{}   TXT", i).as_bytes().try_into().unwrap(), 0x20, 2 + i, 10))
            .collect();
        slots.push([0u8; 32]);
        slots.push(slot(b"GHOST   TXT", 0x20, 9, 10));

        let records = decode_directory(&region(&slots, 16), DirectoryKind::Root).unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(records[4].display_name(), "FILE4.TXT");
    }

    #[test]
    fn test_skip_rules() {
        let mut deleted = slot(b"OLD     TXT", 0x20, 3, 10);
        deleted[0] = ENTRY_DELETED;
        let slots = [
            slot(b".          ", 0x10, 4, 0),
            slot(b"..         ", 0x10, 0, 0),
            deleted,
            slot(b"Aa.b.c.d.e.", FileAttributes::LFN, 0, 0),
            slot(b"KEEP    BIN", 0x20, 5, 99),
        ];
        let data = region(&slots, 8);

        let root = decode_directory(&data, DirectoryKind::Root).unwrap();
        assert_eq!(root.len(), 1);
        assert_eq!(root[0].display_name(), "KEEP.BIN");

        let sub = decode_directory(&data, DirectoryKind::Subdirectory).unwrap();
        let names: Vec<String> = sub.iter().map(|r| r.display_name()).collect();
        assert_eq!(names, vec![".", "..", "KEEP.BIN"]);
    }

    #[test]
    fn test_attribute_bits() {
        let attrs = FileAttributes(FileAttributes::READ_ONLY | FileAttributes::HIDDEN | FileAttributes::DIRECTORY);
        assert!(attrs.is_read_only());
        assert!(attrs.is_hidden());
        assert!(!attrs.is_system());
        assert!(!attrs.is_volume_id());
        assert!(attrs.is_directory());
        assert!(!attrs.is_archive());
        assert!(!attrs.is_lfn());
        assert!(FileAttributes(0x0F).is_lfn());
    }

    #[test]
    fn test_partial_slot_is_corrupt() {
        let mut data = region(&[slot(b"A       TXT", 0x20, 2, 1)], 1);
        data.extend_from_slice(&[0x41; 10]);

        let err = decode_directory(&data, DirectoryKind::Subdirectory).unwrap_err();
        assert!(matches!(err, InspectError::CorruptRegion(_)));
    }
}
