// Shared fixtures for FAT16 integration tests
// Builds small images in memory: 512-byte sectors, 1 sector per cluster,
// 1 reserved sector, 2 FATs of 1 sector, 32 root entries

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Write;
use std::sync::Once;
use tempfile::NamedTempFile;

pub const SECTOR: usize = 512;
pub const ROOT_ENTRIES: usize = 32;
pub const FAT_START: usize = SECTOR;
pub const ROOT_START: usize = 3 * SECTOR;
pub const DATA_START: usize = ROOT_START + ROOT_ENTRIES * 32;

pub const EOC: u16 = 0xFFFF;

static INIT: Once = Once::new();

pub fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder()
            .filter_level(log::LevelFilter::Trace)
            .is_test(true)
            .try_init();
    });
}

/// One raw 32-byte 8.3 entry.
pub fn entry(name: &[u8; 11], attributes: u8, cluster: u16, size: u32) -> [u8; 32] {
    let mut slot = [0u8; 32];
    slot[0..11].copy_from_slice(name);
    slot[11] = attributes;
    slot[26..28].copy_from_slice(&cluster.to_le_bytes());
    slot[28..32].copy_from_slice(&size.to_le_bytes());
    slot
}

pub fn deleted(name: &[u8; 11]) -> [u8; 32] {
    let mut slot = entry(name, 0x20, 0, 0);
    slot[0] = 0xE5;
    slot
}

pub fn lfn_fragment() -> [u8; 32] {
    let mut slot = [0u8; 32];
    slot[0] = 0x41;
    slot[1..11].copy_from_slice(&[b'l', 0, b'o', 0, b'n', 0, b'g', 0, b'n', 0]);
    slot[11] = 0x0F;
    slot
}

/// Deterministic content for file bodies.
pub fn pattern(len: usize, seed: u8) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8 ^ seed).collect()
}

pub struct ImageBuilder {
    bytes: Vec<u8>,
    next_slot: HashMap<u16, usize>,
}

impl ImageBuilder {
    pub fn new(data_clusters: usize) -> Self {
        let mut bytes = vec![0u8; DATA_START + data_clusters * SECTOR];

        bytes[0..3].copy_from_slice(&[0xEB, 0x3C, 0x90]);
        bytes[3..11].copy_from_slice(b"FATEATER");
        bytes[11..13].copy_from_slice(&(SECTOR as u16).to_le_bytes());
        bytes[13] = 1;
        bytes[14..16].copy_from_slice(&1u16.to_le_bytes());
        bytes[16] = 2;
        bytes[17..19].copy_from_slice(&(ROOT_ENTRIES as u16).to_le_bytes());
        let sectors = (bytes.len() / SECTOR) as u16;
        bytes[19..21].copy_from_slice(&sectors.to_le_bytes());
        bytes[21] = 0xF8;
        bytes[22..24].copy_from_slice(&1u16.to_le_bytes());
        bytes[0x26] = 0x29;
        bytes[0x27..0x2B].copy_from_slice(&0x1234_5678u32.to_le_bytes());
        bytes[0x2B..0x36].copy_from_slice(b"EVIDENCE   ");
        bytes[0x36..0x3E].copy_from_slice(b"FAT16   ");
        bytes[510] = 0x55;
        bytes[511] = 0xAA;

        let mut builder = Self { bytes, next_slot: HashMap::new() };
        builder.link(0, 0xFFF8);
        builder.link(1, 0xFFFF);
        builder
    }

    /// Write a FAT entry into both copies.
    pub fn link(&mut self, cluster: u16, value: u16) -> &mut Self {
        for fat in 0..2 {
            let offset = FAT_START + fat * SECTOR + cluster as usize * 2;
            self.bytes[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
        }
        self
    }

    /// Link `clusters` in order and terminate the last one.
    pub fn chain(&mut self, clusters: &[u16]) -> &mut Self {
        for pair in clusters.windows(2) {
            self.link(pair[0], pair[1]);
        }
        if let Some(&last) = clusters.last() {
            self.link(last, EOC);
        }
        self
    }

    fn cluster_offset(cluster: u16) -> usize {
        DATA_START + (cluster as usize - 2) * SECTOR
    }

    /// Append a raw slot to the root (cluster 0) or to a directory cluster.
    pub fn add_entry(&mut self, directory_cluster: u16, slot: [u8; 32]) -> &mut Self {
        let index = self.next_slot.entry(directory_cluster).or_insert(0);
        let base = if directory_cluster == 0 {
            assert!(*index < ROOT_ENTRIES, "root directory full");
            ROOT_START
        } else {
            assert!(*index < SECTOR / 32, "cluster {} full", directory_cluster);
            Self::cluster_offset(directory_cluster)
        };
        let offset = base + *index * 32;
        *index += 1;
        self.bytes[offset..offset + 32].copy_from_slice(&slot);
        self
    }

    /// Spread `data` over `clusters`, filling the unused tail of the last one with 0xEE.
    pub fn write_file(&mut self, clusters: &[u16], data: &[u8]) -> &mut Self {
        self.chain(clusters);
        for (i, &cluster) in clusters.iter().enumerate() {
            let offset = Self::cluster_offset(cluster);
            self.bytes[offset..offset + SECTOR].fill(0xEE);
            let start = i * SECTOR;
            if start < data.len() {
                let end = data.len().min(start + SECTOR);
                self.bytes[offset..offset + (end - start)].copy_from_slice(&data[start..end]);
            }
        }
        self
    }

    pub fn build(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    pub fn write_temp(&self) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&self.bytes).unwrap();
        file.flush().unwrap();
        file
    }
}

pub const README_SIZE: usize = 600;
pub const NOTES_SIZE: usize = 100;
pub const DEEP_SIZE: usize = 1024;

/// Image used by most tests:
///
/// ```text
/// /                 EVIDENCE (label), LFN, README.TXT (2->3), deleted, DOCS/ (4->5), EMPTY.TXT
/// /DOCS/            ., .., NOTES.TXT (6), OLD/ (7), end marker | LATE.TXT (cluster 5), DOCS alias
/// /DOCS/OLD/        ., .., DEEP.BIN (8->9)
/// ```
pub fn sample_image() -> ImageBuilder {
    let mut image = ImageBuilder::new(16);

    image
        .add_entry(0, entry(b"EVIDENCE   ", 0x08, 0, 0))
        .add_entry(0, lfn_fragment())
        .add_entry(0, entry(b"README  TXT", 0x20, 2, README_SIZE as u32))
        .add_entry(0, deleted(b"GONE    TXT"))
        .add_entry(0, entry(b"DOCS       ", 0x10, 4, 0))
        .add_entry(0, entry(b"EMPTY   TXT", 0x20, 0, 0));
    image.write_file(&[2, 3], &pattern(README_SIZE, 0x00));

    // DOCS spans two clusters; the end marker in cluster 4 only ends that cluster
    image.chain(&[4, 5]);
    image
        .add_entry(4, entry(b".          ", 0x10, 4, 0))
        .add_entry(4, entry(b"..         ", 0x10, 0, 0))
        .add_entry(4, entry(b"NOTES   TXT", 0x21, 6, NOTES_SIZE as u32))
        .add_entry(4, entry(b"OLD        ", 0x10, 7, 0))
        .add_entry(4, [0u8; 32])
        .add_entry(4, entry(b"HIDDEN  TXT", 0x20, 6, NOTES_SIZE as u32));
    image
        .add_entry(5, entry(b"LATE    TXT", 0x20, 6, NOTES_SIZE as u32))
        .add_entry(5, entry(b"DOCS       ", 0x10, 4, 0));
    image.write_file(&[6], &pattern(NOTES_SIZE, 0x5A));

    image.chain(&[7]);
    image
        .add_entry(7, entry(b".          ", 0x10, 7, 0))
        .add_entry(7, entry(b"..         ", 0x10, 4, 0))
        .add_entry(7, entry(b"DEEP    BIN", 0x20, 8, DEEP_SIZE as u32));
    image.write_file(&[8, 9], &pattern(DEEP_SIZE, 0xA5));

    image
}
