// FAT16 cluster chain traversal
// Follows 16-bit FAT entries from a starting cluster until a terminal marker

use super::constants::*;
use byteorder::{ByteOrder, LittleEndian};
use fateater_core::{InspectError, InspectResult};
use log::{trace, warn};
use std::collections::HashSet;

/// Ordered, non-empty list of clusters in disk order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterChain(Vec<u16>);

impl ClusterChain {
    /// The chain standing for the fixed root directory.
    pub fn root() -> Self {
        Self(vec![ROOT_SENTINEL])
    }

    pub fn first(&self) -> u16 {
        self.0[0]
    }

    pub fn is_root(&self) -> bool {
        self.first() == ROOT_SENTINEL
    }

    pub fn clusters(&self) -> &[u16] {
        &self.0
    }

    pub fn cluster_count(&self) -> usize {
        self.0.len()
    }
}

/// Classification of a raw FAT16 entry value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FatEntry {
    Free,
    Reserved,
    Bad,
    EndOfChain,
    Next(u16),
}

impl FatEntry {
    pub fn classify(value: u16) -> Self {
        match value {
            FAT16_FREE => FatEntry::Free,
            FAT16_RESERVED => FatEntry::Reserved,
            FAT16_BAD => FatEntry::Bad,
            v if v >= FAT16_EOC => FatEntry::EndOfChain,
            v if v >= FAT16_RESERVED_MIN => FatEntry::Reserved,
            v => FatEntry::Next(v),
        }
    }
}

pub struct ClusterChainWalker<'a> {
    fat_table: &'a [u8],
    max_chain_length: Option<usize>,
}

impl<'a> ClusterChainWalker<'a> {
    pub fn new(fat_table: &'a [u8]) -> Self {
        Self { fat_table, max_chain_length: None }
    }

    pub fn with_max_chain_length(mut self, max: Option<usize>) -> Self {
        self.max_chain_length = max;
        self
    }

    /// Number of clusters the FAT table has entries for (including the two reserved ones).
    pub fn entry_count(&self) -> usize {
        self.fat_table.len() / 2
    }

    /// Read the raw FAT entry for `cluster`.
    pub fn read_entry(&self, cluster: u16) -> InspectResult<u16> {
        let offset = cluster as usize * 2;
        let bytes = self.fat_table.get(offset..offset + 2).ok_or_else(|| {
            InspectError::CorruptRegion(format!(
                "FAT entry for cluster {:#06x} lies past the {}-byte FAT table",
                cluster,
                self.fat_table.len()
            ))
        })?;
        Ok(LittleEndian::read_u16(bytes))
    }

    /// Follow the chain starting at `start`, which is always the first element.
    ///
    /// Starts below the first data cluster (the root sentinel, or the `..`
    /// entry of a first-level directory) are returned as-is without reading the FAT.
    pub fn walk(&self, start: u16) -> InspectResult<ClusterChain> {
        let mut chain = vec![start];
        if start < FAT16_FIRST_DATA_CLUSTER {
            return Ok(ClusterChain(chain));
        }

        // Prevent infinite loops
        let mut visited = HashSet::from([start]);
        let limit = self.max_chain_length.unwrap_or(usize::MAX);
        let mut current = start;

        loop {
            let value = self.read_entry(current)?;
            let next = match FatEntry::classify(value) {
                FatEntry::Next(next) if (next as usize) < self.entry_count() => next,
                entry => {
                    trace!("Chain from {:#06x} ends at {:#06x} ({:?}, raw {:#06x})", start, current, entry, value);
                    break;
                }
            };

            if !visited.insert(next) {
                warn!("Cycle in FAT chain from {:#06x}", start);
                return Err(InspectError::CorruptRegion(format!(
                    "circular cluster chain: {:#06x} revisited from {:#06x}",
                    next, current
                )));
            }
            if chain.len() >= limit {
                return Err(InspectError::CorruptRegion(format!(
                    "cluster chain from {:#06x} exceeds {} clusters",
                    start, limit
                )));
            }

            trace!("Cluster {:#06x} -> {:#06x}", current, next);
            chain.push(next);
            current = next;
        }

        Ok(ClusterChain(chain))
    }
}
