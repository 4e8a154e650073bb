// FAT16 image loading
// Reads the whole image once and exposes its regions as read-only slices

use super::boot_sector::BootSectorGeometry;
use super::cluster_chain::ClusterChainWalker;
use super::constants::FAT16_FIRST_DATA_CLUSTER;
use super::regions::Regions;
use fateater_core::{InspectError, InspectResult};
use log::info;
use std::path::Path;

pub struct Fat16Image {
    bytes: Vec<u8>,
    geometry: BootSectorGeometry,
    regions: Regions,
}

impl Fat16Image {
    /// Read an image file into memory and validate its layout.
    pub fn load(path: &Path) -> InspectResult<Self> {
        info!("Opening FAT16 image: {}", path.display());
        let bytes = std::fs::read(path)?;
        Self::from_bytes(bytes)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> InspectResult<Self> {
        let geometry = BootSectorGeometry::parse(&bytes)?;
        let regions = Regions::locate(&geometry, bytes.len())?;

        info!("FAT16 image details:");
        info!("  Size: {} bytes", bytes.len());
        info!("  Bytes per sector: {}", geometry.bytes_per_sector);
        info!("  Sectors per cluster: {}", geometry.sectors_per_cluster);
        info!("  Root entries: {}", geometry.root_entry_count);
        info!("  Data region start: {:#x}", regions.data.start);

        Ok(Self { bytes, geometry, regions })
    }

    pub fn geometry(&self) -> &BootSectorGeometry {
        &self.geometry
    }

    pub fn regions(&self) -> &Regions {
        &self.regions
    }

    pub fn fat_table(&self) -> &[u8] {
        &self.bytes[self.regions.fat_table.clone()]
    }

    pub fn root_directory(&self) -> &[u8] {
        &self.bytes[self.regions.root_directory.clone()]
    }

    pub fn data_region(&self) -> &[u8] {
        &self.bytes[self.regions.data.clone()]
    }

    pub fn bytes_per_cluster(&self) -> usize {
        self.geometry.bytes_per_cluster()
    }

    /// Bytes of one data cluster, addressed at `(cluster - 2) * bytes_per_cluster`.
    pub fn cluster(&self, cluster: u16) -> InspectResult<&[u8]> {
        if cluster < FAT16_FIRST_DATA_CLUSTER {
            return Err(InspectError::CorruptRegion(format!(
                "cluster {} is not a data cluster",
                cluster
            )));
        }

        let size = self.bytes_per_cluster();
        let start = (cluster - FAT16_FIRST_DATA_CLUSTER) as usize * size;
        self.data_region().get(start..start + size).ok_or_else(|| {
            InspectError::CorruptRegion(format!(
                "cluster {:#06x} lies past the end of the {}-byte data region",
                cluster,
                self.data_region().len()
            ))
        })
    }

    pub fn chain_walker(&self, max_chain_length: Option<usize>) -> ClusterChainWalker<'_> {
        ClusterChainWalker::new(self.fat_table()).with_max_chain_length(max_chain_length)
    }
}
