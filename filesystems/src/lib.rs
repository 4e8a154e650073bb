// Read-only FAT16 image inspection engine

pub mod fat16;

pub use fat16::{
    BootSectorGeometry, ClusterChain, ClusterChainWalker, DirectoryChange, DirectoryKind,
    DirectoryNavigator, DirectoryRecord, Fat16Image, Fat16Session, FileAttributes, ListingRow,
    Regions, listing_rows,
};
