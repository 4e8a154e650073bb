// FAT16 module - read-only image inspection

pub mod constants;
pub mod boot_sector;
pub mod regions;
pub mod names;
pub mod timestamps;
pub mod directory;
pub mod cluster_chain;
pub mod image;
pub mod navigator;
pub mod extractor;
pub mod listing;
pub mod session;

pub use boot_sector::BootSectorGeometry;
pub use cluster_chain::{ClusterChain, ClusterChainWalker, FatEntry};
pub use directory::{decode_directory, DirectoryKind, DirectoryRecord, FileAttributes};
pub use image::Fat16Image;
pub use listing::{listing_rows, ListingRow};
pub use names::{normalize_directory_name, normalize_file_name};
pub use navigator::{DirectoryChange, DirectoryNavigator, NavigationContext};
pub use regions::Regions;
pub use session::Fat16Session;
