// FAT16 inspection session
// Owns the loaded image and the navigation state; the entry point for front ends

use super::boot_sector::BootSectorGeometry;
use super::directory::DirectoryRecord;
use super::extractor;
use super::image::Fat16Image;
use super::navigator::{DirectoryChange, DirectoryNavigator};
use fateater_core::{InspectError, InspectOptions, InspectResult};
use std::path::Path;

pub struct Fat16Session {
    image: Fat16Image,
    navigator: DirectoryNavigator,
    options: InspectOptions,
}

impl Fat16Session {
    /// Load `path` and start at the root directory. Nothing is kept on failure.
    pub fn open(path: &Path, options: InspectOptions) -> InspectResult<Self> {
        let image = Fat16Image::load(path)?;
        Ok(Self::new(image, options))
    }

    pub fn new(image: Fat16Image, options: InspectOptions) -> Self {
        let navigator = DirectoryNavigator::new().with_max_chain_length(options.max_chain_length);
        Self { image, navigator, options }
    }

    pub fn image(&self) -> &Fat16Image {
        &self.image
    }

    pub fn options(&self) -> &InspectOptions {
        &self.options
    }

    pub fn header(&self) -> &BootSectorGeometry {
        self.image.geometry()
    }

    pub fn list(&self) -> InspectResult<Vec<DirectoryRecord>> {
        self.navigator.list(&self.image)
    }

    pub fn change_directory(&mut self, name: &str) -> InspectResult<DirectoryChange> {
        let change = self.navigator.change_directory(&self.image, name)?;
        if change == DirectoryChange::Unchanged && self.options.report_lookup_miss {
            // Distinguish a miss from a refused pop at the root
            if self.navigator.find_directory(&self.image, name)?.is_none() {
                return Err(InspectError::LookupMiss(name.to_string()));
            }
        }
        Ok(change)
    }

    pub fn cat(&self, name: &str) -> InspectResult<Option<Vec<u8>>> {
        let content = extractor::cat(&self.image, &self.navigator, name, self.options.max_chain_length)?;
        if content.is_none() && self.options.report_lookup_miss {
            return Err(InspectError::LookupMiss(name.to_string()));
        }
        Ok(content)
    }

    pub fn pwd(&self) -> String {
        self.navigator.pwd()
    }

    pub fn depth(&self) -> usize {
        self.navigator.depth()
    }
}
