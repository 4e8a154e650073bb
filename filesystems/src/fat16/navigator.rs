// FAT16 directory navigation
// Tracks the current location as a stack of cluster chains rooted at the fixed root directory

use super::cluster_chain::ClusterChain;
use super::directory::{decode_directory, DirectoryKind, DirectoryRecord};
use super::image::Fat16Image;
use super::names::normalize_directory_name;
use fateater_core::InspectResult;
use log::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationContext {
    pub chain: ClusterChain,
    pub name: String,
}

impl NavigationContext {
    fn root() -> Self {
        Self { chain: ClusterChain::root(), name: String::new() }
    }
}

/// Outcome of a change-directory request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryChange {
    /// A new context was pushed.
    Descended,
    /// The target resolved to a cluster already on the stack and the top was popped.
    Ascended,
    /// Nothing matched, or the pop would have removed the root.
    Unchanged,
}

/// Owns the navigation stack. The bottom entry is always the root.
#[derive(Debug, Clone)]
pub struct DirectoryNavigator {
    stack: Vec<NavigationContext>,
    max_chain_length: Option<usize>,
}

impl Default for DirectoryNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryNavigator {
    pub fn new() -> Self {
        Self { stack: vec![NavigationContext::root()], max_chain_length: None }
    }

    pub fn with_max_chain_length(mut self, max: Option<usize>) -> Self {
        self.max_chain_length = max;
        self
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn current(&self) -> &NavigationContext {
        // The root entry is never popped
        &self.stack[self.stack.len() - 1]
    }

    /// Entries of the current directory in on-disk order.
    pub fn list(&self, image: &Fat16Image) -> InspectResult<Vec<DirectoryRecord>> {
        let current = self.current();
        if current.chain.is_root() {
            return decode_directory(image.root_directory(), DirectoryKind::Root);
        }

        let mut records = Vec::new();
        for &cluster in current.chain.clusters() {
            let region = image.cluster(cluster)?;
            records.extend(decode_directory(region, DirectoryKind::Subdirectory)?);
        }
        Ok(records)
    }

    /// Find the first entry of the current directory whose normalized name equals
    /// the normalized `name`.
    pub fn find_directory(&self, image: &Fat16Image, name: &str) -> InspectResult<Option<DirectoryRecord>> {
        let target = normalize_directory_name(name);
        Ok(self
            .list(image)?
            .into_iter()
            .find(|record| normalize_directory_name(&record.raw_name()) == target))
    }

    pub fn change_directory(&mut self, image: &Fat16Image, name: &str) -> InspectResult<DirectoryChange> {
        let Some(record) = self.find_directory(image, name)? else {
            debug!("cd: no entry named {:?} in {}", name, self.pwd());
            return Ok(DirectoryChange::Unchanged);
        };

        let chain = image
            .chain_walker(self.max_chain_length)
            .walk(record.first_cluster())?;

        let already_open = self
            .stack
            .iter()
            .any(|context| context.chain.first() == chain.first());

        if already_open {
            if self.stack.len() == 1 {
                warn!("cd: refusing to pop the root directory for {:?}", name);
                return Ok(DirectoryChange::Unchanged);
            }
            let popped = self.stack.pop();
            debug!("cd: left {:?}", popped.map(|context| context.name));
            return Ok(DirectoryChange::Ascended);
        }

        // Every cluster must be readable before the context becomes current
        for &cluster in chain.clusters() {
            image.cluster(cluster)?;
        }

        let name = normalize_directory_name(&record.raw_name());
        debug!("cd: entering {} ({} clusters from {:#06x})", name, chain.cluster_count(), chain.first());
        self.stack.push(NavigationContext { chain, name });
        Ok(DirectoryChange::Descended)
    }

    /// Context names joined with `/`, always ending in `/`.
    pub fn pwd(&self) -> String {
        let names: Vec<&str> = self.stack.iter().map(|context| context.name.as_str()).collect();
        format!("{}/", names.join("/"))
    }
}
