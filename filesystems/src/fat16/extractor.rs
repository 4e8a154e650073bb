// FAT16 file extraction
// Reassembles file content from its cluster chain, truncated to the recorded size

use super::directory::DirectoryRecord;
use super::image::Fat16Image;
use super::names::normalize_file_name;
use super::navigator::DirectoryNavigator;
use fateater_core::{InspectError, InspectResult};
use log::debug;

/// Find the first entry in the current directory whose dot-insensitive name matches `name`.
pub fn find_file(
    image: &Fat16Image,
    navigator: &DirectoryNavigator,
    name: &str,
) -> InspectResult<Option<DirectoryRecord>> {
    let target = normalize_file_name(name);
    Ok(navigator
        .list(image)?
        .into_iter()
        .find(|record| normalize_file_name(&record.raw_name()) == target))
}

/// Read the exact content of `record`.
pub fn read_record(
    image: &Fat16Image,
    record: &DirectoryRecord,
    max_chain_length: Option<usize>,
) -> InspectResult<Vec<u8>> {
    let file_size = record.file_size as usize;
    if file_size == 0 {
        return Ok(Vec::new());
    }

    let chain = image.chain_walker(max_chain_length).walk(record.first_cluster())?;
    let cluster_size = image.bytes_per_cluster();
    let mut data = Vec::with_capacity(file_size);

    for &cluster in chain.clusters() {
        if data.len() == file_size {
            break;
        }
        let to_read = cluster_size.min(file_size - data.len());
        data.extend_from_slice(&image.cluster(cluster)?[..to_read]);
    }

    if data.len() < file_size {
        return Err(InspectError::CorruptRegion(format!(
            "{}: chain of {} clusters holds {} bytes, directory entry says {}",
            record.display_name(),
            chain.cluster_count(),
            data.len(),
            file_size
        )));
    }

    debug!("Read {} bytes of {} from {} clusters", data.len(), record.display_name(), chain.cluster_count());
    Ok(data)
}

/// `cat`: resolve `name` in the current directory and return its bytes, or `None` on a miss.
pub fn cat(
    image: &Fat16Image,
    navigator: &DirectoryNavigator,
    name: &str,
    max_chain_length: Option<usize>,
) -> InspectResult<Option<Vec<u8>>> {
    match find_file(image, navigator, name)? {
        Some(record) => read_record(image, &record, max_chain_length).map(Some),
        None => {
            debug!("cat: no entry named {:?}", name);
            Ok(None)
        }
    }
}
