use crate::config::Labels;
use crate::entry::PickerEntry;
use std::collections::HashSet;
use std::path::PathBuf;
use sysinfo::Disks;

use super::directory::by_name;

/// Enumerates the storage roots shown on the picker's top-level list.
///
/// Every mounted disk becomes one root, labelled with the internal or
/// removable display name and its mount point. The home directory is
/// always included so the picker stays usable when disk enumeration
/// yields nothing (containers, sandboxes).
pub fn storage_roots(labels: &Labels) -> Vec<PickerEntry> {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut roots = Vec::new();

    if let Some(user_dirs) = directories::UserDirs::new() {
        let home = user_dirs.home_dir().to_path_buf();
        seen.insert(home.clone());
        roots.push(PickerEntry::Storage {
            name: labels.home_storage.clone(),
            path: home,
            is_removable: false,
        });
    }

    let disks = Disks::new_with_refreshed_list();
    for disk in disks.list() {
        let mount = disk.mount_point().to_path_buf();
        if !seen.insert(mount.clone()) {
            continue;
        }
        let base = if disk.is_removable() {
            &labels.removable_storage
        } else {
            &labels.internal_storage
        };
        roots.push(PickerEntry::Storage {
            name: format!("{} ({})", base, mount.display()),
            path: mount,
            is_removable: disk.is_removable(),
        });
    }

    roots.sort_by(by_name);
    roots
}
