//! Drag-and-drop file collection, including dropped folders.
//!
//! Browsers expose dropped directories through the nonstandard but
//! universally shipped FileSystem entry API (`webkitGetAsEntry`). Entries
//! must be resolved synchronously inside the drop handler — the
//! `DataTransferItem`s are dead once the event returns — so
//! [`snapshot_drop`] runs first and the async traversal works on the
//! captured entries.
//!
//! `readEntries` is paginated: one call returns at most a chunk (Chromium
//! caps it at 100) and only an empty result signals exhaustion, so the
//! reader is drained in a loop.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    DataTransfer, File, FileSystemDirectoryEntry, FileSystemDirectoryReader, FileSystemEntry,
    FileSystemFileEntry,
};

use crate::text::natural_cmp;

/// What a drop handed us, captured synchronously at drop time.
pub struct DropSnapshot {
    entries: Vec<FileSystemEntry>,
    /// Files from items that did not expose the entry API.
    plain_files: Vec<File>,
}

/// Capture the contents of a drop event before the items go stale.
pub fn snapshot_drop(data: &DataTransfer) -> DropSnapshot {
    let mut entries = Vec::new();
    let mut plain_files = Vec::new();

    let items = data.items();
    for index in 0..items.length() {
        let Some(item) = items.get(index) else {
            continue;
        };
        match item.webkit_get_as_entry() {
            Ok(Some(entry)) => entries.push(entry),
            _ => {
                // Fallback path for browsers/items without entry support.
                if let Ok(Some(file)) = item.get_as_file() {
                    plain_files.push(file);
                }
            }
        }
    }

    DropSnapshot {
        entries,
        plain_files,
    }
}

impl DropSnapshot {
    /// Expand the snapshot into a flat file list: folders are walked
    /// recursively, the result keeps only image media types and is sorted
    /// by numeric-aware filename order.
    pub async fn into_image_files(self) -> Vec<File> {
        let mut files = self.plain_files;
        for entry in self.entries {
            collect_entry(entry, &mut files).await;
        }
        finish_batch(files)
    }
}

/// Filter and order a file list the same way for both input paths
/// (drag-and-drop and the native file picker).
pub fn finish_batch(files: Vec<File>) -> Vec<File> {
    let mut images: Vec<File> = files.into_iter().filter(is_image).collect();
    images.sort_by(|a, b| natural_cmp(&a.name(), &b.name()));
    images
}

fn is_image(file: &File) -> bool {
    is_image_type(&file.type_())
}

/// Whether a media type denotes an image, from either input path
/// (drag-and-drop or the native file picker).
fn is_image_type(media_type: &str) -> bool {
    media_type.starts_with("image/")
}

async fn collect_entry(entry: FileSystemEntry, out: &mut Vec<File>) {
    if entry.is_file() {
        if let Some(file_entry) = entry.dyn_ref::<FileSystemFileEntry>() {
            match resolve_file(file_entry).await {
                Ok(file) => out.push(file),
                Err(e) => log::warn!("could not read dropped file {}: {:?}", entry.name(), e),
            }
        }
    } else if entry.is_directory() {
        if let Some(dir) = entry.dyn_ref::<FileSystemDirectoryEntry>() {
            collect_directory(dir, out).await;
        }
    }
}

async fn collect_directory(dir: &FileSystemDirectoryEntry, out: &mut Vec<File>) {
    let reader = dir.create_reader();
    loop {
        let page = match read_page(&reader).await {
            Ok(page) => page,
            Err(e) => {
                log::warn!("directory read failed in {}: {:?}", dir.name(), e);
                return;
            }
        };
        if page.length() == 0 {
            return; // empty page signals exhaustion
        }
        for value in page.iter() {
            if let Ok(child) = value.dyn_into::<FileSystemEntry>() {
                // Recursion through an explicit boxed future; entry trees
                // are shallow, so the allocation per level is irrelevant.
                Box::pin(collect_entry(child, out)).await;
            }
        }
    }
}

/// One paginated `readEntries` call, bridged from callbacks to a future.
async fn read_page(reader: &FileSystemDirectoryReader) -> Result<js_sys::Array, JsValue> {
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let on_entries = Closure::once_into_js(move |entries: JsValue| {
            let _ = resolve.call1(&JsValue::NULL, &entries);
        });
        let on_error = Closure::once_into_js(move |err: JsValue| {
            let _ = reject.call1(&JsValue::NULL, &err);
        });
        if let Err(e) = reader
            .read_entries_with_callback_and_error_callback(
                on_entries.unchecked_ref(),
                on_error.unchecked_ref(),
            )
        {
            log::warn!("readEntries call failed: {:?}", e);
        }
    });
    let value = JsFuture::from(promise).await?;
    Ok(js_sys::Array::from(&value))
}

/// Bridge `FileSystemFileEntry.file()` from callbacks to a future.
async fn resolve_file(entry: &FileSystemFileEntry) -> Result<File, JsValue> {
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let on_file = Closure::once_into_js(move |file: JsValue| {
            let _ = resolve.call1(&JsValue::NULL, &file);
        });
        let on_error = Closure::once_into_js(move |err: JsValue| {
            let _ = reject.call1(&JsValue::NULL, &err);
        });
        entry.file_with_callback_and_error_callback(on_file.unchecked_ref(), on_error.unchecked_ref());
    });
    let value = JsFuture::from(promise).await?;
    value.dyn_into::<File>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_image_media_types_survive_the_filter() {
        assert!(is_image_type("image/png"));
        assert!(is_image_type("image/jpeg"));
        assert!(is_image_type("image/webp"));
        assert!(!is_image_type("text/plain"));
        assert!(!is_image_type("application/zip"));
        // Unknown type, as browsers report for extension-less files.
        assert!(!is_image_type(""));
    }
}
