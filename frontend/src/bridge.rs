use gloo_file::File as GlooFile;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DataTransfer, FileList, HtmlInputElement};

use crate::uploads::{GateState, PendingUpload, PendingUploadSet};

/// DOM id of the hidden file input the form submits from.
pub const FILE_INPUT_ID: &str = "file-input";

pub type StagedFile = PendingUpload<GlooFile>;

/// Single mutation gateway for the staged-file set.
///
/// Every mutation replaces the set wholesale and rebinds the hidden file
/// input's `FileList`, so the native multipart submission always carries
/// exactly what the previews show. Readers are refreshed push-style: mutations
/// run inside the Yew update cycle and the re-render they trigger re-derives
/// the preview list and the submit gate before the next event is handled.
#[derive(Default)]
pub struct FileInputBridge {
    set: PendingUploadSet<GlooFile>,
}

impl FileInputBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn staged(&self) -> &PendingUploadSet<GlooFile> {
        &self.set
    }

    pub fn gate(&self) -> GateState {
        self.set.gate()
    }

    /// Replaces the whole selection from a freshly obtained native file list
    /// (picker change, drop, or paste). No filtering and no deduplication;
    /// what the user handed over is what gets staged.
    pub fn set_all(&mut self, file_list: &FileList) {
        let entries = (0..file_list.length())
            .filter_map(|i| file_list.item(i))
            .map(|file| {
                let file = GlooFile::from(file);
                StagedFile {
                    name: file.name(),
                    size_bytes: file.size(),
                    handle: file,
                }
            })
            .collect();
        self.set.set_all(entries);
        self.rebind_native_input();
    }

    /// Excises one entry by its index in the current render. Out-of-range
    /// indices are a no-op.
    pub fn remove_at(&mut self, index: usize) {
        self.set.remove_at(index);
        self.rebind_native_input();
    }

    pub fn clear(&mut self) {
        self.set.clear();
        self.rebind_native_input();
    }

    fn rebind_native_input(&self) {
        if let Err(err) = self.try_rebind() {
            log::error!("Failed to rebind the native file input: {:?}", err);
        }
    }

    // The native FileList is immutable, so removal means building a new
    // transfer buffer with every surviving file and installing its list as the
    // canonical collection.
    fn try_rebind(&self) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let Some(element) = document.get_element_by_id(FILE_INPUT_ID) else {
            // Input not mounted yet; the next render binds it.
            return Ok(());
        };
        let input: HtmlInputElement = element
            .dyn_into()
            .map_err(|_| JsValue::from_str("file input has an unexpected element type"))?;

        let buffer = DataTransfer::new()?;
        let items = buffer.items();
        for upload in self.set.iter() {
            let file: &web_sys::File = upload.handle.as_ref();
            items.add_with_file(file)?;
        }
        input.set_files(buffer.files().as_ref());
        Ok(())
    }
}
