use super::super::Model;
use crate::submit::SubmitDecision;
use gloo_storage::{LocalStorage, Storage};
use shared::FlashMessage;
use web_sys::{ClipboardEvent, DragEvent, FileList, SubmitEvent};

pub fn handle_files_selected(model: &mut Model, file_list: FileList) -> bool {
    model.flash = None;
    model.bridge.set_all(&file_list);
    true
}

pub fn handle_remove_at(model: &mut Model, index: usize) -> bool {
    model.bridge.remove_at(index);
    true
}

pub fn handle_clear_all(model: &mut Model) -> bool {
    model.bridge.clear();
    model.flash = Some(FlashMessage::info("Selection cleared"));
    true
}

pub fn handle_drop(model: &mut Model, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    // A non-empty drop replaces the prior selection outright. Drops without
    // files (text, links) leave the staged set alone.
    if let Some(file_list) = event.data_transfer().and_then(|dt| dt.files()) {
        if file_list.length() > 0 {
            return handle_files_selected(model, file_list);
        }
    }

    true
}

pub fn handle_paste(model: &mut Model, event: ClipboardEvent) -> bool {
    if let Some(file_list) = event.clipboard_data().and_then(|dt| dt.files()) {
        if file_list.length() > 0 {
            event.prevent_default();
            return handle_files_selected(model, file_list);
        }
    }
    false
}

pub fn handle_submit(model: &mut Model, event: SubmitEvent) -> bool {
    match model.controller.try_begin(model.bridge.gate().count) {
        SubmitDecision::Proceed => {
            // The native multipart POST takes over from here; the next thing
            // the user sees is the server-rendered results page.
            log::info!("Submitting {} file(s) for extraction", model.bridge.gate().count);
            true
        }
        SubmitDecision::Abort(flash) => {
            event.prevent_default();
            let rerender = flash.is_some();
            if let Some(flash) = flash {
                model.flash = Some(flash);
            }
            rerender
        }
    }
}

pub fn apply_theme(theme: &str) {
    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();

    if theme == "dark" {
        body.class_list().add_1("dark-mode").unwrap();
    } else {
        body.class_list().remove_1("dark-mode").unwrap();
    }
}

pub fn handle_toggle_theme(model: &mut Model) -> bool {
    model.theme = if model.theme == "light" { "dark" } else { "light" }.to_string();
    apply_theme(&model.theme);

    if let Err(err) = LocalStorage::set("theme", &model.theme) {
        log::warn!("Failed to persist theme preference: {:?}", err);
    }

    true
}
