mod bridge;
mod components;
mod submit;
mod uploads;

use gloo_events::EventListener;
use gloo_storage::{LocalStorage, Storage};
use shared::{FlashMessage, MenuLanguage};
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent, FileList, SubmitEvent};
use yew::prelude::*;

use bridge::FileInputBridge;
use components::{handlers, header, preview_area, theme_toggle, upload_section, utils};
use submit::FormSubmissionController;

// Yew msg components
pub enum Msg {
    // Selection mutations
    FilesSelected(FileList),
    RemoveAt(usize),
    ClearAll,

    // Drag & paste gestures
    SetDragging(bool),
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),

    // Submission
    SetLanguage(MenuLanguage),
    Submit(SubmitEvent),

    // UI states
    DismissFlash,
    ToggleTheme,
}

// Main component
pub struct Model {
    pub bridge: FileInputBridge,
    pub controller: FormSubmissionController,
    pub language: MenuLanguage,
    pub is_dragging: bool,
    pub flash: Option<FlashMessage>,
    pub theme: String,
    paste_listener: Option<EventListener>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let theme: String = LocalStorage::get("theme").unwrap_or_else(|_| "light".to_string());
        handlers::apply_theme(&theme);

        let link = ctx.link().clone();
        let window = web_sys::window().expect("no global `window` exists");
        let listener = EventListener::new(&window, "paste", move |event| {
            if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                link.send_message(Msg::HandlePaste(clipboard_event.clone()));
            }
        });

        Self {
            bridge: FileInputBridge::new(),
            controller: FormSubmissionController::new(),
            language: MenuLanguage::default(),
            is_dragging: false,
            flash: None,
            theme,
            paste_listener: Some(listener),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Selection mutations
            Msg::FilesSelected(file_list) => handlers::handle_files_selected(self, file_list),
            Msg::RemoveAt(index) => handlers::handle_remove_at(self, index),
            Msg::ClearAll => handlers::handle_clear_all(self),

            // Drag & paste gestures
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::HandleDrop(event) => handlers::handle_drop(self, event),
            Msg::HandlePaste(event) => handlers::handle_paste(self, event),

            // Submission
            Msg::SetLanguage(language) => {
                self.language = language;
                true
            }
            Msg::Submit(event) => handlers::handle_submit(self, event),

            // UI states
            Msg::DismissFlash => {
                self.flash = None;
                true
            }
            Msg::ToggleTheme => handlers::handle_toggle_theme(self),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { header::render_header() }
                <div class="top-right">
                    { theme_toggle::render_theme_toggle(&self.theme, ctx.link()) }
                </div>

                <main class="main-content">
                    { utils::render_flash_banner(self, ctx) }
                    <form
                        id="upload-form"
                        action="/upload"
                        method="post"
                        enctype="multipart/form-data"
                        onsubmit={ctx.link().callback(Msg::Submit)}
                    >
                        { upload_section::render_upload_section(self, ctx) }
                        { preview_area::render_preview_area(self, ctx) }
                    </form>
                </main>

                <footer class="app-footer">
                    <p>{"Menu Extractor | OCR menu digitization"}</p>
                </footer>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.paste_listener.take();
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
