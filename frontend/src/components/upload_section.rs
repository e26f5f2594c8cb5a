use super::super::{Model, Msg};
use super::utils::debounce;
use crate::bridge::FILE_INPUT_ID;
use shared::MenuLanguage;
use std::str::FromStr;
use strum::IntoEnumIterator;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Extensions the server-side pipeline accepts; used purely as a picker hint.
/// Nothing is validated client-side.
const ACCEPTED_EXTENSIONS: &str = ".png,.jpg,.jpeg,.gif,.bmp,.tiff,.tif";

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="upload-section">
            { render_file_input_area(model, ctx) }
            { render_language_selector(model, ctx) }
            { render_submit_controls(model) }
        </div>
    }
}

fn render_file_input_area(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    // A change event with zero files (picker cancelled on some browsers) is
    // indistinguishable from no interaction and leaves the selection alone.
    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input
            .files()
            .filter(|files| files.length() > 0)
            .map(Msg::FilesSelected)
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);
    let trigger_file_input = Callback::from(|_| {
        if let Some(input) = web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .get_element_by_id(FILE_INPUT_ID)
        {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    html! {
        <>
            <input
                type="file"
                id={FILE_INPUT_ID}
                name="files[]"
                multiple=true
                accept={ACCEPTED_EXTENSIONS}
                style="display: none;"
                onchange={handle_change}
            />

            <button
                type="button"
                id="select-button"
                class="select-btn"
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                <i class="fa-solid fa-upload"></i> {" Select Menu Images"}
            </button>

            <div
                id="drop-zone"
                class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                <div class="upload-placeholder">
                    <i class="fa-solid fa-cloud-arrow-up"></i>
                    <p>{"Drag & drop menu photos here, paste, or click"}</p>
                    <p class="file-types">{"Supported formats: PNG, JPG, GIF, BMP, TIFF"}</p>
                </div>
            </div>
        </>
    }
}

fn render_language_selector(model: &Model, ctx: &Context<Model>) -> Html {
    let on_change = ctx.link().batch_callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        MenuLanguage::from_str(&select.value()).ok().map(Msg::SetLanguage)
    });

    html! {
        <div class="language-row">
            <label for="language-select">{"Menu language"}</label>
            <select id="language-select" name="language" onchange={on_change}>
                { for MenuLanguage::iter().map(|lang| html! {
                    <option value={lang.to_string()} selected={lang == model.language}>
                        { lang.label() }
                    </option>
                })}
            </select>
        </div>
    }
}

fn render_submit_controls(model: &Model) -> Html {
    let gate = model.bridge.gate();
    let submitting = model.controller.is_submitting();

    html! {
        <div class="submit-row">
            <span class="file-count">
                { format!("{} file(s) selected", gate.count) }
            </span>
            <button
                type="submit"
                id="submit-button"
                class="submit-btn"
                disabled={submitting || !gate.enabled}
            >
                { if submitting {
                    html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Processing..."}</> }
                } else {
                    html! { <><i class="fa-solid fa-wand-magic-sparkles"></i>{" Extract Menu"}</> }
                }}
            </button>
        </div>
    }
}
