use super::super::{Model, Msg};
use super::utils::{debounce, format_size};
use crate::bridge::StagedFile;
use yew::prelude::*;

/// The list is rebuilt from scratch on every mutation, so each remove button
/// captures its row's index in the current render and indices can never go
/// stale against the staged set.
pub fn render_preview_area(model: &Model, ctx: &Context<Model>) -> Html {
    let staged = model.bridge.staged();
    if staged.is_empty() {
        return html! {};
    }

    let link = ctx.link().clone();

    html! {
        <div id="preview-container">
            <h2>{ format!("Selected files: {}", staged.len()) }</h2>
            <ul id="file-previews" class="file-list">
                { for staged
                    .iter()
                    .enumerate()
                    .map(|(index, upload)| render_preview_row(ctx, index, upload)) }
            </ul>
            <div class="button-container">
                <button
                    type="button"
                    id="clear-all-btn"
                    class="clear-btn"
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::ClearAll)
                    })}
                >
                    <i class="fa-solid fa-trash"></i>{" Clear All"}
                </button>
            </div>
        </div>
    }
}

fn render_preview_row(ctx: &Context<Model>, index: usize, upload: &StagedFile) -> Html {
    let link = ctx.link();

    html! {
        <li class="file-row" key={index.to_string()}>
            <i class="fa-solid fa-file-image"></i>
            <span class="file-name">{ upload.name.clone() }</span>
            <span class="file-size">{ format_size(upload.size_bytes) }</span>
            <button
                type="button"
                class="remove-btn"
                title="Remove this file"
                onclick={link.callback(move |e: MouseEvent| {
                    e.stop_propagation();
                    Msg::RemoveAt(index)
                })}
            >
                <i class="fa-solid fa-times"></i>
            </button>
        </li>
    }
}
