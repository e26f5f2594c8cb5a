use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-utensils"></i> {" Menu Extractor"}</h1>
            <p class="subtitle">{"Turn photos of restaurant menus into structured data"}</p>
        </header>
    }
}
