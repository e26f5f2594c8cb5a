use super::super::Model;
use super::super::Msg;
use yew::html::Scope;
use yew::prelude::*;

pub fn render_theme_toggle(theme: &str, link: &Scope<Model>) -> Html {
    html! {
        <button
            type="button"
            id="theme-toggle"
            class="theme-toggle"
            onclick={link.callback(|_| Msg::ToggleTheme)}
            title={ if theme == "light" { "Switch to Dark Mode" } else { "Switch to Light Mode" } }
        >
            { if theme == "light" {
                html! { <i class="fa-solid fa-sun"></i> }
            } else {
                html! { <i class="fa-solid fa-moon"></i> }
            }}
        </button>
    }
}
