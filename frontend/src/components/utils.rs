use super::super::{Model, Msg};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Formats a byte count on the binary scale, two decimals at most with
/// trailing zeros trimmed. Zero is special-cased as `"0 Bytes"`.
pub fn format_size(size_bytes: u64) -> String {
    if size_bytes == 0 {
        return "0 Bytes".to_string();
    }

    // floor(log_1024(size)) clamped to the unit table, computed by integer
    // scaling so exact powers of 1024 never round down a unit.
    let mut exponent = 0usize;
    let mut scaled = size_bytes;
    while scaled >= 1024 && exponent < SIZE_UNITS.len() - 1 {
        scaled /= 1024;
        exponent += 1;
    }
    let value = size_bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;

    format!("{} {}", rounded, SIZE_UNITS[exponent])
}

// Debounce function to limit button events
pub fn debounce<F>(duration: i32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration as u32, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

pub fn render_flash_banner(model: &Model, ctx: &Context<Model>) -> Html {
    if let Some(flash) = &model.flash {
        html! {
            <div class={classes!("flash-banner", format!("flash-{}", flash.severity))}>
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ flash.text.clone() }</p>
                <button
                    type="button"
                    class="dismiss-btn"
                    title="Dismiss"
                    onclick={ctx.link().callback(|_| Msg::DismissFlash)}
                >
                    <i class="fa-solid fa-times"></i>
                </button>
            </div>
        }
    } else {
        html! {}
    }
}

#[cfg(test)]
mod tests {
    use super::format_size;

    #[test]
    fn zero_is_spelled_out() {
        assert_eq!(format_size(0), "0 Bytes");
    }

    #[test]
    fn exact_unit_boundaries_drop_decimals() {
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1024 * 1024), "1 MB");
        assert_eq!(format_size(1024 * 1024 * 1024), "1 GB");
    }

    #[test]
    fn sub_kilobyte_counts_stay_in_bytes() {
        assert_eq!(format_size(1), "1 Bytes");
        assert_eq!(format_size(500), "500 Bytes");
        assert_eq!(format_size(1023), "1023 Bytes");
    }

    #[test]
    fn values_round_to_two_decimals() {
        assert_eq!(format_size(1_500_000), "1.43 MB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(2_684_354_560), "2.5 GB");
    }

    #[test]
    fn scale_clamps_to_gigabytes() {
        // 2 TiB still reports in GB, the largest available unit.
        assert_eq!(format_size(2 * 1024u64.pow(4)), "2048 GB");
    }
}
