mod markdown_vm;
mod session_vm;
mod time_fmt;

pub use markdown_vm::{markdown_to_html, render_explanation, sanitize_html};
pub use session_vm::{SessionCardVm, map_history_cards, map_session_cards};
pub use time_fmt::format_datetime;
