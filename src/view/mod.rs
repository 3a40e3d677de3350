//! View layer: screen state owned by each component, driven by the host loop.

mod history;
mod send_form;
mod shell;
mod status;

pub use history::{
    Column, FetchSeq, FilterSpec, HistoryView, SortKey, SortSpec, apply_filters, apply_sort,
    poll_once,
};
pub use send_form::{FormField, Notice, SendForm};
pub use shell::{Screen, Shell};
pub use status::StatusIndicator;
