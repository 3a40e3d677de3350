use std::cmp::Ordering;
use std::time::Duration;

use crate::client::{ApiClient, ApiError};
use crate::domain::{HistoryEntry, KnownSendStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Columns of the history table.
pub enum Column {
    Date,
    AccountId,
    PhoneNumber,
    Message,
    Status,
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::Date,
        Column::AccountId,
        Column::PhoneNumber,
        Column::Message,
        Column::Status,
    ];

    /// Columns offered by the sort toggles. Status is filter-only.
    pub const SORT_OPTIONS: [Column; 4] = [
        Column::Date,
        Column::Message,
        Column::AccountId,
        Column::PhoneNumber,
    ];

    /// Stable wire/config id of this column.
    pub fn id(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::AccountId => "accountId",
            Self::PhoneNumber => "phoneNumber",
            Self::Message => "message",
            Self::Status => "status",
        }
    }

    /// Header label of this column.
    pub fn label(self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::AccountId => "Account ID/Provider",
            Self::PhoneNumber => "Phone Number",
            Self::Message => "Message",
            Self::Status => "Status",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Column::ALL.into_iter().find(|column| column.id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One active sort column with its direction.
pub struct SortKey {
    pub column: Column,
    pub descending: bool,
}

impl SortKey {
    pub fn ascending(column: Column) -> Self {
        Self {
            column,
            descending: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered list of active sort columns; position is precedence.
///
/// Invariant: each column appears at most once. The toggle surface only ever
/// appends ascending keys, but descending keys supplied programmatically are
/// honored by the comparator.
pub struct SortSpec(Vec<SortKey>);

impl SortSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a spec from explicit keys; later duplicates of a column are ignored.
    pub fn from_keys(keys: impl IntoIterator<Item = SortKey>) -> Self {
        let mut spec = Self::new();
        for key in keys {
            if !spec.is_active(key.column) {
                spec.0.push(key);
            }
        }
        spec
    }

    /// Toggle a column: absent appends it ascending at lowest precedence,
    /// present removes it entirely.
    pub fn toggle(&mut self, column: Column) {
        if self.is_active(column) {
            self.0.retain(|key| key.column != column);
        } else {
            self.0.push(SortKey::ascending(column));
        }
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.0
    }

    pub fn is_active(&self, column: Column) -> bool {
        self.0.iter().any(|key| key.column == column)
    }

    /// Multi-key comparison in precedence order.
    pub fn compare(&self, a: &HistoryEntry, b: &HistoryEntry) -> Ordering {
        for key in &self.0 {
            let mut ordering = compare_column(key.column, a, b);
            if key.descending {
                ordering = ordering.reverse();
            }
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

fn compare_column(column: Column, a: &HistoryEntry, b: &HistoryEntry) -> Ordering {
    match column {
        Column::Date => a.date.cmp(&b.date),
        Column::AccountId => a.account_id.cmp(&b.account_id),
        Column::PhoneNumber => a.phone_number.cmp(&b.phone_number),
        Column::Message => a.message.cmp(&b.message),
        Column::Status => a.status.as_str().cmp(b.status.as_str()),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Per-column active filters, combined with logical AND.
///
/// Text columns match case-insensitively on substrings; the status column
/// matches exactly on a known status. An empty value clears the entry.
pub struct FilterSpec {
    account_id: Option<String>,
    phone_number: Option<String>,
    message: Option<String>,
    status: Option<KnownSendStatus>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear (empty value) the filter for one of the text columns.
    /// Non-text columns are ignored.
    pub fn set_text(&mut self, column: Column, value: impl Into<String>) {
        let value = value.into();
        let slot = match column {
            Column::AccountId => &mut self.account_id,
            Column::PhoneNumber => &mut self.phone_number,
            Column::Message => &mut self.message,
            Column::Date | Column::Status => return,
        };
        *slot = if value.is_empty() { None } else { Some(value) };
    }

    /// Set or clear the status filter.
    pub fn set_status(&mut self, status: Option<KnownSendStatus>) {
        self.status = status;
    }

    pub fn text(&self, column: Column) -> Option<&str> {
        match column {
            Column::AccountId => self.account_id.as_deref(),
            Column::PhoneNumber => self.phone_number.as_deref(),
            Column::Message => self.message.as_deref(),
            Column::Date | Column::Status => None,
        }
    }

    pub fn status(&self) -> Option<KnownSendStatus> {
        self.status
    }

    pub fn is_empty(&self) -> bool {
        self.account_id.is_none()
            && self.phone_number.is_none()
            && self.message.is_none()
            && self.status.is_none()
    }

    /// Whether an entry satisfies every active filter.
    pub fn matches(&self, entry: &HistoryEntry) -> bool {
        if !text_matches(self.account_id.as_deref(), &entry.account_id)
            || !text_matches(self.phone_number.as_deref(), &entry.phone_number)
            || !text_matches(self.message.as_deref(), &entry.message)
        {
            return false;
        }
        match self.status {
            // Exact match on a known status; values outside the contract
            // never satisfy a status filter.
            Some(wanted) => entry.status.known() == Some(wanted),
            None => true,
        }
    }
}

fn text_matches(needle: Option<&str>, haystack: &str) -> bool {
    match needle {
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
        None => true,
    }
}

/// Keep only the entries that satisfy every active filter.
pub fn apply_filters<'a>(rows: &'a [HistoryEntry], filters: &FilterSpec) -> Vec<&'a HistoryEntry> {
    rows.iter().filter(|entry| filters.matches(entry)).collect()
}

/// Stable multi-key sort in declared precedence order.
pub fn apply_sort<'a>(
    mut rows: Vec<&'a HistoryEntry>,
    sort: &SortSpec,
) -> Vec<&'a HistoryEntry> {
    rows.sort_by(|a, b| sort.compare(a, b));
    rows
}

/// Monotonically increasing tag handed out per fetch attempt.
pub type FetchSeq = u64;

#[derive(Debug, Default)]
/// History screen state: the last-fetched rows plus sort/filter specs and
/// fetch bookkeeping.
///
/// The host re-fetches on a fixed interval ([`HistoryView::POLL_INTERVAL`])
/// while the screen is active. Every fetch is tagged with a sequence number;
/// results older than the newest applied one are discarded, so a slow
/// response can never clobber a fresher row set. Each applied fetch replaces
/// the rows wholesale — sort and filter state are held separately and survive
/// refreshes untouched.
pub struct HistoryView {
    rows: Vec<HistoryEntry>,
    sort: SortSpec,
    filters: FilterSpec,
    next_seq: FetchSeq,
    applied_seq: Option<FetchSeq>,
    stale: bool,
}

impl HistoryView {
    /// Refresh cadence while the history screen is active.
    pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

    pub fn new() -> Self {
        Self::default()
    }

    /// Raw rows from the last applied fetch, unfiltered and unsorted.
    pub fn rows(&self) -> &[HistoryEntry] {
        &self.rows
    }

    /// Whether any fetch (successful or not) has been applied yet.
    pub fn has_loaded(&self) -> bool {
        self.applied_seq.is_some()
    }

    /// Whether the displayed rows are stale because the latest fetch failed.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Tag a new fetch attempt.
    pub fn begin_fetch(&mut self) -> FetchSeq {
        self.next_seq += 1;
        self.next_seq
    }

    /// Apply a completed fetch, replacing the row set wholesale.
    ///
    /// Returns `false` (and changes nothing) when a newer fetch has already
    /// been applied.
    pub fn apply_fetch(&mut self, seq: FetchSeq, rows: Vec<HistoryEntry>) -> bool {
        if self.is_outdated(seq) {
            tracing::debug!(seq, "discarding out-of-order history fetch");
            return false;
        }
        self.applied_seq = Some(seq);
        self.rows = rows;
        self.stale = false;
        true
    }

    /// Record a failed fetch. The previous rows stay on display, marked
    /// stale; polling is expected to continue.
    pub fn apply_fetch_error(&mut self, seq: FetchSeq, error: &ApiError) -> bool {
        if self.is_outdated(seq) {
            return false;
        }
        tracing::warn!(seq, error = %error, "history fetch failed; showing stale rows");
        self.applied_seq = Some(seq);
        self.stale = true;
        true
    }

    fn is_outdated(&self, seq: FetchSeq) -> bool {
        matches!(self.applied_seq, Some(applied) if seq <= applied)
    }

    pub fn toggle_sort(&mut self, column: Column) {
        self.sort.toggle(column);
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    pub fn set_text_filter(&mut self, column: Column, value: impl Into<String>) {
        self.filters.set_text(column, value);
    }

    pub fn set_status_filter(&mut self, status: Option<KnownSendStatus>) {
        self.filters.set_status(status);
    }

    pub fn filters(&self) -> &FilterSpec {
        &self.filters
    }

    /// The rows to display: filtered first, then stably sorted.
    pub fn visible_rows(&self) -> Vec<&HistoryEntry> {
        apply_sort(apply_filters(&self.rows, &self.filters), &self.sort)
    }
}

/// One polling tick: fetch the history and apply the outcome.
///
/// Returns whether the outcome was applied (a stale result is discarded).
/// The timer itself belongs to the host; see `demos/watch_history.rs`.
pub async fn poll_once(client: &ApiClient, view: &mut HistoryView) -> bool {
    let seq = view.begin_fetch();
    match client.fetch_history().await {
        Ok(rows) => view.apply_fetch(seq, rows),
        Err(err) => view.apply_fetch_error(seq, &err),
    }
}
