/// Server-side search adapter.
///
/// Maintains a search descriptor (column, value, operator, time range)
/// mirrored 1:1 into URL query parameters, and drives a caller-supplied
/// asynchronous search backend. The query-parameter surface is modelled
/// as an injected `QueryStore` key-value abstraction instead of a global
/// location bar, so multiple adapter instances can be namespaced and
/// tests can run against an in-memory store.
///
/// # State machine
///
/// `Idle` (no active search) -> `Searching` (awaiting a backend result)
/// -> `Active` (result applied) -> back to `Idle` via explicit clear.
///
/// # Stale responses
///
/// Every triggered search takes a monotonic sequence ticket. A result is
/// only applied when its ticket is still current, so a slow response
/// that resolves after a newer trigger can never overwrite newer data:
/// last trigger wins.

use crate::error::GridError;
use crate::value::MatchOp;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Months, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Query-parameter names the adapter manages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamNames {
    pub column: String,
    pub value: String,
    pub operator: String,
    pub time_range: String,
}

impl Default for ParamNames {
    fn default() -> Self {
        ParamNames {
            column: "column".to_string(),
            value: "q".to_string(),
            operator: "operator".to_string(),
            time_range: "timeRange".to_string(),
        }
    }
}

impl ParamNames {
    /// Prefix every managed parameter name, for grids sharing one query
    /// string.
    pub fn namespaced(prefix: &str) -> Self {
        ParamNames {
            column: format!("{}column", prefix),
            value: format!("{}q", prefix),
            operator: format!("{}operator", prefix),
            time_range: format!("{}timeRange", prefix),
        }
    }
}

/// Key-value store abstraction over the URL query string.
///
/// Absence of a key means "not set"; an empty string is still a value.
pub trait QueryStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory query store for tests and non-browser hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryQueryStore {
    params: BTreeMap<String, String>,
}

impl MemoryQueryStore {
    pub fn new() -> Self {
        MemoryQueryStore::default()
    }

    /// Parse a literal query string (`a=b&c=d`, percent-encoded).
    pub fn from_query_string(query: &str) -> Self {
        let mut store = MemoryQueryStore::new();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = match pair.split_once('=') {
                Some((k, v)) => (k, v),
                None => (pair, ""),
            };
            let key = urlencoding::decode(key).map(|c| c.into_owned());
            let value = urlencoding::decode(value).map(|c| c.into_owned());
            if let (Ok(key), Ok(value)) = (key, value) {
                store.params.insert(key, value);
            }
        }
        store
    }

    /// Encode back to a literal query string, keys in sorted order.
    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl QueryStore for MemoryQueryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.params.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.params.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.params.remove(key);
    }
}

/// Fixed calendar windows for the time-range criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeRange {
    Today,
    OneWeek,
    OneMonth,
    SixMonths,
    OneYear,
    TenYears,
    AllTime,
}

impl TimeRange {
    /// Stable wire name, used in URL query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Today => "today",
            TimeRange::OneWeek => "one-week",
            TimeRange::OneMonth => "one-month",
            TimeRange::SixMonths => "six-months",
            TimeRange::OneYear => "one-year",
            TimeRange::TenYears => "ten-years",
            TimeRange::AllTime => "all-time",
        }
    }

    /// Parse a wire name back into a range.
    pub fn parse(s: &str) -> Option<TimeRange> {
        match s {
            "today" => Some(TimeRange::Today),
            "one-week" => Some(TimeRange::OneWeek),
            "one-month" => Some(TimeRange::OneMonth),
            "six-months" => Some(TimeRange::SixMonths),
            "one-year" => Some(TimeRange::OneYear),
            "ten-years" => Some(TimeRange::TenYears),
            "all-time" => Some(TimeRange::AllTime),
            _ => None,
        }
    }

    /// The inclusive `[start, end]` window this range denotes, anchored
    /// at `now`. `AllTime` starts at the Unix epoch.
    pub fn window(&self, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = match self {
            TimeRange::Today => now
                .date_naive()
                .and_hms_opt(0, 0, 0)
                .map(|t| t.and_utc())
                .unwrap_or(now),
            TimeRange::OneWeek => now - Duration::weeks(1),
            TimeRange::OneMonth => now
                .checked_sub_months(Months::new(1))
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
            TimeRange::SixMonths => now
                .checked_sub_months(Months::new(6))
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
            TimeRange::OneYear => now
                .checked_sub_months(Months::new(12))
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
            TimeRange::TenYears => now
                .checked_sub_months(Months::new(120))
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
            TimeRange::AllTime => DateTime::UNIX_EPOCH,
        };
        (start, now)
    }
}

/// The active search tuple, mirrored into the query store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDescriptor {
    pub column: String,
    pub value: String,
    pub operator: MatchOp,
    pub time_range: Option<TimeRange>,
}

impl SearchDescriptor {
    pub fn new(column: impl Into<String>, value: impl Into<String>, operator: MatchOp) -> Self {
        SearchDescriptor {
            column: column.into(),
            value: value.into(),
            operator,
            time_range: None,
        }
    }

    pub fn with_time_range(mut self, range: TimeRange) -> Self {
        self.time_range = Some(range);
        self
    }

    /// True when there is nothing to search for: no value and no time
    /// range. Triggering with an empty descriptor behaves as a clear.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty() && self.time_range.is_none()
    }
}

/// The value-match criterion of a server-side query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueMatch {
    pub column: String,
    pub operator: MatchOp,
    pub value: String,
}

/// Server-side query description: at most two criteria.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchQuery {
    pub value_match: Option<ValueMatch>,
    pub time_window: Option<(DateTime<Utc>, DateTime<Utc>)>,
}

/// Build the server query for a descriptor, with the time window
/// anchored at `now`.
pub fn build_query(descriptor: &SearchDescriptor, now: DateTime<Utc>) -> SearchQuery {
    let value_match = if descriptor.value.is_empty() {
        None
    } else {
        Some(ValueMatch {
            column: descriptor.column.clone(),
            operator: descriptor.operator,
            value: descriptor.value.clone(),
        })
    };
    SearchQuery {
        value_match,
        time_window: descriptor.time_range.map(|r| r.window(now)),
    }
}

/// The asynchronous search round-trip supplied by the caller.
#[async_trait]
pub trait SearchBackend<T> {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<T>, GridError>;
}

/// Adapter lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// No active search; the grid shows its initial dataset.
    Idle,
    /// A search was triggered and its result is pending.
    Searching,
    /// A search result is applied.
    Active,
}

/// Handle for one triggered search. Carries the sequence number that
/// decides staleness and the pre-trigger state used to roll back on
/// failure.
#[derive(Debug)]
pub struct SearchTicket {
    seq: u64,
    prior_phase: SearchPhase,
    prior_descriptor: Option<SearchDescriptor>,
}

/// Result of `begin_search`.
#[derive(Debug)]
pub enum Begin {
    /// The descriptor was empty; the adapter cleared itself.
    Cleared,
    /// A search is pending; run the query and feed the result back with
    /// the ticket.
    Pending {
        ticket: SearchTicket,
        query: SearchQuery,
    },
}

/// What applying a backend result did.
#[derive(Debug, PartialEq)]
pub enum Applied<T> {
    /// The result is current; hand these rows to the grid.
    Rows(Vec<T>),
    /// The descriptor was empty; restore the initial dataset.
    Cleared,
    /// A newer trigger superseded this result; drop it.
    Superseded,
}

/// Bidirectional synchronizer between a search descriptor, a query
/// store and an async search backend.
pub struct SearchAdapter<S> {
    store: S,
    names: ParamNames,
    phase: SearchPhase,
    descriptor: Option<SearchDescriptor>,
    seq: u64,
}

impl<S: QueryStore> SearchAdapter<S> {
    /// Create an adapter with default parameter names, hydrating any
    /// descriptor already present in the store.
    pub fn new(store: S) -> Self {
        Self::with_params(store, ParamNames::default())
    }

    /// Create an adapter with custom parameter names.
    pub fn with_params(store: S, names: ParamNames) -> Self {
        let mut adapter = SearchAdapter {
            store,
            names,
            phase: SearchPhase::Idle,
            descriptor: None,
            seq: 0,
        };
        adapter.hydrate();
        adapter
    }

    /// Rebuild the descriptor from the store. Runs at construction so a
    /// reloaded page reconstructs the search it left behind.
    fn hydrate(&mut self) {
        let column = self.store.get(&self.names.column);
        let value = self.store.get(&self.names.value);
        let operator = self
            .store
            .get(&self.names.operator)
            .and_then(|s| MatchOp::parse(&s));
        let time_range = self
            .store
            .get(&self.names.time_range)
            .and_then(|s| TimeRange::parse(&s));

        if column.is_none() && value.is_none() && time_range.is_none() {
            return;
        }

        self.descriptor = Some(SearchDescriptor {
            column: column.unwrap_or_default(),
            value: value.unwrap_or_default(),
            operator: operator.unwrap_or(MatchOp::Eq),
            time_range,
        });
        debug!("hydrated search descriptor from query store");
    }

    pub fn descriptor(&self) -> Option<&SearchDescriptor> {
        self.descriptor.as_ref()
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn is_search_active(&self) -> bool {
        self.phase == SearchPhase::Active
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Trigger a search. An empty descriptor (no value, no time range)
    /// behaves as an explicit clear.
    ///
    /// Writes the descriptor to the store, enters `Searching`, and
    /// returns a ticket plus the server query to run. The caller awaits
    /// its backend and feeds the outcome to [`apply_result`].
    ///
    /// [`apply_result`]: SearchAdapter::apply_result
    pub fn begin_search(&mut self, descriptor: SearchDescriptor) -> Begin {
        if descriptor.is_empty() {
            self.clear();
            return Begin::Cleared;
        }

        let ticket = SearchTicket {
            seq: self.seq + 1,
            prior_phase: self.phase,
            prior_descriptor: self.descriptor.clone(),
        };
        self.seq += 1;

        let query = build_query(&descriptor, Utc::now());
        self.write_params(&descriptor);
        self.descriptor = Some(descriptor);
        self.phase = SearchPhase::Searching;

        Begin::Pending { ticket, query }
    }

    /// Apply a backend outcome for a previously issued ticket.
    ///
    /// Stale tickets (a newer trigger or clear happened meanwhile) are
    /// dropped as `Superseded`, success and failure alike, so an old
    /// response can never clobber newer state. A current failure rolls
    /// the adapter back to its pre-trigger state and surfaces the error.
    pub fn apply_result<T>(
        &mut self,
        ticket: SearchTicket,
        result: Result<Vec<T>, GridError>,
    ) -> Result<Applied<T>, GridError> {
        if ticket.seq != self.seq {
            debug!("dropping superseded search result (ticket {} != {})", ticket.seq, self.seq);
            return Ok(Applied::Superseded);
        }

        match result {
            Ok(rows) => {
                self.phase = SearchPhase::Active;
                Ok(Applied::Rows(rows))
            }
            Err(err) => {
                warn!("search failed, restoring pre-trigger state: {}", err);
                self.phase = ticket.prior_phase;
                match &ticket.prior_descriptor {
                    Some(prior) => {
                        let prior = prior.clone();
                        self.write_params(&prior);
                        self.descriptor = Some(prior);
                    }
                    None => {
                        self.remove_params();
                        self.descriptor = None;
                    }
                }
                Err(err)
            }
        }
    }

    /// Trigger a search and drive the backend round-trip in one call.
    pub async fn run<T, B>(
        &mut self,
        descriptor: SearchDescriptor,
        backend: &B,
    ) -> Result<Applied<T>, GridError>
    where
        B: SearchBackend<T> + Sync,
    {
        match self.begin_search(descriptor) {
            Begin::Cleared => Ok(Applied::Cleared),
            Begin::Pending { ticket, query } => {
                let result = backend.search(&query).await;
                self.apply_result(ticket, result)
            }
        }
    }

    /// Drop the active search: removes every managed parameter from the
    /// store and returns to `Idle`. Any in-flight result becomes stale.
    pub fn clear(&mut self) {
        self.remove_params();
        self.descriptor = None;
        self.phase = SearchPhase::Idle;
        self.seq += 1;
    }

    fn write_params(&mut self, descriptor: &SearchDescriptor) {
        self.store.set(&self.names.column, &descriptor.column);
        self.store.set(&self.names.value, &descriptor.value);
        self.store
            .set(&self.names.operator, descriptor.operator.as_str());
        match descriptor.time_range {
            Some(range) => self.store.set(&self.names.time_range, range.as_str()),
            None => self.store.remove(&self.names.time_range),
        }
    }

    fn remove_params(&mut self) {
        self.store.remove(&self.names.column);
        self.store.remove(&self.names.value);
        self.store.remove(&self.names.operator);
        self.store.remove(&self.names.time_range);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct StaticBackend {
        rows: Vec<i32>,
    }

    #[async_trait]
    impl SearchBackend<i32> for StaticBackend {
        async fn search(&self, _query: &SearchQuery) -> Result<Vec<i32>, GridError> {
            Ok(self.rows.clone())
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl SearchBackend<i32> for FailingBackend {
        async fn search(&self, _query: &SearchQuery) -> Result<Vec<i32>, GridError> {
            Err(GridError::search("backend down"))
        }
    }

    #[test]
    fn test_query_string_round_trip() {
        let store = MemoryQueryStore::from_query_string("column=email&q=bob%40x.com&operator=eq");
        assert_eq!(store.get("column").as_deref(), Some("email"));
        assert_eq!(store.get("q").as_deref(), Some("bob@x.com"));
        assert_eq!(
            store.to_query_string(),
            "column=email&operator=eq&q=bob%40x.com"
        );
    }

    #[test]
    fn test_trigger_writes_url_params() {
        let mut adapter = SearchAdapter::new(MemoryQueryStore::new());

        let begin =
            adapter.begin_search(SearchDescriptor::new("email", "bob@x.com", MatchOp::Eq));
        assert!(matches!(begin, Begin::Pending { .. }));

        let store = adapter.store();
        assert_eq!(store.get("column").as_deref(), Some("email"));
        assert_eq!(store.get("q").as_deref(), Some("bob@x.com"));
        assert_eq!(store.get("operator").as_deref(), Some("eq"));
        assert_eq!(store.get("timeRange"), None);
    }

    #[test]
    fn test_hydrate_reconstructs_descriptor() {
        let store = MemoryQueryStore::from_query_string(
            "column=email&q=bob%40x.com&operator=eq&timeRange=one-month",
        );
        let adapter = SearchAdapter::new(store);

        let descriptor = adapter.descriptor().unwrap();
        assert_eq!(descriptor.column, "email");
        assert_eq!(descriptor.value, "bob@x.com");
        assert_eq!(descriptor.operator, MatchOp::Eq);
        assert_eq!(descriptor.time_range, Some(TimeRange::OneMonth));
        // Hydration restores the descriptor, not an applied result
        assert!(!adapter.is_search_active());
    }

    #[test]
    fn test_clear_removes_all_params() {
        let mut adapter = SearchAdapter::new(MemoryQueryStore::new());
        let begin = adapter.begin_search(
            SearchDescriptor::new("email", "bob@x.com", MatchOp::Eq)
                .with_time_range(TimeRange::OneWeek),
        );
        let ticket = match begin {
            Begin::Pending { ticket, .. } => ticket,
            Begin::Cleared => panic!("expected pending search"),
        };
        adapter.apply_result(ticket, Ok(vec![1])).unwrap();
        assert!(adapter.is_search_active());

        adapter.clear();
        assert!(!adapter.is_search_active());
        assert!(adapter.descriptor().is_none());
        assert!(adapter.store().is_empty());
    }

    #[test]
    fn test_empty_descriptor_behaves_as_clear() {
        let mut adapter = SearchAdapter::new(MemoryQueryStore::new());
        adapter
            .begin_search(SearchDescriptor::new("email", "bob@x.com", MatchOp::Eq));

        let begin = adapter.begin_search(SearchDescriptor::new("email", "", MatchOp::Eq));
        assert!(matches!(begin, Begin::Cleared));
        assert!(adapter.store().is_empty());
        assert_eq!(adapter.phase(), SearchPhase::Idle);
    }

    #[test]
    fn test_stale_response_is_superseded() {
        let mut adapter = SearchAdapter::new(MemoryQueryStore::new());

        let ticket_a = match adapter
            .begin_search(SearchDescriptor::new("name", "alice", MatchOp::Contains))
        {
            Begin::Pending { ticket, .. } => ticket,
            Begin::Cleared => panic!("expected pending search"),
        };
        let ticket_b = match adapter
            .begin_search(SearchDescriptor::new("name", "bob", MatchOp::Contains))
        {
            Begin::Pending { ticket, .. } => ticket,
            Begin::Cleared => panic!("expected pending search"),
        };

        // A's response arrives after B was triggered: dropped
        let applied = adapter.apply_result(ticket_a, Ok(vec![1, 2])).unwrap();
        assert_eq!(applied, Applied::Superseded);
        assert_eq!(adapter.phase(), SearchPhase::Searching);

        // B's response is current: applied
        let applied = adapter.apply_result(ticket_b, Ok(vec![3])).unwrap();
        assert_eq!(applied, Applied::Rows(vec![3]));
        assert!(adapter.is_search_active());
        assert_eq!(adapter.store().get("q").as_deref(), Some("bob"));
    }

    #[test]
    fn test_clear_supersedes_inflight_search() {
        let mut adapter = SearchAdapter::new(MemoryQueryStore::new());
        let ticket = match adapter
            .begin_search(SearchDescriptor::new("name", "alice", MatchOp::Eq))
        {
            Begin::Pending { ticket, .. } => ticket,
            Begin::Cleared => panic!("expected pending search"),
        };

        adapter.clear();
        let applied = adapter.apply_result(ticket, Ok(vec![1])).unwrap();
        assert_eq!(applied, Applied::Superseded);
        assert!(!adapter.is_search_active());
    }

    #[test]
    fn test_failure_restores_pre_trigger_state() {
        let mut adapter = SearchAdapter::new(MemoryQueryStore::new());

        // First search succeeds and becomes the active state
        let ticket = match adapter
            .begin_search(SearchDescriptor::new("name", "alice", MatchOp::Eq))
        {
            Begin::Pending { ticket, .. } => ticket,
            Begin::Cleared => panic!("expected pending search"),
        };
        adapter.apply_result(ticket, Ok(vec![1])).unwrap();

        // Second search fails; the adapter rolls back to the first
        let ticket = match adapter
            .begin_search(SearchDescriptor::new("name", "bob", MatchOp::Eq))
        {
            Begin::Pending { ticket, .. } => ticket,
            Begin::Cleared => panic!("expected pending search"),
        };
        let err = adapter
            .apply_result::<i32>(ticket, Err(GridError::search("boom")))
            .unwrap_err();
        assert!(matches!(err, GridError::Search { .. }));

        assert!(adapter.is_search_active());
        assert_eq!(adapter.descriptor().unwrap().value, "alice");
        assert_eq!(adapter.store().get("q").as_deref(), Some("alice"));
    }

    #[test]
    fn test_failure_with_no_prior_search_returns_idle() {
        let mut adapter = SearchAdapter::new(MemoryQueryStore::new());
        let ticket = match adapter
            .begin_search(SearchDescriptor::new("name", "bob", MatchOp::Eq))
        {
            Begin::Pending { ticket, .. } => ticket,
            Begin::Cleared => panic!("expected pending search"),
        };

        let _ = adapter.apply_result::<i32>(ticket, Err(GridError::search("boom")));
        assert_eq!(adapter.phase(), SearchPhase::Idle);
        assert!(adapter.descriptor().is_none());
        assert!(adapter.store().is_empty());
    }

    #[tokio::test]
    async fn test_run_drives_backend() {
        let mut adapter = SearchAdapter::new(MemoryQueryStore::new());
        let backend = StaticBackend { rows: vec![10, 20] };

        let applied = adapter
            .run(SearchDescriptor::new("id", "1", MatchOp::Prefix), &backend)
            .await
            .unwrap();
        assert_eq!(applied, Applied::Rows(vec![10, 20]));
        assert!(adapter.is_search_active());
    }

    #[tokio::test]
    async fn test_run_with_empty_descriptor_clears() {
        let mut adapter = SearchAdapter::new(MemoryQueryStore::new());
        let backend = StaticBackend { rows: vec![1] };

        let applied: Applied<i32> = adapter
            .run(SearchDescriptor::new("id", "", MatchOp::Eq), &backend)
            .await
            .unwrap();
        assert_eq!(applied, Applied::Cleared);
        assert!(!adapter.is_search_active());
    }

    #[tokio::test]
    async fn test_run_surfaces_backend_failure() {
        let mut adapter = SearchAdapter::new(MemoryQueryStore::new());

        let result: Result<Applied<i32>, _> = adapter
            .run(SearchDescriptor::new("id", "1", MatchOp::Eq), &FailingBackend)
            .await;
        assert!(result.is_err());
        assert_eq!(adapter.phase(), SearchPhase::Idle);
    }

    #[test]
    fn test_build_query_criteria() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();

        let query = build_query(
            &SearchDescriptor::new("email", "bob@x.com", MatchOp::Eq),
            now,
        );
        let vm = query.value_match.unwrap();
        assert_eq!(vm.column, "email");
        assert_eq!(vm.operator, MatchOp::Eq);
        assert!(query.time_window.is_none());

        // Value-less descriptor with a range: only the time criterion
        let mut descriptor = SearchDescriptor::new("created", "", MatchOp::Eq);
        descriptor.time_range = Some(TimeRange::OneWeek);
        let query = build_query(&descriptor, now);
        assert!(query.value_match.is_none());
        let (start, end) = query.time_window.unwrap();
        assert_eq!(end, now);
        assert_eq!(end - start, Duration::weeks(1));
    }

    #[test]
    fn test_time_range_windows() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();

        let (start, end) = TimeRange::Today.window(now);
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap());
        assert_eq!(end, now);

        let (start, _) = TimeRange::OneMonth.window(now);
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 5, 15, 10, 30, 0).unwrap());

        let (start, _) = TimeRange::SixMonths.window(now);
        assert_eq!(start, Utc.with_ymd_and_hms(2023, 12, 15, 10, 30, 0).unwrap());

        let (start, _) = TimeRange::TenYears.window(now);
        assert_eq!(start, Utc.with_ymd_and_hms(2014, 6, 15, 10, 30, 0).unwrap());

        let (start, _) = TimeRange::AllTime.window(now);
        assert_eq!(start, DateTime::UNIX_EPOCH);
    }

    #[test]
    fn test_time_range_wire_names() {
        for range in [
            TimeRange::Today,
            TimeRange::OneWeek,
            TimeRange::OneMonth,
            TimeRange::SixMonths,
            TimeRange::OneYear,
            TimeRange::TenYears,
            TimeRange::AllTime,
        ] {
            assert_eq!(TimeRange::parse(range.as_str()), Some(range));
        }
        assert_eq!(TimeRange::parse("yesterday"), None);
    }

    #[test]
    fn test_namespaced_params() {
        let mut adapter = SearchAdapter::with_params(
            MemoryQueryStore::new(),
            ParamNames::namespaced("orders_"),
        );
        adapter.begin_search(SearchDescriptor::new("id", "42", MatchOp::Eq));

        assert_eq!(adapter.store().get("orders_q").as_deref(), Some("42"));
        assert_eq!(adapter.store().get("q"), None);
    }
}
