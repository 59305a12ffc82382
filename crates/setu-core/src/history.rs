use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::types::{HouseholdCategory, Money, Pct};
use crate::SetuResult;

/// Most-recent window retained by the assessment log.
pub const DEFAULT_RETENTION: usize = 50;

/// Pass/fail outcome of one recorded assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentOutcome {
    Pass,
    Fail,
}

/// One appended eligibility outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub household: HouseholdCategory,
    pub annual_income: Money,
    /// Existing plus proposed monthly debt service at assessment time.
    pub total_monthly_obligation: Money,
    pub foir_pct: Pct,
    pub outcome: AssessmentOutcome,
}

/// Storage backing for the assessment log.
///
/// The log itself stays pure; durability is injected. Tests and the default
/// wiring use [`InMemoryStore`]; a durable implementation lives with the
/// caller that owns the filesystem or database handle.
pub trait HistoryStore {
    fn load(&mut self) -> SetuResult<Vec<AssessmentRecord>>;
    fn persist(&mut self, records: &[AssessmentRecord]) -> SetuResult<()>;
}

/// Volatile store; records live only as long as the process.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Vec<AssessmentRecord>,
}

impl HistoryStore for InMemoryStore {
    fn load(&mut self) -> SetuResult<Vec<AssessmentRecord>> {
        Ok(self.records.clone())
    }

    fn persist(&mut self, records: &[AssessmentRecord]) -> SetuResult<()> {
        self.records = records.to_vec();
        Ok(())
    }
}

/// Append-only log of assessment outcomes with bounded retention.
///
/// Oldest entries are evicted once the window is full. Not internally
/// synchronised: a single logical writer is assumed. Wrap in a `Mutex`
/// when shared across threads so append-and-trim stays atomic.
#[derive(Debug)]
pub struct AssessmentHistory<S: HistoryStore> {
    store: S,
    records: VecDeque<AssessmentRecord>,
    retention: usize,
    next_id: u64,
}

impl AssessmentHistory<InMemoryStore> {
    pub fn in_memory() -> Self {
        AssessmentHistory {
            store: InMemoryStore::default(),
            records: VecDeque::new(),
            retention: DEFAULT_RETENTION,
            next_id: 1,
        }
    }
}

impl<S: HistoryStore> AssessmentHistory<S> {
    /// Open the log over an injected store, loading whatever it holds.
    pub fn with_store(mut store: S) -> SetuResult<Self> {
        let mut records: VecDeque<AssessmentRecord> = store.load()?.into();
        while records.len() > DEFAULT_RETENTION {
            records.pop_front();
        }
        let next_id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Ok(AssessmentHistory {
            store,
            records,
            retention: DEFAULT_RETENTION,
            next_id,
        })
    }

    /// Append a fully-formed record, evicting the oldest entry when the
    /// retention window is full, and persist the new window.
    pub fn append(&mut self, record: AssessmentRecord) -> SetuResult<()> {
        self.next_id = self.next_id.max(record.id + 1);
        self.records.push_back(record);
        while self.records.len() > self.retention {
            self.records.pop_front();
        }
        let snapshot: Vec<AssessmentRecord> = self.records.iter().cloned().collect();
        self.store.persist(&snapshot)
    }

    /// Stamp and append a new record, returning its assigned id.
    pub fn record(
        &mut self,
        household: HouseholdCategory,
        annual_income: Money,
        total_monthly_obligation: Money,
        foir_pct: Pct,
        outcome: AssessmentOutcome,
    ) -> SetuResult<u64> {
        let id = self.next_id;
        self.append(AssessmentRecord {
            id,
            created_at: Utc::now(),
            household,
            annual_income,
            total_monthly_obligation,
            foir_pct,
            outcome,
        })?;
        Ok(id)
    }

    /// The `n` most recent records, newest first.
    pub fn recent(&self, n: usize) -> Vec<AssessmentRecord> {
        self.records.iter().rev().take(n).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
