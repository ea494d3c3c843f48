//! Quota-gated cache refresh
//!
//! Every timetable read goes through here. The coordinator consults the row
//! store first and decides, under the refresh quota, whether to hit the
//! remote endpoint: an empty cache is always fetched, an exhausted quota
//! serves the cached rows unchanged, and a fetch that fails transiently or
//! comes back empty never destroys what is already stored. Concurrent
//! requests for the same rows collapse into one fetch.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::Mutex as AsyncMutex;
use tracing::{debug, info, warn};

use crate::clock::{DayType, SemesterClock, Window};
use crate::data::remote::{RemoteError, RemoteSource};
use crate::data::{ExamEntry, Principal, PrincipalRole, ResourceKind, ScheduleEntry};
use crate::limiter::{BucketKind, RateLimiter};
use crate::store::{Store, StoreError};

/// Default refresh quota period
pub const DEFAULT_QUOTA_PERIOD: Duration = Duration::from_secs(7200);
/// Default refreshes per period for one principal
pub const DEFAULT_PRINCIPAL_LIMIT: u32 = 1;
/// Default refreshes per period across all principals
pub const DEFAULT_GLOBAL_LIMIT: u32 = 3;

/// Errors surfaced by a coordinated read
#[derive(Debug, Error)]
pub enum RefreshError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

/// The four refresh limiters: (schedule, exams) x (per-principal, global).
///
/// Clones of a limiter share buckets, so a set handed to the coordinator can
/// be observed or pre-charged from outside through retained clones.
#[derive(Clone)]
pub struct RefreshLimits {
    pub schedule_principal: RateLimiter,
    pub schedule_global: RateLimiter,
    pub exams_principal: RateLimiter,
    pub exams_global: RateLimiter,
}

impl RefreshLimits {
    /// Production defaults: one refresh per principal and three across the
    /// deployment every two hours, without blocking callers.
    pub fn standard() -> Self {
        Self::with_quota(
            DEFAULT_QUOTA_PERIOD,
            DEFAULT_PRINCIPAL_LIMIT,
            DEFAULT_GLOBAL_LIMIT,
            false,
        )
    }

    /// Same shape with an explicit quota, mainly for tests and staging
    pub fn with_quota(period: Duration, principal_limit: u32, global_limit: u32, blocking: bool) -> Self {
        Self {
            schedule_principal: RateLimiter::new(
                period,
                principal_limit,
                BucketKind::PerPrincipal,
                blocking,
            ),
            schedule_global: RateLimiter::new(period, global_limit, BucketKind::Global, blocking),
            exams_principal: RateLimiter::new(
                period,
                principal_limit,
                BucketKind::PerPrincipal,
                blocking,
            ),
            exams_global: RateLimiter::new(period, global_limit, BucketKind::Global, blocking),
        }
    }
}

impl Default for RefreshLimits {
    fn default() -> Self {
        Self::standard()
    }
}

/// Identity of one in-flight refresh
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct FlightKey {
    user_id: i64,
    role: PrincipalRole,
    object_id: i64,
    kind: ResourceKind,
    window_start: i64,
}

impl FlightKey {
    fn new(principal: &Principal, kind: ResourceKind, window_start: i64) -> Self {
        Self {
            user_id: principal.user_id(),
            role: principal.role(),
            object_id: principal.object_id(),
            kind,
            window_start,
        }
    }
}

/// Serves timetable rows from the store, refreshing them from the remote
/// endpoint under the refresh quota.
pub struct RefreshCoordinator<S, R> {
    store: S,
    remote: R,
    clock: SemesterClock,
    limits: RefreshLimits,
    inflight: Mutex<HashMap<FlightKey, Arc<AsyncMutex<()>>>>,
}

impl<S: Store, R: RemoteSource> RefreshCoordinator<S, R> {
    pub fn new(store: S, remote: R, clock: SemesterClock, limits: RefreshLimits) -> Self {
        Self {
            store,
            remote,
            clock,
            limits,
            inflight: Mutex::new(HashMap::new()),
        }
    }

    /// Schedule rows for the week `week_delta` weeks away from the current
    /// one.
    pub async fn schedule_week(
        &self,
        principal: &Principal,
        now: DateTime<Utc>,
        week_delta: i64,
    ) -> Result<Vec<ScheduleEntry>, RefreshError> {
        let week = self.clock.week_window(now, week_delta);
        self.schedule_rows(principal, week, week).await
    }

    /// Schedule rows for one academic day. The query is day-granular but any
    /// refresh covers the whole containing week, so stepping through a week
    /// day by day costs one quota slot at most.
    pub async fn schedule_day(
        &self,
        principal: &Principal,
        now: DateTime<Utc>,
        day: DayType,
        past: bool,
    ) -> Result<Vec<ScheduleEntry>, RefreshError> {
        let query = self.clock.day_window(now, day, past);
        let week = SemesterClock::containing_week(query, day);
        self.schedule_rows(principal, query, week).await
    }

    /// Exam rows for the principal's current session
    pub async fn exams(&self, principal: &Principal) -> Result<Vec<ExamEntry>, RefreshError> {
        let key = FlightKey::new(principal, ResourceKind::Exams, 0);
        let flight = self.flight_lock(key.clone());
        let result = {
            let _guard = flight.lock().await;
            self.exam_rows_locked(principal).await
        };
        self.release_flight(&key, &flight);
        result
    }

    async fn schedule_rows(
        &self,
        principal: &Principal,
        query: Window,
        week: Window,
    ) -> Result<Vec<ScheduleEntry>, RefreshError> {
        let key = FlightKey::new(principal, ResourceKind::Schedule, week.start);
        let flight = self.flight_lock(key.clone());
        let result = {
            let _guard = flight.lock().await;
            self.schedule_rows_locked(principal, query, week).await
        };
        self.release_flight(&key, &flight);
        result
    }

    /// The per-request state machine, run under the flight guard
    async fn schedule_rows_locked(
        &self,
        principal: &Principal,
        query: Window,
        week: Window,
    ) -> Result<Vec<ScheduleEntry>, RefreshError> {
        let cached = self.store.schedule(principal, week).await?;
        if cached.is_empty() {
            // a cold cache is always fetched; the slot is spent so later
            // requests see the quota charged, but an exhausted quota cannot
            // block the first fill
            self.consume_quota(
                &self.limits.schedule_principal,
                &self.limits.schedule_global,
                principal,
            );
            self.refresh_schedule(principal, week).await?;
            return Ok(self.store.schedule(principal, query).await?);
        }
        if !self.take_quota(
            &self.limits.schedule_principal,
            &self.limits.schedule_global,
            principal,
        ) {
            debug!(
                user_id = principal.user_id(),
                object_id = principal.object_id(),
                week_start = week.start,
                "refresh quota exhausted, serving cached schedule"
            );
            return Ok(self.store.schedule(principal, query).await?);
        }
        self.refresh_schedule(principal, week).await?;
        Ok(self.store.schedule(principal, query).await?)
    }

    async fn exam_rows_locked(
        &self,
        principal: &Principal,
    ) -> Result<Vec<ExamEntry>, RefreshError> {
        let cached = self.store.exams(principal).await?;
        if cached.is_empty() {
            self.consume_quota(
                &self.limits.exams_principal,
                &self.limits.exams_global,
                principal,
            );
            self.refresh_exams(principal).await?;
            return Ok(self.store.exams(principal).await?);
        }
        if !self.take_quota(
            &self.limits.exams_principal,
            &self.limits.exams_global,
            principal,
        ) {
            debug!(
                user_id = principal.user_id(),
                object_id = principal.object_id(),
                "refresh quota exhausted, serving cached exams"
            );
            return Ok(cached);
        }
        self.refresh_exams(principal).await?;
        Ok(self.store.exams(principal).await?)
    }

    /// Fetches the week from the remote and replaces the stored rows.
    /// Returns `false` when the store was deliberately left untouched: the
    /// endpoint was unavailable or returned no rows.
    async fn refresh_schedule(
        &self,
        principal: &Principal,
        week: Window,
    ) -> Result<bool, RefreshError> {
        let fetched = match self.remote.fetch_schedule(principal, &week).await {
            Ok(rows) => rows,
            Err(RemoteError::Unavailable(tries)) => {
                warn!(
                    object_id = principal.object_id(),
                    tries, "schedule endpoint unavailable, keeping cached rows"
                );
                return Ok(false);
            }
            Err(err) => return Err(err.into()),
        };
        if fetched.is_empty() {
            debug!(
                object_id = principal.object_id(),
                week_start = week.start,
                "endpoint returned no schedule rows, keeping cached rows"
            );
            return Ok(false);
        }
        info!(
            object_id = principal.object_id(),
            week_start = week.start,
            rows = fetched.len(),
            "schedule refreshed"
        );
        self.store
            .replace_schedule(principal, week, fetched)
            .await?;
        Ok(true)
    }

    async fn refresh_exams(&self, principal: &Principal) -> Result<bool, RefreshError> {
        let fetched = match self.remote.fetch_exams(principal).await {
            Ok(rows) => rows,
            Err(RemoteError::Unavailable(tries)) => {
                warn!(
                    object_id = principal.object_id(),
                    tries, "schedule endpoint unavailable, keeping cached exams"
                );
                return Ok(false);
            }
            Err(err) => return Err(err.into()),
        };
        if fetched.is_empty() {
            debug!(
                object_id = principal.object_id(),
                "endpoint returned no exam rows, keeping cached rows"
            );
            return Ok(false);
        }
        info!(
            object_id = principal.object_id(),
            rows = fetched.len(),
            "exams refreshed"
        );
        self.store.replace_exams(principal, fetched).await?;
        Ok(true)
    }

    /// Consumes one slot from both limiters if neither is exhausted
    fn take_quota(&self, per: &RateLimiter, global: &RateLimiter, principal: &Principal) -> bool {
        if per.is_limited(principal) || global.is_limited(principal) {
            return false;
        }
        // a lost race on the second limiter still spends the first slot;
        // the caller then serves stale, which is the safe side
        per.try_acquire(principal) && global.try_acquire(principal)
    }

    /// Spends one slot from both limiters without consulting them
    fn consume_quota(&self, per: &RateLimiter, global: &RateLimiter, principal: &Principal) {
        let _ = per.try_acquire(principal);
        let _ = global.try_acquire(principal);
    }

    fn flight_lock(&self, key: FlightKey) -> Arc<AsyncMutex<()>> {
        Arc::clone(
            lock(&self.inflight)
                .entry(key)
                .or_insert_with(|| Arc::new(AsyncMutex::new(()))),
        )
    }

    /// Drops the flight entry once no other request holds it
    fn release_flight(&self, key: &FlightKey, flight: &Arc<AsyncMutex<()>>) {
        let mut inflight = lock(&self.inflight);
        // ours plus the map's copy means nobody else is waiting
        if Arc::strong_count(flight) == 2 {
            inflight.remove(key);
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SubjectType;
    use crate::store::JsonStore;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    /// Scripted remote: answers are popped in order, and an exhausted script
    /// answers with no rows.
    #[derive(Default)]
    struct FakeRemote {
        schedule: Mutex<VecDeque<Result<Vec<ScheduleEntry>, RemoteError>>>,
        exams: Mutex<VecDeque<Result<Vec<ExamEntry>, RemoteError>>>,
        schedule_calls: AtomicUsize,
        exam_calls: AtomicUsize,
        delay: Option<Duration>,
    }

    impl FakeRemote {
        fn with_schedule(
            answers: impl IntoIterator<Item = Result<Vec<ScheduleEntry>, RemoteError>>,
        ) -> Self {
            Self {
                schedule: Mutex::new(answers.into_iter().collect()),
                ..Self::default()
            }
        }

        fn with_exams(
            answers: impl IntoIterator<Item = Result<Vec<ExamEntry>, RemoteError>>,
        ) -> Self {
            Self {
                exams: Mutex::new(answers.into_iter().collect()),
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl RemoteSource for FakeRemote {
        async fn fetch_schedule(
            &self,
            _principal: &Principal,
            _week: &Window,
        ) -> Result<Vec<ScheduleEntry>, RemoteError> {
            self.schedule_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.schedule
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok(Vec::new()))
        }

        async fn fetch_exams(&self, _principal: &Principal) -> Result<Vec<ExamEntry>, RemoteError> {
            self.exam_calls.fetch_add(1, Ordering::SeqCst);
            self.exams
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok(Vec::new()))
        }
    }

    fn student() -> Principal {
        Principal::Student {
            user_id: 7,
            group_id: 1042,
        }
    }

    /// Wednesday 2023-03-15 noon; its week starts Monday 2023-03-13
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 3, 15, 12, 0, 0).unwrap()
    }

    fn entry(date: i64, number: u8) -> ScheduleEntry {
        ScheduleEntry {
            date,
            day: DayType::Monday,
            number,
            name: "Mathematical Analysis".to_string(),
            kind: SubjectType::Lecture,
            sub_group: 0,
            audience: "301".to_string(),
            building: "11".to_string(),
            employee_id: 501,
            group_id: 1042,
        }
    }

    fn exam(date: i64) -> ExamEntry {
        ExamEntry {
            date,
            time: "10:20".to_string(),
            name: "Databases".to_string(),
            kind: SubjectType::Exam,
            location: "214".to_string(),
            employee_id: 501,
            group_id: 1042,
        }
    }

    fn week_start() -> i64 {
        SemesterClock::default().week_window(now(), 0).start
    }

    fn coordinator(
        dir: &TempDir,
        remote: FakeRemote,
        limits: RefreshLimits,
    ) -> RefreshCoordinator<JsonStore, FakeRemote> {
        RefreshCoordinator::new(
            JsonStore::with_dir(dir.path().to_path_buf()),
            remote,
            SemesterClock::default(),
            limits,
        )
    }

    fn roomy_limits() -> RefreshLimits {
        RefreshLimits::with_quota(Duration::from_secs(7200), 10, 30, false)
    }

    #[tokio::test]
    async fn cache_miss_fetches_once_and_persists() {
        let dir = TempDir::new().unwrap();
        let remote = FakeRemote::with_schedule([Ok(vec![entry(week_start(), 1)])]);
        let coordinator = coordinator(&dir, remote, roomy_limits());

        let rows = coordinator.schedule_week(&student(), now(), 0).await.unwrap();
        assert_eq!(rows, vec![entry(week_start(), 1)]);

        let store = JsonStore::with_dir(dir.path().to_path_buf());
        let week = SemesterClock::default().week_window(now(), 0);
        assert_eq!(store.schedule(&student(), week).await.unwrap(), rows);
    }

    #[tokio::test]
    async fn exhausted_quota_serves_cached_rows_unchanged() {
        let dir = TempDir::new().unwrap();
        let remote = FakeRemote::with_schedule([
            Ok(vec![entry(week_start(), 1)]),
            Ok(vec![entry(week_start(), 2)]),
        ]);
        // the forced first fill spends the only per-principal slot
        let limits = RefreshLimits::with_quota(Duration::from_secs(7200), 1, 3, false);
        let coordinator = coordinator(&dir, remote, limits);

        let first = coordinator.schedule_week(&student(), now(), 0).await.unwrap();
        let second = coordinator.schedule_week(&student(), now(), 0).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(coordinator.remote.schedule_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn global_quota_throttles_across_principals() {
        let dir = TempDir::new().unwrap();
        let remote = FakeRemote::default();
        let limits = RefreshLimits::with_quota(Duration::from_secs(7200), 10, 2, false);
        let coordinator = coordinator(&dir, remote, limits);
        let other = Principal::Student {
            user_id: 8,
            group_id: 2000,
        };
        let week = SemesterClock::default().week_window(now(), 0);
        coordinator
            .store
            .replace_schedule(&student(), week, vec![entry(week.start, 1)])
            .await
            .unwrap();
        coordinator
            .store
            .replace_schedule(&other, week, vec![entry(week.start, 1)])
            .await
            .unwrap();

        // two refreshes exhaust the global bucket
        coordinator.schedule_week(&student(), now(), 0).await.unwrap();
        coordinator.schedule_week(&other, now(), 0).await.unwrap();
        coordinator.schedule_week(&student(), now(), 0).await.unwrap();

        assert_eq!(coordinator.remote.schedule_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn refresh_replaces_rows_instead_of_merging() {
        let dir = TempDir::new().unwrap();
        let remote = FakeRemote::with_schedule([
            Ok(vec![entry(week_start(), 1), entry(week_start(), 2)]),
            Ok(vec![entry(week_start(), 3)]),
        ]);
        let coordinator = coordinator(&dir, remote, roomy_limits());

        let first = coordinator.schedule_week(&student(), now(), 0).await.unwrap();
        assert_eq!(first.len(), 2);

        let second = coordinator.schedule_week(&student(), now(), 0).await.unwrap();
        assert_eq!(second, vec![entry(week_start(), 3)]);
    }

    #[tokio::test]
    async fn unavailable_endpoint_keeps_cached_rows() {
        let dir = TempDir::new().unwrap();
        let remote = FakeRemote::with_schedule([
            Ok(vec![entry(week_start(), 1)]),
            Err(RemoteError::Unavailable(5)),
        ]);
        let coordinator = coordinator(&dir, remote, roomy_limits());

        let first = coordinator.schedule_week(&student(), now(), 0).await.unwrap();
        let second = coordinator.schedule_week(&student(), now(), 0).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(coordinator.remote.schedule_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn empty_remote_answer_keeps_cached_rows() {
        let dir = TempDir::new().unwrap();
        let remote =
            FakeRemote::with_schedule([Ok(vec![entry(week_start(), 1)]), Ok(Vec::new())]);
        let coordinator = coordinator(&dir, remote, roomy_limits());

        let first = coordinator.schedule_week(&student(), now(), 0).await.unwrap();
        let second = coordinator.schedule_week(&student(), now(), 0).await.unwrap();

        assert_eq!(first, vec![entry(week_start(), 1)]);
        assert_eq!(second, first);
    }

    #[tokio::test]
    async fn empty_remote_and_empty_cache_yield_no_rows() {
        let dir = TempDir::new().unwrap();
        let remote = FakeRemote::with_schedule([Ok(Vec::new())]);
        let coordinator = coordinator(&dir, remote, roomy_limits());

        let rows = coordinator.schedule_week(&student(), now(), 0).await.unwrap();
        assert!(rows.is_empty());
        assert_eq!(coordinator.remote.schedule_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn rejected_fetch_propagates() {
        let dir = TempDir::new().unwrap();
        let remote = FakeRemote::with_schedule([Err(RemoteError::Rejected(
            reqwest::StatusCode::FORBIDDEN,
        ))]);
        let coordinator = coordinator(&dir, remote, roomy_limits());

        let result = coordinator.schedule_week(&student(), now(), 0).await;
        assert!(matches!(
            result,
            Err(RefreshError::Remote(RemoteError::Rejected(_)))
        ));
    }

    #[tokio::test]
    async fn forced_first_fill_counts_against_the_quota() {
        let dir = TempDir::new().unwrap();
        let remote = FakeRemote::with_schedule([
            Ok(vec![entry(week_start(), 1)]),
            Ok(vec![entry(week_start(), 2)]),
        ]);
        let limits = RefreshLimits::with_quota(Duration::from_secs(7200), 1, 3, false);
        let coordinator = coordinator(&dir, remote, limits);

        coordinator.schedule_week(&student(), now(), 0).await.unwrap();
        let second = coordinator.schedule_week(&student(), now(), 0).await.unwrap();

        // the slot went to the forced fill, so the second read is a stale
        // serve rather than a refresh
        assert_eq!(second, vec![entry(week_start(), 1)]);
        assert_eq!(coordinator.remote.schedule_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_cache_misses_collapse_into_one_fetch() {
        let dir = TempDir::new().unwrap();
        let mut remote = FakeRemote::with_schedule([Ok(vec![entry(week_start(), 1)])]);
        remote.delay = Some(Duration::from_secs(1));
        // the forced fill charges the per-principal slot, so the follower
        // lands on the stale-serve path once the leader finishes
        let limits = RefreshLimits::with_quota(Duration::from_secs(7200), 1, 3, false);
        let coordinator = coordinator(&dir, remote, limits);

        let student = student();
        let (a, b) = tokio::join!(
            coordinator.schedule_week(&student, now(), 0),
            coordinator.schedule_week(&student, now(), 0),
        );

        assert_eq!(a.unwrap(), vec![entry(week_start(), 1)]);
        assert_eq!(b.unwrap(), vec![entry(week_start(), 1)]);
        assert_eq!(coordinator.remote.schedule_calls.load(Ordering::SeqCst), 1);
        assert!(lock(&coordinator.inflight).is_empty());
    }

    #[tokio::test]
    async fn day_query_filters_a_week_granular_refresh() {
        let dir = TempDir::new().unwrap();
        let clock = SemesterClock::default();
        let monday = clock.day_window(now(), DayType::Monday, true).start;
        let tuesday = monday + crate::clock::SECS_PER_DAY;
        let remote = FakeRemote::with_schedule([Ok(vec![entry(monday, 1), entry(tuesday, 1)])]);
        let coordinator = coordinator(&dir, remote, roomy_limits());

        // the most recent Monday only
        let rows = coordinator
            .schedule_day(&student(), now(), DayType::Monday, true)
            .await
            .unwrap();

        assert_eq!(rows, vec![entry(monday, 1)]);
        // the whole week got persisted by the one fetch
        let week = SemesterClock::containing_week(
            clock.day_window(now(), DayType::Monday, true),
            DayType::Monday,
        );
        assert_eq!(
            coordinator.store.schedule(&student(), week).await.unwrap().len(),
            2
        );
    }

    #[tokio::test]
    async fn exams_flow_mirrors_schedules() {
        let dir = TempDir::new().unwrap();
        let remote = FakeRemote::with_exams([
            Ok(vec![exam(1_673_827_200)]),
            Err(RemoteError::Unavailable(5)),
        ]);
        let limits = RefreshLimits::with_quota(Duration::from_secs(7200), 10, 30, false);
        let coordinator = coordinator(&dir, remote, limits);

        let first = coordinator.exams(&student()).await.unwrap();
        let second = coordinator.exams(&student()).await.unwrap();

        assert_eq!(first, vec![exam(1_673_827_200)]);
        assert_eq!(second, first);
        assert_eq!(coordinator.remote.exam_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn exam_quota_is_independent_of_the_schedule_quota() {
        let dir = TempDir::new().unwrap();
        let remote = FakeRemote {
            schedule: Mutex::new(VecDeque::from([Ok(vec![entry(week_start(), 1)])])),
            exams: Mutex::new(VecDeque::from([Ok(vec![exam(1_673_827_200)])])),
            ..FakeRemote::default()
        };
        let limits = RefreshLimits::with_quota(Duration::from_secs(7200), 1, 3, false);
        let coordinator = coordinator(&dir, remote, limits);

        // exhausting the schedule quota leaves the exam quota untouched
        coordinator.schedule_week(&student(), now(), 0).await.unwrap();
        let exams = coordinator.exams(&student()).await.unwrap();

        assert_eq!(exams, vec![exam(1_673_827_200)]);
    }
}
