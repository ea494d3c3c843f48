//! Fixed-window refresh quota
//!
//! Tracks, per bucket key, how many operations remain in the current fixed
//! period. Buckets refill lazily: a bucket resets to full only when a caller
//! observes that its period has elapsed, never on a timer. Blocking callers
//! queue as waiters and are granted slots strictly in arrival order by a
//! per-key consumer task.

use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::time::Instant;

use crate::data::{Principal, PrincipalRole};

/// Scope of a limiter: one shared bucket, or one bucket per principal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketKind {
    Global,
    PerPrincipal,
}

/// Key of one independently tracked quota bucket.
///
/// Per-principal keys carry the role so a student and a lecturer that happen
/// to share a numeric id are never throttled together.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BucketKey {
    Global,
    Principal {
        user_id: i64,
        role: PrincipalRole,
        object_id: i64,
    },
}

#[derive(Debug)]
struct BucketState {
    remaining: u32,
    reset_at: Instant,
}

impl BucketState {
    fn full(limit: u32, now: Instant, period: Duration) -> Self {
        Self {
            remaining: limit,
            reset_at: now + period,
        }
    }

    fn refill_if_due(&mut self, limit: u32, now: Instant, period: Duration) {
        if self.reset_at <= now {
            self.remaining = limit;
            self.reset_at = now + period;
        }
    }
}

#[derive(Default)]
struct WaitQueue {
    waiters: VecDeque<oneshot::Sender<()>>,
}

struct Inner {
    buckets: HashMap<BucketKey, BucketState>,
    queues: HashMap<BucketKey, WaitQueue>,
}

struct Shared {
    period: Duration,
    limit: u32,
    inner: Mutex<Inner>,
}

/// Fixed-window rate limiter: at most `limit` operations per `period` for
/// every bucket key. A key seen for the first time starts full.
///
/// Clones share the same buckets and waiter queues.
#[derive(Clone)]
pub struct RateLimiter {
    kind: BucketKind,
    blocking: bool,
    shared: Arc<Shared>,
}

impl RateLimiter {
    /// `blocking` decides whether [`RateLimiter::acquire`] suspends the
    /// caller until its slot is granted or returns right after enqueueing.
    pub fn new(period: Duration, limit: u32, kind: BucketKind, blocking: bool) -> Self {
        debug_assert!(limit >= 1, "a quota of zero can never grant a slot");
        Self {
            kind,
            blocking,
            shared: Arc::new(Shared {
                period,
                limit,
                inner: Mutex::new(Inner {
                    buckets: HashMap::new(),
                    queues: HashMap::new(),
                }),
            }),
        }
    }

    /// Bucket key the given principal falls into
    pub fn key_for(&self, principal: &Principal) -> BucketKey {
        match self.kind {
            BucketKind::Global => BucketKey::Global,
            BucketKind::PerPrincipal => BucketKey::Principal {
                user_id: principal.user_id(),
                role: principal.role(),
                object_id: principal.object_id(),
            },
        }
    }

    /// Whether the principal's bucket is currently out of slots. Refills
    /// lazily; never consumes a slot, never errors.
    pub fn is_limited(&self, principal: &Principal) -> bool {
        let key = self.key_for(principal);
        let mut inner = lock(&self.shared.inner);
        let bucket = inner.bucket(key, Instant::now(), self.shared.limit, self.shared.period);
        bucket.remaining == 0
    }

    /// Consumes one slot if the bucket has any left
    pub fn try_acquire(&self, principal: &Principal) -> bool {
        let key = self.key_for(principal);
        let mut inner = lock(&self.shared.inner);
        let bucket = inner.bucket(key, Instant::now(), self.shared.limit, self.shared.period);
        if bucket.remaining > 0 {
            bucket.remaining -= 1;
            true
        } else {
            false
        }
    }

    /// Queues for a slot. The waiter is registered in FIFO order before this
    /// returns; the returned future resolves once the slot is granted when
    /// the limiter is blocking, and immediately otherwise. Either way the
    /// slot is spent once the consumer reaches the waiter.
    pub fn acquire(&self, principal: &Principal) -> impl Future<Output = ()> + Send + 'static {
        let key = self.key_for(principal);
        let (tx, rx) = oneshot::channel();
        let start_consumer = {
            let mut inner = lock(&self.shared.inner);
            let first_waiter = !inner.queues.contains_key(&key);
            inner.queues.entry(key.clone()).or_default().waiters.push_back(tx);
            first_waiter
        };
        if start_consumer {
            tokio::spawn(drain_queue(Arc::clone(&self.shared), key));
        }
        let blocking = self.blocking;
        async move {
            if blocking {
                // the consumer never drops a registered waiter unresolved
                let _ = rx.await;
            }
        }
    }
}

impl Inner {
    fn bucket(
        &mut self,
        key: BucketKey,
        now: Instant,
        limit: u32,
        period: Duration,
    ) -> &mut BucketState {
        let bucket = self
            .buckets
            .entry(key)
            .or_insert_with(|| BucketState::full(limit, now, period));
        bucket.refill_if_due(limit, now, period);
        bucket
    }
}

/// Per-key consumer: grants queued waiters in arrival order while capacity
/// remains, sleeps through exhausted periods, and exits once its queue
/// empties. One consumer runs per key with a non-empty queue.
async fn drain_queue(shared: Arc<Shared>, key: BucketKey) {
    loop {
        let sleep_until = {
            let mut inner = lock(&shared.inner);
            let now = Instant::now();
            let Inner { buckets, queues } = &mut *inner;
            let bucket = buckets
                .entry(key.clone())
                .or_insert_with(|| BucketState::full(shared.limit, now, shared.period));
            bucket.refill_if_due(shared.limit, now, shared.period);
            let Some(queue) = queues.get_mut(&key) else {
                return;
            };
            loop {
                let Some(waiter) = queue.waiters.pop_front() else {
                    queues.remove(&key);
                    return;
                };
                if bucket.remaining == 0 {
                    queue.waiters.push_front(waiter);
                    break bucket.reset_at;
                }
                bucket.remaining -= 1;
                // the caller may have stopped waiting; the slot stays
                // spent either way
                let _ = waiter.send(());
            }
        };
        tokio::time::sleep_until(sleep_until).await;
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
