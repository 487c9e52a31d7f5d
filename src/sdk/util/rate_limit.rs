use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;

pub type Limiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// The summary endpoint is unauthenticated; stay well under the polite
/// anonymous-client request ceiling.
pub fn wiki_limiter() -> Limiter {
    let quota = Quota::per_second(NonZeroU32::new(20).unwrap());
    Arc::new(RateLimiter::direct(quota))
}
