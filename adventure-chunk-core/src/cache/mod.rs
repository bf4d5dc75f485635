mod cache_key;
mod clock;
mod observation_cache;

pub use cache_key::cache_key;
pub use clock::{Clock, ManualClock, SystemClock};
pub use observation_cache::{CacheEntry, ObservationCache, DEFAULT_TTL_MINUTES};
