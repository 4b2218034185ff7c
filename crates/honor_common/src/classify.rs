//! Classification policy: explicit overrides first, content hash as the
//! tiebreak.

use crate::memory::{normalize, MemoryState};

/// Deterministic default judgment for phrases nobody has ruled on.
///
/// The final hex digit of the phrase's MD5 decides: 0-7 honorable, 8-f
/// dishonorable. Stable across runs and hosts, an even split over arbitrary
/// input, no persisted state.
pub fn fallback_judgment(phrase: &str) -> bool {
    let digest = md5::compute(phrase.as_bytes());
    (digest[15] & 0x0f) < 8
}

/// Three-tier decision: honorable list, then dishonorable list, then the
/// hash fallback. Querying never writes an override.
pub fn is_honorable(memory: &MemoryState, phrase: &str) -> bool {
    let key = normalize(phrase);
    if memory.honorable.contains(&key) {
        return true;
    }
    if memory.dishonorable.contains(&key) {
        return false;
    }
    fallback_judgment(&key)
}
