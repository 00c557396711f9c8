//! Turn arbitration.
//!
//! Deciding who answers next is a pure function of the current seat and
//! the two expiry flags, so it can be tested without any clocks.

use crate::core::PlayerId;

/// The seat that should answer next after `current` resolves a guess.
///
/// Priority order:
/// 1. The opposing seat, if their clock has not expired.
/// 2. Otherwise `current` again, if their own clock has not expired
///    (expired players are skipped in rotation).
/// 3. `None` when both clocks are expired; the session is terminal and
///    no clock restarts.
///
/// ```
/// use showcase_duel::core::PlayerId;
/// use showcase_duel::engine::next_active;
///
/// let p0 = PlayerId::new(0);
/// assert_eq!(next_active(p0, [false, false]), Some(p0.other()));
/// assert_eq!(next_active(p0, [false, true]), Some(p0));
/// assert_eq!(next_active(p0, [true, true]), None);
/// ```
#[must_use]
pub fn next_active(current: PlayerId, expired: [bool; 2]) -> Option<PlayerId> {
    let candidate = current.other();
    if !expired[candidate.index()] {
        Some(candidate)
    } else if !expired[current.index()] {
        Some(current)
    } else {
        None
    }
}
