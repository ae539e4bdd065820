use crate::errors::GameError;

/// Smallest wager per hand.
pub const MIN_BET: u8 = 1;
/// Largest wager per hand.
pub const MAX_BET: u8 = 5;
/// Credits a session starts with unless configured otherwise.
pub const DEFAULT_STARTING_CREDITS: u32 = 100;
/// Cards in a video poker hand.
pub const HAND_SIZE: usize = 5;
/// A new shoe is shuffled as soon as fewer cards than this remain.
pub const LOW_WATER_MARK: usize = 10;

/// Brings any requested bet into `[MIN_BET, MAX_BET]`.
///
/// Out-of-range requests are clamped rather than rejected, matching the
/// bet up / bet down controls which simply stop at either end.
///
/// # Examples
///
/// ```
/// use jacks_engine::rules::clamp_bet;
///
/// assert_eq!(clamp_bet(0), 1);
/// assert_eq!(clamp_bet(3), 3);
/// assert_eq!(clamp_bet(99), 5);
/// assert_eq!(clamp_bet(-4), 1);
/// ```
pub fn clamp_bet(requested: i64) -> u8 {
    requested.clamp(MIN_BET as i64, MAX_BET as i64) as u8
}

/// Checks that a hand can be paid for.
///
/// # Errors
///
/// Returns [`GameError::InsufficientCredits`] when `credits < bet`.
///
/// ```
/// use jacks_engine::rules::check_can_deal;
/// use jacks_engine::errors::GameError;
///
/// assert!(check_can_deal(5, 5).is_ok());
/// assert_eq!(
///     check_can_deal(4, 5),
///     Err(GameError::InsufficientCredits { credits: 4, bet: 5 })
/// );
/// ```
pub fn check_can_deal(credits: u32, bet: u8) -> Result<(), GameError> {
    if credits < u32::from(bet) {
        return Err(GameError::InsufficientCredits { credits, bet });
    }
    Ok(())
}
