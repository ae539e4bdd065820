//! Command handler modules for the `jacks` CLI.
//!
//! Each subcommand lives in its own module and follows the same pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in, so tests can capture them
//! - Errors propagated via [`CliError`](crate::error::CliError)

mod cfg;
mod eval;
mod paytable;
mod play;
mod sim;

pub use cfg::handle_cfg_command;
pub use eval::handle_eval_command;
pub use paytable::handle_paytable_command;
pub use play::handle_play_command;
pub use sim::{SimOptions, handle_sim_command};

use jacks_engine::cards::Card;
use jacks_engine::logger::HandRecord;
use jacks_engine::session::GameSession;

/// History record for the hand `session` has just drawn. `dealt` is the
/// hand as it looked right after the deal.
pub(crate) fn build_record(
    hand_id: String,
    session: &GameSession,
    dealt: Vec<Card>,
) -> Option<HandRecord> {
    let outcome = session.last_outcome()?;
    Some(HandRecord {
        hand_id,
        seed: Some(session.seed()),
        bet: session.bet(),
        dealt,
        held: session.held_mask(),
        final_hand: session.hand_cards(),
        rank: outcome.rank,
        winnings: outcome.winnings,
        credits_after: session.credits(),
        ts: None,
        meta: None,
    })
}
