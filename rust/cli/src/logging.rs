//! Diagnostic logging for the CLI.
//!
//! Output goes to stderr so it never mixes with game output on stdout.
//! The filter comes from `JACKS_LOG` (default `warn`); `--verbose` forces
//! `debug`.

use jacks_engine::events::GameEvent;
use tracing_subscriber::EnvFilter;

pub const ENV_LOG: &str = "JACKS_LOG";

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "debug";

/// Install the global fmt subscriber. Later calls are no-ops, so `run` can
/// be invoked repeatedly in one process.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Log each event returned by a session action.
pub fn log_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::CardDealt { slot, card } => {
                tracing::debug!(slot, card = %card, "card dealt");
            }
            GameEvent::HoldToggled { slot, held } => {
                tracing::debug!(slot, held, "hold toggled");
            }
            GameEvent::DrawResolved { outcome, credits } => {
                tracing::info!(
                    rank = %outcome.rank,
                    winnings = outcome.winnings,
                    tier = ?outcome.tier,
                    credits,
                    "hand resolved"
                );
            }
            GameEvent::ShoeReplenished { remaining } => {
                tracing::info!(remaining, "shoe replenished");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jacks_engine::cards::{Card, Rank, Suit};
    use jacks_engine::hand::HandRank;
    use jacks_engine::payout::Outcome;
    use std::sync::{Arc, Mutex};
    use tracing::Level;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::{Layer, Registry};

    #[derive(Debug, Clone)]
    struct LogEntry {
        level: Level,
        message: String,
        fields: Vec<(String, String)>,
    }

    #[derive(Clone, Default)]
    struct CaptureLayer {
        entries: Arc<Mutex<Vec<LogEntry>>>,
    }

    impl<S: tracing::Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = FieldVisitor::default();
            event.record(&mut visitor);
            self.entries.lock().unwrap().push(LogEntry {
                level: *event.metadata().level(),
                message: visitor.message.unwrap_or_default(),
                fields: visitor.fields,
            });
        }
    }

    #[derive(Default)]
    struct FieldVisitor {
        message: Option<String>,
        fields: Vec<(String, String)>,
    }

    impl tracing::field::Visit for FieldVisitor {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            let value = format!("{:?}", value);
            if field.name() == "message" {
                self.message = Some(value);
            } else {
                self.fields.push((field.name().to_string(), value));
            }
        }
    }

    fn capture(events: &[GameEvent]) -> Vec<LogEntry> {
        let layer = CaptureLayer::default();
        let registry = Registry::default().with(layer.clone());
        tracing::subscriber::with_default(registry, || log_events(events));
        let entries = layer.entries.lock().unwrap().clone();
        entries
    }

    #[test]
    fn every_event_is_logged() {
        let card = Card::new(Rank::Ace, Suit::Spades);
        let entries = capture(&[
            GameEvent::CardDealt { slot: 0, card },
            GameEvent::HoldToggled { slot: 0, held: true },
            GameEvent::ShoeReplenished { remaining: 47 },
        ]);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].level, Level::DEBUG);
        assert_eq!(entries[0].message, "card dealt");
        assert!(entries[2].fields.iter().any(|(k, v)| k == "remaining" && v == "47"));
    }

    #[test]
    fn resolved_hand_carries_outcome_fields() {
        let entries = capture(&[GameEvent::DrawResolved {
            outcome: Outcome::new(HandRank::FullHouse, 2),
            credits: 116,
        }]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, Level::INFO);
        let fields = &entries[0].fields;
        assert!(fields.iter().any(|(k, v)| k == "winnings" && v == "18"));
        assert!(fields.iter().any(|(k, v)| k == "credits" && v == "116"));
        assert!(fields.iter().any(|(k, v)| k == "rank" && v.contains("Full House")));
    }
}
