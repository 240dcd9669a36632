//! Commands: the inputs a session accepts.
//!
//! A human (through the rendering layer) or the autoplay policy expresses
//! every gameplay intent as a `Command`. The rules engine applies it
//! atomically and records it in the history as an `ActionRecord`.

use serde::{Deserialize, Serialize};

use super::entity::EntityId;

/// A gameplay command.
///
/// ```
/// use pandemic_deckbuilder::core::Command;
///
/// let play = Command::PlayAt(0);
/// let buy = Command::Acquire { slot: 2 };
/// assert_ne!(play, buy);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "command", content = "args", rename_all = "snake_case")]
pub enum Command {
    /// Play the card at a hand position.
    PlayAt(usize),
    /// Play a specific card from hand.
    Play(EntityId),
    /// Play every card in hand, in hand order.
    PlayAll,
    /// Draw up to N cards.
    Draw(usize),
    /// Buy the card offered in a market slot.
    Acquire { slot: usize },
    /// Finish the turn.
    EndTurn,
    /// Switch to the buy phase.
    BeginBuyPhase,
}

/// Who issued a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Actor {
    Human,
    Autoplay,
}

/// A command that was applied successfully.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub actor: Actor,

    pub command: Command,

    /// Turn number when the command was applied.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(actor: Actor, command: Command, turn: u32, sequence: u32) -> Self {
        Self {
            actor,
            command,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_equality() {
        assert_eq!(Command::PlayAt(1), Command::PlayAt(1));
        assert_ne!(Command::PlayAt(1), Command::PlayAt(2));
        assert_ne!(Command::Acquire { slot: 0 }, Command::Acquire { slot: 1 });
    }

    #[test]
    fn test_action_record() {
        let record = ActionRecord::new(Actor::Autoplay, Command::EndTurn, 3, 5);

        assert_eq!(record.actor, Actor::Autoplay);
        assert_eq!(record.command, Command::EndTurn);
        assert_eq!(record.turn, 3);
        assert_eq!(record.sequence, 5);
    }

    #[test]
    fn test_command_serialization() {
        let json = serde_json::to_string(&Command::Acquire { slot: 2 }).unwrap();
        assert_eq!(json, r#"{"command":"acquire","args":{"slot":2}}"#);

        let json = serde_json::to_string(&Command::PlayAt(1)).unwrap();
        assert_eq!(json, r#"{"command":"play_at","args":1}"#);

        let back: Command = serde_json::from_str(r#"{"command":"end_turn"}"#).unwrap();
        assert_eq!(back, Command::EndTurn);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(Actor::Human, Command::Play(EntityId(4)), 2, 3);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
