use log::debug;

use crate::card::Card;
use crate::error::ActionError;

use super::{GameState, Round};

impl Round {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state == GameState::PlayerTurn {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 ends the player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the shoe cannot
    /// deal.
    pub fn player_hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.shoe.deal_card()?;
        self.player.add_card(card);
        debug!("player hits {card}, score {}", self.player.score());

        if self.player.is_busted() {
            self.state = GameState::DealerTurn;
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn player_stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        self.state = GameState::DealerTurn;
        debug!("player stands on {}", self.player.score());

        Ok(())
    }
}
