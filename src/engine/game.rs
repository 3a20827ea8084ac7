//! Set game implementation.

use im::Vector;
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::{
    Action, ActionRecord, CardId, GameConfig, GameRng, GameRngState, GameState, PublicState, TableView,
};
use crate::events::{ChangeNotice, GameEvent, ListenerRegistry, SubscriptionId};
use crate::rules::{evaluate, find_sets, GameResult, RulesEngine};
use crate::zones::Zone;

/// The Set engine: owns the table and runs the selection state machine.
#[derive(Debug)]
pub struct SetGame {
    config: GameConfig,
    /// Session RNG; every game shuffles with a fork of it.
    rng: GameRng,
    state: GameState,
    public: PublicState,
    listeners: ListenerRegistry,
}

/// Builder for creating a SetGame.
#[derive(Clone, Debug, Default)]
pub struct SetGameBuilder {
    config: GameConfig,
    seed: Option<u64>,
    rng_state: Option<GameRngState>,
}

impl SetGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a complete configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn hand_size(mut self, size: usize) -> Self {
        self.config = self.config.with_hand_size(size);
        self
    }

    pub fn deal_size(mut self, size: usize) -> Self {
        self.config = self.config.with_deal_size(size);
        self
    }

    /// Seed the shuffle stream. Without a seed the OS provides one.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Resume a shuffle stream captured with `SetGame::rng_state`.
    ///
    /// Takes precedence over `seed`.
    pub fn rng_state(mut self, state: GameRngState) -> Self {
        self.rng_state = Some(state);
        self
    }

    /// Build the engine and deal the first game.
    pub fn build(self) -> SetGame {
        let mut rng = match (&self.rng_state, self.seed) {
            (Some(state), _) => GameRng::from_state(state),
            (None, Some(seed)) => GameRng::new(seed),
            (None, None) => GameRng::from_entropy(),
        };

        let state = GameState::deal_new(&self.config, &mut rng.fork());

        SetGame {
            config: self.config,
            rng,
            state,
            public: PublicState::new(),
            listeners: ListenerRegistry::new(),
        }
    }
}

impl Default for SetGame {
    fn default() -> Self {
        Self::new()
    }
}

impl SetGame {
    /// Start a standard game with an OS-seeded shuffle.
    pub fn new() -> Self {
        SetGameBuilder::new().build()
    }

    /// Start a standard game with a reproducible shuffle.
    pub fn with_seed(seed: u64) -> Self {
        SetGameBuilder::new().seed(seed).build()
    }

    // === Intents ===

    /// Choose a card in the hand.
    ///
    /// - Fewer than three selected: toggles the card. Selecting the third
    ///   card evaluates the triple immediately.
    /// - Three selected: drops the old selection (discarding it if it was
    ///   a matched set) and selects the chosen card if it is still in hand.
    ///
    /// Ids not in the hand are ignored.
    pub fn choose(&mut self, id: CardId) {
        if !self.state.in_hand(id) {
            return;
        }

        let selected = self.state.selected();
        let mut events = Vec::new();

        if selected.len() >= 3 {
            self.clear_selection(selected, &mut events);
            if self.state.in_hand(id) {
                self.set_selected(id, true);
                events.push(GameEvent::Selected(id));
            }
        } else if selected.contains(&id) {
            self.set_selected(id, false);
            events.push(GameEvent::Deselected(id));
        } else {
            self.set_selected(id, true);
            events.push(GameEvent::Selected(id));
            if selected.len() == 2 {
                events.extend(self.evaluate_selection());
            }
        }

        self.commit(Action::Choose(id), events);
    }

    /// Replace a matched set, or add cards when there is none.
    ///
    /// With a matched set in hand, the three cards go to the discard and
    /// each slot is refilled from the deck while it lasts. Otherwise up to
    /// `deal_size` cards are added. Does nothing when the deck is empty
    /// and no set is pending.
    pub fn deal_more(&mut self) {
        let mut events = Vec::new();

        if self.state.matched().is_empty() {
            let dealt = self.state.deal(self.config.deal_size);
            if !dealt.is_empty() {
                events.push(GameEvent::Dealt(dealt));
            }
        } else {
            let (discarded, dealt) = self.state.discard_matched(None);
            events.push(GameEvent::SetDiscarded(discarded));
            if !dealt.is_empty() {
                events.push(GameEvent::Dealt(dealt));
            }
        }

        if !events.is_empty() {
            self.commit(Action::DealMore, events);
        }
    }

    /// Throw away the table and deal a fresh, reshuffled game.
    pub fn new_game(&mut self) {
        let mut table_rng = self.rng.fork();
        self.state = GameState::deal_new(&self.config, &mut table_rng);
        self.public.start_game();

        let game = self.public.game_number;
        self.commit(Action::NewGame, vec![GameEvent::GameStarted { game }]);
    }

    fn set_selected(&mut self, id: CardId, selected: bool) {
        if let Some(card) = self.state.card_mut(id) {
            card.selected = selected;
        }
    }

    /// Judge the three selected cards and mark them.
    fn evaluate_selection(&mut self) -> Option<GameEvent> {
        let selected = self.state.selected();
        let &[a, b, c] = selected.as_slice() else {
            return None;
        };

        let state = &self.state;
        let mark = match (state.card(a), state.card(b), state.card(c)) {
            (Some(x), Some(y), Some(z)) => evaluate([x, y, z]),
            _ => return None,
        };

        for id in [a, b, c] {
            if let Some(card) = self.state.card_mut(id) {
                card.mark = mark;
            }
        }

        Some(GameEvent::Evaluated { cards: [a, b, c], mark })
    }

    /// Drop a judged selection, discarding it if it was a match.
    ///
    /// Vacated slots are refilled only up to the configured hand size.
    fn clear_selection(&mut self, selected: SmallVec<[CardId; 3]>, events: &mut Vec<GameEvent>) {
        events.push(GameEvent::SelectionCleared(selected.clone()));

        if !self.state.matched().is_empty() {
            let (discarded, dealt) = self.state.discard_matched(Some(self.config.hand_size));
            events.push(GameEvent::SetDiscarded(discarded));
            if !dealt.is_empty() {
                events.push(GameEvent::Dealt(dealt));
            }
        }

        for id in selected {
            if let Some(card) = self.state.card_mut(id) {
                card.reset();
            }
        }
    }

    /// Record the action and notify subscribers once.
    fn commit(&mut self, action: Action, events: Vec<GameEvent>) {
        let sequence = self.public.next_sequence();
        let record = ActionRecord::new(action, self.public.game_number, sequence);
        self.public.record_action(record.clone());
        self.listeners.notify(&ChangeNotice::new(record, events));
    }

    // === Queries ===

    /// Check if there is nothing left to deal.
    pub fn is_deck_empty(&self) -> bool {
        self.state.zones.zone_size(Zone::Deck) == 0
    }

    /// Cards in play, in display order.
    pub fn hand(&self) -> Vec<Card> {
        self.state.snapshot(Zone::Hand)
    }

    /// Undealt cards, bottom first.
    pub fn deck(&self) -> Vec<Card> {
        self.state.snapshot(Zone::Deck)
    }

    /// Matched sets, oldest first.
    pub fn discard(&self) -> Vec<Card> {
        self.state.snapshot(Zone::Discard)
    }

    /// Snapshot of all three zones.
    pub fn view(&self) -> TableView {
        self.state.view()
    }

    /// Look up any card by id.
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.state.card(id)
    }

    /// The zone a card is in.
    pub fn zone_of(&self, id: CardId) -> Option<Zone> {
        self.state.zones.get_zone(id)
    }

    /// Currently selected cards, in hand order.
    pub fn selected(&self) -> SmallVec<[CardId; 3]> {
        self.state.selected()
    }

    /// Sets among hand cards that are not already matched.
    pub fn available_sets(&self) -> Vec<[CardId; 3]> {
        let open: Vec<Card> = self
            .hand()
            .into_iter()
            .filter(|c| !c.is_matched())
            .collect();
        find_sets(&open)
    }

    /// One Set on the table, if any.
    pub fn hint(&self) -> Option<[CardId; 3]> {
        self.available_sets().into_iter().next()
    }

    /// Check that the three zones still partition the deck.
    pub fn is_consistent(&self) -> bool {
        self.state.is_partitioned()
    }

    // === Session ===

    /// Every action applied this session, oldest first.
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.public.action_history
    }

    /// Current game number (starts at 1).
    pub fn game_number(&self) -> u32 {
        self.public.game_number
    }

    /// Capture the shuffle stream so later games can be reproduced.
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    // === Notification ===

    /// Register a callback fired once after every intent that changed the table.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&ChangeNotice) + Send + 'static,
    ) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    /// Remove a callback. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }
}

impl RulesEngine for SetGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_actions(&self) -> Vec<Action> {
        let mut actions: Vec<Action> = self
            .state
            .zones
            .cards_in_zone(Zone::Hand)
            .iter()
            .map(|&id| Action::Choose(id))
            .collect();

        if !self.is_deck_empty() || !self.state.matched().is_empty() {
            actions.push(Action::DealMore);
        }

        actions
    }

    fn apply_action(&mut self, action: &Action) {
        match *action {
            Action::Choose(id) => self.choose(id),
            Action::DealMore => self.deal_more(),
            Action::NewGame => self.new_game(),
        }
    }

    fn is_terminal(&self) -> Option<GameResult> {
        if !self.is_deck_empty() || !self.state.matched().is_empty() || self.hint().is_some() {
            return None;
        }

        Some(GameResult {
            sets_cleared: self.state.zones.zone_size(Zone::Discard) / 3,
            cards_left: self.state.zones.zone_size(Zone::Hand),
        })
    }
}
