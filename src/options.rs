//! Table configuration options.

/// Configuration options for a simulated blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsim::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(2)
///     .with_min_bet(5.0)
///     .with_stand_on_soft_17(true);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Table minimum bet; progression units are multiples of this.
    pub min_bet: f64,
    /// Table maximum bet.
    pub max_bet: f64,
    /// Maximum number of hands a position may hold after splitting.
    pub max_hands: usize,
    /// Whether the dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Blackjack payout ratio (typically 1.5).
    pub blackjack_pays: f64,
    /// Amount added to a position's bankroll when it falls below the minimum;
    /// at least `min_bet`.
    pub rebuy: f64,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            min_bet: 10.0,
            max_bet: 1000.0,
            max_hands: 4,
            stand_on_soft_17: false,
            blackjack_pays: 1.5,
            rebuy: 100.0,
        }
    }
}

impl TableOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(8);
    /// assert_eq!(options.decks, 8);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the table minimum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::TableOptions;
    ///
    /// let options = TableOptions::default().with_min_bet(25.0);
    /// assert_eq!(options.min_bet, 25.0);
    /// ```
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: f64) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the table maximum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::TableOptions;
    ///
    /// let options = TableOptions::default().with_max_bet(500.0);
    /// assert_eq!(options.max_bet, 500.0);
    /// ```
    #[must_use]
    pub const fn with_max_bet(mut self, max_bet: f64) -> Self {
        self.max_bet = max_bet;
        self
    }

    /// Sets the maximum number of hands per position.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::TableOptions;
    ///
    /// let options = TableOptions::default().with_max_hands(2);
    /// assert_eq!(options.max_hands, 2);
    /// ```
    #[must_use]
    pub const fn with_max_hands(mut self, max_hands: usize) -> Self {
        self.max_hands = max_hands;
        self
    }

    /// Sets whether the dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::TableOptions;
    ///
    /// let options = TableOptions::default().with_stand_on_soft_17(true);
    /// assert!(options.stand_on_soft_17);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::TableOptions;
    ///
    /// let options = TableOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the automatic rebuy amount.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::TableOptions;
    ///
    /// let options = TableOptions::default().with_rebuy(250.0);
    /// assert_eq!(options.rebuy, 250.0);
    /// ```
    #[must_use]
    pub const fn with_rebuy(mut self, rebuy: f64) -> Self {
        self.rebuy = rebuy;
        self
    }

    /// Returns whether the options describe a playable table.
    ///
    /// The rebuy must cover at least one minimum bet, so a seat that runs dry
    /// is always topped back up to a playable bankroll.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.decks > 0
            && self.min_bet >= 1.0
            && self.max_bet >= self.min_bet
            && self.max_hands >= 1
            && self.blackjack_pays >= 0.0
            && self.rebuy >= self.min_bet
    }
}
