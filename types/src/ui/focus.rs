/// Keyboard focus on the game screen, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Field,
    GuessButton,
    NewGameButton,
}

impl Focus {
    const ORDER: [Self; 3] = [Self::Field, Self::GuessButton, Self::NewGameButton];

    fn index(self) -> usize {
        match self {
            Self::Field => 0,
            Self::GuessButton => 1,
            Self::NewGameButton => 2,
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}
