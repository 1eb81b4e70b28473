pub const MENU_PROMPT: &str = "What do you want to do? (1: Deposit, 2: Redeem, 3: AAA balance, \
                               4: Time until unlock, 5: Transfer AAA): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Deposit,
    Redeem,
    Balance,
    UnlockTimer,
    Transfer,
}

impl Action {
    /// Maps a menu answer to its action. Surrounding whitespace is ignored
    /// (`" 1 "` is a deposit); anything else but "1".."5" is `None`.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Deposit),
            "2" => Some(Self::Redeem),
            "3" => Some(Self::Balance),
            "4" => Some(Self::UnlockTimer),
            "5" => Some(Self::Transfer),
            _ => None,
        }
    }

    /// Subject of the failure line, e.g. "Deposit failed: ...".
    pub fn label(&self) -> &'static str {
        match self {
            Self::Deposit => "Deposit",
            Self::Redeem => "Redeem",
            Self::Balance => "Balance query",
            Self::UnlockTimer => "Unlock timer query",
            Self::Transfer => "Transfer",
        }
    }
}
