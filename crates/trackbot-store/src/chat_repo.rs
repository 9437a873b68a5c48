use trackbot_core::message::ChatTurn;

/// Append-only conversation log for one session.
#[derive(Debug, Clone, Default)]
pub struct ChatRepo {
    turns: Vec<ChatTurn>,
}

impl ChatRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
    }

    pub fn append_user(&mut self, text: impl Into<String>) {
        self.append(ChatTurn::new_user(text.into()));
    }

    pub fn append_bot(&mut self, text: impl Into<String>) {
        self.append(ChatTurn::new_bot(text.into()));
    }

    pub fn list(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&ChatTurn> {
        self.turns.last()
    }

    /// Empties the log and returns how many turns were dropped.
    pub fn clear(&mut self) -> usize {
        let removed = self.turns.len();
        self.turns.clear();
        removed
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
