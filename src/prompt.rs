/// Blocking user prompts the board needs: yes/no confirmation before
/// destructive actions and notices for refused actions.
pub trait Prompt {
    /// Asks a yes/no question; `true` means go ahead
    fn confirm(&mut self, message: &str) -> bool;

    /// Shows a notice the user has to acknowledge
    fn notify(&mut self, message: &str);
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn confirm(&mut self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn notify(&mut self, message: &str) {
        (**self).notify(message)
    }
}

/// Answers every confirmation the same way and records what was shown.
/// Suitable for headless hosts.
#[derive(Debug, Clone, Default)]
pub struct RecordingPrompt {
    answer: bool,
    pub confirmations: Vec<String>,
    pub notices: Vec<String>,
}

impl RecordingPrompt {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            ..Self::default()
        }
    }

    /// A prompt that accepts every confirmation
    pub fn accepting() -> Self {
        Self::new(true)
    }

    /// A prompt that declines every confirmation
    pub fn declining() -> Self {
        Self::new(false)
    }

    pub fn set_answer(&mut self, answer: bool) {
        self.answer = answer;
    }
}

impl Prompt for RecordingPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        self.confirmations.push(message.to_string());
        self.answer
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}
