use dioxus::prelude::*;

pub const TYPE_DELAY_MS: u32 = 100;
pub const DELETE_DELAY_MS: u32 = 50;
pub const END_PAUSE_MS: u32 = 2000;
pub const NEXT_PAUSE_MS: u32 = 500;

pub const DEFAULT_ROLES: &[&str] = &[
    "Python Developer",
    "Full-Stack Developer",
    "AI Enthusiast",
    "Open-Source Contributor",
    "Problem Solver",
];

pub fn default_roles() -> Vec<String> {
    DEFAULT_ROLES.iter().map(|role| role.to_string()).collect()
}

/// What the delay after a frame is spent on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    PauseAtEnd,
    Deleting,
    PauseBeforeNext,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub delay_ms: u32,
    pub phase: TypingPhase,
}

/// Cursor over the role list. Indices count chars, not bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypingState {
    role_index: usize,
    char_index: usize,
    deleting: bool,
}

impl TypingState {
    pub fn role_index(&self) -> usize {
        self.role_index
    }

    /// Advances one character and returns the text to show plus how long to
    /// wait before the next step.
    pub fn step<S: AsRef<str>>(&mut self, roles: &[S]) -> TypingFrame {
        if roles.is_empty() {
            return TypingFrame {
                text: String::new(),
                delay_ms: END_PAUSE_MS,
                phase: TypingPhase::PauseAtEnd,
            };
        }
        self.role_index %= roles.len();
        let role = roles[self.role_index].as_ref();
        let len = role.chars().count();

        if self.deleting {
            self.char_index = self.char_index.min(len).saturating_sub(1);
        } else {
            self.char_index = (self.char_index + 1).min(len);
        }
        let text = role.chars().take(self.char_index).collect();

        let (delay_ms, phase) = if !self.deleting && self.char_index == len {
            self.deleting = true;
            (END_PAUSE_MS, TypingPhase::PauseAtEnd)
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.role_index = (self.role_index + 1) % roles.len();
            (NEXT_PAUSE_MS, TypingPhase::PauseBeforeNext)
        } else if self.deleting {
            (DELETE_DELAY_MS, TypingPhase::Deleting)
        } else {
            (TYPE_DELAY_MS, TypingPhase::Typing)
        };

        TypingFrame {
            text,
            delay_ms,
            phase,
        }
    }
}

#[component]
pub fn TypingText(roles: Vec<String>) -> Element {
    #[cfg(target_arch = "wasm32")]
    let text = use_signal(String::new);
    #[cfg(not(target_arch = "wasm32"))]
    let text = use_signal(|| roles.first().cloned().unwrap_or_default());

    #[cfg(target_arch = "wasm32")]
    use_future(move || {
        let roles = roles.clone();
        let mut text = text;
        async move {
            tracing::debug!("typing: start loop over {} roles", roles.len());
            let mut state = TypingState::default();
            loop {
                let frame = state.step(roles.as_slice());
                if matches!(frame.phase, TypingPhase::PauseBeforeNext) {
                    tracing::trace!("typing: moving to role {}", state.role_index());
                }
                text.set(frame.text);
                crate::dom::sleep_ms(frame.delay_ms).await;
            }
        }
    });

    rsx! {
        span { id: "typing-text", class: "typing-text", "{text}" }
        span { class: "typing-cursor", aria_hidden: "true", "|" }
    }
}
