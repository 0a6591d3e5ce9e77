//! Exit confirmation for the embedded game surface.
//!
//! A single back press reloads the game; a rapid second press arms a
//! confirmation window; pressing again while armed exits for real. The
//! machine is pure: transitions take the current wall-clock time and return
//! effects for the driver to execute, so everything is testable against a
//! fake clock. The driver owns the one deadline timer per session and must
//! cancel it on teardown.

/// Two presses closer together than this arm the confirmation prompt.
pub const DOUBLE_CLICK_THRESHOLD_MS: u64 = 300;

/// How long the armed confirmation stays live before lapsing back to idle.
pub const EXIT_WINDOW_MS: u64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitState {
    Idle,
    Armed { deadline: u64 },
}

/// Effects for the driver. Pure transitions never touch timers, the DOM or
/// the network themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitEffect {
    /// Reload the embedded game content.
    SoftReload,
    /// Surface the "press again to exit" prompt.
    ShowPrompt,
    /// Hide the confirmation prompt.
    HidePrompt,
    /// Start the deadline timer, replacing any timer still outstanding.
    ArmTimer { duration_ms: u64 },
    /// Cancel the outstanding deadline timer.
    CancelTimer,
    /// Invoke the external quit action and navigate home. The quit call is
    /// fire-and-forget: its failure never blocks leaving the game.
    HardExit,
}

/// Per-game-session exit state. Created when the game view mounts; the
/// driver drops it (and the timer) when the view unmounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitSession {
    state: ExitState,
    last_activation: Option<u64>,
}

impl ExitSession {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: ExitState::Idle,
            last_activation: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> ExitState {
        self.state
    }

    /// Handle a back-affordance activation at `now_ms`.
    pub fn press_back(&mut self, now_ms: u64) -> Vec<ExitEffect> {
        match self.state {
            ExitState::Armed { .. } => {
                self.state = ExitState::Idle;
                self.last_activation = Some(now_ms);
                vec![
                    ExitEffect::CancelTimer,
                    ExitEffect::HidePrompt,
                    ExitEffect::HardExit,
                ]
            }
            ExitState::Idle => {
                let rapid = self.last_activation.is_some_and(|previous| {
                    now_ms.saturating_sub(previous) < DOUBLE_CLICK_THRESHOLD_MS
                });
                self.last_activation = Some(now_ms);
                if rapid {
                    self.state = ExitState::Armed {
                        deadline: now_ms + EXIT_WINDOW_MS,
                    };
                    vec![
                        ExitEffect::ShowPrompt,
                        ExitEffect::ArmTimer {
                            duration_ms: EXIT_WINDOW_MS,
                        },
                    ]
                } else {
                    vec![ExitEffect::SoftReload]
                }
            }
        }
    }

    /// Handle the deadline timer firing. A stale fire while idle (the driver
    /// already cancelled or replaced the timer) is a no-op.
    pub fn window_elapsed(&mut self) -> Vec<ExitEffect> {
        match self.state {
            ExitState::Armed { .. } => {
                self.state = ExitState::Idle;
                vec![ExitEffect::HidePrompt]
            }
            ExitState::Idle => Vec::new(),
        }
    }
}

impl Default for ExitSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_press_is_always_a_soft_reload() {
        let mut session = ExitSession::new();
        assert_eq!(session.press_back(0), vec![ExitEffect::SoftReload]);
        assert_eq!(session.state(), ExitState::Idle);
    }

    #[test]
    fn rapid_second_press_arms_the_prompt() {
        let mut session = ExitSession::new();
        session.press_back(0);
        let effects = session.press_back(200);
        assert_eq!(
            effects,
            vec![
                ExitEffect::ShowPrompt,
                ExitEffect::ArmTimer {
                    duration_ms: EXIT_WINDOW_MS
                },
            ]
        );
        assert_eq!(session.state(), ExitState::Armed { deadline: 5_200 });
    }

    #[test]
    fn slow_second_press_stays_idle() {
        let mut session = ExitSession::new();
        session.press_back(0);
        assert_eq!(session.press_back(300), vec![ExitEffect::SoftReload]);
        assert_eq!(session.state(), ExitState::Idle);
    }

    #[test]
    fn press_while_armed_performs_hard_exit() {
        let mut session = ExitSession::new();
        session.press_back(0);
        session.press_back(200);
        let effects = session.press_back(1_000);
        assert_eq!(
            effects,
            vec![
                ExitEffect::CancelTimer,
                ExitEffect::HidePrompt,
                ExitEffect::HardExit,
            ]
        );
        assert_eq!(session.state(), ExitState::Idle);
    }

    #[test]
    fn window_elapsed_disarms_and_next_press_is_soft() {
        let mut session = ExitSession::new();
        session.press_back(0);
        session.press_back(200);
        assert_eq!(session.window_elapsed(), vec![ExitEffect::HidePrompt]);
        assert_eq!(session.state(), ExitState::Idle);
        // 5100 ms since the last press: fresh soft reload, not an exit.
        assert_eq!(session.press_back(5_300), vec![ExitEffect::SoftReload]);
    }

    #[test]
    fn stale_timer_fire_in_idle_is_a_no_op() {
        let mut session = ExitSession::new();
        assert!(session.window_elapsed().is_empty());
        session.press_back(0);
        assert!(session.window_elapsed().is_empty());
        assert_eq!(session.state(), ExitState::Idle);
    }

    #[test]
    fn clock_going_backwards_saturates_the_delta() {
        let mut session = ExitSession::new();
        session.press_back(1_000);
        // saturating delta of 0 is below the threshold, so this arms.
        let effects = session.press_back(500);
        assert_eq!(effects[0], ExitEffect::ShowPrompt);
    }
}
