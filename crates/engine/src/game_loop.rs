//! Fixed-clock game loop.
//!
//! The host calls [`GameLoop::frame`] once per display refresh with a
//! monotonic timestamp. Each frame feeds the elapsed time into the drop
//! timer (dropping at most once), publishes the score if a piece landed since
//! the previous frame, and repaints. The loop has no end state: a blocked
//! spawn resets the game inside the engine and play continues.

use crate::game_state::GameState;
use crate::render::{draw, RenderSurface, ScoreSink};

/// Outcome of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// Milliseconds since the previous frame.
    pub elapsed_ms: u32,
    /// Gravity moved or landed the active piece this frame.
    pub dropped: bool,
    /// The score display was refreshed this frame.
    pub score_published: bool,
}

#[derive(Debug, Clone, Default)]
pub struct GameLoop {
    last_time_ms: Option<u64>,
}

impl GameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one frame at time `now_ms`.
    ///
    /// The first frame only establishes the time base. A clock that runs
    /// backwards counts as zero elapsed time.
    pub fn frame<S, K>(
        &mut self,
        state: &mut GameState,
        now_ms: u64,
        surface: &mut S,
        scores: &mut K,
    ) -> FrameReport
    where
        S: RenderSurface + ?Sized,
        K: ScoreSink + ?Sized,
    {
        let elapsed = match self.last_time_ms {
            Some(last) => now_ms.saturating_sub(last),
            None => 0,
        };
        self.last_time_ms = Some(now_ms);
        let elapsed_ms = u32::try_from(elapsed).unwrap_or(u32::MAX);

        let dropped = state.tick(elapsed_ms);

        let score_published = state.take_last_event().is_some();
        if score_published {
            scores.update_score(state.score());
        }

        draw(state, surface);

        FrameReport {
            elapsed_ms,
            dropped,
            score_published,
        }
    }
}
