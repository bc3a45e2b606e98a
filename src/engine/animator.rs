use super::{Position, PositionSink, SeatId};

/// One seat's movement within a shuffle session.
///
/// Live until the session ratio reaches 1.0; the final tick writes the
/// exact end position (no floating-point drift) and the job goes quiet.
#[derive(Debug, Clone)]
pub struct AnimationJob {
    pub seat: SeatId,
    pub start: Position,
    pub end: Position,
    finished: bool,
}

impl AnimationJob {
    pub fn new(seat: SeatId, start: Position, end: Position) -> Self {
        Self {
            seat,
            start,
            end,
            finished: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn tick(&mut self, ratio: f32, sink: &mut impl PositionSink) {
        if self.finished {
            return;
        }
        if ratio >= 1.0 {
            // Snap exactly to the target, then never write again.
            sink.write_position(&self.seat, self.end);
            self.finished = true;
        } else {
            sink.write_position(&self.seat, self.start.lerp(&self.end, ratio));
        }
    }
}

/// All jobs started together with one shared start time and duration.
///
/// Time is a millisecond counter supplied by the caller, never a wall
/// clock, so the session is fully deterministic under test.
#[derive(Debug)]
pub struct ShuffleSession {
    jobs: Vec<AnimationJob>,
    started_at: u64,
    duration_ms: u64,
}

impl ShuffleSession {
    pub fn new(
        moves: Vec<(SeatId, Position, Position)>,
        started_at: u64,
        duration_ms: u64,
    ) -> Self {
        Self {
            jobs: moves
                .into_iter()
                .map(|(seat, start, end)| AnimationJob::new(seat, start, end))
                .collect(),
            started_at,
            duration_ms,
        }
    }

    /// Normalized progress in [0, 1] at the given time.
    pub fn ratio(&self, now_ms: u64) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.started_at);
        (elapsed as f32 / self.duration_ms as f32).min(1.0)
    }

    /// Advance every unfinished job to the interpolated position for
    /// `now_ms`, writing through the sink.
    pub fn tick(&mut self, now_ms: u64, sink: &mut impl PositionSink) {
        let ratio = self.ratio(now_ms);
        for job in &mut self.jobs {
            job.tick(ratio, sink);
        }
    }

    /// True once every job has snapped to its end position.
    /// A session with zero jobs is complete from the start.
    pub fn is_complete(&self) -> bool {
        self.jobs.iter().all(AnimationJob::is_finished)
    }
}
