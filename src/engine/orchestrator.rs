use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use super::animator::ShuffleSession;
use super::countdown::Countdown;
use super::permutation::shuffle_positions;
use super::{PositionSink, SeatStore};

/// Where the orchestrator is in one shuffle cycle.
///
/// The trigger is enabled only in `Idle`; every other phase rejects a
/// new start, so re-entrancy is blocked inside the engine rather than
/// by the state of a UI control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    CountingDown,
    Animating,
    ShowingCompletion,
}

#[derive(Debug, Error)]
pub enum ShuffleError {
    #[error("a shuffle is already in progress")]
    Busy,
}

/// Timing tunables for one shuffle cycle. The defaults are the
/// reference behavior: 3..2..1 at one-second steps, a 600 ms slide,
/// and a banner held for 1500 ms.
#[derive(Debug, Clone, Copy)]
pub struct Timings {
    pub countdown_from: u32,
    pub countdown_interval_ms: u64,
    pub shuffle_duration_ms: u64,
    pub banner_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            countdown_from: 3,
            countdown_interval_ms: 1000,
            shuffle_duration_ms: 600,
            banner_ms: 1500,
        }
    }
}

/// Drives one full shuffle cycle against a seat store:
/// countdown, permutation, synchronized slide, completion banner.
///
/// All timing comes from the `now_ms` the caller passes in, so the whole
/// cycle can be driven by a virtual clock in tests.
pub struct ShuffleOrchestrator {
    timings: Timings,
    rng: StdRng,
    phase: Phase,
    countdown: Option<Countdown>,
    session: Option<ShuffleSession>,
    banner_until: Option<u64>,
}

impl ShuffleOrchestrator {
    pub fn new(timings: Timings, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            timings,
            rng,
            phase: Phase::Idle,
            countdown: None,
            session: None,
            banner_until: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a new shuffle may be started. The UI derives its
    /// button-enabled state from this.
    pub fn trigger_enabled(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn banner_visible(&self) -> bool {
        self.phase == Phase::ShowingCompletion
    }

    /// Current countdown display value, while counting down.
    pub fn countdown_value(&self) -> Option<u32> {
        match self.phase {
            Phase::CountingDown => self.countdown.as_ref().map(Countdown::value),
            _ => None,
        }
    }

    /// Begin a shuffle cycle. Rejected while a cycle is in flight.
    pub fn start(&mut self, now_ms: u64) -> Result<(), ShuffleError> {
        if self.phase != Phase::Idle {
            return Err(ShuffleError::Busy);
        }
        self.countdown = Some(Countdown::new(
            self.timings.countdown_from,
            now_ms,
            self.timings.countdown_interval_ms,
        ));
        self.phase = Phase::CountingDown;
        Ok(())
    }

    /// Advance the cycle to `now_ms`. Safe to call every frame in any
    /// phase; does nothing while idle.
    pub fn tick<S>(&mut self, now_ms: u64, store: &mut S)
    where
        S: SeatStore + PositionSink,
    {
        match self.phase {
            Phase::Idle => {}

            Phase::CountingDown => {
                let done = self
                    .countdown
                    .as_mut()
                    .map(|c| c.tick(now_ms))
                    .unwrap_or(false);
                if done {
                    self.countdown = None;
                    self.begin_animation(now_ms, store);
                }
            }

            Phase::Animating => {
                if let Some(session) = self.session.as_mut() {
                    session.tick(now_ms, store);
                    if session.is_complete() {
                        self.session = None;
                        self.show_banner(now_ms);
                    }
                } else {
                    self.show_banner(now_ms);
                }
            }

            Phase::ShowingCompletion => {
                if self.banner_until.is_some_and(|until| now_ms >= until) {
                    self.banner_until = None;
                    self.phase = Phase::Idle;
                }
            }
        }
    }

    /// Pair each seat's live position with a shuffled default position
    /// and start the synchronized slide.
    fn begin_animation<S>(&mut self, now_ms: u64, store: &mut S)
    where
        S: SeatStore + PositionSink,
    {
        let seats = store.snapshot();
        if seats.is_empty() {
            // Nothing to move: the banner still shows on schedule.
            self.show_banner(now_ms);
            return;
        }

        let defaults: Vec<_> = seats.iter().map(|s| s.default).collect();
        let targets = shuffle_positions(&mut self.rng, &defaults);

        let moves = seats
            .into_iter()
            .zip(targets)
            .map(|(seat, target)| (seat.id, seat.current, target))
            .collect();

        let mut session =
            ShuffleSession::new(moves, now_ms, self.timings.shuffle_duration_ms);
        session.tick(now_ms, store);
        self.session = Some(session);
        self.phase = Phase::Animating;
    }

    fn show_banner(&mut self, now_ms: u64) {
        self.banner_until = Some(now_ms + self.timings.banner_ms);
        self.phase = Phase::ShowingCompletion;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Position, SeatId, SeatSnapshot};

    /// In-memory store standing in for the seat registry.
    struct TestStore {
        seats: Vec<SeatSnapshot>,
    }

    impl TestStore {
        fn row(count: usize) -> Self {
            let seats = (0..count)
                .map(|i| {
                    let pos = Position::new(20.0 + i as f32 * 110.0, 20.0);
                    SeatSnapshot {
                        id: format!("seat-{}", i + 1),
                        current: pos,
                        default: pos,
                    }
                })
                .collect();
            Self { seats }
        }

        fn positions(&self) -> Vec<Position> {
            self.seats.iter().map(|s| s.current).collect()
        }
    }

    impl SeatStore for TestStore {
        fn snapshot(&self) -> Vec<SeatSnapshot> {
            self.seats.clone()
        }
    }

    impl PositionSink for TestStore {
        fn write_position(&mut self, id: &SeatId, pos: Position) {
            if let Some(seat) = self.seats.iter_mut().find(|s| &s.id == id) {
                seat.current = pos;
            }
        }
    }

    fn sorted(mut positions: Vec<Position>) -> Vec<Position> {
        positions.sort_by(|a, b| a.left.total_cmp(&b.left).then(a.top.total_cmp(&b.top)));
        positions
    }

    fn timings() -> Timings {
        Timings::default()
    }

    #[test]
    fn test_full_cycle_walks_all_phases() {
        let mut orch = ShuffleOrchestrator::new(timings(), Some(1));
        let mut store = TestStore::row(6);

        assert_eq!(orch.phase(), Phase::Idle);
        assert!(orch.trigger_enabled());

        orch.start(0).unwrap();
        assert_eq!(orch.phase(), Phase::CountingDown);
        assert_eq!(orch.countdown_value(), Some(3));
        assert!(!orch.trigger_enabled());

        orch.tick(1000, &mut store);
        assert_eq!(orch.countdown_value(), Some(2));
        orch.tick(2000, &mut store);
        orch.tick(3000, &mut store);
        assert_eq!(orch.phase(), Phase::Animating);

        // Animation runs for 600ms from the countdown's end.
        orch.tick(3300, &mut store);
        assert_eq!(orch.phase(), Phase::Animating);
        orch.tick(3600, &mut store);
        assert_eq!(orch.phase(), Phase::ShowingCompletion);
        assert!(orch.banner_visible());

        orch.tick(3600 + 1499, &mut store);
        assert!(orch.banner_visible());
        orch.tick(3600 + 1500, &mut store);
        assert_eq!(orch.phase(), Phase::Idle);
        assert!(orch.trigger_enabled());
    }

    #[test]
    fn test_final_positions_are_a_permutation_of_defaults() {
        let mut orch = ShuffleOrchestrator::new(timings(), Some(9));
        let mut store = TestStore::row(6);
        let before = store.positions();

        orch.start(0).unwrap();
        for t in (0..6000).step_by(100) {
            orch.tick(t, &mut store);
        }

        assert_eq!(orch.phase(), Phase::Idle);
        assert_eq!(sorted(store.positions()), sorted(before));
    }

    #[test]
    fn test_no_two_seats_share_a_start_position() {
        // With distinct defaults, the animation start positions (the live
        // positions at shuffle time) are all distinct too.
        let store = TestStore::row(6);
        let starts = store.positions();
        for (i, a) in starts.iter().enumerate() {
            for b in &starts[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_start_while_busy_is_rejected() {
        let mut orch = ShuffleOrchestrator::new(timings(), Some(2));
        let mut store = TestStore::row(3);

        orch.start(0).unwrap();
        assert!(matches!(orch.start(100), Err(ShuffleError::Busy)));

        // Still busy mid-animation and while the banner is up.
        orch.tick(3000, &mut store);
        assert_eq!(orch.phase(), Phase::Animating);
        assert!(matches!(orch.start(3100), Err(ShuffleError::Busy)));

        orch.tick(3600, &mut store);
        assert!(orch.banner_visible());
        assert!(matches!(orch.start(3700), Err(ShuffleError::Busy)));

        orch.tick(5100, &mut store);
        assert!(orch.start(5200).is_ok());
    }

    #[test]
    fn test_zero_seats_completes_immediately_with_banner() {
        let mut orch = ShuffleOrchestrator::new(timings(), Some(4));
        let mut store = TestStore { seats: Vec::new() };

        orch.start(0).unwrap();
        orch.tick(3000, &mut store);
        // Countdown done, nothing to animate: straight to the banner.
        assert!(orch.banner_visible());

        orch.tick(4499, &mut store);
        assert!(orch.banner_visible());
        orch.tick(4500, &mut store);
        assert_eq!(orch.phase(), Phase::Idle);
    }

    #[test]
    fn test_animation_starts_from_live_positions() {
        let mut orch = ShuffleOrchestrator::new(timings(), Some(5));
        let mut store = TestStore::row(2);

        // Seat 1 was dragged away from its default before the shuffle.
        store.seats[0].current = Position::new(300.0, 200.0);
        let dragged = store.seats[0].current;

        orch.start(0).unwrap();
        orch.tick(3000, &mut store);
        // The first animation tick at ratio 0 writes the live position back.
        assert_eq!(store.seats[0].current, dragged);

        // Targets still come from the default multiset.
        for t in (3000..4000).step_by(50) {
            orch.tick(t, &mut store);
        }
        let defaults = vec![Position::new(20.0, 20.0), Position::new(130.0, 20.0)];
        assert_eq!(sorted(store.positions()), sorted(defaults));
    }

    #[test]
    fn test_seeded_orchestrators_agree() {
        let run = |seed| {
            let mut orch = ShuffleOrchestrator::new(timings(), Some(seed));
            let mut store = TestStore::row(5);
            orch.start(0).unwrap();
            for t in (0..6000).step_by(100) {
                orch.tick(t, &mut store);
            }
            store.positions()
        };
        assert_eq!(run(11), run(11));
    }
}
