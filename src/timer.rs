use crate::alerts::{Alerts, DONE_NOTICE};
use crate::stage::{Stage, stage_for_duration, stage_for_elapsed};
use crate::ticker::{Ticker, TickerKind, TickerSpec};

pub(crate) const COUNTDOWN_INTERVAL_MS: u64 = 1000;
pub(crate) const CELEBRATION_MS: u64 = 1000;
/// Remaining seconds at or below which the readout pulses.
pub(crate) const PULSE_THRESHOLD_SECS: u32 = 60;
/// One grow or shrink leg of the last-minute pulse.
pub(crate) const PULSE_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    /// Not counting. Covers both "never started" and "paused".
    Idle,
    Running,
    /// Countdown hit zero. Only reset or a new selection leaves this.
    Completed,
}

/// What the egg image should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sprite {
    Frame(Stage, usize),
    Done,
}

/// Rendered countdown readout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Clock {
    pub(crate) minutes: String,
    pub(crate) seconds: String,
    pub(crate) pulsing: bool,
}

impl Clock {
    pub(crate) fn from_remaining(remaining: u32) -> Self {
        Self {
            minutes: format!("{:02}", remaining / 60),
            seconds: format!("{:02}", remaining % 60),
            pulsing: remaining <= PULSE_THRESHOLD_SECS,
        }
    }
}

impl std::fmt::Display for Clock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.minutes, self.seconds)
    }
}

/// Countdown and stage state machine.
///
/// Owns the tickers but never sleeps: the host turns [`EggTimer::armed`]
/// into real schedules and feeds firings back through [`EggTimer::tick`].
pub(crate) struct EggTimer {
    total_seconds: u32,
    remaining_seconds: u32,
    elapsed_seconds: u32,
    stage: Stage,
    frame_index: usize,
    phase: Phase,
    celebrating: bool,
    /// Readout is on the grown leg of the pulse.
    pulse_raised: bool,
    countdown: Ticker,
    animation: Ticker,
    celebration: Ticker,
    /// Runs whenever the readout is in its last minute, whatever the phase.
    pulse: Ticker,
}

impl EggTimer {
    pub(crate) fn new(total_seconds: u32) -> Self {
        let total_seconds = total_seconds.max(1);
        let mut timer = Self {
            total_seconds,
            remaining_seconds: total_seconds,
            elapsed_seconds: 0,
            stage: Stage::Gooey,
            frame_index: 0,
            phase: Phase::Idle,
            celebrating: false,
            pulse_raised: false,
            countdown: Ticker::new(TickerKind::Countdown),
            animation: Ticker::new(TickerKind::Animation),
            celebration: Ticker::new(TickerKind::Celebration),
            pulse: Ticker::new(TickerKind::Pulse),
        };
        timer.restart_animation();
        timer.sync_pulse();
        timer
    }

    pub(crate) fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub(crate) fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub(crate) fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub(crate) fn stage(&self) -> Stage {
        self.stage
    }

    #[cfg(test)]
    pub(crate) fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// The "cooking" glow is on exactly while counting.
    pub(crate) fn is_cooking(&self) -> bool {
        self.is_running()
    }

    pub(crate) fn is_celebrating(&self) -> bool {
        self.celebrating
    }

    pub(crate) fn pulse_raised(&self) -> bool {
        self.pulse_raised
    }

    pub(crate) fn can_start(&self) -> bool {
        self.phase == Phase::Idle && self.remaining_seconds > 0
    }

    pub(crate) fn can_pause(&self) -> bool {
        self.is_running()
    }

    pub(crate) fn clock(&self) -> Clock {
        Clock::from_remaining(self.remaining_seconds)
    }

    pub(crate) fn sprite(&self) -> Sprite {
        match self.phase {
            Phase::Completed => Sprite::Done,
            Phase::Idle | Phase::Running => Sprite::Frame(self.stage, self.frame_index),
        }
    }

    /// Specs of every ticker that should currently be firing.
    pub(crate) fn armed(&self) -> Vec<TickerSpec> {
        [&self.countdown, &self.animation, &self.celebration, &self.pulse]
            .into_iter()
            .filter_map(Ticker::spec)
            .collect()
    }

    pub(crate) fn select_duration(&mut self, seconds: u32) {
        let seconds = seconds.max(1);
        self.halt();
        self.end_celebration();
        self.total_seconds = seconds;
        self.remaining_seconds = seconds;
        self.elapsed_seconds = 0;
        self.phase = Phase::Idle;
        self.stage = stage_for_duration(seconds);
        self.frame_index = 0;
        self.restart_animation();
        self.sync_pulse();
        eprintln!(
            "[egg-timer] selected {seconds}s -> {} ({})",
            self.stage.label(),
            self.clock()
        );
    }

    /// Returns `false` when there is nothing to start.
    pub(crate) fn start(&mut self) -> bool {
        if !self.can_start() {
            return false;
        }
        self.phase = Phase::Running;
        self.countdown.arm(COUNTDOWN_INTERVAL_MS);
        // A pause stops the sprite too; bring it back where it left off.
        if !self.animation.is_armed() {
            self.animation.arm(self.stage.definition().frame_interval_ms);
        }
        eprintln!(
            "[egg-timer] Idle -> Running ({} of {}s left, frames every {}ms)",
            self.clock(),
            self.total_seconds,
            self.animation.interval_ms()
        );
        true
    }

    /// Returns `false` when not running.
    pub(crate) fn pause(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.halt();
        self.phase = Phase::Idle;
        eprintln!("[egg-timer] Running -> Idle ({} left)", self.clock());
        true
    }

    pub(crate) fn reset(&mut self) {
        let from = self.phase;
        self.halt();
        self.end_celebration();
        self.phase = Phase::Idle;
        self.elapsed_seconds = 0;
        self.remaining_seconds = self.total_seconds;
        self.stage = Stage::Gooey;
        self.frame_index = 0;
        self.restart_animation();
        self.sync_pulse();
        eprintln!("[egg-timer] {from:?} -> Idle (reset to {})", self.clock());
    }

    /// Feed one firing of the ticker identified by `kind` and `generation`.
    /// Firings from cancelled or re-armed tickers are dropped.
    pub(crate) fn tick(&mut self, kind: TickerKind, generation: u64, alerts: &mut impl Alerts) {
        match kind {
            TickerKind::Countdown if self.countdown.accepts(generation) => {
                self.countdown_tick(alerts)
            }
            TickerKind::Animation if self.animation.accepts(generation) => self.advance_frame(),
            TickerKind::Celebration if self.celebration.accepts(generation) => {
                self.end_celebration()
            }
            TickerKind::Pulse if self.pulse.accepts(generation) => {
                self.pulse_raised = !self.pulse_raised
            }
            _ => {}
        }
    }

    fn countdown_tick(&mut self, alerts: &mut impl Alerts) {
        if self.remaining_seconds == 0 {
            self.complete(alerts);
            return;
        }
        self.remaining_seconds -= 1;
        self.elapsed_seconds += 1;
        self.sync_pulse();

        let stage = stage_for_elapsed(self.elapsed_seconds);
        if stage != self.stage {
            self.stage = stage;
            self.frame_index = 0;
            self.restart_animation();
            eprintln!(
                "[egg-timer] stage -> {} at {}s, frames every {}ms",
                stage.label(),
                self.elapsed_seconds,
                self.animation.interval_ms()
            );
        }

        if self.remaining_seconds == 0 {
            self.complete(alerts);
        }
    }

    fn advance_frame(&mut self) {
        self.frame_index = (self.frame_index + 1) % self.stage.frame_count();
    }

    fn complete(&mut self, alerts: &mut impl Alerts) {
        self.halt();
        self.phase = Phase::Completed;
        self.celebrating = true;
        self.celebration.arm(CELEBRATION_MS);
        eprintln!(
            "[egg-timer] Running -> Completed after {}s ({})",
            self.elapsed_seconds,
            self.stage.label()
        );

        if let Err(e) = alerts.ring_bell() {
            eprintln!("[egg-timer] audio play failed: {e}");
        }
        if alerts.notifications_granted() {
            alerts.notify(&DONE_NOTICE);
        }
    }

    /// Pause semantics: stop counting and freeze the sprite.
    /// The pulse is left alone; it only follows the remaining time.
    fn halt(&mut self) {
        self.countdown.cancel();
        self.animation.cancel();
    }

    fn end_celebration(&mut self) {
        self.celebration.cancel();
        self.celebrating = false;
    }

    /// Arm the pulse on entering the last minute, drop it when leaving.
    /// An already running pulse keeps its schedule.
    fn sync_pulse(&mut self) {
        if self.remaining_seconds <= PULSE_THRESHOLD_SECS {
            if !self.pulse.is_armed() {
                self.pulse.arm(PULSE_INTERVAL_MS);
            }
        } else {
            self.pulse.cancel();
            self.pulse_raised = false;
        }
    }

    fn restart_animation(&mut self) {
        self.animation.arm(self.stage.definition().frame_interval_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::{Notice, SoundError};

    #[derive(Default)]
    struct RecordingAlerts {
        bells: usize,
        notices: Vec<Notice>,
        granted: bool,
        bell_fails: bool,
    }

    impl Alerts for RecordingAlerts {
        fn ring_bell(&mut self) -> Result<(), SoundError> {
            self.bells += 1;
            if self.bell_fails {
                Err(SoundError::Read {
                    path: "assets/bell.mp3".into(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                })
            } else {
                Ok(())
            }
        }

        fn notifications_granted(&self) -> bool {
            self.granted
        }

        fn notify(&mut self, notice: &Notice) {
            self.notices.push(*notice);
        }
    }

    fn spec_of(timer: &EggTimer, kind: TickerKind) -> Option<TickerSpec> {
        timer.armed().into_iter().find(|s| s.kind == kind)
    }

    /// Fire the currently armed countdown ticker once.
    fn second(timer: &mut EggTimer, alerts: &mut RecordingAlerts) {
        let spec = spec_of(timer, TickerKind::Countdown).expect("countdown armed");
        timer.tick(spec.kind, spec.generation, alerts);
    }

    fn frame(timer: &mut EggTimer, alerts: &mut RecordingAlerts) {
        let spec = spec_of(timer, TickerKind::Animation).expect("animation armed");
        timer.tick(spec.kind, spec.generation, alerts);
    }

    fn assert_consistent(timer: &EggTimer) {
        assert_eq!(
            timer.remaining_seconds() + timer.elapsed_seconds(),
            timer.total_seconds()
        );
        assert!(timer.frame_index() < timer.stage().frame_count());
    }

    #[test]
    fn starts_idle_with_gooey_animation() {
        let timer = EggTimer::new(5);
        assert_eq!(timer.phase(), Phase::Idle);
        assert_eq!(timer.stage(), Stage::Gooey);
        assert_eq!(timer.remaining_seconds(), 5);
        let anim = spec_of(&timer, TickerKind::Animation).unwrap();
        assert_eq!(anim.interval_ms, 500);
        assert!(spec_of(&timer, TickerKind::Countdown).is_none());
    }

    #[test]
    fn selection_resets_counters() {
        let mut alerts = RecordingAlerts::default();
        let mut timer = EggTimer::new(5);
        timer.start();
        second(&mut timer, &mut alerts);
        frame(&mut timer, &mut alerts);

        for d in [5, 10, 15, 20, 90] {
            timer.select_duration(d);
            assert_eq!(timer.total_seconds(), d);
            assert_eq!(timer.remaining_seconds(), d);
            assert_eq!(timer.elapsed_seconds(), 0);
            assert_eq!(timer.frame_index(), 0);
            assert_eq!(timer.phase(), Phase::Idle);
            assert_consistent(&timer);
        }
    }

    #[test]
    fn selection_uses_duration_bands() {
        let mut timer = EggTimer::new(5);
        timer.select_duration(5);
        assert_eq!(timer.stage(), Stage::Gooey);
        timer.select_duration(10);
        assert_eq!(timer.stage(), Stage::Soft);
        timer.select_duration(15);
        assert_eq!(timer.stage(), Stage::Hard);
        timer.select_duration(20);
        assert_eq!(timer.stage(), Stage::Stupid);
    }

    #[test]
    fn selection_stops_running_countdown() {
        let mut alerts = RecordingAlerts::default();
        let mut timer = EggTimer::new(20);
        timer.start();
        let stale = spec_of(&timer, TickerKind::Countdown).unwrap();
        timer.select_duration(10);
        assert!(!timer.is_running());
        assert!(spec_of(&timer, TickerKind::Countdown).is_none());

        timer.tick(stale.kind, stale.generation, &mut alerts);
        assert_eq!(timer.remaining_seconds(), 10);
    }

    #[test]
    fn zero_selection_is_clamped() {
        let mut timer = EggTimer::new(5);
        timer.select_duration(0);
        assert_eq!(timer.total_seconds(), 1);
        assert!(timer.can_start());
    }

    #[test]
    fn each_second_moves_one_unit() {
        let mut alerts = RecordingAlerts::default();
        let mut timer = EggTimer::new(20);
        assert!(timer.start());
        for i in 1..20 {
            second(&mut timer, &mut alerts);
            assert_eq!(timer.elapsed_seconds(), i);
            assert_eq!(timer.remaining_seconds(), 20 - i);
            assert_eq!(timer.stage(), stage_for_elapsed(i));
            assert_eq!(timer.phase(), Phase::Running);
            assert_consistent(&timer);
        }
    }

    #[test]
    fn five_second_egg_completes() {
        let mut alerts = RecordingAlerts::default();
        let mut timer = EggTimer::new(20);
        timer.select_duration(5);
        assert_eq!(timer.stage(), Stage::Gooey);
        assert!(timer.start());
        assert!(timer.is_cooking());
        for _ in 0..5 {
            second(&mut timer, &mut alerts);
        }
        assert_eq!(timer.phase(), Phase::Completed);
        assert_eq!(timer.remaining_seconds(), 0);
        assert_eq!(timer.elapsed_seconds(), 5);
        assert_eq!(timer.clock().to_string(), "00:00");
        assert_eq!(timer.sprite(), Sprite::Done);
        assert!(!timer.is_cooking());
        assert!(timer.is_celebrating());
        assert_eq!(alerts.bells, 1);
        assert!(spec_of(&timer, TickerKind::Countdown).is_none());
        assert!(spec_of(&timer, TickerKind::Animation).is_none());
    }

    #[test]
    fn completed_ignores_late_ticks_and_start() {
        let mut alerts = RecordingAlerts::default();
        let mut timer = EggTimer::new(2);
        timer.start();
        let spec = spec_of(&timer, TickerKind::Countdown).unwrap();
        timer.tick(spec.kind, spec.generation, &mut alerts);
        timer.tick(spec.kind, spec.generation, &mut alerts);
        assert_eq!(timer.phase(), Phase::Completed);

        for _ in 0..3 {
            timer.tick(spec.kind, spec.generation, &mut alerts);
        }
        assert_eq!(timer.remaining_seconds(), 0);
        assert_eq!(timer.elapsed_seconds(), 2);
        assert_eq!(alerts.bells, 1);

        assert!(!timer.can_start());
        assert!(!timer.start());
        assert_eq!(timer.phase(), Phase::Completed);
    }

    #[test]
    fn twenty_second_egg_after_ten_ticks() {
        let mut alerts = RecordingAlerts::default();
        let mut timer = EggTimer::new(5);
        timer.select_duration(20);
        assert_eq!(timer.stage(), Stage::Stupid);
        timer.start();
        for _ in 0..10 {
            second(&mut timer, &mut alerts);
        }
        assert_eq!(timer.elapsed_seconds(), 10);
        assert_eq!(timer.remaining_seconds(), 10);
        assert_eq!(timer.stage(), Stage::Hard);
    }

    #[test]
    fn stage_change_rearms_animation_and_resets_frame() {
        let mut alerts = RecordingAlerts::default();
        let mut timer = EggTimer::new(20);
        timer.start();
        for _ in 0..4 {
            second(&mut timer, &mut alerts);
        }
        frame(&mut timer, &mut alerts);
        assert_eq!(timer.frame_index(), 1);
        let before = spec_of(&timer, TickerKind::Animation).unwrap();

        second(&mut timer, &mut alerts);
        assert_eq!(timer.stage(), Stage::Soft);
        assert_eq!(timer.frame_index(), 0);
        let after = spec_of(&timer, TickerKind::Animation).unwrap();
        assert_ne!(before.generation, after.generation);
        assert_eq!(after.interval_ms, Stage::Soft.definition().frame_interval_ms);

        // The superseded schedule no longer moves frames.
        timer.tick(before.kind, before.generation, &mut alerts);
        assert_eq!(timer.frame_index(), 0);
    }

    #[test]
    fn plain_ticks_keep_frame_index() {
        let mut alerts = RecordingAlerts::default();
        let mut timer = EggTimer::new(20);
        timer.start();
        frame(&mut timer, &mut alerts);
        let anim = spec_of(&timer, TickerKind::Animation).unwrap();
        second(&mut timer, &mut alerts);
        second(&mut timer, &mut alerts);
        assert_eq!(timer.frame_index(), 1);
        assert_eq!(spec_of(&timer, TickerKind::Animation), Some(anim));
    }

    #[test]
    fn animation_wraps_and_never_touches_countdown() {
        let mut alerts = RecordingAlerts::default();
        let mut timer = EggTimer::new(5);
        for i in 1..=7 {
            frame(&mut timer, &mut alerts);
            assert_eq!(timer.frame_index(), i % 2);
        }
        assert_eq!(timer.remaining_seconds(), 5);
        assert_eq!(timer.elapsed_seconds(), 0);
        assert_eq!(timer.phase(), Phase::Idle);
    }

    #[test]
    fn pause_then_start_resumes_exactly() {
        let mut alerts = RecordingAlerts::default();
        let mut timer = EggTimer::new(20);
        timer.start();
        for _ in 0..7 {
            second(&mut timer, &mut alerts);
        }
        let old = spec_of(&timer, TickerKind::Countdown).unwrap();
        assert!(timer.pause());
        assert!(!timer.is_cooking());
        assert!(spec_of(&timer, TickerKind::Countdown).is_none());
        assert!(spec_of(&timer, TickerKind::Animation).is_none());

        // A firing that raced the pause is dropped.
        timer.tick(old.kind, old.generation, &mut alerts);
        assert_eq!(timer.remaining_seconds(), 13);

        assert!(timer.start());
        assert_eq!(timer.remaining_seconds(), 13);
        assert_eq!(timer.elapsed_seconds(), 7);
        assert!(spec_of(&timer, TickerKind::Animation).is_some());
        second(&mut timer, &mut alerts);
        assert_eq!(timer.remaining_seconds(), 12);
        assert_eq!(timer.elapsed_seconds(), 8);
    }

    #[test]
    fn pause_and_start_are_guarded() {
        let mut timer = EggTimer::new(5);
        assert!(!timer.pause());
        assert!(timer.start());
        assert!(!timer.start());
        assert!(!timer.can_start());
        assert!(timer.can_pause());
    }

    #[test]
    fn reset_rewinds_from_any_phase() {
        let mut alerts = RecordingAlerts::default();

        let mut idle = EggTimer::new(20);
        idle.reset();

        let mut running = EggTimer::new(20);
        running.start();
        for _ in 0..12 {
            second(&mut running, &mut alerts);
        }
        running.reset();

        let mut done = EggTimer::new(3);
        done.start();
        for _ in 0..3 {
            second(&mut done, &mut alerts);
        }
        assert_eq!(done.phase(), Phase::Completed);
        done.reset();

        for timer in [&idle, &running, &done] {
            assert_eq!(timer.phase(), Phase::Idle);
            assert_eq!(timer.remaining_seconds(), timer.total_seconds());
            assert_eq!(timer.elapsed_seconds(), 0);
            assert_eq!(timer.stage(), Stage::Gooey);
            assert_eq!(timer.frame_index(), 0);
            assert!(spec_of(timer, TickerKind::Countdown).is_none());
            assert!(spec_of(timer, TickerKind::Animation).is_some());
            assert!(spec_of(timer, TickerKind::Celebration).is_none());
            assert!(!timer.is_celebrating());
        }
        assert!(done.can_start());
    }

    #[test]
    fn reset_during_celebration_drops_its_firing() {
        let mut alerts = RecordingAlerts::default();
        let mut timer = EggTimer::new(1);
        timer.start();
        second(&mut timer, &mut alerts);
        let late = spec_of(&timer, TickerKind::Celebration).unwrap();

        timer.reset();
        assert!(!timer.is_celebrating());
        let kinds: Vec<TickerKind> = timer.armed().iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![TickerKind::Animation, TickerKind::Pulse]);

        // Start again so a stray celebration firing would be visible.
        timer.start();
        timer.tick(late.kind, late.generation, &mut alerts);
        assert!(!timer.is_celebrating());
        assert_eq!(timer.phase(), Phase::Running);
    }

    #[test]
    fn selection_clears_celebration() {
        let mut alerts = RecordingAlerts::default();
        let mut timer = EggTimer::new(1);
        timer.start();
        second(&mut timer, &mut alerts);
        assert!(timer.is_celebrating());

        timer.select_duration(10);
        assert!(!timer.is_celebrating());
        assert!(spec_of(&timer, TickerKind::Celebration).is_none());
    }

    #[test]
    fn reset_after_selection_uses_gooey_not_duration_stage() {
        let mut timer = EggTimer::new(5);
        timer.select_duration(20);
        assert_eq!(timer.stage(), Stage::Stupid);
        timer.reset();
        assert_eq!(timer.stage(), Stage::Gooey);
        assert_eq!(timer.remaining_seconds(), 20);
    }

    #[test]
    fn bell_failure_does_not_stop_completion() {
        let mut alerts = RecordingAlerts {
            bell_fails: true,
            granted: true,
            ..Default::default()
        };
        let mut timer = EggTimer::new(1);
        timer.start();
        second(&mut timer, &mut alerts);
        assert_eq!(timer.phase(), Phase::Completed);
        assert_eq!(alerts.notices, vec![DONE_NOTICE]);
    }

    #[test]
    fn notification_needs_permission() {
        let mut alerts = RecordingAlerts::default();
        let mut timer = EggTimer::new(1);
        timer.start();
        second(&mut timer, &mut alerts);
        assert_eq!(timer.phase(), Phase::Completed);
        assert_eq!(alerts.bells, 1);
        assert!(alerts.notices.is_empty());
    }

    #[test]
    fn celebration_clears_after_one_firing() {
        let mut alerts = RecordingAlerts::default();
        let mut timer = EggTimer::new(1);
        timer.start();
        second(&mut timer, &mut alerts);
        let spec = spec_of(&timer, TickerKind::Celebration).unwrap();
        assert_eq!(spec.interval_ms, CELEBRATION_MS);

        timer.tick(spec.kind, spec.generation, &mut alerts);
        assert!(!timer.is_celebrating());
        assert!(spec_of(&timer, TickerKind::Celebration).is_none());
        assert!(spec_of(&timer, TickerKind::Countdown).is_none());
        assert!(spec_of(&timer, TickerKind::Animation).is_none());
        assert_eq!(timer.phase(), Phase::Completed);
        assert_eq!(timer.sprite(), Sprite::Done);
    }

    #[test]
    fn clock_formatting() {
        assert_eq!(Clock::from_remaining(65).to_string(), "01:05");
        assert_eq!(Clock::from_remaining(5).to_string(), "00:05");
        assert_eq!(Clock::from_remaining(600).to_string(), "10:00");
        assert_eq!(Clock::from_remaining(0).to_string(), "00:00");
    }

    fn beat(timer: &mut EggTimer, alerts: &mut RecordingAlerts) {
        let spec = spec_of(timer, TickerKind::Pulse).expect("pulse armed");
        assert_eq!(spec.interval_ms, PULSE_INTERVAL_MS);
        timer.tick(spec.kind, spec.generation, alerts);
    }

    #[test]
    fn pulse_waits_for_last_minute() {
        let mut alerts = RecordingAlerts::default();
        let mut timer = EggTimer::new(62);
        assert!(spec_of(&timer, TickerKind::Pulse).is_none());
        timer.start();
        second(&mut timer, &mut alerts);
        assert!(spec_of(&timer, TickerKind::Pulse).is_none());
        second(&mut timer, &mut alerts);
        assert_eq!(timer.remaining_seconds(), 60);
        beat(&mut timer, &mut alerts);
        assert!(timer.pulse_raised());

        // Countdown seconds do not restart an armed pulse.
        let spec = spec_of(&timer, TickerKind::Pulse).unwrap();
        second(&mut timer, &mut alerts);
        assert_eq!(spec_of(&timer, TickerKind::Pulse), Some(spec));

        timer.select_duration(90);
        assert!(spec_of(&timer, TickerKind::Pulse).is_none());
        assert!(!timer.pulse_raised());
    }

    #[test]
    fn pulse_keeps_beating_while_paused_and_done() {
        let mut alerts = RecordingAlerts::default();
        let mut timer = EggTimer::new(3);
        timer.start();
        second(&mut timer, &mut alerts);
        timer.pause();
        beat(&mut timer, &mut alerts);
        assert!(timer.pulse_raised());
        beat(&mut timer, &mut alerts);
        assert!(!timer.pulse_raised());

        timer.start();
        second(&mut timer, &mut alerts);
        second(&mut timer, &mut alerts);
        assert_eq!(timer.phase(), Phase::Completed);
        beat(&mut timer, &mut alerts);
        assert!(timer.pulse_raised());
    }

    #[test]
    fn pulse_only_in_last_minute() {
        assert!(Clock::from_remaining(60).pulsing);
        assert!(Clock::from_remaining(1).pulsing);
        assert!(!Clock::from_remaining(61).pulsing);
        assert!(!Clock::from_remaining(300).pulsing);
    }
}
