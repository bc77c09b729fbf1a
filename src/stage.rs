/// Doneness levels, in cooking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Stage {
    Gooey,
    Soft,
    Hard,
    Stupid,
}

/// Frame sequence and per-frame interval for one stage.
#[derive(Debug)]
pub(crate) struct StageDefinition {
    pub(crate) frames: &'static [&'static str],
    pub(crate) frame_interval_ms: u64,
}

static GOOEY: StageDefinition = StageDefinition {
    frames: &["Egg0.png", "Egg1.png"],
    frame_interval_ms: 500,
};

static SOFT: StageDefinition = StageDefinition {
    frames: &["Egg2.png", "Egg3.png"],
    frame_interval_ms: 500,
};

static HARD: StageDefinition = StageDefinition {
    frames: &["Egg4.png", "Egg5.png"],
    frame_interval_ms: 500,
};

static STUPID: StageDefinition = StageDefinition {
    frames: &["Egg6.png", "Egg6.png"],
    frame_interval_ms: 500,
};

/// Shown once the countdown reaches zero.
pub(crate) const DONE_FRAME: &str = "EggDone.png";

impl Stage {
    pub(crate) const ALL: [Stage; 4] = [Stage::Gooey, Stage::Soft, Stage::Hard, Stage::Stupid];

    pub(crate) fn definition(self) -> &'static StageDefinition {
        match self {
            Stage::Gooey => &GOOEY,
            Stage::Soft => &SOFT,
            Stage::Hard => &HARD,
            Stage::Stupid => &STUPID,
        }
    }

    pub(crate) fn frame_count(self) -> usize {
        self.definition().frames.len()
    }

    pub(crate) fn frame(self, index: usize) -> &'static str {
        let frames = self.definition().frames;
        frames[index % frames.len()]
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Stage::Gooey => "Gooey",
            Stage::Soft => "Soft",
            Stage::Hard => "Hard",
            Stage::Stupid => "Stupid",
        }
    }
}

/// One egg-type selection control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EggOption {
    pub(crate) stage: Stage,
    pub(crate) seconds: u32,
}

pub(crate) const EGG_OPTIONS: [EggOption; 4] = [
    EggOption { stage: Stage::Gooey, seconds: 5 },
    EggOption { stage: Stage::Soft, seconds: 10 },
    EggOption { stage: Stage::Hard, seconds: 15 },
    EggOption { stage: Stage::Stupid, seconds: 20 },
];

/// Selected on startup.
pub(crate) const DEFAULT_OPTION: usize = 0;

/// Stage reached after `elapsed` whole seconds of cooking.
/// Upper bounds are exclusive: at exactly 5 s the egg is already Soft.
pub(crate) fn stage_for_elapsed(elapsed: u32) -> Stage {
    if elapsed < 5 {
        Stage::Gooey
    } else if elapsed < 10 {
        Stage::Soft
    } else if elapsed < 15 {
        Stage::Hard
    } else {
        Stage::Stupid
    }
}

/// Stage announced when a total duration is picked.
/// Upper bounds are inclusive, so picking 5 s shows Gooey even though
/// `stage_for_elapsed(5)` is Soft. The one-second mismatch is kept as-is.
pub(crate) fn stage_for_duration(total: u32) -> Stage {
    if total <= 5 {
        Stage::Gooey
    } else if total <= 10 {
        Stage::Soft
    } else if total <= 15 {
        Stage::Hard
    } else {
        Stage::Stupid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_bands() {
        for s in 0..=4 {
            assert_eq!(stage_for_elapsed(s), Stage::Gooey, "elapsed {s}");
        }
        for s in 5..=9 {
            assert_eq!(stage_for_elapsed(s), Stage::Soft, "elapsed {s}");
        }
        for s in 10..=14 {
            assert_eq!(stage_for_elapsed(s), Stage::Hard, "elapsed {s}");
        }
        for s in [15, 16, 60, 3600, u32::MAX] {
            assert_eq!(stage_for_elapsed(s), Stage::Stupid, "elapsed {s}");
        }
    }

    #[test]
    fn elapsed_is_monotone() {
        let order = |s: Stage| Stage::ALL.iter().position(|&x| x == s).unwrap();
        let mut prev = order(stage_for_elapsed(0));
        for s in 1..100 {
            let cur = order(stage_for_elapsed(s));
            assert!(cur >= prev, "stage went backwards at {s}");
            prev = cur;
        }
    }

    #[test]
    fn duration_bounds_are_inclusive() {
        assert_eq!(stage_for_duration(1), Stage::Gooey);
        assert_eq!(stage_for_duration(5), Stage::Gooey);
        assert_eq!(stage_for_duration(6), Stage::Soft);
        assert_eq!(stage_for_duration(10), Stage::Soft);
        assert_eq!(stage_for_duration(11), Stage::Hard);
        assert_eq!(stage_for_duration(15), Stage::Hard);
        assert_eq!(stage_for_duration(16), Stage::Stupid);
        assert_eq!(stage_for_duration(20), Stage::Stupid);
    }

    #[test]
    fn boundary_mismatch_between_variants() {
        for b in [5, 10, 15] {
            assert_ne!(stage_for_duration(b), stage_for_elapsed(b), "boundary {b}");
        }
    }

    #[test]
    fn every_stage_has_frames_and_interval() {
        for stage in Stage::ALL {
            let def = stage.definition();
            assert!(!def.frames.is_empty(), "{stage:?}");
            assert!(def.frame_interval_ms > 0, "{stage:?}");
        }
    }

    #[test]
    fn options_announce_their_own_stage() {
        for option in EGG_OPTIONS {
            assert_eq!(stage_for_duration(option.seconds), option.stage, "{option:?}");
        }
        assert_eq!(EGG_OPTIONS[DEFAULT_OPTION].seconds, 5);
    }

    #[test]
    fn frame_lookup_wraps() {
        assert_eq!(Stage::Gooey.frame(0), "Egg0.png");
        assert_eq!(Stage::Gooey.frame(1), "Egg1.png");
        assert_eq!(Stage::Gooey.frame(2), "Egg0.png");
        assert_eq!(Stage::Stupid.frame(1), "Egg6.png");
    }
}
