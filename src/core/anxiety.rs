// Proximity thresholds in CSS pixels, evaluated from the calmest level down.
pub const CALM_ABOVE: f32 = 200.0;
pub const SLIGHTLY_NERVOUS_ABOVE: f32 = 150.0;
pub const NERVOUS_ABOVE: f32 = 100.0;
pub const VERY_NERVOUS_ABOVE: f32 = 60.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AnxietyLevel {
    #[default]
    Calm,
    SlightlyNervous,
    Nervous,
    VeryNervous,
    Panicking,
}

impl AnxietyLevel {
    pub const ALL: [AnxietyLevel; 5] = [
        AnxietyLevel::Calm,
        AnxietyLevel::SlightlyNervous,
        AnxietyLevel::Nervous,
        AnxietyLevel::VeryNervous,
        AnxietyLevel::Panicking,
    ];

    /// Class applied to the evasive button while this level is active.
    pub fn css_class(self) -> &'static str {
        match self {
            AnxietyLevel::Calm => "calm",
            AnxietyLevel::SlightlyNervous => "slightly-nervous",
            AnxietyLevel::Nervous => "nervous",
            AnxietyLevel::VeryNervous => "very-nervous",
            AnxietyLevel::Panicking => "panicking",
        }
    }

    /// Class applied to `<body>` while this level is active.
    pub fn body_class(self) -> &'static str {
        match self {
            AnxietyLevel::Calm => "level-calm",
            AnxietyLevel::SlightlyNervous => "level-slightly-nervous",
            AnxietyLevel::Nervous => "level-nervous",
            AnxietyLevel::VeryNervous => "level-very-nervous",
            AnxietyLevel::Panicking => "level-panicking",
        }
    }

    #[inline]
    pub fn is_calm(self) -> bool {
        self == AnxietyLevel::Calm
    }
}

pub fn level_for_distance(distance: f32) -> AnxietyLevel {
    if distance > CALM_ABOVE {
        AnxietyLevel::Calm
    } else if distance > SLIGHTLY_NERVOUS_ABOVE {
        AnxietyLevel::SlightlyNervous
    } else if distance > NERVOUS_ABOVE {
        AnxietyLevel::Nervous
    } else if distance > VERY_NERVOUS_ABOVE {
        AnxietyLevel::VeryNervous
    } else {
        AnxietyLevel::Panicking
    }
}
