use smallvec::{smallvec, SmallVec};

use crate::DuckKind;

/// Count markers carried by a duck. Seven fit inline.
pub type Feathers = SmallVec<[i64; 7]>;

/// A passive value holder. Every attribute starts at its default and only the attributes
/// named by the chosen constructor are overridden. There are no setters.
#[derive(Clone, Debug, PartialEq)]
pub struct Duck {
    kilos: i32,
    floatability: f32,
    name: String,
    feathers: Feathers,
    can_fly: bool,
    max_speed: i32,
    kind: DuckKind,
}

impl Duck {
    pub const DEFAULT_KILOS: i32 = 6;
    pub const DEFAULT_FLOATABILITY: f32 = 2.1;
    pub const DEFAULT_NAME: &'static str = "Generic";
    pub const DEFAULT_CAN_FLY: bool = true;
    pub const DEFAULT_MAX_SPEED: i32 = 25;

    pub fn default_feathers() -> Feathers {
        smallvec![1, 2, 3, 4, 5, 6, 7]
    }

    /// Type 1: every attribute at its default.
    pub fn new() -> Self {
        Self {
            kilos: Self::DEFAULT_KILOS,
            floatability: Self::DEFAULT_FLOATABILITY,
            name: Self::DEFAULT_NAME.to_owned(),
            feathers: Self::default_feathers(),
            can_fly: Self::DEFAULT_CAN_FLY,
            max_speed: Self::DEFAULT_MAX_SPEED,
            kind: DuckKind::Default,
        }
        .constructed()
    }

    /// Type 2.
    pub fn with_flight(can_fly: bool) -> Self {
        Self {
            can_fly,
            kind: DuckKind::Flight,
            ..Self::blank()
        }
        .constructed()
    }

    /// Type 3.
    pub fn with_name_and_feathers(name: impl Into<String>, feathers: Feathers) -> Self {
        Self {
            name: name.into(),
            feathers,
            kind: DuckKind::NameAndFeathers,
            ..Self::blank()
        }
        .constructed()
    }

    /// Type 4.
    pub fn with_density_and_weight(density: f32, weight: i32) -> Self {
        Self {
            floatability: density,
            kilos: weight,
            kind: DuckKind::DensityAndWeight,
            ..Self::blank()
        }
        .constructed()
    }

    /// Type 5. Only the speed is kept, the density is accepted and dropped.
    pub fn with_speed_and_density(speed: i32, _density: f32) -> Self {
        Self {
            max_speed: speed,
            kind: DuckKind::SpeedAndDensity,
            ..Self::blank()
        }
        .constructed()
    }

    pub fn kilos(&self) -> i32 {
        self.kilos
    }

    pub fn floatability(&self) -> f32 {
        self.floatability
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn feathers(&self) -> &[i64] {
        &self.feathers
    }

    pub fn can_fly(&self) -> bool {
        self.can_fly
    }

    pub fn max_speed(&self) -> i32 {
        self.max_speed
    }

    /// The constructor shape that produced this duck.
    pub fn kind(&self) -> DuckKind {
        self.kind
    }

    // Defaults without the construction log, for struct-update syntax.
    fn blank() -> Self {
        Self {
            kilos: Self::DEFAULT_KILOS,
            floatability: Self::DEFAULT_FLOATABILITY,
            name: Self::DEFAULT_NAME.to_owned(),
            feathers: Self::default_feathers(),
            can_fly: Self::DEFAULT_CAN_FLY,
            max_speed: Self::DEFAULT_MAX_SPEED,
            kind: DuckKind::Default,
        }
    }

    fn constructed(self) -> Self {
        tracing::debug!(kind = %self.kind, name = %self.name, "Constructed duck");
        self
    }
}

impl Default for Duck {
    fn default() -> Self {
        Self::new()
    }
}
