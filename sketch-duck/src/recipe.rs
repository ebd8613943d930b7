use std::fmt;

use crate::{Duck, Feathers};

/// Which constructor shape produced a duck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DuckKind {
    Default,
    Flight,
    NameAndFeathers,
    DensityAndWeight,
    SpeedAndDensity,
}

impl DuckKind {
    pub fn ordinal(self) -> u8 {
        match self {
            DuckKind::Default => 1,
            DuckKind::Flight => 2,
            DuckKind::NameAndFeathers => 3,
            DuckKind::DensityAndWeight => 4,
            DuckKind::SpeedAndDensity => 5,
        }
    }
}

impl fmt::Display for DuckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type {} duck", self.ordinal())
    }
}

/// Argument bundle naming one constructor shape explicitly.
#[derive(Clone, Debug, PartialEq)]
pub enum DuckRecipe {
    Default,
    Flight { can_fly: bool },
    NameAndFeathers { name: String, feathers: Feathers },
    DensityAndWeight { density: f32, weight: i32 },
    SpeedAndDensity { speed: i32, density: f32 },
}

impl DuckRecipe {
    pub fn kind(&self) -> DuckKind {
        match self {
            DuckRecipe::Default => DuckKind::Default,
            DuckRecipe::Flight { .. } => DuckKind::Flight,
            DuckRecipe::NameAndFeathers { .. } => DuckKind::NameAndFeathers,
            DuckRecipe::DensityAndWeight { .. } => DuckKind::DensityAndWeight,
            DuckRecipe::SpeedAndDensity { .. } => DuckKind::SpeedAndDensity,
        }
    }
}

impl Duck {
    pub fn from_recipe(recipe: DuckRecipe) -> Self {
        match recipe {
            DuckRecipe::Default => Duck::new(),
            DuckRecipe::Flight { can_fly } => Duck::with_flight(can_fly),
            DuckRecipe::NameAndFeathers { name, feathers } => {
                Duck::with_name_and_feathers(name, feathers)
            }
            DuckRecipe::DensityAndWeight { density, weight } => {
                Duck::with_density_and_weight(density, weight)
            }
            DuckRecipe::SpeedAndDensity { speed, density } => {
                Duck::with_speed_and_density(speed, density)
            }
        }
    }
}

impl From<DuckRecipe> for Duck {
    fn from(recipe: DuckRecipe) -> Self {
        Duck::from_recipe(recipe)
    }
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::*;

    #[test]
    fn kinds_announce_their_ordinal() {
        assert_eq!(DuckKind::Default.to_string(), "type 1 duck");
        assert_eq!(DuckKind::Flight.to_string(), "type 2 duck");
        assert_eq!(DuckKind::NameAndFeathers.to_string(), "type 3 duck");
        assert_eq!(DuckKind::DensityAndWeight.to_string(), "type 4 duck");
        assert_eq!(DuckKind::SpeedAndDensity.to_string(), "type 5 duck");
    }

    #[test]
    fn recipe_picks_matching_constructor() {
        let recipes = [
            DuckRecipe::Default,
            DuckRecipe::Flight { can_fly: false },
            DuckRecipe::NameAndFeathers {
                name: "Scrooge".into(),
                feathers: smallvec![4],
            },
            DuckRecipe::DensityAndWeight {
                density: 1.0,
                weight: 3,
            },
            DuckRecipe::SpeedAndDensity {
                speed: 40,
                density: 1.0,
            },
        ];
        for recipe in recipes {
            let kind = recipe.kind();
            assert_eq!(Duck::from(recipe).kind(), kind);
        }
    }

    #[test]
    fn recipe_and_named_constructor_agree() {
        assert_eq!(
            Duck::from_recipe(DuckRecipe::DensityAndWeight {
                density: 2.4,
                weight: 8
            }),
            Duck::with_density_and_weight(2.4, 8)
        );
        assert_eq!(
            Duck::from_recipe(DuckRecipe::SpeedAndDensity {
                speed: 22,
                density: 2.4
            }),
            Duck::with_speed_and_density(22, 2.4)
        );
    }
}
