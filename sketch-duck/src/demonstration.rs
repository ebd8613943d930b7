use std::io::{self, Write};

use smallvec::smallvec;

use crate::{Duck, DuckRecipe};

pub const FLOCK_SIZE: usize = 7;

const WEIGHT: i32 = 8;
const DENSITY: f32 = 2.4;
const NAME: &str = "Donald";
const CAN_FLY: bool = true;
const AIRSPEED: i32 = 22;

/// The fixed construction order of the demonstration.
pub fn test_duck_recipes() -> [DuckRecipe; FLOCK_SIZE] {
    [
        DuckRecipe::Default,
        DuckRecipe::DensityAndWeight {
            density: DENSITY,
            weight: WEIGHT,
        },
        DuckRecipe::NameAndFeathers {
            name: NAME.to_owned(),
            feathers: smallvec![1, 2, 3, 4, 5, 6],
        },
        DuckRecipe::Flight { can_fly: CAN_FLY },
        DuckRecipe::DensityAndWeight {
            density: 3.3,
            weight: AIRSPEED,
        },
        DuckRecipe::SpeedAndDensity {
            speed: AIRSPEED,
            density: DENSITY,
        },
        DuckRecipe::Flight { can_fly: false },
    ]
}

/// Builds the flock in order, writing one announcement line per duck as it is constructed.
///
/// Construction always completes; the first write error is returned after the flock is built.
pub fn demonstrate(out: &mut impl Write) -> io::Result<[Duck; FLOCK_SIZE]> {
    let mut written = Ok(());
    let ducks = test_duck_recipes().map(|recipe| {
        let duck = Duck::from_recipe(recipe);
        if written.is_ok() {
            written = writeln!(out, "{}", duck.kind());
        }
        duck
    });
    written.map(|()| ducks)
}
