//! Dice pool rolls.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const MAX_DICE: u8 = 20;
pub const MAX_SIDES: u16 = 1000;

/// Die sizes the dice panel cycles through.
pub const STANDARD_SIDES: [u16; 7] = [4, 6, 8, 10, 12, 20, 100];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roll {
    pub sides: u16,
    pub values: Vec<u16>,
    pub total: u32,
}

/// Roll `count` dice of `sides` sides. Every value lands in `[1, sides]` and
/// the total is their sum.
pub fn roll(count: u8, sides: u16, rng: &mut impl Rng) -> Result<Roll> {
    if count == 0 || count > MAX_DICE {
        return Err(Error::invalid_input(
            "dice count",
            format!("must be 1..={MAX_DICE}, got {count}"),
        ));
    }
    if sides < 2 || sides > MAX_SIDES {
        return Err(Error::invalid_input(
            "dice sides",
            format!("must be 2..={MAX_SIDES}, got {sides}"),
        ));
    }
    let values: Vec<u16> = (0..count).map(|_| rng.gen_range(1..=sides)).collect();
    let total = values.iter().map(|&v| v as u32).sum();
    Ok(Roll {
        sides,
        values,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn two_d6_yields_two_values_in_range_and_sum() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let roll = roll(2, 6, &mut rng).unwrap();
            assert_eq!(roll.values.len(), 2);
            assert!(roll.values.iter().all(|&v| (1..=6).contains(&v)));
            assert_eq!(roll.total, roll.values.iter().map(|&v| v as u32).sum::<u32>());
        }
    }

    #[test]
    fn zero_count_and_bad_sides_are_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(roll(0, 6, &mut rng).is_err());
        assert!(roll(2, 1, &mut rng).is_err());
        assert!(roll(MAX_DICE + 1, 6, &mut rng).is_err());
        assert!(roll(2, MAX_SIDES + 1, &mut rng).is_err());
    }
}
