//! Food placement
//!
//! Rejection sampling over the whole board. There is deliberately no retry
//! cap: when the snake covers most of the grid the loop degrades instead of
//! failing or biasing placement.

use glam::IVec2;
use rand::Rng;
use rand_pcg::Pcg32;

/// Draw a uniformly random cell in `[0, grid_size)²` that the snake does not
/// occupy.
pub fn place_food(rng: &mut Pcg32, grid_size: i32, snake: &[IVec2]) -> IVec2 {
    loop {
        let candidate = IVec2::new(
            rng.random_range(0..grid_size),
            rng.random_range(0..grid_size),
        );
        if !snake.contains(&candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn food_lands_on_the_board_and_off_the_snake() {
        let mut rng = Pcg32::seed_from_u64(3);
        let snake = vec![IVec2::new(10, 10), IVec2::new(9, 10), IVec2::new(8, 10)];

        for _ in 0..100 {
            let food = place_food(&mut rng, 20, &snake);
            assert!(food.x >= 0 && food.x < 20);
            assert!(food.y >= 0 && food.y < 20);
            assert!(!snake.contains(&food));
        }
    }

    #[test]
    fn same_seed_gives_the_same_sequence() {
        let snake = vec![IVec2::new(0, 0)];
        let mut a = Pcg32::seed_from_u64(11);
        let mut b = Pcg32::seed_from_u64(11);

        for _ in 0..20 {
            assert_eq!(place_food(&mut a, 20, &snake), place_food(&mut b, 20, &snake));
        }
    }

    #[test]
    fn nearly_full_board_finds_the_last_free_cell() {
        // Every cell of a 4x4 board occupied except one.
        let free = IVec2::new(2, 3);
        let mut snake = Vec::new();
        for y in 0..4 {
            for x in 0..4 {
                let cell = IVec2::new(x, y);
                if cell != free {
                    snake.push(cell);
                }
            }
        }

        let mut rng = Pcg32::seed_from_u64(5);
        assert_eq!(place_food(&mut rng, 4, &snake), free);
    }
}
