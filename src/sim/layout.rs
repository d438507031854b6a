//! Brick layout generation
//!
//! Pure function of the arena width: as many 55-unit slots as fit per row,
//! centered, three rows descending from the top edge. No randomness - the
//! same config always yields the same grid.

use glam::Vec2;

use super::rect::Rect;
use super::state::{Brick, BrickTier};
use crate::config::GameConfig;

/// Generate the brick grid for a fresh round.
///
/// Row 0 spawns at Tier1, row 1 at Tier2, row 2 at Tier3 - the spawn row only
/// sets the *initial* tier; hits degrade each brick independently afterward.
pub fn generate_bricks(config: &GameConfig, next_id: &mut u32) -> Vec<Brick> {
    let count = config.bricks_per_row();
    let spacing = config.brick_spacing;

    // Leftover slot space splits evenly around the row; each brick sits at
    // the left of its slot, half a brick width in
    let x_offset = (config.arena_width - count as f32 * spacing.x) / 2.0
        + config.min_x()
        + config.brick_size.x / 2.0;
    let top_y = config.max_y() - config.brick_top_offset;

    let mut bricks = Vec::with_capacity((count * config.brick_rows) as usize);
    for row in 0..config.brick_rows {
        let y = top_y - row as f32 * spacing.y;
        for col in 0..count {
            let x = x_offset + col as f32 * spacing.x;
            let id = *next_id;
            *next_id += 1;
            bricks.push(Brick {
                id,
                rect: Rect::new(Vec2::new(x, y), config.brick_size),
                tier: BrickTier::for_row(row),
            });
        }
    }

    log::debug!(
        "generated {} bricks ({} per row x {} rows)",
        bricks.len(),
        count,
        config.brick_rows
    );
    bricks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_arena_yields_18_bricks() {
        let config = GameConfig::for_arena(350.0, 600.0);
        let mut next_id = 1;
        let bricks = generate_bricks(&config, &mut next_id);
        assert_eq!(bricks.len(), 18); // 6 per row, 3 rows
    }

    #[test]
    fn test_rows_spawn_with_degrading_tiers() {
        let config = GameConfig::default();
        let mut next_id = 1;
        let bricks = generate_bricks(&config, &mut next_id);
        let per_row = config.bricks_per_row() as usize;

        assert!(bricks[..per_row].iter().all(|b| b.tier == BrickTier::Tier1));
        assert!(
            bricks[per_row..2 * per_row]
                .iter()
                .all(|b| b.tier == BrickTier::Tier2)
        );
        assert!(
            bricks[2 * per_row..]
                .iter()
                .all(|b| b.tier == BrickTier::Tier3)
        );
    }

    #[test]
    fn test_row_offset_places_bricks_at_slot_left_edges() {
        let config = GameConfig::for_arena(350.0, 600.0);
        let mut next_id = 1;
        let bricks = generate_bricks(&config, &mut next_id);

        // Leftmost center: (350 - 6*55)/2 - 175 + 50/2 = -140
        assert_eq!(bricks[0].rect.center.x, -140.0);
        // Subsequent bricks advance by one 55-unit slot each
        assert_eq!(bricks[1].rect.center.x, -85.0);
        assert_eq!(bricks[5].rect.center.x, -140.0 + 5.0 * 55.0);
    }

    #[test]
    fn test_rows_descend_from_top_offset() {
        let config = GameConfig::for_arena(350.0, 600.0);
        let mut next_id = 1;
        let bricks = generate_bricks(&config, &mut next_id);
        let per_row = config.bricks_per_row() as usize;

        assert_eq!(bricks[0].rect.center.y, 300.0 - 65.0);
        assert_eq!(bricks[per_row].rect.center.y, 300.0 - 65.0 - 25.0);
        assert_eq!(bricks[2 * per_row].rect.center.y, 300.0 - 65.0 - 50.0);
    }

    #[test]
    fn test_ids_are_unique_and_ascending() {
        let config = GameConfig::default();
        let mut next_id = 10;
        let bricks = generate_bricks(&config, &mut next_id);
        for pair in bricks.windows(2) {
            assert!(pair[0].id < pair[1].id);
        }
        assert_eq!(next_id, 10 + bricks.len() as u32);
    }
}
