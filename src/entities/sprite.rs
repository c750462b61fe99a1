/// Arena units covered by one sprite cell. Sprites are drawn one terminal
/// cell per sprite cell, so this is also the renderer's scale factor.
pub const CELL: i32 = 16;

/// ASCII sprite with a collision mask derived from its non-blank cells.
///
/// Positions and offsets are in arena units, not cells, so entities can move
/// in increments smaller than one cell.
#[derive(Debug)]
pub struct Sprite {
    rows: &'static [&'static str],
}

impl Sprite {
    pub const fn new(rows: &'static [&'static str]) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &'static [&'static str] {
        self.rows
    }

    /// Width in arena units (widest row).
    pub fn width(&self) -> i32 {
        self.rows
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0) as i32
            * CELL
    }

    /// Height in arena units.
    pub fn height(&self) -> i32 {
        self.rows.len() as i32 * CELL
    }

    /// True when the cell at column `cx`, row `cy` is part of the mask.
    fn solid(&self, cx: i32, cy: i32) -> bool {
        if cx < 0 || cy < 0 {
            return false;
        }
        self.rows
            .get(cy as usize)
            .and_then(|row| row.chars().nth(cx as usize))
            .is_some_and(|ch| ch != ' ')
    }

    /// True when the axis-aligned rectangle at (`x`, `y`) in this sprite's
    /// local space touches any solid cell.
    fn hits_rect(&self, x: i32, y: i32, w: i32, h: i32) -> bool {
        let cx0 = x.div_euclid(CELL);
        let cx1 = (x + w - 1).div_euclid(CELL);
        let cy0 = y.div_euclid(CELL);
        let cy1 = (y + h - 1).div_euclid(CELL);

        for cy in cy0..=cy1 {
            for cx in cx0..=cx1 {
                if self.solid(cx, cy) {
                    return true;
                }
            }
        }
        false
    }

    /// Mask overlap test. `(dx, dy)` is the other sprite's position minus
    /// this sprite's position in arena units. Blank cells never collide, so
    /// this is stricter than bounding-box overlap.
    pub fn overlaps(&self, other: &Sprite, dx: i32, dy: i32) -> bool {
        for (ry, row) in self.rows.iter().enumerate() {
            for (rx, ch) in row.chars().enumerate() {
                if ch == ' ' {
                    continue;
                }
                let x = rx as i32 * CELL;
                let y = ry as i32 * CELL;
                if other.hits_rect(x - dx, y - dy, CELL, CELL) {
                    return true;
                }
            }
        }
        false
    }
}

pub static PLAYER: Sprite = Sprite::new(&[
    "  ^  ", //
    " /M\\ ", //
    "<|||>",
]);

pub static PLAYER_SHOT: Sprite = Sprite::new(&["|", "|"]);

pub static DRAGON: Sprite = Sprite::new(&[
    "\\~V~/", //
    "{o.o}", //
    " /^\\ ",
]);

pub static DRAGON_SHOT: Sprite = Sprite::new(&["*"]);

pub static TURTLE: Sprite = Sprite::new(&[
    " .--. ", //
    "(====)", //
    " o  o ",
]);

pub static TURTLE_SHOT: Sprite = Sprite::new(&["o"]);

pub static MONSTER: Sprite = Sprite::new(&[
    "d|-|b", //
    "(o_o)", //
    " W W ",
]);

pub static MONSTER_SHOT: Sprite = Sprite::new(&["v"]);

#[cfg(test)]
mod tests {
    use super::*;

    static BOX: Sprite = Sprite::new(&["##", "##"]);
    static DOT: Sprite = Sprite::new(&["#"]);
    static HOLLOW: Sprite = Sprite::new(&["# #"]);

    #[test]
    fn test_identical_sprites_at_zero_offset_overlap() {
        assert!(BOX.overlaps(&BOX, 0, 0));
        assert!(PLAYER.overlaps(&PLAYER, 0, 0));
    }

    #[test]
    fn test_distant_sprites_never_overlap() {
        assert!(!BOX.overlaps(&BOX, 1000, 0));
        assert!(!BOX.overlaps(&BOX, 0, -1000));
        assert!(!BOX.overlaps(&DOT, 5 * CELL, 5 * CELL));
    }

    #[test]
    fn test_adjacent_sprites_do_not_overlap() {
        // Exactly touching edges share no cells.
        assert!(!BOX.overlaps(&BOX, BOX.width(), 0));
        assert!(BOX.overlaps(&BOX, BOX.width() - 1, 0));
    }

    #[test]
    fn test_blank_cells_are_not_part_of_the_mask() {
        // DOT sits in the gap of "# #", so there is box overlap but no
        // mask overlap.
        assert!(!HOLLOW.overlaps(&DOT, CELL, 0));
        assert!(HOLLOW.overlaps(&DOT, 2 * CELL, 0));
    }

    #[test]
    fn test_sub_cell_offsets_still_collide() {
        assert!(BOX.overlaps(&BOX, CELL / 2, CELL / 2));
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(BOX.width(), 2 * CELL);
        assert_eq!(BOX.height(), 2 * CELL);
        assert_eq!(PLAYER.width(), 5 * CELL);
        assert_eq!(PLAYER.height(), 3 * CELL);
    }
}
