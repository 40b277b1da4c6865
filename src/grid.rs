use v::{Vec2, Vec3};
use rng::SimpleRng;

pub const COLUMNS: usize = 30;
pub const ROWS: usize = 60;
pub const TILE_COUNT: usize = COLUMNS * ROWS;

/// Where a layer's grid starts and how far apart its tiles sit, in
/// clip-space units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridLayout {
    pub origin_x: f32,
    pub origin_y: f32,
    pub h_spacing: f32,
    pub v_spacing: f32,
}

/// An atlas subdivided into columns × rows cells; `cell_w`/`cell_h` are the
/// texcoord extents of one cell.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AtlasCells {
    pub columns: u32,
    pub rows: u32,
    pub cell_w: f32,
    pub cell_h: f32,
}

pub const GROUND_LAYOUT: GridLayout = GridLayout {
    origin_x: -0.95, origin_y: -1.33,
    h_spacing: 0.03125, v_spacing: 0.05556,
};
pub const GLYPH_LAYOUT: GridLayout = GridLayout {
    origin_x: 0., origin_y: -1.33,
    h_spacing: 0.03125, v_spacing: 0.05556,
};

pub const GROUND_CELLS: AtlasCells = AtlasCells {
    columns: 6, rows: 6, cell_w: 0.16667, cell_h: 0.16667,
};
pub const GLYPH_CELLS: AtlasCells = AtlasCells {
    columns: 8, rows: 12, cell_w: 0.125, cell_h: 0.083,
};

impl GridLayout {
    pub fn tile_position(&self, column: usize, row: usize) -> Vec3<f32> {
        Vec3::new(
            self.origin_x + column as f32 * self.h_spacing,
            self.origin_y + row as f32 * self.v_spacing,
            0.
        )
    }
}

impl AtlasCells {
    pub fn random_cell(&self, rng: &mut SimpleRng) -> Vec2<f32> {
        let column = rng.next_range(self.columns);
        let row = rng.next_range(self.rows);
        Vec2::new(column as f32 * self.cell_w, row as f32 * self.cell_h)
    }
}

/// One layer's tiles: parallel position and texcoord arrays, filled once at
/// startup. Index i is column + row × COLUMNS. Only positions mutate
/// afterwards, so the arrays never fall out of step.
#[derive(Debug, Clone, PartialEq)]
pub struct TileSet {
    positions: Vec<Vec3<f32>>,
    texcoords: Vec<Vec2<f32>>,
}

impl TileSet {
    pub fn generate(layout: &GridLayout, cells: &AtlasCells, rng: &mut SimpleRng) -> Self {
        let mut positions = vec![Vec3::zero(); TILE_COUNT];
        let mut texcoords = vec![Vec2::zero(); TILE_COUNT];
        for column in 0..COLUMNS {
            for row in 0..ROWS {
                let i = column + row * COLUMNS;
                positions[i] = layout.tile_position(column, row);
                texcoords[i] = cells.random_cell(rng);
            }
        }
        assert_eq!(positions.len(), texcoords.len());
        Self { positions, texcoords }
    }
    pub fn len(&self) -> usize {
        self.positions.len()
    }
    pub fn position(&self, i: usize) -> Vec3<f32> {
        self.positions[i]
    }
    pub fn texcoord(&self, i: usize) -> Vec2<f32> {
        self.texcoords[i]
    }
    /// Pan every tile by the same delta. Unbounded on purpose.
    pub fn translate(&mut self, delta: Vec2<f32>) {
        for position in &mut self.positions {
            position.x += delta.x;
            position.y += delta.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use input::Input;
    use input::tests::key_down;
    use movement::{self, STEP_X, STEP_Y};
    use sdl2::keyboard::Keycode;

    fn ground(seed: u32) -> TileSet {
        TileSet::generate(&GROUND_LAYOUT, &GROUND_CELLS, &mut SimpleRng::new(seed))
    }
    fn glyphs(seed: u32) -> TileSet {
        TileSet::generate(&GLYPH_LAYOUT, &GLYPH_CELLS, &mut SimpleRng::new(seed))
    }

    #[test]
    fn tile_count_is_thirty_by_sixty() {
        assert_eq!(TILE_COUNT, 1800);
        assert_eq!(ground(1).len(), TILE_COUNT);
        assert_eq!(glyphs(1).len(), TILE_COUNT);
    }

    #[test]
    fn positions_follow_the_layout() {
        let tiles = ground(7);
        for column in 0..COLUMNS {
            for row in 0..ROWS {
                let i = column + row * COLUMNS;
                let p = tiles.position(i);
                assert_eq!(p.x, GROUND_LAYOUT.origin_x + column as f32 * GROUND_LAYOUT.h_spacing);
                assert_eq!(p.y, GROUND_LAYOUT.origin_y + row as f32 * GROUND_LAYOUT.v_spacing);
                assert_eq!(p.z, 0.);
            }
        }
    }

    #[test]
    fn ground_texcoords_stay_on_the_six_by_six_grid() {
        let allowed_u: Vec<f32> = (0..6).map(|k| k as f32 * GROUND_CELLS.cell_w).collect();
        let tiles = ground(1234);
        for i in 0..tiles.len() {
            let t = tiles.texcoord(i);
            assert!(allowed_u.contains(&t.x), "texcoord.x {} off-grid at tile {}", t.x, i);
            assert!(allowed_u.contains(&t.y), "texcoord.y {} off-grid at tile {}", t.y, i);
        }
    }

    #[test]
    fn glyph_texcoords_stay_on_the_eight_by_twelve_grid() {
        let allowed_u: Vec<f32> = (0..8).map(|k| k as f32 * GLYPH_CELLS.cell_w).collect();
        let allowed_v: Vec<f32> = (0..12).map(|k| k as f32 * GLYPH_CELLS.cell_h).collect();
        let tiles = glyphs(99);
        for i in 0..tiles.len() {
            let t = tiles.texcoord(i);
            assert!(allowed_u.contains(&t.x));
            assert!(allowed_v.contains(&t.y));
        }
    }

    #[test]
    fn same_seed_reproduces_the_tiling() {
        assert_eq!(ground(5), ground(5));
        assert_ne!(ground(5), ground(6));
    }

    #[test]
    fn zero_delta_changes_nothing() {
        let mut tiles = ground(3);
        let before = tiles.clone();
        tiles.translate(Vec2::zero());
        assert_eq!(tiles, before);
    }

    #[test]
    fn translate_leaves_texcoords_alone() {
        let mut tiles = ground(3);
        let before = tiles.clone();
        tiles.translate(Vec2::new(0.5, -0.25));
        for i in 0..tiles.len() {
            assert_eq!(tiles.texcoord(i), before.texcoord(i));
        }
    }

    #[test]
    fn holding_right_accumulates_linearly() {
        let mut input = Input::default();
        input.handle_sdl2_event_before_new_tick(&key_down(Keycode::Right));
        let mut tiles = ground(11);
        let initial = tiles.clone();
        let frames = 10;
        for _ in 0..frames {
            tiles.translate(movement::pan_delta(&input));
        }
        for i in 0..tiles.len() {
            let mut expected_x = initial.position(i).x;
            for _ in 0..frames {
                expected_x -= STEP_X;
            }
            assert_eq!(tiles.position(i).x, expected_x);
            assert_eq!(tiles.position(i).y, initial.position(i).y);
        }
    }

    #[test]
    fn holding_down_for_three_frames_moves_tile_zero_down() {
        let mut input = Input::default();
        input.handle_sdl2_event_before_new_tick(&key_down(Keycode::Down));
        let mut tiles = ground(11);
        assert_eq!(tiles.position(0).x, GROUND_LAYOUT.origin_x);
        assert_eq!(tiles.position(0).y, GROUND_LAYOUT.origin_y);
        for _ in 0..3 {
            tiles.translate(movement::pan_delta(&input));
        }
        let mut expected_y = GROUND_LAYOUT.origin_y;
        for _ in 0..3 {
            expected_y += STEP_Y;
        }
        let p = tiles.position(0);
        assert_eq!(p.x, GROUND_LAYOUT.origin_x);
        assert_eq!(p.y, expected_y);
        assert_eq!(p.z, 0.);
    }
}
