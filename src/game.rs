use std::path::Path;
use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use atlas::{self, AtlasImage};
use grid::{self, TileSet};
use grx;
use gx;
use input::Input;
use mesh::TileMesh;
use movement;
use platform::Platform;
use rng::{self, SimpleRng};
use v::{Mat4, Vec2};

// Quad half extents and base atlas cells, in clip space / texcoords.
// The ground quad samples atlas cell (2, 5) of the 6x6 sheet by default;
// the per-tile cell offset wraps around from there (wrap mode is REPEAT).
const GROUND_HALF_EXTENT: (f32, f32) = (0.0156, 0.0278);
const GROUND_CELL_MIN: (f32, f32) = (0.3334, 0.8333);
const GROUND_CELL_MAX: (f32, f32) = (0.5, 1.0);
const GROUND_ATLAS_FILE: &str = "wallsprites1.png";

const GLYPH_HALF_EXTENT: (f32, f32) = (0.0082, 0.0146);
const GLYPH_CELL_MIN: (f32, f32) = (0., 0.);
const GLYPH_CELL_MAX: (f32, f32) = (0.125, 0.083);
const GLYPH_ATLAS_FILE: &str = "alphabet.png";

/// One tile layer: its tiles, the quad they all share, and the atlas bound
/// to the layer's texture unit.
struct Layer {
    tiles: TileSet,
    mesh: TileMesh,
    texture: gx::Texture2D,
    texture_unit: grx::TextureUnit,
}

impl Layer {
    fn new(
        prog: &grx::TileProgram,
        label: &str,
        assets: &Path,
        atlas_file: &str,
        texture_unit: grx::TextureUnit,
        layout: &grid::GridLayout,
        cells: &grid::AtlasCells,
        rng: &mut SimpleRng,
        half_extent: (f32, f32),
        cell_min: (f32, f32),
        cell_max: (f32, f32),
    ) -> Result<Self, String> {
        let tiles = TileSet::generate(layout, cells, rng);
        let image = AtlasImage::load(&assets.join(atlas_file))?;
        info!("`{}` atlas is {}x{}", atlas_file, image.size.w, image.size.h);
        let texture = image.upload_to_unit(texture_unit);
        let mesh = TileMesh::new_tile_quad(
            prog, label, gx::UpdateHint::Never,
            Vec2::new(half_extent.0, half_extent.1),
            Vec2::new(cell_min.0, cell_min.1),
            Vec2::new(cell_max.0, cell_max.1),
        );
        Ok(Self { tiles, mesh, texture, texture_unit })
    }
}

pub fn is_close_request(event: &Event) -> bool {
    match *event {
        Event::Quit {..} => true,
        Event::KeyDown { keycode: Some(Keycode::Escape), .. } => true,
        _ => false,
    }
}

pub struct Game {
    wants_to_quit: bool,
    pub platform: Platform,
    pub input: Input,
    event_pump: EventPump,
    program: grx::TileProgram,
    ground: Layer,
    glyphs: Layer,
}

impl Game {
    pub fn new(name: &str, w: u32, h: u32) -> Result<Self, String> {
        info!("Game: Initializing...");

        let platform = Platform::new(name, w, h)?;
        let event_pump = platform.sdl.event_pump()?;
        let program = grx::TileProgram::new()?;
        let assets = atlas::find_assets_dir()?;

        let mut rng = SimpleRng::new(rng::clock_seed());
        let ground = Layer::new(
            &program, "Ground Layer", &assets, GROUND_ATLAS_FILE,
            grx::TextureUnit::GroundAtlas,
            &grid::GROUND_LAYOUT, &grid::GROUND_CELLS, &mut rng,
            GROUND_HALF_EXTENT, GROUND_CELL_MIN, GROUND_CELL_MAX,
        )?;
        let glyphs = Layer::new(
            &program, "Glyph Layer", &assets, GLYPH_ATLAS_FILE,
            grx::TextureUnit::GlyphAtlas,
            &grid::GLYPH_LAYOUT, &grid::GLYPH_CELLS, &mut rng,
            GLYPH_HALF_EXTENT, GLYPH_CELL_MIN, GLYPH_CELL_MAX,
        )?;

        info!("Game: ... Done initializing.");
        Ok(Self {
            wants_to_quit: false,
            platform, input: Input::default(), event_pump,
            program, ground, glyphs,
        })
    }
    pub fn should_quit(&self) -> bool {
        self.wants_to_quit || self.input.wants_to_quit
    }
    pub fn pump_events(&mut self) {
        while let Some(event) = self.event_pump.poll_event() {
            self.handle_sdl2_event(&event);
        }
    }
    pub fn handle_sdl2_event(&mut self, event: &Event) {
        if is_close_request(event) {
            self.wants_to_quit = true;
        }
        self.input.handle_sdl2_event_before_new_tick(event);
    }
    pub fn tick(&mut self) {
        let delta = movement::pan_delta(&self.input);
        self.ground.tiles.translate(delta);
        self.glyphs.tiles.translate(delta);
    }
    pub fn render(&self) {
        self.platform.clear_draw();
        self.draw_layer(&self.ground);
        self.draw_layer(&self.glyphs);
    }
    fn draw_layer(&self, layer: &Layer) {
        self.program.use_program();
        grx::set_active_texture(layer.texture_unit);
        layer.texture.bind();
        self.program.set_uniform_texture(layer.texture_unit);
        layer.mesh.vao.bind();
        for i in 0..layer.tiles.len() {
            let transform = Mat4::translation_3d(layer.tiles.position(i));
            self.program.set_uniform_transform(&transform);
            self.program.set_uniform_atlas_cell(layer.tiles.texcoord(i));
            layer.mesh.draw();
        }
        gx::Vao::unbind();
    }
    pub fn present(&self) {
        self.platform.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use input::tests::{key_down, key_up};

    #[test]
    fn escape_and_quit_are_close_requests() {
        assert!(is_close_request(&Event::Quit { timestamp: 0 }));
        assert!(is_close_request(&key_down(Keycode::Escape)));
    }

    #[test]
    fn ordinary_keys_are_not_close_requests() {
        assert!(!is_close_request(&key_down(Keycode::Left)));
        assert!(!is_close_request(&key_up(Keycode::Escape)));
    }
}
