//! # Slippy-map tiles around a captured position
//!
//! The map preview is a 3×3 grid of 256 px Web-Mercator tiles centred on the
//! tile that contains the position, with one marker on the exact point. The
//! grid is positioned so the marker sits in the middle of the viewport.
//!
//! Tile numbering follows the OpenStreetMap convention: at zoom `z` there are
//! `2^z` tiles per axis, `x` grows eastwards from the antimeridian and `y`
//! grows southwards from ~85.05°N.

use std::f64::consts::PI;

use crate::models::Coordinate;

pub const TILE_SIZE: u32 = 256;
pub const MIN_ZOOM: u8 = 0;
pub const MAX_ZOOM: u8 = 19;
const MAX_LATITUDE: f64 = 85.051_128_78;
const SUBDOMAINS: [&str; 3] = ["a", "b", "c"];

/// One tile of the preview grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    pub x: u32,
    pub y: u32,
    pub z: u8,
    pub url: String,
    /// Offset of the tile inside the grid, in pixels.
    pub left: u32,
    pub top: u32,
}

/// A zoomable view centred on one coordinate.
#[derive(Clone, Debug, PartialEq)]
pub struct MapView {
    pub center: Coordinate,
    zoom: u8,
    tile_url: String,
}

impl MapView {
    pub fn new(center: Coordinate, zoom: u8, tile_url: impl Into<String>) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            tile_url: tile_url.into(),
        }
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(1);
    }

    /// Fractional tile coordinates of the centre at the current zoom.
    pub fn world_position(&self) -> (f64, f64) {
        project(self.center, self.zoom)
    }

    /// Tile containing the centre.
    pub fn center_tile(&self) -> (u32, u32) {
        let n = tiles_per_axis(self.zoom);
        let (x, y) = self.world_position();
        let tx = (x.floor() as i64).rem_euclid(n as i64) as u32;
        let ty = (y.floor() as i64).clamp(0, n as i64 - 1) as u32;
        (tx, ty)
    }

    /// Marker position inside the grid, in pixels.
    pub fn marker_offset(&self) -> (f64, f64) {
        let (x, y) = self.world_position();
        let (_, ty) = self.center_tile();
        let size = TILE_SIZE as f64;
        let fx = x - x.floor();
        let fy = (y - ty as f64).clamp(0.0, 1.0);
        (size + fx * size, size + fy * size)
    }

    /// The 3×3 grid, row by row. Rows beyond the poles are left out; columns
    /// wrap around the antimeridian. Below zoom 2 the world is narrower than
    /// the grid, so each tile appears once.
    pub fn tiles(&self) -> Vec<Tile> {
        let n = tiles_per_axis(self.zoom) as i64;
        let (cx, cy) = self.center_tile();
        let columns: &[i64] = match n {
            1 => &[0],
            2 => &[-1, 0],
            _ => &[-1, 0, 1],
        };
        let mut tiles = Vec::with_capacity(9);
        for dy in -1i64..=1 {
            let y = cy as i64 + dy;
            if y < 0 || y >= n {
                continue;
            }
            for &dx in columns {
                let x = (cx as i64 + dx).rem_euclid(n);
                tiles.push(Tile {
                    x: x as u32,
                    y: y as u32,
                    z: self.zoom,
                    url: self.tile_url(x as u32, y as u32),
                    left: ((dx + 1) as u32) * TILE_SIZE,
                    top: ((dy + 1) as u32) * TILE_SIZE,
                });
            }
        }
        tiles
    }

    fn tile_url(&self, x: u32, y: u32) -> String {
        let subdomain = SUBDOMAINS[((x + y) % SUBDOMAINS.len() as u32) as usize];
        self.tile_url
            .replace("{s}", subdomain)
            .replace("{z}", &self.zoom.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
    }
}

fn tiles_per_axis(zoom: u8) -> u32 {
    1u32 << zoom
}

/// Web-Mercator projection into fractional tile units.
fn project(coord: Coordinate, zoom: u8) -> (f64, f64) {
    let n = tiles_per_axis(zoom) as f64;
    let lat = coord.latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (coord.longitude + 180.0) / 360.0 * n;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * n;
    (x, y)
}
