use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// 64x32 monochrome framebuffer, row-major, `true` = lit.
pub struct Display {
    pixels: [bool; SCREEN_WIDTH * SCREEN_HEIGHT],
}

impl Default for Display {
    fn default() -> Self {
        Self {
            pixels: [false; SCREEN_WIDTH * SCREEN_HEIGHT],
        }
    }
}

impl Display {
    pub fn clear(&mut self) {
        self.pixels = [false; SCREEN_WIDTH * SCREEN_HEIGHT];
    }

    /// Pixel at (`x`, `y`); coordinates outside the screen read as unlit.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        x < SCREEN_WIDTH && y < SCREEN_HEIGHT && self.pixels[y * SCREEN_WIDTH + x]
    }

    pub fn pixels(&self) -> &[bool; SCREEN_WIDTH * SCREEN_HEIGHT] {
        &self.pixels
    }

    /// XOR an 8-pixel-wide sprite onto the screen, one byte per row with the
    /// MSB leftmost. Returns whether any lit pixel was turned off.
    ///
    /// Only the origin wraps. Rows running off the bottom end the draw and
    /// columns running off the right edge are dropped.
    pub fn draw_sprite(&mut self, x: u8, y: u8, rows: &[u8]) -> bool {
        let x_origin = x as usize % SCREEN_WIDTH;
        let y_origin = y as usize % SCREEN_HEIGHT;
        let mut collision = false;

        for (row, bits) in rows.iter().enumerate() {
            let y = y_origin + row;
            if y >= SCREEN_HEIGHT {
                break;
            }
            for col in 0..8 {
                let x = x_origin + col;
                if x >= SCREEN_WIDTH {
                    break;
                }
                if (bits >> (7 - col)) & 0x1 == 0 {
                    continue;
                }
                let pixel = &mut self.pixels[y * SCREEN_WIDTH + x];
                if *pixel {
                    collision = true;
                }
                *pixel ^= true;
            }
        }
        collision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_count(display: &Display) -> usize {
        display.pixels().iter().filter(|p| **p).count()
    }

    #[test]
    fn draw_sets_pixels_msb_first() {
        let mut display = Display::default();
        let collision = display.draw_sprite(5, 10, &[0x80, 0x80, 0x80]);
        assert!(!collision);
        assert!(display.pixel(5, 10));
        assert!(display.pixel(5, 11));
        assert!(display.pixel(5, 12));
        assert_eq!(lit_count(&display), 3);
    }

    #[test]
    fn redraw_erases_and_reports_collision() {
        let mut display = Display::default();
        assert!(!display.draw_sprite(0, 0, &[0xFF, 0x81]));
        assert!(display.draw_sprite(0, 0, &[0xFF, 0x81]));
        assert_eq!(lit_count(&display), 0);
    }

    #[test]
    fn collision_survives_later_non_colliding_rows() {
        let mut display = Display::default();
        display.draw_sprite(0, 0, &[0x80]);
        // First row collides, second row lights fresh pixels.
        assert!(display.draw_sprite(0, 0, &[0x80, 0xFF]));
        assert!(!display.pixel(0, 0));
        assert_eq!(lit_count(&display), 8);
    }

    #[test]
    fn origin_wraps_around() {
        let mut display = Display::default();
        display.draw_sprite(68, 33, &[0x80]);
        assert!(display.pixel(4, 1));
        assert_eq!(lit_count(&display), 1);
    }

    #[test]
    fn right_edge_clips_columns() {
        let mut display = Display::default();
        display.draw_sprite(62, 0, &[0xFF]);
        assert!(display.pixel(62, 0));
        assert!(display.pixel(63, 0));
        assert!(!display.pixel(0, 0));
        assert_eq!(lit_count(&display), 2);
    }

    #[test]
    fn bottom_edge_clips_rows() {
        let mut display = Display::default();
        display.draw_sprite(0, 30, &[0x80, 0x80, 0x80, 0x80]);
        assert!(display.pixel(0, 30));
        assert!(display.pixel(0, 31));
        assert!(!display.pixel(0, 0));
        assert!(!display.pixel(0, 1));
        assert_eq!(lit_count(&display), 2);
    }

    #[test]
    fn clear_turns_everything_off() {
        let mut display = Display::default();
        display.draw_sprite(10, 10, &[0xFF; 5]);
        display.clear();
        assert_eq!(lit_count(&display), 0);
    }
}
