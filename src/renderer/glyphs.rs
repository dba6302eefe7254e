//! Digit glyph atlas for the score display
//!
//! A 3x5 pixel font for 0-9, baked at startup into a single-channel
//! texture, plus quad generation for the two score counters.

use super::vertex::TexVertex;
use crate::sim::Score;

/// Glyph cell size in texels
pub const GLYPH_WIDTH: u32 = 3;
pub const GLYPH_HEIGHT: u32 = 5;

/// Atlas holds the ten digits side by side
pub const ATLAS_WIDTH: u32 = GLYPH_WIDTH * 10;
pub const ATLAS_HEIGHT: u32 = GLYPH_HEIGHT;

/// Size of one glyph texel on screen (NDC)
pub const TEXEL_SIZE: f32 = 0.02;
/// Gap between the center line and each score
pub const SCORE_MARGIN: f32 = 0.1;
/// Top edge of the score text
pub const SCORE_TOP: f32 = 0.95;

/// Rows top to bottom, 3 bits each, leftmost pixel in the high bit
const FONT: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b001, 0b001, 0b001],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

/// R8 atlas pixels, row-major, top row first
pub fn atlas_pixels() -> Vec<u8> {
    let mut pixels = vec![0u8; (ATLAS_WIDTH * ATLAS_HEIGHT) as usize];
    for (digit, rows) in FONT.iter().enumerate() {
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                    let x = digit as u32 * GLYPH_WIDTH + col;
                    pixels[(row as u32 * ATLAS_WIDTH + x) as usize] = 255;
                }
            }
        }
    }
    pixels
}

/// On-screen width of a number with `digits` digits
pub fn text_width(digits: usize) -> f32 {
    if digits == 0 {
        return 0.0;
    }
    let advance = (GLYPH_WIDTH + 1) as f32 * TEXEL_SIZE;
    digits as f32 * advance - TEXEL_SIZE
}

/// Quads for `value` with its bottom-left corner at (x, y)
pub fn number(value: u32, x: f32, y: f32) -> Vec<TexVertex> {
    let text = value.to_string();
    let advance = (GLYPH_WIDTH + 1) as f32 * TEXEL_SIZE;
    let w = GLYPH_WIDTH as f32 * TEXEL_SIZE;
    let h = GLYPH_HEIGHT as f32 * TEXEL_SIZE;

    let mut vertices = Vec::with_capacity(text.len() * 6);
    for (i, ch) in text.bytes().enumerate() {
        let digit = u32::from(ch - b'0');
        let u0 = (digit * GLYPH_WIDTH) as f32 / ATLAS_WIDTH as f32;
        let u1 = ((digit + 1) * GLYPH_WIDTH) as f32 / ATLAS_WIDTH as f32;

        let x0 = x + i as f32 * advance;
        let (x1, y1) = (x0 + w, y + h);

        // Texture v grows downward
        vertices.push(TexVertex::new(x0, y, u0, 1.0));
        vertices.push(TexVertex::new(x1, y, u1, 1.0));
        vertices.push(TexVertex::new(x0, y1, u0, 0.0));

        vertices.push(TexVertex::new(x1, y, u1, 1.0));
        vertices.push(TexVertex::new(x1, y1, u1, 0.0));
        vertices.push(TexVertex::new(x0, y1, u0, 0.0));
    }
    vertices
}

/// Both counters: left score right-aligned left of center, right score after it
pub fn score_text(score: &Score) -> Vec<TexVertex> {
    let y = SCORE_TOP - GLYPH_HEIGHT as f32 * TEXEL_SIZE;
    let left_digits = score.left.to_string().len();

    let mut vertices = number(score.left, -SCORE_MARGIN - text_width(left_digits), y);
    vertices.extend(number(score.right, SCORE_MARGIN, y));
    vertices
}
