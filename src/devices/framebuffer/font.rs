//! Fixed 8x16 bitmap font.
//!
//! Defined for printable ASCII (`' '..='~'`) only; every other character has
//! no glyph. Rows are MSB-left: bit `0x80 >> col` lights column `col`.
//! The shapes come from the public-domain font8x8 basic set, each source
//! row doubled to fill the 16-row cell.

use font8x8::legacy::BASIC_LEGACY;
use spin::Lazy;

pub const GLYPH_WIDTH: i32 = 8;
pub const GLYPH_HEIGHT: i32 = 16;

pub const FIRST_CHAR: char = ' ';
pub const LAST_CHAR: char = '~';

const GLYPH_COUNT: usize = LAST_CHAR as usize - FIRST_CHAR as usize + 1;

pub type Glyph = [u8; GLYPH_HEIGHT as usize];

static GLYPHS: Lazy<[Glyph; GLYPH_COUNT]> = Lazy::new(|| {
    let mut table = [[0u8; GLYPH_HEIGHT as usize]; GLYPH_COUNT];
    for (i, glyph) in table.iter_mut().enumerate() {
        // font8x8 stores the leftmost pixel in bit 0
        let source = BASIC_LEGACY[FIRST_CHAR as usize + i];
        for (row, bits) in glyph.iter_mut().enumerate() {
            *bits = source[row / 2].reverse_bits();
        }
    }
    table
});

pub fn is_defined(ch: char) -> bool {
    (FIRST_CHAR..=LAST_CHAR).contains(&ch)
}

pub fn glyph(ch: char) -> Option<&'static Glyph> {
    if !is_defined(ch) {
        return None;
    }
    GLYPHS.get(ch as usize - FIRST_CHAR as usize)
}
