//! Fixed 5×5 glyph table.
//!
//! Every displayable symbol maps to a bitmap of unit-cube cells. Symbols that
//! are not in the table resolve to [`Glyph::DEFAULT`] instead of failing, so a
//! display string can never break the scene.

/// Rows (and columns) in every glyph bitmap.
pub const GLYPH_ROWS: usize = 5;
pub const GLYPH_COLS: usize = 5;

/// Row-major on/off cells, row 0 is the top of the glyph.
pub type Bitmap = [[bool; GLYPH_COLS]; GLYPH_ROWS];

const X: bool = true;
const O: bool = false;

static BITMAP_A: Bitmap = [
    [O, X, X, X, O],
    [X, O, O, O, X],
    [X, X, X, X, X],
    [X, O, O, O, X],
    [X, O, O, O, X],
];

static BITMAP_M: Bitmap = [
    [X, O, O, O, X],
    [X, X, O, X, X],
    [X, O, X, O, X],
    [X, O, O, O, X],
    [X, O, O, O, X],
];

static BITMAP_P: Bitmap = [
    [X, X, X, X, O],
    [X, O, O, O, X],
    [X, X, X, X, O],
    [X, O, O, O, O],
    [X, O, O, O, O],
];

static BITMAP_ONE: Bitmap = [
    [O, O, X, O, O],
    [O, X, X, O, O],
    [O, O, X, O, O],
    [O, O, X, O, O],
    [O, X, X, X, O],
];

static BITMAP_EIGHT: Bitmap = [
    [O, X, X, X, O],
    [X, O, O, O, X],
    [O, X, X, X, O],
    [X, O, O, O, X],
    [O, X, X, X, O],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    A,
    M,
    P,
    One,
    Eight,
}

impl Glyph {
    /// Glyph used for any symbol missing from the table.
    pub const DEFAULT: Glyph = Glyph::A;

    pub const ALL: [Glyph; 5] = [Glyph::A, Glyph::M, Glyph::P, Glyph::One, Glyph::Eight];

    /// Exact, case-sensitive table lookup.
    pub fn from_char(symbol: char) -> Option<Glyph> {
        match symbol {
            'A' => Some(Glyph::A),
            'M' => Some(Glyph::M),
            'P' => Some(Glyph::P),
            '1' => Some(Glyph::One),
            '8' => Some(Glyph::Eight),
            _ => None,
        }
    }

    /// Lookup that never fails: unknown symbols become [`Glyph::DEFAULT`].
    pub fn resolve(symbol: char) -> Glyph {
        Glyph::from_char(symbol).unwrap_or_else(|| {
            log::debug!(
                "[glyph] no bitmap for {:?}, using {:?}",
                symbol,
                Glyph::DEFAULT.symbol()
            );
            Glyph::DEFAULT
        })
    }

    pub fn symbol(self) -> char {
        match self {
            Glyph::A => 'A',
            Glyph::M => 'M',
            Glyph::P => 'P',
            Glyph::One => '1',
            Glyph::Eight => '8',
        }
    }

    pub fn bitmap(self) -> &'static Bitmap {
        match self {
            Glyph::A => &BITMAP_A,
            Glyph::M => &BITMAP_M,
            Glyph::P => &BITMAP_P,
            Glyph::One => &BITMAP_ONE,
            Glyph::Eight => &BITMAP_EIGHT,
        }
    }

    /// Horizontal shift that centers the glyph on its anchor.
    ///
    /// The single-stroke `1` sits half a cell further right than the general
    /// rule would put it; this is a fixed visual exception, not a formula.
    pub fn column_offset(self) -> f32 {
        match self {
            Glyph::One => 0.5,
            _ => 1.0,
        }
    }

    /// Number of lit cells, i.e. cubes this glyph expands to.
    pub fn cell_count(self) -> usize {
        self.bitmap()
            .iter()
            .map(|row| row.iter().filter(|&&on| on).count())
            .sum()
    }
}

/// Bitmap for a single character, falling back to the default glyph.
#[inline]
pub fn glyph_bitmap(symbol: char) -> &'static Bitmap {
    Glyph::resolve(symbol).bitmap()
}
