// Host-side tests for the glyph table.

use blocks_core::*;

fn rows(bits: [&str; 5]) -> Bitmap {
    let mut out = [[false; GLYPH_COLS]; GLYPH_ROWS];
    for (i, row) in bits.iter().enumerate() {
        for (j, c) in row.chars().enumerate() {
            out[i][j] = c == '1';
        }
    }
    out
}

#[test]
fn every_supported_symbol_matches_its_literal_pattern() {
    let table = [
        ('A', ["01110", "10001", "11111", "10001", "10001"]),
        ('M', ["10001", "11011", "10101", "10001", "10001"]),
        ('P', ["11110", "10001", "11110", "10000", "10000"]),
        ('1', ["00100", "01100", "00100", "00100", "01110"]),
        ('8', ["01110", "10001", "01110", "10001", "01110"]),
    ];
    for (symbol, pattern) in table {
        assert_eq!(
            glyph_bitmap(symbol),
            &rows(pattern),
            "bitmap mismatch for {symbol:?}"
        );
    }
}

#[test]
fn m_rows_match_documented_example() {
    let m = glyph_bitmap('M');
    assert_eq!(m[0], [true, false, false, false, true]);
    assert_eq!(m[2], [true, false, true, false, true]);
}

#[test]
fn bitmaps_are_always_five_by_five() {
    for glyph in Glyph::ALL {
        let bitmap = glyph.bitmap();
        assert_eq!(bitmap.len(), 5);
        assert!(bitmap.iter().all(|row| row.len() == 5));
    }
}

#[test]
fn unmapped_symbols_fall_back_to_default_glyph() {
    let default = Glyph::DEFAULT.bitmap();
    assert_eq!(Glyph::DEFAULT, Glyph::A);
    for symbol in ['a', 'm', 'Z', '0', '9', ' ', '-', '!', 'é', '字', '\n'] {
        assert_eq!(Glyph::from_char(symbol), None, "{symbol:?} should be unmapped");
        assert_eq!(Glyph::resolve(symbol), Glyph::DEFAULT);
        assert_eq!(glyph_bitmap(symbol), default);
    }
}

#[test]
fn lookup_is_case_sensitive() {
    assert_eq!(Glyph::from_char('P'), Some(Glyph::P));
    assert_eq!(Glyph::from_char('p'), None);
}

#[test]
fn symbols_resolve_back_to_their_glyph() {
    for glyph in Glyph::ALL {
        assert_eq!(Glyph::from_char(glyph.symbol()), Some(glyph));
    }
}

#[test]
fn cell_counts_match_bitmaps() {
    assert_eq!(Glyph::A.cell_count(), 14);
    assert_eq!(Glyph::M.cell_count(), 13);
    assert_eq!(Glyph::P.cell_count(), 12);
    assert_eq!(Glyph::One.cell_count(), 8);
    assert_eq!(Glyph::Eight.cell_count(), 13);
}

#[test]
fn lookup_is_pure() {
    for symbol in ['A', '1', 'q'] {
        assert_eq!(glyph_bitmap(symbol), glyph_bitmap(symbol));
    }
}

#[test]
fn only_the_narrow_one_has_a_shifted_column_offset() {
    assert_eq!(Glyph::One.column_offset(), 0.5);
    for glyph in [Glyph::A, Glyph::M, Glyph::P, Glyph::Eight] {
        assert_eq!(glyph.column_offset(), 1.0);
    }
}
