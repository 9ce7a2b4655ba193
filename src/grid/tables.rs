//! 100 km square lettering tables
//!
//! UTM zones cycle through six lettering sets. Each set fixes the letter of
//! its first column (easting 100 km to 200 km) and of its first row
//! (northing 0 to 100 km). Columns step through `A..=Z` and rows through
//! `A..=V`, both without `I` and `O`.

/// Number of 100k lettering sets
pub const NUM_100K_SETS: u8 = 6;

/// Column letter of the first column, per set
pub const SET_ORIGIN_COLUMN_LETTERS: [u8; 6] = *b"AJSAJS";

/// Row letter of the first row, per set
pub const SET_ORIGIN_ROW_LETTERS: [u8; 6] = *b"AFAFAF";

/// Easting (column) letters, 24 of them
pub const COLUMN_LETTERS: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ";

/// Northing (row) letters, 20 of them
pub const ROW_LETTERS: &[u8] = b"ABCDEFGHJKLMNPQRSTUV";

/// Side of a grid square in meters
pub const SQUARE_SIZE: f64 = 100_000.0;

/// Northing span after which the row letters repeat
pub const ROW_CYCLE: f64 = 2_000_000.0;

/// Lettering set (1..=6) used by a zone
pub fn set_for_zone(zone_number: u8) -> u8 {
    match zone_number % NUM_100K_SETS {
        0 => NUM_100K_SETS,
        set => set,
    }
}

fn origin(table: &[u8; 6], set: u8) -> u8 {
    table[usize::from(set.clamp(1, NUM_100K_SETS) - 1)]
}

fn position(alphabet: &[u8], letter: char) -> Option<usize> {
    alphabet.iter().position(|&b| char::from(b) == letter)
}

fn step(alphabet: &[u8], origin: u8, steps: i64) -> char {
    let start = position(alphabet, char::from(origin)).unwrap_or(0) as i64;
    let len = alphabet.len() as i64;
    char::from(alphabet[(start + steps).rem_euclid(len) as usize])
}

/// Column letter `column - 1` steps after the set's origin column.
///
/// Columns count from 1, the square spanning easting 100 km to 200 km.
pub fn column_letter(set: u8, column: i64) -> char {
    step(COLUMN_LETTERS, origin(&SET_ORIGIN_COLUMN_LETTERS, set), column - 1)
}

/// Row letter `row` steps after the set's origin row
pub fn row_letter(set: u8, row: i64) -> char {
    step(ROW_LETTERS, origin(&SET_ORIGIN_ROW_LETTERS, set), row)
}

/// Column number (1-based) of a column letter, `None` if it is not a column letter
pub fn column_of(set: u8, letter: char) -> Option<u32> {
    let start = position(COLUMN_LETTERS, char::from(origin(&SET_ORIGIN_COLUMN_LETTERS, set)))?;
    let target = position(COLUMN_LETTERS, letter)?;
    let len = COLUMN_LETTERS.len();
    Some(((target + len - start) % len) as u32 + 1)
}

/// Row number (0-based, modulo 20) of a row letter, `None` if it is not a row letter
pub fn row_of(set: u8, letter: char) -> Option<u32> {
    let start = position(ROW_LETTERS, char::from(origin(&SET_ORIGIN_ROW_LETTERS, set)))?;
    let target = position(ROW_LETTERS, letter)?;
    let len = ROW_LETTERS.len();
    Some(((target + len - start) % len) as u32)
}

/// Smallest northing in meters found in a latitude band.
///
/// From the GEOTRANS latitude band table. `None` for letters that are not
/// band letters.
pub fn min_northing(zone_letter: char) -> Option<f64> {
    let northing = match zone_letter {
        'C' => 1_100_000.0,
        'D' => 2_000_000.0,
        'E' => 2_800_000.0,
        'F' => 3_700_000.0,
        'G' => 4_600_000.0,
        'H' => 5_500_000.0,
        'J' => 6_400_000.0,
        'K' => 7_300_000.0,
        'L' => 8_200_000.0,
        'M' => 9_100_000.0,
        'N' => 0.0,
        'P' => 800_000.0,
        'Q' => 1_700_000.0,
        'R' => 2_600_000.0,
        'S' => 3_500_000.0,
        'T' => 4_400_000.0,
        'U' => 5_300_000.0,
        'V' => 6_200_000.0,
        'W' => 7_000_000.0,
        'X' => 7_900_000.0,
        _ => return None,
    };
    Some(northing)
}
