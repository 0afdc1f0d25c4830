//! Compression of the wider raw grades onto the scale the decision rules use.
//!
//! Both converters are total. Inputs outside 0..=6 go through the same
//! branches in the same order; nothing is clamped.

/// Visual grade 0..=6 onto 0..=4.
pub fn convert_visual(raw: i32) -> i32 {
    if raw == 6 {
        4
    } else if raw >= 4 {
        3
    } else if raw >= 2 {
        2
    } else {
        raw
    }
}

/// Bowel and bladder grade 0..=6 onto 0..=5.
pub fn convert_bowel_bladder(raw: i32) -> i32 {
    if raw == 6 {
        5
    } else if raw == 5 {
        4
    } else if raw >= 3 {
        3
    } else {
        raw
    }
}
