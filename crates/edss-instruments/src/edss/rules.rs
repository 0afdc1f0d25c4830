use super::score::EdssScore;
use super::stats::{second_max_and_count, MaxStat};

/// Ambulation grades 3..=16 decide the score on their own.
///
/// Returns `None` for anything else, meaning the functional systems decide.
pub fn ambulation_override(ambulation: i32) -> Option<EdssScore> {
    let score = match ambulation {
        3 => EdssScore::FIVE,
        4 => EdssScore::FIVE_HALF,
        5..=7 => EdssScore::SIX,
        8 | 9 => EdssScore::SIX_HALF,
        10 => EdssScore::SEVEN,
        11 => EdssScore::SEVEN_HALF,
        12 => EdssScore::EIGHT,
        13 => EdssScore::EIGHT_HALF,
        14 => EdssScore::NINE,
        15 => EdssScore::NINE_HALF,
        16 => EdssScore::TEN,
        _ => return None,
    };
    Some(score)
}

/// Score from the seven converted functional system grades.
///
/// `max` is [`max_and_count`](super::max_and_count) over `systems`.
/// `ambulation` is expected in 0..=2 (any grade without an override).
///
/// The checks are ordered; earlier ones take priority where conditions
/// overlap. A single 4 with no 2 or 3 beside it and `ambulation >= 2`
/// drops out of the first block and continues down the chain.
pub fn resolve_functional_systems(
    systems: &[i32; 7],
    max: MaxStat,
    ambulation: i32,
) -> EdssScore {
    let MaxStat { value, count } = max;

    if value >= 5 {
        return EdssScore::FIVE;
    }

    if value == 4 {
        if count >= 2 {
            return EdssScore::FIVE;
        }
        if count == 1 {
            let second = second_max_and_count(systems, 4);
            if second.value == 3 && second.count > 2 {
                return EdssScore::FIVE;
            }
            if second.value == 3 || second.value == 2 {
                return EdssScore::FOUR_HALF;
            }
            if ambulation < 2 && second.value < 2 {
                return EdssScore::FOUR;
            }
        }
    }

    if value == 3 && count >= 6 {
        return EdssScore::FIVE;
    }

    if ambulation == 2 {
        return EdssScore::FOUR_HALF;
    }

    if value == 3 {
        if count == 5 {
            return EdssScore::FOUR_HALF;
        }
        if count >= 2 {
            if count == 2 && second_max_and_count(systems, 3).value <= 1 {
                return EdssScore::THREE_HALF;
            }
            return EdssScore::FOUR;
        }
        if count == 1 {
            let second = second_max_and_count(systems, 3);
            if second.value == 2 {
                return if second.count >= 3 {
                    EdssScore::FOUR
                } else {
                    EdssScore::THREE_HALF
                };
            }
            return EdssScore::THREE;
        }
    }

    if value == 2 {
        return match count {
            6.. => EdssScore::FOUR,
            5 => EdssScore::THREE_HALF,
            3 | 4 => EdssScore::THREE,
            2 => EdssScore::TWO_HALF,
            _ => EdssScore::TWO,
        };
    }

    if ambulation == 1 {
        return EdssScore::TWO;
    }

    if value == 1 {
        return if count >= 2 {
            EdssScore::ONE_HALF
        } else {
            EdssScore::ONE
        };
    }

    EdssScore::ZERO
}
