//! Lo Shu grid tabulation.
//!
//! ```text
//! 4 9 2
//! 3 5 7
//! 8 1 6
//! ```
//!
//! Only the digits 1-9 of the birth date have a cell; zeros are counted
//! separately.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::numerology::parse_birth_date;

pub const LAYOUT: [[u32; 3]; 3] = [[4, 9, 2], [3, 5, 7], [8, 1, 6]];

struct Grouping {
    name: &'static str,
    digits: [u32; 3],
    present: &'static str,
    absent: &'static str,
}

const PLANES: [Grouping; 6] = [
    Grouping {
        name: "Mental Plane",
        digits: [4, 9, 2],
        present: "Sharp memory, analytical thinking and a mind that plans ahead.",
        absent: "Thinking can feel scattered; written plans and routines help focus.",
    },
    Grouping {
        name: "Emotional Plane",
        digits: [3, 5, 7],
        present: "Deep feelings expressed with warmth, imagination and sensitivity.",
        absent: "Feelings are held inside; trusted company helps them surface.",
    },
    Grouping {
        name: "Practical Plane",
        digits: [8, 1, 6],
        present: "Hands-on, organised and good with money and material matters.",
        absent: "Material matters need extra attention; budgeting builds security.",
    },
    Grouping {
        name: "Thought Plane",
        digits: [4, 3, 8],
        present: "Ideas arrive readily and are turned into workable plans.",
        absent: "Ideas stay abstract; discussing them with others brings clarity.",
    },
    Grouping {
        name: "Will Plane",
        digits: [9, 5, 1],
        present: "Strong determination and the persistence to finish what is started.",
        absent: "Motivation fluctuates; small daily goals build willpower.",
    },
    Grouping {
        name: "Action Plane",
        digits: [2, 7, 6],
        present: "Turns intentions into deeds and learns by doing.",
        absent: "Hesitation before acting; deadlines and accountability help.",
    },
];

const ARROWS: [Grouping; 4] = [
    Grouping {
        name: "Arrow of Determination",
        digits: [4, 5, 6],
        present: "Unshakeable resolve; obstacles are treated as challenges to overcome.",
        absent: "Tends to procrastinate when results are slow to appear.",
    },
    Grouping {
        name: "Arrow of Spirituality",
        digits: [2, 5, 8],
        present: "Natural calm, intuition and a pull towards inner growth.",
        absent: "Restlessness; meditation and quiet time restore balance.",
    },
    Grouping {
        name: "Arrow of Intellect",
        digits: [4, 9, 3],
        present: "Quick learner with a gift for study, research and planning.",
        absent: "Learning comes through experience rather than books.",
    },
    Grouping {
        name: "Arrow of Prosperity",
        digits: [7, 6, 1],
        present: "Good fortune with resources and the ability to grow wealth steadily.",
        absent: "Wealth comes through effort rather than luck; save consistently.",
    },
];

fn missing_meaning(digit: u32) -> &'static str {
    match digit {
        1 => "Difficulty expressing the self; build confidence in communication.",
        2 => "Lower sensitivity and patience; practise listening and cooperation.",
        3 => "Imagination and self-expression need nurturing; try creative outlets.",
        4 => "Organisation and discipline need effort; keep lists and routines.",
        5 => "Emotional balance and stability can waver; seek steady anchors.",
        6 => "Home and family responsibilities may feel heavy; share the load.",
        7 => "Spiritual lessons arrive through setbacks; reflection brings wisdom.",
        8 => "Carelessness with details and money; keep accounts in order.",
        9 => "Ambition and idealism need a spark; set meaningful goals.",
        _ => "",
    }
}

fn repeated_meaning(digit: u32) -> &'static str {
    match digit {
        1 => "Highly expressive; may talk more than listen.",
        2 => "Very sensitive and intuitive; guard against being easily hurt.",
        3 => "Rich imagination; can drift into daydreams.",
        4 => "Extremely methodical; can become rigid or stubborn.",
        5 => "Strong drive and restlessness; channel energy wisely.",
        6 => "Deep attachment to home; can worry excessively about family.",
        7 => "Learns through loss and change; strong spiritual pull.",
        8 => "Exceptional attention to detail; may be restless with routine.",
        9 => "Highly idealistic and ambitious; can be critical of others.",
        _ => "",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitNote {
    pub digit: u32,
    pub count: u32,
    pub meaning: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupingReading {
    pub name: &'static str,
    pub digits: [u32; 3],
    pub sum: u32,
    pub complete: bool,
    pub empty: bool,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoShuAnalysis {
    pub missing_numbers: Vec<u32>,
    pub repeated_numbers: Vec<u32>,
    pub missing: Vec<DigitNote>,
    pub repeated: Vec<DigitNote>,
    pub planes: Vec<GroupingReading>,
    pub arrows: Vec<GroupingReading>,
    pub empty_planes: Vec<&'static str>,
    pub complete_arrows: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoShuGrid {
    pub grid: BTreeMap<u32, u32>,
    pub zero_count: u32,
    pub digit_count: u32,
    pub analysis: LoShuAnalysis,
    pub grid_visualization: Vec<Vec<String>>,
}

impl LoShuGrid {
    pub fn count(&self, digit: u32) -> u32 {
        self.grid.get(&digit).copied().unwrap_or(0)
    }
}

/// Tabulate the grid for a birth date.
pub fn lo_shu_grid(date_of_birth: &str) -> Result<LoShuGrid> {
    parse_birth_date(date_of_birth)?;

    let mut grid: BTreeMap<u32, u32> = (1..=9).map(|d| (d, 0)).collect();
    let mut zero_count = 0;
    for digit in date_of_birth.chars().filter_map(|c| c.to_digit(10)) {
        match digit {
            0 => zero_count += 1,
            d => *grid.entry(d).or_insert(0) += 1,
        }
    }
    let digit_count: u32 = grid.values().sum();

    let count = |d: u32| grid.get(&d).copied().unwrap_or(0);

    let note = |digit: u32, meaning: &'static str| DigitNote {
        digit,
        count: count(digit),
        meaning,
    };
    let missing: Vec<DigitNote> = (1..=9)
        .filter(|&d| count(d) == 0)
        .map(|d| note(d, missing_meaning(d)))
        .collect();
    let repeated: Vec<DigitNote> = (1..=9)
        .filter(|&d| count(d) > 1)
        .map(|d| note(d, repeated_meaning(d)))
        .collect();

    let read = |group: &Grouping| {
        let sum: u32 = group.digits.iter().map(|&d| count(d)).sum();
        let complete = group.digits.iter().all(|&d| count(d) > 0);
        GroupingReading {
            name: group.name,
            digits: group.digits,
            sum,
            complete,
            empty: sum == 0,
            description: if sum == 0 { group.absent } else { group.present },
        }
    };
    let planes: Vec<GroupingReading> = PLANES.iter().map(&read).collect();
    let arrows: Vec<GroupingReading> = ARROWS.iter().map(&read).collect();

    let grid_visualization = LAYOUT
        .iter()
        .map(|row| {
            row.iter()
                .map(|&d| d.to_string().repeat(count(d) as usize))
                .collect()
        })
        .collect();

    let analysis = LoShuAnalysis {
        missing_numbers: missing.iter().map(|n| n.digit).collect(),
        repeated_numbers: repeated.iter().map(|n| n.digit).collect(),
        empty_planes: planes.iter().filter(|p| p.empty).map(|p| p.name).collect(),
        complete_arrows: arrows.iter().filter(|a| a.complete).map(|a| a.name).collect(),
        missing,
        repeated,
        planes,
        arrows,
    };

    Ok(LoShuGrid {
        grid,
        zero_count,
        digit_count,
        analysis,
        grid_visualization,
    })
}
