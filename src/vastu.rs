//! Vastu compliance scoring.
//!
//! A property starts at 100 and loses points for each unfavourable
//! placement. Commercial premises facing North or East win a small bonus back.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::error::{AstrologyError, Result};
use crate::scoring::Scorecard;

const MAX_RECOMMENDATIONS: usize = 10;

// ---------------------------
// ## Directions
// ---------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

pub const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::North,
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
    Direction::South,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
];

impl Direction {
    pub const fn name(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::NorthEast => "North-East",
            Direction::East => "East",
            Direction::SouthEast => "South-East",
            Direction::South => "South",
            Direction::SouthWest => "South-West",
            Direction::West => "West",
            Direction::NorthWest => "North-West",
        }
    }

    pub const fn abbreviation(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
        }
    }

    /// Accepts `"north-east"`, `"North East"`, `"northeast"` or `"NE"`.
    pub fn from_name(name: &str) -> Option<Direction> {
        let compact: String = name
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect();
        ALL_DIRECTIONS.iter().copied().find(|direction| {
            let full: String = direction.name().chars().filter(|c| *c != '-').collect();
            full.eq_ignore_ascii_case(&compact)
                || direction.abbreviation().eq_ignore_ascii_case(&compact)
        })
    }

    pub const fn description(self) -> &'static str {
        match self {
            Direction::North => "Zone of wealth and opportunity; keep it open and light.",
            Direction::NorthEast => "The most sacred zone; ideal for prayer, water and open space.",
            Direction::East => "Zone of health and social connection; welcomes morning sunlight.",
            Direction::SouthEast => "Zone of fire; suited to the kitchen and electrical equipment.",
            Direction::South => "Zone of rest and fame; best kept heavy and closed.",
            Direction::SouthWest => "Zone of stability; ideal for the master bedroom and heavy storage.",
            Direction::West => "Zone of gains and children; good for dining and study.",
            Direction::NorthWest => "Zone of movement; suited to guests, garages and toilets.",
        }
    }
}

impl TryFrom<String> for Direction {
    type Error = AstrologyError;

    fn try_from(value: String) -> Result<Self> {
        Direction::from_name(&value)
            .ok_or_else(|| AstrologyError::invalid(format!("unknown direction '{value}'")))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

// ---------------------------
// ## Rooms & Plot
// ---------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RoomType {
    Kitchen,
    MasterBedroom,
    Bedroom,
    LivingRoom,
    PoojaRoom,
    Toilet,
    Bathroom,
    Study,
    DiningRoom,
    Staircase,
    Storage,
    Garage,
}

const ALL_ROOMS: [RoomType; 12] = [
    RoomType::Kitchen,
    RoomType::MasterBedroom,
    RoomType::Bedroom,
    RoomType::LivingRoom,
    RoomType::PoojaRoom,
    RoomType::Toilet,
    RoomType::Bathroom,
    RoomType::Study,
    RoomType::DiningRoom,
    RoomType::Staircase,
    RoomType::Storage,
    RoomType::Garage,
];

/// How well a room sits in a direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Placement {
    Ideal,
    Acceptable,
    Avoid,
}

impl RoomType {
    pub const fn name(self) -> &'static str {
        match self {
            RoomType::Kitchen => "Kitchen",
            RoomType::MasterBedroom => "Master Bedroom",
            RoomType::Bedroom => "Bedroom",
            RoomType::LivingRoom => "Living Room",
            RoomType::PoojaRoom => "Pooja Room",
            RoomType::Toilet => "Toilet",
            RoomType::Bathroom => "Bathroom",
            RoomType::Study => "Study",
            RoomType::DiningRoom => "Dining Room",
            RoomType::Staircase => "Staircase",
            RoomType::Storage => "Storage",
            RoomType::Garage => "Garage",
        }
    }

    /// Loose matching: `"master_bedroom"`, `"Master Bedroom"` and
    /// `"masterBedroom"` are the same room. `"puja"`, `"temple"` and
    /// `"washroom"` are common aliases.
    pub fn from_name(name: &str) -> Option<RoomType> {
        let compact: String = name
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect::<String>()
            .to_ascii_lowercase();
        let alias = match compact.as_str() {
            "puja" | "pujaroom" | "pooja" | "temple" | "prayerroom" => Some(RoomType::PoojaRoom),
            "washroom" | "wc" | "restroom" => Some(RoomType::Toilet),
            "living" | "hall" | "drawingroom" => Some(RoomType::LivingRoom),
            "stairs" => Some(RoomType::Staircase),
            "storeroom" | "store" => Some(RoomType::Storage),
            "office" | "studyroom" => Some(RoomType::Study),
            _ => None,
        };
        alias.or_else(|| {
            ALL_ROOMS.iter().copied().find(|room| {
                let full: String = room.name().chars().filter(|c| *c != ' ').collect();
                full.eq_ignore_ascii_case(&compact)
            })
        })
    }

    fn ideal(self) -> &'static [Direction] {
        use Direction::*;
        match self {
            RoomType::Kitchen => &[SouthEast],
            RoomType::MasterBedroom => &[SouthWest],
            RoomType::Bedroom => &[West, South],
            RoomType::LivingRoom => &[North, NorthEast, East],
            RoomType::PoojaRoom => &[NorthEast],
            RoomType::Toilet => &[NorthWest, West],
            RoomType::Bathroom => &[East, NorthWest],
            RoomType::Study => &[NorthEast, East, North],
            RoomType::DiningRoom => &[West, East],
            RoomType::Staircase => &[South, SouthWest, West],
            RoomType::Storage => &[SouthWest, South],
            RoomType::Garage => &[NorthWest, SouthEast],
        }
    }

    fn avoid(self) -> &'static [Direction] {
        use Direction::*;
        match self {
            RoomType::Kitchen => &[NorthEast, SouthWest, North],
            RoomType::MasterBedroom => &[NorthEast, SouthEast],
            RoomType::Bedroom => &[NorthEast, SouthEast],
            RoomType::LivingRoom => &[SouthWest],
            RoomType::PoojaRoom => &[South, SouthWest, SouthEast],
            RoomType::Toilet => &[NorthEast, SouthWest, North],
            RoomType::Bathroom => &[NorthEast, SouthWest],
            RoomType::Study => &[SouthWest, South],
            RoomType::DiningRoom => &[SouthWest],
            RoomType::Staircase => &[NorthEast, North, East],
            RoomType::Storage => &[NorthEast],
            RoomType::Garage => &[NorthEast, SouthWest],
        }
    }

    pub fn placement(self, direction: Direction) -> Placement {
        if self.ideal().contains(&direction) {
            Placement::Ideal
        } else if self.avoid().contains(&direction) {
            Placement::Avoid
        } else {
            Placement::Acceptable
        }
    }

    fn penalty(self, direction: Direction) -> i32 {
        match (self, self.placement(direction)) {
            (RoomType::Kitchen | RoomType::Toilet, _) if direction == Direction::NorthEast => -15,
            (_, Placement::Ideal) => 0,
            (_, Placement::Acceptable) => -3,
            (_, Placement::Avoid) => -10,
        }
    }

    fn best_direction(self) -> Direction {
        self.ideal()[0]
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum PlotShape {
    Square,
    Rectangle,
    LShaped,
    Irregular,
    Triangular,
}

impl PlotShape {
    pub const fn name(self) -> &'static str {
        match self {
            PlotShape::Square => "Square",
            PlotShape::Rectangle => "Rectangle",
            PlotShape::LShaped => "L-Shaped",
            PlotShape::Irregular => "Irregular",
            PlotShape::Triangular => "Triangular",
        }
    }

    const fn penalty(self) -> i32 {
        match self {
            PlotShape::Square | PlotShape::Rectangle => 0,
            PlotShape::LShaped => -10,
            PlotShape::Irregular => -15,
            PlotShape::Triangular => -20,
        }
    }
}

impl TryFrom<String> for PlotShape {
    type Error = AstrologyError;

    fn try_from(value: String) -> Result<Self> {
        let compact: String = value
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect::<String>()
            .to_ascii_lowercase();
        match compact.as_str() {
            "square" => Ok(PlotShape::Square),
            "rectangle" | "rectangular" => Ok(PlotShape::Rectangle),
            "lshaped" | "lshape" | "l" => Ok(PlotShape::LShaped),
            "irregular" => Ok(PlotShape::Irregular),
            "triangle" | "triangular" => Ok(PlotShape::Triangular),
            _ => Err(AstrologyError::invalid(format!("unknown plot shape '{value}'"))),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum PropertyType {
    #[default]
    Residential,
    Commercial,
    Industrial,
}

impl TryFrom<String> for PropertyType {
    type Error = AstrologyError;

    fn try_from(value: String) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "residential" => Ok(PropertyType::Residential),
            "commercial" => Ok(PropertyType::Commercial),
            "industrial" => Ok(PropertyType::Industrial),
            _ => Err(AstrologyError::invalid(format!("unknown property type '{value}'"))),
        }
    }
}

// ---------------------------
// ## Input
// ---------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomInput {
    pub room_type: String,
    pub direction: Direction,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotInput {
    pub shape: PlotShape,
    #[serde(default)]
    pub slope: Option<Direction>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VastuInput {
    pub facing_direction: Direction,
    pub main_entrance: Direction,
    #[serde(default)]
    pub rooms: Vec<RoomInput>,
    pub plot: PlotInput,
    #[serde(default)]
    pub property_type: PropertyType,
}

// ---------------------------
// ## Report
// ---------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaAnalysis {
    pub area: String,
    pub value: String,
    pub delta: i32,
    pub assessment: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomAnalysis {
    pub room_type: String,
    pub direction: Direction,
    pub placement: Option<Placement>,
    pub delta: i32,
    pub ideal_directions: Vec<Direction>,
    pub assessment: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VastuReport {
    pub compliance: Scorecard,
    pub facing: AreaAnalysis,
    pub entrance: AreaAnalysis,
    pub rooms: Vec<RoomAnalysis>,
    pub plot: AreaAnalysis,
    pub recommendations: Vec<String>,
    pub remedies: Vec<String>,
}

fn facing_penalty(direction: Direction) -> i32 {
    match direction {
        Direction::South | Direction::SouthWest => -10,
        Direction::West | Direction::NorthWest | Direction::SouthEast => -5,
        Direction::North | Direction::NorthEast | Direction::East => 0,
    }
}

fn entrance_penalty(direction: Direction) -> i32 {
    match direction {
        Direction::SouthWest => -15,
        Direction::South => -10,
        Direction::SouthEast | Direction::West | Direction::NorthWest => -5,
        Direction::North | Direction::NorthEast | Direction::East => 0,
    }
}

fn assessment(delta: i32) -> &'static str {
    if delta >= 0 {
        "Favourable"
    } else if delta >= -5 {
        "Acceptable with minor corrections"
    } else if delta >= -10 {
        "Unfavourable"
    } else {
        "Strongly unfavourable"
    }
}

fn remedy_for(direction: Direction) -> &'static str {
    match direction {
        Direction::North => "Place a water feature or aquarium in the North zone",
        Direction::NorthEast => "Keep the North-East clutter-free and light a lamp there daily",
        Direction::East => "Hang a sun symbol or copper plate on the East wall",
        Direction::SouthEast => "Place a red lamp or candle in the South-East corner",
        Direction::South => "Install a Hanuman idol or heavy red-toned artwork facing South",
        Direction::SouthWest => "Place lead or brass pyramids and heavy furniture in the South-West",
        Direction::West => "Fix a metal wind chime or Varuna yantra on the West side",
        Direction::NorthWest => "Hang a six-rod metal wind chime in the North-West",
    }
}

fn push_unique(list: &mut Vec<String>, item: String) {
    if !list.contains(&item) {
        list.push(item);
    }
}

/// Score a property and collect recommendations and remedies.
pub fn analyze(input: &VastuInput) -> VastuReport {
    let mut compliance = Scorecard::new(100);
    let mut recommendations: Vec<String> = Vec::new();
    let mut remedies: Vec<String> = Vec::new();

    let facing_delta = facing_penalty(input.facing_direction);
    compliance.adjust_if(
        facing_delta != 0,
        format!("{}-facing property", input.facing_direction),
        facing_delta,
    );
    if facing_delta != 0 {
        recommendations.push(format!(
            "A {}-facing property benefits from a raised threshold and a bright, well-lit facade.",
            input.facing_direction
        ));
        push_unique(&mut remedies, remedy_for(input.facing_direction).to_string());
    }
    let facing = AreaAnalysis {
        area: "Facing direction".to_string(),
        value: input.facing_direction.name().to_string(),
        delta: facing_delta,
        assessment: assessment(facing_delta).to_string(),
    };

    let entrance_delta = entrance_penalty(input.main_entrance);
    compliance.adjust_if(
        entrance_delta != 0,
        format!("Main entrance in the {}", input.main_entrance),
        entrance_delta,
    );
    if entrance_delta != 0 {
        recommendations.push(format!(
            "The {} entrance should carry a Swastik or Om symbol and a threshold strip; \
             North, North-East or East entrances are preferred.",
            input.main_entrance
        ));
        push_unique(
            &mut remedies,
            format!("Fix a Vastu pyramid above the {} entrance door", input.main_entrance),
        );
    }
    let entrance = AreaAnalysis {
        area: "Main entrance".to_string(),
        value: input.main_entrance.name().to_string(),
        delta: entrance_delta,
        assessment: assessment(entrance_delta).to_string(),
    };

    let rooms: Vec<RoomAnalysis> = input
        .rooms
        .iter()
        .map(|room| {
            let Some(room_type) = RoomType::from_name(&room.room_type) else {
                return RoomAnalysis {
                    room_type: room.room_type.clone(),
                    direction: room.direction,
                    placement: None,
                    delta: 0,
                    ideal_directions: Vec::new(),
                    assessment: "No specific Vastu guidance for this room".to_string(),
                };
            };
            let delta = room_type.penalty(room.direction);
            let placement = room_type.placement(room.direction);
            compliance.adjust_if(
                delta != 0,
                format!("{} in the {}", room_type.name(), room.direction),
                delta,
            );
            if placement == Placement::Avoid || delta <= -10 {
                recommendations.push(format!(
                    "Move the {} from the {} to the {} if possible.",
                    room_type.name(),
                    room.direction,
                    room_type.best_direction()
                ));
                push_unique(&mut remedies, remedy_for(room.direction).to_string());
            }
            RoomAnalysis {
                room_type: room_type.name().to_string(),
                direction: room.direction,
                placement: Some(placement),
                delta,
                ideal_directions: room_type.ideal().to_vec(),
                assessment: assessment(delta).to_string(),
            }
        })
        .collect();

    let shape_delta = input.plot.shape.penalty();
    compliance.adjust_if(
        shape_delta != 0,
        format!("{} plot", input.plot.shape.name()),
        shape_delta,
    );
    if shape_delta != 0 {
        recommendations.push(format!(
            "Square off the {} plot with fencing or landscaping so the usable area is regular.",
            input.plot.shape.name().to_ascii_lowercase()
        ));
        push_unique(
            &mut remedies,
            "Place Vastu pyramids at the missing corners of the plot".to_string(),
        );
    }
    let mut plot_delta = shape_delta;
    if let Some(slope) = input.plot.slope {
        if matches!(slope, Direction::South | Direction::West | Direction::SouthWest) {
            compliance.adjust(format!("Plot slopes towards the {slope}"), -10);
            plot_delta -= 10;
            recommendations.push(
                "Raise the South and West side of the plot so water drains to the North-East."
                    .to_string(),
            );
        }
    }
    let plot = AreaAnalysis {
        area: "Plot".to_string(),
        value: match input.plot.slope {
            Some(slope) => format!("{}, sloping {}", input.plot.shape.name(), slope),
            None => input.plot.shape.name().to_string(),
        },
        delta: plot_delta,
        assessment: assessment(plot_delta).to_string(),
    };

    compliance.adjust_if(
        input.property_type == PropertyType::Commercial
            && matches!(input.facing_direction, Direction::North | Direction::East),
        format!("Commercial property facing {}", input.facing_direction),
        5,
    );

    if recommendations.is_empty() {
        recommendations.push("The layout follows Vastu principles; keep the centre of the home open.".to_string());
    }
    recommendations.truncate(MAX_RECOMMENDATIONS);

    tracing::debug!(
        score = compliance.score(),
        adjustments = compliance.adjustments().len(),
        "vastu analysis complete"
    );

    VastuReport {
        compliance,
        facing,
        entrance,
        rooms,
        plot,
        recommendations,
        remedies,
    }
}
