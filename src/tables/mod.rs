//! Static lookup tables keyed by graha, sign, nakshatra, house, number and
//! Vastu direction.
//!
//! [`lookup`] is the string-keyed entry point used by the HTTP layer. It never
//! fails; unknown categories or keys resolve to [`FALLBACK`].

mod houses;
mod nakshatras;
mod numbers;
mod planets;
mod signs;

pub use houses::{house_profile, HouseProfile};
pub use nakshatras::{nakshatra_profile, Gana, Nadi, NakshatraProfile, Yoni};
pub use numbers::{number_profile, NumberProfile};
pub use planets::{planet_profile, PlanetProfile};
pub use signs::{sign_profile, Element, Quality, SignProfile};

use crate::vastu::Direction;
use crate::{CelestialBody, House, Nakshatra, ZodiacSign};

pub const FALLBACK: &str = "No information available";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Category {
    Planet,
    Sign,
    Nakshatra,
    House,
    Number,
    Direction,
    Career,
    Traits,
    Gemstone,
    Color,
    Day,
    Remedy,
    Spouse,
    Deity,
    Symbol,
}

const ALL_CATEGORIES: [Category; 15] = [
    Category::Planet,
    Category::Sign,
    Category::Nakshatra,
    Category::House,
    Category::Number,
    Category::Direction,
    Category::Career,
    Category::Traits,
    Category::Gemstone,
    Category::Color,
    Category::Day,
    Category::Remedy,
    Category::Spouse,
    Category::Deity,
    Category::Symbol,
];

impl Category {
    pub const fn name(self) -> &'static str {
        match self {
            Category::Planet => "planet",
            Category::Sign => "sign",
            Category::Nakshatra => "nakshatra",
            Category::House => "house",
            Category::Number => "number",
            Category::Direction => "direction",
            Category::Career => "career",
            Category::Traits => "traits",
            Category::Gemstone => "gemstone",
            Category::Color => "color",
            Category::Day => "day",
            Category::Remedy => "remedy",
            Category::Spouse => "spouse",
            Category::Deity => "deity",
            Category::Symbol => "symbol",
        }
    }

    /// Singular or plural, any case. `"rashi"` and `"graha"` are accepted.
    pub fn from_name(name: &str) -> Option<Category> {
        let lowered = name.trim().to_ascii_lowercase();
        let singular = lowered.strip_suffix('s').unwrap_or(&lowered);
        match singular {
            "rashi" | "zodiac" => return Some(Category::Sign),
            "graha" => return Some(Category::Planet),
            "colour" => return Some(Category::Color),
            "trait" => return Some(Category::Traits),
            "remedie" => return Some(Category::Remedy),
            "deitie" => return Some(Category::Deity),
            _ => {}
        }
        ALL_CATEGORIES
            .iter()
            .copied()
            .find(|category| category.name() == singular || category.name() == lowered)
    }
}

/// A resolved lookup key.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Subject {
    Planet(CelestialBody),
    Sign(ZodiacSign),
    Nakshatra(Nakshatra),
    House(House),
    Number(u32),
    Direction(Direction),
}

fn subject_for(category: Category, key: &str) -> Option<Subject> {
    let key = key.trim();
    let number = key.parse::<u32>().ok();
    match category {
        Category::Planet | Category::Remedy => CelestialBody::from_name(key).map(Subject::Planet),
        Category::Sign | Category::Spouse => ZodiacSign::from_name(key).map(Subject::Sign),
        Category::Nakshatra | Category::Deity | Category::Symbol => {
            Nakshatra::from_name(key).map(Subject::Nakshatra)
        }
        Category::House => number
            .and_then(|n| House::from_index(n as usize))
            .map(Subject::House),
        Category::Number => number.filter(|n| number_profile(*n).is_some()).map(Subject::Number),
        Category::Direction => Direction::from_name(key).map(Subject::Direction),
        Category::Career | Category::Traits | Category::Gemstone | Category::Color | Category::Day => {
            number
                .filter(|n| number_profile(*n).is_some())
                .map(Subject::Number)
                .or_else(|| CelestialBody::from_name(key).map(Subject::Planet))
                .or_else(|| ZodiacSign::from_name(key).map(Subject::Sign))
                .or_else(|| Nakshatra::from_name(key).map(Subject::Nakshatra))
        }
    }
}

fn join(items: &[&str]) -> String {
    items.join(", ")
}

fn render(category: Category, subject: Subject) -> Option<String> {
    let text = match (category, subject) {
        (Category::Planet, Subject::Planet(body)) => {
            let profile = planet_profile(body);
            format!(
                "{} ({}) signifies {}.",
                body.name(),
                body.sanskrit_name(),
                join(profile.significations)
            )
        }
        (Category::Sign, Subject::Sign(sign)) => {
            let profile = sign_profile(sign);
            format!("{} ({}): {}", sign.name(), sign.vedic_name(), profile.description)
        }
        (Category::Nakshatra, Subject::Nakshatra(nakshatra)) => {
            let profile = nakshatra_profile(nakshatra);
            format!(
                "{} is ruled by {}, presided over by {} and symbolised by {}. Traits: {}.",
                nakshatra.name(),
                nakshatra.lord(),
                profile.deity,
                profile.symbol.to_ascii_lowercase(),
                join(profile.traits)
            )
        }
        (Category::House, Subject::House(house)) => house_profile(house).description.to_string(),
        (Category::Number, Subject::Number(n)) => number_profile(n)?.meaning.to_string(),
        (Category::Direction, Subject::Direction(direction)) => direction.description().to_string(),
        (Category::Remedy, Subject::Planet(body)) => {
            let profile = planet_profile(body);
            format!(
                "Chant \"{}\". {}. {}. Gemstone: {}.",
                profile.mantra, profile.charity, profile.practice, profile.gemstone
            )
        }
        (Category::Spouse, Subject::Sign(sign)) => join(sign_profile(sign).spouse_traits),
        (Category::Deity, Subject::Nakshatra(n)) => nakshatra_profile(n).deity.to_string(),
        (Category::Symbol, Subject::Nakshatra(n)) => nakshatra_profile(n).symbol.to_string(),

        (Category::Career, Subject::Number(n)) => join(number_profile(n)?.career_fields),
        (Category::Career, Subject::Planet(body)) => join(planet_profile(body).career_fields),
        (Category::Career, Subject::Sign(sign)) => join(sign_profile(sign).career_fields),

        (Category::Traits, Subject::Number(n)) => join(number_profile(n)?.traits),
        (Category::Traits, Subject::Planet(body)) => join(planet_profile(body).traits),
        (Category::Traits, Subject::Sign(sign)) => join(sign_profile(sign).traits),
        (Category::Traits, Subject::Nakshatra(n)) => join(nakshatra_profile(n).traits),

        (Category::Gemstone, Subject::Number(n)) => number_profile(n)?.lucky_gemstone.to_string(),
        (Category::Gemstone, Subject::Planet(body)) => planet_profile(body).gemstone.to_string(),
        (Category::Gemstone, Subject::Sign(sign)) => sign_profile(sign).lucky_gemstone.to_string(),

        (Category::Color, Subject::Number(n)) => number_profile(n)?.lucky_color.to_string(),
        (Category::Color, Subject::Planet(body)) => planet_profile(body).color.to_string(),
        (Category::Color, Subject::Sign(sign)) => sign_profile(sign).lucky_color.to_string(),

        (Category::Day, Subject::Number(n)) => number_profile(n)?.lucky_day.to_string(),
        (Category::Day, Subject::Planet(body)) => planet_profile(body).day.to_string(),
        (Category::Day, Subject::Sign(sign)) => sign_profile(sign).lucky_day.to_string(),

        _ => return None,
    };
    Some(text)
}

/// Resolve `key` within `category`, falling back to [`FALLBACK`].
pub fn lookup(category: &str, key: &str) -> String {
    Category::from_name(category)
        .and_then(|category| {
            let subject = subject_for(category, key)?;
            render(category, subject)
        })
        .unwrap_or_else(|| FALLBACK.to_string())
}
