use serde::Serialize;

use crate::ZodiacSign;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Quality {
    Movable,
    Fixed,
    Dual,
}

#[derive(Debug)]
pub struct SignProfile {
    pub element: Element,
    pub quality: Quality,
    pub description: &'static str,
    pub traits: &'static [&'static str],
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub career_fields: &'static [&'static str],
    pub spouse_traits: &'static [&'static str],
    pub lucky_color: &'static str,
    pub lucky_gemstone: &'static str,
    pub lucky_day: &'static str,
}

pub fn sign_profile(sign: ZodiacSign) -> &'static SignProfile {
    &SIGNS[sign.index()]
}

static SIGNS: [SignProfile; 12] = [
    // Aries
    SignProfile {
        element: Element::Fire,
        quality: Quality::Movable,
        description: "Pioneering and energetic, Aries leads from the front.",
        traits: &["bold", "enthusiastic", "independent", "competitive"],
        strengths: &["leadership", "initiative", "courage"],
        challenges: &["impatience", "impulsiveness", "quick temper"],
        career_fields: &["Entrepreneurship", "Defence", "Sports", "Surgery"],
        spouse_traits: &["energetic", "straightforward", "protective"],
        lucky_color: "Red",
        lucky_gemstone: "Red Coral",
        lucky_day: "Tuesday",
    },
    // Taurus
    SignProfile {
        element: Element::Earth,
        quality: Quality::Fixed,
        description: "Steady and sensual, Taurus builds lasting comfort.",
        traits: &["patient", "reliable", "practical", "devoted"],
        strengths: &["persistence", "financial sense", "loyalty"],
        challenges: &["stubbornness", "possessiveness", "resistance to change"],
        career_fields: &["Banking", "Agriculture", "Luxury Goods", "Music"],
        spouse_traits: &["loyal", "affectionate", "home-loving"],
        lucky_color: "White",
        lucky_gemstone: "Diamond",
        lucky_day: "Friday",
    },
    // Gemini
    SignProfile {
        element: Element::Air,
        quality: Quality::Dual,
        description: "Curious and quick-witted, Gemini lives through ideas.",
        traits: &["versatile", "communicative", "curious", "sociable"],
        strengths: &["adaptability", "wit", "networking"],
        challenges: &["restlessness", "indecision", "scattered focus"],
        career_fields: &["Journalism", "Marketing", "Teaching", "Sales"],
        spouse_traits: &["youthful", "talkative", "intelligent"],
        lucky_color: "Green",
        lucky_gemstone: "Emerald",
        lucky_day: "Wednesday",
    },
    // Cancer
    SignProfile {
        element: Element::Water,
        quality: Quality::Movable,
        description: "Caring and protective, Cancer nurtures home and family.",
        traits: &["nurturing", "emotional", "intuitive", "protective"],
        strengths: &["empathy", "loyalty", "memory"],
        challenges: &["moodiness", "over-sensitivity", "clinging to the past"],
        career_fields: &["Nursing", "Hospitality", "Real Estate", "Catering"],
        spouse_traits: &["caring", "family-oriented", "sensitive"],
        lucky_color: "Silver",
        lucky_gemstone: "Pearl",
        lucky_day: "Monday",
    },
    // Leo
    SignProfile {
        element: Element::Fire,
        quality: Quality::Fixed,
        description: "Radiant and generous, Leo seeks to shine and to lead.",
        traits: &["confident", "generous", "creative", "dramatic"],
        strengths: &["charisma", "loyalty", "leadership"],
        challenges: &["pride", "need for attention", "stubbornness"],
        career_fields: &["Politics", "Management", "Entertainment", "Administration"],
        spouse_traits: &["dignified", "warm-hearted", "proud"],
        lucky_color: "Gold",
        lucky_gemstone: "Ruby",
        lucky_day: "Sunday",
    },
    // Virgo
    SignProfile {
        element: Element::Earth,
        quality: Quality::Dual,
        description: "Precise and helpful, Virgo perfects everything it touches.",
        traits: &["analytical", "modest", "diligent", "practical"],
        strengths: &["attention to detail", "service", "organisation"],
        challenges: &["over-criticism", "worry", "perfectionism"],
        career_fields: &["Accounting", "Healthcare", "Editing", "Data Analysis"],
        spouse_traits: &["practical", "helpful", "intelligent"],
        lucky_color: "Green",
        lucky_gemstone: "Emerald",
        lucky_day: "Wednesday",
    },
    // Libra
    SignProfile {
        element: Element::Air,
        quality: Quality::Movable,
        description: "Harmonious and fair, Libra seeks balance in every bond.",
        traits: &["diplomatic", "charming", "fair-minded", "social"],
        strengths: &["partnership", "aesthetics", "negotiation"],
        challenges: &["indecision", "people-pleasing", "avoiding conflict"],
        career_fields: &["Law", "Design", "Diplomacy", "Fashion"],
        spouse_traits: &["attractive", "refined", "balanced"],
        lucky_color: "Light Blue",
        lucky_gemstone: "Diamond",
        lucky_day: "Friday",
    },
    // Scorpio
    SignProfile {
        element: Element::Water,
        quality: Quality::Fixed,
        description: "Intense and perceptive, Scorpio transforms through depth.",
        traits: &["passionate", "determined", "secretive", "perceptive"],
        strengths: &["focus", "resilience", "investigation"],
        challenges: &["jealousy", "suspicion", "holding grudges"],
        career_fields: &["Research", "Investigation", "Surgery", "Insurance"],
        spouse_traits: &["intense", "devoted", "private"],
        lucky_color: "Maroon",
        lucky_gemstone: "Red Coral",
        lucky_day: "Tuesday",
    },
    // Sagittarius
    SignProfile {
        element: Element::Fire,
        quality: Quality::Dual,
        description: "Optimistic and philosophical, Sagittarius seeks higher truth.",
        traits: &["optimistic", "adventurous", "honest", "philosophical"],
        strengths: &["vision", "generosity", "teaching"],
        challenges: &["bluntness", "restlessness", "over-promising"],
        career_fields: &["Teaching", "Law", "Travel", "Publishing"],
        spouse_traits: &["cheerful", "principled", "freedom-loving"],
        lucky_color: "Yellow",
        lucky_gemstone: "Yellow Sapphire",
        lucky_day: "Thursday",
    },
    // Capricorn
    SignProfile {
        element: Element::Earth,
        quality: Quality::Movable,
        description: "Ambitious and disciplined, Capricorn climbs steadily.",
        traits: &["ambitious", "disciplined", "responsible", "reserved"],
        strengths: &["patience", "planning", "endurance"],
        challenges: &["pessimism", "rigidity", "workaholism"],
        career_fields: &["Administration", "Engineering", "Finance", "Construction"],
        spouse_traits: &["mature", "dependable", "serious"],
        lucky_color: "Dark Blue",
        lucky_gemstone: "Blue Sapphire",
        lucky_day: "Saturday",
    },
    // Aquarius
    SignProfile {
        element: Element::Air,
        quality: Quality::Fixed,
        description: "Original and humanitarian, Aquarius thinks about the collective.",
        traits: &["innovative", "independent", "humanitarian", "detached"],
        strengths: &["originality", "vision", "friendship"],
        challenges: &["aloofness", "contrariness", "unpredictability"],
        career_fields: &["Technology", "Science", "Social Work", "Aviation"],
        spouse_traits: &["friendly", "unconventional", "intellectual"],
        lucky_color: "Electric Blue",
        lucky_gemstone: "Blue Sapphire",
        lucky_day: "Saturday",
    },
    // Pisces
    SignProfile {
        element: Element::Water,
        quality: Quality::Dual,
        description: "Compassionate and dreamy, Pisces dissolves boundaries.",
        traits: &["compassionate", "artistic", "intuitive", "gentle"],
        strengths: &["empathy", "imagination", "spirituality"],
        challenges: &["escapism", "over-trust", "indecision"],
        career_fields: &["Arts", "Healing", "Spiritual Work", "Marine Industry"],
        spouse_traits: &["gentle", "romantic", "understanding"],
        lucky_color: "Sea Green",
        lucky_gemstone: "Yellow Sapphire",
        lucky_day: "Thursday",
    },
];
