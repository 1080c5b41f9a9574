use crate::CelestialBody;

#[derive(Debug)]
pub struct NumberProfile {
    pub number: u32,
    pub planet: CelestialBody,
    pub title: &'static str,
    pub description: &'static str,
    pub meaning: &'static str,
    pub traits: &'static [&'static str],
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub career_fields: &'static [&'static str],
    pub relationships: &'static str,
    pub lucky_color: &'static str,
    pub lucky_gemstone: &'static str,
    pub lucky_day: &'static str,
    pub lucky_numbers: &'static [u32],
}

/// Profile for a reduced number. Anything outside 1-9, 11, 22 and 33 has none.
pub fn number_profile(number: u32) -> Option<&'static NumberProfile> {
    NUMBERS.iter().find(|profile| profile.number == number)
}

static NUMBERS: [NumberProfile; 12] = [
    NumberProfile {
        number: 1,
        planet: CelestialBody::Sun,
        title: "The Leader",
        description: "Number 1 is ruled by the Sun and carries the energy of beginnings.",
        meaning: "Independent, original and driven to lead. You are happiest when setting the direction for others.",
        traits: &["independent", "ambitious", "determined", "pioneering"],
        strengths: &["leadership", "self-motivation", "courage"],
        challenges: &["stubbornness", "impatience", "ego clashes"],
        career_fields: &["Management", "Entrepreneurship", "Government Service", "Politics"],
        relationships: "Needs a partner who respects independence and shares big goals.",
        lucky_color: "Gold",
        lucky_gemstone: "Ruby",
        lucky_day: "Sunday",
        lucky_numbers: &[1, 10, 19, 28],
    },
    NumberProfile {
        number: 2,
        planet: CelestialBody::Moon,
        title: "The Peacemaker",
        description: "Number 2 is ruled by the Moon and carries the energy of partnership.",
        meaning: "Gentle, intuitive and cooperative. You bring harmony and see every side of a question.",
        traits: &["diplomatic", "sensitive", "caring", "intuitive"],
        strengths: &["cooperation", "empathy", "patience"],
        challenges: &["indecision", "over-sensitivity", "dependence on approval"],
        career_fields: &["Counselling", "Nursing", "Diplomacy", "Hospitality"],
        relationships: "Devoted and romantic; thrives with emotional security.",
        lucky_color: "White",
        lucky_gemstone: "Pearl",
        lucky_day: "Monday",
        lucky_numbers: &[2, 11, 20, 29],
    },
    NumberProfile {
        number: 3,
        planet: CelestialBody::Jupiter,
        title: "The Communicator",
        description: "Number 3 is ruled by Jupiter and carries the energy of expansion.",
        meaning: "Creative, expressive and optimistic. Knowledge and self-expression open doors for you.",
        traits: &["creative", "optimistic", "expressive", "disciplined"],
        strengths: &["communication", "wisdom", "enthusiasm"],
        challenges: &["scattered energy", "over-confidence", "bossiness"],
        career_fields: &["Teaching", "Writing", "Law", "Finance and Banking"],
        relationships: "Warm and sociable; needs intellectual companionship.",
        lucky_color: "Yellow",
        lucky_gemstone: "Yellow Sapphire",
        lucky_day: "Thursday",
        lucky_numbers: &[3, 12, 21, 30],
    },
    NumberProfile {
        number: 4,
        planet: CelestialBody::Rahu,
        title: "The Builder",
        description: "Number 4 is ruled by Rahu and carries the energy of structure and surprise.",
        meaning: "Practical, hard-working and unconventional. You build solid foundations in unexpected ways.",
        traits: &["methodical", "loyal", "unconventional", "hard-working"],
        strengths: &["organisation", "reliability", "persistence"],
        challenges: &["rigidity", "sudden changes", "rebelliousness"],
        career_fields: &["Engineering", "Technology", "Research", "Construction"],
        relationships: "Steady and loyal once committed; slow to open up.",
        lucky_color: "Blue",
        lucky_gemstone: "Hessonite",
        lucky_day: "Saturday",
        lucky_numbers: &[4, 13, 22, 31],
    },
    NumberProfile {
        number: 5,
        planet: CelestialBody::Mercury,
        title: "The Adventurer",
        description: "Number 5 is ruled by Mercury and carries the energy of change.",
        meaning: "Quick, adaptable and curious. Variety, travel and trade bring out your best.",
        traits: &["versatile", "witty", "adventurous", "restless"],
        strengths: &["adaptability", "business sense", "communication"],
        challenges: &["impatience", "inconsistency", "nervous energy"],
        career_fields: &["Sales and Marketing", "Travel", "Media", "Trade and Commerce"],
        relationships: "Needs freedom and stimulation in a partnership.",
        lucky_color: "Green",
        lucky_gemstone: "Emerald",
        lucky_day: "Wednesday",
        lucky_numbers: &[5, 14, 23],
    },
    NumberProfile {
        number: 6,
        planet: CelestialBody::Venus,
        title: "The Nurturer",
        description: "Number 6 is ruled by Venus and carries the energy of love and beauty.",
        meaning: "Responsible, artistic and family-minded. You create comfort and harmony around you.",
        traits: &["loving", "artistic", "responsible", "charming"],
        strengths: &["care for others", "aesthetic sense", "loyalty"],
        challenges: &["possessiveness", "self-indulgence", "worry"],
        career_fields: &["Arts and Design", "Fashion", "Hospitality", "Healthcare"],
        relationships: "Deeply devoted; home and family come first.",
        lucky_color: "Pink",
        lucky_gemstone: "Diamond",
        lucky_day: "Friday",
        lucky_numbers: &[6, 15, 24],
    },
    NumberProfile {
        number: 7,
        planet: CelestialBody::Ketu,
        title: "The Seeker",
        description: "Number 7 is ruled by Ketu and carries the energy of inner wisdom.",
        meaning: "Analytical, spiritual and reflective. You look beneath the surface for truth.",
        traits: &["introspective", "intuitive", "analytical", "private"],
        strengths: &["research", "insight", "spiritual depth"],
        challenges: &["isolation", "scepticism", "restlessness"],
        career_fields: &["Research", "Spirituality", "Science", "Healing"],
        relationships: "Needs space and a partner who understands solitude.",
        lucky_color: "Grey",
        lucky_gemstone: "Cat's Eye",
        lucky_day: "Monday",
        lucky_numbers: &[7, 16, 25],
    },
    NumberProfile {
        number: 8,
        planet: CelestialBody::Saturn,
        title: "The Achiever",
        description: "Number 8 is ruled by Saturn and carries the energy of karma and endurance.",
        meaning: "Ambitious, disciplined and resilient. Success arrives through patience and effort.",
        traits: &["disciplined", "ambitious", "practical", "serious"],
        strengths: &["endurance", "management", "financial acumen"],
        challenges: &["delays", "pessimism", "workaholism"],
        career_fields: &["Law and Judiciary", "Finance", "Mining and Oil", "Administration"],
        relationships: "Loyal and protective but can seem reserved.",
        lucky_color: "Dark Blue",
        lucky_gemstone: "Blue Sapphire",
        lucky_day: "Saturday",
        lucky_numbers: &[8, 17, 26],
    },
    NumberProfile {
        number: 9,
        planet: CelestialBody::Mars,
        title: "The Warrior",
        description: "Number 9 is ruled by Mars and carries the energy of courage and completion.",
        meaning: "Energetic, compassionate and brave. You fight for causes larger than yourself.",
        traits: &["courageous", "humanitarian", "energetic", "passionate"],
        strengths: &["courage", "generosity", "leadership under pressure"],
        challenges: &["anger", "impulsiveness", "conflict"],
        career_fields: &["Defence and Police", "Surgery", "Sports", "Social Work"],
        relationships: "Passionate and protective; needs a partner with patience.",
        lucky_color: "Red",
        lucky_gemstone: "Red Coral",
        lucky_day: "Tuesday",
        lucky_numbers: &[9, 18, 27],
    },
    NumberProfile {
        number: 11,
        planet: CelestialBody::Moon,
        title: "The Illuminator",
        description: "Master number 11 amplifies the intuition of the Moon.",
        meaning: "Visionary and inspired. You carry heightened intuition and the duty to uplift others.",
        traits: &["visionary", "intuitive", "idealistic", "inspiring"],
        strengths: &["insight", "spiritual awareness", "inspiration"],
        challenges: &["nervous tension", "self-doubt", "impracticality"],
        career_fields: &["Spiritual Guidance", "Counselling", "Arts", "Teaching"],
        relationships: "Seeks a soul-level bond built on understanding.",
        lucky_color: "Silver",
        lucky_gemstone: "Pearl",
        lucky_day: "Monday",
        lucky_numbers: &[2, 11, 29],
    },
    NumberProfile {
        number: 22,
        planet: CelestialBody::Rahu,
        title: "The Master Builder",
        description: "Master number 22 turns large visions into lasting structures.",
        meaning: "Practical visionary. You can build institutions that outlive you.",
        traits: &["visionary", "practical", "disciplined", "powerful"],
        strengths: &["large-scale planning", "execution", "leadership"],
        challenges: &["pressure", "over-work", "unrealistic expectations"],
        career_fields: &["Architecture", "Engineering", "Public Administration", "Entrepreneurship"],
        relationships: "Committed and supportive; needs a partner who shares the mission.",
        lucky_color: "Blue",
        lucky_gemstone: "Hessonite",
        lucky_day: "Saturday",
        lucky_numbers: &[4, 13, 22],
    },
    NumberProfile {
        number: 33,
        planet: CelestialBody::Jupiter,
        title: "The Master Teacher",
        description: "Master number 33 carries the compassion of the teacher and healer.",
        meaning: "Selfless and nurturing. You guide others through love and example.",
        traits: &["compassionate", "wise", "nurturing", "selfless"],
        strengths: &["healing", "teaching", "devotion"],
        challenges: &["martyrdom", "burnout", "over-responsibility"],
        career_fields: &["Teaching", "Healing", "Social Work", "Spiritual Guidance"],
        relationships: "Gives generously; must learn to receive as well.",
        lucky_color: "Yellow",
        lucky_gemstone: "Yellow Sapphire",
        lucky_day: "Thursday",
        lucky_numbers: &[3, 6, 33],
    },
];
