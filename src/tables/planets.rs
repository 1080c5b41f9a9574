use crate::CelestialBody;

#[derive(Debug)]
pub struct PlanetProfile {
    pub significations: &'static [&'static str],
    pub career_fields: &'static [&'static str],
    pub traits: &'static [&'static str],
    pub gemstone: &'static str,
    pub color: &'static str,
    pub day: &'static str,
    pub mantra: &'static str,
    pub charity: &'static str,
    pub practice: &'static str,
    pub strong: &'static str,
    pub weak: &'static str,
}

pub fn planet_profile(body: CelestialBody) -> &'static PlanetProfile {
    &PLANETS[body.index()]
}

static PLANETS: [PlanetProfile; 9] = [
    // Sun
    PlanetProfile {
        significations: &["soul", "authority", "father", "vitality", "government"],
        career_fields: &[
            "Government Service",
            "Administration",
            "Politics",
            "Medicine",
            "Management",
        ],
        traits: &["confident", "dignified", "generous", "proud"],
        gemstone: "Ruby",
        color: "Orange",
        day: "Sunday",
        mantra: "Om Suryaya Namah",
        charity: "Donate wheat and jaggery on Sundays",
        practice: "Offer water to the rising Sun every morning",
        strong: "A strong Sun gives natural authority and recognition from superiors.",
        weak: "A weak Sun can bring self-doubt and friction with authority figures.",
    },
    // Moon
    PlanetProfile {
        significations: &["mind", "emotions", "mother", "public", "nourishment"],
        career_fields: &[
            "Hospitality",
            "Nursing",
            "Public Relations",
            "Dairy and Food Industry",
            "Psychology",
        ],
        traits: &["nurturing", "intuitive", "sensitive", "imaginative"],
        gemstone: "Pearl",
        color: "White",
        day: "Monday",
        mantra: "Om Chandraya Namah",
        charity: "Donate rice, milk or white cloth on Mondays",
        practice: "Wear white clothes on Mondays and respect your mother",
        strong: "A strong Moon gives emotional steadiness and popularity with people.",
        weak: "A weak Moon brings mood swings and restless thinking.",
    },
    // Mars
    PlanetProfile {
        significations: &["courage", "energy", "siblings", "land", "competition"],
        career_fields: &[
            "Defence and Police",
            "Engineering",
            "Surgery",
            "Sports",
            "Real Estate",
        ],
        traits: &["courageous", "energetic", "direct", "impatient"],
        gemstone: "Red Coral",
        color: "Red",
        day: "Tuesday",
        mantra: "Om Mangalaya Namah",
        charity: "Donate red lentils on Tuesdays",
        practice: "Recite Hanuman Chalisa on Tuesdays",
        strong: "A strong Mars gives drive, courage and the will to win.",
        weak: "A weak Mars can show up as anger, accidents or low stamina.",
    },
    // Mercury
    PlanetProfile {
        significations: &["intellect", "speech", "commerce", "writing", "analysis"],
        career_fields: &[
            "Accounting",
            "Writing and Journalism",
            "Information Technology",
            "Trade and Commerce",
            "Teaching",
        ],
        traits: &["witty", "analytical", "adaptable", "communicative"],
        gemstone: "Emerald",
        color: "Green",
        day: "Wednesday",
        mantra: "Om Budhaya Namah",
        charity: "Feed green vegetables to cows on Wednesdays",
        practice: "Chant Vishnu Sahasranama on Wednesdays",
        strong: "A strong Mercury gives sharp intellect and persuasive speech.",
        weak: "A weak Mercury can bring nervousness and poor decisions in trade.",
    },
    // Jupiter
    PlanetProfile {
        significations: &["wisdom", "children", "wealth", "teachers", "dharma"],
        career_fields: &[
            "Teaching and Academia",
            "Law",
            "Finance and Banking",
            "Counselling",
            "Spiritual Guidance",
        ],
        traits: &["wise", "optimistic", "ethical", "generous"],
        gemstone: "Yellow Sapphire",
        color: "Yellow",
        day: "Thursday",
        mantra: "Om Gurave Namah",
        charity: "Donate yellow items and turmeric on Thursdays",
        practice: "Respect teachers and elders, and fast on Thursdays",
        strong: "A strong Jupiter gives good judgement, blessings and steady growth.",
        weak: "A weak Jupiter can delay recognition and make guidance hard to find.",
    },
    // Venus
    PlanetProfile {
        significations: &["love", "marriage", "luxury", "arts", "beauty"],
        career_fields: &[
            "Arts and Entertainment",
            "Fashion and Design",
            "Luxury Goods",
            "Hospitality",
            "Beauty and Wellness",
        ],
        traits: &["charming", "artistic", "diplomatic", "pleasure-seeking"],
        gemstone: "Diamond",
        color: "White",
        day: "Friday",
        mantra: "Om Shukraya Namah",
        charity: "Donate white sweets or perfume on Fridays",
        practice: "Offer white flowers at a temple on Fridays",
        strong: "A strong Venus gives charm, comfort and harmony in relationships.",
        weak: "A weak Venus can bring dissatisfaction in love and overspending.",
    },
    // Saturn
    PlanetProfile {
        significations: &["discipline", "longevity", "labour", "delay", "justice"],
        career_fields: &[
            "Mining and Oil",
            "Construction",
            "Law and Judiciary",
            "Agriculture",
            "Research",
        ],
        traits: &["disciplined", "patient", "serious", "hard-working"],
        gemstone: "Blue Sapphire",
        color: "Blue",
        day: "Saturday",
        mantra: "Om Shanaischaraya Namah",
        charity: "Donate black sesame and mustard oil on Saturdays",
        practice: "Feed black sesame seeds to birds and serve the elderly",
        strong: "A strong Saturn rewards patience with lasting, hard-won success.",
        weak: "A weak Saturn brings delays, fatigue and heavy responsibilities.",
    },
    // Rahu
    PlanetProfile {
        significations: &["ambition", "foreign lands", "technology", "illusion", "innovation"],
        career_fields: &[
            "Technology and Research",
            "Foreign Trade",
            "Aviation",
            "Media",
            "Politics",
        ],
        traits: &["ambitious", "unconventional", "restless", "inventive"],
        gemstone: "Hessonite",
        color: "Smoky Grey",
        day: "Saturday",
        mantra: "Om Rahave Namah",
        charity: "Donate to orphanages on Saturdays",
        practice: "Recite Durga Saptashati and avoid intoxicants",
        strong: "A well-placed Rahu brings sudden rise and success abroad.",
        weak: "An afflicted Rahu brings confusion, obsession and sudden setbacks.",
    },
    // Ketu
    PlanetProfile {
        significations: &["detachment", "moksha", "intuition", "past karma", "healing"],
        career_fields: &[
            "Spirituality",
            "Alternative Healing",
            "Research",
            "Programming",
            "Astrology",
        ],
        traits: &["intuitive", "detached", "mystical", "introspective"],
        gemstone: "Cat's Eye",
        color: "Grey",
        day: "Tuesday",
        mantra: "Om Ketave Namah",
        charity: "Donate blankets to the needy on Tuesdays",
        practice: "Worship Lord Ganesha and feed stray dogs",
        strong: "A well-placed Ketu gives intuition and spiritual insight.",
        weak: "An afflicted Ketu brings aimlessness and sudden losses.",
    },
];
