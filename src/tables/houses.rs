use crate::House;

#[derive(Debug)]
pub struct HouseProfile {
    pub name: &'static str,
    pub significations: &'static [&'static str],
    pub description: &'static str,
}

pub fn house_profile(house: House) -> &'static HouseProfile {
    &HOUSES[house.number() as usize - 1]
}

static HOUSES: [HouseProfile; 12] = [
    HouseProfile {
        name: "Tanu Bhava",
        significations: &["self", "body", "personality", "vitality"],
        description: "The first house shows the physical self, temperament and overall direction of life.",
    },
    HouseProfile {
        name: "Dhana Bhava",
        significations: &["wealth", "family", "speech", "food"],
        description: "The second house governs accumulated wealth, family values and speech.",
    },
    HouseProfile {
        name: "Sahaja Bhava",
        significations: &["courage", "siblings", "communication", "short journeys"],
        description: "The third house rules effort, courage, siblings and self-expression.",
    },
    HouseProfile {
        name: "Sukha Bhava",
        significations: &["home", "mother", "property", "inner peace"],
        description: "The fourth house covers home, mother, vehicles and emotional contentment.",
    },
    HouseProfile {
        name: "Putra Bhava",
        significations: &["children", "intelligence", "creativity", "past merit"],
        description: "The fifth house shows children, learning, creativity and romance.",
    },
    HouseProfile {
        name: "Ari Bhava",
        significations: &["enemies", "debts", "disease", "service"],
        description: "The sixth house governs obstacles, competition, health and daily work.",
    },
    HouseProfile {
        name: "Kalatra Bhava",
        significations: &["marriage", "spouse", "partnerships", "contracts"],
        description: "The seventh house rules marriage, the spouse and business partnerships.",
    },
    HouseProfile {
        name: "Ayu Bhava",
        significations: &["longevity", "transformation", "secrets", "inheritance"],
        description: "The eighth house covers longevity, sudden events and hidden knowledge.",
    },
    HouseProfile {
        name: "Dharma Bhava",
        significations: &["fortune", "father", "higher learning", "religion"],
        description: "The ninth house shows luck, dharma, teachers and long journeys.",
    },
    HouseProfile {
        name: "Karma Bhava",
        significations: &["career", "status", "authority", "public life"],
        description: "The tenth house governs profession, reputation and achievements.",
    },
    HouseProfile {
        name: "Labha Bhava",
        significations: &["gains", "income", "friends", "aspirations"],
        description: "The eleventh house rules income, gains, social circles and fulfilled desires.",
    },
    HouseProfile {
        name: "Vyaya Bhava",
        significations: &["expenses", "losses", "foreign lands", "liberation"],
        description: "The twelfth house covers expenses, isolation, foreign residence and moksha.",
    },
];
