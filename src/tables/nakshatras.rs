use serde::Serialize;

use crate::Nakshatra;

/// Temperament class used in Gana koota.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

/// Ayurvedic pulse used in Nadi koota.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Nadi {
    Adi,
    Madhya,
    Antya,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Yoni {
    Horse,
    Elephant,
    Sheep,
    Serpent,
    Dog,
    Cat,
    Rat,
    Cow,
    Buffalo,
    Tiger,
    Deer,
    Monkey,
    Mongoose,
    Lion,
}

impl Yoni {
    /// Sworn enemy pairs score zero in Yoni koota.
    pub fn is_enemy_of(self, other: Yoni) -> bool {
        use Yoni::*;
        matches!(
            (self, other),
            (Horse, Buffalo)
                | (Buffalo, Horse)
                | (Elephant, Lion)
                | (Lion, Elephant)
                | (Sheep, Monkey)
                | (Monkey, Sheep)
                | (Serpent, Mongoose)
                | (Mongoose, Serpent)
                | (Dog, Deer)
                | (Deer, Dog)
                | (Cat, Rat)
                | (Rat, Cat)
                | (Cow, Tiger)
                | (Tiger, Cow)
        )
    }
}

#[derive(Debug)]
pub struct NakshatraProfile {
    pub deity: &'static str,
    pub symbol: &'static str,
    pub gana: Gana,
    pub nadi: Nadi,
    pub yoni: Yoni,
    pub traits: &'static [&'static str],
}

pub fn nakshatra_profile(nakshatra: Nakshatra) -> &'static NakshatraProfile {
    &NAKSHATRAS[nakshatra.index()]
}

macro_rules! nakshatra {
    ($deity:expr, $symbol:expr, $gana:ident, $nadi:ident, $yoni:ident, [$($t:expr),+]) => {
        NakshatraProfile {
            deity: $deity,
            symbol: $symbol,
            gana: Gana::$gana,
            nadi: Nadi::$nadi,
            yoni: Yoni::$yoni,
            traits: &[$($t),+],
        }
    };
}

static NAKSHATRAS: [NakshatraProfile; 27] = [
    nakshatra!("Ashwini Kumaras", "Horse's head", Deva, Adi, Horse, ["swift", "healing", "adventurous"]),
    nakshatra!("Yama", "Yoni", Manushya, Madhya, Elephant, ["intense", "creative", "responsible"]),
    nakshatra!("Agni", "Razor", Rakshasa, Antya, Sheep, ["sharp", "purifying", "determined"]),
    nakshatra!("Brahma", "Chariot", Manushya, Antya, Serpent, ["attractive", "artistic", "prosperous"]),
    nakshatra!("Soma", "Deer's head", Deva, Madhya, Serpent, ["curious", "gentle", "searching"]),
    nakshatra!("Rudra", "Teardrop", Manushya, Adi, Dog, ["analytical", "transformative", "intense"]),
    nakshatra!("Aditi", "Quiver of arrows", Deva, Adi, Cat, ["resilient", "generous", "optimistic"]),
    nakshatra!("Brihaspati", "Cow's udder", Deva, Madhya, Sheep, ["nurturing", "devout", "protective"]),
    nakshatra!("Nagas", "Coiled serpent", Rakshasa, Antya, Cat, ["perceptive", "secretive", "persuasive"]),
    nakshatra!("Pitris", "Royal throne", Rakshasa, Antya, Rat, ["regal", "traditional", "proud"]),
    nakshatra!("Bhaga", "Front legs of a bed", Manushya, Madhya, Rat, ["pleasure-loving", "charming", "generous"]),
    nakshatra!("Aryaman", "Back legs of a bed", Manushya, Adi, Cow, ["reliable", "helpful", "friendly"]),
    nakshatra!("Savitar", "Open hand", Deva, Adi, Buffalo, ["skilful", "resourceful", "witty"]),
    nakshatra!("Vishvakarma", "Bright jewel", Rakshasa, Madhya, Tiger, ["creative", "elegant", "ambitious"]),
    nakshatra!("Vayu", "Young sprout in the wind", Deva, Antya, Buffalo, ["independent", "flexible", "diplomatic"]),
    nakshatra!("Indra and Agni", "Triumphal archway", Rakshasa, Antya, Tiger, ["goal-oriented", "determined", "competitive"]),
    nakshatra!("Mitra", "Lotus", Deva, Madhya, Deer, ["devoted", "friendly", "disciplined"]),
    nakshatra!("Indra", "Circular earring", Rakshasa, Adi, Deer, ["protective", "authoritative", "resourceful"]),
    nakshatra!("Nirriti", "Bundle of roots", Rakshasa, Adi, Dog, ["investigative", "uprooting", "philosophical"]),
    nakshatra!("Apah", "Winnowing fan", Manushya, Madhya, Monkey, ["invincible", "proud", "persuasive"]),
    nakshatra!("Vishvedevas", "Elephant tusk", Manushya, Antya, Mongoose, ["principled", "enduring", "victorious"]),
    nakshatra!("Vishnu", "Ear", Deva, Antya, Monkey, ["attentive", "learned", "connecting"]),
    nakshatra!("Vasus", "Drum", Rakshasa, Madhya, Lion, ["musical", "wealthy", "generous"]),
    nakshatra!("Varuna", "Empty circle", Rakshasa, Adi, Horse, ["healing", "secretive", "independent"]),
    nakshatra!("Aja Ekapada", "Front of a funeral cot", Manushya, Adi, Lion, ["passionate", "idealistic", "intense"]),
    nakshatra!("Ahir Budhnya", "Back of a funeral cot", Manushya, Madhya, Cow, ["wise", "controlled", "compassionate"]),
    nakshatra!("Pushan", "Fish", Deva, Antya, Elephant, ["nurturing", "gentle", "guiding"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nadi_cycles_through_each_group_of_three() {
        assert_eq!(nakshatra_profile(Nakshatra::Ashwini).nadi, Nadi::Adi);
        assert_eq!(nakshatra_profile(Nakshatra::Bharani).nadi, Nadi::Madhya);
        assert_eq!(nakshatra_profile(Nakshatra::Krittika).nadi, Nadi::Antya);
        assert_eq!(nakshatra_profile(Nakshatra::Revati).nadi, Nadi::Antya);
    }

    #[test]
    fn enemy_yonis_are_symmetric() {
        assert!(Yoni::Cat.is_enemy_of(Yoni::Rat));
        assert!(Yoni::Rat.is_enemy_of(Yoni::Cat));
        assert!(!Yoni::Horse.is_enemy_of(Yoni::Horse));
    }
}
