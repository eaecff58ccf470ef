//! Fixed pricing tiers and the character catalog.
//!
//! Both lists are code-defined constants, not database entities. Returned
//! order is the insertion order below and must stay stable: clients render
//! the tier ladder and character picker in exactly this order.

use serde::{Deserialize, Serialize};

use crate::order::TierName;

/// A fixed pricing/feature package a customer selects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub name: TierName,
    /// Price in USD.
    pub price: f64,
    /// Included features, in display order.
    pub features: Vec<String>,
    /// Estimated delivery time in days.
    pub delivery_days: i64,
}

/// A story protagonist template offered in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Unique kebab-case identifier.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Folktale/fairytale era or origin.
    pub era: Option<String>,
    /// Search tags.
    pub tags: Vec<String>,
    /// Optional image URL.
    pub thumbnail: Option<String>,
    /// Short blurb.
    pub description: Option<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// The four pricing tiers, cheapest first.
pub fn tiers() -> Vec<Tier> {
    vec![
        Tier {
            name: TierName::Spark,
            price: 19.0,
            features: strings(&["1 character", "500 words", "PDF"]),
            delivery_days: 3,
        },
        Tier {
            name: TierName::Glow,
            price: 39.0,
            features: strings(&["2 characters", "800 words", "3 illustrations", "PDF"]),
            delivery_days: 5,
        },
        Tier {
            name: TierName::Shine,
            price: 69.0,
            features: strings(&["Up to 3 characters", "1200 words", "5 illustrations", "PDF + ePub"]),
            delivery_days: 7,
        },
        Tier {
            name: TierName::Supernova,
            price: 129.0,
            features: strings(&[
                "Up to 4 characters",
                "2000 words",
                "8 illustrations",
                "PDF + ePub + Web",
            ]),
            delivery_days: 10,
        },
    ]
}

/// The character catalog.
///
/// `character_key` on submitted orders references these keys but is not
/// checked against them; the catalog may grow independently of accepted
/// orders.
pub fn characters() -> Vec<Character> {
    vec![
        character("cinderella", "Cinderella", "Fairy Tale", &["kindness", "perseverance"]),
        character(
            "little-red-riding-hood",
            "Little Red Riding Hood",
            "Folk Tale",
            &["bravery", "wisdom"],
        ),
        character("jack-beanstalk", "Jack (Beanstalk)", "Folk Tale", &["adventure", "curiosity"]),
        character("snow-white", "Snow White", "Fairy Tale", &["friendship", "courage"]),
    ]
}

fn character(key: &str, name: &str, era: &str, tags: &[&str]) -> Character {
    Character {
        key: key.to_string(),
        name: name.to_string(),
        era: Some(era.to_string()),
        tags: strings(tags),
        thumbnail: None,
        description: None,
    }
}
