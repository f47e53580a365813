//! Fake commerce data backed by built-in word lists

use rand::Rng;
use rand::seq::SliceRandom;

use crate::services::id_generator::MAX_GENERATED_ID;
use crate::traits::RandomProductSource;

const ADJECTIVES: &[&str] = &[
    "Small", "Ergonomic", "Rustic", "Intelligent", "Gorgeous", "Incredible", "Fantastic",
    "Practical", "Sleek", "Awesome", "Generic", "Handcrafted", "Handmade", "Licensed",
    "Refined", "Unbranded", "Tasty",
];

const MATERIALS: &[&str] = &[
    "Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber", "Metal", "Soft",
    "Fresh", "Frozen",
];

const PRODUCTS: &[&str] = &[
    "Chair", "Car", "Computer", "Keyboard", "Mouse", "Bike", "Ball", "Gloves", "Pants", "Shirt",
    "Table", "Shoes", "Hat", "Towels", "Soap", "Tuna", "Chicken", "Fish", "Cheese", "Bacon",
    "Pizza", "Salad", "Sausages", "Chips",
];

const COLORS: &[&str] = &[
    "red", "orange", "yellow", "green", "blue", "indigo", "violet", "white", "black", "gold",
    "silver", "ivory", "teal", "salmon", "plum", "orchid", "tan", "sky blue", "mint green",
];

const DESCRIPTIONS: &[&str] = &[
    "Ergonomic executive chair upholstered in bonded black leather and PVC padded seat and back for all-day comfort and support",
    "The automobile layout consists of a front-engine design, with transaxle-type transmissions mounted at the rear of the engine and four wheel drive",
    "New ABC 13 9370, 13.3, 5th Gen CoreA5-8250U, 8GB RAM, 256GB SSD, power UHD Graphics, OS 10 Home, OS Office A & J 2016",
    "The slim & simple Maple Gaming Keyboard from Dev Byte comes with a sleek body and 7- Color RGB LED Back-lighting for smart functionality",
    "The Apollotech B340 is an affordable wireless mouse with reliable connectivity, 12 months battery life and modern design",
    "The Nagasaki Lander is the trademarked name of several series of Nagasaki sport bikes, that started with the 1984 ABC800J",
    "The Football Is Good For Training And Recreational Purposes",
    "Carbonite web goalkeeper gloves are ergonomically designed to give easy fit",
    "Boston's most advanced compression wear technology increases muscle oxygenation, stabilizes active muscles",
    "New range of formal shirts are designed keeping you in mind. With fits and styling that will make you stand apart",
];

const MIN_PRICE: f64 = 1.0;
const MAX_PRICE: f64 = 1000.0;

fn pick(words: &[&str]) -> String {
    words
        .choose(&mut rand::thread_rng())
        .map(|word| word.to_string())
        .unwrap_or_default()
}

/// Real fake-data provider producing commerce-style values
#[derive(Debug, Default, Clone, Copy)]
pub struct FakerProductSource;

impl FakerProductSource {
    pub fn new() -> Self {
        Self
    }
}

impl RandomProductSource for FakerProductSource {
    fn id(&self) -> u64 {
        rand::thread_rng().gen_range(0..=MAX_GENERATED_ID)
    }

    fn product_name(&self) -> String {
        format!("{} {} {}", pick(ADJECTIVES), pick(MATERIALS), pick(PRODUCTS))
    }

    fn product_description(&self) -> String {
        pick(DESCRIPTIONS)
    }

    fn price(&self) -> f64 {
        let raw = rand::thread_rng().gen_range(MIN_PRICE..=MAX_PRICE);
        (raw * 100.0).round() / 100.0
    }

    fn product_material(&self) -> String {
        pick(MATERIALS)
    }

    fn color(&self) -> String {
        pick(COLORS)
    }
}
