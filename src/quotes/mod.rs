use self::enums::quote_category::QuoteCategory;

pub mod controller;
pub mod dtos;
pub mod enums;
pub mod errors;
pub mod models;
pub mod service;

pub static DEFAULT_QUOTES: [(&str, &str, QuoteCategory); 12] = [
    (
        "Life is not lacking in beauty, only in eyes that discover it.",
        "Auguste Rodin",
        QuoteCategory::Motivation,
    ),
    (
        "Genius is one percent inspiration and ninety-nine percent perspiration.",
        "Thomas Edison",
        QuoteCategory::Motivation,
    ),
    (
        "The secret of success is constancy to purpose.",
        "Benjamin Disraeli",
        QuoteCategory::Motivation,
    ),
    (
        "Beware of little expenses; a small leak will sink a great ship.",
        "Benjamin Franklin",
        QuoteCategory::Finance,
    ),
    (
        "Do not save what is left after spending, but spend what is left after saving.",
        "Warren Buffett",
        QuoteCategory::Finance,
    ),
    (
        "Don't put all your eggs in one basket.",
        "James Tobin",
        QuoteCategory::Finance,
    ),
    (
        "Health is the greatest wealth.",
        "Virgil",
        QuoteCategory::Life,
    ),
    (
        "Time is like water in a sponge; if you squeeze, there is always some.",
        "Lu Xun",
        QuoteCategory::Life,
    ),
    (
        "Learning without thought is labor lost; thought without learning is perilous.",
        "Confucius",
        QuoteCategory::Study,
    ),
    (
        "An investment in knowledge pays the best interest.",
        "Benjamin Franklin",
        QuoteCategory::Study,
    ),
    (
        "Choose a job you love, and you will never have to work a day in your life.",
        "Confucius",
        QuoteCategory::Work,
    ),
    (
        "Well begun is half done.",
        "Aristotle",
        QuoteCategory::Other,
    ),
];
