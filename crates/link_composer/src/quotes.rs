//! Quotes shown under the greeting.

use rand::seq::IndexedRandom;
use serde::Serialize;

/// A quote and its author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

const fn quote(text: &'static str, author: &'static str) -> Quote {
    Quote { text, author }
}

/// The quote catalog.
pub const QUOTES: &[Quote] = &[
    quote("Somewhere, something incredible is waiting to be known.", "Carl Sagan"),
    quote("We are like butterflies who flutter for a day and think it is forever.", "Carl Sagan"),
    quote("The pale blue dot is the only home we've ever known.", "Carl Sagan"),
    quote("If you wish to make an apple pie from scratch, you must first invent the universe.", "Carl Sagan"),
    quote("All we have to decide is what to do with the time that is given us.", "J.R.R. Tolkien"),
    quote("The universe is under no obligation to make sense to you.", "Neil deGrasse Tyson"),
    quote("Time is an illusion. Lunchtime doubly so.", "Douglas Adams"),
    quote("Don't panic.", "Douglas Adams"),
    quote("They say the universe is expanding. That should help with the traffic", "Steven Wright"),
    quote("My fake plants died because I did not pretend to water them", "Mitch Hedberg"),
    quote("If time is money, does that mean ATMs are time machines?", "Unknown"),
];

/// Picks a quote at random.
pub fn random_quote() -> Quote {
    QUOTES.choose(&mut rand::rng()).copied().unwrap_or(QUOTES[0])
}
