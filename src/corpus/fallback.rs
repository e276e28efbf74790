//! Embedded fallback training data.
//!
//! A hand-curated set of short factual and non-factual statements used
//! when the news corpus files cannot be read. Small, but balanced across
//! both classes, so training always has something to work with.

use crate::corpus::{CorpusSource, LabeledExample, TrainingSet};

/// True-class statements.
const TRUE_STATEMENTS: &[&str] = &[
    "The Earth revolves around the Sun",
    "Water boils at 100 degrees Celsius at sea level",
    "The sky is blue",
    "Humans need oxygen to breathe",
    "The Moon orbits Earth",
    "Paris is the capital of France",
    "Fire is hot",
    "Ice is cold",
    "Gravity pulls objects down",
    "The sun rises in the east",
    "The sun sets in the west",
    "Plants need sunlight for photosynthesis",
    "Mount Everest is the tallest mountain on Earth",
    "The Pacific Ocean is the largest ocean",
    "Albert Einstein was a physicist",
    "DNA carries genetic information",
    "Gold is a metal",
    "Diamonds are hard",
    "Rain falls from clouds",
    "Snow is frozen water",
];

/// False-class statements.
const FALSE_STATEMENTS: &[&str] = &[
    "The Earth is flat",
    "The sun revolves around the Earth",
    "The Moon is made of cheese",
    "Humans can breathe underwater without equipment",
    "Fire is cold",
    "The sky is green",
    "Gravity pushes objects up",
    "The sun rises in the west",
    "The sun sets in the east",
    "Plants don't need sunlight",
    "The Earth is only 6000 years old",
    "Vaccines cause autism",
    "The Great Wall of China is visible from space with naked eye",
    "Humans only use 10% of their brain",
    "Lightning never strikes the same place twice",
    "Goldfish have a 3-second memory",
    "Bulls are enraged by the color red",
    "Bats are blind",
    "Sugar makes children hyperactive",
    "We have only five senses",
];

/// Build the embedded fallback training set.
///
/// True-class statements come first, preserving declaration order within
/// each class.
pub fn embedded_training_set() -> TrainingSet {
    let examples = TRUE_STATEMENTS
        .iter()
        .map(|&text| LabeledExample::new(text, true))
        .chain(
            FALSE_STATEMENTS
                .iter()
                .map(|&text| LabeledExample::new(text, false)),
        )
        .collect();

    TrainingSet::new(examples, CorpusSource::Embedded)
}
