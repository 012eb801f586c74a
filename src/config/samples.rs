//! Built-in passages for the sentiment batch.
//!
//! Short sentences spanning the four Comprehend classes. The list can be
//! replaced from the `sentiment.samples` YAML key.

pub const DEFAULT_SAMPLES: &[&str] = &[
    "The train was late again, my coffee went cold, and the meeting ran two hours over.",
    "Nothing I planned worked out this week and I am tired of pretending otherwise.",
    "What a wonderful surprise! The whole team showed up to celebrate with us.",
    "The package arrived on Tuesday and contained the items listed on the invoice.",
    "The food was delicious, but the service was painfully slow and the room was freezing.",
    "I finally finished the marathon and I could not be prouder of how far I have come.",
    "The council will review the proposal at its next scheduled session in March.",
];

pub fn default_samples() -> Vec<String> {
    DEFAULT_SAMPLES.iter().map(|s| s.to_string()).collect()
}
