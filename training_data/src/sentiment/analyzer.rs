use std::collections::{HashMap, HashSet};

use super::SentimentModel;
use super::lexicon::{BOOSTERS, NEGATIONS, WORD_VALENCES};

const CAPS_INCR: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const NORMALIZATION_ALPHA: f64 = 15.0;
const EXCLAMATION_INCR: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_INCR: f64 = 0.18;
const MAX_QUESTION_AMPLIFIER: f64 = 0.96;
/// Booster weight by distance (1, 2, 3 tokens back).
const BOOSTER_DECAY: [f64; 3] = [1.0, 0.95, 0.9];

/// Rule-based polarity scorer in the style of VADER.
///
/// Scores are the sum of word valences adjusted for intensity boosters,
/// negation within three tokens, ALL-CAPS emphasis in mixed-case text,
/// contrast around "but" and trailing `!`/`?` emphasis, squashed into
/// `[-1, 1]` with `x / sqrt(x² + 15)`.
#[derive(Debug, Clone)]
pub struct LexiconAnalyzer {
    lexicon: HashMap<String, f64>,
    boosters: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
}

struct Token<'a> {
    raw: &'a str,
    lower: String,
}

impl Token<'_> {
    fn is_shouting(&self) -> bool {
        self.raw.chars().any(char::is_alphabetic)
            && self.raw.chars().filter(|c| c.is_alphabetic()).all(char::is_uppercase)
    }
}

impl LexiconAnalyzer {
    pub fn new() -> Self {
        Self {
            lexicon: WORD_VALENCES.iter().map(|&(w, v)| (w.to_string(), v)).collect(),
            boosters: BOOSTERS.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
        }
    }

    /// Adds or overrides lexicon entries; words are matched case-insensitively.
    pub fn extend<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        for (word, valence) in entries {
            self.lexicon.insert(word.as_ref().to_lowercase(), valence);
        }
    }

    /// Valence of a single word, if it is in the lexicon.
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.lexicon.get(&word.to_lowercase()).copied()
    }

    fn is_negation(&self, token: &Token<'_>) -> bool {
        token.lower.contains("n't")
            || self
                .negations
                .contains(token.lower.replace('\'', "").as_str())
    }

    fn word_sentiment(&self, tokens: &[Token<'_>], i: usize, mixed_case: bool) -> f64 {
        let token = &tokens[i];
        if self.boosters.contains_key(token.lower.as_str()) {
            return 0.0;
        }
        let Some(mut valence) = self.lexicon.get(&token.lower).copied() else {
            return 0.0;
        };

        if mixed_case && token.is_shouting() {
            valence += CAPS_INCR.copysign(valence);
        }

        for (dist, decay) in (1..=3).zip(BOOSTER_DECAY) {
            let Some(prev) = i.checked_sub(dist).map(|j| &tokens[j]) else {
                break;
            };
            if let Some(&boost) = self.boosters.get(prev.lower.as_str()) {
                let mut scalar = if valence < 0.0 { -boost } else { boost };
                if mixed_case && prev.is_shouting() {
                    scalar += CAPS_INCR.copysign(valence);
                }
                valence += scalar * decay;
            }
        }

        let negated = (1..=3)
            .filter_map(|dist| i.checked_sub(dist))
            .any(|j| self.is_negation(&tokens[j]));
        if negated {
            valence *= NEGATION_SCALAR;
        }
        valence
    }
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentModel for LexiconAnalyzer {
    fn compound(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return 0.0;
        }

        let shouting = tokens.iter().filter(|t| t.is_shouting()).count();
        let mixed_case = shouting > 0 && shouting < tokens.len();

        let mut sentiments: Vec<f64> = (0..tokens.len())
            .map(|i| self.word_sentiment(&tokens, i, mixed_case))
            .collect();

        if let Some(pivot) = tokens.iter().position(|t| t.lower == "but") {
            for (i, s) in sentiments.iter_mut().enumerate() {
                if i < pivot {
                    *s *= 0.5;
                } else if i > pivot {
                    *s *= 1.5;
                }
            }
        }

        let mut sum: f64 = sentiments.iter().sum();
        if sum != 0.0 {
            let emphasis = punctuation_emphasis(text);
            sum += emphasis.copysign(sum);
        }
        normalize(sum)
    }
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| word.chars().count() > 1)
        .map(|raw| Token {
            raw,
            lower: raw.to_lowercase(),
        })
        .collect()
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS) as f64 * EXCLAMATION_INCR;
    let questions = text.matches('?').count();
    let question_amp = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCR,
        _ => MAX_QUESTION_AMPLIFIER,
    };
    exclamations + question_amp
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}
