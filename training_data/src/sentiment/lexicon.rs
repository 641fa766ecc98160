//! Built-in valence lexicon.
//!
//! Valences follow the VADER scale (-4.0 ..= 4.0) with a handful of crypto
//! community terms added. Extra entries can be supplied at runtime through
//! [`LexiconAnalyzer::extend`](super::LexiconAnalyzer::extend).

pub(crate) const WORD_VALENCES: &[(&str, f64)] = &[
    // positive
    ("adoption", 1.2),
    ("agree", 1.5),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("bless", 1.8),
    ("boom", 1.4),
    ("breakthrough", 2.0),
    ("brilliant", 2.8),
    ("bull", 1.5),
    ("bullish", 2.0),
    ("calm", 1.3),
    ("celebrate", 2.7),
    ("confident", 2.2),
    ("cool", 1.3),
    ("diamond", 1.6),
    ("easy", 1.9),
    ("enjoy", 2.2),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("fantastic", 2.6),
    ("fun", 2.3),
    ("funny", 1.9),
    ("gain", 2.4),
    ("gains", 1.8),
    ("gem", 1.8),
    ("glad", 2.0),
    ("good", 1.9),
    ("great", 3.1),
    ("green", 0.8),
    ("grow", 1.5),
    ("growing", 1.4),
    ("growth", 1.6),
    ("happy", 2.7),
    ("hodl", 1.2),
    ("hope", 1.9),
    ("hopeful", 1.6),
    ("huge", 1.3),
    ("incredible", 2.5),
    ("innovation", 1.5),
    ("innovative", 1.9),
    ("interesting", 1.7),
    ("lambo", 1.5),
    ("legend", 2.0),
    ("legit", 1.4),
    ("like", 1.5),
    ("lol", 1.8),
    ("love", 3.2),
    ("loved", 2.9),
    ("loving", 2.9),
    ("lucky", 1.8),
    ("moon", 1.6),
    ("mooning", 2.0),
    ("nice", 1.8),
    ("optimistic", 1.3),
    ("perfect", 2.7),
    ("pleased", 1.9),
    ("positive", 2.6),
    ("profit", 1.9),
    ("profitable", 1.9),
    ("profits", 1.9),
    ("promising", 1.7),
    ("rally", 1.6),
    ("recover", 1.5),
    ("recovery", 1.4),
    ("rich", 2.6),
    ("rocket", 1.3),
    ("safe", 1.9),
    ("secure", 1.4),
    ("smart", 1.7),
    ("soar", 1.9),
    ("soaring", 2.0),
    ("solid", 1.9),
    ("strong", 2.3),
    ("stronger", 2.1),
    ("success", 2.7),
    ("successful", 2.8),
    ("support", 1.7),
    ("surge", 1.5),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("top", 0.8),
    ("trust", 2.3),
    ("undervalued", 1.1),
    ("wagmi", 2.0),
    ("wealth", 2.2),
    ("wealthy", 2.2),
    ("win", 2.8),
    ("winner", 2.8),
    ("winning", 2.4),
    ("wins", 2.7),
    ("wonderful", 2.7),
    ("wow", 2.8),
    ("yes", 1.7),
    // negative
    ("afraid", -2.2),
    ("angry", -2.3),
    ("awful", -2.0),
    ("bad", -2.5),
    ("bagholder", -1.6),
    ("bankrupt", -2.6),
    ("bear", -1.2),
    ("bearish", -2.0),
    ("bleeding", -1.8),
    ("broke", -1.8),
    ("bubble", -0.5),
    ("collapse", -2.2),
    ("concern", -1.0),
    ("concerned", -1.4),
    ("crap", -1.6),
    ("crash", -1.7),
    ("crashed", -1.8),
    ("crashing", -1.8),
    ("crisis", -3.1),
    ("cry", -2.1),
    ("danger", -2.4),
    ("dangerous", -2.1),
    ("dead", -3.3),
    ("decline", -1.1),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disaster", -3.1),
    ("doubt", -1.5),
    ("drop", -1.1),
    ("dropped", -1.2),
    ("dumb", -2.3),
    ("dump", -1.6),
    ("dumping", -1.2),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("fake", -2.1),
    ("fear", -2.2),
    ("fraud", -2.8),
    ("fud", -1.5),
    ("hack", -1.5),
    ("hacked", -1.7),
    ("hate", -2.7),
    ("horrible", -2.5),
    ("kill", -3.7),
    ("liar", -2.6),
    ("lies", -1.8),
    ("lose", -1.9),
    ("loser", -2.4),
    ("losing", -1.6),
    ("loss", -1.3),
    ("losses", -1.7),
    ("lost", -1.3),
    ("manipulation", -1.5),
    ("nervous", -1.1),
    ("no", -1.2),
    ("panic", -2.3),
    ("plunge", -1.9),
    ("ponzi", -2.5),
    ("poor", -2.1),
    ("problem", -1.7),
    ("problems", -1.7),
    ("red", -0.6),
    ("rekt", -2.0),
    ("risk", -1.1),
    ("risky", -1.4),
    ("rug", -1.5),
    ("rugged", -2.3),
    ("rugpull", -2.5),
    ("sad", -2.1),
    ("scam", -2.6),
    ("scammed", -2.5),
    ("scammer", -2.4),
    ("scary", -2.2),
    ("shit", -2.6),
    ("stolen", -2.2),
    ("stupid", -2.4),
    ("sucks", -1.5),
    ("terrible", -2.1),
    ("theft", -2.0),
    ("trouble", -1.6),
    ("ugly", -2.3),
    ("useless", -1.8),
    ("weak", -1.9),
    ("worried", -1.2),
    ("worry", -1.9),
    ("worse", -2.1),
    ("worst", -3.1),
    ("worthless", -1.9),
    ("wrong", -2.1),
];

/// Intensity modifiers: positive entries amplify the following sentiment word,
/// negative entries dampen it.
pub(crate) const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", 0.293),
    ("completely", 0.293),
    ("deeply", 0.293),
    ("enormously", 0.293),
    ("entirely", 0.293),
    ("especially", 0.293),
    ("exceptionally", 0.293),
    ("extremely", 0.293),
    ("greatly", 0.293),
    ("highly", 0.293),
    ("hugely", 0.293),
    ("incredibly", 0.293),
    ("insanely", 0.293),
    ("most", 0.293),
    ("particularly", 0.293),
    ("quite", 0.293),
    ("really", 0.293),
    ("remarkably", 0.293),
    ("so", 0.293),
    ("super", 0.293),
    ("totally", 0.293),
    ("tremendously", 0.293),
    ("truly", 0.293),
    ("utterly", 0.293),
    ("very", 0.293),
    ("almost", -0.293),
    ("barely", -0.293),
    ("hardly", -0.293),
    ("kinda", -0.293),
    ("less", -0.293),
    ("marginally", -0.293),
    ("partly", -0.293),
    ("scarcely", -0.293),
    ("slightly", -0.293),
    ("somewhat", -0.293),
    ("sorta", -0.293),
];

pub(crate) const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "didnt", "doesnt", "dont", "hasnt", "havent",
    "isnt", "neither", "never", "none", "nope", "nor", "not", "nothing", "nowhere", "shouldnt",
    "wasnt", "werent", "without", "wont", "wouldnt",
];
