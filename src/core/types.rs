// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One cell of the conjugation paradigm. Declaration order is the fixed
/// comparison order, so `Ord` and `BTreeMap` iteration follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConjugationSlot {
    #[serde(rename = "remote_past_1s")]
    RemotePast1s,
    #[serde(rename = "remote_past_2s")]
    RemotePast2s,
    #[serde(rename = "remote_past_3s")]
    RemotePast3s,
    #[serde(rename = "remote_past_1p")]
    RemotePast1p,
    #[serde(rename = "remote_past_2p")]
    RemotePast2p,
    #[serde(rename = "remote_past_3p")]
    RemotePast3p,
    #[serde(rename = "recent_past_1s")]
    RecentPast1s,
    #[serde(rename = "recent_past_2s")]
    RecentPast2s,
    #[serde(rename = "recent_past_3s")]
    RecentPast3s,
    #[serde(rename = "recent_past_1p")]
    RecentPast1p,
    #[serde(rename = "recent_past_2p")]
    RecentPast2p,
    #[serde(rename = "recent_past_3p")]
    RecentPast3p,
    #[serde(rename = "future_1s")]
    Future1s,
    #[serde(rename = "future_2s")]
    Future2s,
    #[serde(rename = "future_3s")]
    Future3s,
    #[serde(rename = "future_1p")]
    Future1p,
    #[serde(rename = "future_2p")]
    Future2p,
    #[serde(rename = "future_3p")]
    Future3p,
    #[serde(rename = "singular_imperative")]
    SingularImperative,
    #[serde(rename = "plural_imperative")]
    PluralImperative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tense {
    RemotePast,
    RecentPast,
    Future,
}

/// Person and number of a tensed slot, in paradigm row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    First,
    Second,
    Third,
    FirstPlural,
    SecondPlural,
    ThirdPlural,
}

impl Actor {
    pub const ALL: [Actor; 6] = [
        Actor::First,
        Actor::Second,
        Actor::Third,
        Actor::FirstPlural,
        Actor::SecondPlural,
        Actor::ThirdPlural,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Actor::First => "1s",
            Actor::Second => "2s",
            Actor::Third => "3s",
            Actor::FirstPlural => "1p",
            Actor::SecondPlural => "2p",
            Actor::ThirdPlural => "3p",
        }
    }

    /// Row of this actor within a tense, 0 for 1s through 5 for 3p.
    pub const fn row(self) -> usize {
        match self {
            Actor::First => 0,
            Actor::Second => 1,
            Actor::Third => 2,
            Actor::FirstPlural => 3,
            Actor::SecondPlural => 4,
            Actor::ThirdPlural => 5,
        }
    }

    /// Parses corpus actor codes such as `1S` or `2p`.
    pub fn parse(code: &str) -> Option<Self> {
        let code = code.trim().to_lowercase();
        Self::ALL.into_iter().find(|a| a.label() == code)
    }
}

impl Tense {
    /// Parses corpus tense names (`remote past`, `Recent Past`, `future`).
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "remote past" => Some(Tense::RemotePast),
            "recent past" => Some(Tense::RecentPast),
            "future" => Some(Tense::Future),
            _ => None,
        }
    }
}

impl ConjugationSlot {
    /// The single 20-slot comparison order.
    pub const ALL: [ConjugationSlot; 20] = [
        ConjugationSlot::RemotePast1s,
        ConjugationSlot::RemotePast2s,
        ConjugationSlot::RemotePast3s,
        ConjugationSlot::RemotePast1p,
        ConjugationSlot::RemotePast2p,
        ConjugationSlot::RemotePast3p,
        ConjugationSlot::RecentPast1s,
        ConjugationSlot::RecentPast2s,
        ConjugationSlot::RecentPast3s,
        ConjugationSlot::RecentPast1p,
        ConjugationSlot::RecentPast2p,
        ConjugationSlot::RecentPast3p,
        ConjugationSlot::Future1s,
        ConjugationSlot::Future2s,
        ConjugationSlot::Future3s,
        ConjugationSlot::Future1p,
        ConjugationSlot::Future2p,
        ConjugationSlot::Future3p,
        ConjugationSlot::SingularImperative,
        ConjugationSlot::PluralImperative,
    ];

    pub fn tensed(tense: Tense, actor: Actor) -> Self {
        let base = match tense {
            Tense::RemotePast => 0,
            Tense::RecentPast => 6,
            Tense::Future => 12,
        };
        Self::ALL[base + actor.row()]
    }

    pub fn label(self) -> &'static str {
        match self {
            ConjugationSlot::RemotePast1s => "remote_past_1s",
            ConjugationSlot::RemotePast2s => "remote_past_2s",
            ConjugationSlot::RemotePast3s => "remote_past_3s",
            ConjugationSlot::RemotePast1p => "remote_past_1p",
            ConjugationSlot::RemotePast2p => "remote_past_2p",
            ConjugationSlot::RemotePast3p => "remote_past_3p",
            ConjugationSlot::RecentPast1s => "recent_past_1s",
            ConjugationSlot::RecentPast2s => "recent_past_2s",
            ConjugationSlot::RecentPast3s => "recent_past_3s",
            ConjugationSlot::RecentPast1p => "recent_past_1p",
            ConjugationSlot::RecentPast2p => "recent_past_2p",
            ConjugationSlot::RecentPast3p => "recent_past_3p",
            ConjugationSlot::Future1s => "future_1s",
            ConjugationSlot::Future2s => "future_2s",
            ConjugationSlot::Future3s => "future_3s",
            ConjugationSlot::Future1p => "future_1p",
            ConjugationSlot::Future2p => "future_2p",
            ConjugationSlot::Future3p => "future_3p",
            ConjugationSlot::SingularImperative => "singular_imperative",
            ConjugationSlot::PluralImperative => "plural_imperative",
        }
    }
}

impl fmt::Display for ConjugationSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Surface forms keyed by slot. Unfilled slots read as "".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paradigm {
    forms: BTreeMap<ConjugationSlot, String>,
}

impl Paradigm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: ConjugationSlot) -> &str {
        self.forms.get(&slot).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, slot: ConjugationSlot, form: impl Into<String>) {
        self.forms.insert(slot, form.into());
    }

    /// Fills the six slots of `tense` in actor order.
    pub fn set_tense(&mut self, tense: Tense, forms: [String; 6]) {
        for (actor, form) in Actor::ALL.into_iter().zip(forms) {
            self.set(ConjugationSlot::tensed(tense, actor), form);
        }
    }

    pub fn tense(&self, tense: Tense) -> [&str; 6] {
        Actor::ALL.map(|actor| self.get(ConjugationSlot::tensed(tense, actor)))
    }

    /// All twenty forms in comparison order.
    pub fn all_conjugations(&self) -> [&str; 20] {
        ConjugationSlot::ALL.map(|slot| self.get(slot))
    }
}

/// An elicited verb, grouped from corpus rows sharing an English gloss.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbRecord {
    pub english: String,
    /// Tok Pisin gloss.
    #[serde(default)]
    pub tpi: String,
    /// Who entered the data.
    #[serde(default)]
    pub author: String,
    pub paradigm: Paradigm,
    #[serde(default)]
    pub short: String,
}

impl VerbRecord {
    pub fn new(english: impl Into<String>) -> Self {
        Self {
            english: english.into(),
            ..Self::default()
        }
    }

    /// The citation form (future 1s).
    pub fn kovol(&self) -> &str {
        self.paradigm.get(ConjugationSlot::Future1s)
    }
}

impl fmt::Display for VerbRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Kovol verb: {}, \"{}\"", self.kovol(), self.english)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    pub actual: String,
    pub predicted: String,
}

/// Slots where prediction and elicitation disagree. Absent slots agree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    mismatches: BTreeMap<ConjugationSlot, Mismatch>,
}

impl ErrorReport {
    pub fn insert(&mut self, slot: ConjugationSlot, actual: String, predicted: String) {
        self.mismatches.insert(slot, Mismatch { actual, predicted });
    }

    pub fn get(&self, slot: ConjugationSlot) -> Option<&Mismatch> {
        self.mismatches.get(&slot)
    }

    pub fn contains(&self, slot: ConjugationSlot) -> bool {
        self.mismatches.contains_key(&slot)
    }

    pub fn len(&self) -> usize {
        self.mismatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mismatches.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ConjugationSlot, &Mismatch)> {
        self.mismatches.iter().map(|(slot, m)| (*slot, m))
    }
}
