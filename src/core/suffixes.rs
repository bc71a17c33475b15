//! Suffix tables for the four conjugation engines.
//!
//! Each engine classifies a root into one of a closed set of classes; every
//! class owns a constant table in actor order (1s, 2s, 3s, 1p, 2p, 3p, or
//! singular/plural for imperatives). Classes are tested in declaration order
//! and the first match wins.

use crate::core::error::ParadigmError;
use crate::core::root::Root;

pub type TenseSuffixes = [&'static str; 6];
pub type ImperativeSuffixes = [&'static str; 2];

pub const FUTURE_A: TenseSuffixes = ["anim", "aniŋ", "aŋ", "ug", "wa", "is"];
pub const FUTURE_L: TenseSuffixes = ["ɛnim", "ɛniŋ", "aŋ", "olug", "wa", "ɛlis"];
pub const FUTURE_STANDARD: TenseSuffixes = ["inim", "iniŋ", "iŋ", "ug", "wa", "is"];

pub const RECENT_PAST_U: TenseSuffixes = ["gum", "gɔŋ", "ge", "uŋg", "guma", "gund"];
pub const RECENT_PAST_I: TenseSuffixes = ["gɔm", "gɔŋ", "ge", "ɔŋg", "gima", "gɔnd"];
pub const RECENT_PAST_A: TenseSuffixes = ["gam", "gɔŋ", "ga", "aŋg", "gama", "gand"];
pub const RECENT_PAST_L: TenseSuffixes = ["gam", "gɔŋ", "ga", "aŋg", "gama", "gand"];
pub const RECENT_PAST_STANDARD: TenseSuffixes = ["gɔm", "gɔŋ", "ge", "ɔŋg", "gɔma", "gɔnd"];

pub const REMOTE_PAST_U: TenseSuffixes = ["um", "uŋ", "ut", "umuŋg", "umwa", "umind"];
pub const REMOTE_PAST_A: TenseSuffixes = ["am", "aŋ", "at", "amuŋg", "amwa", "amind"];
pub const REMOTE_PAST_STANDARD: TenseSuffixes = ["ɔm", "ɔŋ", "ɔt", "omuŋg", "omwa", "ɛmind"];

pub const IMPERATIVE_G: ImperativeSuffixes = ["u", "as"];
pub const IMPERATIVE_STANDARD: ImperativeSuffixes = ["e", "as"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FutureClass {
    /// Final a assimilates the suffix vowel.
    A,
    /// Final l takes its own suffixes and loses the preceding vowel.
    L,
    Standard,
}

impl FutureClass {
    pub fn classify(root: &Root) -> Result<Self, ParadigmError> {
        Ok(match root.last()? {
            'a' => FutureClass::A,
            'l' => FutureClass::L,
            _ => FutureClass::Standard,
        })
    }

    pub const fn suffixes(self) -> &'static TenseSuffixes {
        match self {
            FutureClass::A => &FUTURE_A,
            FutureClass::L => &FUTURE_L,
            FutureClass::Standard => &FUTURE_STANDARD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecentPastClass {
    U,
    /// The last vowel of the root is i; the harmony crosses the morpheme boundary.
    LastVowelI,
    A,
    L,
    Standard,
}

impl RecentPastClass {
    pub fn classify(root: &Root) -> Result<Self, ParadigmError> {
        let last = root.last()?;
        if last == 'u' {
            return Ok(RecentPastClass::U);
        }
        if root.last_vowel()? == 'i' {
            return Ok(RecentPastClass::LastVowelI);
        }
        Ok(match last {
            'a' => RecentPastClass::A,
            'l' => RecentPastClass::L,
            _ => RecentPastClass::Standard,
        })
    }

    pub const fn suffixes(self) -> &'static TenseSuffixes {
        match self {
            RecentPastClass::U => &RECENT_PAST_U,
            RecentPastClass::LastVowelI => &RECENT_PAST_I,
            RecentPastClass::A => &RECENT_PAST_A,
            RecentPastClass::L => &RECENT_PAST_L,
            RecentPastClass::Standard => &RECENT_PAST_STANDARD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemotePastClass {
    U,
    A,
    Standard,
}

impl RemotePastClass {
    pub fn classify(root: &Root) -> Result<Self, ParadigmError> {
        Ok(match root.last()? {
            'u' => RemotePastClass::U,
            'a' => RemotePastClass::A,
            _ => RemotePastClass::Standard,
        })
    }

    pub const fn suffixes(self) -> &'static TenseSuffixes {
        match self {
            RemotePastClass::U => &REMOTE_PAST_U,
            RemotePastClass::A => &REMOTE_PAST_A,
            RemotePastClass::Standard => &REMOTE_PAST_STANDARD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImperativeClass {
    G,
    Standard,
}

impl ImperativeClass {
    pub fn classify(root: &Root) -> Result<Self, ParadigmError> {
        Ok(if root.ends_with('g')? {
            ImperativeClass::G
        } else {
            ImperativeClass::Standard
        })
    }

    pub const fn suffixes(self) -> &'static ImperativeSuffixes {
        match self {
            ImperativeClass::G => &IMPERATIVE_G,
            ImperativeClass::Standard => &IMPERATIVE_STANDARD,
        }
    }
}
