use crate::core::error::ParadigmError;
use crate::core::root::{extract_root, Root, RootEnding};
use crate::core::suffixes::{
    FutureClass, ImperativeClass, RecentPastClass, RemotePastClass, TenseSuffixes,
};
use crate::core::types::{ConjugationSlot, ErrorReport, Paradigm, Tense, VerbRecord};
use std::fmt;
use tracing::debug;

fn attach(stem: &str, suffixes: &TenseSuffixes) -> [String; 6] {
    suffixes.map(|sfx| format!("{stem}{sfx}"))
}

/// Default combination: vowel-final roots lose their vowel, consonant-final
/// roots take the suffix as is.
fn default_stem(root: &Root) -> Result<String, ParadigmError> {
    match root.ending()? {
        RootEnding::Vowel => root.drop_last(1),
        RootEnding::Consonant => Ok(root.as_string()),
    }
}

/// Future tense, 1s through 3p.
pub fn predict_future(root: &Root) -> Result<[String; 6], ParadigmError> {
    let class = FutureClass::classify(root)?;
    debug!(root = %root.as_string(), ?class, "future suffixes");
    let suffixes = class.suffixes();

    let stem = match class {
        FutureClass::L => root.drop_last(2)?,
        FutureClass::A | FutureClass::Standard => default_stem(root)?,
    };
    let mut forms = attach(&stem, suffixes);
    // -wa never assimilates or reduces
    forms[4] = format!("{}{}", root.as_string(), suffixes[4]);
    Ok(forms)
}

/// Recent past tense, 1s through 3p. The 1s form is computed for
/// completeness but a predicted verb takes it from its seed.
pub fn predict_recent_past(root: &Root) -> Result<[String; 6], ParadigmError> {
    let class = RecentPastClass::classify(root)?;
    debug!(root = %root.as_string(), ?class, "recent past suffixes");
    let suffixes = class.suffixes();

    // single syllable l roots replace ɔ with a
    let working = if class == RecentPastClass::L && root.verb_vowels().len() == 1 {
        root.replace('ɔ', 'a')
    } else {
        root.clone()
    };
    let full = working.as_string();

    let forms = match working.ending()? {
        RootEnding::Consonant => {
            let last = working.last()?;
            if last == 'm' {
                // m assimilates to ŋ, except before -ɔŋg
                let mut forms = attach(&format!("{}ŋ", working.drop_last(1)?), suffixes);
                forms[3] = format!("{full}{}", suffixes[3]);
                forms
            } else {
                let mut forms = attach(&working.drop_last(1)?, suffixes);
                forms[3] = if last == 'l' {
                    format!("{}{}", working.drop_last(2)?, suffixes[3])
                } else {
                    format!("{full}{}", suffixes[3])
                };
                forms
            }
        }
        RootEnding::Vowel => {
            let mut forms = attach(&full, suffixes);
            forms[3] = format!("{}{}", working.drop_last(1)?, suffixes[3]);
            forms
        }
    };
    Ok(forms)
}

/// Remote past tense, 1s through 3p.
pub fn predict_remote_past(root: &Root) -> Result<[String; 6], ParadigmError> {
    let class = RemotePastClass::classify(root)?;
    debug!(root = %root.as_string(), ?class, "remote past suffixes");
    Ok(attach(&default_stem(root)?, class.suffixes()))
}

/// Singular and plural imperative.
pub fn predict_imperative(root: &Root) -> Result<[String; 2], ParadigmError> {
    let class = ImperativeClass::classify(root)?;
    let stem = default_stem(root)?;
    Ok(class.suffixes().map(|sfx| format!("{stem}{sfx}")))
}

/// A paradigm predicted from the 1s remote past and 1s recent past.
///
/// The root and every slot are computed in [`PredictedVerb::new`]; a seed
/// pair that cannot support every rule is rejected there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictedVerb {
    english: String,
    root: String,
    paradigm: Paradigm,
}

impl PredictedVerb {
    pub fn new(
        remote_past_1s: &str,
        recent_past_1s: &str,
        english: Option<&str>,
    ) -> Result<Self, ParadigmError> {
        let root_string = extract_root(remote_past_1s, recent_past_1s)?;
        let root = Root::new(&root_string);

        let mut paradigm = Paradigm::new();
        paradigm.set_tense(Tense::Future, predict_future(&root)?);

        let mut recent_past = predict_recent_past(&root)?;
        recent_past[0] = recent_past_1s.to_string();
        paradigm.set_tense(Tense::RecentPast, recent_past);

        let mut remote_past = predict_remote_past(&root)?;
        remote_past[0] = remote_past_1s.to_string();
        paradigm.set_tense(Tense::RemotePast, remote_past);

        let [singular, plural] = predict_imperative(&root)?;
        paradigm.set(ConjugationSlot::SingularImperative, singular);
        paradigm.set(ConjugationSlot::PluralImperative, plural);

        Ok(Self {
            english: english.unwrap_or_default().to_string(),
            root: root_string,
            paradigm,
        })
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn english(&self) -> &str {
        &self.english
    }

    pub fn paradigm(&self) -> &Paradigm {
        &self.paradigm
    }

    pub fn get(&self, slot: ConjugationSlot) -> &str {
        self.paradigm.get(slot)
    }

    /// Compares against an elicited verb; see [`crate::comparison::compare`].
    pub fn compare_to(&self, actual: &VerbRecord) -> ErrorReport {
        crate::comparison::compare(self, actual)
    }

    /// The prediction as a plain record, e.g. for rendering.
    pub fn to_record(&self) -> VerbRecord {
        VerbRecord {
            english: self.english.clone(),
            paradigm: self.paradigm.clone(),
            ..VerbRecord::default()
        }
    }
}

impl fmt::Display for PredictedVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Predicted Kovol verb: {}, \"{}\"",
            self.get(ConjugationSlot::Future1s),
            self.english
        )
    }
}
