use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Behavioral competency axes in canonical order.
///
/// The declaration order is the canonical domain order: every tie in ranking and sorting is
/// broken by it, and `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Mission,
    People,
    Execution,
    Growth,
    Transition,
}

impl Domain {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Mission,
            Self::People,
            Self::Execution,
            Self::Growth,
            Self::Transition,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Mission => "mission",
            Self::People => "people",
            Self::Execution => "execution",
            Self::Growth => "growth",
            Self::Transition => "transition",
        }
    }

    pub fn from_key(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|domain| domain.key() == normalized)
    }

    pub const fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Mission, Locale::En) => "Mission",
            (Self::Mission, Locale::Es) => "Misión",
            (Self::People, Locale::En) => "People",
            (Self::People, Locale::Es) => "Personas",
            (Self::Execution, Locale::En) => "Execution",
            (Self::Execution, Locale::Es) => "Ejecución",
            (Self::Growth, Locale::En) => "Growth",
            (Self::Growth, Locale::Es) => "Crecimiento",
            (Self::Transition, Locale::En) => "Transition",
            (Self::Transition, Locale::Es) => "Transición",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Output language. Resolution is a binary switch: `es` selects Spanish, anything else English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub fn from_code(code: &str) -> Self {
        if code.trim().eq_ignore_ascii_case("es") {
            Self::Es
        } else {
            Self::En
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_code(&raw))
    }
}

/// Fixed two-slot text record; one slot per supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualText {
    pub en: String,
    pub es: String,
}

impl BilingualText {
    pub fn new(en: impl Into<String>, es: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            es: es.into(),
        }
    }

    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Es => &self.es,
        }
    }
}

/// Qualitative bucket derived from a domain score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Strength,
    Developing,
    GrowthArea,
}

impl Level {
    pub const fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Strength, Locale::En) => "Strength",
            (Self::Strength, Locale::Es) => "Fortaleza",
            (Self::Developing, Locale::En) => "Developing",
            (Self::Developing, Locale::Es) => "En desarrollo",
            (Self::GrowthArea, Locale::En) => "Growth area",
            (Self::GrowthArea, Locale::Es) => "Área de crecimiento",
        }
    }
}

/// Situational type describing the transition a subject is stepping into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    Startup,
    Turnaround,
    AcceleratedGrowth,
    Realignment,
    Sustaining,
}

impl Archetype {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Startup,
            Self::Turnaround,
            Self::AcceleratedGrowth,
            Self::Realignment,
            Self::Sustaining,
        ]
    }

    /// Order in which tied tallies are resolved: the first archetype reaching the top tally
    /// wins, so `Sustaining` keeps any tie it is part of.
    pub const fn tie_break_order() -> [Self; 5] {
        [
            Self::Sustaining,
            Self::Startup,
            Self::Turnaround,
            Self::AcceleratedGrowth,
            Self::Realignment,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Turnaround => "turnaround",
            Self::AcceleratedGrowth => "accelerated_growth",
            Self::Realignment => "realignment",
            Self::Sustaining => "sustaining",
        }
    }
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(
    /// Role the subject holds; selects the role-specific question pool.
    RoleId
);
impl RoleId {
    /// Role used when a caller does not name one. No tailored questions are keyed to it.
    pub fn general() -> Self {
        Self("general".to_string())
    }

    /// Blank or missing roles become [`RoleId::general`].
    pub fn or_general(role: Option<String>) -> Self {
        role.filter(|role| !role.trim().is_empty())
            .map(Self::from)
            .unwrap_or_else(Self::general)
    }
}

string_id!(QuestionId);
string_id!(OptionId);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: OptionId,
    pub score: u8,
    /// Classifier key, independent of the numeric score.
    pub tag: String,
    pub label: BilingualText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub domain: Domain,
    pub prompt: BilingualText,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn option(&self, id: &OptionId) -> Option<&AnswerOption> {
        self.options.iter().find(|option| &option.id == id)
    }
}

/// Chosen option per question for one session. Questions may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap(BTreeMap<QuestionId, OptionId>);

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question: impl Into<QuestionId>, option: impl Into<OptionId>) {
        self.0.insert(question.into(), option.into());
    }

    pub fn get(&self, question: &QuestionId) -> Option<&OptionId> {
        self.0.get(question)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolve the selected option for `question`, ignoring ids the question does not offer.
    pub fn selected<'q>(&self, question: &'q Question) -> Option<&'q AnswerOption> {
        self.get(&question.id).and_then(|id| question.option(id))
    }
}

impl<Q, O> FromIterator<(Q, O)> for AnswerMap
where
    Q: Into<QuestionId>,
    O: Into<OptionId>,
{
    fn from_iter<T: IntoIterator<Item = (Q, O)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(question, option)| (question.into(), option.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_switch_is_binary() {
        assert_eq!(Locale::from_code("es"), Locale::Es);
        assert_eq!(Locale::from_code(" ES "), Locale::Es);
        assert_eq!(Locale::from_code("en"), Locale::En);
        assert_eq!(Locale::from_code("fr"), Locale::En);
        assert_eq!(Locale::from_code(""), Locale::En);
    }

    #[test]
    fn bilingual_text_selects_slot() {
        let text = BilingualText::new("Hello", "Hola");
        assert_eq!(text.get(Locale::En), "Hello");
        assert_eq!(text.get(Locale::Es), "Hola");
    }

    #[test]
    fn domain_keys_round_trip_in_canonical_order() {
        let keys: Vec<_> = Domain::ordered().iter().map(|d| d.key()).collect();
        assert_eq!(
            keys,
            vec!["mission", "people", "execution", "growth", "transition"]
        );
        assert_eq!(Domain::from_key(" Growth "), Some(Domain::Growth));
        assert_eq!(Domain::from_key("finance"), None);
        assert!(Domain::Mission < Domain::Transition);
    }

    #[test]
    fn answer_map_deserializes_from_plain_object() {
        let answers: AnswerMap =
            serde_json::from_str(r#"{"mission_1":"mission_1_d","people_2":"people_2_a"}"#)
                .expect("answers parse");
        assert_eq!(answers.len(), 2);
        assert_eq!(
            answers.get(&QuestionId::from("mission_1")),
            Some(&OptionId::from("mission_1_d"))
        );
    }
}
