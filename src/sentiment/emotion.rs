/// Keyword-triggered emotion tags layered on top of the sentiment label
use enumset::{EnumSet, EnumSetType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(EnumSetType, Debug)]
pub enum EmotionTag {
    Stressed,
    Frustrated,
    Confused,
    Hopeful,
    Grateful,
}

impl fmt::Display for EmotionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EmotionTag::Stressed => "stressed",
            EmotionTag::Frustrated => "frustrated",
            EmotionTag::Confused => "confused",
            EmotionTag::Hopeful => "hopeful",
            EmotionTag::Grateful => "grateful",
        };
        f.write_str(s)
    }
}

impl FromStr for EmotionTag {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stressed" => Ok(EmotionTag::Stressed),
            "frustrated" => Ok(EmotionTag::Frustrated),
            "confused" => Ok(EmotionTag::Confused),
            "hopeful" => Ok(EmotionTag::Hopeful),
            "grateful" => Ok(EmotionTag::Grateful),
            _ => Err(format!("unknown emotion tag: {}", s)),
        }
    }
}

impl EmotionTag {
    /// Evaluation order; also the order tags are reported in.
    pub const ALL: [EmotionTag; 5] = [
        EmotionTag::Stressed,
        EmotionTag::Frustrated,
        EmotionTag::Confused,
        EmotionTag::Hopeful,
        EmotionTag::Grateful,
    ];

    pub fn triggers(&self) -> &'static [&'static str] {
        EMOTION_TRIGGERS
            .iter()
            .find(|(tag, _)| tag == self)
            .map(|(_, words)| *words)
            .unwrap_or(&[])
    }
}

/// Trigger phrases per tag. Matching is plain substring containment on the
/// lowercased message, so "can't" does not match "cant" and "help" fires
/// inside "helpful".
pub const EMOTION_TRIGGERS: [(EmotionTag, &[&str]); 5] = [
    (
        EmotionTag::Stressed,
        &["worried", "stress", "anxious", "concern", "scared", "panic", "overwhelm"],
    ),
    (
        EmotionTag::Frustrated,
        &["frustrated", "annoyed", "angry", "upset", "hate", "can't"],
    ),
    (
        EmotionTag::Confused,
        &["confused", "don't understand", "unclear", "lost", "help"],
    ),
    (
        EmotionTag::Hopeful,
        &["hope", "better", "improve", "excited", "looking forward", "can do"],
    ),
    (
        EmotionTag::Grateful,
        &["thank", "appreciate", "grateful", "thanks"],
    ),
];

/// Scan already-lowercased text against every trigger list.
///
/// Tags are independent: all five lists are checked and every match is kept.
pub fn detect_emotions(lowered: &str) -> EmotionSet {
    let mut out = EnumSet::empty();
    for (tag, words) in EMOTION_TRIGGERS.iter() {
        if words.iter().any(|w| lowered.contains(w)) {
            out.insert(*tag);
        }
    }
    EmotionSet(out)
}

// Transparent set wrapper with lowercase JSON names
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct EmotionSet(#[serde(with = "emotion_set_serde")] pub EnumSet<EmotionTag>);

impl EmotionSet {
    pub fn contains(&self, tag: EmotionTag) -> bool {
        self.0.contains(tag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = EmotionTag> + '_ {
        EmotionTag::ALL.into_iter().filter(|t| self.0.contains(*t))
    }
}

impl FromIterator<EmotionTag> for EmotionSet {
    fn from_iter<I: IntoIterator<Item = EmotionTag>>(iter: I) -> Self {
        EmotionSet(iter.into_iter().collect())
    }
}

mod emotion_set_serde {
    use super::*;
    pub fn serialize<S>(set: &EnumSet<EmotionTag>, s: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let v: Vec<String> = EmotionTag::ALL
            .into_iter()
            .filter(|t| set.contains(*t))
            .map(|t| t.to_string())
            .collect();
        v.serialize(s)
    }
    pub fn deserialize<'de, D>(d: D) -> Result<EnumSet<EmotionTag>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let v = Vec::<String>::deserialize(d)?;
        let mut out = EnumSet::empty();
        for s in v {
            out.insert(EmotionTag::from_str(&s).map_err(serde::de::Error::custom)?);
        }
        Ok(out)
    }
}
