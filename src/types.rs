//! Wire types exchanged with an extender.
//!
//! Workload and candidate payloads belong to the scheduler core; this crate
//! only carries them. [`PlacementRequest`] is serialized verbatim and each
//! [`Candidate`] keeps whatever fields it arrived with besides its `id`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Key holding the candidate identifier; never stored among the attributes.
const ID_KEY: &str = "id";

/// Opaque description of the workload being placed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlacementRequest(pub Value);

impl PlacementRequest {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for PlacementRequest {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// A placement target, e.g. a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    /// Everything else the scheduler core attached, passed through untouched.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Candidate {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Map::new(),
        }
    }

    /// Attach an opaque field. The reserved `id` key is ignored; set
    /// [`Candidate::id`] instead.
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        let key = key.into();
        if key != ID_KEY {
            self.attributes.insert(key, value);
        }
        self
    }
}

/// Ordered candidate collection; encodes as a JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateList(pub Vec<Candidate>);

impl CandidateList {
    pub fn new(items: Vec<Candidate>) -> Self {
        Self(items)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.0.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.0.iter().map(|c| c.id.as_str()).collect()
    }
}

impl From<Vec<Candidate>> for CandidateList {
    fn from(items: Vec<Candidate>) -> Self {
        Self(items)
    }
}

impl FromIterator<Candidate> for CandidateList {
    fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CandidateList {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Request body shared by both verbs.
#[derive(Debug, Serialize)]
pub struct ExtenderArgs<'a> {
    pub request: &'a PlacementRequest,
    pub candidates: &'a CandidateList,
}

/// Response to the filter verb. A non-empty `error` voids `candidates`.
///
/// Extenders written in Go encode an empty list or string as `null`; both
/// fields read `null` as their empty value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub candidates: CandidateList,
    #[serde(default, deserialize_with = "null_as_default")]
    pub error: String,
}

/// One candidate's score as assigned by an extender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    pub target_id: String,
    pub score: i64,
}

impl ScoreEntry {
    pub fn new(target_id: impl Into<String>, score: i64) -> Self {
        Self {
            target_id: target_id.into(),
            score,
        }
    }
}

/// Ordered scores; encodes as a JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreList(pub Vec<ScoreEntry>);

impl ScoreList {
    /// One zero score per candidate, in candidate order.
    pub fn zeroed(candidates: &CandidateList) -> Self {
        candidates
            .iter()
            .map(|c| ScoreEntry::new(c.id.clone(), 0))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoreEntry> {
        self.0.iter()
    }

    /// Decode a prioritize response body; `null` is an empty list.
    pub fn from_response(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice::<Option<ScoreList>>(body).map(Option::unwrap_or_default)
    }
}

impl FromIterator<ScoreEntry> for ScoreList {
    fn from_iter<I: IntoIterator<Item = ScoreEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(d).map(Option::unwrap_or_default)
}
