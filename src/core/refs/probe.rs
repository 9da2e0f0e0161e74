//! Commit discovery on source-control history items.
//!
//! A history item is whatever JSON the caller hands us. Each probe looks at
//! one known shape and the probes run in a fixed order; the first hit wins.

use serde_json::{Map, Value};
use tracing::debug;
use url::Url;

use super::CommitRef;

/// Property names that may directly hold a commit id.
pub const CANDIDATE_PROPERTIES: [&str; 6] = ["id", "ref", "commitish", "sha", "hash", "revision"];

/// Query parameters that may carry a commit id in an item URI.
pub const URI_QUERY_KEYS: [&str; 3] = ["ref", "commit", "revision"];

/// Fields holding human-readable text that may mention a commit.
pub const TEXT_FIELDS: [&str; 4] = ["tooltip", "description", "label", "detail"];

const URI_FIELDS: [&str; 3] = ["uri", "resourceUri", "resource"];

/// One strategy for pulling a commit id out of a history item.
pub trait ReferenceProbe {
    fn name(&self) -> &'static str;

    fn probe(&self, item: &Map<String, Value>) -> Option<CommitRef>;
}

pub struct PropertyProbe;
pub struct UriQueryProbe;
pub struct UriFragmentProbe;
pub struct UriPathProbe;
pub struct CommandArgumentsProbe;
pub struct FreeTextProbe;

/// The probes in priority order.
pub fn default_probes() -> [&'static dyn ReferenceProbe; 6] {
    [
        &PropertyProbe,
        &UriQueryProbe,
        &UriFragmentProbe,
        &UriPathProbe,
        &CommandArgumentsProbe,
        &FreeTextProbe,
    ]
}

/// Run every probe in order against `item` and return the first commit found.
pub fn find_commit(item: &Value) -> Option<CommitRef> {
    let obj = item.as_object()?;
    default_probes().into_iter().find_map(|p| {
        let hit = p.probe(obj);
        if let Some(c) = &hit {
            debug!(event = "probe_hit", probe = p.name(), commit = %c);
        }
        hit
    })
}

fn candidate_property(obj: &Map<String, Value>) -> Option<CommitRef> {
    CANDIDATE_PROPERTIES
        .iter()
        .filter_map(|key| obj.get(*key)?.as_str())
        .find_map(CommitRef::parse)
}

impl ReferenceProbe for PropertyProbe {
    fn name(&self) -> &'static str {
        "property"
    }

    fn probe(&self, item: &Map<String, Value>) -> Option<CommitRef> {
        candidate_property(item)
    }
}

/// The parts of an item URI the probes care about.
#[derive(Debug, Default, PartialEq, Eq)]
struct UriParts {
    path: String,
    query: Vec<(String, String)>,
    fragment: String,
}

impl UriParts {
    fn from_item(item: &Map<String, Value>) -> Option<Self> {
        URI_FIELDS
            .iter()
            .filter_map(|key| item.get(*key))
            .find_map(Self::from_value)
    }

    fn from_value(v: &Value) -> Option<Self> {
        match v {
            Value::String(s) => Self::parse(s),
            Value::Object(o) => {
                let field = |k: &str| o.get(k).and_then(Value::as_str).unwrap_or_default();
                let parts = Self {
                    path: field("path").to_string(),
                    query: parse_query(field("query")),
                    fragment: field("fragment").to_string(),
                };
                (parts != Self::default()).then_some(parts)
            }
            _ => None,
        }
    }

    fn parse(s: &str) -> Option<Self> {
        let url = Url::parse(s).ok()?;
        Some(Self {
            path: url.path().to_string(),
            query: parse_query(url.query().unwrap_or_default()),
            fragment: url.fragment().unwrap_or_default().to_string(),
        })
    }
}

// Git document URIs carry their query as a (percent-encoded) JSON object
// rather than form pairs; that decodes to a single key with no value.
fn parse_query(query: &str) -> Vec<(String, String)> {
    let pairs: Vec<(String, String)> =
        url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
            .into_owned()
            .collect();
    if let [(key, value)] = pairs.as_slice()
        && value.is_empty()
        && let Ok(Value::Object(o)) = serde_json::from_str::<Value>(key)
    {
        return o
            .into_iter()
            .filter_map(|(k, v)| Some((k, v.as_str()?.to_string())))
            .collect();
    }
    pairs
}

impl ReferenceProbe for UriQueryProbe {
    fn name(&self) -> &'static str {
        "uri_query"
    }

    fn probe(&self, item: &Map<String, Value>) -> Option<CommitRef> {
        let uri = UriParts::from_item(item)?;
        URI_QUERY_KEYS.iter().find_map(|key| {
            uri.query
                .iter()
                .filter(|(k, _)| k.as_str() == *key)
                .find_map(|(_, v)| CommitRef::parse(v))
        })
    }
}

impl ReferenceProbe for UriFragmentProbe {
    fn name(&self) -> &'static str {
        "uri_fragment"
    }

    fn probe(&self, item: &Map<String, Value>) -> Option<CommitRef> {
        CommitRef::find_in(&UriParts::from_item(item)?.fragment)
    }
}

impl ReferenceProbe for UriPathProbe {
    fn name(&self) -> &'static str {
        "uri_path"
    }

    fn probe(&self, item: &Map<String, Value>) -> Option<CommitRef> {
        CommitRef::find_in(&UriParts::from_item(item)?.path)
    }
}

impl ReferenceProbe for CommandArgumentsProbe {
    fn name(&self) -> &'static str {
        "command_arguments"
    }

    fn probe(&self, item: &Map<String, Value>) -> Option<CommitRef> {
        let args = item
            .get("command")
            .and_then(|c| c.get("arguments"))
            .or_else(|| item.get("arguments"))?
            .as_array()?;

        args.iter()
            .filter_map(Value::as_str)
            .find_map(CommitRef::parse)
            .or_else(|| {
                args.iter()
                    .filter_map(Value::as_object)
                    .find_map(candidate_property)
            })
    }
}

impl ReferenceProbe for FreeTextProbe {
    fn name(&self) -> &'static str {
        "free_text"
    }

    fn probe(&self, item: &Map<String, Value>) -> Option<CommitRef> {
        TEXT_FIELDS
            .iter()
            .filter_map(|key| text_of(item.get(*key)?))
            .find_map(CommitRef::find_in)
    }
}

// Rich tooltips arrive as `{ "value": "..." }`, tree labels as `{ "label": "..." }`.
fn text_of(v: &Value) -> Option<&str> {
    match v {
        Value::String(s) => Some(s),
        Value::Object(o) => o
            .get("value")
            .or_else(|| o.get("label"))
            .and_then(Value::as_str),
        _ => None,
    }
}
