//! Conversion between [`Value`]s and their JSON wire form.
//!
//! Special values travel as single-key objects whose key is a reserved tag:
//!
//! | value | wire form |
//! |---|---|
//! | [`Ref`] | `{"@ref": "classes/spells/1"}` |
//! | [`SetRef`] | `{"@set": {"match": .., "terms": ..}}` |
//! | timestamp | `{"@ts": "2017-01-01T00:00:00.123456789Z"}` |
//! | date | `{"@date": "2017-01-01"}` |
//! | [`Bytes`] | `{"@bytes": "AQID"}` (base64url) |
//! | [`QueryFragment`] | `{"@query": {"lambda": ..}}` |
//!
//! `{"@obj": {..}}` escapes an object whose own keys would otherwise be read
//! as tags.

use crate::{Bytes, Error, Expr, QueryFragment, Ref, Result, SetRef, Value};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use indexmap::IndexMap;
use serde_json::{Map, Number};

pub const TAG_REF: &str = "@ref";
pub const TAG_SET: &str = "@set";
pub const TAG_OBJ: &str = "@obj";
pub const TAG_TS: &str = "@ts";
pub const TAG_DATE: &str = "@date";
pub const TAG_BYTES: &str = "@bytes";
pub const TAG_QUERY: &str = "@query";

/// Every reserved tag key.
pub const TAGS: [&str; 7] = [
    TAG_REF, TAG_SET, TAG_OBJ, TAG_TS, TAG_DATE, TAG_BYTES, TAG_QUERY,
];

const DATE_FORMAT: &str = "%Y-%m-%d";

// Years outside 0..=9999 are written with a sign, which RFC 3339 has no room for
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.9fZ";
const TIMESTAMP_PARSE_UTC: &str = "%Y-%m-%dT%H:%M:%S%.fZ";
const TIMESTAMP_PARSE_OFFSET: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

pub fn is_tag(key: &str) -> bool {
    TAGS.contains(&key)
}

/// Rewrites a value into its wire form.
pub fn encode(value: &Value) -> serde_json::Value {
    use serde_json::Value as J;

    match value {
        Value::Null => J::Null,
        Value::Bool(v) => J::Bool(*v),
        Value::Int(v) => J::Number((*v).into()),
        // JSON has no representation for NaN or infinities; they are sent as null
        Value::Float(v) => Number::from_f64(*v).map(J::Number).unwrap_or(J::Null),
        Value::String(v) => J::String(v.clone()),
        Value::Array(items) => J::Array(items.iter().map(encode).collect()),
        Value::Object(fields) => {
            let encoded = encode_fields(fields);

            if fields.keys().any(|key| is_tag(key)) {
                tagged(TAG_OBJ, J::Object(encoded))
            } else {
                J::Object(encoded)
            }
        }
        Value::Ref(reference) => tagged(TAG_REF, J::String(reference.as_str().to_string())),
        Value::Set(set) => tagged(TAG_SET, encode(set.value())),
        Value::Timestamp(ts) => tagged(TAG_TS, J::String(ts.format(TIMESTAMP_FORMAT).to_string())),
        Value::Date(date) => tagged(TAG_DATE, J::String(date.format(DATE_FORMAT).to_string())),
        Value::Bytes(bytes) => tagged(TAG_BYTES, J::String(bytes.to_base64url())),
        Value::Query(fragment) => tagged(TAG_QUERY, fragment.as_json().clone()),
    }
}

/// Encodes an expression's value.
pub fn encode_expr(expr: &Expr) -> serde_json::Value {
    encode(expr.as_value())
}

/// Serializes an expression to the UTF-8 request body.
pub fn to_vec(expr: &Expr) -> Vec<u8> {
    // Serializing a `serde_json::Value` cannot fail
    serde_json::to_vec(&encode_expr(expr)).unwrap_or_default()
}

/// Reads a value back from its wire form.
pub fn decode(json: &serde_json::Value) -> Result<Value> {
    use serde_json::Value as J;

    Ok(match json {
        J::Null => Value::Null,
        J::Bool(v) => Value::Bool(*v),
        J::Number(n) => match n.as_i64() {
            Some(v) => Value::Int(v),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        J::String(v) => Value::String(v.clone()),
        J::Array(items) => Value::Array(items.iter().map(decode).collect::<Result<_>>()?),
        J::Object(map) => decode_object(map)?,
    })
}

/// Parses and decodes a response body.
pub fn from_slice(body: &[u8]) -> Result<Value> {
    let json: serde_json::Value = serde_json::from_slice(body)
        .map_err(|err| Error::unexpected_format(format!("invalid JSON: {err}")))?;
    decode(&json)
}

fn encode_fields(fields: &IndexMap<String, Value>) -> Map<String, serde_json::Value> {
    fields
        .iter()
        .map(|(key, value)| (key.clone(), encode(value)))
        .collect()
}

fn tagged(tag: &str, payload: serde_json::Value) -> serde_json::Value {
    let mut map = Map::with_capacity(1);
    map.insert(tag.to_string(), payload);
    serde_json::Value::Object(map)
}

fn decode_object(map: &Map<String, serde_json::Value>) -> Result<Value> {
    let tags: Vec<&str> = map.keys().map(|key| &key[..]).filter(|key| is_tag(key)).collect();

    match tags[..] {
        [] => decode_fields(map),
        [tag] if map.len() == 1 => decode_tagged(tag, &map[tag]),
        [tag] => Err(Error::unexpected_format(format!(
            "reserved tag {tag} mixed with other keys"
        ))),
        _ => Err(Error::unexpected_format(format!(
            "multiple reserved tags in one object: {}",
            tags.join(", ")
        ))),
    }
}

fn decode_fields(map: &Map<String, serde_json::Value>) -> Result<Value> {
    Ok(Value::Object(
        map.iter()
            .map(|(key, value)| Ok((key.clone(), decode(value)?)))
            .collect::<Result<_>>()?,
    ))
}

fn decode_tagged(tag: &str, payload: &serde_json::Value) -> Result<Value> {
    match tag {
        TAG_REF => Ok(Ref::new(expect_str(tag, payload)?).into()),
        TAG_SET => Ok(SetRef::new(decode(payload)?).into()),
        TAG_OBJ => match payload {
            // The payload is literal data: its own keys are never tags
            serde_json::Value::Object(map) => decode_fields(map),
            _ => Err(Error::unexpected_format("@obj payload is not an object")),
        },
        TAG_TS => {
            let text = expect_str(tag, payload)?;
            Ok(Value::Timestamp(parse_timestamp(text)?))
        }
        TAG_DATE => {
            let text = expect_str(tag, payload)?;
            let date = NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|err| {
                Error::unexpected_format(format!("invalid @date payload {text:?}: {err}"))
            })?;
            Ok(Value::Date(date))
        }
        TAG_BYTES => Ok(Bytes::from_base64url(expect_str(tag, payload)?)?.into()),
        TAG_QUERY => Ok(QueryFragment::new(payload.clone()).into()),
        _ => Err(Error::unexpected_format(format!("unknown tag {tag}"))),
    }
}

fn parse_timestamp(text: &str) -> Result<DateTime<Utc>> {
    let err = match DateTime::parse_from_rfc3339(text) {
        Ok(ts) => return Ok(ts.with_timezone(&Utc)),
        Err(err) => err,
    };

    if let Ok(ts) = NaiveDateTime::parse_from_str(text, TIMESTAMP_PARSE_UTC) {
        return Ok(ts.and_utc());
    }

    if let Ok(ts) = DateTime::parse_from_str(text, TIMESTAMP_PARSE_OFFSET) {
        return Ok(ts.with_timezone(&Utc));
    }

    Err(Error::unexpected_format(format!(
        "invalid @ts payload {text:?}: {err}"
    )))
}

fn expect_str<'a>(tag: &str, payload: &'a serde_json::Value) -> Result<&'a str> {
    payload
        .as_str()
        .ok_or_else(|| Error::unexpected_format(format!("{tag} payload is not a string")))
}
