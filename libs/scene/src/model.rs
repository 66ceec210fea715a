use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::timestamp::time_to_seconds;

/// One analyzed temporal segment of a video.
///
/// The known fields match the analysis output schema; anything else the
/// analyzer emitted is preserved in `extra` so unrecognized keys survive a
/// round trip.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Scene {
    #[serde(default, deserialize_with = "null_as_default")]
    pub scene_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odk_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub locations: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub keywords: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub sensitivity: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_marker_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_marker_position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Scene {
    /// Start offset for the player embed, in seconds.
    pub fn start_seconds(&self) -> Option<u64> {
        self.start_time.as_deref().map(time_to_seconds)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Labels {
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub emotions: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub themes: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub actions: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub objects: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub characters: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub weather: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub brands: Vec<String>,
}

/// One analyzed video: its ordered scene list plus any legacy top-level
/// keys preserved from the object file format.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct VideoData {
    pub scenes: Vec<Scene>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VideoData {
    /// Accepts both storage formats: a bare JSON array of scenes (current)
    /// and an object with a `scenes` array (legacy). Legacy objects keep
    /// their unrecognized top-level keys; an object whose `scenes` is
    /// missing or not an array yields an empty scene list.
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        match value {
            Value::Array(scenes) => Ok(Self {
                scenes: parse_scenes(scenes)?,
                extra: Map::new(),
            }),
            Value::Object(mut map) => {
                let scenes = match map.remove("scenes") {
                    Some(Value::Array(scenes)) => parse_scenes(scenes)?,
                    _ => {
                        warn!("invalid video data: missing or invalid scenes array");
                        Vec::new()
                    }
                };
                Ok(Self { scenes, extra: map })
            }
            _ => {
                warn!("invalid video data: not an array or object");
                Ok(Self::default())
            }
        }
    }
}

fn parse_scenes(scenes: Vec<Value>) -> serde_json::Result<Vec<Scene>> {
    scenes.into_iter().map(serde_json::from_value).collect()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let opt = Option::<T>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}
