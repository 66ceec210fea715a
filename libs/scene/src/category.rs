use std::fmt;

use serde_json::{Map, Value};

use crate::model::Scene;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Labels,
    LocationContext,
    KeywordsSensitivity,
    AdMarkers,
    Description,
    Metadata,
    Other,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Labels => "Labels",
            Category::LocationContext => "Location & Context",
            Category::KeywordsSensitivity => "Keywords & Sensitivity",
            Category::AdMarkers => "Ad Markers",
            Category::Description => "Description",
            Category::Metadata => "Metadata",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category membership, consulted in listed order. A key belongs to the
/// first category whose set contains it.
const CATEGORY_TABLE: &[(Category, &[&str])] = &[
    (
        Category::Labels,
        &[
            "labels",
            "emotions",
            "themes",
            "actions",
            "objects",
            "characters",
            "weather",
            "brands",
        ],
    ),
    (Category::LocationContext, &["locations", "genre", "language"]),
    (Category::KeywordsSensitivity, &["keywords", "sensitivity"]),
    (Category::AdMarkers, &["ad_marker_type", "ad_marker_position"]),
    (Category::Description, &["description", "summary"]),
    (
        Category::Metadata,
        &[
            "scene_id",
            "start_time",
            "end_time",
            "odk_id",
            "confidence_score",
        ],
    ),
];

/// Groups a scene object's top-level keys into display categories.
///
/// Known keys are listed in their category's membership order; everything
/// else lands in an Other bucket appended only when non-empty. Pure
/// structural transform, no I/O.
pub fn categorize(scene: &Map<String, Value>) -> Vec<(Category, Vec<(String, Value)>)> {
    let mut groups = Vec::with_capacity(CATEGORY_TABLE.len() + 1);
    for (category, keys) in CATEGORY_TABLE {
        let fields = keys
            .iter()
            .filter_map(|key| scene.get(*key).map(|v| ((*key).to_string(), v.clone())))
            .collect();
        groups.push((*category, fields));
    }

    let other: Vec<(String, Value)> = scene
        .iter()
        .filter(|(key, _)| !is_known_key(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    if !other.is_empty() {
        groups.push((Category::Other, other));
    }
    groups
}

pub fn is_known_key(key: &str) -> bool {
    CATEGORY_TABLE.iter().any(|(_, keys)| keys.contains(&key))
}

/// Categorizes a typed scene record, extension keys included.
pub fn categorize_scene(scene: &Scene) -> Vec<(Category, Vec<(String, Value)>)> {
    match serde_json::to_value(scene) {
        Ok(Value::Object(map)) => categorize(&map),
        _ => CATEGORY_TABLE
            .iter()
            .map(|(category, _)| (*category, Vec::new()))
            .collect(),
    }
}
