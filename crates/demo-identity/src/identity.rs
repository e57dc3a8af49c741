//! Generated identity types.
//!
//! These types are independent of any persistence shape. The backend maps
//! them onto store rows at the point of writing.

use serde::Serialize;

/// Gender recorded on a generated profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    /// Serialized as `"Woman"`.
    Woman,
    /// Serialized as `"Man"`.
    Man,
    /// Serialized as `"Non-binary"`.
    #[serde(rename = "Non-binary")]
    NonBinary,
}

impl Gender {
    /// Returns the label stored on profile rows.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Woman => "Woman",
            Self::Man => "Man",
            Self::NonBinary => "Non-binary",
        }
    }
}

/// Scene a randomized profile photo depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scene {
    /// Head-and-shoulders shot; always the first photo.
    Portrait,
    /// Outdoor setting.
    Outdoor,
    /// Everyday lifestyle setting.
    Lifestyle,
    /// Doing an activity.
    Activity,
    /// With friends.
    Social,
}

impl Scene {
    /// Scenes in slot order.
    pub const ALL: [Self; 5] = [
        Self::Portrait,
        Self::Outdoor,
        Self::Lifestyle,
        Self::Activity,
        Self::Social,
    ];

    /// Returns the stored scene label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Outdoor => "outdoor",
            Self::Lifestyle => "lifestyle",
            Self::Activity => "activity",
            Self::Social => "social",
        }
    }
}

/// A photo reference attached to a generated identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhotoRef {
    /// Absolute image URL.
    pub url: String,
    /// Scene label, present only for randomized identities.
    pub scene: Option<Scene>,
}

/// A complete synthetic identity.
///
/// `tribe` and `tagline` are populated by the randomized generator only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Stable person identifier: the entity key or a random UUID.
    pub person_id: String,
    /// First name.
    pub name: String,
    /// Age in years.
    pub age: u8,
    /// Gender.
    pub gender: Gender,
    /// Profession label.
    pub profession: String,
    /// What the person is looking for.
    pub looking_for: String,
    /// Unique interests in draw order.
    pub interests: Vec<String>,
    /// Profile bio.
    pub bio: String,
    /// Partition name.
    pub country: String,
    /// Sub-location within the partition.
    pub city: String,
    /// Optional tribe or community label.
    pub tribe: Option<String>,
    /// Optional short tagline.
    pub tagline: Option<String>,
    /// Ordered photo references.
    pub photos: Vec<PhotoRef>,
}

impl Identity {
    /// Returns the display location, `"<city>, <country>"`.
    #[must_use]
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }

    /// Returns the photo URLs in slot order.
    #[must_use]
    pub fn photo_urls(&self) -> Vec<String> {
        self.photos.iter().map(|photo| photo.url.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_serializes_to_stored_labels() {
        let json = serde_json::to_string(&[Gender::Woman, Gender::Man, Gender::NonBinary])
            .expect("serialize");
        assert_eq!(json, r#"["Woman","Man","Non-binary"]"#);
        assert_eq!(Gender::NonBinary.as_str(), "Non-binary");
    }

    #[test]
    fn location_joins_city_and_country() {
        let identity = Identity {
            person_id: "Kenya:Nairobi:0".to_owned(),
            name: "Kofi".to_owned(),
            age: 30,
            gender: Gender::Man,
            profession: "Chef".to_owned(),
            looking_for: "Friends".to_owned(),
            interests: vec![],
            bio: String::new(),
            country: "Kenya".to_owned(),
            city: "Nairobi".to_owned(),
            tribe: None,
            tagline: None,
            photos: vec![PhotoRef {
                url: "https://example.invalid/a".to_owned(),
                scene: Some(Scene::Portrait),
            }],
        };
        assert_eq!(identity.location(), "Nairobi, Kenya");
        assert_eq!(identity.photo_urls(), vec!["https://example.invalid/a"]);
    }
}
