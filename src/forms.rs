//! Form payloads and the light validation that runs before any persistence
//! attempt. A failed validation re-renders the submitted form with
//! field-level messages and never touches the database.

use chrono::NaiveDateTime;
use serde::Deserialize;

/// Genre choices offered by the multi-select widgets.
pub const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// US state codes offered by the state select widget.
pub const STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn required(field: &'static str) -> Self {
        Self {
            field,
            message: "This field is required.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VenueForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website_link: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub seeking_talent: Option<String>,
    #[serde(default)]
    pub seeking_description: String,
    #[serde(default)]
    pub image_link: String,
}

impl VenueForm {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.name.is_empty() {
            errors.push(FieldError::required("name"));
        }
        if self.address.is_empty() {
            errors.push(FieldError::required("address"));
        }
        if self.city.is_empty() {
            errors.push(FieldError::required("city"));
        }
        if self.state.is_empty() {
            errors.push(FieldError::required("state"));
        }
        errors
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website_link: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub seeking_venue: Option<String>,
    #[serde(default)]
    pub seeking_description: String,
    #[serde(default)]
    pub image_link: String,
}

impl ArtistForm {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.name.is_empty() {
            errors.push(FieldError::required("name"));
        }
        if self.city.is_empty() {
            errors.push(FieldError::required("city"));
        }
        if self.state.is_empty() {
            errors.push(FieldError::required("state"));
        }
        errors
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShowForm {
    #[serde(default)]
    pub artist_id: String,
    #[serde(default)]
    pub venue_id: String,
    #[serde(default)]
    pub start_time: String,
}

/// A [`ShowForm`] whose fields parsed cleanly. No referential check happens
/// here; a dangling id is caught by the foreign-key constraint at insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedShow {
    pub artistid: i32,
    pub venueid: i32,
    pub start_time: NaiveDateTime,
}

impl ShowForm {
    pub fn validate(&self) -> Result<ParsedShow, Vec<FieldError>> {
        let mut errors = Vec::new();

        let artistid = self.artist_id.trim().parse::<i32>();
        if artistid.is_err() {
            errors.push(FieldError {
                field: "artist_id",
                message: "Artist ID must be a number.".to_string(),
            });
        }
        let venueid = self.venue_id.trim().parse::<i32>();
        if venueid.is_err() {
            errors.push(FieldError {
                field: "venue_id",
                message: "Venue ID must be a number.".to_string(),
            });
        }
        let start_time = parse_start_time(&self.start_time);
        if start_time.is_none() {
            errors.push(FieldError {
                field: "start_time",
                message: "Start time must be a valid date and time.".to_string(),
            });
        }

        match (artistid, venueid, start_time) {
            (Ok(artistid), Ok(venueid), Some(start_time)) => Ok(ParsedShow {
                artistid,
                venueid,
                start_time,
            }),
            _ => Err(errors),
        }
    }
}

/// Accepts the `datetime-local` widget format and the common space-separated
/// variants, with or without seconds.
pub fn parse_start_time(raw: &str) -> Option<NaiveDateTime> {
    const FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    let raw = raw.trim();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Flatten submitted genre selections for storage, e.g. `["Jazz","Blues"]`
/// becomes `"Jazz,Blues"`.
pub fn join_genres(genres: &[String]) -> String {
    genres.join(",")
}

/// Split a stored genre string back into the ordered list. Absent or empty
/// yields an empty list.
pub fn split_genres(stored: Option<&str>) -> Vec<String> {
    match stored {
        Some(s) if !s.is_empty() => s.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

/// Checkbox semantics: a present, non-empty value is true.
pub fn checkbox(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

/// Empty form fields persist as NULL rather than empty strings.
pub fn opt(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
