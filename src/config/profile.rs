//! Profile record shown by the portfolio
//!
//! The record is immutable once loaded. The built-in reference profile is the
//! fallback when no config file exists.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::constants::profile::{DEFAULT_SLIDE_COUNT, DESCRIPTION_KEY};
use crate::types::{InfoEntry, InfoList};

/// One album slide. Without an image it renders as a numbered placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_about")]
    pub about: String,

    // Initial disclosure states
    #[serde(default = "default_basic_info_open")]
    pub basic_info_open: bool,
    #[serde(default)]
    pub family_details_open: bool,

    #[serde(default = "default_basic_info")]
    pub basic_info: InfoList,
    #[serde(default = "default_family_details")]
    pub family_details: InfoList,
    #[serde(default = "default_slides")]
    pub slides: Vec<Slide>,
}

fn default_name() -> String {
    "Sample Name".to_string()
}

fn default_about() -> String {
    "Hello! I'm a software engineer who enjoys exploring new technologies, travelling to new \
     places, reading books and spending quality time with family. I believe in balancing \
     tradition and modern values and I'm looking for a partner who shares a similar outlook \
     on life."
        .to_string()
}

fn default_basic_info() -> InfoList {
    [
        ("Date of Birth", "30 December 1995"),
        ("Height", "5'11\" (180 cm)"),
        ("Community", "Hindu, Brahmin – Halua"),
        ("Rasi", "Mesh (Aries)"),
        ("Gotra", "Kashyap"),
        ("Blood Group", "B+"),
    ]
    .into_iter()
    .collect()
}

fn default_family_details() -> InfoList {
    [
        ("Father's Occupation", "Headmaster (Retired)"),
        ("Mother's Occupation", "Teacher"),
        ("Siblings", "1"),
        (
            DESCRIPTION_KEY,
            "We are a close\u{2011}knit family who values education, culture and mutual \
             respect. We believe in supporting one another and maintaining a harmonious \
             balance between tradition and modern living.",
        ),
    ]
    .into_iter()
    .collect()
}

fn default_slides() -> Vec<Slide> {
    vec![Slide::default(); DEFAULT_SLIDE_COUNT]
}

fn default_basic_info_open() -> bool {
    true
}

impl Default for ProfileRecord {
    fn default() -> Self {
        Self {
            name: default_name(),
            about: default_about(),
            basic_info_open: default_basic_info_open(),
            family_details_open: false,
            basic_info: default_basic_info(),
            family_details: default_family_details(),
            slides: default_slides(),
        }
    }
}

impl ProfileRecord {
    /// Slide count for the carousel; `None` only before validation fixes an
    /// empty slide list
    pub fn slide_count(&self) -> Option<NonZeroUsize> {
        NonZeroUsize::new(self.slides.len())
    }

    /// Family rows shown as `label: value`, without the description
    pub fn family_rows(&self) -> impl Iterator<Item = &InfoEntry> {
        self.family_details.rows_excluding(DESCRIPTION_KEY)
    }

    /// Family description rendered as trailing prose
    pub fn family_description(&self) -> Option<&str> {
        self.family_details.get(DESCRIPTION_KEY)
    }
}
