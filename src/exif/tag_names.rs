//! EXIF tag name definitions
//!
//! Tag names are loaded from `exif_tags.toml`, embedded at build time,
//! and used to make log output and error messages readable.

use std::collections::HashMap;
use lazy_static::lazy_static;

use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::value::TagCategory;

lazy_static! {
    // Parse the embedded TOML once, on first lookup
    static ref TAG_DEFINITIONS: TagDefinitions = {
        let content = include_str!("../../exif_tags.toml");
        TagDefinitions::from_str(content).unwrap_or_else(|e| {
            log::warn!("Failed to parse EXIF tag definitions: {}", e);
            TagDefinitions::default()
        })
    };
}

/// Tag id to name tables, one per directory
#[derive(Debug, Default)]
pub struct TagDefinitions {
    pub primary: HashMap<u16, String>,
    pub exif: HashMap<u16, String>,
    pub gps: HashMap<u16, String>,
}

impl TagDefinitions {
    /// Parse tag definitions from a TOML string
    pub fn from_str(content: &str) -> ExifResult<Self> {
        let toml_value: toml::Value = content
            .parse()
            .map_err(|e| ExifError::GenericError(format!("Failed to parse TOML: {}", e)))?;

        let mut defs = TagDefinitions::default();
        Self::parse_table(&toml_value, "primary_tags", &mut defs.primary);
        Self::parse_table(&toml_value, "exif_tags", &mut defs.exif);
        Self::parse_table(&toml_value, "gps_tags", &mut defs.gps);

        Ok(defs)
    }

    fn parse_table(toml_value: &toml::Value, table_name: &str, target: &mut HashMap<u16, String>) {
        if let Some(table) = toml_value.get(table_name).and_then(|v| v.as_table()) {
            for (k, v) in table {
                if let (Ok(id), Some(name)) = (k.parse::<u16>(), v.as_str()) {
                    target.insert(id, name.to_string());
                }
            }
        }
    }

    /// Get a tag name by directory and id
    pub fn get_tag_name(&self, category: TagCategory, tag: u16) -> String {
        let table = match category {
            TagCategory::Primary => &self.primary,
            TagCategory::Exif => &self.exif,
            TagCategory::Gps => &self.gps,
        };

        table.get(&tag)
            .cloned()
            .unwrap_or_else(|| format!("Unknown-{}", tag))
    }
}

/// Get a tag name from the embedded definitions
pub fn get_tag_name(category: TagCategory, tag: u16) -> String {
    TAG_DEFINITIONS.get_tag_name(category, tag)
}
