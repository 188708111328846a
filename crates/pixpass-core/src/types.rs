// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Pixpass document renderer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::PixpassError;

/// An opaque 24-bit colour. Serialised as `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a colour from a `0xRRGGBB` literal.
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    /// RGBA channels at full opacity.
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 0xff]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = PixpassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| PixpassError::InvalidColor(s.to_owned()))?;
        let value =
            u32::from_str_radix(digits, 16).map_err(|_| PixpassError::InvalidColor(s.to_owned()))?;
        Ok(Self::hex(value))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// The fixed two-tone palette used for photos and default ink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub light: Color,
    pub dark: Color,
}

impl Palette {
    pub const DEFAULT: Palette = Palette {
        light: Color::hex(0xac9f9b),
        dark: Color::hex(0x625252),
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// An absolute position in base-template space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The document fields a profile can lay out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Dob,
    Sex,
    City,
    Number,
    Expiry,
}

impl FieldName {
    pub const ALL: [FieldName; 6] = [
        FieldName::Name,
        FieldName::Dob,
        FieldName::Sex,
        FieldName::City,
        FieldName::Number,
        FieldName::Expiry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Dob => "dob",
            Self::Sex => "sex",
            Self::City => "city",
            Self::Number => "number",
            Self::Expiry => "expiry",
        }
    }
}

/// Horizontal anchoring of a rendered field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// The run starts at the anchor x.
    #[default]
    Left,
    /// The run ends immediately before the anchor x.
    Right,
}

/// Raw per-request field values. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldValues {
    pub name: String,
    pub dob: String,
    pub sex: String,
    pub city: String,
    pub number: String,
    pub expiry: String,
}

impl FieldValues {
    /// The supplied value for `field`, or `None` when it is empty.
    pub fn get(&self, field: FieldName) -> Option<&str> {
        let value = match field {
            FieldName::Name => &self.name,
            FieldName::Dob => &self.dob,
            FieldName::Sex => &self.sex,
            FieldName::City => &self.city,
            FieldName::Number => &self.number,
            FieldName::Expiry => &self.expiry,
        };
        (!value.is_empty()).then_some(value.as_str())
    }
}

/// Source raster formats accepted at the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Jpeg,
    Png,
    Gif,
}

impl SourceFormat {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Gif => "gif",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_parses_and_prints_hex() {
        let c: Color = "#483d8b".parse().expect("valid colour");
        assert_eq!(c, Color::rgb(0x48, 0x3d, 0x8b));
        assert_eq!(c.to_string(), "#483d8b");
        assert_eq!(Color::hex(0xEFE4DD).to_string(), "#efe4dd");
    }

    #[test]
    fn color_rejects_malformed_input() {
        for bad in ["483d8b", "#483d8", "#483d8bb", "#48zd8b", "", "#"] {
            assert!(bad.parse::<Color>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn color_serde_uses_hex_strings() {
        let json = serde_json::to_string(&Color::hex(0x625252)).expect("serialize");
        assert_eq!(json, "\"#625252\"");
        let back: Color = serde_json::from_str("\"#ac9f9b\"").expect("deserialize");
        assert_eq!(back, Palette::DEFAULT.light);
    }

    #[test]
    fn empty_field_values_are_absent() {
        let values = FieldValues {
            name: "Jorji Costava".into(),
            sex: String::new(),
            ..Default::default()
        };
        assert_eq!(values.get(FieldName::Name), Some("Jorji Costava"));
        assert_eq!(values.get(FieldName::Sex), None);
        assert_eq!(values.get(FieldName::Expiry), None);
    }

    #[test]
    fn field_values_tolerate_missing_keys() {
        let values: FieldValues =
            serde_json::from_str(r#"{"name": "A B", "number": "x1"}"#).expect("deserialize");
        assert_eq!(values.get(FieldName::Number), Some("x1"));
        assert_eq!(values.get(FieldName::City), None);
    }

}
