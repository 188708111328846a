// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Country profile table: colours, field coordinates and allowed cities for
// every issuing country. Static data, shared read-only by all requests.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::{PixpassError, Result};
use crate::types::{Align, Color, FieldName, Palette, Point};

/// Ink colour printed on the blank templates themselves.
const PRINT_COLOR: Color = Color::hex(0x2c2e2a);

/// Layout of one field on a document, in base-template space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldLayout {
    pub field: FieldName,
    /// Anchor x. Left-aligned runs start here, right-aligned runs end here.
    pub x: i32,
    /// Anchor line. Text sits in the 8 rows directly above it.
    pub y: i32,
    pub max_length: usize,
    pub align: Align,
    /// Label printed next to the field on synthesised templates.
    pub label: Option<&'static str>,
}

impl FieldLayout {
    const fn at(field: FieldName, x: i32, y: i32, max_length: usize) -> Self {
        let label = match field {
            FieldName::Dob => Some("DOB:"),
            FieldName::Sex => Some("SEX:"),
            FieldName::City => Some("ISS:"),
            FieldName::Expiry => Some("EXP:"),
            FieldName::Name | FieldName::Number => None,
        };
        Self {
            field,
            x,
            y,
            max_length,
            align: Align::Left,
            label,
        }
    }

    const fn right_aligned(mut self) -> Self {
        self.align = Align::Right;
        self
    }
}

/// Everything needed to lay out one country's document.
#[derive(Debug, Clone, Serialize)]
pub struct CountryProfile {
    /// Lookup key, e.g. `"arstotzka"`.
    pub code: &'static str,
    pub display_name: &'static str,
    /// Accent colour for borders, title and seal.
    pub primary_color: Color,
    pub seal: char,
    /// Ink for rendered field values.
    pub text_color: Color,
    /// Ink for labels printed on synthesised templates.
    pub print_color: Color,
    /// Replaces the ink of every non-name field and every printed label.
    pub label_color_override: Option<Color>,
    /// Top-left corner of the photo.
    pub photo_anchor: Point,
    #[serde(serialize_with = "serialize_field_map")]
    pub fields: &'static [FieldLayout],
    pub allowed_cities: &'static [&'static str],
}

impl CountryProfile {
    /// Ink for a field value under this profile's label colour policy.
    pub fn field_color(&self, field: FieldName) -> Color {
        match field {
            FieldName::Name => self.text_color,
            _ => self.label_color_override.unwrap_or(self.text_color),
        }
    }

    /// Ink for labels printed on a synthesised template.
    pub fn label_color(&self) -> Color {
        self.label_color_override.unwrap_or(self.print_color)
    }

    pub fn field(&self, field: FieldName) -> Option<&FieldLayout> {
        self.fields.iter().find(|layout| layout.field == field)
    }

    /// Case-insensitive membership test against the allowed city list.
    pub fn is_allowed_city(&self, city: &str) -> bool {
        let city = city.trim();
        self.allowed_cities
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(city))
    }
}

fn serialize_field_map<S: Serializer>(
    fields: &&'static [FieldLayout],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(fields.len()))?;
    for layout in fields.iter() {
        map.serialize_entry(layout.field.as_str(), layout)?;
    }
    map.end()
}

/// Every supported country, in catalogue order.
static PROFILES: [CountryProfile; 7] = [
    CountryProfile {
        code: "antegria",
        display_name: "Antegria",
        primary_color: Color::hex(0x483d8b),
        seal: '●',
        text_color: Palette::DEFAULT.dark,
        print_color: PRINT_COLOR,
        label_color_override: None,
        photo_anchor: Point::new(83, 88),
        fields: &[
            FieldLayout::at(FieldName::Name, 8, 146, 20),
            FieldLayout::at(FieldName::Dob, 25, 108, 10),
            FieldLayout::at(FieldName::Sex, 25, 117, 1),
            FieldLayout::at(FieldName::City, 25, 126, 15),
            FieldLayout::at(FieldName::Number, 121, 155, 10).right_aligned(),
            FieldLayout::at(FieldName::Expiry, 25, 135, 10),
        ],
        allowed_cities: &["St. Marmero", "Glorian", "Outer Grouse"],
    },
    CountryProfile {
        code: "arstotzka",
        display_name: "Arstotzka",
        primary_color: Color::hex(0x8b2635),
        seal: '★',
        text_color: Palette::DEFAULT.dark,
        print_color: PRINT_COLOR,
        label_color_override: None,
        photo_anchor: Point::new(8, 98),
        fields: &[
            FieldLayout::at(FieldName::Name, 8, 95, 20),
            FieldLayout::at(FieldName::Dob, 66, 105, 10),
            FieldLayout::at(FieldName::Sex, 66, 113, 1),
            FieldLayout::at(FieldName::City, 66, 121, 15),
            FieldLayout::at(FieldName::Number, 8, 155, 9),
            FieldLayout::at(FieldName::Expiry, 66, 129, 10),
        ],
        allowed_cities: &["Orvech Vonor", "East Grestin", "Paradizna"],
    },
    CountryProfile {
        code: "impor",
        display_name: "Impor",
        primary_color: Color::hex(0x8b4513),
        seal: '■',
        text_color: Palette::DEFAULT.dark,
        print_color: PRINT_COLOR,
        label_color_override: None,
        photo_anchor: Point::new(9, 96),
        fields: &[
            FieldLayout::at(FieldName::Name, 8, 93, 20),
            FieldLayout::at(FieldName::Dob, 70, 103, 10),
            FieldLayout::at(FieldName::Sex, 70, 111, 1),
            FieldLayout::at(FieldName::City, 70, 119, 15),
            FieldLayout::at(FieldName::Number, 66, 153, 9),
            FieldLayout::at(FieldName::Expiry, 70, 127, 10),
        ],
        allowed_cities: &["Enkyo", "Haihan", "Tsunkeido"],
    },
    CountryProfile {
        code: "kolechia",
        display_name: "Kolechia",
        primary_color: Color::hex(0x2c5aa0),
        seal: '▲',
        text_color: Palette::DEFAULT.dark,
        print_color: PRINT_COLOR,
        label_color_override: None,
        photo_anchor: Point::new(8, 106),
        fields: &[
            FieldLayout::at(FieldName::Name, 8, 105, 20),
            FieldLayout::at(FieldName::Dob, 69, 114, 10),
            FieldLayout::at(FieldName::Sex, 69, 122, 1),
            FieldLayout::at(FieldName::City, 69, 130, 15),
            FieldLayout::at(FieldName::Number, 68, 155, 9),
            FieldLayout::at(FieldName::Expiry, 69, 138, 10),
        ],
        allowed_cities: &["Yurko City", "Vedor", "West Grestin"],
    },
    CountryProfile {
        code: "obristan",
        display_name: "Obristan",
        primary_color: Color::hex(0xefe4dd),
        seal: '◆',
        text_color: Palette::DEFAULT.dark,
        print_color: PRINT_COLOR,
        // Printed on the dark lower half of the booklet.
        label_color_override: Some(Color::hex(0xefe4dd)),
        photo_anchor: Point::new(84, 107),
        fields: &[
            FieldLayout::at(FieldName::Name, 8, 106, 20),
            FieldLayout::at(FieldName::Dob, 27, 118, 10),
            FieldLayout::at(FieldName::Sex, 27, 126, 1),
            FieldLayout::at(FieldName::City, 27, 134, 15),
            FieldLayout::at(FieldName::Number, 10, 155, 9),
            FieldLayout::at(FieldName::Expiry, 27, 142, 10),
        ],
        allowed_cities: &["Skal", "Lorndaz", "Mergerous"],
    },
    CountryProfile {
        code: "republia",
        display_name: "Republia",
        primary_color: Color::hex(0xb8860b),
        seal: '▼',
        text_color: Palette::DEFAULT.dark,
        print_color: PRINT_COLOR,
        label_color_override: None,
        photo_anchor: Point::new(85, 96),
        fields: &[
            FieldLayout::at(FieldName::Name, 8, 94, 20),
            FieldLayout::at(FieldName::Dob, 27, 105, 10),
            FieldLayout::at(FieldName::Sex, 27, 113, 1),
            FieldLayout::at(FieldName::City, 27, 121, 15),
            FieldLayout::at(FieldName::Number, 67, 155, 9),
            FieldLayout::at(FieldName::Expiry, 27, 129, 10),
        ],
        allowed_cities: &["True Glorian", "Lesrenadi", "Bostan"],
    },
    CountryProfile {
        code: "united_federation",
        display_name: "United Federation",
        primary_color: Color::hex(0x2f4f4f),
        seal: '✦',
        text_color: Palette::DEFAULT.dark,
        print_color: PRINT_COLOR,
        label_color_override: None,
        photo_anchor: Point::new(8, 106),
        fields: &[
            FieldLayout::at(FieldName::Name, 8, 105, 20),
            FieldLayout::at(FieldName::Dob, 69, 113, 10),
            FieldLayout::at(FieldName::Sex, 69, 121, 1),
            FieldLayout::at(FieldName::City, 69, 129, 15),
            FieldLayout::at(FieldName::Number, 68, 155, 9),
            FieldLayout::at(FieldName::Expiry, 69, 137, 10),
        ],
        allowed_cities: &["Great Rapid", "Shingleton", "Korista City"],
    },
];

/// All profiles in catalogue order.
pub fn profiles() -> impl Iterator<Item = &'static CountryProfile> {
    PROFILES.iter()
}

/// Look up a profile by country code.
pub fn profile(code: &str) -> Option<&'static CountryProfile> {
    PROFILES.iter().find(|p| p.code == code)
}

/// Look up a profile, failing with [`PixpassError::UnknownCountry`].
pub fn require_profile(code: &str) -> Result<&'static CountryProfile> {
    profile(code).ok_or_else(|| PixpassError::UnknownCountry(code.to_owned()))
}
