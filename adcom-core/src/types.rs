/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Core types shared across AdCOM crates.
//!
//! This module provides:
//! - [`FieldPath`]: Location of a field inside a nested object graph
//! - [`SizeUnit`]: AdCOM list "Size Units"
//! - [`EventTrackingMethod`]: AdCOM list "Event Tracking Methods"

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// One step of a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Named field.
    Field(String),
    /// Element of a repeated field.
    Index(usize),
}

/// Location of a field inside a nested object graph.
///
/// Renders as `display.event[0].wjs`; the empty path renders as `(root)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: SmallVec<[PathSegment; 8]>,
}

impl FieldPath {
    /// Creates the root path.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns true if this is the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Appends a named field segment.
    pub fn push_field(&mut self, name: impl Into<String>) {
        self.segments.push(PathSegment::Field(name.into()));
    }

    /// Appends a list index segment.
    pub fn push_index(&mut self, index: usize) {
        self.segments.push(PathSegment::Index(index));
    }

    /// Removes the last segment.
    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }

    /// Returns a copy of this path extended by one field.
    #[must_use]
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut path = self.clone();
        path.push_field(name);
        path
    }

    /// Returns the segments in order.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("(root)");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if i == 0 => f.write_str(name)?,
                PathSegment::Field(name) => write!(f, ".{}", name)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

/// Units of size used for `w` and `h` attributes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, FromPrimitive, ToPrimitive,
)]
#[repr(i32)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SizeUnit {
    /// Device independent pixels.
    Dips = 1,
    /// Inches.
    Inches = 2,
    /// Centimeters.
    Centimeters = 3,
}

impl SizeUnit {
    /// Every declared unit, in code order.
    pub const ALL: [Self; 3] = [Self::Dips, Self::Inches, Self::Centimeters];

    /// Returns the numeric code.
    #[must_use]
    pub fn code(self) -> i32 {
        self.to_i32().unwrap_or_default()
    }

    /// Looks up a unit by code. Zero and unlisted codes yield `None`.
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        Self::from_i32(code)
    }

    /// Returns the symbolic name used in the enum registry.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Dips => "DIPS",
            Self::Inches => "INCHES",
            Self::Centimeters => "CENTIMETERS",
        }
    }
}

/// Methods of tracking an event.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, FromPrimitive, ToPrimitive,
)]
#[repr(i32)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventTrackingMethod {
    /// Image pixel fired on the event.
    ImagePixel = 1,
    /// JavaScript tracker loaded on the event.
    JavaScript = 2,
}

impl EventTrackingMethod {
    /// Every declared method, in code order.
    pub const ALL: [Self; 2] = [Self::ImagePixel, Self::JavaScript];

    /// Returns the numeric code.
    #[must_use]
    pub fn code(self) -> i32 {
        self.to_i32().unwrap_or_default()
    }

    /// Looks up a method by code. Zero and unlisted codes yield `None`.
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        Self::from_i32(code)
    }

    /// Returns the symbolic name used in the enum registry.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::ImagePixel => "IMAGE_PIXEL",
            Self::JavaScript => "JAVASCRIPT",
        }
    }
}
