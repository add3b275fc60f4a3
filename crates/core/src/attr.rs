// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Observed configuration attributes.
use std::fmt;

/// The configuration attributes observed by the hand.
///
/// Attribute names are the lower-cased option names, resolution against
/// the table is case-insensitive. Only these attributes are ever observed,
/// anything else resolves to no option at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attr {
    /// Tooltip for the single card control selector.
    ControlSingleTooltip = 0,
    /// Tooltip for the all cards control selector.
    ControlAllTooltip,
    /// Interaction mode, `single` or `all`.
    ControlMode,
    /// Cards can be temporarily revealed.
    Peekable,
    /// Cards can be persistently flipped.
    Flippable,
}

impl Attr {
    /// All observed attributes in declaration order.
    pub const ALL: [Attr; 5] = [
        Attr::ControlSingleTooltip,
        Attr::ControlAllTooltip,
        Attr::ControlMode,
        Attr::Peekable,
        Attr::Flippable,
    ];

    /// The lower-cased markup name.
    pub fn name(&self) -> &'static str {
        match self {
            Attr::ControlSingleTooltip => "controlsingletooltip",
            Attr::ControlAllTooltip => "controlalltooltip",
            Attr::ControlMode => "controlmode",
            Attr::Peekable => "peekable",
            Attr::Flippable => "flippable",
        }
    }

    /// Resolves a markup attribute name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Attr> {
        Attr::ALL
            .iter()
            .copied()
            .find(|a| a.name().eq_ignore_ascii_case(name))
    }

    /// Checks if this is a boolean presence attribute.
    ///
    /// A boolean attribute is true iff it is present, regardless of its
    /// value.
    pub fn is_boolean(&self) -> bool {
        matches!(self, Attr::Peekable | Attr::Flippable)
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
