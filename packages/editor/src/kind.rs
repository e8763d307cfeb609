//! Registered component kinds.
//!
//! The set is closed: a tree may only contain kinds listed here. The
//! `Canvas` kind is reserved for the root of every page tree and can never
//! be inserted by the user.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComponentKind {
    /// Root container of a page tree
    Canvas,

    // Layout
    Container,
    Stack,
    Grid,
    SafeArea,
    Card,
    List,
    Tabs,
    BottomSheet,
    Dialog,

    // Navigation
    Top,
    ListRow,
    BottomCta,

    // Typography
    Text,
    Heading,
    Paragraph,

    // Actions
    Button,
    TextButton,
    IconButton,

    // Display
    Badge,
    Chip,
    Icon,
    Image,
    Avatar,
    ProgressBar,
    Divider,
    Spacer,
    Html,

    // Form controls
    TextField,
    TextArea,
    Checkbox,
    Radio,
    Switch,
    Slider,
}

impl ComponentKind {
    /// Every kind a user can place on the canvas (excludes `Canvas`).
    pub const REGISTERED: [ComponentKind; 33] = [
        ComponentKind::Container,
        ComponentKind::Stack,
        ComponentKind::Grid,
        ComponentKind::SafeArea,
        ComponentKind::Card,
        ComponentKind::List,
        ComponentKind::Tabs,
        ComponentKind::BottomSheet,
        ComponentKind::Dialog,
        ComponentKind::Top,
        ComponentKind::ListRow,
        ComponentKind::BottomCta,
        ComponentKind::Text,
        ComponentKind::Heading,
        ComponentKind::Paragraph,
        ComponentKind::Button,
        ComponentKind::TextButton,
        ComponentKind::IconButton,
        ComponentKind::Badge,
        ComponentKind::Chip,
        ComponentKind::Icon,
        ComponentKind::Image,
        ComponentKind::Avatar,
        ComponentKind::ProgressBar,
        ComponentKind::Divider,
        ComponentKind::Spacer,
        ComponentKind::Html,
        ComponentKind::TextField,
        ComponentKind::TextArea,
        ComponentKind::Checkbox,
        ComponentKind::Radio,
        ComponentKind::Switch,
        ComponentKind::Slider,
    ];

    /// Whether nodes of this kind may hold children
    pub fn is_container(self) -> bool {
        matches!(
            self,
            ComponentKind::Canvas
                | ComponentKind::Container
                | ComponentKind::Stack
                | ComponentKind::Grid
                | ComponentKind::SafeArea
                | ComponentKind::Card
                | ComponentKind::List
                | ComponentKind::Tabs
                | ComponentKind::BottomSheet
                | ComponentKind::Dialog
        )
    }

    /// Reserved kinds cannot be removed from a tree
    pub fn is_reserved(self) -> bool {
        matches!(self, ComponentKind::Canvas | ComponentKind::SafeArea)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::Canvas => "Canvas",
            ComponentKind::Container => "Container",
            ComponentKind::Stack => "Stack",
            ComponentKind::Grid => "Grid",
            ComponentKind::SafeArea => "SafeArea",
            ComponentKind::Card => "Card",
            ComponentKind::List => "List",
            ComponentKind::Tabs => "Tabs",
            ComponentKind::BottomSheet => "BottomSheet",
            ComponentKind::Dialog => "Dialog",
            ComponentKind::Top => "Top",
            ComponentKind::ListRow => "ListRow",
            ComponentKind::BottomCta => "BottomCta",
            ComponentKind::Text => "Text",
            ComponentKind::Heading => "Heading",
            ComponentKind::Paragraph => "Paragraph",
            ComponentKind::Button => "Button",
            ComponentKind::TextButton => "TextButton",
            ComponentKind::IconButton => "IconButton",
            ComponentKind::Badge => "Badge",
            ComponentKind::Chip => "Chip",
            ComponentKind::Icon => "Icon",
            ComponentKind::Image => "Image",
            ComponentKind::Avatar => "Avatar",
            ComponentKind::ProgressBar => "ProgressBar",
            ComponentKind::Divider => "Divider",
            ComponentKind::Spacer => "Spacer",
            ComponentKind::Html => "Html",
            ComponentKind::TextField => "TextField",
            ComponentKind::TextArea => "TextArea",
            ComponentKind::Checkbox => "Checkbox",
            ComponentKind::Radio => "Radio",
            ComponentKind::Switch => "Switch",
            ComponentKind::Slider => "Slider",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "Canvas" {
            return Ok(ComponentKind::Canvas);
        }
        ComponentKind::REGISTERED
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown component kind: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_kinds_round_trip_through_names() {
        for kind in ComponentKind::REGISTERED {
            assert_eq!(kind.as_str().parse::<ComponentKind>(), Ok(kind));
        }
        assert_eq!("Canvas".parse::<ComponentKind>(), Ok(ComponentKind::Canvas));
        assert!("Marquee".parse::<ComponentKind>().is_err());
    }

    #[test]
    fn test_serde_name_matches_display() {
        let json = serde_json::to_string(&ComponentKind::BottomCta).unwrap();
        assert_eq!(json, "\"BottomCta\"");
    }

    #[test]
    fn test_canvas_is_reserved_container() {
        assert!(ComponentKind::Canvas.is_container());
        assert!(ComponentKind::Canvas.is_reserved());
        assert!(ComponentKind::SafeArea.is_reserved());
        assert!(!ComponentKind::Button.is_container());
        assert!(!ComponentKind::Container.is_reserved());
    }
}
