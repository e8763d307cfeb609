//! Design-system adoption: share of placed components that come from the
//! sanctioned component registry. Reported next to the weighted score.

use crate::report::{DesignSystemUsage, RuleWeight, ValidationItem};
use tessera_editor::{ComponentKind, Tree};

pub const DESIGN_SYSTEM_KINDS: &[ComponentKind] = &[
    ComponentKind::SafeArea,
    ComponentKind::Tabs,
    ComponentKind::BottomSheet,
    ComponentKind::Dialog,
    ComponentKind::Top,
    ComponentKind::ListRow,
    ComponentKind::BottomCta,
    ComponentKind::Text,
    ComponentKind::Button,
    ComponentKind::TextButton,
    ComponentKind::IconButton,
    ComponentKind::Badge,
    ComponentKind::Chip,
    ComponentKind::Icon,
    ComponentKind::Avatar,
    ComponentKind::ProgressBar,
    ComponentKind::Divider,
    ComponentKind::TextField,
    ComponentKind::TextArea,
    ComponentKind::Checkbox,
    ComponentKind::Radio,
    ComponentKind::Switch,
    ComponentKind::Slider,
];

pub fn is_design_system_kind(kind: ComponentKind) -> bool {
    DESIGN_SYSTEM_KINDS.contains(&kind)
}

/// Measure design-system usage over every non-root node.
/// `threshold` is a whole percentage; at or above it the item passes.
pub fn design_system_usage(tree: &Tree, threshold: u8) -> DesignSystemUsage {
    let (sanctioned, total) = tree.non_root_nodes().fold((0usize, 0usize), |(s, t), node| {
        (s + usize::from(is_design_system_kind(node.kind)), t + 1)
    });

    let id = "design-system-usage";
    let name = "Design system usage";
    let weight = RuleWeight::Recommended;

    if total == 0 {
        return DesignSystemUsage {
            sanctioned,
            total,
            percent: 100,
            item: ValidationItem::pass(id, name, weight, "No components placed yet"),
        };
    }

    let percent = ((sanctioned * 100 + total / 2) / total) as u8;
    let message = format!(
        "{} of {} components ({}%) come from the design system",
        sanctioned, total, percent
    );
    // Integer comparison keeps exact ratios like 8/10 at the threshold
    let item = if sanctioned * 100 >= usize::from(threshold) * total {
        ValidationItem::pass(id, name, weight, message)
    } else {
        ValidationItem::warning(id, name, weight, message).with_fix(format!(
            "Replace custom layouts with design-system components to reach {}%",
            threshold
        ))
    };

    DesignSystemUsage {
        sanctioned,
        total,
        percent,
        item,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Status;
    use tessera_editor::Props;

    fn tree_with(sanctioned: usize, custom: usize) -> Tree {
        let mut tree = Tree::new("usage");
        let root = tree.root_id().to_string();
        for i in 0..sanctioned {
            tree.insert(&root, i, ComponentKind::Button, Props::new()).unwrap();
        }
        for i in 0..custom {
            tree.insert(&root, sanctioned + i, ComponentKind::Html, Props::new()).unwrap();
        }
        tree
    }

    #[test]
    fn test_ninety_percent_passes() {
        let usage = design_system_usage(&tree_with(9, 1), 80);
        assert_eq!(usage.percent, 90);
        assert_eq!(usage.item.status, Status::Pass);
    }

    #[test]
    fn test_seventy_percent_warns() {
        let usage = design_system_usage(&tree_with(7, 3), 80);
        assert_eq!(usage.percent, 70);
        assert_eq!(usage.item.status, Status::Warning);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let usage = design_system_usage(&tree_with(8, 2), 80);
        assert_eq!(usage.item.status, Status::Pass);
    }

    #[test]
    fn test_empty_tree_passes() {
        let usage = design_system_usage(&Tree::new("empty"), 80);
        assert_eq!(usage.total, 0);
        assert_eq!(usage.item.status, Status::Pass);
    }

    #[test]
    fn test_nested_nodes_are_counted() {
        let mut tree = Tree::new("nested");
        let root = tree.root_id().to_string();
        let stack = tree.insert(&root, 0, ComponentKind::Stack, Props::new()).unwrap();
        tree.insert(&stack, 0, ComponentKind::Button, Props::new()).unwrap();
        let usage = design_system_usage(&tree, 80);
        assert_eq!((usage.sanctioned, usage.total), (1, 2));
    }
}
