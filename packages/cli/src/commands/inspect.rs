use super::read_tree;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use tessera_editor::Tree;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Serialized tree to decode
    pub input: PathBuf,
}

pub fn inspect(args: InspectArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let tree = read_tree(&cwd.join(&args.input), &config.limits())?;
    print!("{}", outline(&tree));
    Ok(())
}

/// Indented listing of the tree, one node per line
pub fn outline(tree: &Tree) -> String {
    let mut out = String::new();
    let mut stack = vec![(tree.root_id(), 0usize)];

    while let Some((id, depth)) = stack.pop() {
        let Some(node) = tree.get(id) else {
            continue;
        };
        let _ = write!(out, "{}{} {}", "  ".repeat(depth), node.kind, node.id);
        if !node.props.is_empty() {
            let keys: Vec<&str> = node.props.keys().map(String::as_str).collect();
            let _ = write!(out, " ({})", keys.join(", "));
        }
        out.push('\n');

        for child in node.children.iter().rev() {
            stack.push((child.as_str(), depth + 1));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_editor::{serializer, ComponentKind, Props};

    #[test]
    fn test_outline_is_preorder_and_indented() {
        let mut tree = Tree::new("page");
        let root = tree.root_id().to_string();
        let stack = tree.insert(&root, 0, ComponentKind::Stack, Props::new()).unwrap();
        let mut props = Props::new();
        props.insert("text".to_string(), serde_json::json!("Hi"));
        let text = tree.insert(&stack, 0, ComponentKind::Text, props).unwrap();
        let button = tree.insert(&root, 1, ComponentKind::Button, Props::new()).unwrap();

        let lines: Vec<String> = outline(&tree).lines().map(str::to_string).collect();
        assert_eq!(
            lines,
            vec![
                format!("Canvas {}", root),
                format!("  Stack {}", stack),
                format!("    Text {} (text)", text),
                format!("  Button {}", button),
            ]
        );
    }

    #[test]
    fn test_inspect_reports_malformed_blob() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("bad.json"), r#"{"schema":1,"root":"x"}"#).unwrap();
        let err = inspect(InspectArgs { input: "bad.json".into() }, tmp.path()).unwrap_err();
        assert!(err.to_string().contains("Cannot decode"), "{}", err);

        let tree = Tree::new("ok");
        let blob = serializer::serialize(&tree).unwrap();
        std::fs::write(tmp.path().join("ok.json"), blob.as_str()).unwrap();
        assert!(inspect(InspectArgs { input: "ok.json".into() }, tmp.path()).is_ok());
    }
}
