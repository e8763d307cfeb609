use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tessera_editor::{serialize, ComponentKind, Props, Tree};

fn build_tree(sections: usize, per_section: usize) -> Tree {
    let mut tree = Tree::new("bench");
    let root = tree.root_id().to_string();
    for s in 0..sections {
        let section = tree
            .insert(&root, s, ComponentKind::Container, Props::new())
            .expect("insert section");
        for i in 0..per_section {
            tree.insert(&section, i, ComponentKind::Text, Props::new())
                .expect("insert text");
        }
    }
    tree
}

fn serialize_large_tree(c: &mut Criterion) {
    let tree = build_tree(50, 40);
    c.bench_function("serialize_2000_nodes", |b| {
        b.iter(|| serialize(black_box(&tree)))
    });
}

fn duplicate_section(c: &mut Criterion) {
    let tree = build_tree(50, 40);
    let section = tree.root().children[0].clone();
    c.bench_function("duplicate_40_node_section", |b| {
        b.iter(|| {
            let mut copy = tree.clone();
            copy.duplicate(black_box(&section))
        })
    });
}

criterion_group!(benches, serialize_large_tree, duplicate_section);
criterion_main!(benches);
