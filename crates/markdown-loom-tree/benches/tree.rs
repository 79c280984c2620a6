use criterion::{Criterion, criterion_group, criterion_main};
use markdown_loom_tree::{NodeId, Tree};

fn build_document(tree: &mut Tree, sections: usize) -> NodeId {
    let doc = tree.document(()).unwrap();
    for i in 0..sections {
        let heading = tree.heading(2, format!("Section {i}")).unwrap();
        let bold = tree.bold("bold").unwrap();
        let item = tree.bullet_item(("item with ", bold, " text")).unwrap();
        let list = tree.bullet_list([item]).unwrap();
        tree.add(doc, (heading, list)).unwrap();
    }
    doc
}

fn bench_tree_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree");
    group.sample_size(10);

    group.bench_function("append_1000_children", |b| {
        b.iter(|| {
            let mut tree = Tree::new();
            let bold = tree.bold(()).unwrap();
            for i in 0..1000 {
                let leaf = tree.text(std::hint::black_box(i.to_string()));
                tree.add_element(bold, leaf).unwrap();
            }
            std::hint::black_box(tree);
        });
    });

    let mut tree = Tree::new();
    let doc = build_document(&mut tree, 100);

    group.bench_function("clone_document", |b| {
        let mut t = tree.clone();
        b.iter(|| {
            std::hint::black_box(t.clone_node(std::hint::black_box(doc)));
        });
    });

    group.bench_function("descendants", |b| {
        let mut t = tree.clone();
        b.iter(|| {
            std::hint::black_box(t.descendants(doc).count());
        });
    });

    group.bench_function("to_markdown", |b| {
        b.iter(|| {
            std::hint::black_box(tree.to_markdown(std::hint::black_box(doc)));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_tree_operations);
criterion_main!(benches);
