use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pipeline_flow_layout::config::LayoutConfig;
use pipeline_flow_layout::ir::{Status, TreeNode};
use pipeline_flow_layout::layout::compute_layout;
use std::hint::black_box;

fn balanced_tree(depth: usize, fanout: usize, counter: &mut usize) -> TreeNode {
    let id = *counter;
    *counter += 1;
    let mut node = TreeNode::new(format!("N{id}"), format!("Step {id}"), Status::Success);
    if depth > 0 {
        for _ in 0..fanout {
            node.children.push(balanced_tree(depth - 1, fanout, counter));
        }
    }
    node
}

fn chain(len: usize) -> TreeNode {
    let mut node = TreeNode::new(format!("N{len}"), "Tail", Status::InProgress);
    for i in (0..len).rev() {
        node = TreeNode::new(format!("N{i}"), format!("Stage {i}"), Status::Success).with_child(node);
    }
    node
}

fn bench_layout(c: &mut Criterion) {
    let config = LayoutConfig::default();
    let mut group = c.benchmark_group("compute_layout");

    for (depth, fanout) in [(2, 3), (3, 3), (4, 3)] {
        let mut counter = 0;
        let tree = balanced_tree(depth, fanout, &mut counter);
        group.bench_with_input(
            BenchmarkId::new("balanced", counter),
            &tree,
            |b, tree| b.iter(|| compute_layout(black_box(tree), &config)),
        );
    }

    for len in [10, 50] {
        let tree = chain(len);
        group.bench_with_input(BenchmarkId::new("chain", len + 1), &tree, |b, tree| {
            b.iter(|| compute_layout(black_box(tree), &config))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
