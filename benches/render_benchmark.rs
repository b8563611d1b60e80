//! Benchmarks for mdview rendering performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks render synthetic documents of increasing size.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mdview::model::Node;
use mdview::render::{transform_embed, RenderState, Renderer, Viewport};
use mdview::{MarkdownView, Style, StyleName, Styles};

/// Creates a synthetic document with the given number of sections.
fn create_test_document(sections: usize) -> Vec<Node> {
    let mut nodes = Vec::new();

    for i in 0..sections {
        nodes.push(Node::heading(2, format!("Section {}", i + 1)));
        nodes.push(Node::paragraph(vec![
            Node::text("Benchmark content with "),
            Node::strong("strong"),
            Node::text(" and "),
            Node::link("https://example.com", "a link"),
        ]));
        nodes.push(Node::list(
            i % 2 == 0,
            (0..5).map(|n| vec![Node::text(format!("item {}", n))]).collect(),
        ));
        nodes.push(Node::table(
            vec![vec![Node::text("Key")], vec![Node::text("Value")]],
            (0..4)
                .map(|r| vec![vec![Node::text(format!("k{}", r))], vec![Node::text(format!("v{}", r))]])
                .collect(),
        ));
        nodes.push(Node::paragraph(vec![Node::iframe(
            r#"<center><iframe width="560" height="315" src="https://example.com/embed"></iframe></center>"#,
        )]));
    }

    nodes
}

fn create_test_styles() -> Styles {
    Styles::new()
        .with(StyleName::Paragraph, Style::new().with_property("marginBottom", 8))
        .with(StyleName::ImageWrapper, Style::new().with_padding(4.0))
        .with(StyleName::TableCell, Style::new().with_padding(6.0))
        .with(StyleName::TableHeaderCell, Style::new().with_property("fontWeight", "bold"))
}

/// Benchmark embed markup rewriting.
fn bench_embed_transform(c: &mut Criterion) {
    let markup = r#"<center><iframe width="560" height="315" src="https://example.com/embed"></iframe></center>"#;
    let viewport = Viewport::new(375.0, 667.0);

    c.bench_function("transform_embed", |b| {
        b.iter(|| transform_embed(black_box(markup), viewport).unwrap());
    });
}

/// Benchmark document rendering at various sizes.
fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    let styles = create_test_styles();
    let state = RenderState::new();

    for sections in [1, 10, 50].iter() {
        let nodes = create_test_document(*sections);

        group.bench_function(format!("{}_sections", sections), |b| {
            b.iter(|| Renderer::new(&styles).render(black_box(&nodes), &state));
        });
    }

    group.finish();
}

/// Benchmark builder pattern overhead.
fn bench_builder_creation(c: &mut Criterion) {
    c.bench_function("builder_creation", |b| {
        b.iter(|| {
            let _view = MarkdownView::new()
                .with_styles(create_test_styles())
                .with_viewport(390.0, 844.0)
                .with_link_handler(|_| {});
        });
    });
}

criterion_group!(
    benches,
    bench_embed_transform,
    bench_rendering,
    bench_builder_creation,
);
criterion_main!(benches);
