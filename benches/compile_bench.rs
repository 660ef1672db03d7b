extern crate criterion;

use criterion::{criterion_group, criterion_main, Criterion};

use scopesheet::{create_sheet, StyleTree};

fn wide_tree(scopes: usize) -> StyleTree {
    let mut tree = StyleTree::new();
    for i in 0..scopes {
        let mut scope = StyleTree::new();
        scope.insert("color", format!("rgb({}, 0, 0)", i % 256));
        scope.insert("height", format!("{}px", i));

        let mut hover = StyleTree::new();
        hover.insert("color", "blue");
        scope.insert(":hover", hover);

        let mut media = StyleTree::new();
        media.insert("height", format!("{}px", i * 2));
        scope.insert("@media (max-width: 600px)", media);

        tree.insert(format!("scope{}", i), scope);
    }
    tree
}

fn bench_cold_compile(c: &mut Criterion) {
    let tree = wide_tree(1_000);

    c.bench_function("cold_compile_1000_scopes", |b| {
        b.iter(|| {
            let sheet = create_sheet("bench");
            sheet.create(&tree)
        })
    });
}

fn bench_warm_recompile(c: &mut Criterion) {
    let tree = wide_tree(1_000);
    let sheet = create_sheet("bench");
    sheet.create(&tree);

    // Every rule is a dedup hit: measures the memo-table path alone.
    c.bench_function("warm_recompile_1000_scopes", |b| {
        b.iter(|| sheet.create(&tree))
    });
}

fn bench_repeated_declarations(c: &mut Criterion) {
    // One distinct declaration shared by many scopes.
    let mut tree = StyleTree::new();
    for i in 0..1_000 {
        let mut scope = StyleTree::new();
        scope.insert("color", "red");
        tree.insert(format!("scope{}", i), scope);
    }

    c.bench_function("collapse_1000_identical_scopes", |b| {
        b.iter(|| {
            let sheet = create_sheet("bench");
            sheet.create(&tree)
        })
    });
}

criterion_group!(
    benches,
    bench_cold_compile,
    bench_warm_recompile,
    bench_repeated_declarations
);
criterion_main!(benches);
