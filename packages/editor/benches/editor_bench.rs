use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pagecraft_editor::{tree, Document, Node, SequentialIds};

/// `breadth` sections, each holding a row of `breadth` buttons
fn build_document(breadth: usize) -> Document {
    let mut doc = Document::with_id_generator(Box::new(SequentialIds::new("bench")));
    for s in 0..breadth {
        let section_id = format!("section-{}", s);
        doc.add_node(Node::new(section_id.clone(), "section"), None).unwrap();

        let row_id = format!("row-{}", s);
        doc.add_node(Node::new(row_id.clone(), "row"), Some(&section_id)).unwrap();

        for b in 0..breadth {
            let button = Node::new(format!("button-{}-{}", s, b), "button").with_prop("width", "25%");
            doc.add_node(button, Some(&row_id)).unwrap();
        }
    }
    doc
}

fn find_deep_node(c: &mut Criterion) {
    let doc = build_document(50);

    c.bench_function("find_deep_node", |b| {
        b.iter(|| tree::find_node(doc.screen(), black_box("button-49-49")))
    });
}

fn duplicate_section(c: &mut Criterion) {
    c.bench_function("duplicate_section", |b| {
        b.iter_with_setup(
            || build_document(20),
            |mut doc| doc.duplicate_node(black_box("section-10")),
        )
    });
}

fn export_import(c: &mut Criterion) {
    let doc = build_document(20);
    let json = doc.export_json().unwrap();

    c.bench_function("export_json", |b| b.iter(|| doc.export_json()));

    c.bench_function("import_json", |b| {
        b.iter_with_setup(Document::new, |mut target| target.import_json(black_box(&json)))
    });
}

fn share_round_trip(c: &mut Criterion) {
    let doc = build_document(20);

    c.bench_function("share_round_trip", |b| {
        b.iter(|| {
            let url = doc.share_url("http://localhost").unwrap();
            let payload = pagecraft_editor::share::share_payload(&url).unwrap().to_string();
            let mut target = Document::new();
            target.load_from_compressed(black_box(&payload))
        })
    });
}

fn smart_drop(c: &mut Criterion) {
    c.bench_function("smart_drop_row", |b| {
        b.iter_with_setup(
            || build_document(30),
            |mut doc| doc.smart_drop(Some("row-0"), black_box(29)),
        )
    });
}

criterion_group!(benches, find_deep_node, duplicate_section, export_import, share_round_trip, smart_drop);
criterion_main!(benches);
