//! Benchmarks for Markdown rendering performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks render synthetic documents shaped like Docs API output.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gdocs_markdown::{parse_json, to_markdown, ConvertOptions, Document};
use serde_json::{json, Value};

/// Creates a synthetic document with the given number of sections, each a
/// heading, a styled paragraph, a list and a small table.
fn create_test_document(section_count: usize) -> Document {
    let mut content: Vec<Value> = Vec::new();
    let mut index = 1;

    for i in 0..section_count {
        content.push(json!({
            "startIndex": index, "endIndex": index + 12,
            "paragraph": {
                "elements": [{"textRun": {"content": format!("Section {}\n", i), "textStyle": {}}}],
                "paragraphStyle": {"namedStyleType": "HEADING_2", "headingId": format!("h.{}", i)}
            }
        }));
        index += 12;

        content.push(json!({
            "startIndex": index, "endIndex": index + 60,
            "paragraph": {
                "elements": [
                    {"textRun": {"content": "Plain text with ", "textStyle": {}}},
                    {"textRun": {"content": "bold", "textStyle": {"bold": true}}},
                    {"textRun": {"content": " and ", "textStyle": {}}},
                    {"textRun": {"content": "colored", "textStyle": {
                        "foregroundColor": {"color": {"rgbColor": {"red": 0.2, "green": 0.4, "blue": 0.8}}},
                        "fontSize": {"magnitude": 11, "unit": "PT"}
                    }}},
                    {"textRun": {"content": " words.\n", "textStyle": {}}}
                ],
                "paragraphStyle": {
                    "namedStyleType": "NORMAL_TEXT",
                    "spaceAbove": {"magnitude": 6, "unit": "PT"},
                    "lineSpacing": 115
                }
            }
        }));
        index += 60;

        for item in 0..3 {
            content.push(json!({
                "startIndex": index, "endIndex": index + 8,
                "paragraph": {
                    "elements": [{"textRun": {"content": format!("Item {}\n", item)}}],
                    "paragraphStyle": {"indentStart": {"magnitude": 36, "unit": "PT"}},
                    "bullet": {"listId": format!("kix.{}", i), "textStyle": {}}
                }
            }));
            index += 8;
        }

        let cell = |text: String| json!({
            "content": [{"paragraph": {"elements": [{"textRun": {"content": text}}]}}],
            "tableCellStyle": {"rowSpan": 1, "columnSpan": 1}
        });
        content.push(json!({
            "startIndex": index, "endIndex": index + 40,
            "table": {
                "rows": 2, "columns": 2,
                "tableRows": [
                    {"tableCells": [cell("Key\n".into()), cell("Value\n".into())]},
                    {"tableCells": [cell(format!("k{}\n", i)), cell(format!("v{}\n", i))]}
                ]
            }
        }));
        index += 40;
    }

    let json = json!({
        "documentId": "bench-doc",
        "title": "Benchmark",
        "revisionId": "r1",
        "body": {"content": content}
    });
    parse_json(&json.to_string()).unwrap()
}

fn bench_render_presets(c: &mut Criterion) {
    let doc = create_test_document(50);
    let mut group = c.benchmark_group("render_presets");

    group.bench_function("all_details", |b| {
        let options = ConvertOptions::all_details();
        b.iter(|| to_markdown(black_box(&doc), &options))
    });

    group.bench_function("minimal", |b| {
        let options = ConvertOptions::minimal();
        b.iter(|| to_markdown(black_box(&doc), &options))
    });

    group.bench_function("no_metadata", |b| {
        let options = ConvertOptions::new().with_metadata(false);
        b.iter(|| to_markdown(black_box(&doc), &options))
    });

    group.finish();
}

fn bench_document_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_size");
    let options = ConvertOptions::default();

    for sections in [10, 100, 500] {
        let doc = create_test_document(sections);
        group.bench_with_input(BenchmarkId::from_parameter(sections), &doc, |b, doc| {
            b.iter(|| to_markdown(black_box(doc), &options))
        });
    }

    group.finish();
}

fn bench_parse_json(c: &mut Criterion) {
    let content: Vec<Value> = (0..200)
        .map(|i| {
            json!({
                "startIndex": i * 10, "endIndex": i * 10 + 10,
                "paragraph": {"elements": [{"textRun": {"content": format!("Line {}\n", i)}}]}
            })
        })
        .collect();
    let json = json!({"documentId": "bench-doc", "body": {"content": content}}).to_string();

    c.bench_function("parse_json_200_paragraphs", |b| {
        b.iter(|| parse_json(black_box(&json)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_render_presets,
    bench_document_size,
    bench_parse_json
);
criterion_main!(benches);
