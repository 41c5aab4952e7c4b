use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_kata::{from_str, skeleton, to_string, Format, Node, Schema};

fn product_schema() -> Schema {
    Schema::new().field(
        "products",
        Format::array(Format::object(
            Schema::new()
                .field("sku", Format::string())
                .field("name", Format::string())
                .field("price", Format::float())
                .field("quantity", Format::int())
                .field("discount", Format::float().or_null())
                .field("note", Format::string().or_nothing()),
        )),
    )
}

fn product_text(size: u32) -> String {
    let products = (0..size)
        .map(|i| {
            format!(
                r#"{{"sku":"SKU{}","name":"Product {}","price":{:?},"quantity":{},"discount":null,"note":null}}"#,
                i,
                i,
                9.5 + f64::from(i),
                i
            )
        })
        .collect::<Vec<_>>()
        .join(",");
    format!(r#"{{"products":[{}]}}"#, products)
}

fn user_schema() -> Schema {
    Schema::new()
        .field("id", Format::int())
        .field("name", Format::string())
        .field("email", Format::string())
        .field("active", Format::bool())
        .field("age", Format::int().or_null())
}

const USER_TEXT: &str =
    r#"{"id": 123, "name": "Alice", "email": "alice@example.com", "active": true, "age": null}"#;

fn benchmark_read_simple(c: &mut Criterion) {
    let schema = user_schema();
    c.bench_function("read_simple_document", |b| {
        b.iter(|| from_str(black_box(USER_TEXT), &schema))
    });
}

fn benchmark_write_simple(c: &mut Criterion) {
    let doc = from_str(USER_TEXT, &user_schema()).unwrap();
    c.bench_function("write_simple_document", |b| {
        b.iter(|| to_string(black_box(&doc)))
    });
}

fn benchmark_read_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_array");
    let schema = product_schema();

    for size in [10, 50, 100, 500].iter() {
        let text = product_text(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_str(black_box(text), &schema))
        });
    }
    group.finish();
}

fn benchmark_write_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_array");
    let schema = product_schema();

    for size in [10, 50, 100, 500].iter() {
        let doc = from_str(&product_text(*size), &schema).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| to_string(black_box(doc)))
        });
    }
    group.finish();
}

fn benchmark_transaction(c: &mut Criterion) {
    let mut group = c.benchmark_group("transaction");
    let schema = product_schema();

    for size in [10, 100].iter() {
        let doc = from_str(&product_text(*size), &schema).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| {
                let mut doc = doc.clone();
                doc.update(|root, sink| {
                    for i in 0..*size as usize {
                        root.get_mut("products")
                            .at_mut(i)
                            .set("quantity", Node::value(black_box(7)), sink);
                    }
                })
            })
        });
    }
    group.finish();
}

fn benchmark_skeleton(c: &mut Criterion) {
    let schema = product_schema();
    c.bench_function("skeleton", |b| b.iter(|| skeleton(black_box(&schema))));
}

criterion_group!(
    benches,
    benchmark_read_simple,
    benchmark_write_simple,
    benchmark_read_array,
    benchmark_write_array,
    benchmark_transaction,
    benchmark_skeleton
);
criterion_main!(benches);
