use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use otpmig_decoder::{decode_migration_uri, decode_payload};
use otpmig_encoder::MigrationEncoder;
use otpmig_present::MigrationReport;
use otpmig_types::OtpAccount;

fn account(i: u8) -> OtpAccount {
    OtpAccount {
        secret: vec![i; 10],
        name: format!("user{i}@example.org"),
        issuer: "Example".to_string(),
        ..OtpAccount::default()
    }
}

fn batch_payload(n: u8) -> Vec<u8> {
    let mut encoder = MigrationEncoder::new();
    for i in 0..n {
        encoder.add_account(account(i));
    }
    encoder.encode().unwrap()
}

fn bench_decode_single(c: &mut Criterion) {
    let payload = batch_payload(1);

    c.bench_function("decode_single_account", |b| {
        b.iter(|| decode_payload(&payload));
    });
}

fn bench_decode_batch_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_batch");

    for n in [1u8, 5, 10, 20] {
        let payload = batch_payload(n);
        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("accounts", n),
            &payload,
            |b, p| b.iter(|| decode_payload(p)),
        );
    }

    group.finish();
}

fn bench_decode_uri_pipeline(c: &mut Criterion) {
    let mut encoder = MigrationEncoder::new();
    for i in 0..10u8 {
        encoder.add_account(account(i));
    }
    let uri = encoder.encode_uri().unwrap();

    c.bench_function("decode_uri_pipeline", |b| {
        b.iter(|| decode_migration_uri(&uri).unwrap());
    });
}

fn bench_decode_and_present(c: &mut Criterion) {
    let payload = batch_payload(10);

    c.bench_function("decode_and_present", |b| {
        b.iter(|| {
            let decoded = decode_payload(&payload);
            MigrationReport::from_payload(&decoded)
        });
    });
}

criterion_group!(
    benches,
    bench_decode_single,
    bench_decode_batch_sizes,
    bench_decode_uri_pipeline,
    bench_decode_and_present
);
criterion_main!(benches);
