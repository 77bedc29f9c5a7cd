use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use param_ident::{decode_identifier, encode, is_valid_ip_and_port_v4, params, ParamValue};

const IDENTIFIERS: &[(&str, &str)] = &[
    ("scalar", "x__autocorrelation__lag_3"),
    (
        "strings",
        "x__agg_linear_trend__attr_\"slope\"__chunk_len_5__f_agg_\"max\"",
    ),
    (
        "tuple",
        "x__cwt_coefficients__coeff_0__w_2__widths_(2, 5, 10, 20)",
    ),
    ("specials", "x__range_count__max_inf__min_-inf__fill_nan"),
];

fn benchmark_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for (name, identifier) in IDENTIFIERS {
        group.bench_with_input(BenchmarkId::from_parameter(name), identifier, |b, id| {
            b.iter(|| decode_identifier(black_box(id)).unwrap())
        });
    }
    group.finish();
}

fn benchmark_encode(c: &mut Criterion) {
    let params = params! {
        "f_agg" => "max",
        "chunk_len" => 5,
        "attr" => "slope",
        "q" => 0.25,
        "widths" => ParamValue::Tuple(vec![
            ParamValue::from(2),
            ParamValue::from(5),
            ParamValue::from(10),
        ]),
    };

    c.bench_function("encode", |b| b.iter(|| encode(black_box(&params))));
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip_many_params");
    for count in [1usize, 8, 32] {
        let identifier = format!(
            "x__f__{}",
            (0..count)
                .map(|i| format!("p{}_{}", i, i))
                .collect::<Vec<_>>()
                .join("__")
        );
        group.bench_with_input(BenchmarkId::from_parameter(count), &identifier, |b, id| {
            b.iter(|| {
                let params = decode_identifier(black_box(id)).unwrap().unwrap();
                encode(&params)
            })
        });
    }
    group.finish();
}

fn benchmark_ip(c: &mut Criterion) {
    c.bench_function("ip_valid", |b| {
        b.iter(|| is_valid_ip_and_port_v4(black_box("192.168.0.1:8786")))
    });
    c.bench_function("ip_invalid", |b| {
        b.iter(|| is_valid_ip_and_port_v4(black_box("not.an.ip:addr")))
    });
}

criterion_group!(
    benches,
    benchmark_decode,
    benchmark_encode,
    benchmark_roundtrip,
    benchmark_ip
);
criterion_main!(benches);
