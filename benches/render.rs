use criterion::{black_box, criterion_group, criterion_main, Criterion};
use genversion::{
    catalog,
    generator::{Generator, Section},
    render::{Token, TokenRenderer},
    wrap::LineBudget,
};
use genversion_config::{Catalog, FlagTable, OutputNames};

fn build_sample_sections(token_count: usize) -> Vec<Section> {
    let tokens = (0..token_count)
        .map(|idx| match idx % 3 {
            0 => Token::defined(format!("dir{idx}"), format!("/usr/local/share/{idx}")),
            1 => Token::numeric(format!("LIMIT_{idx}"), idx as i64),
            _ => Token::undefined(format!("FEATURE_{idx}")),
        })
        .collect();
    vec![Section::new("defs:", tokens)]
}

fn bench_render(c: &mut Criterion) {
    let token = Token::defined("CONFIG_DIR", "/usr/local/etc/\"genversion\"");
    let mut renderer = TokenRenderer::new();

    c.bench_function("render_defined_token", |b| {
        b.iter(|| {
            black_box(renderer.render(black_box(&token)).len());
        })
    });
}

fn bench_generate(c: &mut Criterion) {
    let sections = build_sample_sections(black_box(10_000));
    let mut generator = Generator::new(LineBudget::default(), OutputNames::default());

    c.bench_function("generate_10k_tokens", |b| {
        b.iter(|| {
            let out = generator
                .generate(&sections, Vec::with_capacity(512 * 1024))
                .expect("generate");
            black_box(out);
        })
    });

    c.bench_function("resolve_standard_catalog", |b| {
        let flags = FlagTable::new().with("HAVE_MMAP", true);
        b.iter(|| black_box(catalog::resolve(Catalog::standard(), &flags)))
    });
}

criterion_group!(benches, bench_render, bench_generate);
criterion_main!(benches);
