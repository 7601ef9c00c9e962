use core::hint::black_box;
use core::num::NonZeroU16;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use divecode::{DiveCodec, RandSource, SharedSecret, TimeSource};

const TOTAL_CODES: usize = 4096;

struct FixedMockTime {
    secs: u64,
}

impl TimeSource for FixedMockTime {
    fn unix_secs(&self) -> u64 {
        self.secs
    }
}

struct FixedMockRand {
    salt: NonZeroU16,
}

impl RandSource for FixedMockRand {
    fn salt(&self) -> NonZeroU16 {
        self.salt
    }
}

fn fixed_codec() -> DiveCodec<FixedMockTime, FixedMockRand> {
    let secret = SharedSecret::new("This is very secret.").expect("byte-clean secret");
    DiveCodec::with_sources(
        secret,
        FixedMockTime {
            secs: 1_700_000_000,
        },
        FixedMockRand {
            salt: NonZeroU16::new(0x1234).expect("non-zero salt"),
        },
    )
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Elements(TOTAL_CODES as u64));

    let codec = fixed_codec();
    group.bench_function(format!("elems/{TOTAL_CODES}"), |b| {
        b.iter(|| {
            for i in 0..TOTAL_CODES {
                let code = codec
                    .encode(black_box("Name"), (i % 256) as u8)
                    .expect("encode");
                black_box(code);
            }
        });
    });
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Elements(TOTAL_CODES as u64));

    let codec = fixed_codec();
    let codes: Vec<_> = (0..TOTAL_CODES)
        .map(|i| codec.encode("Name", (i % 256) as u8).expect("encode"))
        .collect();

    group.bench_function(format!("elems/{TOTAL_CODES}"), |b| {
        b.iter(|| {
            for code in &codes {
                let info = codec.decode(black_box(code.as_str())).expect("decode");
                black_box(info);
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
