use ark_bls12_381::Bls12_381;
use ark_ec::pairing::Pairing;
use ark_std::{
    rand::{rngs::StdRng, SeedableRng},
    UniformRand,
};
use benches::setup_ps;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ps_signature::{keygen::generate_keypair, setup::*, AggregatedSignature, Signature};

type Fr = <Bls12_381 as Pairing>::ScalarField;

fn keygen_benchmark(c: &mut Criterion) {
    let params = SignatureParams::<Bls12_381>::default();

    let mut keygen_group = c.benchmark_group("PS key creation");
    for count in [1usize, 2, 4, 8, 15, 30, 60, 100] {
        keygen_group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut sources: Vec<_> = (0..=count as u64).map(StdRng::seed_from_u64).collect();
            b.iter(|| generate_keypair(black_box(&mut sources), black_box(&params)).unwrap());
        });
    }
    keygen_group.finish();
}

fn single_message_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);
    let params = SignatureParams::<Bls12_381>::default();
    let sk = SecretKey::<Fr>::rand(&mut rng, 1);
    let pk = PublicKey::new(&sk, &params);
    let message = Fr::rand(&mut rng);

    c.bench_function("PS sign", |b| {
        b.iter(|| {
            Signature::<Bls12_381>::new_single(&mut rng, black_box(&message), black_box(&sk))
                .unwrap()
        })
    });

    let sig = Signature::<Bls12_381>::new_single(&mut rng, &message, &sk).unwrap();
    c.bench_function("PS verify", |b| {
        b.iter(|| {
            sig.verify_single(black_box(&message), black_box(&pk), black_box(&params))
                .unwrap()
        })
    });
}

fn batch_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);
    setup_ps!(
        params,
        rng,
        message_count_range,
        messages_range,
        secret_range,
        public_range
    );

    let mut sign_group = c.benchmark_group("PS batch signing");
    for (i, count) in message_count_range.iter().enumerate() {
        sign_group.bench_with_input(BenchmarkId::from_parameter(*count), &i, |b, &i| {
            b.iter(|| {
                Signature::<Bls12_381>::new(
                    &mut rng,
                    black_box(&messages_range[i]),
                    black_box(&secret_range[i]),
                )
                .unwrap()
            });
        });
    }
    sign_group.finish();

    let sigs_range = (0..message_count_range.len())
        .map(|i| {
            Signature::<Bls12_381>::new(&mut rng, &messages_range[i], &secret_range[i]).unwrap()
        })
        .collect::<Vec<_>>();

    let mut verify_group = c.benchmark_group("PS batch verifying");
    for (i, count) in message_count_range.iter().enumerate() {
        verify_group.bench_with_input(BenchmarkId::from_parameter(*count), &i, |b, &i| {
            b.iter(|| {
                sigs_range[i]
                    .verify(
                        black_box(&messages_range[i]),
                        black_box(&public_range[i]),
                        black_box(&params),
                    )
                    .unwrap()
            });
        });
    }
    verify_group.finish();
}

fn aggregation_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);
    setup_ps!(
        params,
        rng,
        message_count_range,
        messages_range,
        secret_range,
        public_range
    );
    let message_secrets_range = secret_range
        .iter()
        .map(|sk| {
            (2..=sk.supported_message_count())
                .filter_map(|slot| sk.message_secret(slot))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let aggregate = |rng: &mut StdRng, i: usize| {
        let messages = &messages_range[i];
        let initial =
            AggregatedSignature::initiate(rng, &messages[0], &secret_range[i], &params).unwrap();

        message_secrets_range[i]
            .iter()
            .zip(&messages[1..])
            .fold(initial, |aggr, (secret, message)| {
                aggr.extend(rng, secret, message).unwrap()
            })
    };

    let mut sign_group = c.benchmark_group("PS aggregate signing");
    for (i, count) in message_count_range.iter().enumerate() {
        sign_group.bench_with_input(BenchmarkId::from_parameter(*count), &i, |b, &i| {
            b.iter(|| aggregate(&mut rng, black_box(i)));
        });
    }
    sign_group.finish();

    let aggrs_range = (0..message_count_range.len())
        .map(|i| aggregate(&mut rng, i))
        .collect::<Vec<_>>();

    let mut verify_group = c.benchmark_group("PS aggregate verifying");
    for (i, count) in message_count_range.iter().enumerate() {
        verify_group.bench_with_input(BenchmarkId::from_parameter(*count), &i, |b, &i| {
            b.iter(|| {
                aggrs_range[i]
                    .verify(
                        black_box(&messages_range[i]),
                        black_box(&public_range[i]),
                        black_box(&params),
                    )
                    .unwrap()
            });
        });
    }
    verify_group.finish();
}

criterion_group!(
    benches,
    keygen_benchmark,
    single_message_benchmark,
    batch_benchmark,
    aggregation_benchmark
);
criterion_main!(benches);
