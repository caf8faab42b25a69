/// Write a series of `criterion`-based benchmarks for a field implementation.
#[macro_export]
macro_rules! bench_field {
    { $name:ident, $desc:expr, $fe_a:expr, $fe_b:expr } => {
        fn bench_add<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("add", |b| b.iter(|| x + y));
        }

        fn bench_sub<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("sub", |b| b.iter(|| x - y));
        }

        fn bench_mul<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("mul", |b| b.iter(|| x * y));
        }

        fn bench_neg<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("neg", |b| b.iter(|| -x));
        }

        fn bench_invert<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("invert", |b| b.iter(|| x.invert()));
        }

        fn bench_square<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("square", |b| b.iter(|| x.square()));
        }

        fn bench_sqrt<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a.square());
            group.bench_function("sqrt", |b| b.iter(|| x.sqrt()));
        }

        fn $name(c: &mut ::criterion::Criterion) {
            let mut group = c.benchmark_group($desc);
            bench_add(&mut group);
            bench_sub(&mut group);
            bench_mul(&mut group);
            bench_neg(&mut group);
            bench_invert(&mut group);
            bench_square(&mut group);
            bench_sqrt(&mut group);
            group.finish();
        }
    };
}

/// Implement all tests for a [`PrimeFieldElement`](crate::PrimeFieldElement) type.
#[macro_export]
macro_rules! test_primefield {
    ($fe:ty) => {
        $crate::test_primefield_constants!($fe);
        $crate::test_field_identity!($fe);
        $crate::test_field_invert!($fe);
        $crate::test_field_sqrt!($fe);
    };
}

/// Implement tests for the constants of a field's parameters.
#[macro_export]
macro_rules! test_primefield_constants {
    ($fe:ty) => {
        #[test]
        fn barrett_constant() {
            let ctx = $crate::fixint::BarrettContext::new(<$fe>::MODULUS).unwrap();
            assert_eq!(ctx, <$fe>::BARRETT);
        }

        #[test]
        fn two_adicity_constants() {
            // MODULUS - 1 == 2^S * T, T odd
            let t = <$fe>::T;
            assert!(t.is_odd());
            let m_minus_1 = t.checked_shl(<$fe>::S).unwrap();
            assert_eq!(m_minus_1.checked_add(&$crate::U264::ONE).unwrap(), <$fe>::MODULUS);
        }

        #[test]
        fn multiplicative_generator_constant() {
            // Euler's criterion: a non-residue raised to (MODULUS - 1) / 2 is -1
            let half = <$fe>::MODULUS.shr_vartime(1);
            assert_eq!(
                <$fe>::MULTIPLICATIVE_GENERATOR.pow_vartime(&half),
                -<$fe>::ONE
            );
        }

        #[test]
        fn root_of_unity_constant() {
            // (g^T)^(2^S) == 1
            let root = <$fe>::MULTIPLICATIVE_GENERATOR.pow_vartime(&<$fe>::T);
            assert_eq!(root.sqn_vartime(<$fe>::S), <$fe>::ONE);
        }
    };
}

/// Implement field element identity tests.
#[macro_export]
macro_rules! test_field_identity {
    ($fe:ty) => {
        #[test]
        fn zero_is_additive_identity() {
            let zero = <$fe>::ZERO;
            let one = <$fe>::ONE;
            assert_eq!(zero.add(&zero), zero);
            assert_eq!(one.add(&zero), one);
        }

        #[test]
        fn one_is_multiplicative_identity() {
            let one = <$fe>::ONE;
            assert_eq!(one.multiply(&one), one);
        }
    };
}

/// Implement field element inversion tests.
#[macro_export]
macro_rules! test_field_invert {
    ($fe:ty) => {
        #[test]
        fn invert() {
            let one = <$fe>::ONE;
            assert_eq!(one.invert().unwrap(), one);

            let three = one + &one + &one;
            let inv_three = three.invert().unwrap();
            assert_eq!(three * &inv_three, one);

            let minus_three = -three;
            let inv_minus_three = minus_three.invert().unwrap();
            assert_eq!(inv_minus_three, -inv_three);
            assert_eq!(three * &inv_minus_three, -one);

            assert!(<$fe>::ZERO.invert().is_err());
        }
    };
}

/// Implement field element square root tests.
#[macro_export]
macro_rules! test_field_sqrt {
    ($fe:ty) => {
        #[test]
        fn sqrt() {
            for &n in &[1u64, 4, 9, 16, 25, 36, 49, 64] {
                let fe = <$fe>::from_u64(n);
                let sqrt = fe.sqrt().unwrap();
                assert_eq!(sqrt.square(), fe);
            }

            assert_eq!(<$fe>::ZERO.sqrt(), Some(<$fe>::ZERO));
            assert_eq!(<$fe>::MULTIPLICATIVE_GENERATOR.sqrt(), None);
        }
    };
}
