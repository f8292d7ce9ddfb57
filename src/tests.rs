use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    Curve, CurveParams, ElGamal, ElGamalConfig, Error, MessageCipher, Point, PointTable,
    ALPHABET_SIZE,
};

fn setup() -> (ElGamal, PointTable) {
    let elgamal = ElGamal::new(&ElGamalConfig::default()).unwrap();
    let table = PointTable::build(elgamal.curve()).unwrap();
    (elgamal, table)
}

fn letters() -> impl Iterator<Item = char> {
    ('A'..='Z').chain('a'..='z')
}

#[test]
fn test_round_trip_every_letter_every_k() {
    let (elgamal, table) = setup();
    let p = elgamal.curve().modulus();

    for c in letters() {
        let plain = table.char_to_point(c).unwrap();
        for k in 1..p {
            let ciphertext = elgamal.encrypt(&plain, k).unwrap();
            let recovered = elgamal.decrypt(&ciphertext).unwrap();
            assert_eq!(recovered, plain, "char {} with k = {}", c, k);
        }
    }
}

#[test]
fn test_scenario_letter_a() {
    let (elgamal, table) = setup();
    let plain = table.char_to_point('A').unwrap();
    assert_eq!(plain, table.points()[0]);

    let ciphertext = elgamal.encrypt(&plain, 123).unwrap();
    let recovered = elgamal.decrypt(&ciphertext).unwrap();
    assert_eq!(recovered, plain);
    assert_eq!(table.point_to_char(&recovered), 'A');
}

#[test]
fn test_group_laws_on_table_points() {
    let (elgamal, table) = setup();
    let curve = elgamal.curve();

    for point in table.points() {
        // negation is an involution
        assert_eq!(curve.negate(&curve.negate(point)), *point);
        // P + P is the same as doubling
        assert_eq!(curve.add(point, point).unwrap(), curve.double(point).unwrap());
        assert_eq!(curve.add(point, &curve.negate(point)).unwrap(), Point::Infinity);
        for other in table.points() {
            assert_eq!(
                curve.add(point, other).unwrap(),
                curve.add(other, point).unwrap()
            );
        }
    }
}

#[test]
fn test_results_stay_on_curve() {
    let (elgamal, table) = setup();
    let curve = elgamal.curve();
    for point in table.points() {
        for k in [2, 3, 15, 140, 520] {
            assert!(curve.contains(&curve.scalar_multiply(point, k).unwrap()));
        }
    }
}

#[test]
fn test_scalar_multiply_distributes() {
    let (elgamal, table) = setup();
    let curve = elgamal.curve();
    let mut rng = StdRng::seed_from_u64(42);

    for point in table.points().iter().take(8) {
        for _ in 0..50 {
            let k1 = rng.gen_range(0..2000);
            let k2 = rng.gen_range(0..2000);
            let lhs = curve.scalar_multiply(point, k1 + k2).unwrap();
            let rhs = curve
                .add(
                    &curve.scalar_multiply(point, k1).unwrap(),
                    &curve.scalar_multiply(point, k2).unwrap(),
                )
                .unwrap();
            assert_eq!(lhs, rhs, "k1 = {}, k2 = {}", k1, k2);
        }
    }
}

#[test]
fn test_scalar_multiply_matches_repeated_addition() {
    let (elgamal, _) = setup();
    let curve = elgamal.curve();
    let g = elgamal.generator();

    let mut acc = Point::Infinity;
    for k in 0..300 {
        assert_eq!(curve.scalar_multiply(&g, k).unwrap(), acc);
        acc = curve.add(&acc, &g).unwrap();
    }
}

#[test]
fn test_unknown_character_skips_arithmetic() {
    let (elgamal, table) = setup();
    assert_eq!(table.char_to_point('5'), None);

    let cipher = MessageCipher::new(&elgamal, &table);
    let encrypted = cipher.encrypt_message("Hi5there", 77).unwrap();
    assert_eq!(cipher.decrypt_message(&encrypted).unwrap(), "Hi?there");
}

#[test]
fn test_alternate_curve() {
    // swapping the curve only touches the configuration
    let config = ElGamalConfig {
        a: 1,
        b: 6,
        p: 1031,
        gx: 2,
        gy: 4,
        private_scalar: 101,
    };
    let elgamal = ElGamal::new(&config).unwrap();
    let table = PointTable::build(elgamal.curve()).unwrap();
    assert_eq!(table.len(), ALPHABET_SIZE);
    assert_eq!(table.char_to_point('A'), Some(Point::new(0, 359)));

    let cipher = MessageCipher::new(&elgamal, &table);
    let encrypted = cipher.encrypt_message("AnotherCurve", 500).unwrap();
    assert_eq!(cipher.decrypt_message(&encrypted).unwrap(), "AnotherCurve");
}

#[test]
fn test_short_table_is_fatal() {
    // y^2 = x^3 + 2x + 3 over F_23 has only 23 affine points
    let curve = Curve::new(CurveParams { a: 2, b: 3, p: 23 }).unwrap();
    assert_eq!(
        PointTable::build(&curve),
        Err(Error::InsufficientPoints {
            found: 23,
            required: ALPHABET_SIZE
        })
    );
}
