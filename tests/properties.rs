use fraction_core::{Fraction, FractionError};
use num_integer::Integer;
use rand::Rng;

const ROUNDS: usize = 2000;

fn random_fraction(rng: &mut impl Rng, bound: i32) -> Fraction {
    loop {
        let numerator = rng.gen_range(-bound..=bound);
        let denominator = rng.gen_range(-bound..=bound);
        if denominator != 0 {
            return Fraction::new(numerator, denominator).unwrap();
        }
    }
}

fn is_normalized(f: &Fraction) -> bool {
    f.denominator() > 0 && f.numerator().gcd(&f.denominator()) == 1
}

#[test]
fn construction_always_normalizes() {
    let mut rng = rand::thread_rng();

    for _ in 0..ROUNDS {
        let numerator = rng.gen::<i32>();
        let denominator = rng.gen::<i32>();

        match Fraction::new(numerator, denominator) {
            Ok(f) => {
                assert!(is_normalized(&f), "{:?} from {}/{}", f, numerator, denominator);
                // same rational value
                assert_eq!(
                    i64::from(f.numerator()) * i64::from(denominator),
                    i64::from(numerator) * i64::from(f.denominator()),
                );
            }
            Err(FractionError::InvalidArgument(_)) => assert_eq!(denominator, 0),
            // only a flipped i32::MIN can leave the i32 range
            Err(FractionError::Overflow) => {
                assert!(numerator == i32::MIN || denominator == i32::MIN)
            }
            Err(err) => panic!("unexpected error {}", err),
        }
    }
}

#[test]
fn arithmetic_results_are_normalized() {
    let mut rng = rand::thread_rng();

    for _ in 0..ROUNDS {
        let a = random_fraction(&mut rng, 1000);
        let b = random_fraction(&mut rng, 1000);

        for result in [a.add(&b), a.sub(&b), a.mul(&b)] {
            assert!(is_normalized(&result.unwrap()));
        }
        match a.div(&b) {
            Ok(q) => assert!(is_normalized(&q)),
            Err(err) => {
                assert_eq!(err, FractionError::DivisionByZero);
                assert!(b.is_zero());
            }
        }
    }
}

#[test]
fn arithmetic_identities() {
    let mut rng = rand::thread_rng();

    for _ in 0..ROUNDS {
        let a = random_fraction(&mut rng, 1000);
        let b = random_fraction(&mut rng, 1000);

        assert_eq!(a.add(&b).unwrap().sub(&b).unwrap(), a);
        assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        if !b.is_zero() {
            assert_eq!(a.mul(&b).unwrap().div(&b).unwrap(), a);
        }
    }
}

#[test]
fn ordering_matches_exact_comparison() {
    let mut rng = rand::thread_rng();

    for _ in 0..ROUNDS {
        let a = random_fraction(&mut rng, i32::MAX);
        let b = random_fraction(&mut rng, i32::MAX);

        let lhs = i64::from(a.numerator()) * i64::from(b.denominator());
        let rhs = i64::from(b.numerator()) * i64::from(a.denominator());
        assert_eq!(a.cmp(&b), lhs.cmp(&rhs));
        assert_eq!(a == b, lhs == rhs);
    }
}

#[test]
fn increment_then_decrement_restores() {
    let mut rng = rand::thread_rng();

    for _ in 0..ROUNDS {
        let original = random_fraction(&mut rng, 10_000);
        let mut f = original;

        let before = f.post_increment().unwrap();
        assert_eq!(before, original);
        assert!(is_normalized(&f));
        assert_eq!(f, original.add(&Fraction::ONE).unwrap());

        f.pre_decrement().unwrap();
        assert_eq!(f, original);
    }
}

#[test]
fn display_parses_back() {
    let mut rng = rand::thread_rng();

    for _ in 0..ROUNDS {
        let f = random_fraction(&mut rng, i32::MAX);
        assert_eq!(f.to_string().parse::<Fraction>().unwrap(), f);
    }
}
