use color::color::{BLACK, BLUE, GREEN, RED, WHITE};
use color::Color;

#[test]
fn add_combines_channels() {
    assert_eq!(RED.add(GREEN), Color::new(255, 255, 0));
    assert_eq!(Color::new(10, 20, 30).add(Color::new(1, 2, 3)), Color::new(11, 22, 33));
}

#[test]
fn add_saturates_at_255() {
    assert_eq!(
        Color::new(200, 200, 200).add(Color::new(100, 100, 100)),
        WHITE
    );
    assert_eq!(
        Color::new(250, 5, 128) + Color::new(10, 5, 128),
        Color::new(255, 10, 255)
    );
}

#[test]
fn add_operator_matches_method() {
    let a = Color::new(100, 150, 200);
    let b = Color::new(60, 60, 60);
    assert_eq!(a + b, a.add(b));
    assert_eq!(a + b, b + a);
}

#[test]
fn add_leaves_operands_unchanged() {
    let a = Color::new(1, 2, 3);
    let b = Color::new(4, 5, 6);
    let _ = a + b;
    assert_eq!(a, Color::new(1, 2, 3));
    assert_eq!(b, Color::new(4, 5, 6));
}

#[test]
fn black_is_additive_identity() {
    let c = Color::new(17, 99, 254);
    assert_eq!(c + BLACK, c);
}

#[test]
fn add_assign_saturates() {
    let mut c = Color::new(250, 0, 0);
    c += Color::new(10, 1, 0);
    assert_eq!(c, Color::new(255, 1, 0));
}

#[test]
fn sum_of_primaries_is_white() {
    let total: Color = [RED, GREEN, BLUE].into_iter().sum();
    assert_eq!(total, WHITE);

    let by_ref: Color = [RED, GREEN].iter().sum();
    assert_eq!(by_ref, Color::new(255, 255, 0));
}

#[test]
fn sum_of_nothing_is_black() {
    let total: Color = std::iter::empty::<Color>().sum();
    assert_eq!(total, BLACK);
}
