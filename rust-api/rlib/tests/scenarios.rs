//! Concrete call scenarios through the binding, mirroring the test suites of
//! the other language bindings.

use rlib::{add, divide, error_message, exponent, multiply, Error, Status};

// ============================================================================
// Total Operations
// ============================================================================

#[test]
fn test_add() {
    assert_eq!(add(2, 3), 5);
    assert_eq!(add(-1, 1), 0);
    assert_eq!(add(0, 0), 0);
}

#[test]
fn test_multiply() {
    assert_eq!(multiply(2, 3), 6);
    assert_eq!(multiply(-2, 3), -6);
    assert_eq!(multiply(0, 5), 0);
}

#[test]
fn test_exponent() {
    assert_eq!(exponent(2, 3), 8);
    assert_eq!(exponent(5, 2), 25);
    assert_eq!(exponent(10, 0), 1);
    assert_eq!(exponent(3, 4), 81);
}

#[test]
fn test_overflow_wraps() {
    assert_eq!(add(i32::MAX, 1), i32::MIN);
    assert_eq!(multiply(i32::MIN, -1), i32::MIN);
    assert_eq!(exponent(2, 31), i32::MIN);
    assert_eq!(exponent(-1, u32::MAX), -1);
}

// ============================================================================
// Division
// ============================================================================

#[test]
fn test_divide() {
    assert_eq!(divide(6, 2), Ok(3));
    assert_eq!(divide(10, 5), Ok(2));
    assert_eq!(divide(-10, 2), Ok(-5));
    assert_eq!(divide(7, -2), Ok(-3));
    assert_eq!(divide(0, 9), Ok(0));
}

#[test]
fn test_divide_min_by_minus_one() {
    assert_eq!(divide(i32::MIN, -1), Ok(i32::MIN));
}

#[test]
fn test_divide_by_zero() {
    let err = divide(10, 0).expect_err("division by zero must fail");
    assert_eq!(err.to_string(), "Division by zero");
    assert_eq!(err.message(), "Division by zero");
    assert_eq!(err.status(), Status::DIVISION_BY_ZERO);
}

#[test]
fn test_divide_by_zero_message_comes_from_core() {
    let err = divide(0, 0).unwrap_err();
    assert_eq!(err.message(), error_message(Status::DIVISION_BY_ZERO));
    assert_eq!(err.message(), rlib_core::Error::DivisionByZero.message());
}

#[test]
fn test_error_is_std_error() {
    fn assert_std_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}

    let err = divide(1, 0).unwrap_err();
    assert_std_error(&err);

    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert_eq!(boxed.to_string(), "Division by zero");
}

// ============================================================================
// Status Translation
// ============================================================================

#[test]
fn test_unknown_status_message() {
    let status = Status::from_code(250);
    assert!(!status.is_ok());
    assert_eq!(error_message(status), "Unknown error");
}

#[test]
fn test_error_carries_failure_status() {
    let err = divide(-3, 0).unwrap_err();
    assert!(!err.status().is_ok());
    assert!(matches!(err, Error::DivisionByZero { .. }), "got {:?}", err);
}

#[test]
fn test_concurrent_calls() {
    let handles: Vec<_> = (1..=8)
        .map(|b| {
            std::thread::spawn(move || {
                for a in -500..500 {
                    assert_eq!(divide(a, b), Ok(a / b));
                    assert!(divide(a, 0).is_err());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
