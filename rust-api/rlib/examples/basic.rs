//! rlib example: the same walk-through every language binding ships.
//!
//! Run with: `cargo run -p rlib --example basic`

fn main() {
    println!("rlib Rust Example");
    println!("=================");
    println!();

    let sum = rlib::add(10, 5);
    println!("10 + 5 = {}", sum);

    let product = rlib::multiply(10, 5);
    println!("10 * 5 = {}", product);

    let power = rlib::exponent(2, 8);
    println!("2 ^ 8 = {}", power);

    match rlib::divide(10, 5) {
        Ok(quotient) => println!("10 / 5 = {}", quotient),
        Err(err) => eprintln!("Error: {}", err),
    }

    if let Err(err) = rlib::divide(10, 0) {
        println!("10 / 0 error: {}", err);
    }
}
