// Minimal check harness for the two passes over the bundled rules.
// Run with: cargo run --bin translit_check
// src/bin/translit_check.rs
use lutfiy_core::Lutfiy;

fn main() {
    let lutfiy = Lutfiy::new();
    let samples = [
        "اۉزبېکستان",
        "کېلهجگی",
        "خانهلر",
        "بویوک",
        "دولت",
        "دیر",
        "یاخشی",
        "خانه",
        "تیل",
        "اۉزبېکستان کېلهجگی بویوک دولت دیر.",
    ];
    for text in samples.iter() {
        let fixed = lutfiy.fix_zwnj(text);
        match lutfiy.transliterate(&fixed) {
            Ok(latin) => println!("{} => {} => {}", text, fixed, latin),
            Err(e) => println!("{} => {} => error: {}", text, fixed, e),
        }
    }
}
