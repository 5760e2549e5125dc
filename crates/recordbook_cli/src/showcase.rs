//! Prints the language demos from `recordbook_core::showcase`.

use recordbook_core::showcase::animal::{chorus, Animal, Cat, Dog};
use recordbook_core::showcase::arith;
use recordbook_core::showcase::generic::{self, Product};
use recordbook_core::showcase::library::{print, Book, Printable, TextBook};
use std::io::{self, Write};

pub fn run<O: Write>(out: &mut O) -> io::Result<()> {
    writeln!(out, "== library ==")?;
    let mut book = Book::new("The Rust Programming Language", "Klabnik & Nichols", 560);
    book.set_title("The Book");
    let mut textbook =
        TextBook::new("Algorithms 3rd", "Sedgewick", 955, "Addison-Wesley", "University");
    textbook.book_mut().set_title("Algorithms");
    let shelf: Vec<&dyn Printable> = vec![&book, &textbook];
    for item in shelf {
        print(item, out)?;
        writeln!(out)?;
    }
    let composed = textbook.book();
    writeln!(out, "Textbook title via composed book: {}", composed.title())?;
    writeln!(
        out,
        "{} by {}, {} pages, {} level, {}",
        composed.title(),
        composed.author(),
        composed.pages(),
        textbook.level(),
        textbook.publisher()
    )?;

    writeln!(out, "\n== animals ==")?;
    let animals: Vec<Box<dyn Animal>> = vec![
        Box::new(Dog { name: "Rex".to_string() }),
        Box::new(Cat { name: "Tom".to_string() }),
    ];
    let names: Vec<&str> = animals.iter().map(|animal| animal.name()).collect();
    writeln!(out, "Choir: {}", names.join(", "))?;
    for line in chorus(&animals) {
        writeln!(out, "{line}")?;
    }

    writeln!(out, "\n== generics ==")?;
    let names = ["ana", "bea", "carla"];
    writeln!(out, "includes(names, \"bea\") = {}", generic::includes(&names, &"bea"))?;
    writeln!(out, "sum([1, 2, 3]) = {}", generic::sum(&[1, 2, 3]))?;
    writeln!(out, "sum([1.5, 2.5]) = {}", generic::sum(&[1.5_f64, 2.5]))?;
    let evens = generic::filter(&[1, 2, 3, 4, 5, 6], |n| n % 2 == 0);
    writeln!(out, "filter(1..=6, even) = {evens:?}")?;
    let products = [
        Product::new(1_u32, "Keyboard", 49.9),
        Product::new(2_u32, "Mouse", 19.5),
    ];
    let codes = [Product::new("SKU-9".to_string(), "Monitor", 189.0)];
    generic::print_list(out, &products)?;
    generic::print_list(out, &codes)?;

    writeln!(out, "\n== arithmetic ==")?;
    writeln!(out, "sum(2, 3) = {}", arith::sum(2, 3))?;
    writeln!(out, "get_max(4, 9) = {}", arith::get_max(4, 9))?;
    for n in [10, 94] {
        match arith::fibonacci(n) {
            Some(value) => writeln!(out, "fibonacci({n}) = {value}")?,
            None => writeln!(out, "fibonacci({n}) overflows u64")?,
        }
    }
    Ok(())
}
