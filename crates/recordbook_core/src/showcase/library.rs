//! Books and textbooks sharing a `Printable` capability.
//!
//! `TextBook` holds a `Book` by value and forwards to it explicitly; nothing
//! of `Book` is reachable through `TextBook` unless exposed here.

use std::io::{self, Write};

/// Anything that can render a multi-line description of itself.
pub trait Printable {
    fn info(&self) -> String;

    fn print_info(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.info())
    }
}

/// Prints any `Printable` value.
pub fn print(item: &dyn Printable, out: &mut dyn Write) -> io::Result<()> {
    item.print_info(out)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    title: String,
    author: String,
    pages: u32,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, pages: u32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            pages,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }
}

impl Printable for Book {
    fn info(&self) -> String {
        format!(
            "Title: {}\nAuthor: {}\nPages: {}",
            self.title, self.author, self.pages
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBook {
    book: Book,
    publisher: String,
    level: String,
}

impl TextBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        pages: u32,
        publisher: impl Into<String>,
        level: impl Into<String>,
    ) -> Self {
        Self {
            book: Book::new(title, author, pages),
            publisher: publisher.into(),
            level: level.into(),
        }
    }

    pub fn book(&self) -> &Book {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut Book {
        &mut self.book
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn level(&self) -> &str {
        &self.level
    }
}

impl Printable for TextBook {
    fn info(&self) -> String {
        format!(
            "{}\nPublisher: {}\nLevel: {}",
            self.book.info(),
            self.publisher,
            self.level
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{print, Book, Printable, TextBook};

    #[test]
    fn set_title_replaces_title() {
        let mut book = Book::new("Moby Dick", "Herman Melville", 300);
        book.set_title("Moby Dick (Special Edition)");
        assert_eq!(book.title(), "Moby Dick (Special Edition)");
    }

    #[test]
    fn textbook_info_extends_book_info() {
        let textbook = TextBook::new("TextBook", "Writer", 300, "Santillana", "Secondary");
        let info = textbook.info();
        assert!(info.starts_with(&textbook.book().info()));
        assert!(info.ends_with("Publisher: Santillana\nLevel: Secondary"));
    }

    #[test]
    fn printables_can_share_a_collection() {
        let items: Vec<Box<dyn Printable>> = vec![
            Box::new(Book::new("A", "B", 1)),
            Box::new(TextBook::new("C", "D", 2, "E", "F")),
        ];
        let lines: usize = items.iter().map(|item| item.info().lines().count()).sum();
        assert_eq!(lines, 3 + 5);
    }

    #[test]
    fn book_mut_edits_the_composed_book() {
        let mut textbook = TextBook::new("Draft", "Writer", 10, "Press", "Primary");
        textbook.book_mut().set_title("Final");
        assert_eq!(textbook.book().title(), "Final");
        assert_eq!(textbook.book().author(), "Writer");
        assert_eq!(textbook.book().pages(), 10);
        assert_eq!(textbook.publisher(), "Press");
        assert_eq!(textbook.level(), "Primary");
    }

    #[test]
    fn print_writes_info_and_newline() {
        let mut out = Vec::new();
        print(&Book::new("A", "B", 1), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Title: A\nAuthor: B\nPages: 1\n");
    }
}
