use app_models::{Author, Book};

pub fn authors() -> Vec<Author> {
    vec![
        Author::new(1, "J. K. Rowling"),
        Author::new(2, "J. R. R. Tolkien"),
        Author::new(3, "Brent Weeks"),
    ]
}

pub fn books() -> Vec<Book> {
    vec![
        Book::new(1, "Harry Potter and the Chamber of Secrets", 1),
        Book::new(2, "Harry Potter and the Prisoner of Azkaban", 1),
        Book::new(3, "Harry Potter and the Goblet of Fire", 1),
        Book::new(4, "The Fellowship of the Ring", 2),
        Book::new(5, "The Two Towers", 2),
        Book::new(6, "The Return of the King", 2),
        Book::new(7, "The Way of Shadows", 3),
        Book::new(8, "Beyond the Shadows", 3),
    ]
}
