//! Fixture literals for the demo catalog

use crate::models::{Author, Book, Review};

pub(super) fn books() -> Vec<Book> {
    vec![
        Book {
            id: "1".into(),
            title: "The Great Gatsby".to_string(),
            category: vec!["Fiction".to_string(), "Classic".to_string()],
        },
        Book {
            id: "2".into(),
            title: "To Kill a Mockingbird".to_string(),
            category: vec!["Fiction".to_string(), "Classic".to_string()],
        },
        Book {
            id: "3".into(),
            title: "The Lean Startup".to_string(),
            category: vec!["Business".to_string(), "Entrepreneurship".to_string()],
        },
    ]
}

pub(super) fn reviews() -> Vec<Review> {
    vec![
        Review {
            id: "1".into(),
            rating: 5,
            content: "One of the best books I have ever read!".to_string(),
        },
        Review {
            id: "2".into(),
            rating: 3,
            content: "It was an okay read, but didn't live up to the hype.".to_string(),
        },
        Review {
            id: "3".into(),
            rating: 4,
            content: "Insightful and practical advice for entrepreneurs.".to_string(),
        },
    ]
}

pub(super) fn authors() -> Vec<Author> {
    vec![
        Author {
            id: "1".into(),
            name: "F. Scott Fitzgerald".to_string(),
            verified: true,
        },
        Author {
            id: "2".into(),
            name: "Harper Lee".to_string(),
            verified: true,
        },
        Author {
            id: "3".into(),
            name: "Eric Ries".to_string(),
            verified: false,
        },
    ]
}
