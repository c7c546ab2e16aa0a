use pressroom_core::{Article, Author, Magazine, ValidationError};
use uuid::Uuid;

#[test]
fn author_name_accepts_any_non_empty_string() {
    assert!(Author::new("X").is_ok());
    assert!(Author::new("A very long name that is still perfectly fine").is_ok());
    assert_eq!(
        Author::new("").unwrap_err(),
        ValidationError::EmptyAuthorName
    );
}

#[test]
fn author_rename_fails_and_name_survives() {
    let mut author = Author::new("Bob").unwrap();
    let err = author.set_name("Bobby").unwrap_err();
    assert_eq!(err, ValidationError::AuthorNameImmutable);
    assert_eq!(author.name(), "Bob");
}

#[test]
fn magazine_name_boundaries() {
    assert!(Magazine::new("ab", "News").is_ok());
    assert!(Magazine::new("abcdefghijklmnop", "News").is_ok());
    assert_eq!(
        Magazine::new("a", "News").unwrap_err(),
        ValidationError::MagazineNameLength { len: 1 }
    );
    assert_eq!(
        Magazine::new("abcdefghijklmnopq", "News").unwrap_err(),
        ValidationError::MagazineNameLength { len: 17 }
    );
}

#[test]
fn magazine_setters_revalidate_and_keep_prior_value_on_failure() {
    let mut magazine = Magazine::new("Granta", "Literature").unwrap();

    magazine.set_name("Granta Review").unwrap();
    assert_eq!(magazine.name(), "Granta Review");

    let err = magazine.set_name("G").unwrap_err();
    assert_eq!(err, ValidationError::MagazineNameLength { len: 1 });
    assert_eq!(magazine.name(), "Granta Review");

    let err = magazine.set_category("").unwrap_err();
    assert_eq!(err, ValidationError::EmptyMagazineCategory);
    assert_eq!(magazine.category(), "Literature");
}

#[test]
fn article_title_boundaries() {
    let author = Uuid::new_v4();
    let magazine = Uuid::new_v4();

    assert!(Article::new(author, magazine, "abcde").is_ok());
    assert!(Article::new(author, magazine, "a".repeat(50)).is_ok());
    assert_eq!(
        Article::new(author, magazine, "abcd").unwrap_err(),
        ValidationError::ArticleTitleLength { len: 4 }
    );
    assert_eq!(
        Article::new(author, magazine, "a".repeat(51)).unwrap_err(),
        ValidationError::ArticleTitleLength { len: 51 }
    );
}

#[test]
fn entity_serialization_uses_expected_wire_fields() {
    let author_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let magazine_id = Uuid::parse_str("21111111-2222-4333-8444-555555555555").unwrap();
    let article_id = Uuid::parse_str("31111111-2222-4333-8444-555555555555").unwrap();

    let author = Author::with_id(author_id, "Carmen Reyes").unwrap();
    let json = serde_json::to_value(&author).unwrap();
    assert_eq!(json["id"], author_id.to_string());
    assert_eq!(json["name"], "Carmen Reyes");
    let decoded: Author = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, author);

    let magazine = Magazine::with_id(magazine_id, "Harvest", "Food").unwrap();
    let json = serde_json::to_value(&magazine).unwrap();
    assert_eq!(json["id"], magazine_id.to_string());
    assert_eq!(json["name"], "Harvest");
    assert_eq!(json["category"], "Food");

    let article = Article::with_id(article_id, author_id, magazine_id, "A Study Of Soil").unwrap();
    let json = serde_json::to_value(&article).unwrap();
    assert_eq!(json["id"], article_id.to_string());
    assert_eq!(json["author"], author_id.to_string());
    assert_eq!(json["magazine"], magazine_id.to_string());
    assert_eq!(json["title"], "A Study Of Soil");
    let decoded: Article = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, article);
}

#[test]
fn validate_catches_invalid_deserialized_state() {
    // A wire payload can carry values that no constructor would accept.
    let json = serde_json::json!({
        "id": "31111111-2222-4333-8444-555555555555",
        "author": "11111111-2222-4333-8444-555555555555",
        "magazine": "21111111-2222-4333-8444-555555555555",
        "title": "bad"
    });
    let article: Article = serde_json::from_value(json).unwrap();
    assert_eq!(
        article.validate().unwrap_err(),
        ValidationError::ArticleTitleLength { len: 3 }
    );
}
