use product_review_be::errors::AppError;
use product_review_be::models::review::{
    ReviewSortField, SortDirection, order_by_clause, round_average,
};
use product_review_be::validation::{
    COMMENT_MAX_LEN, COMMENT_MIN_LEN, RATING_MAX, RATING_MIN, validate_comment,
    validate_ownership, validate_rating,
};
use uuid::Uuid;

#[test]
fn test_rating_bounds() {
    // Valid cases, including both boundaries
    assert!(validate_rating(RATING_MIN).is_ok());
    assert!(validate_rating(3).is_ok());
    assert!(validate_rating(RATING_MAX).is_ok());

    // Invalid cases
    assert!(validate_rating(0).is_err());
    assert!(validate_rating(6).is_err());
    assert!(validate_rating(-1).is_err());

    // Out-of-range ratings are validation errors, not conflicts
    let err = validate_rating(6).unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    assert!(err.to_string().contains("between 1 and 5"));
}

#[test]
fn test_comment_length_bounds() {
    // Exactly at the boundaries
    let min_comment = "a".repeat(COMMENT_MIN_LEN);
    let max_comment = "a".repeat(COMMENT_MAX_LEN);
    assert_eq!(
        validate_comment(&min_comment, COMMENT_MIN_LEN, COMMENT_MAX_LEN).unwrap(),
        min_comment
    );
    assert!(validate_comment(&max_comment, COMMENT_MIN_LEN, COMMENT_MAX_LEN).is_ok());

    // One character outside each boundary
    let short = "a".repeat(COMMENT_MIN_LEN - 1);
    let long = "a".repeat(COMMENT_MAX_LEN + 1);
    assert!(validate_comment(&short, COMMENT_MIN_LEN, COMMENT_MAX_LEN).is_err());
    assert!(validate_comment(&long, COMMENT_MIN_LEN, COMMENT_MAX_LEN).is_err());

    let err = validate_comment(&short, COMMENT_MIN_LEN, COMMENT_MAX_LEN).unwrap_err();
    assert!(err.to_string().contains("at least 10 characters"));

    let err = validate_comment(&long, COMMENT_MIN_LEN, COMMENT_MAX_LEN).unwrap_err();
    assert!(err.to_string().contains("not exceed 2000 characters"));
}

#[test]
fn test_comment_trimming() {
    // Surrounding whitespace is stripped before both the check and storage
    let stored =
        validate_comment("   Pretty good item   ", COMMENT_MIN_LEN, COMMENT_MAX_LEN).unwrap();
    assert_eq!(stored, "Pretty good item");

    // Whitespace doesn't count toward the minimum length
    let padded = format!("   {}   ", "a".repeat(COMMENT_MIN_LEN - 1));
    assert!(validate_comment(&padded, COMMENT_MIN_LEN, COMMENT_MAX_LEN).is_err());
}

#[test]
fn test_blank_comment_is_empty_not_short() {
    let err = validate_comment("", COMMENT_MIN_LEN, COMMENT_MAX_LEN).unwrap_err();
    assert!(err.to_string().contains("cannot be empty"));

    // All-whitespace comments report as empty, not as too short
    let err = validate_comment("    \t\n  ", COMMENT_MIN_LEN, COMMENT_MAX_LEN).unwrap_err();
    assert!(err.to_string().contains("cannot be empty"));
}

#[test]
fn test_comment_length_counts_chars_not_bytes() {
    // Ten multibyte characters satisfy the ten-character minimum
    let comment = "é".repeat(COMMENT_MIN_LEN);
    assert!(comment.len() > COMMENT_MIN_LEN);
    assert!(validate_comment(&comment, COMMENT_MIN_LEN, COMMENT_MAX_LEN).is_ok());
}

#[test]
fn test_ownership() {
    let owner = Uuid::new_v4();
    let other = Uuid::new_v4();

    assert!(validate_ownership(owner, owner).is_ok());

    let err = validate_ownership(owner, other).unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));
}

#[test]
fn test_round_average_one_decimal() {
    assert_eq!(round_average(4.0), 4.0);
    assert_eq!(round_average(4.666666), 4.7);
    assert_eq!(round_average(3.25), 3.3); // half rounds up
    assert_eq!(round_average(3.24), 3.2);
    assert_eq!(round_average(0.0), 0.0);
}

#[test]
fn test_round_average_matches_review_scenario() {
    // One review of 4 -> 4.0; add a 2 -> 3.0; delete the 4 -> 2.0
    assert_eq!(round_average(4.0), 4.0);
    assert_eq!(round_average((4.0 + 2.0) / 2.0), 3.0);
    assert_eq!(round_average(2.0), 2.0);

    // Ratings 5, 4, 4 -> 13/3 = 4.333... -> 4.3
    assert_eq!(round_average(13.0 / 3.0), 4.3);
}

#[test]
fn test_sort_field_parsing() {
    assert_eq!(
        ReviewSortField::parse("createdAt"),
        Some(ReviewSortField::CreatedAt)
    );
    assert_eq!(
        ReviewSortField::parse("rating"),
        Some(ReviewSortField::Rating)
    );
    assert_eq!(
        ReviewSortField::parse("helpfulCount"),
        Some(ReviewSortField::HelpfulCount)
    );
    assert_eq!(ReviewSortField::parse("comment"), None);
    assert_eq!(ReviewSortField::parse(""), None);
}

#[test]
fn test_sort_direction_parsing() {
    assert_eq!(SortDirection::parse("ASC"), Some(SortDirection::Asc));
    assert_eq!(SortDirection::parse("asc"), Some(SortDirection::Asc));
    assert_eq!(SortDirection::parse("DESC"), Some(SortDirection::Desc));
    assert_eq!(SortDirection::parse("desc"), Some(SortDirection::Desc));
    assert_eq!(SortDirection::parse("sideways"), None);
}

#[test]
fn test_order_by_clause() {
    assert_eq!(
        order_by_clause(ReviewSortField::CreatedAt, SortDirection::Desc),
        "r.created_at DESC"
    );
    assert_eq!(
        order_by_clause(ReviewSortField::Rating, SortDirection::Asc),
        "r.rating ASC"
    );
}

#[test]
fn test_helpfulness_sort_breaks_ties_on_recency() {
    // Ties on helpful_count fall back to newest-first so page order is stable
    assert_eq!(
        order_by_clause(ReviewSortField::HelpfulCount, SortDirection::Desc),
        "r.helpful_count DESC, r.created_at DESC"
    );
    assert_eq!(
        order_by_clause(ReviewSortField::HelpfulCount, SortDirection::Asc),
        "r.helpful_count ASC, r.created_at DESC"
    );
}
