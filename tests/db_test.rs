mod common;

use common::create_test_db;
use triviabank::models::NewQuestion;

fn new_question(text: &str, category: i64) -> NewQuestion {
    NewQuestion {
        question: text.to_string(),
        answer: format!("answer to {text}"),
        category,
        difficulty: 2,
    }
}

#[tokio::test]
async fn test_db_connection() {
    let db = create_test_db().await;
    assert!(db.questions().await.unwrap().is_empty());
    assert!(db.categories().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_insert_question_assigns_id_and_echoes_fields() {
    let db = create_test_db().await;

    let created = db
        .insert_question(&new_question("What is 1+1?", 3))
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.question, "What is 1+1?");
    assert_eq!(created.answer, "answer to What is 1+1?");
    assert_eq!(created.category, 3);
    assert_eq!(created.difficulty, 2);
}

#[tokio::test]
async fn test_questions_listed_in_insertion_order() {
    let db = create_test_db().await;

    for i in 1..=5 {
        db.insert_question(&new_question(&format!("Question {i}"), 1))
            .await
            .unwrap();
    }

    let questions = db.questions().await.unwrap();
    assert_eq!(questions.len(), 5);
    for (i, q) in questions.iter().enumerate() {
        assert_eq!(q.question, format!("Question {}", i + 1));
        assert!(i == 0 || questions[i - 1].id < q.id, "ids out of order");
    }
}

#[tokio::test]
async fn test_questions_in_category_ignores_other_categories() {
    let db = create_test_db().await;

    for i in 0..6 {
        db.insert_question(&new_question(&format!("Question {i}"), i % 2))
            .await
            .unwrap();
    }

    let evens = db.questions_in_category(0).await.unwrap();
    assert_eq!(evens.len(), 3);
    assert!(evens.iter().all(|q| q.category == 0));

    let empty = db.questions_in_category(7).await.unwrap();
    assert!(empty.is_empty());
}

// --- Search tests ---

#[tokio::test]
async fn test_search_is_case_insensitive_substring_match() {
    let db = create_test_db().await;

    db.insert_question(&new_question("Whose autobiography is this?", 4))
        .await
        .unwrap();
    db.insert_question(&new_question("What boxer was banned?", 4))
        .await
        .unwrap();

    let hits = db.search_questions("AUTOBIOGRAPHY").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].question, "Whose autobiography is this?");

    let hits = db.search_questions("wha").await.unwrap();
    assert_eq!(hits.len(), 2);
}

#[tokio::test]
async fn test_search_treats_wildcard_characters_literally() {
    let db = create_test_db().await;

    db.insert_question(&new_question("What is 100% of 50?", 1))
        .await
        .unwrap();
    db.insert_question(&new_question("What is half of 50?", 1))
        .await
        .unwrap();

    // `%` must only match a question that actually contains one.
    let hits = db.search_questions("100%").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].question, "What is 100% of 50?");

    let hits = db.search_questions("%").await.unwrap();
    assert_eq!(hits.len(), 1);
}

#[tokio::test]
async fn test_search_without_matches_is_empty() {
    let db = create_test_db().await;

    db.insert_question(&new_question("Question", 1)).await.unwrap();

    let hits = db.search_questions("nothing like this").await.unwrap();
    assert!(hits.is_empty());
}

// --- Delete tests ---

#[tokio::test]
async fn test_delete_question_removes_the_row() {
    let db = create_test_db().await;

    let kept = db.insert_question(&new_question("keep me", 1)).await.unwrap();
    let doomed = db
        .insert_question(&new_question("delete me", 1))
        .await
        .unwrap();

    assert!(db.delete_question(doomed.id).await.unwrap());

    let questions = db.questions().await.unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].id, kept.id);

    // A second delete finds nothing to remove.
    assert!(!db.delete_question(doomed.id).await.unwrap());
}

#[tokio::test]
async fn test_delete_unknown_question_reports_no_removal() {
    let db = create_test_db().await;
    assert!(!db.delete_question(1000).await.unwrap());
}

// --- Category tests ---

#[tokio::test]
async fn test_categories_listed_in_id_order() {
    let db = create_test_db().await;

    db.create_category("Science").await.unwrap();
    db.create_category("Art").await.unwrap();
    db.create_category("Geography").await.unwrap();

    let categories = db.categories().await.unwrap();
    assert_eq!(categories.len(), 3);
    assert_eq!(categories[0].kind, "Science");
    assert_eq!(categories[1].kind, "Art");
    assert_eq!(categories[2].kind, "Geography");
    assert!(categories.windows(2).all(|w| w[0].id < w[1].id));
}
